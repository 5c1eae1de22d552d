use custattr::decorator::AttributeDecorator;
use custattr::error::AttrError;
use custattr::model::AttributeSet;
use custattr::providers::{Catalog, ProviderCall};
use serde_json::json;

fn catalog() -> Catalog {
    let data = json!({
        "metadata": [
            {"attribute_code": "color", "is_visible": true},
            {"attribute_code": "size", "is_visible": true},
            {"attribute_code": "floor", "is_visible": true},
            {"attribute_code": "internal_code", "is_visible": false},
            {"attribute_code": "checkout_note", "is_visible": true}
        ],
        "attributes": {
            "customer_address": {
                "color": {"used_in_forms": ["customer_address_edit", "adminhtml_customer_address"]},
                "size": {"used_in_forms": ["customer_register_address"]},
                "floor": {"used_in_forms": null},
                "internal_code": {"used_in_forms": ["customer_address_edit"]},
                "checkout_note": {"used_in_forms": ["checkout_form"]}
            }
        },
        "options": {
            "customer_address": {
                "color": [
                    {"value": 1, "label": "Red"},
                    {"value": 2, "label": "Green"},
                    {"value": 3, "label": "Blue"}
                ],
                "size": [
                    {"value": "s", "label": "Small"},
                    {"value": "l"}
                ]
            }
        }
    });
    Catalog::from_json(&data.to_string()).unwrap()
}

fn attributes() -> AttributeSet {
    serde_json::from_value(json!({
        "color": {"attribute_code": "color", "value": "1,3"},
        "size": {"attribute_code": "size", "value": "L"},
        "floor": {"attribute_code": "floor", "value": 4},
        "internal_code": {"attribute_code": "internal_code", "value": "X-1"},
        "checkout_note": {"attribute_code": "checkout_note", "value": "leave at door"},
        "nickname": {"attribute_code": "nickname", "value": ""}
    }))
    .unwrap()
}

#[test]
fn decorates_a_full_address() {
    let catalog = catalog();
    let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog);

    let out = decorator.filter_visible(attributes()).unwrap();

    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({
            "color": {"attribute_code": "color", "value": "1,3", "label": "Red, Blue"},
            "size": {"attribute_code": "size", "value": "L", "label": "l"},
            "floor": {"attribute_code": "floor", "value": "4"},
            "nickname": {"attribute_code": "nickname", "value": ""}
        })
    );
}

#[test]
fn second_pass_changes_nothing() {
    let catalog = catalog();
    let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog);

    let once = decorator.filter_visible(attributes()).unwrap();
    let twice = decorator.filter_visible(once.clone()).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn empty_input_stays_empty() {
    let catalog = catalog();
    let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog);

    assert!(decorator.filter_visible(AttributeSet::new()).unwrap().is_empty());
}

#[test]
fn option_failure_discards_the_whole_call() {
    let catalog = catalog().fail_on(
        ProviderCall::Options,
        AttrError::State,
        "option source is not configured",
    );
    let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog);

    let err = decorator.filter_visible(attributes()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid state: option source is not configured");
}
