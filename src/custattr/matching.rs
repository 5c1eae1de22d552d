//! Option value matching.
//!
//! A record stores its selected options as a comma-separated string, while option
//! lists may hold their values as numbers or text in any case. Both sides are
//! normalized before they are compared:
//!
//! - integer text (surrounding whitespace allowed) is rendered as a canonical
//!   integer, so `"01"` and `" 3"` match options `1` and `3`, while ids past
//!   2^53 keep their full precision
//! - other numeric text goes through `f64`, so `"1.0"` matches option `1`
//! - any other text is lowercased as-is, making the comparison case-insensitive
//!
//! Tokens are never trimmed: `"1, 2"` yields `"1"` and `" 2"`. The second one
//! still matches option `2` because it reads as a number, but `"a, b"` yields a
//! `" b"` that matches nothing.

/// Integers at or below this magnitude survive a round trip through `f64`.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Normalize a raw option value or token for comparison.
pub fn normalize(raw: &str) -> String {
    let numeric = raw.trim();

    if let Ok(n) = numeric.parse::<i128>() {
        return n.to_string();
    }

    match numeric.parse::<f64>() {
        Ok(n) if n.is_finite() => {
            if n.fract() == 0.0 && n.abs() <= MAX_EXACT_F64_INT {
                // -0 and 0 are the same option
                (n as i64).to_string()
            } else {
                n.to_string()
            }
        }
        _ => raw.to_lowercase(),
    }
}

/// The normalized tokens of a stored multi-value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<String>);

impl Tokens {
    /// Split a stored value on `,` and normalize every piece.
    pub fn split(value: &str) -> Self {
        Self(value.split(',').map(normalize).collect())
    }

    /// Whether any token matches the given option value.
    pub fn option_matches(&self, option_value: &str) -> bool {
        let wanted = normalize(option_value);
        self.0.iter().any(|token| *token == wanted)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_numbers() {
        assert_eq!(normalize("1"), "1");
        assert_eq!(normalize("01"), "1");
        assert_eq!(normalize("+7"), "7");
        assert_eq!(normalize("1.0"), "1");
        assert_eq!(normalize("1.50"), "1.5");
        assert_eq!(normalize("-0"), "0");
        assert_eq!(normalize("-0.0"), "0");
    }

    #[test]
    fn normalize_numbers_ignores_surrounding_whitespace() {
        assert_eq!(normalize(" 3"), "3");
        assert_eq!(normalize("3 "), "3");
        assert_eq!(normalize("\t1.0\n"), "1");
    }

    #[test]
    fn normalize_keeps_large_integer_precision() {
        assert_eq!(normalize("9007199254740993"), "9007199254740993");
        assert_ne!(normalize("9007199254740993"), normalize("9007199254740992"));
        assert_eq!(normalize("18446744073709551617"), "18446744073709551617");
    }

    #[test]
    fn normalize_text_is_lowercased_untrimmed() {
        assert_eq!(normalize("Red"), "red");
        assert_eq!(normalize(" Red"), " red");
        assert_eq!(normalize("NaN"), "nan");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" "), " ");
    }

    #[test]
    fn numeric_tokens_match_despite_spaces() {
        let tokens = Tokens::split("1, 2");
        assert!(tokens.option_matches("1"));
        assert!(tokens.option_matches("2"));
    }

    #[test]
    fn text_tokens_are_not_trimmed() {
        let tokens = Tokens::split("a, b");
        assert!(tokens.option_matches("a"));
        assert!(!tokens.option_matches("b"));
        assert!(tokens.option_matches(" b"));
    }

    #[test]
    fn large_ids_do_not_collide() {
        let tokens = Tokens::split("9007199254740993");
        assert!(tokens.option_matches("9007199254740993"));
        assert!(!tokens.option_matches("9007199254740992"));
    }

    #[test]
    fn split_keeps_empty_pieces() {
        let tokens = Tokens::split("1,,3");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.option_matches(""));
    }

    #[test]
    fn option_matches_across_representations() {
        let tokens = Tokens::split("01,BLUE");
        assert!(tokens.option_matches("1"));
        assert!(tokens.option_matches("blue"));
        assert!(!tokens.option_matches("2"));
    }

    #[test]
    fn single_value_is_one_token() {
        let tokens = Tokens::split("42");
        assert_eq!(tokens.len(), 1);
        assert!(!tokens.is_empty());
        assert!(tokens.option_matches("42"));
    }
}
