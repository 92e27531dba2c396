//! Check evaluation
//!
//! Every predicate here is pure: same input, same verdict, no shared
//! mutable state. Checks receive the already-coerced `FieldValue`; pairing
//! a check with an incompatible field type never satisfies the check.

use std::sync::OnceLock;

use regex::Regex;

use crate::taxid;

use super::types::CheckKind;
use super::value::FieldValue;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

/// Well-formedness check for email addresses.
///
/// Anchored at both ends: local part of `[alnum . _ % + -]`, an `@`, a
/// domain containing at least one dot, and a final label of two or more
/// letters. Case-sensitive as written. No DNS or deliverability checks.
pub fn email_is_valid(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    email_regex().is_match(input)
}

impl CheckKind {
    /// Evaluates this check against a coerced value.
    pub fn evaluate(&self, value: &FieldValue) -> bool {
        match self {
            CheckKind::LengthRange { min, max } => match value {
                FieldValue::Text(s) => {
                    let len = s.chars().count();
                    len >= *min && len <= *max
                }
                _ => false,
            },
            CheckKind::MinFloat { bound } => match value {
                FieldValue::Float(f) => *f >= *bound,
                FieldValue::Integer(i) => (*i as f64) >= *bound,
                FieldValue::Text(_) => false,
            },
            CheckKind::MinInt { bound } => match value {
                FieldValue::Integer(i) => *i >= *bound,
                _ => false,
            },
            CheckKind::MaxInt { bound } => match value {
                FieldValue::Integer(i) => *i <= *bound,
                _ => false,
            },
            CheckKind::TaxId => match value {
                FieldValue::Text(s) => taxid::is_valid(s),
                _ => false,
            },
            CheckKind::Email => match value {
                FieldValue::Text(s) => email_is_valid(s),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.into())
    }

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(email_is_valid("a@b.com"));
        assert!(email_is_valid("first.last+tag@sub.domain.org"));
        assert!(email_is_valid("user_name%x@host-name.co"));
    }

    #[test]
    fn test_email_rejects_missing_tld() {
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("a@b.c"));
    }

    #[test]
    fn test_email_rejects_empty_and_whitespace() {
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("   "));
    }

    #[test]
    fn test_email_rejects_partial_matches() {
        // Anchored: surrounding text must not slip through.
        assert!(!email_is_valid("see a@b.com please"));
        assert!(!email_is_valid("a@b.com\nx"));
    }

    #[test]
    fn test_length_range() {
        let check = CheckKind::LengthRange { min: 1, max: 5 };
        assert!(check.evaluate(&text("abc")));
        assert!(check.evaluate(&text("a")));
        assert!(!check.evaluate(&text("")));
        assert!(!check.evaluate(&text("abcdef")));
    }

    #[test]
    fn test_length_range_counts_chars_not_bytes() {
        let check = CheckKind::LengthRange { min: 1, max: 4 };
        assert!(check.evaluate(&text("ação")));
    }

    #[test]
    fn test_min_float() {
        let check = CheckKind::MinFloat { bound: 0.0 };
        assert!(check.evaluate(&FieldValue::Float(0.0)));
        assert!(check.evaluate(&FieldValue::Float(10.5)));
        assert!(!check.evaluate(&FieldValue::Float(-0.01)));
        assert!(check.evaluate(&FieldValue::Integer(3)));
    }

    #[test]
    fn test_int_bounds() {
        let min = CheckKind::MinInt { bound: 1 };
        let max = CheckKind::MaxInt { bound: 150 };
        assert!(!min.evaluate(&FieldValue::Integer(0)));
        assert!(min.evaluate(&FieldValue::Integer(1)));
        assert!(max.evaluate(&FieldValue::Integer(150)));
        assert!(!max.evaluate(&FieldValue::Integer(151)));
    }

    #[test]
    fn test_tax_id_check() {
        let check = CheckKind::TaxId;
        assert!(check.evaluate(&text("111.444.777-35")));
        assert!(!check.evaluate(&text("111.111.111-11")));
    }

    #[test]
    fn test_mistyped_value_never_satisfies() {
        assert!(!CheckKind::Email.evaluate(&FieldValue::Integer(5)));
        assert!(!CheckKind::MinInt { bound: 0 }.evaluate(&text("3")));
    }
}
