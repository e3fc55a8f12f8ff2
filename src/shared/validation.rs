//! Form field validation as static rule tables.
//!
//! Every rule of a table is evaluated, so a value that breaks several rules
//! reports all of them, in table order.

use serde::Serialize;
use validator::ValidateLength;

/// A single check applied to a form field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NotEmpty,
    /// Inclusive bounds, counted in characters
    Length { min: u64, max: u64 },
}

impl Rule {
    fn passes(&self, value: &str) -> bool {
        match *self {
            Rule::NotEmpty => !value.is_empty(),
            Rule::Length { min, max } => value.validate_length(Some(min), Some(max), None),
        }
    }
}

/// A `(field, rule, message)` triple
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

/// One failed rule, ready to be shown next to the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Accumulated validation failures of one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.message)
    }
}

/// Evaluate every rule in `rules` against the value of its field.
///
/// `value_of` maps a field name to the submitted value; unknown fields are
/// treated as empty.
pub fn check<'a>(rules: &[FieldRule], value_of: impl Fn(&str) -> Option<&'a str>) -> FieldErrors {
    let errors = rules
        .iter()
        .filter(|r| !r.rule.passes(value_of(r.field).unwrap_or("")))
        .map(|r| FieldError {
            field: r.field,
            message: r.message,
        })
        .collect();

    FieldErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[FieldRule] = &[
        FieldRule {
            field: "name",
            rule: Rule::NotEmpty,
            message: "name required",
        },
        FieldRule {
            field: "name",
            rule: Rule::Length { min: 5, max: 32 },
            message: "name length",
        },
    ];

    fn check_name(name: &str) -> FieldErrors {
        check(RULES, |field| (field == "name").then_some(name))
    }

    #[test]
    fn test_empty_value_reports_every_failed_rule() {
        let errors = check_name("");
        assert_eq!(
            errors.messages().collect::<Vec<_>>(),
            vec!["name required", "name length"]
        );
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(check_name("abcde").is_empty());
        assert!(check_name(&"x".repeat(32)).is_empty());
        assert_eq!(check_name("abcd").len(), 1);
        assert_eq!(check_name(&"x".repeat(33)).len(), 1);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 6 bytes
        assert!(check_name("Giày!").is_empty());
    }

    #[test]
    fn test_unknown_field_is_treated_as_empty() {
        let errors = check(RULES, |_| None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_errors_serialize_as_a_list() {
        let value = serde_json::to_value(check_name("abc")).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "field": "name", "message": "name length" }])
        );
    }
}
