//! # Parameter Validation
//!
//! Two passes over a [`ParameterSet`]:
//!
//! 1. every required field must be present (first missing field, in the
//!    order given, is reported);
//! 2. every remaining value must read as a number, and must not be negative
//!    unless the field is a signed one (load eccentricities).
//!
//! Text fields (`name`, `description`, `date`) and the `unit` field are
//! skipped in the second pass.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::parameters::ParameterSet;
//! use foundation_core::validation::validate_parameters;
//!
//! let params = ParameterSet::new().with("height", -1);
//! assert_eq!(
//!     validate_parameters(&params, &["height"]),
//!     (false, "parameter height cannot be negative".to_string())
//! );
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::parameters::{is_unit_field, value_as_f64, ParameterSet, SIGNED_FIELDS, TEXT_FIELDS};

/// Check a parameter set, returning the first violation found.
pub fn check_parameters<S: AsRef<str>>(params: &ParameterSet, required_fields: &[S]) -> CalcResult<()> {
    for field in required_fields {
        let field = field.as_ref();
        if !params.contains_key(field) {
            return Err(CalcError::missing_parameter(field));
        }
    }

    for (key, value) in params.iter() {
        if TEXT_FIELDS.contains(&key) || is_unit_field(key) {
            continue;
        }

        let number = value_as_f64(value).ok_or_else(|| CalcError::not_a_number(key))?;
        if number < 0.0 && !SIGNED_FIELDS.contains(&key) {
            return Err(CalcError::negative_value(key));
        }
    }

    Ok(())
}

/// Validate a parameter set, returning `(true, "")` or `(false, message)`.
///
/// Never fails; the message is the `Display` text of the first violation.
pub fn validate_parameters<S: AsRef<str>>(params: &ParameterSet, required_fields: &[S]) -> (bool, String) {
    match check_parameters(params, required_fields) {
        Ok(()) => (true, String::new()),
        Err(e) => (false, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{HEIGHT, LENGTH, NAME, STATIC_LOAD, WIDTH};
    use serde_json::json;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_missing_required_field() {
        let params = ParameterSet::new();
        assert_eq!(
            validate_parameters(&params, &["name"]),
            (false, "missing required parameter: name".to_string())
        );
    }

    #[test]
    fn test_first_missing_field_in_required_order() {
        let params = ParameterSet::new().with(LENGTH, 3.0);
        let result = check_parameters(&params, &[LENGTH, WIDTH, HEIGHT]);
        assert_eq!(result, Err(CalcError::missing_parameter(WIDTH)));
    }

    #[test]
    fn test_presence_checked_before_values() {
        let params = ParameterSet::new().with(HEIGHT, -1);
        let (ok, message) = validate_parameters(&params, &[STATIC_LOAD]);
        assert!(!ok);
        assert_eq!(message, "missing required parameter: static_load");
    }

    #[test]
    fn test_negative_value_rejected() {
        let params = ParameterSet::new().with(HEIGHT, -1);
        assert_eq!(
            validate_parameters(&params, &NONE),
            (false, "parameter height cannot be negative".to_string())
        );
    }

    #[test]
    fn test_negative_eccentricity_allowed() {
        let params = ParameterSet::new()
            .with("load_eccentricity_x", -5)
            .with("load_eccentricity_y", "-0.2");
        assert_eq!(validate_parameters(&params, &NONE), (true, String::new()));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let params = ParameterSet::new().with(HEIGHT, "abc");
        assert_eq!(
            validate_parameters(&params, &NONE),
            (false, "parameter height is not a valid number".to_string())
        );
    }

    #[test]
    fn test_null_and_nested_values_rejected() {
        let params = ParameterSet::new().with(WIDTH, json!(null));
        assert_eq!(check_parameters(&params, &NONE), Err(CalcError::not_a_number(WIDTH)));

        let params = ParameterSet::new().with(WIDTH, json!([2.0]));
        assert_eq!(check_parameters(&params, &NONE), Err(CalcError::not_a_number(WIDTH)));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let params = ParameterSet::new().with(LENGTH, "3.5").with(WIDTH, " 2 ");
        assert!(check_parameters(&params, &NONE).is_ok());
    }

    #[test]
    fn test_text_and_unit_fields_skipped() {
        let params = ParameterSet::new()
            .with(NAME, "水泵基础")
            .with("description", "-")
            .with("date", "2024-05-01")
            .with("unit", "SI");
        assert!(check_parameters(&params, &[NAME]).is_ok());
    }

    #[test]
    fn test_only_the_unit_field_is_skipped() {
        let params = ParameterSet::new().with("mass_per_unit", -3.0);
        assert_eq!(
            validate_parameters(&params, &NONE),
            (false, "parameter mass_per_unit cannot be negative".to_string())
        );

        let params = ParameterSet::new().with("force_unit", "kN");
        assert_eq!(
            validate_parameters(&params, &NONE),
            (false, "parameter force_unit is not a valid number".to_string())
        );
    }

    #[test]
    fn test_values_checked_in_insertion_order() {
        let params = ParameterSet::new()
            .with(WIDTH, "wide")
            .with(LENGTH, -3.0);
        assert_eq!(check_parameters(&params, &NONE), Err(CalcError::not_a_number(WIDTH)));

        let params = ParameterSet::new()
            .with(LENGTH, -3.0)
            .with(WIDTH, "wide");
        assert_eq!(check_parameters(&params, &NONE), Err(CalcError::negative_value(LENGTH)));
    }

    #[test]
    fn test_zero_and_nan_pass() {
        let params = ParameterSet::new().with(HEIGHT, 0).with(WIDTH, "NaN");
        assert!(check_parameters(&params, &NONE).is_ok());
    }

    #[test]
    fn test_accepts_owned_required_list() {
        let required: Vec<String> = vec![LENGTH.to_string()];
        let params = ParameterSet::new().with(LENGTH, 1.0);
        assert!(check_parameters(&params, &required).is_ok());
    }
}
