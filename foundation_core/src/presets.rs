//! # Default and Example Parameters
//!
//! Starting points for a new calculation: a blank default case and two
//! worked examples (a centrifugal pump base and a reciprocating compressor
//! base). Values are in SI: meters, MPa for concrete, kPa for soil bearing
//! capacity, kN/m³ for the subgrade coefficient, kN for loads, Hz, and kg.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::presets::{default_parameters, example_cases};
//! use foundation_core::validation::validate_parameters;
//!
//! let (ok, _) = validate_parameters(&default_parameters(), &["length", "width", "height"]);
//! assert!(ok);
//! assert_eq!(example_cases().len(), 2);
//! ```

use chrono::{Local, NaiveDate};

use crate::parameters::*;

/// Value of the `unit` field on every preset
pub const UNIT_SYSTEM: &str = "SI";

/// Date format used for the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default parameters stamped with today's local date.
pub fn default_parameters() -> ParameterSet {
    default_parameters_on(Local::now().date_naive())
}

/// Default parameters stamped with `date`.
pub fn default_parameters_on(date: NaiveDate) -> ParameterSet {
    ParameterSet::new()
        .with(NAME, "新计算")
        .with(DATE, date.format(DATE_FORMAT).to_string())
        .with(DESCRIPTION, "大块式设备基础计算")
        .with(UNIT, UNIT_SYSTEM)
        .with(LENGTH, 3.0)
        .with(WIDTH, 2.0)
        .with(HEIGHT, 1.0)
        .with(BURIED_DEPTH, 0.5)
        .with(CONCRETE_STRENGTH, 30)
        .with(ELASTIC_MODULUS, 30000)
        .with(SOIL_BEARING_CAPACITY, 200)
        .with(SOIL_COEFFICIENT, 80000)
        .with(STATIC_LOAD, 500)
        .with(DYNAMIC_LOAD, 50)
        .with(FREQUENCY, 10)
        .with(LOAD_ECCENTRICITY_X, 0)
        .with(LOAD_ECCENTRICITY_Y, 0)
        .with(FRICTION_COEFFICIENT, 0.45)
        .with(DAMPING_RATIO, 0.05)
        .with(EQUIPMENT_MASS, 20000)
}

fn pump_foundation() -> ParameterSet {
    ParameterSet::new()
        .with(NAME, "水泵基础")
        .with(DESCRIPTION, "离心泵设备基础示例")
        .with(UNIT, UNIT_SYSTEM)
        .with(LENGTH, 2.0)
        .with(WIDTH, 1.2)
        .with(HEIGHT, 0.8)
        .with(BURIED_DEPTH, 0.4)
        .with(CONCRETE_STRENGTH, 25)
        .with(ELASTIC_MODULUS, 28000)
        .with(SOIL_BEARING_CAPACITY, 180)
        .with(SOIL_COEFFICIENT, 60000)
        .with(STATIC_LOAD, 120)
        .with(DYNAMIC_LOAD, 15)
        .with(FREQUENCY, 25)
        .with(LOAD_ECCENTRICITY_X, 0.1)
        .with(LOAD_ECCENTRICITY_Y, 0)
        .with(FRICTION_COEFFICIENT, 0.4)
        .with(DAMPING_RATIO, 0.05)
        .with(EQUIPMENT_MASS, 5000)
}

fn compressor_foundation() -> ParameterSet {
    ParameterSet::new()
        .with(NAME, "压缩机基础")
        .with(DESCRIPTION, "往复式压缩机基础示例")
        .with(UNIT, UNIT_SYSTEM)
        .with(LENGTH, 4.0)
        .with(WIDTH, 2.5)
        .with(HEIGHT, 1.5)
        .with(BURIED_DEPTH, 0.8)
        .with(CONCRETE_STRENGTH, 30)
        .with(ELASTIC_MODULUS, 30000)
        .with(SOIL_BEARING_CAPACITY, 250)
        .with(SOIL_COEFFICIENT, 90000)
        .with(STATIC_LOAD, 800)
        .with(DYNAMIC_LOAD, 120)
        .with(FREQUENCY, 8)
        .with(LOAD_ECCENTRICITY_X, 0.2)
        .with(LOAD_ECCENTRICITY_Y, 0.1)
        .with(FRICTION_COEFFICIENT, 0.45)
        .with(DAMPING_RATIO, 0.08)
        .with(EQUIPMENT_MASS, 30000)
}

/// The worked examples, pump first then compressor.
///
/// Each call builds fresh sets, so callers may modify them freely.
pub fn example_cases() -> Vec<ParameterSet> {
    vec![pump_foundation(), compressor_foundation()]
}

/// Look up a worked example by its `name` field.
pub fn example_case(name: &str) -> Option<ParameterSet> {
    example_cases()
        .into_iter()
        .find(|case| case.get_str(NAME) == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_parameters;

    #[test]
    fn test_defaults_have_all_standard_fields() {
        let params = default_parameters();
        for field in STANDARD_FIELDS {
            assert!(params.contains_key(field), "missing {field}");
        }
        assert_eq!(params.len(), STANDARD_FIELDS.len());
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, STANDARD_FIELDS.to_vec());
    }

    #[test]
    fn test_default_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let params = default_parameters_on(date);
        assert_eq!(params.get_str(DATE), Some("2024-03-07"));

        let today = default_parameters();
        let stamped = today.get_str(DATE).unwrap();
        assert!(NaiveDate::parse_from_str(stamped, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_defaults_equal_apart_from_date() {
        let a = default_parameters_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut b = default_parameters_on(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_ne!(a, b);
        b.insert(DATE, "2024-01-01");
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_text_fields() {
        let params = default_parameters();
        assert_eq!(params.get_str(NAME), Some("新计算"));
        assert_eq!(params.get_str(DESCRIPTION), Some("大块式设备基础计算"));
        assert_eq!(params.get_str(UNIT), Some(UNIT_SYSTEM));
    }

    #[test]
    fn test_default_values() {
        let params = default_parameters();
        assert_eq!(params.get_f64(LENGTH), Some(3.0));
        assert_eq!(params.get_f64(SOIL_BEARING_CAPACITY), Some(200.0));
        assert_eq!(params.get_f64(EQUIPMENT_MASS), Some(20000.0));
        assert_eq!(params.get_f64(DAMPING_RATIO), Some(0.05));
    }

    #[test]
    fn test_two_examples_in_order() {
        let cases = example_cases();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].get_str(NAME), Some("水泵基础"));
        assert_eq!(cases[1].get_str(NAME), Some("压缩机基础"));
    }

    #[test]
    fn test_examples_match_default_schema() {
        let defaults = default_parameters();
        for case in example_cases() {
            for key in case.keys() {
                assert!(defaults.contains_key(key), "unexpected key {key}");
            }
            for field in STANDARD_FIELDS.iter().filter(|f| **f != DATE) {
                assert!(case.contains_key(field), "missing {field}");
            }
        }
    }

    #[test]
    fn test_presets_pass_validation() {
        assert!(check_parameters(&default_parameters(), &STANDARD_FIELDS).is_ok());
        for case in example_cases() {
            assert!(check_parameters(&case, &[LENGTH, WIDTH, HEIGHT, STATIC_LOAD]).is_ok());
        }
    }

    #[test]
    fn test_examples_are_independent() {
        let mut cases = example_cases();
        cases[0].insert(LENGTH, 99.0);
        assert_eq!(example_cases()[0].get_f64(LENGTH), Some(2.0));
    }

    #[test]
    fn test_example_lookup() {
        let compressor = example_case("压缩机基础").unwrap();
        assert_eq!(compressor.get_f64(FREQUENCY), Some(8.0));
        assert!(example_case("Compressor Foundation").is_none());
    }
}
