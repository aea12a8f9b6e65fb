//! # Parameter Sets
//!
//! A [`ParameterSet`] is the bag of named inputs handed to the foundation
//! calculation engine: geometry, material and soil properties, loads, and a
//! few descriptive text fields. No schema is enforced here. Callers agree on
//! the key names listed as constants in this module.
//!
//! Values are plain JSON values, so a set read back from disk keeps integers
//! as integers and strings as strings. Keys iterate in insertion order, which
//! is also the order they were written to (or read from) a file.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::parameters::{ParameterSet, LENGTH, NAME};
//!
//! let mut params = ParameterSet::new();
//! params.insert(NAME, "Fan base");
//! params.insert(LENGTH, 2.5);
//!
//! assert_eq!(params.get_str(NAME), Some("Fan base"));
//! assert_eq!(params.get_f64(LENGTH), Some(2.5));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";
pub const DATE: &str = "date";
pub const UNIT: &str = "unit";

// Geometry (m)
pub const LENGTH: &str = "length";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const BURIED_DEPTH: &str = "buried_depth";

// Materials and soil
pub const CONCRETE_STRENGTH: &str = "concrete_strength";
pub const ELASTIC_MODULUS: &str = "elastic_modulus";
pub const SOIL_BEARING_CAPACITY: &str = "soil_bearing_capacity";
pub const SOIL_COEFFICIENT: &str = "soil_coefficient";

// Loads
pub const STATIC_LOAD: &str = "static_load";
pub const DYNAMIC_LOAD: &str = "dynamic_load";
pub const FREQUENCY: &str = "frequency";
pub const LOAD_ECCENTRICITY_X: &str = "load_eccentricity_x";
pub const LOAD_ECCENTRICITY_Y: &str = "load_eccentricity_y";

// Other
pub const FRICTION_COEFFICIENT: &str = "friction_coefficient";
pub const DAMPING_RATIO: &str = "damping_ratio";
pub const EQUIPMENT_MASS: &str = "equipment_mass";

/// Every field a complete parameter set carries, in presentation order.
pub const STANDARD_FIELDS: [&str; 20] = [
    NAME,
    DATE,
    DESCRIPTION,
    UNIT,
    LENGTH,
    WIDTH,
    HEIGHT,
    BURIED_DEPTH,
    CONCRETE_STRENGTH,
    ELASTIC_MODULUS,
    SOIL_BEARING_CAPACITY,
    SOIL_COEFFICIENT,
    STATIC_LOAD,
    DYNAMIC_LOAD,
    FREQUENCY,
    LOAD_ECCENTRICITY_X,
    LOAD_ECCENTRICITY_Y,
    FRICTION_COEFFICIENT,
    DAMPING_RATIO,
    EQUIPMENT_MASS,
];

/// Descriptive fields that are never read as numbers.
pub const TEXT_FIELDS: [&str; 3] = [NAME, DESCRIPTION, DATE];

/// Numeric fields that may legitimately be negative.
///
/// New signed fields must be added here explicitly, otherwise validation
/// rejects their negative values.
pub const SIGNED_FIELDS: [&str; 2] = [LOAD_ECCENTRICITY_X, LOAD_ECCENTRICITY_Y];

/// True only for the `unit` field itself.
pub fn is_unit_field(key: &str) -> bool {
    key == UNIT
}

/// Read a JSON value as a float the way parameter forms expect.
///
/// Numbers convert directly, booleans count as 0/1, and strings are parsed
/// after trimming surrounding whitespace. Anything else is not numeric.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Ordered mapping from parameter name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Map<String, Value>);

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        ParameterSet(Map::new())
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a value as a float (see [`value_as_f64`]).
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(value_as_f64)
    }

    /// Get a value if it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a value. Later keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` onto this set.
    ///
    /// Existing keys are overwritten in place; keys only present in `other`
    /// are appended in `other`'s order.
    pub fn merge(&mut self, other: ParameterSet) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ParameterSet {
    fn from(map: Map<String, Value>) -> Self {
        ParameterSet(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        ParameterSet(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
