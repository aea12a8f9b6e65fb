//! # foundation_core - Foundation Calculator Support Library
//!
//! `foundation_core` holds the input side of a block-type equipment
//! foundation calculator: the parameter set handed to the analysis engine,
//! its JSON file format, input validation, unit conversion, and the preset
//! cases a new calculation starts from.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every function takes its inputs and returns fresh data
//! - **JSON-First**: parameter sets are plain JSON objects, in file order
//! - **Rich Errors**: structured error types whose messages are operator-ready
//!
//! ## Quick Start
//!
//! ```rust
//! use foundation_core::{convert_units, default_parameters, validate_parameters};
//!
//! let mut params = default_parameters();
//! params.insert("height", convert_units(120.0, "cm", "m").unwrap());
//!
//! let (ok, message) = validate_parameters(&params, &["length", "width", "height"]);
//! assert!(ok, "{message}");
//! ```
//!
//! ## Modules
//!
//! - [`parameters`] - Parameter set type and well-known field names
//! - [`file_io`] - Saving and loading parameter files
//! - [`validation`] - Required-field and numeric checks
//! - [`units`] - Length, force and pressure conversion
//! - [`presets`] - Default parameters and worked examples
//! - [`errors`] - Structured error types

pub mod errors;
pub mod file_io;
pub mod parameters;
pub mod presets;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_parameters, save_parameters, try_load_parameters, try_save_parameters};
pub use parameters::ParameterSet;
pub use presets::{default_parameters, example_cases};
pub use units::{convert_units, UnitFamily};
pub use validation::{check_parameters, validate_parameters};
