//! # RamDB Value
//!
//! Dynamic field values and documents for RamDB.
//!
//! A [`Document`] is an ordered field/value mapping; a [`Value`] is any
//! field value. Both convert to and from `serde_json`.
//!
//! ## Comparison Rules
//!
//! - Integers and floats compare numerically with each other
//! - Text compares by byte order
//! - Booleans order `false < true`
//! - Null, arrays and maps support equality only
//! - Any other pairing is incompatible
//!
//! ## Usage
//!
//! ```
//! use ramdb_value::{Document, Value};
//!
//! let person = Document::new().with("name", "Alex").with("age", 15);
//! assert_eq!(person.get("age"), Some(&Value::Integer(15)));
//! assert!(Value::Integer(15).compare(&Value::Float(15.5)).is_some());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod error;
mod json;
mod value;

pub use document::Document;
pub use error::{ValueError, ValueResult};
pub use value::Value;
