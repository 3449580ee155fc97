//! # RamDB Testkit
//!
//! Test utilities for RamDB.
//!
//! This crate provides:
//! - The `people` fixture set and database helpers
//! - Property-based test generators using proptest
//! - Stress testing utilities
//!
//! ## Usage
//!
//! ```rust
//! use ramdb_testkit::prelude::*;
//! use ramdb_core::Query;
//!
//! with_people(|db, _| {
//!     let teens = db.count(&Query::new(PEOPLE).less_than("age", 20));
//!     assert_eq!(teens, 3);
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
