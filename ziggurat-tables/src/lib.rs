//! # Ziggurat tables: layer edges for a normal Ziggurat sampler
//!
//! Precomputes the `X` (layer edge) and `R` (edge ratio) tables that seed a
//! Ziggurat normal sampler in the style of Marsaglia and Tsang. This crate
//! only generates the tables; it contains no sampler and no random number
//! generator.
//!
//! ```
//! use ziggurat_tables::{Format, ZigguratTables};
//!
//! let tables = ZigguratTables::standard().unwrap();
//! assert_eq!(tables.x().len(), 129);
//!
//! let mut out = Vec::new();
//! Format::Plain.emit(&tables, &mut out).unwrap();
//! assert!(out.starts_with(b"X:\n"));
//! ```

pub mod builder;
pub mod constants;
pub mod emit;
pub mod error;
pub mod params;

pub use builder::ZigguratTables;
pub use emit::Format;
pub use error::TableError;
pub use params::ZigguratParams;
