//! Configuration kinds and their fingerprint tables.
//!
//! A kind's table is an ordered list of [`Binding`]s: which field participates,
//! which canonicalizer renders it, and whether it may be absent. Tables are
//! static and never depend on record content.

mod tables;
mod types;

pub use types::*;
