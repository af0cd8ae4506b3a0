//! Reporting utilities: resonance summary and sampled response tables.

pub mod format;

pub use format::*;
