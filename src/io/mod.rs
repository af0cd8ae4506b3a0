//! Input/output helpers.
//!
//! - sampled curve export (CSV) (`export`)
//! - response JSON read/write (`response_file`)

pub mod export;
pub mod response_file;

pub use export::*;
pub use response_file::*;
