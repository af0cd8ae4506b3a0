//! Closed-form vibration helpers and sampling grids.

pub mod grid;
pub mod response;

pub use grid::*;
pub use response::*;
