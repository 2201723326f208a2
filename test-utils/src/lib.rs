//! Helpers shared by the tests of the `phyphox-export` workspace.

pub mod csv_loader;
pub mod fixtures;
pub mod sheet_mock;
