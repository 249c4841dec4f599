//! pacecalc library — application logic for the running pace calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
