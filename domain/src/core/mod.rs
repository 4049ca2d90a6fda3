//! Core domain types: models and errors

pub mod error;
pub mod model;
