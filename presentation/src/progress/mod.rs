//! Progress reporters

pub mod reporter;

pub use reporter::{SimpleProgress, SpinnerProgress};
