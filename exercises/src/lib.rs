//! classics-exercises: small, independent textbook algorithms.
//!
//! None of these modules depend on each other or on the graph crate.

mod error;
pub mod fibonacci;
pub mod gene;
pub mod hanoi;
pub mod otp;
pub mod pi;

pub use error::{ExerciseError, Result};
