//! Command synthesis for pods and their containers.

pub mod container;
pub mod pod;

pub use container::{Container, validate_container};
