//! Domain layer for Stopcast
//!
//! Contains the value objects shared across all layers. This layer has no
//! external service dependencies and defines the ubiquitous language.

pub mod value_objects;

pub use value_objects::*;
