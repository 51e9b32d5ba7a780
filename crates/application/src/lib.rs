//! Application layer - the resolution pipeline and its ports
//!
//! Contains the nearest-stop resolution pipeline, the port traits it
//! consumes, and the application-level error taxonomy. Adapters in the
//! infrastructure layer implement the ports on top of the integration
//! clients.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
