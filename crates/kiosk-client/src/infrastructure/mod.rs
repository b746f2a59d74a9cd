//! Infrastructure layer for kiosk-client.
//!
//! Handles all I/O: sending GET requests to the device and reading the
//! configuration file used by `kioskctl`.
//!
//! # What does NOT belong here?
//!
//! - The command catalogue and error-marker rules (that is `kiosk-core`)
//! - The named operations and the device-info cache (that is the application
//!   layer)

pub mod config;
pub mod session;
pub mod transport;

pub use session::{HttpSession, SessionRequest, SessionResponse};
pub use transport::RequestHandler;
