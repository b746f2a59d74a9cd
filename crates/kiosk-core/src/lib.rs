//! # kiosk-core
//!
//! Shared library for the kiosk remote-control client containing the command
//! envelope, the catalogue of device commands, response inspection, and the
//! error taxonomy.
//!
//! This crate has zero dependencies on sockets, HTTP libraries, or async
//! runtimes.  Everything in it can be exercised with plain `#[test]`s.
//!
//! # Architecture overview (for beginners)
//!
//! A kiosk browser running on a wall-mounted tablet exposes a small HTTP API
//! on the local network.  Every request is a `GET` whose query string carries
//! the command name, the admin password, and a few command-specific values:
//!
//! ```text
//! GET http://192.168.1.10:2323/?cmd=loadUrl&password=secret&type=json&url=...
//! ```
//!
//! This crate defines:
//!
//! - **`protocol`** – How a command becomes query parameters (the
//!   [`Envelope`]), which commands exist ([`Command`]), the typed parameter
//!   sets each command accepts, and how a decoded JSON body is checked for the
//!   in-band `{"status": "Error"}` marker.
//!
//! - **`domain`** – The [`DeviceInfo`] snapshot returned by the `deviceInfo`
//!   command, with convenience lookups for commonly reported fields.
//!
//! - **`error`** – [`KioskError`], the single error type every operation
//!   returns.

pub mod domain;
pub mod error;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `kiosk_core::Envelope` instead of `kiosk_core::protocol::envelope::Envelope`.
pub use domain::device_info::DeviceInfo;
pub use error::{KioskError, SessionError};
pub use protocol::command::{
    ApplicationParams, Command, CommandArgs, NoParams, RawParams, SettingParams, SoundParams,
    UrlParams, VolumeParams,
};
pub use protocol::envelope::Envelope;
pub use protocol::params::ParamValue;
pub use protocol::response::check_response;
