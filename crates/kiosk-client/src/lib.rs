//! kiosk-client library crate.
//!
//! Async client for the kiosk browser's HTTP remote-control API, plus the
//! pieces the `kioskctl` binary is built from.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │  client.load_url("http://...")
//!   ▼
//! [kiosk-client]
//!   ├── application/
//!   │     └── client/      KioskClient: named operations, error marker
//!   │                      check, cached device info
//!   └── infrastructure/
//!         ├── transport/   RequestHandler: envelope → GET → status → JSON
//!         ├── session/     HttpSession seam (reqwest::Client, MockSession)
//!         └── config/      TOML configuration for the binary
//!   │
//!   ▼
//! kiosk device  (GET http://host:port/?cmd=...&password=...&type=json)
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `infrastructure::transport` and `kiosk-core`.
//! - `infrastructure` depends on `kiosk-core`, `reqwest` and `serde`.
//! - Nothing here installs a logger or a runtime; that is `main.rs`'s job.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kiosk_client::application::KioskClient;
//!
//! # async fn example() -> Result<(), kiosk_core::KioskError> {
//! let session = Arc::new(reqwest::Client::new());
//! let client = KioskClient::new(session, "192.168.1.10", 2323, "secret");
//!
//! let info = client.get_device_info().await?;
//! println!("{:?}", info.device_name());
//! client.load_url("http://dashboard.local/").await?;
//! # Ok(())
//! # }
//! ```

/// Application layer: the command client.
pub mod application;

/// Infrastructure layer: HTTP session, transport adapter, configuration.
pub mod infrastructure;

pub use application::KioskClient;
pub use kiosk_core::{DeviceInfo, KioskError};
