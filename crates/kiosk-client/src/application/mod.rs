//! Application layer for kiosk-client.
//!
//! Holds [`KioskClient`], which turns named operations into command
//! envelopes, enforces the in-band error contract, and keeps the device-info
//! snapshot.

pub mod client;

pub use client::KioskClient;
