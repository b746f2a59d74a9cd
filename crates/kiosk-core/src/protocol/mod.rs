//! Wire protocol: parameter values, the command envelope, the command
//! catalogue, and response inspection.

pub mod command;
pub mod envelope;
pub mod params;
pub mod response;
