//! Domain types describing the remote device.

pub mod device_info;

pub use device_info::DeviceInfo;
