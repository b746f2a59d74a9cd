//! The device-info snapshot.
//!
//! `deviceInfo` returns a large, firmware-dependent JSON object.  The client
//! keeps it verbatim; [`DeviceInfo`] only adds read-only lookups for the
//! fields most callers care about.  Lookups never fail: a missing or
//! differently-typed field is reported as `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full payload of the most recent `deviceInfo` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceInfo(Value);

impl DeviceInfo {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The raw payload, exactly as the device returned it.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    pub fn device_name(&self) -> Option<&str> {
        self.get_str("deviceName")
    }

    pub fn device_id(&self) -> Option<&str> {
        self.get_str("deviceID")
    }

    pub fn app_version_name(&self) -> Option<&str> {
        self.get_str("appVersionName")
    }

    /// URL of the page currently shown.
    pub fn current_page(&self) -> Option<&str> {
        self.get_str("currentPage")
    }

    pub fn start_url(&self) -> Option<&str> {
        self.get_str("startUrl")
    }

    pub fn screen_on(&self) -> Option<bool> {
        self.get_bool("screenOn")
    }

    /// Brightness on the device's 0–255 scale.
    pub fn screen_brightness(&self) -> Option<i64> {
        self.get_i64("screenBrightness")
    }

    /// Battery charge in percent.
    pub fn battery_level(&self) -> Option<i64> {
        self.get_i64("batteryLevel")
    }

    pub fn kiosk_locked(&self) -> Option<bool> {
        self.get_bool("kioskLocked")
    }

    pub fn is_in_screensaver(&self) -> Option<bool> {
        self.get_bool("isInScreensaver")
    }
}

impl From<Value> for DeviceInfo {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}

impl From<DeviceInfo> for Value {
    fn from(info: DeviceInfo) -> Self {
        info.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
