//! The device command catalogue and the typed parameter sets that accompany
//! each command.
//!
//! # Commands
//!
//! | [`Command`] | Wire name | Parameter set |
//! |-------------|-----------|---------------|
//! | `DeviceInfo` | `deviceInfo` | [`NoParams`] |
//! | `StartScreensaver` / `StopScreensaver` | `startScreensaver` / `stopScreensaver` | [`NoParams`] |
//! | `ScreenOn` / `ScreenOff` | `screenOn` / `screenOff` | [`NoParams`] |
//! | `SetStringSetting` | `setStringSetting` | [`SettingParams`] |
//! | `SetBooleanSetting` | `setBooleanSetting` | [`SettingParams`] |
//! | `SetAudioVolume` | `setAudioVolume` | [`VolumeParams`] |
//! | `RestartApp` | `restartApp` | [`NoParams`] |
//! | `LoadStartUrl` | `loadStartUrl` | [`NoParams`] |
//! | `LoadUrl` | `loadUrl` | [`UrlParams`] |
//! | `PlaySound` | `playSound` | [`SoundParams`] |
//! | `StopSound` | `stopSound` | [`NoParams`] |
//! | `ToForeground` | `toForeground` | [`NoParams`] |
//! | `StartApplication` | `startApplication` | [`ApplicationParams`] |
//! | `EnableLockedMode` / `DisableLockedMode` | `enableLockedMode` / `disableLockedMode` | [`NoParams`] |
//! | `LockKiosk` / `UnlockKiosk` | `lockKiosk` / `unlockKiosk` | [`NoParams`] |
//! | `RebootDevice` | `rebootDevice` | [`NoParams`] |
//!
//! # Parameter sets (for beginners)
//!
//! Every parameter set implements [`CommandArgs`], which writes its fields
//! into an [`Envelope`].  Optional fields are written as
//! [`ParamValue::Null`] when absent, and the envelope drops nulls when it
//! serializes the query string.  So `VolumeParams { level: 50, stream: None }`
//! produces `level=50` and no `stream` parameter at all.

use std::fmt;
use std::str::FromStr;

use crate::error::KioskError;
use crate::protocol::envelope::Envelope;
use crate::protocol::params::ParamValue;

/// Setting key used by the screen-brightness shortcut.
pub const SCREEN_BRIGHTNESS_KEY: &str = "screenBrightness";

/// Identifies a device command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    DeviceInfo,
    StartScreensaver,
    StopScreensaver,
    ScreenOn,
    ScreenOff,
    SetStringSetting,
    SetBooleanSetting,
    SetAudioVolume,
    RestartApp,
    LoadStartUrl,
    LoadUrl,
    PlaySound,
    StopSound,
    ToForeground,
    StartApplication,
    EnableLockedMode,
    DisableLockedMode,
    LockKiosk,
    UnlockKiosk,
    RebootDevice,
}

impl Command {
    /// Every known command, in catalogue order.
    pub const ALL: [Command; 20] = [
        Command::DeviceInfo,
        Command::StartScreensaver,
        Command::StopScreensaver,
        Command::ScreenOn,
        Command::ScreenOff,
        Command::SetStringSetting,
        Command::SetBooleanSetting,
        Command::SetAudioVolume,
        Command::RestartApp,
        Command::LoadStartUrl,
        Command::LoadUrl,
        Command::PlaySound,
        Command::StopSound,
        Command::ToForeground,
        Command::StartApplication,
        Command::EnableLockedMode,
        Command::DisableLockedMode,
        Command::LockKiosk,
        Command::UnlockKiosk,
        Command::RebootDevice,
    ];

    /// The `cmd` value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::DeviceInfo => "deviceInfo",
            Command::StartScreensaver => "startScreensaver",
            Command::StopScreensaver => "stopScreensaver",
            Command::ScreenOn => "screenOn",
            Command::ScreenOff => "screenOff",
            Command::SetStringSetting => "setStringSetting",
            Command::SetBooleanSetting => "setBooleanSetting",
            Command::SetAudioVolume => "setAudioVolume",
            Command::RestartApp => "restartApp",
            Command::LoadStartUrl => "loadStartUrl",
            Command::LoadUrl => "loadUrl",
            Command::PlaySound => "playSound",
            Command::StopSound => "stopSound",
            Command::ToForeground => "toForeground",
            Command::StartApplication => "startApplication",
            Command::EnableLockedMode => "enableLockedMode",
            Command::DisableLockedMode => "disableLockedMode",
            Command::LockKiosk => "lockKiosk",
            Command::UnlockKiosk => "unlockKiosk",
            Command::RebootDevice => "rebootDevice",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

// ── Parameter sets ────────────────────────────────────────────────────────────

/// A set of command-specific arguments.
pub trait CommandArgs {
    /// Writes the arguments into `envelope`.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::ReservedParameter`] if an argument name collides
    /// with an envelope-managed key.
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError>;
}

/// No arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParams;

impl CommandArgs for NoParams {
    fn apply(self, _envelope: &mut Envelope) -> Result<(), KioskError> {
        Ok(())
    }
}

/// `key` + `value` for the string/boolean setting commands.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingParams {
    pub key: String,
    pub value: ParamValue,
}

impl SettingParams {
    pub fn new(key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CommandArgs for SettingParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        envelope.insert("key", self.key)?;
        envelope.insert("value", self.value)
    }
}

/// Volume level with an optional Android audio stream id.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeParams {
    pub level: ParamValue,
    pub stream: Option<ParamValue>,
}

impl CommandArgs for VolumeParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        envelope.insert("level", self.level)?;
        envelope.insert("stream", self.stream)
    }
}

/// Sound URL with an optional audio stream id.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundParams {
    pub url: String,
    pub stream: Option<ParamValue>,
}

impl CommandArgs for SoundParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        envelope.insert("url", self.url)?;
        envelope.insert("stream", self.stream)
    }
}

/// Page URL to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParams {
    pub url: String,
}

impl CommandArgs for UrlParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        envelope.insert("url", self.url)
    }
}

/// Android package name of the application to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationParams {
    pub package: String,
}

impl CommandArgs for ApplicationParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        envelope.insert("package", self.package)
    }
}

/// Free-form ordered arguments for commands outside the catalogue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams(pub Vec<(String, ParamValue)>);

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }
}

impl CommandArgs for RawParams {
    fn apply(self, envelope: &mut Envelope) -> Result<(), KioskError> {
        for (key, value) in self.0 {
            envelope.insert(key, value)?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
