//! KioskClient: the device's command set as named async operations.
//!
//! Every operation follows the same path:
//!
//! ```text
//! load_url(url)
//!   └─ send_command("loadUrl", UrlParams { url })
//!        ├─ Envelope { cmd, password, type=json, url }
//!        ├─ RequestHandler::get        → Transport / Decode / Session errors
//!        └─ check_response(payload)    → Application error on status=="Error"
//! ```
//!
//! No operation retries, suppresses, or substitutes a fallback value.  Every
//! error reaches the caller as it was produced.
//!
//! # Device-info snapshot
//!
//! [`KioskClient::get_device_info`] stores its result; [`KioskClient::device_info`]
//! returns the stored copy without any I/O.  Each fetch replaces the snapshot
//! wholesale.  Concurrent fetches are not coordinated: whichever finishes last
//! wins.  The lock only guards the copy in and out.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use kiosk_core::protocol::command::SCREEN_BRIGHTNESS_KEY;
use kiosk_core::{
    check_response, ApplicationParams, Command, CommandArgs, DeviceInfo, Envelope, KioskError,
    NoParams, ParamValue, SettingParams, SoundParams, UrlParams, VolumeParams,
};
use serde_json::Value;

use crate::infrastructure::session::HttpSession;
use crate::infrastructure::transport::RequestHandler;

/// Async client for one kiosk device.
pub struct KioskClient {
    handler: RequestHandler,
    password: String,
    device_info: RwLock<Option<DeviceInfo>>,
}

impl KioskClient {
    /// Creates a client for the device at `host:port`.
    ///
    /// `session` is shared with the caller; the client never closes or
    /// reconfigures it.
    pub fn new(
        session: Arc<dyn HttpSession>,
        host: impl Into<String>,
        port: u16,
        password: impl Into<String>,
    ) -> Self {
        Self {
            handler: RequestHandler::new(session, host, port),
            password: password.into(),
            device_info: RwLock::new(None),
        }
    }

    pub fn host(&self) -> &str {
        self.handler.host()
    }

    pub fn port(&self) -> u16 {
        self.handler.port()
    }

    /// Sends `command` with `args` and returns the decoded payload.
    ///
    /// # Errors
    ///
    /// - [`KioskError::ReservedParameter`] if `args` sets `cmd`, `password`
    ///   or `type`.
    /// - [`KioskError::Session`], [`KioskError::Transport`],
    ///   [`KioskError::Decode`] from the transport.
    /// - [`KioskError::Application`] if the payload has `status == "Error"`.
    pub async fn send_command<A>(&self, command: &str, args: A) -> Result<Value, KioskError>
    where
        A: CommandArgs + Send,
    {
        let mut envelope = Envelope::new(command, &self.password);
        args.apply(&mut envelope)?;
        let data = self.handler.get(&envelope).await?;
        check_response(data)
    }

    async fn run<A>(&self, command: Command, args: A) -> Result<Value, KioskError>
    where
        A: CommandArgs + Send,
    {
        self.send_command(command.as_str(), args).await
    }

    // ── Device info ───────────────────────────────────────────────────────────

    /// Fetches the full device-info payload and replaces the cached snapshot.
    ///
    /// On error the previous snapshot is left untouched.
    pub async fn get_device_info(&self) -> Result<DeviceInfo, KioskError> {
        let info = DeviceInfo::new(self.run(Command::DeviceInfo, NoParams).await?);
        *self
            .device_info
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(info.clone());
        Ok(info)
    }

    /// The snapshot stored by the last successful [`get_device_info`], or
    /// `None` if it was never fetched.
    ///
    /// [`get_device_info`]: KioskClient::get_device_info
    pub fn device_info(&self) -> Option<DeviceInfo> {
        self.device_info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ── Screen ────────────────────────────────────────────────────────────────

    pub async fn start_screensaver(&self) -> Result<Value, KioskError> {
        self.run(Command::StartScreensaver, NoParams).await
    }

    pub async fn stop_screensaver(&self) -> Result<Value, KioskError> {
        self.run(Command::StopScreensaver, NoParams).await
    }

    pub async fn screen_on(&self) -> Result<Value, KioskError> {
        self.run(Command::ScreenOn, NoParams).await
    }

    pub async fn screen_off(&self) -> Result<Value, KioskError> {
        self.run(Command::ScreenOff, NoParams).await
    }

    /// Sets the `screenBrightness` setting (0–255 on the device).
    pub async fn set_screen_brightness(&self, brightness: u8) -> Result<Value, KioskError> {
        self.run(
            Command::SetStringSetting,
            SettingParams::new(SCREEN_BRIGHTNESS_KEY, brightness),
        )
        .await
    }

    // ── Audio ─────────────────────────────────────────────────────────────────

    /// Sets the volume `level` (0–100) of `stream`, or of the device's
    /// default stream when `stream` is `None`.
    pub async fn set_audio_volume(
        &self,
        volume: u8,
        stream: Option<u8>,
    ) -> Result<Value, KioskError> {
        let args = VolumeParams {
            level: ParamValue::from(volume),
            stream: stream.map(ParamValue::from),
        };
        self.run(Command::SetAudioVolume, args).await
    }

    pub async fn play_sound(
        &self,
        url: impl Into<String>,
        stream: Option<u8>,
    ) -> Result<Value, KioskError> {
        let args = SoundParams {
            url: url.into(),
            stream: stream.map(ParamValue::from),
        };
        self.run(Command::PlaySound, args).await
    }

    pub async fn stop_sound(&self) -> Result<Value, KioskError> {
        self.run(Command::StopSound, NoParams).await
    }

    // ── Browser and app ───────────────────────────────────────────────────────

    pub async fn restart_app(&self) -> Result<Value, KioskError> {
        self.run(Command::RestartApp, NoParams).await
    }

    pub async fn load_start_url(&self) -> Result<Value, KioskError> {
        self.run(Command::LoadStartUrl, NoParams).await
    }

    pub async fn load_url(&self, url: impl Into<String>) -> Result<Value, KioskError> {
        self.run(Command::LoadUrl, UrlParams { url: url.into() }).await
    }

    pub async fn to_foreground(&self) -> Result<Value, KioskError> {
        self.run(Command::ToForeground, NoParams).await
    }

    /// Starts the Android application with package name `application`.
    pub async fn start_application(
        &self,
        application: impl Into<String>,
    ) -> Result<Value, KioskError> {
        let args = ApplicationParams {
            package: application.into(),
        };
        self.run(Command::StartApplication, args).await
    }

    // ── Settings ──────────────────────────────────────────────────────────────

    pub async fn set_configuration_string(
        &self,
        setting: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Value, KioskError> {
        let args = SettingParams::new(setting, value.into());
        self.run(Command::SetStringSetting, args).await
    }

    pub async fn set_configuration_bool(
        &self,
        setting: impl Into<String>,
        value: bool,
    ) -> Result<Value, KioskError> {
        self.run(Command::SetBooleanSetting, SettingParams::new(setting, value))
            .await
    }

    // ── Kiosk lock ────────────────────────────────────────────────────────────

    pub async fn enable_locked_mode(&self) -> Result<Value, KioskError> {
        self.run(Command::EnableLockedMode, NoParams).await
    }

    pub async fn disable_locked_mode(&self) -> Result<Value, KioskError> {
        self.run(Command::DisableLockedMode, NoParams).await
    }

    pub async fn lock_kiosk(&self) -> Result<Value, KioskError> {
        self.run(Command::LockKiosk, NoParams).await
    }

    pub async fn unlock_kiosk(&self) -> Result<Value, KioskError> {
        self.run(Command::UnlockKiosk, NoParams).await
    }

    // ── Device ────────────────────────────────────────────────────────────────

    pub async fn reboot_device(&self) -> Result<Value, KioskError> {
        self.run(Command::RebootDevice, NoParams).await
    }
}

impl fmt::Debug for KioskClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KioskClient")
            .field("handler", &self.handler)
            .field("password", &"***")
            .field("has_device_info", &self.device_info().is_some())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::session::mock::MockSession;
    use serde_json::json;

    fn client_with(session: &Arc<MockSession>) -> KioskClient {
        KioskClient::new(session.clone(), "192.168.1.10", 8080, "secret")
    }

    #[tokio::test]
    async fn test_send_command_builds_envelope_and_returns_payload() {
        // Arrange
        let session = Arc::new(MockSession::always(200, r#"{"status":"OK"}"#));
        let client = client_with(&session);

        // Act
        let data = client
            .send_command(
                "loadUrl",
                UrlParams {
                    url: "http://example.com".to_string(),
                },
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(data, json!({"status": "OK"}));
        let req = session.last_request().unwrap();
        let expected: Vec<(String, String)> = [
            ("cmd", "loadUrl"),
            ("password", "secret"),
            ("type", "json"),
            ("url", "http://example.com"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(req.query, expected);
    }

    #[tokio::test]
    async fn test_error_marker_becomes_application_error() {
        let session = Arc::new(MockSession::always(
            200,
            r#"{"status":"Error","statustext":"Invalid password"}"#,
        ));
        let client = client_with(&session);

        let err = client.screen_on().await.unwrap_err();

        assert!(matches!(
            err,
            KioskError::Application { ref kind, ref message }
                if kind == "Error" && message == "Invalid password"
        ));
    }

    #[tokio::test]
    async fn test_reserved_argument_is_rejected_before_any_request() {
        // Arrange
        let session = Arc::new(MockSession::always(200, "{}"));
        let client = client_with(&session);
        let args = kiosk_core::RawParams::new().push("cmd", "rebootDevice");

        // Act
        let result = client.send_command("screenOn", args).await;

        // Assert
        assert!(matches!(result, Err(KioskError::ReservedParameter(_))));
        assert_eq!(session.request_count(), 0);
    }

    #[tokio::test]
    async fn test_device_info_is_absent_until_fetched() {
        let session = Arc::new(MockSession::always(200, r#"{"deviceName":"Lobby"}"#));
        let client = client_with(&session);

        assert!(client.device_info().is_none());
        assert_eq!(session.request_count(), 0);
    }

    #[tokio::test]
    async fn test_device_info_fetch_replaces_snapshot_wholesale() {
        // Arrange: first payload has two keys, second only one
        let session = Arc::new(MockSession::new());
        session.push_response(200, r#"{"deviceName":"Lobby","screenOn":true}"#);
        session.push_response(200, r#"{"batteryLevel":40}"#);
        let client = client_with(&session);

        // Act / Assert: first fetch
        let first = client.get_device_info().await.unwrap();
        assert_eq!(client.device_info(), Some(first));

        // Act / Assert: second fetch overwrites, no merge
        client.get_device_info().await.unwrap();
        let cached = client.device_info().unwrap();
        assert_eq!(cached.as_value(), &json!({"batteryLevel": 40}));
        assert_eq!(cached.device_name(), None);
    }

    #[tokio::test]
    async fn test_failed_device_info_fetch_keeps_previous_snapshot() {
        let session = Arc::new(MockSession::new());
        session.push_response(200, r#"{"deviceName":"Lobby"}"#);
        session.push_response(500, "Internal Error");
        let client = client_with(&session);

        client.get_device_info().await.unwrap();
        let err = client.get_device_info().await.unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert_eq!(client.device_info().unwrap().device_name(), Some("Lobby"));
    }

    #[test]
    fn test_debug_output_hides_password() {
        let session = Arc::new(MockSession::new());
        let client = client_with(&session);
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("192.168.1.10:8080"));
    }
}
