//! kioskctl: command-line remote control for a kiosk browser device.
//!
//! Sends one command to the device's HTTP control API and prints the JSON
//! payload it returns.
//!
//! # Usage
//!
//! ```text
//! kioskctl [OPTIONS] <COMMAND>
//!
//! Options:
//!   --config   <PATH>  TOML configuration file
//!   --host     <HOST>  Device hostname or IP
//!   --port     <PORT>  Remote-admin port [file default: 2323]
//!   --password <PASS>  Remote-admin password
//!
//! Examples:
//!   kioskctl --host 192.168.1.10 --password secret device-info
//!   kioskctl load-url http://dashboard.local/
//!   kioskctl volume 40 --stream 3
//!   kioskctl raw getScreenshot key=value
//! ```
//!
//! # Where settings come from
//!
//! Command-line flags win over environment variables, which win over the
//! config file, which wins over built-in defaults.
//!
//! | Variable         | Flag         | Config key        |
//! |------------------|--------------|-------------------|
//! | `KIOSK_CONFIG`   | `--config`   | (none)            |
//! | `KIOSK_HOST`     | `--host`     | `device.host`     |
//! | `KIOSK_PORT`     | `--port`     | `device.port`     |
//! | `KIOSK_PASSWORD` | `--password` | `device.password` |
//!
//! Log output goes to stderr.  `RUST_LOG=kiosk_client=debug` shows every
//! request URL, its parameters (password masked) and the decoded response.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_client::application::KioskClient;
use kiosk_client::infrastructure::config::{load_config, KioskConfig};
use kiosk_core::{KioskError, ParamValue, RawParams};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote control for a kiosk browser device.
#[derive(Debug, Parser)]
#[command(
    name = "kioskctl",
    about = "Send remote-control commands to a kiosk browser device",
    version
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "KIOSK_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname or IP address of the device.
    #[arg(long, env = "KIOSK_HOST")]
    host: Option<String>,

    /// Remote-admin port of the device.
    #[arg(long, env = "KIOSK_PORT")]
    port: Option<u16>,

    /// Remote-admin password.
    #[arg(long, env = "KIOSK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
enum Action {
    /// Fetch the full device-info payload.
    DeviceInfo,
    StartScreensaver,
    StopScreensaver,
    ScreenOn,
    ScreenOff,
    /// Set screen brightness (0-255).
    Brightness { value: u8 },
    /// Set audio volume (0-100), optionally for one audio stream.
    Volume {
        level: u8,
        #[arg(long)]
        stream: Option<u8>,
    },
    RestartApp,
    LoadStartUrl,
    LoadUrl { url: String },
    PlaySound {
        url: String,
        #[arg(long)]
        stream: Option<u8>,
    },
    StopSound,
    ToForeground,
    /// Start an Android application by package name.
    StartApp { package: String },
    /// Set a string setting.
    SetString { key: String, value: String },
    /// Set a boolean setting.
    SetBool {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    EnableLockedMode,
    DisableLockedMode,
    Lock,
    Unlock,
    Reboot,
    /// Send any command with `key=value` arguments.
    Raw {
        cmd: String,
        #[arg(value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

/// Parses a `key=value` argument for [`Action::Raw`].
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

impl Cli {
    /// Layers flag/env values over the file configuration.
    fn apply_overrides(&self, mut config: KioskConfig) -> KioskConfig {
        if let Some(host) = &self.host {
            config.device.host = Some(host.clone());
        }
        if let Some(port) = self.port {
            config.device.port = port;
        }
        if let Some(password) = &self.password {
            config.device.password = Some(password.clone());
        }
        config
    }
}

// ── Command dispatch ──────────────────────────────────────────────────────────

/// Runs one action against `client` and returns the payload to print.
async fn run_action(client: &KioskClient, action: Action) -> Result<Value, KioskError> {
    match action {
        Action::DeviceInfo => Ok(client.get_device_info().await?.into_value()),
        Action::StartScreensaver => client.start_screensaver().await,
        Action::StopScreensaver => client.stop_screensaver().await,
        Action::ScreenOn => client.screen_on().await,
        Action::ScreenOff => client.screen_off().await,
        Action::Brightness { value } => client.set_screen_brightness(value).await,
        Action::Volume { level, stream } => client.set_audio_volume(level, stream).await,
        Action::RestartApp => client.restart_app().await,
        Action::LoadStartUrl => client.load_start_url().await,
        Action::LoadUrl { url } => client.load_url(url).await,
        Action::PlaySound { url, stream } => client.play_sound(url, stream).await,
        Action::StopSound => client.stop_sound().await,
        Action::ToForeground => client.to_foreground().await,
        Action::StartApp { package } => client.start_application(package).await,
        Action::SetString { key, value } => client.set_configuration_string(key, value).await,
        Action::SetBool { key, value } => client.set_configuration_bool(key, value).await,
        Action::EnableLockedMode => client.enable_locked_mode().await,
        Action::DisableLockedMode => client.disable_locked_mode().await,
        Action::Lock => client.lock_kiosk().await,
        Action::Unlock => client.unlock_kiosk().await,
        Action::Reboot => client.reboot_device().await,
        Action::Raw { cmd, params } => {
            let args = RawParams(
                params
                    .into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            );
            client.send_command(&cmd, args).await
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let config = cli.apply_overrides(file_config);

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    let host = config.host()?.to_string();
    let password = config.password()?.to_string();
    let port = config.device.port;

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.http.timeout() {
        builder = builder.timeout(timeout);
    }
    let session = builder.build().context("failed to build HTTP client")?;

    let client = KioskClient::new(Arc::new(session), host, port, password);
    info!("sending {:?} to {}:{}", cli.action, client.host(), client.port());

    let payload = run_action(&client, cli.action)
        .await
        .with_context(|| format!("command failed on {}:{}", client.host(), client.port()))?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
