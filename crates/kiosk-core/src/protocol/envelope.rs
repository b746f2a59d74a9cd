//! The command envelope: every query parameter of one outbound request.
//!
//! # Layout
//!
//! ```text
//! cmd=<command>  password=<secret>  type=json  <command-specific keys...>
//! └──────────── always present, in this order ┘ └── insertion order ──┘
//! ```
//!
//! The three leading parameters are owned by the envelope.  Command argument
//! sets add their own keys after them through [`Envelope::insert`], which
//! refuses to touch `cmd`, `password` or `type`.  That is what guarantees a
//! request always carries exactly one command and the stored password.
//!
//! Entries whose value is [`ParamValue::Null`] stay in the envelope (so tests
//! can see that an optional argument was considered) but are dropped by
//! [`Envelope::query_pairs`].

use std::fmt;

use crate::error::KioskError;
use crate::protocol::command::Command;
use crate::protocol::params::ParamValue;

/// Query parameter carrying the command name.
pub const CMD_KEY: &str = "cmd";
/// Query parameter carrying the admin password.
pub const PASSWORD_KEY: &str = "password";
/// Query parameter selecting the response format.
pub const TYPE_KEY: &str = "type";
/// The only response format this client understands.
pub const JSON_FORMAT: &str = "json";

const RESERVED_KEYS: [&str; 3] = [CMD_KEY, PASSWORD_KEY, TYPE_KEY];

/// Ordered parameter set for one request.
#[derive(Clone, PartialEq)]
pub struct Envelope {
    entries: Vec<(String, ParamValue)>,
}

impl Envelope {
    /// Starts an envelope for `command` authenticated with `password`.
    pub fn new(command: &str, password: &str) -> Self {
        Self {
            entries: vec![
                (CMD_KEY.to_string(), ParamValue::from(command)),
                (PASSWORD_KEY.to_string(), ParamValue::from(password)),
                (TYPE_KEY.to_string(), ParamValue::from(JSON_FORMAT)),
            ],
        }
    }

    /// Starts an envelope for one of the known [`Command`]s.
    pub fn for_command(command: Command, password: &str) -> Self {
        Self::new(command.as_str(), password)
    }

    /// Adds or replaces a command-specific parameter.
    ///
    /// Replacing keeps the key's original position so serialization stays
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::ReservedParameter`] when `key` is one of the
    /// envelope-managed keys.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<(), KioskError> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(KioskError::ReservedParameter(key));
        }
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(())
    }

    /// Builder-style [`Envelope::insert`].
    ///
    /// # Errors
    ///
    /// Same as [`Envelope::insert`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<Self, KioskError> {
        self.insert(key, value)?;
        Ok(self)
    }

    /// The command name carried by this envelope.
    pub fn command(&self) -> &str {
        match self.get(CMD_KEY) {
            Some(ParamValue::Str(s)) => s.as_str(),
            _ => "",
        }
    }

    /// Looks up a parameter by name, including null entries.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// All entries in insertion order, including null entries.
    pub fn entries(&self) -> &[(String, ParamValue)] {
        &self.entries
    }

    /// Serialized query parameters: one stringified pair per non-null entry,
    /// in insertion order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.to_query_value().map(|s| (k.clone(), s)))
            .collect()
    }

    /// Like [`Envelope::query_pairs`] but with the password value masked.
    /// Used for diagnostic traces.
    pub fn redacted_pairs(&self) -> Vec<(String, String)> {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| {
                if k == PASSWORD_KEY {
                    (k, "***".to_string())
                } else {
                    (k, v)
                }
            })
            .collect()
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("params", &self.redacted_pairs())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_envelope_carries_cmd_password_and_type() {
        // Arrange / Act
        let env = Envelope::new("screenOn", "secret");

        // Assert
        assert_eq!(
            env.query_pairs(),
            pairs(&[("cmd", "screenOn"), ("password", "secret"), ("type", "json")])
        );
        assert_eq!(env.command(), "screenOn");
    }

    #[test]
    fn test_extra_arguments_follow_in_insertion_order() {
        // Arrange
        let mut env = Envelope::new("setStringSetting", "pw");

        // Act
        env.insert("key", "screenBrightness").unwrap();
        env.insert("value", 120u8).unwrap();

        // Assert
        assert_eq!(
            env.query_pairs(),
            pairs(&[
                ("cmd", "setStringSetting"),
                ("password", "pw"),
                ("type", "json"),
                ("key", "screenBrightness"),
                ("value", "120"),
            ])
        );
    }

    #[test]
    fn test_null_argument_is_kept_but_not_serialized() {
        // Arrange
        let mut env = Envelope::new("setAudioVolume", "pw");
        env.insert("level", 50u8).unwrap();
        env.insert("stream", None::<u8>).unwrap();

        // Act
        let query = env.query_pairs();

        // Assert
        assert_eq!(env.get("stream"), Some(&ParamValue::Null));
        assert!(query.iter().all(|(k, _)| k != "stream"));
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn test_reinserting_a_key_replaces_in_place() {
        // Arrange
        let mut env = Envelope::new("loadUrl", "pw");
        env.insert("url", "http://a").unwrap();
        env.insert("extra", 1u8).unwrap();

        // Act
        env.insert("url", "http://b").unwrap();

        // Assert: still one `url`, still before `extra`
        let query = env.query_pairs();
        assert_eq!(query.iter().filter(|(k, _)| k == "url").count(), 1);
        assert_eq!(query[3], ("url".to_string(), "http://b".to_string()));
        assert_eq!(query[4].0, "extra");
    }

    #[test]
    fn test_reserved_keys_cannot_be_overridden() {
        let mut env = Envelope::new("screenOn", "secret");

        for key in ["cmd", "password", "type"] {
            let result = env.insert(key, "hijack");
            assert!(
                matches!(result, Err(KioskError::ReservedParameter(ref k)) if k == key),
                "inserting `{key}` must be rejected"
            );
        }

        // The envelope is untouched.
        assert_eq!(env.command(), "screenOn");
        assert_eq!(env.get("password"), Some(&ParamValue::from("secret")));
    }

    #[test]
    fn test_debug_output_masks_password() {
        let env = Envelope::new("deviceInfo", "topsecret");
        let rendered = format!("{env:?}");
        assert!(!rendered.contains("topsecret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_for_command_uses_wire_name() {
        let env = Envelope::for_command(Command::RebootDevice, "pw");
        assert_eq!(env.command(), "rebootDevice");
    }
}
