//! # Domain models for the signed-in session
//!
//! Defines the data structures shared by the session cache, the HTTP client
//! and the UI. These types are `Serialize + Deserialize` so they can round-trip
//! through localStorage and the backend's JSON bodies.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`SessionRecord`] | The authenticated user as the backend reports it. Carries the opaque `uid` plus whatever profile fields the response includes; unknown fields are ignored so older clients keep parsing newer payloads. |
//! | [`ThemeName`] | The two color schemes, serialized as `"LIGHT"` and `"DARK"`, the exact casing stored in the `users/{uid}` document. |
//!
//! ## Helper functions
//!
//! - [`ThemeName::for_hour`] — picks the default scheme from the wall clock
//!   (07:00 through 21:59 is light, the rest of the day is dark).
//! - [`ThemeName::toggled`] — the other scheme.

use serde::{Deserialize, Serialize};

/// The signed-in user, as reported by the backend and cached locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque user identifier: "u_9f2c"
    pub uid: String,
    /// Sign-in email, when the backend includes it
    #[serde(default)]
    pub email: Option<String>,
    /// Profile name, when the user has set one
    #[serde(default)]
    pub name: Option<String>,
}

impl SessionRecord {
    /// Name to show in the chrome: profile name, then email, then the uid.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

/// Color scheme name, stored in the user profile in upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    /// Default scheme for an hour of day. 07:00 through 21:59 is light.
    pub fn for_hour(hour: u32) -> Self {
        if (7..=21).contains(&hour) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Wire form, as stored under `users/{uid}`: "LIGHT" or "DARK".
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_for_hour_window() {
        assert_eq!(ThemeName::for_hour(0), ThemeName::Dark);
        assert_eq!(ThemeName::for_hour(6), ThemeName::Dark);
        assert_eq!(ThemeName::for_hour(7), ThemeName::Light);
        assert_eq!(ThemeName::for_hour(13), ThemeName::Light);
        assert_eq!(ThemeName::for_hour(21), ThemeName::Light);
        assert_eq!(ThemeName::for_hour(22), ThemeName::Dark);
        assert_eq!(ThemeName::for_hour(23), ThemeName::Dark);
    }

    #[test]
    fn test_theme_toggle_is_an_involution() {
        for theme in [ThemeName::Light, ThemeName::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_theme_wire_form_is_upper_case() {
        assert_eq!(serde_json::to_string(&ThemeName::Light).unwrap(), r#""LIGHT""#);
        assert_eq!(serde_json::to_string(&ThemeName::Dark).unwrap(), r#""DARK""#);
        assert_eq!(
            serde_json::from_str::<ThemeName>(r#""DARK""#).unwrap(),
            ThemeName::Dark
        );
        assert_eq!(ThemeName::Light.as_str(), "LIGHT");
    }

    #[test]
    fn test_session_record_tolerates_unknown_fields() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"uid":"u_9f2c","email":"ada@example.com","avatar":"ada.png"}"#,
        )
        .unwrap();
        assert_eq!(record.uid, "u_9f2c");
        assert_eq!(record.email.as_deref(), Some("ada@example.com"));
        assert!(record.name.is_none());
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut record = SessionRecord {
            uid: "u_1".into(),
            email: Some("ada@example.com".into()),
            name: Some("Ada".into()),
        };
        assert_eq!(record.display_name(), "Ada");

        record.name = None;
        assert_eq!(record.display_name(), "ada@example.com");

        record.email = None;
        assert_eq!(record.display_name(), "u_1");
    }
}
