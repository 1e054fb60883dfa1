//! Core types for logo generation.

use crate::error::{Error, Result};
use base64::Engine;
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gemini image model tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoModel {
    /// Gemini 2.5 Flash Image (fast, economical).
    #[default]
    Flash,
    /// Gemini 3 Pro Image (highest quality, may require a selected
    /// credential on hosted pages).
    Pro,
}

impl LogoModel {
    /// Returns the API model identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flash => "gemini-2.5-flash-image",
            Self::Pro => "gemini-3-pro-image-preview",
        }
    }

    /// Parses a model identifier back into a tier.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gemini-2.5-flash-image" => Some(Self::Flash),
            "gemini-3-pro-image-preview" => Some(Self::Pro),
            _ => None,
        }
    }

    /// Returns the name of this tier for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Flash => "Fast (Flash)",
            Self::Pro => "Pro",
        }
    }

    /// True for the premium tier.
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Pro)
    }

    /// Coarse tier label for an arbitrary model identifier string.
    pub fn tier_label(model_id: &str) -> &'static str {
        if model_id.contains("flash") {
            "Flash"
        } else {
            "Pro"
        }
    }
}

impl std::fmt::Display for LogoModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generated logo with its image data and request context.
///
/// The image travels as a self-contained `data:` URI so it can be rendered
/// or downloaded without any further network fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLogo {
    /// Unique identifier, generated client-side.
    pub id: String,
    /// `data:<mime>;base64,<payload>` URI embedding the full image bytes.
    pub image_url: String,
    /// The original user-entered prompt (not the augmented one sent upstream).
    pub prompt: String,
    /// Creation time, milliseconds since epoch.
    pub timestamp: i64,
    /// Model identifier used for this generation.
    pub model: String,
}

impl GeneratedLogo {
    /// Returns the MIME type declared in the data URI, if well-formed.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.image_url.strip_prefix("data:")?;
        let (mime, _) = rest.split_once(";base64,")?;
        Some(mime)
    }

    /// Decodes the raw image bytes out of the data URI.
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        let payload = self
            .image_url
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| Error::Decode("not a base64 data URI".into()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Saves the decoded image to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.image_bytes()?)?;
        Ok(())
    }

    /// Formats the creation time as a local `HH:MM` string.
    pub fn time_of_day(&self) -> String {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo_with_url(image_url: &str) -> GeneratedLogo {
        GeneratedLogo {
            id: "test-id".into(),
            image_url: image_url.into(),
            prompt: "A fox head".into(),
            timestamp: 1_700_000_000_000,
            model: LogoModel::Flash.as_str().into(),
        }
    }

    #[test]
    fn test_model_as_str() {
        assert_eq!(LogoModel::Flash.as_str(), "gemini-2.5-flash-image");
        assert_eq!(LogoModel::Pro.as_str(), "gemini-3-pro-image-preview");
    }

    #[test]
    fn test_model_from_str_round_trip() {
        for model in [LogoModel::Flash, LogoModel::Pro] {
            assert_eq!(LogoModel::from_str(model.as_str()), Some(model));
        }
        assert_eq!(LogoModel::from_str("imagen-3"), None);
    }

    #[test]
    fn test_model_default_is_flash() {
        assert_eq!(LogoModel::default(), LogoModel::Flash);
        assert!(!LogoModel::Flash.is_premium());
        assert!(LogoModel::Pro.is_premium());
    }

    #[test]
    fn test_tier_label() {
        assert_eq!(LogoModel::tier_label("gemini-2.5-flash-image"), "Flash");
        assert_eq!(LogoModel::tier_label("gemini-3-pro-image-preview"), "Pro");
        assert_eq!(LogoModel::tier_label("some-unknown-model"), "Pro");
    }

    #[test]
    fn test_mime_type_from_data_uri() {
        let logo = logo_with_url("data:image/png;base64,QUJD");
        assert_eq!(logo.mime_type(), Some("image/png"));

        let bad = logo_with_url("https://example.com/logo.png");
        assert_eq!(bad.mime_type(), None);
    }

    #[test]
    fn test_image_bytes_decodes_payload() {
        let logo = logo_with_url("data:image/png;base64,QUJD");
        assert_eq!(logo.image_bytes().unwrap(), b"ABC");
    }

    #[test]
    fn test_image_bytes_rejects_non_data_uri() {
        let logo = logo_with_url("https://example.com/logo.png");
        assert!(matches!(logo.image_bytes(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_time_of_day_shape() {
        let time = logo_with_url("data:image/png;base64,QUJD").time_of_day();
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
        assert!(time[..2].chars().all(|c| c.is_ascii_digit()));
        assert!(time[3..].chars().all(|c| c.is_ascii_digit()));
    }
}
