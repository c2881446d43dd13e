use serde::Deserialize;
use serde_json::Value;

use super::entities::{BilingualContent, LanguageSkill, SiteContent};

/// A decoded persisted or imported content document.
///
/// Decoding is total: bilingual `{uk, en}` is tried first, then the legacy
/// single-language `{hero, about, ...}` shape, and anything else is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSnapshot {
    Bilingual(BilingualContent),
    Legacy(SiteContent),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Document is neither bilingual nor legacy single-language content")]
    UnrecognisedShape,

    #[error("Language percentage {0} is above {max}", max = LanguageSkill::MAX_PERCENTAGE)]
    InvalidPercentage(u8),
}

impl ContentSnapshot {
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SnapshotError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, SnapshotError> {
        if !value.is_object() {
            return Err(SnapshotError::UnrecognisedShape);
        }

        if let Ok(mut bilingual) = BilingualContent::deserialize(value) {
            check_percentages(&bilingual.uk)?;
            check_percentages(&bilingual.en)?;
            bilingual.unify_profile_photo();
            return Ok(ContentSnapshot::Bilingual(bilingual));
        }

        let legacy =
            SiteContent::deserialize(value).map_err(|_| SnapshotError::UnrecognisedShape)?;
        check_percentages(&legacy)?;
        Ok(ContentSnapshot::Legacy(legacy))
    }

    /// Legacy documents become the Ukrainian half, paired with `fallback.en`.
    /// The legacy photo is shared with the English half.
    pub fn into_bilingual(self, fallback: &BilingualContent) -> BilingualContent {
        match self {
            ContentSnapshot::Bilingual(content) => content,
            ContentSnapshot::Legacy(uk) => {
                let mut content = BilingualContent {
                    uk,
                    en: fallback.en.clone(),
                };
                content.unify_profile_photo();
                content
            }
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, ContentSnapshot::Legacy(_))
    }
}

fn check_percentages(content: &SiteContent) -> Result<(), SnapshotError> {
    match content
        .languages
        .iter()
        .find(|skill| skill.percentage > LanguageSkill::MAX_PERCENTAGE)
    {
        Some(skill) => Err(SnapshotError::InvalidPercentage(skill.percentage)),
        None => Ok(()),
    }
}
