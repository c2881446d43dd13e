use chrono::{DateTime, SecondsFormat, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::content::domain::Language;

use super::errors::NotificationError;

/// A visitor's contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+380501234567")]
    pub phone: Option<String>,
    #[schema(example = "Hello! Let's work together.")]
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), NotificationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(NotificationError::MissingRequiredFields(missing));
        }

        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(NotificationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// What is actually sent to a channel: the submission plus server stamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    /// Public origin of the site.
    pub source: String,
}

impl OutboundMessage {
    pub fn stamp(contact: ContactMessage, source: &str, now: DateTime<Utc>) -> Self {
        let phone = contact
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self {
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone,
            message: contact.message,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: source.to_string(),
        }
    }

    /// The fixed message used by "send test" actions.
    pub fn test(lang: Language, source: &str, now: DateTime<Utc>) -> Self {
        let message = match lang {
            Language::Uk => "Це тестове повідомлення з адмін-панелі сайту.",
            Language::En => "This is a test message from the site admin panel.",
        };

        Self::stamp(
            ContactMessage {
                name: "Тест / Test".to_string(),
                email: "test@example.com".to_string(),
                phone: Some("+380000000000".to_string()),
                message: message.to_string(),
            },
            source,
            now,
        )
    }
}
