use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::language::Language;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    pub contact: ContactInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub description: String,
    #[serde(default)]
    pub personal_info: Vec<PersonalInfoItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Base64 data URI, shared by both languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PersonalInfoItem {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Experience {
    pub company: String,
    pub period: String,
    pub title: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub period: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Certificate {
    pub name: String,
    pub year: String,
}

/// A spoken language entry. `percentage` is a proficiency bar in `0..=100`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
    pub percentage: u8,
}

impl LanguageSkill {
    pub const MAX_PERCENTAGE: u8 = 100;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub collaboration_title: String,
    pub collaboration_text: String,
}

/// The root content record. Both languages are always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct BilingualContent {
    pub uk: SiteContent,
    pub en: SiteContent,
}

impl BilingualContent {
    pub fn get(&self, lang: Language) -> &SiteContent {
        match lang {
            Language::Uk => &self.uk,
            Language::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Language) -> &mut SiteContent {
        match lang {
            Language::Uk => &mut self.uk,
            Language::En => &mut self.en,
        }
    }

    pub fn set(&mut self, lang: Language, content: SiteContent) {
        *self.get_mut(lang) = content;
    }

    /// The photo as seen from Ukrainian; writes keep both halves equal.
    pub fn profile_photo(&self) -> Option<&str> {
        self.uk.about.profile_photo.as_deref()
    }

    /// Writes (or clears) the photo in both languages in one step.
    pub fn set_profile_photo(&mut self, photo: Option<String>) {
        self.en.about.profile_photo = photo.clone();
        self.uk.about.profile_photo = photo;
    }

    /// Brings both halves to one photo: the Ukrainian one, or the English
    /// one when Ukrainian has none.
    pub fn unify_profile_photo(&mut self) {
        let photo = self
            .uk
            .about
            .profile_photo
            .take()
            .or_else(|| self.en.about.profile_photo.take());
        self.set_profile_photo(photo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::defaults::default_content;

    #[test]
    fn serialises_with_camel_case_field_names() {
        let json = serde_json::to_value(&default_content().uk).unwrap();

        assert!(json["about"].get("personalInfo").is_some());
        assert!(json["contact"].get("collaborationTitle").is_some());
        assert!(json["about"].get("profilePhoto").is_none());
    }

    #[test]
    fn set_replaces_only_the_requested_language() {
        let mut content = default_content().clone();
        let mut en = content.en.clone();
        en.hero.name = "Jane Doe".to_string();

        content.set(Language::En, en);

        assert_eq!(content.en.hero.name, "Jane Doe");
        assert_eq!(content.uk, default_content().uk);
    }

    #[test]
    fn profile_photo_is_written_to_both_languages() {
        let mut content = default_content().clone();

        content.set_profile_photo(Some("data:image/png;base64,AAAA".to_string()));
        assert_eq!(content.uk.about.profile_photo, content.en.about.profile_photo);
        assert_eq!(content.profile_photo(), Some("data:image/png;base64,AAAA"));

        content.set_profile_photo(None);
        assert!(content.uk.about.profile_photo.is_none());
        assert!(content.en.about.profile_photo.is_none());
    }

    #[test]
    fn unify_copies_a_one_sided_photo_to_both_languages() {
        let mut content = default_content().clone();
        content.en.about.profile_photo = Some("data:image/png;base64,EN".to_string());

        content.unify_profile_photo();
        assert_eq!(
            content.uk.about.profile_photo.as_deref(),
            Some("data:image/png;base64,EN")
        );
        assert_eq!(
            content.en.about.profile_photo.as_deref(),
            Some("data:image/png;base64,EN")
        );

        content.uk.about.profile_photo = Some("data:image/png;base64,UK".to_string());
        content.unify_profile_photo();
        assert_eq!(
            content.en.about.profile_photo.as_deref(),
            Some("data:image/png;base64,UK")
        );
    }

    #[test]
    fn missing_list_fields_default_to_empty() {
        let raw = r#"{
            "hero": {"name": "N", "title": "T", "description": "D"},
            "about": {"description": "A"},
            "contact": {
                "phone": "1", "email": "e@x.io", "location": "L",
                "collaborationTitle": "CT", "collaborationText": "CX"
            }
        }"#;

        let content: SiteContent = serde_json::from_str(raw).unwrap();
        assert!(content.experiences.is_empty());
        assert!(content.hero.stats.is_empty());
        assert!(content.about.profile_photo.is_none());
    }
}
