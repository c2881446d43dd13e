use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::content::domain::{
    Certificate, Education, Experience, LanguageSkill, PersonalInfoItem, SiteContent, Stat,
};

/// Single-value text fields editable per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ScalarField {
    #[serde(rename = "hero.name")]
    HeroName,
    #[serde(rename = "hero.title")]
    HeroTitle,
    #[serde(rename = "hero.description")]
    HeroDescription,
    #[serde(rename = "about.description")]
    AboutDescription,
    #[serde(rename = "contact.phone")]
    ContactPhone,
    #[serde(rename = "contact.email")]
    ContactEmail,
    #[serde(rename = "contact.location")]
    ContactLocation,
    #[serde(rename = "contact.collaborationTitle")]
    ContactCollaborationTitle,
    #[serde(rename = "contact.collaborationText")]
    ContactCollaborationText,
}

impl ScalarField {
    pub fn slot(self, content: &mut SiteContent) -> &mut String {
        match self {
            ScalarField::HeroName => &mut content.hero.name,
            ScalarField::HeroTitle => &mut content.hero.title,
            ScalarField::HeroDescription => &mut content.hero.description,
            ScalarField::AboutDescription => &mut content.about.description,
            ScalarField::ContactPhone => &mut content.contact.phone,
            ScalarField::ContactEmail => &mut content.contact.email,
            ScalarField::ContactLocation => &mut content.contact.location,
            ScalarField::ContactCollaborationTitle => &mut content.contact.collaboration_title,
            ScalarField::ContactCollaborationText => &mut content.contact.collaboration_text,
        }
    }
}

/// Ordered collections inside one language's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    Stats,
    PersonalInfo,
    Skills,
    Experiences,
    Education,
    Certificates,
    Languages,
}

impl ListKind {
    pub fn len_in(self, content: &SiteContent) -> usize {
        match self {
            ListKind::Stats => content.hero.stats.len(),
            ListKind::PersonalInfo => content.about.personal_info.len(),
            ListKind::Skills => content.about.skills.len(),
            ListKind::Experiences => content.experiences.len(),
            ListKind::Education => content.education.len(),
            ListKind::Certificates => content.certificates.len(),
            ListKind::Languages => content.languages.len(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Stats => "stats",
            ListKind::PersonalInfo => "personalInfo",
            ListKind::Skills => "skills",
            ListKind::Experiences => "experiences",
            ListKind::Education => "education",
            ListKind::Certificates => "certificates",
            ListKind::Languages => "languages",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of any list, tagged with the list it belongs to:
/// `{"kind": "certificate", "value": {"name": "...", "year": "2024"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ListItem {
    Stat(Stat),
    PersonalInfo(PersonalInfoItem),
    Skill(String),
    Experience(Experience),
    Education(Education),
    Certificate(Certificate),
    Language(LanguageSkill),
}

impl ListItem {
    pub fn list(&self) -> ListKind {
        match self {
            ListItem::Stat(_) => ListKind::Stats,
            ListItem::PersonalInfo(_) => ListKind::PersonalInfo,
            ListItem::Skill(_) => ListKind::Skills,
            ListItem::Experience(_) => ListKind::Experiences,
            ListItem::Education(_) => ListKind::Education,
            ListItem::Certificate(_) => ListKind::Certificates,
            ListItem::Language(_) => ListKind::Languages,
        }
    }
}
