use chrono::NaiveDate;

use crate::content::domain::{BilingualContent, Language, LanguageSkill, SiteContent};

use super::errors::EditorError;
use super::fields::{ListItem, ListKind, ScalarField};
use super::placeholders::{placeholder, responsibility_placeholder};

/// An unsaved editing session over both languages. Every edit except the
/// photo touches only the active language.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingCopy {
    content: BilingualContent,
    language: Language,
}

impl WorkingCopy {
    pub fn new(content: BilingualContent, language: Language) -> Self {
        Self { content, language }
    }

    pub fn content(&self) -> &BilingualContent {
        &self.content
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active(&self) -> &SiteContent {
        self.content.get(self.language)
    }

    fn active_mut(&mut self) -> &mut SiteContent {
        self.content.get_mut(self.language)
    }

    /// Only the binding changes; both halves keep their edits.
    pub fn switch_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_field(&mut self, field: ScalarField, value: String) {
        *field.slot(self.active_mut()) = value;
    }

    /// Appends `item`, or the language's placeholder, and returns its index.
    pub fn append(&mut self, list: ListKind, item: Option<ListItem>) -> Result<usize, EditorError> {
        let item = match item {
            Some(item) => validate_item(list, item)?,
            None => placeholder(list, self.language),
        };

        let content = self.active_mut();
        let index = list.len_in(content);
        push_item(content, item);
        Ok(index)
    }

    pub fn replace(
        &mut self,
        list: ListKind,
        index: usize,
        item: ListItem,
    ) -> Result<(), EditorError> {
        let item = validate_item(list, item)?;
        let content = self.active_mut();
        check_index(list, index, list.len_in(content))?;

        match item {
            ListItem::Stat(v) => content.hero.stats[index] = v,
            ListItem::PersonalInfo(v) => content.about.personal_info[index] = v,
            ListItem::Skill(v) => content.about.skills[index] = v,
            ListItem::Experience(v) => content.experiences[index] = v,
            ListItem::Education(v) => content.education[index] = v,
            ListItem::Certificate(v) => content.certificates[index] = v,
            ListItem::Language(v) => content.languages[index] = v,
        }
        Ok(())
    }

    /// Later entries shift down by one.
    pub fn remove(&mut self, list: ListKind, index: usize) -> Result<(), EditorError> {
        let content = self.active_mut();
        check_index(list, index, list.len_in(content))?;

        match list {
            ListKind::Stats => {
                content.hero.stats.remove(index);
            }
            ListKind::PersonalInfo => {
                content.about.personal_info.remove(index);
            }
            ListKind::Skills => {
                content.about.skills.remove(index);
            }
            ListKind::Experiences => {
                content.experiences.remove(index);
            }
            ListKind::Education => {
                content.education.remove(index);
            }
            ListKind::Certificates => {
                content.certificates.remove(index);
            }
            ListKind::Languages => {
                content.languages.remove(index);
            }
        }
        Ok(())
    }

    pub fn append_responsibility(
        &mut self,
        experience: usize,
        text: Option<String>,
    ) -> Result<usize, EditorError> {
        let text = text.unwrap_or_else(|| responsibility_placeholder(self.language));
        let responsibilities = self.responsibilities_mut(experience)?;

        responsibilities.push(text);
        Ok(responsibilities.len() - 1)
    }

    pub fn replace_responsibility(
        &mut self,
        experience: usize,
        index: usize,
        text: String,
    ) -> Result<(), EditorError> {
        let responsibilities = self.responsibilities_mut(experience)?;
        check_index(ListKind::Experiences, index, responsibilities.len())?;

        responsibilities[index] = text;
        Ok(())
    }

    pub fn remove_responsibility(
        &mut self,
        experience: usize,
        index: usize,
    ) -> Result<(), EditorError> {
        let responsibilities = self.responsibilities_mut(experience)?;
        check_index(ListKind::Experiences, index, responsibilities.len())?;

        responsibilities.remove(index);
        Ok(())
    }

    fn responsibilities_mut(&mut self, experience: usize) -> Result<&mut Vec<String>, EditorError> {
        let experiences = &mut self.active_mut().experiences;
        check_index(ListKind::Experiences, experience, experiences.len())?;

        Ok(&mut experiences[experience].responsibilities)
    }

    /// Writes (or clears) the photo in both languages at once.
    pub fn set_photo(&mut self, photo: Option<String>) {
        self.content.set_profile_photo(photo);
    }

    pub fn replace_all(&mut self, mut content: BilingualContent) {
        content.unify_profile_photo();
        self.content = content;
    }

    /// An imported photo replaces the shared one; without one the shared
    /// photo stays.
    pub fn replace_active(&mut self, mut content: SiteContent) {
        let photo = content
            .about
            .profile_photo
            .take()
            .or_else(|| self.content.profile_photo().map(str::to_owned));
        *self.active_mut() = content;
        self.content.set_profile_photo(photo);
    }
}

/// `portfolio-content-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("portfolio-content-{}.json", date.format("%Y-%m-%d"))
}

fn validate_item(list: ListKind, item: ListItem) -> Result<ListItem, EditorError> {
    if item.list() != list {
        return Err(EditorError::ItemKindMismatch {
            expected: list,
            found: item.list(),
        });
    }

    if let ListItem::Language(skill) = &item {
        if skill.percentage > LanguageSkill::MAX_PERCENTAGE {
            return Err(EditorError::InvalidPercentage(skill.percentage));
        }
    }

    Ok(item)
}

fn check_index(list: ListKind, index: usize, len: usize) -> Result<(), EditorError> {
    if index < len {
        Ok(())
    } else {
        Err(EditorError::IndexOutOfRange { list, index, len })
    }
}

fn push_item(content: &mut SiteContent, item: ListItem) {
    match item {
        ListItem::Stat(v) => content.hero.stats.push(v),
        ListItem::PersonalInfo(v) => content.about.personal_info.push(v),
        ListItem::Skill(v) => content.about.skills.push(v),
        ListItem::Experience(v) => content.experiences.push(v),
        ListItem::Education(v) => content.education.push(v),
        ListItem::Certificate(v) => content.certificates.push(v),
        ListItem::Language(v) => content.languages.push(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::{default_content, Certificate};

    fn copy(language: Language) -> WorkingCopy {
        WorkingCopy::new(default_content().clone(), language)
    }

    fn cert(name: &str) -> ListItem {
        ListItem::Certificate(Certificate {
            name: name.to_string(),
            year: "2023".to_string(),
        })
    }

    #[test]
    fn scalar_edit_touches_only_the_active_language() {
        let mut wc = copy(Language::En);

        wc.set_field(ScalarField::HeroName, "Jane Doe".to_string());

        assert_eq!(wc.content().en.hero.name, "Jane Doe");
        assert_eq!(wc.content().uk, default_content().uk);
    }

    #[test]
    fn switching_language_keeps_edits_in_both_halves() {
        let mut wc = copy(Language::Uk);
        wc.set_field(ScalarField::ContactPhone, "+380111".to_string());

        wc.switch_language(Language::En);
        wc.set_field(ScalarField::ContactPhone, "+380222".to_string());

        assert_eq!(wc.content().uk.contact.phone, "+380111");
        assert_eq!(wc.content().en.contact.phone, "+380222");
        assert_eq!(wc.language(), Language::En);
    }

    #[test]
    fn append_without_item_uses_language_placeholder() {
        let mut wc = copy(Language::Uk);
        let before = wc.active().certificates.len();

        let index = wc.append(ListKind::Certificates, None).unwrap();

        assert_eq!(index, before);
        assert_eq!(wc.active().certificates[index].name, "Новий сертифікат");
        assert_eq!(wc.content().en.certificates, default_content().en.certificates);
    }

    #[test]
    fn appended_items_keep_insertion_order() {
        let mut wc = copy(Language::En);
        wc.append(ListKind::Certificates, Some(cert("First"))).unwrap();
        wc.append(ListKind::Certificates, Some(cert("Second"))).unwrap();

        let names: Vec<&str> = wc
            .active()
            .certificates
            .iter()
            .rev()
            .take(2)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn remove_reindexes_following_entries() {
        let mut wc = copy(Language::En);
        let second = wc.active().experiences[1].clone();

        wc.remove(ListKind::Experiences, 0).unwrap();

        assert_eq!(wc.active().experiences[0], second);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut wc = copy(Language::En);
        let len = wc.active().certificates.len();

        assert_eq!(
            wc.remove(ListKind::Certificates, len),
            Err(EditorError::IndexOutOfRange {
                list: ListKind::Certificates,
                index: len,
                len,
            })
        );
        assert!(wc.replace(ListKind::Certificates, len, cert("X")).is_err());
    }

    #[test]
    fn item_for_another_list_is_rejected() {
        let mut wc = copy(Language::En);

        let result = wc.replace(ListKind::Education, 0, cert("Wrong list"));

        assert_eq!(
            result,
            Err(EditorError::ItemKindMismatch {
                expected: ListKind::Education,
                found: ListKind::Certificates,
            })
        );
    }

    #[test]
    fn percentage_above_hundred_is_rejected() {
        let mut wc = copy(Language::En);
        let item = ListItem::Language(LanguageSkill {
            name: "German".to_string(),
            level: "B1".to_string(),
            percentage: 101,
        });

        assert_eq!(
            wc.append(ListKind::Languages, Some(item)),
            Err(EditorError::InvalidPercentage(101))
        );
    }

    #[test]
    fn responsibilities_are_edited_per_experience() {
        let mut wc = copy(Language::En);
        let original = wc.active().experiences[0].responsibilities.len();

        let index = wc.append_responsibility(0, None).unwrap();
        assert_eq!(index, original);
        assert_eq!(
            wc.active().experiences[0].responsibilities[index],
            "New responsibility"
        );

        wc.replace_responsibility(0, 0, "Rewritten".to_string())
            .unwrap();
        wc.remove_responsibility(0, index).unwrap();

        let responsibilities = &wc.active().experiences[0].responsibilities;
        assert_eq!(responsibilities.len(), original);
        assert_eq!(responsibilities[0], "Rewritten");
    }

    #[test]
    fn responsibility_on_missing_experience_is_rejected() {
        let mut wc = copy(Language::En);
        let len = wc.active().experiences.len();

        assert!(matches!(
            wc.append_responsibility(len, None),
            Err(EditorError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn photo_is_written_to_both_languages() {
        let mut wc = copy(Language::Uk);

        wc.set_photo(Some("data:image/png;base64,AAAA".to_string()));
        assert_eq!(
            wc.content().en.about.profile_photo.as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        wc.set_photo(None);
        assert!(wc.content().profile_photo().is_none());
        assert!(wc.content().en.about.profile_photo.is_none());
    }

    #[test]
    fn replace_active_leaves_other_language() {
        let mut wc = copy(Language::En);
        let mut legacy = default_content().uk.clone();
        legacy.hero.name = "Imported".to_string();

        wc.replace_active(legacy.clone());

        assert_eq!(wc.content().en, legacy);
        assert_eq!(wc.content().uk, default_content().uk);
    }

    #[test]
    fn replace_active_keeps_shared_photo_when_import_has_none() {
        let mut wc = copy(Language::En);
        wc.set_photo(Some("data:image/png;base64,AAAA".to_string()));

        wc.replace_active(default_content().en.clone());

        assert_eq!(
            wc.content().uk.about.profile_photo.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(
            wc.content().en.about.profile_photo,
            wc.content().uk.about.profile_photo
        );
    }

    #[test]
    fn replace_active_shares_imported_photo() {
        let mut wc = copy(Language::En);
        let mut legacy = default_content().en.clone();
        legacy.about.profile_photo = Some("data:image/jpeg;base64,BBBB".to_string());

        wc.replace_active(legacy);

        assert_eq!(
            wc.content().uk.about.profile_photo.as_deref(),
            Some("data:image/jpeg;base64,BBBB")
        );
        assert_eq!(
            wc.content().en.about.profile_photo,
            wc.content().uk.about.profile_photo
        );
    }

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "portfolio-content-2025-03-07.json");
    }
}
