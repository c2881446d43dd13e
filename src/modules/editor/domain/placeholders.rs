//! Non-empty starter entries appended by "add" actions, in the language
//! being edited.

use crate::content::domain::{
    Certificate, Education, Experience, Language, LanguageSkill, PersonalInfoItem, Stat,
};

use super::fields::{ListItem, ListKind};

pub fn placeholder(list: ListKind, lang: Language) -> ListItem {
    let uk = lang == Language::Uk;
    let pick = |uk_text: &str, en_text: &str| -> String {
        let text = if uk { uk_text } else { en_text };
        text.to_string()
    };

    match list {
        ListKind::Stats => ListItem::Stat(Stat {
            value: "0".to_string(),
            label: pick("Показник", "Metric"),
        }),
        ListKind::PersonalInfo => ListItem::PersonalInfo(PersonalInfoItem {
            label: pick("Мітка", "Label"),
            value: pick("Значення", "Value"),
        }),
        ListKind::Skills => ListItem::Skill(pick("Нова навичка", "New skill")),
        ListKind::Experiences => ListItem::Experience(Experience {
            company: pick("Нова компанія", "New company"),
            period: pick("2024 – теперішній", "2024 – present"),
            title: pick("Посада", "Position"),
            responsibilities: vec![pick("Обов'язок 1", "Responsibility 1")],
            link: None,
        }),
        ListKind::Education => ListItem::Education(Education {
            institution: pick("Новий навчальний заклад", "New institution"),
            degree: pick("Ступінь", "Degree"),
            field: pick("Спеціальність", "Field of study"),
            period: "2020 – 2024".to_string(),
        }),
        ListKind::Certificates => ListItem::Certificate(Certificate {
            name: pick("Новий сертифікат", "New certificate"),
            year: "2024".to_string(),
        }),
        ListKind::Languages => ListItem::Language(LanguageSkill {
            name: pick("Нова мова", "New language"),
            level: pick("Базовий", "Basic"),
            percentage: 30,
        }),
    }
}

pub fn responsibility_placeholder(lang: Language) -> String {
    match lang {
        Language::Uk => "Новий обов'язок".to_string(),
        Language::En => "New responsibility".to_string(),
    }
}
