//! Fixed interface copy (navigation, buttons, form labels). Unlike site
//! content this is not editable.

use serde::Serialize;
use utoipa::ToSchema;

use crate::content::domain::Language;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub experience: ExperienceStrings,
    pub education: EducationStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavStrings {
    pub about: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub contact_btn: &'static str,
    pub experience_btn: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutStrings {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub security_expert: &'static str,
    pub labels: AboutLabels,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutLabels {
    pub name: &'static str,
    pub city: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceStrings {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub view_project: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationStrings {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub education_title: &'static str,
    pub certificates: &'static str,
    pub languages: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactStrings {
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub form: ContactFormStrings,
    pub success: ContactSuccessStrings,
    pub toast: ContactToastStrings,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormStrings {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub phone: &'static str,
    pub phone_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactSuccessStrings {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactToastStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub error_title: &'static str,
    pub error_description: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FooterStrings {
    pub created_with: &'static str,
    pub and_technologies: &'static str,
    pub back_to_top: &'static str,
}

impl UiStrings {
    pub fn for_language(lang: Language) -> &'static UiStrings {
        match lang {
            Language::Uk => &UK,
            Language::En => &EN,
        }
    }
}

static UK: UiStrings = UiStrings {
    nav: NavStrings {
        about: "Про мене",
        experience: "Досвід",
        education: "Освіта",
        contact: "Контакти",
    },
    hero: HeroStrings {
        contact_btn: "Зв'язатися",
        experience_btn: "Мій досвід",
    },
    about: AboutStrings {
        title: "мене",
        title_highlight: "Про",
        security_expert: "Security Expert",
        labels: AboutLabels {
            name: "Ім'я",
            city: "Місто",
            phone: "Телефон",
            email: "Email",
        },
    },
    experience: ExperienceStrings {
        title: "роботи",
        title_highlight: "Досвід",
        view_project: "Переглянути проект",
    },
    education: EducationStrings {
        title: "та навички",
        title_highlight: "Освіта",
        education_title: "Освіта",
        certificates: "Сертифікати",
        languages: "Мови",
    },
    contact: ContactStrings {
        title: "зі мною",
        title_highlight: "Зв'язатися",
        subtitle: "Маєте пропозицію або питання? Заповніть форму або зв'яжіться напряму.",
        phone: "Телефон",
        email: "Email",
        location: "Локація",
        form: ContactFormStrings {
            name: "Ім'я",
            name_placeholder: "Ваше ім'я",
            email: "Email",
            email_placeholder: "your@email.com",
            phone: "Телефон",
            phone_placeholder: "+380 XX XXX XX XX",
            message: "Повідомлення",
            message_placeholder: "Ваше повідомлення...",
            submit: "Надіслати",
            sending: "Надсилання...",
        },
        success: ContactSuccessStrings {
            title: "Дякую!",
            message: "Ваше повідомлення успішно надіслано.",
        },
        toast: ContactToastStrings {
            title: "Повідомлення надіслано!",
            description: "Дякую за звернення. Я зв'яжуся з вами найближчим часом.",
            error_title: "Помилка",
            error_description: "Не вдалося надіслати повідомлення. Спробуйте ще раз.",
        },
    },
    footer: FooterStrings {
        created_with: "Створено з",
        and_technologies: "та технологіями.",
        back_to_top: "На початок ↑",
    },
};

static EN: UiStrings = UiStrings {
    nav: NavStrings {
        about: "About",
        experience: "Experience",
        education: "Education",
        contact: "Contact",
    },
    hero: HeroStrings {
        contact_btn: "Contact Me",
        experience_btn: "My Experience",
    },
    about: AboutStrings {
        title: "me",
        title_highlight: "About",
        security_expert: "Security Expert",
        labels: AboutLabels {
            name: "Name",
            city: "City",
            phone: "Phone",
            email: "Email",
        },
    },
    experience: ExperienceStrings {
        title: "experience",
        title_highlight: "Work",
        view_project: "View Project",
    },
    education: EducationStrings {
        title: "& Skills",
        title_highlight: "Education",
        education_title: "Education",
        certificates: "Certificates",
        languages: "Languages",
    },
    contact: ContactStrings {
        title: "with me",
        title_highlight: "Connect",
        subtitle: "Have a proposal or question? Fill out the form or contact me directly.",
        phone: "Phone",
        email: "Email",
        location: "Location",
        form: ContactFormStrings {
            name: "Name",
            name_placeholder: "Your name",
            email: "Email",
            email_placeholder: "your@email.com",
            phone: "Phone",
            phone_placeholder: "+380 XX XXX XX XX",
            message: "Message",
            message_placeholder: "Your message...",
            submit: "Send",
            sending: "Sending...",
        },
        success: ContactSuccessStrings {
            title: "Thank you!",
            message: "Your message has been sent successfully.",
        },
        toast: ContactToastStrings {
            title: "Message sent!",
            description: "Thank you for reaching out. I will contact you soon.",
            error_title: "Error",
            error_description: "Failed to send message. Please try again.",
        },
    },
    footer: FooterStrings {
        created_with: "Created with",
        and_technologies: "and technologies.",
        back_to_top: "Back to top ↑",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_has_its_own_table() {
        assert_eq!(UiStrings::for_language(Language::Uk).nav.about, "Про мене");
        assert_eq!(UiStrings::for_language(Language::En).nav.about, "About");
    }

    #[test]
    fn serialises_nested_keys_in_camel_case() {
        let json = serde_json::to_value(UiStrings::for_language(Language::En)).unwrap();

        assert_eq!(json["contact"]["form"]["namePlaceholder"], "Your name");
        assert_eq!(json["footer"]["backToTop"], "Back to top ↑");
    }
}
