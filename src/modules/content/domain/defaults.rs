//! Compiled-in default copy for both languages.

use std::sync::OnceLock;

use super::entities::{
    AboutContent, BilingualContent, Certificate, ContactInfo, Education, Experience, HeroContent,
    LanguageSkill, PersonalInfoItem, SiteContent, Stat,
};

/// Shared baseline used as the fallback and as the "not yet customised"
/// reference.
pub fn default_content() -> &'static BilingualContent {
    static DEFAULTS: OnceLock<BilingualContent> = OnceLock::new();
    DEFAULTS.get_or_init(|| BilingualContent {
        uk: ukrainian(),
        en: english(),
    })
}

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: s(value),
        label: s(label),
    }
}

fn info(label: &str, value: &str) -> PersonalInfoItem {
    PersonalInfoItem {
        label: s(label),
        value: s(value),
    }
}

fn ukrainian() -> SiteContent {
    SiteContent {
        hero: HeroContent {
            name: s("Олена Коваль"),
            title: s("IT-спеціаліст"),
            description: s(
                "15+ років досвіду в інформаційній безпеці, адмініструванні систем та IT-менеджменті",
            ),
            stats: vec![
                stat("15+", "Років досвіду"),
                stat("6+", "Компаній"),
                stat("∞", "Проектів"),
            ],
        },
        about: AboutContent {
            description: s(
                "IT-експерт з понад 15-річним досвідом роботи в галузі інформаційної безпеки, \
                 системного адміністрування та IT-менеджменту. Спеціалізуюся на захисті \
                 корпоративних ресурсів, розгортанні безпечної інфраструктури та впровадженні \
                 сучасних рішень для бізнесу.",
            ),
            personal_info: vec![
                info("Ім'я", "Олена Коваль"),
                info("Місто", "Київ, Україна"),
                info("Телефон", "+380000000000"),
                info("Email", "hello@example.com"),
            ],
            skills: strings(&[
                "Інформаційна безпека",
                "Системне адміністрування",
                "IT-менеджмент",
                "DevOps",
                "Мережеві технології",
            ]),
            profile_photo: None,
        },
        experiences: vec![
            Experience {
                company: s("Digital Forensics Corporation"),
                period: s("08.2021 – 05.2025"),
                title: s("IT Security Specialist"),
                responsibilities: strings(&[
                    "Захист ресурсів, шифрування даних, аналітика інцидентів",
                    "Захист від витоку даних (DLP)",
                    "Планування заходів безпеки та виявлення вразливостей",
                    "Адміністрування VMware, Proxmox, Veeam Backup",
                    "Скриптинг (Python, PowerShell, bash)",
                ]),
                link: None,
            },
            Experience {
                company: s("ТОВ \"Приклад Рітейл\""),
                period: s("06.2016 – 08.2021"),
                title: s("IT Manager / Security Lead"),
                responsibilities: strings(&[
                    "Розробка IT-стратегії та побудова інформаційної безпеки",
                    "Забезпечення роботи та розвиток IT-інфраструктури",
                    "WEB-сервери (nginx, apache), резервне копіювання",
                ]),
                link: Some(s("https://example.com/")),
            },
            Experience {
                company: s("ТОВ \"Лакінет\""),
                period: s("01.2008 – 08.2009"),
                title: s("Technical Support Engineer"),
                responsibilities: strings(&[
                    "Моніторинг сервісів",
                    "Технічна підтримка",
                    "Документація",
                ]),
                link: None,
            },
        ],
        education: vec![
            Education {
                institution: s("Міжнародний інститут бізнесу"),
                degree: s("Магістр"),
                field: s("Бізнес адміністрування"),
                period: s("2012 – 2015"),
            },
            Education {
                institution: s("Національний університет харчових технологій"),
                degree: s("Бакалавр"),
                field: s("Автоматизація та комп'ютерні системи"),
                period: s("2003 – 2008"),
            },
        ],
        certificates: vec![
            Certificate {
                name: s("Побудова систем IP-телефонії"),
                year: s("2013"),
            },
            Certificate {
                name: s("National MBA Program"),
                year: s("2015"),
            },
        ],
        languages: vec![
            LanguageSkill {
                name: s("Українська"),
                level: s("Вільно"),
                percentage: 100,
            },
            LanguageSkill {
                name: s("Англійська"),
                level: s("Середній рівень"),
                percentage: 60,
            },
        ],
        contact: ContactInfo {
            phone: s("+380000000000"),
            email: s("hello@example.com"),
            location: s("Київ, Україна"),
            collaboration_title: s("Готовий до співпраці?"),
            collaboration_text: s(
                "Понад 15 років досвіду в IT-безпеці та адмініструванні систем. Працюю з \
                 компаніями різного масштабу — від стартапів до корпорацій.",
            ),
        },
    }
}

fn english() -> SiteContent {
    SiteContent {
        hero: HeroContent {
            name: s("Olena Koval"),
            title: s("IT Specialist"),
            description: s(
                "15+ years of experience in information security, systems administration and IT management",
            ),
            stats: vec![
                stat("15+", "Years of experience"),
                stat("6+", "Companies"),
                stat("∞", "Projects"),
            ],
        },
        about: AboutContent {
            description: s(
                "IT expert with more than 15 years of experience in information security, \
                 systems administration and IT management. I specialise in protecting \
                 corporate resources, deploying secure infrastructure and introducing modern \
                 solutions for business.",
            ),
            personal_info: vec![
                info("Name", "Olena Koval"),
                info("City", "Kyiv, Ukraine"),
                info("Phone", "+380000000000"),
                info("Email", "hello@example.com"),
            ],
            skills: strings(&[
                "Information security",
                "Systems administration",
                "IT management",
                "DevOps",
                "Networking",
            ]),
            profile_photo: None,
        },
        experiences: vec![
            Experience {
                company: s("Digital Forensics Corporation"),
                period: s("08.2021 – 05.2025"),
                title: s("IT Security Specialist"),
                responsibilities: strings(&[
                    "Resource protection, data encryption, incident analytics",
                    "Data loss prevention (DLP)",
                    "Security planning and vulnerability discovery",
                    "VMware, Proxmox and Veeam Backup administration",
                    "Scripting (Python, PowerShell, bash)",
                ]),
                link: None,
            },
            Experience {
                company: s("Example Retail LLC"),
                period: s("06.2016 – 08.2021"),
                title: s("IT Manager / Security Lead"),
                responsibilities: strings(&[
                    "IT strategy and information security programme",
                    "Operating and growing the IT infrastructure",
                    "Web servers (nginx, apache), backups",
                ]),
                link: Some(s("https://example.com/")),
            },
            Experience {
                company: s("Lakinet LLC"),
                period: s("01.2008 – 08.2009"),
                title: s("Technical Support Engineer"),
                responsibilities: strings(&[
                    "Service monitoring",
                    "Technical support",
                    "Documentation",
                ]),
                link: None,
            },
        ],
        education: vec![
            Education {
                institution: s("International Institute of Business"),
                degree: s("Master"),
                field: s("Business Administration"),
                period: s("2012 – 2015"),
            },
            Education {
                institution: s("National University of Food Technologies"),
                degree: s("Bachelor"),
                field: s("Automation and Computer Systems"),
                period: s("2003 – 2008"),
            },
        ],
        certificates: vec![
            Certificate {
                name: s("Building IP telephony systems"),
                year: s("2013"),
            },
            Certificate {
                name: s("National MBA Program"),
                year: s("2015"),
            },
        ],
        languages: vec![
            LanguageSkill {
                name: s("Ukrainian"),
                level: s("Fluent"),
                percentage: 100,
            },
            LanguageSkill {
                name: s("English"),
                level: s("Intermediate"),
                percentage: 60,
            },
        ],
        contact: ContactInfo {
            phone: s("+380000000000"),
            email: s("hello@example.com"),
            location: s("Kyiv, Ukraine"),
            collaboration_title: s("Ready to collaborate?"),
            collaboration_text: s(
                "Over 15 years of experience in IT security and systems administration. I work \
                 with companies of every size, from start-ups to corporations.",
            ),
        },
    }
}
