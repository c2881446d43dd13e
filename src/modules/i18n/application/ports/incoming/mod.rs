mod language_preference;

pub use language_preference::{LanguagePreferenceError, LanguagePreferenceUseCase};
