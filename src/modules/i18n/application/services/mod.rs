mod language_preference_store;

pub use language_preference_store::LanguagePreferenceStore;
