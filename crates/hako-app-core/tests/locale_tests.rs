#![allow(missing_docs)]
//! Tests for the language selection value and the prefs seam it rides on.

use hako_app_core::locale::{Language, LocalePrefs};
use hako_app_core::prefs::{MemoryStore, PrefsService};

#[test]
fn recognized_tags_resolve() {
    assert_eq!(Language::from_tag("ja"), Language::Japanese);
    assert_eq!(Language::from_tag("Japanese"), Language::Japanese);
    assert_eq!(Language::from_tag(" JA "), Language::Japanese);
    assert_eq!(Language::from_tag("en"), Language::English);
}

#[test]
fn unrecognized_tags_fall_back_to_the_default() {
    assert_eq!(Language::from_tag("fr"), Language::English);
    assert_eq!(Language::from_tag(""), Language::English);
    assert_eq!(Language::default(), Language::English);
}

#[test]
fn parsing_never_fails() {
    let lang: Language = "klingon".parse().unwrap_or_default();
    assert_eq!(lang, Language::English);
    let lang: Language = "ja".parse().unwrap_or_default();
    assert_eq!(lang, Language::Japanese);
}

#[test]
fn display_uses_the_canonical_tag() {
    assert_eq!(Language::English.to_string(), "en");
    assert_eq!(Language::Japanese.to_string(), "ja");
}

#[test]
fn locale_prefs_serde_round_trip() {
    let prefs = LocalePrefs {
        language: Language::Japanese,
    };
    let json = serde_json::to_string(&prefs).unwrap();
    assert_eq!(json, r#"{"language":"ja"}"#);
    let back: LocalePrefs = serde_json::from_str(&json).unwrap();
    assert_eq!(back, prefs);
}

#[test]
fn serde_fallback_for_unrecognized_language() {
    let prefs: LocalePrefs = serde_json::from_str(r#"{"language":"zz"}"#).unwrap();
    assert_eq!(prefs.language, Language::English);
    // A missing field also resolves to the default.
    let prefs: LocalePrefs = serde_json::from_str("{}").unwrap();
    assert_eq!(prefs.language, Language::English);
}

#[test]
fn prefs_service_persists_locale_prefs() {
    let mut svc = PrefsService::new(MemoryStore::new());
    let saved = LocalePrefs {
        language: Language::Japanese,
    };
    svc.save("locale", &saved).unwrap();
    let loaded: LocalePrefs = svc.load("locale").unwrap().unwrap_or_default();
    assert_eq!(loaded, saved);
}

#[test]
fn missing_prefs_key_yields_the_default_language() {
    let svc = PrefsService::new(MemoryStore::new());
    let prefs: LocalePrefs = svc.load_or_default("locale").unwrap();
    assert_eq!(prefs.language, Language::English);
}
