// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for the supported languages.
//!
//! Translation files are embedded at compile time from `assets/i18n/` and
//! parsed once at startup. A message missing from the active bundle renders
//! as `MISSING: <id>` and is logged.

use super::keys::UiText;
use crate::domain::language::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

impl I18n {
    /// Loads every embedded bundle and activates `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let bundles = Language::ALL
            .into_iter()
            .filter_map(|lang| load_bundle(lang).map(|bundle| (lang, bundle)))
            .collect();

        Self {
            bundles,
            current: language,
        }
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        if self.bundles.contains_key(&language) {
            self.current = language;
        } else {
            tracing::warn!(language = language.code(), "no bundle for language");
        }
    }

    /// Translates `key` in the active language.
    #[must_use]
    pub fn tr(&self, key: UiText) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting Fluent variables from `args`.
    #[must_use]
    pub fn tr_with_args(&self, key: UiText, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Returns true when `key` has a value in the bundle for `language`.
    #[must_use]
    pub fn has_message(&self, language: Language, key: UiText) -> bool {
        self.bundles
            .get(&language)
            .and_then(|bundle| bundle.get_message(key.id()))
            .is_some_and(|message| message.value().is_some())
    }

    fn format(&self, key: UiText, args: Option<&FluentArgs<'_>>) -> String {
        let id = key.id();
        let pattern = self
            .bundles
            .get(&self.current)
            .and_then(|bundle| bundle.get_message(id).map(|msg| (bundle, msg)))
            .and_then(|(bundle, msg)| msg.value().map(|pattern| (bundle, pattern)));

        let Some((bundle, pattern)) = pattern else {
            tracing::warn!(id, language = self.current.code(), "missing translation");
            return format!("MISSING: {id}");
        };

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(id, ?errors, "translation formatted with errors");
        }
        value.into_owned()
    }
}

fn load_bundle(language: Language) -> Option<FluentBundle<FluentResource>> {
    let file_name = format!("{}.ftl", language.code());
    let Some(file) = Asset::get(&file_name) else {
        tracing::warn!(file = %file_name, "translation file not embedded");
        return None;
    };

    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(file = %file_name, ?errors, "translation file has syntax errors");
        partial
    });

    let locale = language
        .code()
        .parse::<LanguageIdentifier>()
        .unwrap_or_default();
    let mut bundle = FluentBundle::new(vec![locale]);
    // Isolation marks would end up verbatim in widget text.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = %file_name, ?errors, "duplicate translation messages");
    }
    Some(bundle)
}

/// Picks the startup language.
///
/// The first of `cli`, `config` and `os_locale` naming a supported language
/// wins; otherwise English.
#[must_use]
pub fn resolve_language(
    cli: Option<&str>,
    config: Option<&str>,
    os_locale: Option<&str>,
) -> Language {
    [cli, config, os_locale]
        .into_iter()
        .flatten()
        .find_map(Language::from_code)
        .unwrap_or_default()
}

/// [`resolve_language`] with the locale reported by the operating system.
#[must_use]
pub fn detect_language(cli: Option<&str>, config: Option<&str>) -> Language {
    let os_locale = sys_locale::get_locale();
    resolve_language(cli, config, os_locale.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_exists_in_every_bundle() {
        let i18n = I18n::default();
        for language in Language::ALL {
            for key in UiText::ALL {
                assert!(
                    i18n.has_message(language, key),
                    "{} is missing from {}.ftl",
                    key.id(),
                    language.code()
                );
            }
        }
    }

    #[test]
    fn switching_language_changes_text() {
        let mut i18n = I18n::new(Language::English);
        assert_eq!(i18n.tr(UiText::SubmitButton), "Predict CKD Risk");

        i18n.set_language(Language::Hindi);
        assert_eq!(i18n.current_language(), Language::Hindi);
        assert_eq!(i18n.tr(UiText::SubmitButton), "CKD जोखिम पूर्वानुमान");

        i18n.set_language(Language::Kannada);
        assert_eq!(i18n.tr(UiText::SubmitButton), "CKD ಅಪಾಯ ಮುನ್ಸೂಚನೆ");
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        let i18n = I18n::new(Language::English);
        let text = i18n.tr_with_args(UiText::ReportSaved, &[("path", "/tmp/CKD_Report_1.pdf")]);
        assert_eq!(text, "Report saved to /tmp/CKD_Report_1.pdf");
    }

    #[test]
    fn cli_language_wins() {
        assert_eq!(
            resolve_language(Some("kn"), Some("hi"), Some("en-US")),
            Language::Kannada
        );
    }

    #[test]
    fn unsupported_sources_are_skipped() {
        assert_eq!(
            resolve_language(Some("fr"), Some("hi"), None),
            Language::Hindi
        );
        assert_eq!(
            resolve_language(None, Some("de"), Some("kn_IN.UTF-8")),
            Language::Kannada
        );
    }

    #[test]
    fn english_is_the_last_resort() {
        assert_eq!(resolve_language(None, None, None), Language::English);
        assert_eq!(
            resolve_language(Some("fr"), Some("de"), Some("ja-JP")),
            Language::English
        );
    }
}
