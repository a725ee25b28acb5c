// SPDX-License-Identifier: MPL-2.0
//! Supported UI languages.

use std::fmt;
use std::str::FromStr;

/// A language the interface can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    #[default]
    English,
    Kannada,
    Hindi,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 3] = [Language::English, Language::Kannada, Language::Hindi];

    /// Short language code, also the name of the embedded `.ftl` resource.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kannada => "kn",
            Language::Hindi => "hi",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Parses a language code or a full locale (`hi-IN`, `kn_IN.UTF-8`).
    ///
    /// Only the primary subtag is considered. Returns `None` for languages
    /// the interface has no translation for.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::ALL.into_iter().find(|lang| lang.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}
