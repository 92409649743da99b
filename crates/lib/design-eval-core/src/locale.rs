use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output language of the rendered instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Ja,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0} (expected en or ja)")]
pub struct LocaleError(pub String);

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Text rendered in place of an omitted optional value.
    #[must_use]
    pub const fn none_placeholder(self) -> &'static str {
        match self {
            Self::En => "(none)",
            Self::Ja => "(なし)",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ja" | "jp" | "japanese" => Ok(Self::Ja),
            _ => Err(LocaleError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" Japanese ".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!("jp".parse::<Locale>(), Ok(Locale::Ja));
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = "fr".parse::<Locale>().expect_err("fr is not supported");
        assert_eq!(err, LocaleError("fr".to_string()));
    }

    #[test]
    fn placeholders_differ_per_locale() {
        assert_eq!(Locale::En.none_placeholder(), "(none)");
        assert_eq!(Locale::Ja.none_placeholder(), "(なし)");
    }
}
