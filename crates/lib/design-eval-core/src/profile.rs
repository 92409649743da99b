//! Server profile: the settings that distinguish one prompt-server variant
//! from another.
//!
//! A profile is loaded from TOML. Every key is optional:
//!
//! ```toml
//! server_name = "design-eval-director"
//! locale = "ja"
//!
//! [wiki]
//! name = "Confluence"
//! vendor = "Atlassian"
//! tool_examples = ["search", "get_page", "get_content"]
//!
//! [defaults]
//! project_root = "."
//! max_depth = 3
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::locale::Locale;
use crate::templates::MAX_SCAN_DEPTH;

pub const DEFAULT_SERVER_NAME: &str = "design-eval-director";
pub const DEFAULT_PROJECT_ROOT: &str = ".";
pub const DEFAULT_MAX_DEPTH: u32 = 3;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid profile value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptProfile {
    pub server_name: String,
    pub locale: Locale,
    pub wiki: WikiProfile,
    pub defaults: DefaultsProfile,
}

/// Wiki product the design documents live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikiProfile {
    pub name: String,
    pub vendor: Option<String>,
    pub tool_examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsProfile {
    pub project_root: String,
    pub max_depth: u32,
}

impl Default for PromptProfile {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            locale: Locale::default(),
            wiki: WikiProfile::default(),
            defaults: DefaultsProfile::default(),
        }
    }
}

impl Default for WikiProfile {
    fn default() -> Self {
        Self {
            name: "Confluence".to_string(),
            vendor: Some("Atlassian".to_string()),
            tool_examples: vec![
                "search".to_string(),
                "get_page".to_string(),
                "get_content".to_string(),
            ],
        }
    }
}

impl Default for DefaultsProfile {
    fn default() -> Self {
        Self {
            project_root: DEFAULT_PROJECT_ROOT.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PromptProfile {
    /// Parses and validates a profile from TOML text.
    ///
    /// # Errors
    /// Returns [`ProfileError::Parse`] for malformed TOML and
    /// [`ProfileError::Invalid`] when a value fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        let profile: Self = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    /// Returns [`ProfileError::Read`] when the file cannot be read, otherwise
    /// the same errors as [`PromptProfile::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), server = %profile.server_name, "loaded profile");
        Ok(profile)
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Checks invariants that serde defaults cannot express.
    ///
    /// # Errors
    /// Returns [`ProfileError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.server_name.trim().is_empty() {
            return Err(invalid("server_name", "must not be blank"));
        }
        if self.wiki.name.trim().is_empty() {
            return Err(invalid("wiki.name", "must not be blank"));
        }
        if self.defaults.project_root.trim().is_empty() {
            return Err(invalid("defaults.project_root", "must not be blank"));
        }
        if self.defaults.max_depth > MAX_SCAN_DEPTH {
            return Err(invalid(
                "defaults.max_depth",
                format!(
                    "{} exceeds the maximum of {MAX_SCAN_DEPTH}",
                    self.defaults.max_depth
                ),
            ));
        }
        Ok(())
    }
}

impl WikiProfile {
    /// Human-readable name of the wiki's MCP server in the given locale.
    #[must_use]
    pub fn server_label(&self, locale: Locale) -> String {
        self.mcp_label(locale, "server", "サーバ")
    }

    /// Name of the wiki's MCP tool set, e.g. `Atlassian公式の Confluence MCP ツール`.
    #[must_use]
    pub fn tools_label(&self, locale: Locale) -> String {
        self.mcp_label(locale, "tools", "ツール")
    }

    fn mcp_label(&self, locale: Locale, noun_en: &str, noun_ja: &str) -> String {
        let vendor = self
            .vendor
            .as_deref()
            .map(str::trim)
            .filter(|vendor| !vendor.is_empty());
        match (locale, vendor) {
            (Locale::En, Some(vendor)) => format!("official {vendor} {} MCP {noun_en}", self.name),
            (Locale::En, None) => format!("{} MCP {noun_en}", self.name),
            (Locale::Ja, Some(vendor)) => format!("{vendor}公式の {} MCP {noun_ja}", self.name),
            (Locale::Ja, None) => format!("{} MCP {noun_ja}", self.name),
        }
    }

    /// Tool names quoted as examples, e.g. `search/get_page/get_content`.
    #[must_use]
    pub fn tool_hint(&self) -> String {
        self.tool_examples.join("/")
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ProfileError {
    ProfileError::Invalid {
        field,
        message: message.into(),
    }
}
