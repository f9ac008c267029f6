//! Site configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock page. Social link targets are only known through this file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::SocialPlatform;

/// Default splash delay in milliseconds.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// Default logo asset path.
pub const DEFAULT_LOGO_PATH: &str = "/henna-logo.svg";

/// Target used for links with no configured destination.
pub const PLACEHOLDER_HREF: &str = "#";

/// Errors raised while loading a site config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime configuration for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// How long the splash screen stays up.
    pub splash_delay_ms: u64,

    /// Logo shown in the header and on the splash screen.
    pub logo_path: String,

    /// Social link destinations.
    pub social: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            social: SocialLinks::default(),
        }
    }
}

impl SiteConfig {
    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the given file, falling back to defaults if it is missing or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file given, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded site config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Splash delay as a [`Duration`].
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }
}

/// Optional destinations for the social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Link target for a platform, `#` when unset.
    pub fn href(&self, platform: SocialPlatform) -> &str {
        let target = match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
        };
        target.as_deref().unwrap_or(PLACEHOLDER_HREF)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_reference_page() {
        let config = SiteConfig::default();
        assert_eq!(config.splash_delay(), Duration::from_millis(2000));
        assert_eq!(config.logo_path, "/henna-logo.svg");
    }

    #[test]
    fn test_unset_social_links_are_placeholders() {
        let links = SocialLinks::default();
        for platform in SocialPlatform::ALL {
            assert_eq!(links.href(platform), "#");
        }
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            splash_delay_ms = 500

            [social]
            instagram = "https://instagram.com/fariashenna"
            "#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.splash_delay_ms, 500);
        assert_eq!(config.logo_path, DEFAULT_LOGO_PATH);
        assert_eq!(
            config.social.href(SocialPlatform::Instagram),
            "https://instagram.com/fariashenna"
        );
        assert_eq!(config.social.href(SocialPlatform::Facebook), "#");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "splash_delay_ms = \"soon\"").unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert_eq!(SiteConfig::load_or_default(Some(&missing)), SiteConfig::default());
        assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config: SiteConfig = toml::from_str(include_str!("../site.example.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_phone_key_is_ignored() {
        let config: SiteConfig = toml::from_str(
            r#"
            splash_delay_ms = 2000
            phone = "+880 0000 000000"
            "#,
        )
        .unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
