//! Configuration file support.
//!
//! Loads an optional `liquid-showcase.toml` from the working directory, or the
//! file named by `--config`. Command-line flags win over file values.
//!
//! ```toml
//! output = "site/index.html"
//! title = "Liquid Transitions Index"
//! reduced_motion = true
//! open = ["gooey-swipe"]
//! ```

use crate::error::ShowcaseError;
use liquid_showcase::RenderOptions;
use liquid_showcase::catalog;
use liquid_showcase::disclosure::DisclosureState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "liquid-showcase.toml";

/// Output file used when neither flags nor config name one.
pub const DEFAULT_OUTPUT: &str = "index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Where `render` writes the page
    pub output: Option<PathBuf>,
    /// Document title
    pub title: Option<String>,
    /// Emit the reduced-motion guard stylesheet
    pub reduced_motion: Option<bool>,
    /// Entry ids whose code starts expanded
    pub open: Vec<String>,
}

impl ShowcaseConfig {
    /// Load the explicit config, or the default file if it exists.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ShowcaseError> {
        match explicit {
            Some(path) if !path.exists() => Err(ShowcaseError::ConfigNotFound(path.to_path_buf())),
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    debug!("no {} in working directory, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ShowcaseError> {
        let content = std::fs::read_to_string(path).map_err(|source| ShowcaseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ShowcaseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Where the rendered page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to a file (parent directories are created)
    File(PathBuf),
    /// Write to standard output
    Stdout,
}

/// Command-line overrides for `render`.
///
/// Kept free of clap types so resolution can be tested directly.
#[derive(Debug, Default, Clone)]
pub struct RenderOverrides {
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub title: Option<String>,
    pub open: Vec<String>,
    pub no_reduced_motion: bool,
}

/// Fully resolved `render` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRender {
    pub target: OutputTarget,
    pub options: RenderOptions,
}

/// Merge config and flags; reject ids that are not in the catalog.
pub fn resolve_render(
    config: &ShowcaseConfig,
    overrides: &RenderOverrides,
) -> Result<ResolvedRender, ShowcaseError> {
    let target = if overrides.stdout {
        OutputTarget::Stdout
    } else {
        let path = overrides
            .output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        OutputTarget::File(path)
    };

    let defaults = RenderOptions::default();
    let title = overrides
        .title
        .clone()
        .or_else(|| config.title.clone())
        .unwrap_or(defaults.title);
    let reduced_motion = !overrides.no_reduced_motion
        && config.reduced_motion.unwrap_or(defaults.reduced_motion);

    let mut disclosure = DisclosureState::collapsed();
    for id in config.open.iter().chain(overrides.open.iter()) {
        if catalog::find(id).is_none() {
            return Err(ShowcaseError::unknown_entry(id.as_str()));
        }
        disclosure.open(id);
    }

    Ok(ResolvedRender {
        target,
        options: RenderOptions {
            title,
            reduced_motion,
            disclosure,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config_or_flags() {
        let resolved =
            resolve_render(&ShowcaseConfig::default(), &RenderOverrides::default()).unwrap();
        assert_eq!(resolved.target, OutputTarget::File(PathBuf::from("index.html")));
        assert_eq!(resolved.options, RenderOptions::default());
    }

    #[test]
    fn flags_override_config() {
        let config = ShowcaseConfig {
            output: Some("site/page.html".into()),
            title: Some("From Config".into()),
            reduced_motion: Some(true),
            open: vec!["pulse-mask".into()],
        };
        let overrides = RenderOverrides {
            title: Some("From Flag".into()),
            open: vec!["ink-ripple".into()],
            no_reduced_motion: true,
            ..Default::default()
        };
        let resolved = resolve_render(&config, &overrides).unwrap();

        assert_eq!(resolved.target, OutputTarget::File("site/page.html".into()));
        assert_eq!(resolved.options.title, "From Flag");
        assert!(!resolved.options.reduced_motion);
        assert!(resolved.options.disclosure.is_open("pulse-mask"));
        assert!(resolved.options.disclosure.is_open("ink-ripple"));
        assert!(!resolved.options.disclosure.is_open("gooey-swipe"));
    }

    #[test]
    fn stdout_wins_over_output_path() {
        let overrides = RenderOverrides {
            output: Some("ignored.html".into()),
            stdout: true,
            ..Default::default()
        };
        let resolved = resolve_render(&ShowcaseConfig::default(), &overrides).unwrap();
        assert_eq!(resolved.target, OutputTarget::Stdout);
    }

    #[test]
    fn unknown_open_id_is_rejected() {
        let config = ShowcaseConfig {
            open: vec!["lava-lamp".into()],
            ..Default::default()
        };
        let err = resolve_render(&config, &RenderOverrides::default()).unwrap_err();
        assert!(matches!(err, ShowcaseError::UnknownEntry { ref id, .. } if id == "lava-lamp"));
    }

    #[test]
    fn loads_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("showcase.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
output = "dist/index.html"
title = "Motion Lab"
reduced_motion = false
open = ["wave-panels"]
"#
        )
        .expect("write config");

        let config = ShowcaseConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("dist/index.html")));
        assert_eq!(config.title.as_deref(), Some("Motion Lab"));
        assert_eq!(config.reduced_motion, Some(false));
        assert_eq!(config.open, vec!["wave-panels".to_string()]);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nope.toml");
        assert!(matches!(
            ShowcaseConfig::load(Some(&path)),
            Err(ShowcaseError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn invalid_config_is_a_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "colour = \"teal\"\n").expect("write config");
        assert!(matches!(
            ShowcaseConfig::load_from_path(&path),
            Err(ShowcaseError::ConfigParse { .. })
        ));
    }
}
