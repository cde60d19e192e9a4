//! Layered configuration read from `solidoc.toml`.
//!
//! Settings are split into one file per category. Each category has a public
//! settings struct with defaults, a private `*Patch` struct for partial
//! deserialization, and `apply_patch()` / `normalize()` glue between the two.
//! Keys the patches do not know are collected into
//! [`LoadedSettings::ignored_keys`] and reported, never rejected.

pub(crate) mod logging;
pub(crate) mod messages;
pub(crate) mod output;
pub(crate) mod resolve;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use messages::MessageSettingsPatch;
pub use messages::{MESSAGE_PLACEHOLDER, MessageSettings, format_message};
use output::OutputSettingsPatch;
pub use output::{DEFAULT_BUILD_DIR, OutputSettings};
use resolve::ResolveSettingsPatch;
pub use resolve::ResolveSettings;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// File name looked up in the project root when no config path is given.
pub const CONFIG_FILE_NAME: &str = "solidoc.toml";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub resolve: ResolveSettings,
    pub messages: MessageSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Result of reading a config file.
///
/// Loading happens before logging is set up (the file chooses the log
/// level), so everything worth reporting is returned to the caller instead
/// of being logged here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// File the settings were read from; `None` when defaults were used.
    pub source: Option<PathBuf>,
    /// Unrecognized keys as dotted paths (`theme`, `messages.overridenMarker`),
    /// sorted.
    pub ignored_keys: Vec<String>,
}

impl Settings {
    /// Parse settings from TOML text, starting from the defaults.
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<LoadedSettings> {
        let patch: SettingsPatch = toml::from_str(text).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::default();
        let mut ignored_keys = settings.apply_patch(patch);
        ignored_keys.sort();
        settings.normalize();
        Ok(LoadedSettings {
            settings,
            source: Some(path.to_path_buf()),
            ignored_keys,
        })
    }

    /// Read settings from `explicit`, or from `solidoc.toml` in the project
    /// root when it exists. Defaults are used when neither is present.
    pub async fn load(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<LoadedSettings> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(CONFIG_FILE_NAME);
                if !tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                    return Ok(LoadedSettings::default());
                }
                candidate
            },
        };

        let text = tokio::fs::read_to_string(&path).await.map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &path)
    }

    /// Artifact directory resolved against the project root.
    pub fn build_dir(
        &self,
        project_root: &Path,
    ) -> PathBuf {
        project_root.join(&self.output.build_dir)
    }

    /// Apply every section and return the keys no section recognized.
    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) -> Vec<String> {
        let mut ignored: Vec<String> = patch._extra.into_keys().collect();
        if let Some(p) = patch.resolve {
            ignored.extend(section_keys("resolve", &p._extra));
            self.resolve.apply_patch(p);
        }
        if let Some(p) = patch.messages {
            ignored.extend(section_keys("messages", &p._extra));
            self.messages.apply_patch(p);
        }
        if let Some(p) = patch.output {
            ignored.extend(section_keys("output", &p._extra));
            self.output.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            ignored.extend(section_keys("logging", &p._extra));
            self.logging.apply_patch(p);
        }
        ignored
    }

    fn normalize(&mut self) {
        self.messages.normalize();
        self.output.normalize();
    }
}

impl LoadedSettings {
    /// Report where the settings came from and every ignored key.
    ///
    /// Call once a subscriber is installed.
    pub fn log_diagnostics(&self) {
        match &self.source {
            Some(path) => debug!("Loaded settings from {}", path.display()),
            None => debug!("No {CONFIG_FILE_NAME} found, using defaults"),
        }
        let origin = self.source.as_deref().map(Path::display);
        for key in &self.ignored_keys {
            match &origin {
                Some(path) => warn!("Ignoring unknown config key `{key}` in {path}"),
                None => warn!("Ignoring unknown config key `{key}`"),
            }
        }
    }
}

fn section_keys<'a>(
    section: &'a str,
    extra: &'a HashMap<String, toml::Value>,
) -> impl Iterator<Item = String> + 'a {
    extra.keys().map(move |key| format!("{section}.{key}"))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SettingsPatch {
    resolve: Option<ResolveSettingsPatch>,
    messages: Option<MessageSettingsPatch>,
    output: Option<OutputSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, toml::Value>,
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
