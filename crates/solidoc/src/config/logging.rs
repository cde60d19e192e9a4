use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Verbosity of solidoc's own log output. Dependencies stay at their
/// `EnvFilter` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[serde(alias = "warning")]
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// `EnvFilter` directive scoping this level to the `solidoc` target.
    pub fn filter_directive(self) -> String {
        format!("solidoc={}", self.as_str())
    }
}

/// The `[logging]` section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingSettings {
    pub level: LogLevel,
    /// Log file written next to stderr output, relative to the project root.
    /// `--log-file` takes precedence.
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Directive for the subscriber. `--verbose` raises the level to at
    /// least `debug`, it never lowers a configured `trace`.
    pub fn filter_directive(
        &self,
        verbose: bool,
    ) -> String {
        let level = if verbose { self.level.max(LogLevel::Debug) } else { self.level };
        level.filter_directive()
    }

    /// The file to log into: the command-line path if given, else the
    /// configured one resolved against `project_root`.
    pub fn log_file(
        &self,
        cli: Option<&Path>,
        project_root: &Path,
    ) -> Option<PathBuf> {
        cli.map(Path::to_path_buf).or_else(|| self.file.as_ref().map(|file| project_root.join(file)))
    }

    pub(crate) fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        self.level = patch.level.unwrap_or(self.level);
        if let Some(file) = patch.file.filter(|file| !file.as_os_str().is_empty()) {
            self.file = Some(file);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoggingSettingsPatch {
    pub(crate) level: Option<LogLevel>,
    pub(crate) file: Option<PathBuf>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
