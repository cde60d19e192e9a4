use std::{collections::HashMap, path::PathBuf};

use serde::Deserialize;

pub const DEFAULT_BUILD_DIR: &str = "build/contracts";

#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Artifact directory, relative to the project root unless absolute.
    pub build_dir: PathBuf,
    /// Custom page template; the built-in one is used when unset.
    pub template: Option<PathBuf>,
    pub include_abi: bool,
    pub write_index: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            template: None,
            include_abi: true,
            write_index: true,
        }
    }
}

impl OutputSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: OutputSettingsPatch,
    ) {
        if let Some(v) = patch.build_dir {
            self.build_dir = v;
        }
        if let Some(v) = patch.template {
            self.template = Some(v);
        }
        if let Some(v) = patch.include_abi {
            self.include_abi = v;
        }
        if let Some(v) = patch.write_index {
            self.write_index = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        if self.build_dir.as_os_str().is_empty() {
            self.build_dir = PathBuf::from(DEFAULT_BUILD_DIR);
        }
        if self.template.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            self.template = None;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OutputSettingsPatch {
    pub(crate) build_dir: Option<PathBuf>,
    pub(crate) template: Option<PathBuf>,
    pub(crate) include_abi: Option<bool>,
    pub(crate) write_index: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
