use std::collections::HashMap;

use serde::Deserialize;

use crate::resolve::LookupMode;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveSettings {
    pub lookup_mode: LookupMode,
}

impl ResolveSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: ResolveSettingsPatch,
    ) {
        if let Some(v) = patch.lookup_mode {
            self.lookup_mode = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ResolveSettingsPatch {
    pub(crate) lookup_mode: Option<LookupMode>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
