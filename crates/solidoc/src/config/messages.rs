use std::collections::HashMap;

use serde::Deserialize;

/// Placeholder replaced by the rendered list in message templates.
pub const MESSAGE_PLACEHOLDER: &str = "{0}";

/// User-facing strings inserted into generated pages.
///
/// Templates carry a single [`MESSAGE_PLACEHOLDER`]; a template missing it
/// is reset to the default during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSettings {
    pub overridden: String,
    pub overridden_marker: String,
    pub extends: String,
    pub derived_contracts: String,
    /// Joins the links of one "overridden by" line.
    pub reference_separator: String,
    /// Joins the links of the extends and derived contracts lines.
    pub list_separator: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            overridden: "Overridden Implementation(s): {0}".to_owned(),
            overridden_marker: "⤿ ".to_owned(),
            extends: "Extends: {0}".to_owned(),
            derived_contracts: "Derived Contracts: {0}".to_owned(),
            reference_separator: ",".to_owned(),
            list_separator: ", ".to_owned(),
        }
    }
}

impl MessageSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: MessageSettingsPatch,
    ) {
        if let Some(v) = patch.overridden {
            self.overridden = v;
        }
        if let Some(v) = patch.overridden_marker {
            self.overridden_marker = v;
        }
        if let Some(v) = patch.extends {
            self.extends = v;
        }
        if let Some(v) = patch.derived_contracts {
            self.derived_contracts = v;
        }
        if let Some(v) = patch.reference_separator {
            self.reference_separator = v;
        }
        if let Some(v) = patch.list_separator {
            self.list_separator = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        let defaults = Self::default();
        for (template, fallback) in [
            (&mut self.overridden, defaults.overridden),
            (&mut self.extends, defaults.extends),
            (&mut self.derived_contracts, defaults.derived_contracts),
        ] {
            if !template.contains(MESSAGE_PLACEHOLDER) {
                *template = fallback;
            }
        }
    }
}

/// Substitute `value` into a message template.
pub fn format_message(
    template: &str,
    value: &str,
) -> String {
    template.replace(MESSAGE_PLACEHOLDER, value)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MessageSettingsPatch {
    pub(crate) overridden: Option<String>,
    pub(crate) overridden_marker: Option<String>,
    pub(crate) extends: Option<String>,
    pub(crate) derived_contracts: Option<String>,
    pub(crate) reference_separator: Option<String>,
    pub(crate) list_separator: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, toml::Value>,
}
