//! `[output]` settings section.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_USE_ID_FIELD, DEFAULT_USE_LIST_OUTPUT};

/// Input/output shape flags shared by every engine mode.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputSection {
    /// Render results as an ordered list (true) or a mapping (false). Default: true.
    pub use_list_output: Option<bool>,
    /// Input carries `[identity, value]` pairs. Default: false.
    pub use_id_field: Option<bool>,
}

impl OutputSection {
    pub fn effective_use_list_output(&self) -> bool {
        self.use_list_output.unwrap_or(DEFAULT_USE_LIST_OUTPUT)
    }

    pub fn effective_use_id_field(&self) -> bool {
        self.use_id_field.unwrap_or(DEFAULT_USE_ID_FIELD)
    }
}
