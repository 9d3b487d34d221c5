use serde::{Deserialize, Serialize};

use crate::naming::is_control_name;

/// One rendered sub-field of the trap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Field name; unique within a render.
    pub name: String,
    /// Presentation-only element id.
    pub id: String,
    /// Value: unset for fresh decoys, the digest for the control entry,
    /// whatever was posted after parsing a submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

pub fn make_entry(name: impl Into<String>, id: impl Into<String>, data: Option<String>) -> Entry {
    Entry {
        name: name.into(),
        id: id.into(),
        data,
    }
}

impl Entry {
    pub fn is_control(&self) -> bool {
        is_control_name(&self.name)
    }

    /// Submitted value, with unset treated as empty.
    pub fn value(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn is_filled(&self) -> bool {
        !self.value().is_empty()
    }
}
