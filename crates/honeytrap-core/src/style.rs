//! Presentational hints that keep decoys out of a human's view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleHint {
    /// Not rendered at all.
    Hidden,
    /// Rendered at one pixel with no border.
    Collapsed,
}

impl StyleHint {
    pub const ALL: [StyleHint; 2] = [StyleHint::Hidden, StyleHint::Collapsed];

    /// Inline CSS for the `style` attribute.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Hidden => "display:none; border: none;",
            Self::Collapsed => "width:1px; height:1px; border: none;",
        }
    }
}

/// When the style hint is drawn during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePolicy {
    /// A fresh hint per entry, so styles may differ within one render.
    #[default]
    PerRead,
    /// One hint shared by every entry of a render.
    PerRender,
}

impl StylePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerRead => "per_read",
            Self::PerRender => "per_render",
        }
    }
}

impl std::str::FromStr for StylePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "per_read" | "per-read" => Ok(Self::PerRead),
            "per_render" | "per-render" => Ok(Self::PerRender),
            other => Err(format!("unknown style policy '{other}'")),
        }
    }
}
