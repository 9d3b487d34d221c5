//! Control digest: SHA-256 over the sorted decoy names, epoch and secret.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How the sorted digest inputs are joined before hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashScheme {
    /// Plain concatenation. Wire-compatible with existing deployments, but
    /// `["ab", "c"]` and `["a", "bc"]` hash identically.
    #[default]
    Concat,
    /// Every component framed as `<byte len>:<bytes>`.
    LengthPrefixed,
}

impl HashScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concat => "concat",
            Self::LengthPrefixed => "length_prefixed",
        }
    }
}

impl std::str::FromStr for HashScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concat" => Ok(Self::Concat),
            "length_prefixed" | "length-prefixed" => Ok(Self::LengthPrefixed),
            other => Err(format!("unknown hash scheme '{other}'")),
        }
    }
}

/// Compute the control value certifying `decoy_names` at `epoch`.
///
/// Inputs are `[epoch, secret, decoy_names...]`, sorted by byte order, joined
/// per `scheme`, hashed with SHA-256 and returned as lowercase hex.
pub fn compute_control_hash<'a, I>(
    scheme: HashScheme,
    epoch: i64,
    secret: &str,
    decoy_names: I,
) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let epoch = epoch.to_string();
    let mut parts: Vec<&str> = vec![epoch.as_str(), secret];
    for name in decoy_names {
        parts.push(name);
    }
    parts.sort_unstable();

    let mut hasher = Sha256::new();
    for part in parts {
        if scheme == HashScheme::LengthPrefixed {
            hasher.update(part.len().to_string().as_bytes());
            hasher.update(b":");
        }
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}
