//! Trap configuration: secret, timeout window and optional knobs.
//!
//! Loaded from a YAML file and/or the environment:
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `HONEYTRAP_SECRET` | Server secret mixed into the control digest (required) |
//! | `HONEYTRAP_TIMEOUT_SECS` | Maximum trap age in seconds (default: 300) |
//! | `HONEYTRAP_DECOY_COUNT` | Pin the decoy count instead of drawing it (1-5) |
//! | `HONEYTRAP_HASH_SCHEME` | `concat` (default) or `length_prefixed` |
//! | `HONEYTRAP_STYLE_POLICY` | `per_read` (default) or `per_render` |

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::digest::HashScheme;
use crate::entropy::{MAX_DECOYS, MIN_DECOYS};
use crate::error::{TrapError, TrapResult};
use crate::state::DEFAULT_TIMEOUT_SECS;
use crate::style::StylePolicy;

pub const ENV_SECRET: &str = "HONEYTRAP_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "HONEYTRAP_TIMEOUT_SECS";
pub const ENV_DECOY_COUNT: &str = "HONEYTRAP_DECOY_COUNT";
pub const ENV_HASH_SCHEME: &str = "HONEYTRAP_HASH_SCHEME";
pub const ENV_STYLE_POLICY: &str = "HONEYTRAP_STYLE_POLICY";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrapConfig {
    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub decoy_count: Option<u8>,

    #[serde(default)]
    pub hash_scheme: HashScheme,

    #[serde(default)]
    pub style_policy: StylePolicy,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            secret: None,
            timeout_secs: default_timeout_secs(),
            decoy_count: None,
            hash_scheme: HashScheme::default(),
            style_policy: StylePolicy::default(),
        }
    }
}

impl fmt::Debug for TrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrapConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("decoy_count", &self.decoy_count)
            .field("hash_scheme", &self.hash_scheme)
            .field("style_policy", &self.style_policy)
            .finish()
    }
}

impl TrapConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self::default().with_secret(secret)
    }

    pub fn from_env() -> TrapResult<Self> {
        Self::default().merge_env()
    }

    pub fn from_yaml_str(yaml: &str) -> TrapResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> TrapResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Override fields with any `HONEYTRAP_*` variables that are set.
    pub fn merge_env(self) -> TrapResult<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    fn merge_vars<F>(mut self, var: F) -> TrapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var(ENV_SECRET) {
            self.secret = Some(v);
        }

        if let Some(v) = var(ENV_TIMEOUT_SECS) {
            self.timeout_secs = v.trim().parse().map_err(|_| TrapError::InvalidEnv {
                var: ENV_TIMEOUT_SECS,
                value: v.clone(),
            })?;
        }

        if let Some(v) = var(ENV_DECOY_COUNT) {
            let count = v.trim().parse().map_err(|_| TrapError::InvalidEnv {
                var: ENV_DECOY_COUNT,
                value: v.clone(),
            })?;
            self.decoy_count = Some(count);
        }

        if let Some(v) = var(ENV_HASH_SCHEME) {
            self.hash_scheme = v.parse().map_err(|_| TrapError::InvalidEnv {
                var: ENV_HASH_SCHEME,
                value: v.clone(),
            })?;
        }

        if let Some(v) = var(ENV_STYLE_POLICY) {
            self.style_policy = v.parse().map_err(|_| TrapError::InvalidEnv {
                var: ENV_STYLE_POLICY,
                value: v.clone(),
            })?;
        }

        Ok(self)
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_decoy_count(mut self, count: u8) -> Self {
        self.decoy_count = Some(count);
        self
    }

    pub fn with_hash_scheme(mut self, scheme: HashScheme) -> Self {
        self.hash_scheme = scheme;
        self
    }

    pub fn with_style_policy(mut self, policy: StylePolicy) -> Self {
        self.style_policy = policy;
        self
    }

    /// The secret, rejecting an absent or empty one.
    pub fn require_secret(&self) -> TrapResult<&str> {
        match self.secret.as_deref() {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(TrapError::MissingSecret),
        }
    }

    pub(crate) fn check_decoy_count(&self) -> TrapResult<()> {
        match self.decoy_count {
            Some(count) if !(MIN_DECOYS..=MAX_DECOYS).contains(&count) => {
                Err(TrapError::InvalidDecoyCount {
                    count,
                    min: MIN_DECOYS,
                    max: MAX_DECOYS,
                })
            }
            _ => Ok(()),
        }
    }
}
