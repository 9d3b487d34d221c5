pub mod arm;
pub mod digest;
pub mod verify;

use anyhow::{Context, Result};
use std::path::Path;

use honeytrap_core::TrapConfig;

use crate::args::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Arm(args) => arm::run(args, config),
        Command::Verify(args) => verify::run(args, config),
        Command::Digest(args) => digest::run(args, config),
    }
}

/// Config file (if any) overlaid with `HONEYTRAP_*` environment variables.
pub(crate) fn load_config(path: Option<&Path>) -> Result<TrapConfig> {
    let base = match path {
        Some(p) => TrapConfig::load(p)
            .with_context(|| format!("failed to load config: {}", p.display()))?,
        None => TrapConfig::default(),
    };
    let config = base.merge_env().context("invalid HONEYTRAP_* environment")?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
