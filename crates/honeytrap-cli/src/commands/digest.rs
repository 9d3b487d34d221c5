//! `honeytrap digest` - compute a control value by hand.

use anyhow::Result;

use honeytrap_core::{compute_control_hash, HashScheme, TrapConfig};

use crate::args::DigestArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: DigestArgs, config: TrapConfig) -> Result<i32> {
    let secret = config.require_secret()?;
    let scheme = args.scheme.map(HashScheme::from).unwrap_or(config.hash_scheme);
    let digest = compute_control_hash(
        scheme,
        args.epoch,
        secret,
        args.names.iter().map(String::as_str),
    );
    println!("{digest}");
    Ok(SUCCESS)
}
