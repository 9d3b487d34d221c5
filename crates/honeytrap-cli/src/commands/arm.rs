//! `honeytrap arm` - print a freshly armed trap.

use anyhow::Result;
use serde::Serialize;

use honeytrap_core::{Entry, FormData, HoneypotField, TrapConfig};

use crate::args::{ArmArgs, ArmFormat};
use crate::exit_codes::SUCCESS;

#[derive(Serialize)]
struct ArmedTrap<'a> {
    decoy_count: u8,
    timeout_secs: u64,
    entries: &'a [Entry],
}

pub fn run(args: ArmArgs, config: TrapConfig) -> Result<i32> {
    let mut field = HoneypotField::with_system(config)?;
    field.process::<FormData>(None);

    match args.format {
        ArmFormat::Html => println!("{}", field.render_html()),
        ArmFormat::Json => {
            let state = field.state();
            let out = ArmedTrap {
                decoy_count: state.decoy_count(),
                timeout_secs: state.timeout_secs(),
                entries: state.entries(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(SUCCESS)
}
