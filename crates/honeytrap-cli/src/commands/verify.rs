//! `honeytrap verify` - run a submitted body through the honeypot check.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use honeytrap_core::{FormData, FormSource, HoneypotField, TrapConfig};

use crate::args::VerifyArgs;
use crate::exit_codes::{REJECTED, SUCCESS};

pub fn run(args: VerifyArgs, config: TrapConfig) -> Result<i32> {
    let raw = read_input(args.input.as_deref())?;
    let mut field = HoneypotField::with_system(config)?;

    if args.json {
        let form: BTreeMap<String, String> =
            serde_json::from_str(&raw).context("submission is not a JSON object of strings")?;
        check(&mut field, &form)
    } else {
        let form = FormData::from_urlencoded(raw.trim_end_matches(['\r', '\n']));
        check(&mut field, &form)
    }
}

fn check<E, C, F>(field: &mut HoneypotField<E, C>, form: &F) -> Result<i32>
where
    E: honeytrap_core::EntropySource,
    C: honeytrap_core::Clock,
    F: FormSource,
{
    field.process(Some(form));
    if field.validate() {
        println!("human");
        Ok(SUCCESS)
    } else {
        tracing::info!("submission rejected by honeypot");
        println!("rejected");
        Ok(REJECTED)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read submission: {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read submission from stdin")?;
            Ok(buf)
        }
    }
}
