use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use honeytrap_core::HashScheme;

#[derive(Parser, Debug)]
#[command(
    name = "honeytrap",
    version,
    about = "Arm and check honeypot traps for HTML forms"
)]
pub struct Cli {
    /// YAML config file; HONEYTRAP_* environment variables override it
    #[arg(long, global = true, env = "HONEYTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a freshly armed trap
    Arm(ArmArgs),
    /// Check a submitted form body
    Verify(VerifyArgs),
    /// Compute the control digest for an epoch and decoy names
    Digest(DigestArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmFormat {
    Html,
    Json,
}

#[derive(Args, Debug)]
pub struct ArmArgs {
    #[arg(long, value_enum, default_value_t = ArmFormat::Html)]
    pub format: ArmFormat,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Submission file; reads stdin when omitted or "-"
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Treat the submission as a JSON object of string fields instead of a
    /// urlencoded body
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeArg {
    Concat,
    LengthPrefixed,
}

impl From<SchemeArg> for HashScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Concat => HashScheme::Concat,
            SchemeArg::LengthPrefixed => HashScheme::LengthPrefixed,
        }
    }
}

#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Unix timestamp embedded in the control field name
    #[arg(long, allow_hyphen_values = true)]
    pub epoch: i64,

    /// Override the configured hash scheme
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Decoy field names (with the hp_ prefix)
    pub names: Vec<String>,
}
