use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "imgref",
    about = "Parse, classify, and resolve container image references",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a single reference and show its parts
    Parse(ParseArgs),
    /// Split references into tagged and digest-pinned lists
    Resolve(ResolveArgs),
    /// Compute repo digest and repo tag for a reference and a known digest
    RepoDigest(RepoDigestArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    pub reference: String,
    /// Expand familiar names (docker.io/library/...)
    #[arg(long)]
    pub normalize: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    pub references: Vec<String>,
    /// Also read references from stdin, one per line
    #[arg(long)]
    pub stdin: bool,
    /// Expand familiar names (docker.io/library/...)
    #[arg(long)]
    pub normalize: bool,
    /// Print dropped entries to stderr
    #[arg(long)]
    pub report_dropped: bool,
}

#[derive(Args)]
pub struct RepoDigestArgs {
    pub reference: String,
    pub digest: String,
}
