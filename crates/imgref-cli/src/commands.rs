use std::io::BufRead;

use anyhow::Context;
use colored::Colorize;
use imgref_reference::{
    canonical_forms, parse, parse_normalized, resolve_all_with, Digest, DropReason, Dropped,
    Reference, ResolveOptions,
};
use serde::Serialize;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    let format = cli.format.or(config.format).unwrap_or(OutputFormat::Text);
    match cli.command {
        Command::Parse(args) => cmd_parse(args, format),
        Command::Resolve(args) => cmd_resolve(args, &config, format),
        Command::RepoDigest(args) => cmd_repo_digest(args, format),
    }
}

#[derive(Debug, Serialize)]
struct ParseOutput {
    reference: String,
    name: String,
    domain: Option<String>,
    path: String,
    tag: Option<String>,
    digest: Option<String>,
    kind: String,
}

impl From<&Reference> for ParseOutput {
    fn from(r: &Reference) -> Self {
        Self {
            reference: r.to_string(),
            name: r.name().to_string(),
            domain: r.name().domain().map(str::to_string),
            path: r.name().path().to_string(),
            tag: r.tag().map(|t| t.to_string()),
            digest: r.digest().map(|d| d.to_string()),
            kind: r.kind().to_string(),
        }
    }
}

fn cmd_parse(args: ParseArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reference = if args.normalize {
        parse_normalized(&args.reference)
    } else {
        parse(&args.reference)
    }
    .with_context(|| format!("parsing {:?}", args.reference))?;

    let out = ParseOutput::from(&reference);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&out)?),
        OutputFormat::Text => {
            println!("{}  ({})", out.reference.bold(), out.kind.cyan());
            println!("  Domain: {}", out.domain.as_deref().unwrap_or("-"));
            println!("  Path:   {}", out.path);
            println!("  Tag:    {}", out.tag.as_deref().unwrap_or("-").yellow());
            println!("  Digest: {}", out.digest.as_deref().unwrap_or("-").yellow());
        }
    }
    Ok(())
}

fn read_stdin_references() -> anyhow::Result<Vec<String>> {
    let mut refs = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            refs.push(line.to_string());
        }
    }
    Ok(refs)
}

fn describe_drop(dropped: &Dropped) -> String {
    match &dropped.reason {
        DropReason::Unparsable(err) => err.to_string(),
        DropReason::Bare => "no tag or digest".to_string(),
    }
}

fn cmd_resolve(args: ResolveArgs, config: &CliConfig, format: OutputFormat) -> anyhow::Result<()> {
    let mut references = args.references;
    if args.stdin {
        references.extend(read_stdin_references()?);
    }

    let options = ResolveOptions {
        normalize: args.normalize || config.resolve.normalize,
    };
    let report = args.report_dropped || config.report_dropped;

    let mut dropped = Vec::new();
    let resolved = resolve_all_with(&references, &options, |d| dropped.push(d));

    if report {
        for d in &dropped {
            eprintln!("{} [{}] {:?}: {}", "dropped".red(), d.index, d.input, describe_drop(d));
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Text => {
            println!("{}", "Tags:".bold());
            for tag in &resolved.tags {
                println!("  {}", tag.green());
            }
            println!("{}", "Digests:".bold());
            for digest in &resolved.digests {
                println!("  {}", digest.green());
            }
            if resolved.dropped > 0 {
                println!("{} dropped", resolved.dropped.to_string().dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_repo_digest(args: RepoDigestArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reference =
        parse(&args.reference).with_context(|| format!("parsing {:?}", args.reference))?;
    let digest =
        Digest::parse(&args.digest).with_context(|| format!("parsing digest {:?}", args.digest))?;
    let forms = canonical_forms(&reference, &digest);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&forms)?),
        OutputFormat::Text => {
            println!("RepoDigest: {}", forms.repo_digest.green());
            println!("RepoTag:    {}", forms.repo_tag.yellow());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_fields() {
        let r = parse("localhost:5000/app:v1@sha256:abcd").unwrap();
        let out = ParseOutput::from(&r);
        assert_eq!(out.domain.as_deref(), Some("localhost:5000"));
        assert_eq!(out.path, "app");
        assert_eq!(out.tag.as_deref(), Some("v1"));
        assert_eq!(out.digest.as_deref(), Some("sha256:abcd"));
        assert_eq!(out.kind, "canonical");
    }

    #[test]
    fn drop_descriptions() {
        let bare = Dropped {
            index: 0,
            input: "app".into(),
            reason: DropReason::Bare,
        };
        assert_eq!(describe_drop(&bare), "no tag or digest");
        let bad = Dropped {
            index: 1,
            input: "".into(),
            reason: DropReason::Unparsable(parse("").unwrap_err()),
        };
        assert!(describe_drop(&bad).contains("empty reference"));
    }
}
