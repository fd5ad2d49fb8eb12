mod cli;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use ccx_content::{parse_group_config_file, validate_content, ContentLoader, ContentReport, RuleContentDirectory};
use ccx_core::Config;

use crate::cli::CliArgs;

/// JSON document written by `--dump-json`.
#[derive(Serialize)]
struct Dump<'a> {
    config: serde_json::Value,
    content: &'a RuleContentDirectory,
    report: &'a ContentReport,
}

fn main() -> Result<()> {
    ccx_core::config::load_dotenv();

    // Logs go to stderr so `--dump-json -` keeps stdout clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let mut config = Config::from_env();
    args.apply(&mut config);
    config.log_summary();

    let groups = parse_group_config_file(&config.content.groups_config)
        .context("unable to parse group config file")?;

    let loaded = ContentLoader::new(&config.content.content_dir)
        .load()
        .context("unable to parse rule content directory")?;

    let report = validate_content(&loaded, &groups);
    report.log();

    info!(
        rules = loaded.content.rules.len(),
        error_keys = loaded.content.error_key_count(),
        groups = groups.len(),
        defects = report.defect_count(),
        warnings = report.warnings.len(),
        "content check finished"
    );

    if let Some(target) = &args.dump_json {
        let dump = Dump {
            config: config.summary(),
            content: &loaded.content,
            report: &report,
        };
        write_json(target, &dump).with_context(|| format!("failed to write JSON to {target}"))?;
    }

    if config.content.strict && !report.is_clean() {
        bail!("{} content defect(s) found", report.defect_count());
    }
    Ok(())
}

fn write_json<T: Serialize>(target: &str, value: &T) -> Result<()> {
    let mut out: Box<dyn Write> = if target == "-" {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        Box::new(BufWriter::new(File::create(target)?))
    };
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
