#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use filetree::cli::Args;
use filetree::filter::IgnoreRules;
use filetree::render::{render_ascii, render_document, DocumentConfig};
use filetree::tree::{build_tree, TreeConfig, TreeEntry};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("filetree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(args.log_level());

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "filetree", &mut std::io::stdout());
        return Ok(());
    }
    if args.man {
        let mut stdout = std::io::stdout().lock();
        clap_mangen::Man::new(Args::command()).render(&mut stdout)?;
        return Ok(());
    }

    // Rules match against paths joined from the argument as given; keep it
    // uncanonicalized.
    let root = args.input.as_path();
    let meta =
        std::fs::metadata(root).with_context(|| format!("{}: failed to read", root.display()))?;
    anyhow::ensure!(meta.is_dir(), "{}: Not a directory", root.display());

    let mut ignore = IgnoreRules::load(root, &args.ignore_file)?;
    ignore.extend(&args.ignore);

    let tree_config = TreeConfig {
        ignore,
        follow_symlinks: !args.no_follow_symlinks,
    };
    let entries = build_tree(root, &tree_config)?;

    let doc_config = DocumentConfig {
        title: args.title.clone(),
    };
    write_document(&args.output, &entries, &doc_config)?;

    if args.print_ascii {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render_ascii(&entries).as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_document(output: &Path, entries: &[TreeEntry], config: &DocumentConfig) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("{}: failed to create output", output.display()))?;
    let mut writer = BufWriter::new(file);
    render_document(&mut writer, entries, config)
        .and_then(|()| writer.flush())
        .with_context(|| format!("{}: failed to write output", output.display()))?;
    tracing::info!("wrote {} entries to {}", entries.len(), output.display());
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the CLI verbosity.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
