//! Command-line interface for bearnotes.
//!
//! Usage:
//!   bearnotes discover --from `<notes>` --tag-file `<tags.yaml>`
//!   bearnotes migrate --from `<notes>` --to `<output>` --tag-file `<tags.yaml>`
//!
//! Flags left out fall back to `~/.config/bearnotes/config.toml`.

use anyhow::{Context, Result, anyhow};
use bearnotes_config::{Config, TagCatalog};
use bearnotes_engine::{discover_notes, migrate_notes};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(
    name = "bearnotes",
    version,
    about = "Migrate Bear notes to plain Markdown folders"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse your notes and write every tag found into a tag file
    Discover {
        #[command(flatten)]
        paths: SourcePaths,
    },
    /// Rewrite your notes into a new directory, following the tag file
    Migrate {
        #[command(flatten)]
        paths: SourcePaths,
        /// Directory receiving the migrated notes
        #[arg(long)]
        to: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct SourcePaths {
    /// Directory holding your Bear notes
    #[arg(long)]
    from: Option<PathBuf>,
    /// Tag configuration file
    #[arg(long)]
    tag_file: Option<PathBuf>,
}

/// Picks the flag when given, the config value otherwise.
fn resolve(flag: Option<PathBuf>, configured: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    flag.or(configured).ok_or_else(|| {
        anyhow!(
            "missing --{name} (no default in {})",
            Config::config_path().display()
        )
    })
}

fn discover(paths: SourcePaths, config: Config) -> Result<()> {
    let from = resolve(paths.from, config.notes_path, "from")?;
    let tag_file = resolve(paths.tag_file, config.tag_file, "tag-file")?;

    println!("Looking for Bear notes into {}...", from.display());
    let discovery = discover_notes(&from)?;

    println!(
        "Found {} notes, {} embedded images, {} attachments and {} unique tags.",
        discovery.note_count,
        discovery.image_count,
        discovery.file_count,
        discovery.tags.len()
    );
    println!();
    println!("Tag list:");
    for name in discovery.tag_names() {
        println!("#{name}");
    }

    println!();
    println!("Writing all tags into {}...", tag_file.display());
    discovery
        .tags
        .save_to_path(&tag_file)
        .with_context(|| format!("writing {}", tag_file.display()))?;

    Ok(())
}

fn migrate(paths: SourcePaths, to: Option<PathBuf>, config: Config) -> Result<()> {
    let from = resolve(paths.from, config.notes_path, "from")?;
    let to = resolve(to, config.output_path, "to")?;
    let tag_file = resolve(paths.tag_file, config.tag_file, "tag-file")?;

    println!("Reading the tag file from {}...", tag_file.display());
    let catalog = TagCatalog::load_from_path(&tag_file)?;

    println!(
        "Migrating Bear notes from {} to {}...",
        from.display(),
        to.display()
    );
    let report = migrate_notes(&from, &to, &catalog)?;

    println!();
    println!(
        "Processed {} notes with {} successes and {} failures",
        report.processed,
        report.succeeded,
        report.failed()
    );

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.unwrap_or_default();

    match cli.command {
        Command::Discover { paths } => discover(paths, config),
        Command::Migrate { paths, to } => migrate(paths, to, config),
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
