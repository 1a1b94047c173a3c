//! # markdown-wikilinks CLI
//!
//! Renders markdown notes with `[[wikilinks]]` to HTML and extracts their
//! backlinks as JSON lines.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_wikilinks_config::{Config, NormalizerConfig};
use markdown_wikilinks_engine::{
    AliasNormalizer, Backlink, BacklinkCollector, DefaultNormalizer, Markdown, Wikilinks,
    parsing::{inline::default_parsers, snapshot},
    render_with_backlinks, wikilink::WikilinkScanner,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "markdown-wikilinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (defaults to ~/.config/markdown-wikilinks/config.toml)
    #[arg(long, global = true, env = "MARKDOWN_WIKILINKS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to HTML on stdout
    Render {
        file: PathBuf,
    },

    /// Print every wikilink occurrence as one JSON object per line
    Backlinks {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the parsed block and inline structure as JSON
    Inspect {
        file: PathBuf,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// One backlink line of `backlinks` output.
#[derive(Serialize)]
struct BacklinkRecord<'a> {
    file: &'a Path,
    #[serde(flatten)]
    backlink: &'a Backlink,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    match cli.command {
        Commands::Init { force } => init(&config_path, force),
        Commands::Render { file } => {
            let (config, normalizer) = setup(&config_path)?;
            render(&file, &config, &normalizer)
        }
        Commands::Backlinks { files } => {
            let (_, normalizer) = setup(&config_path)?;
            backlinks(&files, &normalizer)
        }
        Commands::Inspect { file } => {
            let (_, normalizer) = setup(&config_path)?;
            inspect(&file, &normalizer)
        }
    }
}

fn setup(config_path: &Path) -> Result<(Config, AliasNormalizer<DefaultNormalizer>)> {
    let config = load_config(config_path)?;
    let normalizer = build_normalizer(&config.normalizer)?;
    Ok((config, normalizer))
}

fn load_config(path: &Path) -> Result<Config> {
    match Config::load_from_path(path)? {
        Some(config) => Ok(config),
        None => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

fn build_normalizer(config: &NormalizerConfig) -> Result<AliasNormalizer<DefaultNormalizer>> {
    let fallback = DefaultNormalizer::new(&config.suffix, config.percent_encode);
    AliasNormalizer::new(config.aliases.clone(), fallback)
        .context("invalid [normalizer.aliases] in config")
}

fn read_note(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn write_records(out: &mut impl Write, file: &Path, backlinks: &[Backlink]) -> Result<()> {
    for backlink in backlinks {
        serde_json::to_writer(&mut *out, &BacklinkRecord { file, backlink })?;
        writeln!(out)?;
    }
    Ok(())
}

fn render(file: &Path, config: &Config, normalizer: &AliasNormalizer<DefaultNormalizer>) -> Result<()> {
    let source = read_note(file)?;

    let html = match (&config.tracking.output, config.tracking.enabled) {
        (Some(output), true) => {
            let (html, backlinks) = render_with_backlinks(&source, normalizer);
            let mut out = BufWriter::new(
                File::create(output)
                    .with_context(|| format!("Failed to create {}", output.display()))?,
            );
            write_records(&mut out, file, &backlinks)?;
            out.flush()?;
            log::info!("Wrote {} backlinks to {}", backlinks.len(), output.display());
            html
        }
        (Some(output), false) => {
            log::warn!(
                "tracking.output is set to {} but tracking is disabled",
                output.display()
            );
            Markdown::new()
                .with(Wikilinks::new(normalizer, None))
                .convert(&source)
        }
        (None, _) => Markdown::new()
            .with(Wikilinks::new(normalizer, None))
            .convert(&source),
    };

    io::stdout().lock().write_all(html.as_bytes())?;
    Ok(())
}

fn backlinks(files: &[PathBuf], normalizer: &AliasNormalizer<DefaultNormalizer>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for file in files {
        let source = read_note(file)?;
        let mut collector = BacklinkCollector::new();
        Markdown::new()
            .with(Wikilinks::new(normalizer, Some(&mut collector)))
            .parse(&source);
        log::debug!("{}: {} backlinks", file.display(), collector.len());
        write_records(&mut out, file, collector.backlinks())?;
    }

    out.flush()?;
    Ok(())
}

fn inspect(file: &Path, normalizer: &AliasNormalizer<DefaultNormalizer>) -> Result<()> {
    let source = read_note(file)?;
    let mut parsers = default_parsers();
    parsers.add(WikilinkScanner::new(normalizer, None), WikilinkScanner::PRIORITY);
    let snap = snapshot::inspect(&source, &mut parsers);

    serde_json::to_writer_pretty(io::stdout().lock(), &snap)?;
    println!();
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to_path(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
