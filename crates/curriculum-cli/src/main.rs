use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use curriculum_config::Config;
use curriculum_engine::{CurriculumFormat, PROGRESS_KEY, io};
use std::path::PathBuf;
use std::process;

mod render;

#[derive(Debug, Parser)]
#[command(name = "curriculum", version, about = "Inspect a structured curriculum and learner progress")]
struct Cli {
    /// Curriculum document (markdown or JSON); defaults to the config file entry
    #[arg(long, global = true)]
    curriculum: Option<PathBuf>,

    /// Source format, detected from the file extension when omitted
    #[arg(long, global = true)]
    format: Option<CurriculumFormat>,

    /// Saved progress file; defaults to the config file entry
    #[arg(long, global = true)]
    progress: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// List chapters with section counts and completion
    Chapters,
    /// Print chapter and section titles as a tree
    Outline,
    /// Dump the loaded chapters as pretty JSON
    Json,
    /// Summarize learner progress
    Stats,
}

/// Where to read everything from, after merging CLI flags over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    curriculum_path: PathBuf,
    format: Option<CurriculumFormat>,
    progress_path: PathBuf,
}

fn resolve_settings(cli: &Cli, config: Option<Config>) -> Result<Settings> {
    let config_format = match config.as_ref().and_then(|c| c.format.as_deref()) {
        Some(name) => Some(
            name.parse::<CurriculumFormat>()
                .context("Invalid format in config file")?,
        ),
        None => None,
    };

    let curriculum_path = match (&cli.curriculum, &config) {
        (Some(path), _) => path.clone(),
        (None, Some(config)) => config.curriculum_path.clone(),
        (None, None) => bail!(
            "No curriculum path provided and no config file found\nPass --curriculum <PATH> or create a config file at {}",
            Config::config_path().display()
        ),
    };

    // Saved progress sits next to the curriculum unless configured otherwise
    let progress_path = cli
        .progress
        .clone()
        .or_else(|| config.and_then(|c| c.progress_path))
        .unwrap_or_else(|| curriculum_path.with_file_name(format!("{PROGRESS_KEY}.json")));

    Ok(Settings {
        curriculum_path,
        format: cli.format.or(config_format),
        progress_path,
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_config() -> Result<Option<Config>> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    Config::load().context("Failed to load config file")
}

fn run(cli: &Cli, config: Option<Config>) -> Result<Vec<String>> {
    let settings = resolve_settings(cli, config)?;

    let curriculum = io::load_curriculum_file(&settings.curriculum_path, settings.format)
        .with_context(|| {
            format!(
                "Curriculum path '{}' could not be loaded",
                settings.curriculum_path.display()
            )
        })?;
    log::info!("Loaded {} chapters", curriculum.len());

    let progress = io::read_progress(&settings.progress_path, curriculum.len()).with_context(
        || {
            format!(
                "Failed to read progress from '{}'",
                settings.progress_path.display()
            )
        },
    )?;

    let lines = match cli.command {
        Command::Chapters => render::render_chapters(&curriculum, &progress),
        Command::Outline => render::render_outline(&curriculum),
        Command::Json => vec![serde_json::to_string_pretty(&curriculum.chapters)?],
        Command::Stats => render::render_stats(&progress),
    };
    Ok(lines)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match load_config().and_then(|config| run(&cli, config)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
