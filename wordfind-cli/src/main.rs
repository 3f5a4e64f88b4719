use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordfind::{search, SearchConfig, SearchReport};

#[derive(Parser)]
#[command(author, version, about = "Find every dictionary word embedded in a grid of letters", long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Board contents as one string, split into rows by width and height
    #[arg(long)]
    contents: Option<String>,

    /// Word list file, one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Show only statistics, not the found words
    #[arg(short, long)]
    stats: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = SearchConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    let mut cli_config = SearchConfig {
        width: cli.width,
        height: cli.height,
        ..Default::default()
    };
    if let Some(contents) = cli.contents {
        cli_config.contents = contents;
    }
    if let Some(dictionary) = cli.dictionary {
        cli_config.dictionary_path = dictionary;
    }
    if cli.stats {
        cli_config.stats_only = true;
    }
    if let Some(log_level) = cli.log_level {
        cli_config.log_level = log_level;
    }

    let config = file_config.merge_with_cli(cli_config);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();
    debug!(
        "Searching a {}x{} board against {}",
        config.width,
        config.height,
        config.dictionary_path.display()
    );

    let report = search::run(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, config.stats_only);
    }

    Ok(())
}

fn print_report(report: &SearchReport, stats_only: bool) {
    if !stats_only {
        for word in &report.words {
            println!("{}", word.green());
        }
    }

    println!(
        "{} {} words in {}",
        "Found".bold(),
        report.word_count(),
        humantime::format_duration(report.elapsed)
    );

    if stats_only {
        let stats = &report.stats;
        println!(
            "Explored {} starts, expanded {} cells, pruned {} branches",
            stats.starts_explored, stats.cells_expanded, stats.branches_pruned
        );
    }
}
