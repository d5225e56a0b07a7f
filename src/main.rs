// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cv_harvest::utils::logging::{format_error, format_info, format_success, format_warning};
use cv_harvest::{
    Config, CorpusAggregator, DocumentDispatcher, ExportFormat, HarvestError, RowLayout,
    TableExporter,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "cv_harvest")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract emails, phone numbers and text from resume folders", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every resume in a folder and write the table
    Export {
        #[arg(short, long, value_name = "DIR", env = "CV_HARVEST_INPUT")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long, value_enum)]
        layout: Option<RowLayout>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(short, long)]
        recursive: bool,

        #[arg(long)]
        no_progress: bool,
    },

    /// Print what would be extracted from a single file
    Inspect { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cv_harvest::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path()))
    } else {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
        Config::load(None)
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Commands::Export {
            input,
            output,
            layout,
            format,
            recursive,
            no_progress,
        } => {
            if let Some(input) = input {
                config.input.directory = input;
            }
            if let Some(output) = output {
                config.output.path = output;
            }
            if let Some(layout) = layout {
                config.output.layout = layout;
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            config.input.recursive |= recursive;
            config.validate().context("Invalid configuration")?;

            cmd_export(&config, !no_progress, cli.color)?;
        }
        Commands::Inspect { file } => {
            cmd_inspect(&config, file);
        }
    }

    Ok(())
}

fn cmd_export(config: &Config, progress: bool, color: bool) -> Result<()> {
    info!(
        "Extracting resumes from {} (layout: {:?})",
        config.input.directory.display(),
        config.output.layout
    );
    let start_time = Instant::now();

    let aggregator = CorpusAggregator::new(&config.input).with_progress(progress, color);
    let (corpus, stats) = aggregator
        .aggregate_with_stats(&config.input.directory)
        .context("Failed to read resume folder")?;

    println!(
        "{}",
        format_info(&format!(
            "{} files seen, {} contributed, {} failed",
            stats.files_seen, stats.documents_contributing, stats.files_failed
        ))
    );

    let exporter = TableExporter::new(config.output.format);
    match exporter.export_corpus(&corpus, config.output.layout, &config.output.path) {
        Ok(rows) => {
            println!(
                "{}",
                format_success(&format!(
                    "Wrote {} rows to {} in {:.2}s",
                    rows,
                    config.output.path.display(),
                    start_time.elapsed().as_secs_f64()
                ))
            );
        }
        Err(HarvestError::LengthMismatch { emails, texts }) => {
            error!("Length of emails: {}, length of texts: {}", emails, texts);
            println!(
                "{}",
                format_error("Arrays must be of the same length; nothing was written")
            );
            println!(
                "{}",
                format_warning("Use --layout per-document or per-email to export every resume")
            );
        }
        Err(e) => {
            return Err(e).context("Export failed");
        }
    }

    Ok(())
}

fn cmd_inspect(config: &Config, file: PathBuf) {
    let dispatcher = DocumentDispatcher::from_config(&config.input);

    match dispatcher.try_dispatch(&file) {
        Ok(result) => {
            println!("{}", format_info(&format!("File: {}", file.display())));
            println!("Emails: {}", result.emails.join(", "));
            println!("Phones: {}", result.phones.join(", "));
            println!("Text length: {}", result.text_length());
        }
        Err(e) => {
            println!("{}", format_error(&e.to_string()));
        }
    }
}
