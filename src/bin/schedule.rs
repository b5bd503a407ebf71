//! Command-line interface for schedule_ron.
//!
//! Usage:
//!   schedule convert `<input>` [-o `<output>`] [--from ron|json] [--to toml|toml-lib|xml|ron|json]
//!   schedule show `<input>` [--from ron|json]
//!
//! Formats default from the file extensions. Without `-o`, the converted
//! document is written to stdout.

use clap::{Args, Parser, Subcommand};
use schedule_ron::{Error, InputFormat, OutputFormat, ParseOptions, Schedule};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Convert class schedules between RON, JSON, TOML and XML", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schedule and write it in another format
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults from the output extension, else toml)
        #[arg(long, value_enum)]
        to: Option<OutputFormat>,

        /// Do not print the schedule listing
        #[arg(short, long)]
        quiet: bool,
    },
    /// Parse a schedule and print its listing
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to the schedule file
    path: PathBuf,

    /// Input format (defaults from the file extension)
    #[arg(long, value_enum)]
    from: Option<InputFormat>,

    /// Report fields holding the wrong kind of value as errors
    #[arg(long)]
    strict: bool,

    /// Ignore anything after the root Schedule(...)
    #[arg(long)]
    allow_trailing: bool,
}

impl InputArgs {
    fn load(&self) -> Result<Schedule, Error> {
        let format = self
            .from
            .unwrap_or_else(|| InputFormat::from_path(&self.path));
        let text = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(&format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let options = ParseOptions::new()
            .with_strict_fields(self.strict)
            .with_trailing_tokens(self.allow_trailing);

        debug!(path = %self.path.display(), %format, "parsing input");
        let schedule = format.parse(&text, &options)?;
        info!(
            days = schedule.days.len(),
            lessons = schedule.lesson_count(),
            "parsing successful"
        );
        Ok(schedule)
    }
}

fn print_listing(schedule: &Schedule) {
    println!("\n {} days:", schedule.days.len());
    print!("{}", schedule);
}

fn write_output(path: Option<&Path>, text: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            fs::write(path, text).map_err(|e| {
                Error::io(&format!("failed to write {}: {}", path.display(), e))
            })?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::io(&e.to_string()))?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Convert {
            input,
            output,
            to,
            quiet,
        } => {
            let schedule = input.load()?;
            // Listing goes to stdout too, so keep it out of piped output.
            if !quiet && output.is_some() {
                print_listing(&schedule);
            }

            let format = to.unwrap_or_else(|| {
                output
                    .as_deref()
                    .map_or(OutputFormat::Toml, OutputFormat::from_path)
            });
            debug!(%format, "rendering output");
            let text = format.render(&schedule)?;
            write_output(output.as_deref(), &text)
        }
        Commands::Show { input } => {
            let schedule = input.load()?;
            print_listing(&schedule);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
