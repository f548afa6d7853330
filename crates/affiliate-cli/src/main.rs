//! Command line interface for numbering author affiliations.
//!
//! Reads an author list and an affiliation table and writes the numbered
//! author block as HTML, and optionally as LaTeX source.
//!
//! # Usage
//!
//! ```bash
//! # HTML only
//! affiliate authors.tsv affiliations.tsv authors.html
//!
//! # HTML and LaTeX
//! affiliate authors.tsv affiliations.tsv authors.html --out-latex authors.tex
//!
//! # Sorted labels and more logging
//! affiliate authors.tsv affiliations.tsv authors.html --sort-labels -vv
//! ```
//!
//! The authors file has one author per line: the name, a tab (or a colon),
//! then comma-separated affiliation shorthands. The affiliations file has one
//! shorthand per line followed by the full affiliation name.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use affiliate::{error::Result, pipeline::Pipeline, Config, LabelOrder};
use clap::{builder::ArgAction, Parser};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser, Debug)]
#[command(author, version, about = "Number author affiliations and render them as HTML or LaTeX")]
pub struct Cli {
  /// Path to a file in which each line is an author, in the desired order: the
  /// author's full name, then a tab (or a colon), then a comma-separated list of
  /// affiliation shorthands
  authors: PathBuf,

  /// Path to a file in which each line is an affiliation: a shorthand, then
  /// whitespace, then the full name of the affiliation
  affiliations: PathBuf,

  /// Path to the output HTML file; overwritten if it exists
  out_html: PathBuf,

  /// Also write LaTeX source to this path
  #[arg(long, value_name = "PATH")]
  out_latex: Option<PathBuf>,

  /// TOML file with rendering options
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Print each author's labels in ascending order instead of listed order
  #[arg(long)]
  sort_labels: bool,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Builds the rendering configuration from the optional config file and flags.
fn load_config(cli: &Cli) -> Result<Config> {
  let config = match &cli.config {
    Some(path) => Config::from_path(path)?,
    None => Config::default(),
  };
  Ok(if cli.sort_labels { config.with_label_order(LabelOrder::Ascending) } else { config })
}

/// Runs the pipeline described by the command line.
fn run(cli: &Cli) -> Result<()> {
  let config = load_config(cli)?;
  debug!(?config, "Using configuration");

  let mut pipeline =
    Pipeline::new(&cli.authors, &cli.affiliations, &cli.out_html).with_config(config);
  if let Some(out_latex) = &cli.out_latex {
    pipeline = pipeline.with_latex_output(out_latex);
  }

  let summary = pipeline.run()?;
  println!(
    "{} Numbered {} affiliations for {} authors",
    style(SUCCESS_PREFIX).green(),
    summary.affiliations,
    summary.authors,
  );
  for path in &summary.written {
    println!("  {}", style(path.display()).dim());
  }
  Ok(())
}

/// Entry point for the affiliate CLI
///
/// Exits with status 0 on success. Any read, parse or write failure is
/// reported on stderr and exits with status 1 without writing output.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{} {e}", style(ERROR_PREFIX).red());
      ExitCode::FAILURE
    },
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition() { Cli::command().debug_assert(); }

  #[test]
  fn test_parse_arguments() {
    let cli = Cli::parse_from([
      "affiliate",
      "authors.tsv",
      "affiliations.tsv",
      "out.html",
      "--out-latex",
      "out.tex",
      "-vv",
    ]);
    assert_eq!(cli.authors, PathBuf::from("authors.tsv"));
    assert_eq!(cli.out_latex, Some(PathBuf::from("out.tex")));
    assert_eq!(cli.verbose, 2);
    assert!(!cli.sort_labels);
  }

  #[test]
  fn test_sort_labels_overrides_config() {
    let cli = Cli::parse_from(["affiliate", "a", "b", "c", "--sort-labels"]);
    let config = load_config(&cli).unwrap();
    assert_eq!(config.label_order, LabelOrder::Ascending);
  }
}
