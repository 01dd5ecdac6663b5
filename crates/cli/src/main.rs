//! # Astgen
//! Generate visitor-pattern class hierarchies for syntax trees.
//!
//! Reads a compact description of each hierarchy, and writes the C++ base
//! class, visitor interface, and variant classes for it.

#![allow(clippy::print_stdout)]

mod commands;
mod diagnostics;

use astgen_emitter::config::{Layout, LineEnding};
use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::CommandStatus;
use owo_colors::*;
use std::process;

const STYLES: Styles = Styles::styled()
  .usage(Style::new().italic())
  .header(AnsiColor::BrightYellow.on_default().bold());

fn coloured_header() -> String {
  format!(
    "{} {}",
    "astgen".fg::<owo_colors::colors::css::Orange>().bold(),
    "(v0.1.0)".italic().dimmed()
  )
}

fn about() -> String {
  format!(
    "{}\nGenerate visitor-pattern class hierarchies for syntax trees.",
    coloured_header()
  )
}

#[derive(Parser)]
#[clap(
  name = "astgen",
  version,
  about = about(),
  styles = STYLES,
  disable_help_subcommand = true,
)]
enum App {
  /// Generates the declarations for each hierarchy
  #[clap(alias = "gen")]
  Generate(GenerateOptions),

  /// Checks the hierarchies for errors
  Check {
    /// The file to check
    file: String,
    /// Treat the whole file as the variants of this base type
    #[clap(long)]
    base: Option<String>,
  },

  /// Prints debugging information
  Print {
    #[command(subcommand)]
    command: PrintCommand,
  },
}

#[derive(Args)]
struct GenerateOptions {
  /// The file describing the hierarchies
  file: String,
  /// Treat the whole file as the variants of this base type
  #[clap(long)]
  base: Option<String>,
  /// The directory to write the generated files to
  #[clap(long, default_value = ".")]
  output_dir: String,
  /// Preview the generated files. Do not write them
  #[clap(long)]
  dryrun: bool,
  /// Check the generated files are up to date. Do not write them
  #[clap(long)]
  check: bool,

  /// Indentation size (spaces) to use. If 0 uses tabs
  #[clap(long, default_value_t = 2, help_heading = "Generator Config")]
  config_indent_size: u16,
  /// Name of the template parameter for the type visitors return. Not a type itself
  #[clap(long, default_value = "R", help_heading = "Generator Config")]
  config_result_type: String,
  /// Headers to include in the base file. Pass an empty string for none
  #[clap(long, default_value = "Token.h", help_heading = "Generator Config")]
  config_include: Vec<String>,
  /// How to split the declarations into files
  #[clap(
    long,
    value_enum,
    default_value_t = LayoutOption::Single,
    help_heading = "Generator Config"
  )]
  config_layout: LayoutOption,
  /// The extension of the generated files
  #[clap(long, default_value = "h", help_heading = "Generator Config")]
  config_extension: String,
  /// Add doc comments to the generated declarations
  #[clap(long, help_heading = "Generator Config")]
  config_doc_comments: bool,
  /// The line endings to use
  #[clap(
    long,
    value_enum,
    default_value_t = LineEndingOption::Lf,
    help_heading = "Generator Config"
  )]
  config_line_ending: LineEndingOption,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutOption {
  /// Everything in a single file
  Single,
  /// The base in one file, and a file for each variant
  PerVariant,
}
impl From<LayoutOption> for Layout {
  fn from(option: LayoutOption) -> Self {
    match option {
      LayoutOption::Single => Self::SingleFile,
      LayoutOption::PerVariant => Self::PerVariant,
    }
  }
}

#[derive(Clone, Copy, ValueEnum)]
enum LineEndingOption {
  /// `\n`
  Lf,
  /// `\r\n`
  Crlf,
  /// Whatever the current platform uses
  Native,
}
impl From<LineEndingOption> for LineEnding {
  fn from(option: LineEndingOption) -> Self {
    match option {
      LineEndingOption::Lf => Self::LineFeed,
      LineEndingOption::Crlf => Self::CarriageReturnLineFeed,
      LineEndingOption::Native => Self::Native,
    }
  }
}

#[derive(Subcommand)]
enum PrintCommand {
  /// Displays the classified code model
  Model {
    /// The file to print
    file: String,
    /// Treat the whole file as the variants of this base type
    #[clap(long)]
    base: Option<String>,
    /// Print as JSON
    #[clap(long)]
    json: bool,
  },
}

fn main() -> process::ExitCode {
  let args = App::parse();

  let result = match args {
    App::Generate(options) => commands::generate(&options),
    App::Check { file, base } => commands::check(&file, base.as_deref()),
    App::Print { command } => match command {
      PrintCommand::Model { file, base, json } => {
        commands::print_model(&file, base.as_deref(), json)
      }
    },
  };

  match result {
    Ok(CommandStatus::Success) => process::ExitCode::from(0),
    Ok(CommandStatus::Failure) => process::ExitCode::from(1),
    Err(()) => process::ExitCode::from(2),
  }
}
