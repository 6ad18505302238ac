//! CLI argument definitions
//!
//! All Clap derive structs for `argmark` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Render command-line usage guides to markdown.
#[derive(Parser, Debug)]
#[command(name = "argmark", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ARGMARK_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render usage guides and splice them into a markdown file.
    Write(WriteArgs),

    /// Print the usage guide of argmark itself as markdown.
    Guide(GuideArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Write Command
// ============================================================================

/// Arguments for `write`.
///
/// Every value may also come from a settings file (`--config-file`); flags
/// given on the command line win.
#[derive(Args, Debug, Default)]
pub struct WriteArgs {
    /// Markdown file to update. Without marker lines the whole file is replaced.
    #[arg(short, long = "markdown", value_name = "FILE")]
    pub markdown: Option<PathBuf>,

    /// JSON or YAML file holding usage guide configurations (repeatable).
    #[arg(short, long = "guide-file", value_name = "FILE")]
    pub guide_files: Vec<PathBuf>,

    /// Key of the guide configuration inside each guide file (repeatable).
    /// Defaults to `usageGuideInfo`.
    #[arg(short, long = "export", value_name = "NAME")]
    pub exports: Vec<String>,

    /// Check the file instead of writing it; exit non-zero when out of date.
    #[arg(long)]
    pub verify: bool,

    /// Message printed when verification fails. `{fileName}` is replaced
    /// with the file path.
    #[arg(long, value_name = "MESSAGE")]
    pub verify_message: Option<String>,

    /// Marker line below which generated content is written.
    #[arg(long, value_name = "LINE")]
    pub replace_below: Option<String>,

    /// Marker line above which generated content is written.
    #[arg(long, value_name = "LINE")]
    pub replace_above: Option<String>,

    /// Reduce runs of blank lines in the result to a single blank line.
    #[arg(long)]
    pub remove_double_blank_lines: bool,

    /// JSON or YAML file to load write settings from.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Dotted path of the settings inside `--config-file`, for example
    /// `configs.writeMarkdown`.
    #[arg(short = 'p', long, value_name = "PATH", requires = "config_file")]
    pub json_path: Option<String>,
}

// ============================================================================
// Utility Commands
// ============================================================================

/// Arguments for `guide`.
#[derive(Args, Debug)]
pub struct GuideArgs {
    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for commands that support machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
