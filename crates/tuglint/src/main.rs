//! Binary entry point for the tuglint CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Check one snapshot, or every *.json snapshot under a directory
//! tuglint check build/snapshots/
//!
//! # Human-readable output, selected rules, non-zero exit on findings
//! tuglint check snap.json --format text --rule S2388 --fail-on-findings
//!
//! # Describe the registered rules
//! tuglint rules
//!
//! # Structured logs on stderr
//! tuglint --log-level debug --log-format json check snap.json
//! ```
//!
//! ## Exit codes
//!
//! - `0`: Success
//! - `1`: Findings present with `--fail-on-findings`
//! - `2`: Invalid arguments (unknown rule, bad format)
//! - `3`: File not found
//! - `4`: Malformed input
//! - `10`: Internal error

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use tuglint::cli::{collect_inputs, list_rules, run_check, select_rules};
use tuglint_core::config::{CliOverrides, ResolvedConfig};
use tuglint_core::error::LintError;
use tuglint_core::output::{emit_response, emit_text, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Static checks over resolved Java models.
///
/// Reads snapshot documents (symbols, inheritance and resolved trees
/// produced by a Java front end) and reports rule findings as JSON.
#[derive(Parser, Debug)]
#[command(name = "tuglint", version, about = "Static checks over resolved Java models")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Directory holding `tuglint.json` (default: current directory).
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Format of log lines written to stderr.
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Output format for the check command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON response (default).
    Json,
    /// One line per finding.
    Text,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check snapshot files or directories of snapshots.
    Check {
        /// Snapshot files, or directories searched recursively for `*.json`.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Run only this rule (repeatable).
        #[arg(long = "rule", value_name = "KEY")]
        rules: Vec<String>,

        /// Exit with code 1 when any finding is reported.
        #[arg(long)]
        fail_on_findings: bool,
    },
    /// List registered rules.
    Rules,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level, cli.global.log_format);

    match execute(cli) {
        Ok(code) => code,
        Err(err) => {
            let response = ErrorResponse::from_error(&err);

            // Errors go to stdout as JSON, like every other response
            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(err.error_code().code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel, format: LogFormat) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn execute(cli: Cli) -> Result<ExitCode, LintError> {
    match cli.command {
        Command::Check {
            paths,
            format,
            rules,
            fail_on_findings,
        } => {
            let overrides = CliOverrides {
                rules,
                format: format.map(|f| f.as_str().to_string()),
                fail_on_findings,
            };
            execute_check(&cli.global, &paths, &overrides)
        }
        Command::Rules => {
            emit_response(&list_rules(), &mut io::stdout())
                .map_err(|e| LintError::internal(format!("failed to write output: {}", e)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute_check(
    global: &GlobalArgs,
    paths: &[PathBuf],
    overrides: &CliOverrides,
) -> Result<ExitCode, LintError> {
    let workdir = match &global.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| LintError::internal(format!("cannot read current directory: {}", e)))?,
    };
    let config = ResolvedConfig::resolve(&workdir, overrides)?;
    tracing::debug!(?config, "resolved configuration");

    let rules = select_rules(&config)?;
    let inputs = collect_inputs(paths)?;
    let response = run_check(&inputs, &rules)?;

    let mut stdout = io::stdout();
    let written = if config.format.value == "text" {
        emit_text(&response, &mut stdout)
    } else {
        emit_response(&response, &mut stdout)
    };
    written.map_err(|e| LintError::internal(format!("failed to write output: {}", e)))?;

    if config.fail_on_findings.value && response.summary.findings_count > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
