mod config;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use biquad_core::{BiquadError, Coefficients};
use config::{Config, OutputFormat};

const EXIT_SUCCESS: u8 = 0;
/// Exit status for rejected coefficients and overflowing equations.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "biquad",
    version,
    about = "Real roots of biquadratic equations a*x^4 + b*x^2 + c = 0"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a*x^4 + b*x^2 + c = 0
    Solve {
        #[command(flatten)]
        coefficients: CoefficientArgs,

        /// Output format (default from config: text)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Decimal places for text output
        #[arg(short, long)]
        precision: Option<usize>,

        /// Print the polynomial value at each root
        #[arg(long)]
        verify: bool,
    },

    /// Validate coefficients without solving
    Check {
        #[command(flatten)]
        coefficients: CoefficientArgs,
    },

    /// Show active configuration
    Config,
}

#[derive(Args)]
struct CoefficientArgs {
    /// Coefficient of x^4 (must be non-zero)
    #[arg(allow_negative_numbers = true)]
    a: String,

    /// Coefficient of x^2
    #[arg(allow_negative_numbers = true)]
    b: String,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    c: String,
}

impl CoefficientArgs {
    fn parse(&self) -> Result<Coefficients, BiquadError> {
        Coefficients::parse(&self.a, &self.b, &self.c)
    }
}

fn init_tracing(cfg: &Config) -> Result<()> {
    let default_level = cfg.log.level_filter()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_tracing(&cfg)?;

    let stdout = &mut std::io::stdout().lock();
    let stderr = &mut std::io::stderr().lock();
    let status = match cli.command {
        Commands::Solve {
            coefficients,
            format,
            precision,
            verify,
        } => {
            let format = format.unwrap_or(cfg.output.format);
            let precision = precision.unwrap_or(cfg.output.precision);
            let verify = verify || cfg.output.verify;
            cmd_solve(&coefficients, format, precision, verify, stdout, stderr)?
        }
        Commands::Check { coefficients } => cmd_check(&coefficients, stdout, stderr)?,
        Commands::Config => cmd_config(&cfg, stdout)?,
    };
    Ok(ExitCode::from(status))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Returns the process exit status. Errors are reserved for I/O failures.
fn cmd_solve(
    args: &CoefficientArgs,
    format: OutputFormat,
    precision: usize,
    verify: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let solution = match args.parse().and_then(|c| c.solve()) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(error = %e, "rejected coefficients");
            match format {
                OutputFormat::Text => writeln!(err, "error: {e}")?,
                OutputFormat::Json => writeln!(out, "{}", render::format_error_json(&e))?,
            }
            return Ok(EXIT_INVALID_INPUT);
        }
    };

    match format {
        OutputFormat::Text => {
            let text = render::format_text(&solution, precision, verify);
            write!(out, "{text}")?
        }
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&render::format_json(&solution, verify))?
        )?,
    }
    Ok(EXIT_SUCCESS)
}

fn cmd_check(args: &CoefficientArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<u8> {
    match args.parse() {
        Ok(coefficients) => {
            writeln!(out, "valid: {coefficients}")?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            writeln!(err, "error: {e}")?;
            Ok(EXIT_INVALID_INPUT)
        }
    }
}

fn cmd_config(cfg: &Config, out: &mut dyn Write) -> Result<u8> {
    writeln!(out, "Config: {}", config::show_config_path())?;
    writeln!(out)?;
    writeln!(out, "[output]")?;
    writeln!(out, "  format = {}", cfg.output.format)?;
    writeln!(out, "  precision = {}", cfg.output.precision)?;
    writeln!(out, "  verify = {}", cfg.output.verify)?;
    writeln!(out)?;
    writeln!(out, "[log]")?;
    writeln!(out, "  level = {}", cfg.log.level)?;
    Ok(EXIT_SUCCESS)
}
