//! Kickback Demo Suite
//!
//! Shared plumbing for the demo binaries:
//!
//! - **demo-deutsch**: the four one-bit functions
//! - **demo-deutsch-jozsa**: a random constant-or-balanced oracle
//! - **demo-bernstein-vazirani**: recovering a hidden bit-string
//!
//! Every binary accepts `-v` (repeatable) for log verbosity and `--seed`
//! (or `KICKBACK_SEED`) to make simulator sampling and oracle selection
//! reproducible.

use clap::Args;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use kickback_adapter_sim::SimulatorBackend;
use kickback_hal::{Backend, BackendConfig, BackendFactory, Counts, HalError, HalResult};

/// Flags shared by every demo.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Seed for oracle selection and measurement sampling
    #[arg(long, env = "KICKBACK_SEED")]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Build the simulator backend these flags describe.
    pub fn backend(&self) -> HalResult<SimulatorBackend> {
        let mut config = BackendConfig::new("simulator");
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        SimulatorBackend::from_config(config)
    }

    /// Random source for oracle selection.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Reject a register of `num_qubits` before anything that wide is built.
pub fn ensure_fits<B: Backend + ?Sized>(backend: &B, num_qubits: u32) -> HalResult<()> {
    let max = backend.capabilities().num_qubits;
    if num_qubits > max {
        return Err(HalError::CircuitTooLarge(format!(
            "{num_qubits} qubits needed but {} only supports {max}",
            backend.name()
        )));
    }
    Ok(())
}

/// Map a `-v` count to a log filter directive.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Print an error in the CLI style and exit with status 1.
pub fn exit_with_error(err: &anyhow::Error) -> ! {
    eprintln!("{} {:#}", style("Error:").red().bold(), err);
    std::process::exit(1);
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a circuit diagram indented under the current section.
pub fn print_diagram(diagram: &str) {
    for line in diagram.lines() {
        println!("  {line}");
    }
}

/// Render a histogram as `bitstring  count  bar` lines, ordered by bit-string.
pub fn histogram_lines(counts: &Counts) -> Vec<String> {
    let total = counts.total().max(1);
    counts
        .sorted()
        .into_iter()
        .map(|(bits, count)| {
            let bar = "█".repeat((count * 30 / total) as usize);
            format!("{bits}  {count:>5}  {bar}")
        })
        .collect()
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}
