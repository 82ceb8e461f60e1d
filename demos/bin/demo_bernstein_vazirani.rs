//! Bernstein-Vazirani Algorithm Demo
//!
//! Recovers a hidden bit-string `s` from the oracle `f(x) = s·x mod 2` with
//! one query.

use clap::Parser;
use tracing::info;

use kickback_algo::{BvSecret, compile_circuit, run_single_shot};
use kickback_demos::{
    CommonArgs, ensure_fits, exit_with_error, histogram_lines, init_logging, print_diagram,
    print_header, print_info, print_result, print_section, print_success, print_warning,
};
use kickback_hal::{Backend, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "demo-bernstein-vazirani")]
#[command(about = "Demonstrate the Bernstein-Vazirani algorithm")]
struct Args {
    /// Hidden bit-string, most significant bit first
    #[arg(short, long, default_value = "1001")]
    secret: String,

    /// Shots for the outcome histogram
    #[arg(long, default_value = "64")]
    shots: u32,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    init_logging(args.common.verbose);

    if let Err(e) = run(&args) {
        exit_with_error(&e);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    print_header("Bernstein-Vazirani Algorithm Demo");

    let secret: BvSecret = args.secret.parse()?;
    let backend = args.common.backend()?;
    ensure_fits(&backend, u32::try_from(secret.len())?.saturating_add(1))?;
    info!(secret = %secret, seed = ?args.common.seed, "Querying Bernstein-Vazirani oracle");

    print_section("Oracle");
    print_result("Secret", &secret);
    let oracle = secret.circuit()?;
    print_diagram(&oracle.draw());

    print_section("Compiled Circuit");
    let compiled = compile_circuit(&oracle)?;
    print_result("Qubits", compiled.num_qubits());
    print_result("Classical bits", compiled.num_clbits());
    print_diagram(&compiled.draw());

    print_section("Result");
    let measured = run_single_shot(&backend, &compiled)?;
    print_result("Measured", &measured);

    print_section("Shot Histogram");
    let result = backend.run(&compiled, RunOptions::new(args.shots))?;
    for line in histogram_lines(&result.counts) {
        println!("  {line}");
    }
    if let Some((bits, count)) = result.counts.most_frequent() {
        print_result("Most frequent", format!("{bits} ({count}/{})", result.shots));
    }

    println!();
    if measured == secret.as_str() {
        print_success("Secret recovered with a single query.");
    } else {
        print_warning("Measured string differs from the secret.");
    }
    print_info(&format!(
        "A classical algorithm needs {} queries, one per bit.",
        secret.len()
    ));
    Ok(())
}
