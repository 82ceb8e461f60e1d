//! Deutsch-Jozsa Algorithm Demo
//!
//! Draws a random oracle that is promised to be constant or balanced and
//! decides which with a single query.

use clap::Parser;
use tracing::info;

use kickback_algo::{DjOracle, dj_algorithm};
use kickback_demos::{
    CommonArgs, ensure_fits, exit_with_error, init_logging, print_diagram, print_header,
    print_info, print_result, print_section, print_success, print_warning,
};

#[derive(Parser, Debug)]
#[command(name = "demo-deutsch-jozsa")]
#[command(about = "Demonstrate the Deutsch-Jozsa algorithm on a random oracle")]
struct Args {
    /// Number of input qubits (the oracle adds one ancilla)
    #[arg(short = 'n', long, default_value = "3")]
    qubits: u32,

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
    print_header("Deutsch-Jozsa Algorithm Demo");

    let backend = args.common.backend()?;
    ensure_fits(&backend, args.qubits.saturating_add(1))?;
    let mut rng = args.common.rng();
    let oracle = DjOracle::random(args.qubits, &mut rng)?;
    info!(
        qubits = args.qubits,
        seed = ?args.common.seed,
        class = %oracle.class(),
        "Drew random oracle"
    );

    print_section("Problem Setup");
    print_result("Input qubits", args.qubits);
    print_result("Domain size", 1u64 << args.qubits);
    print_result("Output inverted", oracle.flip_output());
    if let Some(states) = oracle.on_states() {
        let width = args.qubits as usize;
        let mut sorted = states.to_vec();
        sorted.sort_unstable();
        let listed: Vec<String> = sorted.iter().map(|s| format!("{s:0width$b}")).collect();
        print_result("Marked inputs", listed.join(" "));
    }

    print_section("Oracle");
    let circuit = oracle.circuit()?;
    print_result("Operations", circuit.num_ops());
    print_diagram(&circuit.draw());

    print_section("Result");
    let class = dj_algorithm(&circuit, &backend)?;
    print_result("Measured class", class);
    print_result("True class", oracle.class());

    println!();
    if class == oracle.class() {
        print_success("Deutsch-Jozsa demo complete!");
    } else {
        print_warning("Measured class disagrees with the oracle.");
    }
    print_info(&format!(
        "A deterministic classical check may need {} queries.",
        (1u64 << args.qubits) / 2 + 1
    ));
    Ok(())
}
