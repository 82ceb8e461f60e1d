//! Deutsch's Algorithm Demo
//!
//! Decides whether a one-bit function is constant or balanced with a single
//! oracle query.

use clap::Parser;
use tracing::info;

use kickback_algo::{DeutschCase, compile_circuit, dj_algorithm};
use kickback_demos::{
    CommonArgs, exit_with_error, init_logging, print_diagram, print_header, print_info,
    print_result, print_section, print_success, print_warning,
};

#[derive(Parser, Debug)]
#[command(name = "demo-deutsch")]
#[command(about = "Demonstrate Deutsch's algorithm on one of the four one-bit functions")]
struct Args {
    /// Function to query: 1 = f(x)=0, 2 = f(x)=x, 3 = f(x)=NOT x, 4 = f(x)=1
    #[arg(short, long, default_value = "3")]
    case: u8,

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
    print_header("Deutsch's Algorithm Demo");

    let case = DeutschCase::try_from(args.case)?;
    let backend = args.common.backend()?;
    info!(case = case.selector(), seed = ?args.common.seed, "Selected Deutsch oracle");

    print_section("Oracle");
    print_result("Function", case);
    let oracle = case.circuit()?;
    print_diagram(&oracle.draw());

    print_section("Compiled Circuit");
    let compiled = compile_circuit(&oracle)?;
    print_result("Depth", compiled.depth());
    print_diagram(&compiled.draw());

    print_section("Result");
    let class = dj_algorithm(&oracle, &backend)?;
    print_result("Measured class", class);
    print_result("Expected class", case.class());

    println!();
    if class == case.class() {
        print_success("One query was enough to tell the function apart.");
    } else {
        print_warning("Measured class disagrees with the truth table.");
    }
    print_info("A classical algorithm needs both f(0) and f(1).");
    Ok(())
}
