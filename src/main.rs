mod logger;

use clap::Parser;
use log::LevelFilter;
use ndproof::{check_proof, demo, read_expression, RenderOptions};

#[derive(Parser)]
#[clap(name = "ndproof", version, about = "Checks natural deduction proofs step by step")]
struct Cli {
	/// Formula to parse and print, e.g. `FA x. P(x) -> EX y. P(y)`
	expression: Option<String>,

	/// Logging level: off, error, warn, info, debug or trace
	#[clap(long, default_value = "warn")]
	log_level: LevelFilter,

	/// Disable colored output
	#[clap(long)]
	no_color: bool,
}

fn main() {
	let cli = Cli::parse();
	let color = !cli.no_color;
	logger::init(cli.log_level, color);
	colored::control::set_override(color);

	if let Some(input) = &cli.expression {
		match read_expression(input, color) {
			Ok(expr) => println!("{}", expr),
			Err(report) => {
				println!("{}", report);
				std::process::exit(1);
			},
		}
	}

	match check_proof(demo::commutativity, &RenderOptions::default(), color) {
		Ok(text) => print!("{}", text),
		Err(report) => {
			println!("{}", report);
			std::process::exit(1);
		},
	}
}
