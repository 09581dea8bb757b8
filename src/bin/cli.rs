// src/bin/cli.rs
use table_recon::cli::{self, Command, Outcome};

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }

    let params = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(p)) => p,
        Ok(Command::Help) => {
            eprintln!("{}", cli::help());
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{}", cli::help());
            std::process::exit(2);
        }
    };

    table_recon::log::init(&params.log_level);

    match cli::run(&params) {
        Ok(Outcome::Reconciled) => {}
        Ok(Outcome::Mismatched(n)) => {
            eprintln!("{n} problem(s) found");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(2);
        }
    }
}
