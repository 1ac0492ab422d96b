use clap::Parser;
use roster::adapter::inbound::cli::command::Cli;
use roster::adapter::inbound::cli::run;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(report) = run::execute(cli) {
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
