// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the transport, run one
//   dispatch, print whatever the reporter decided.
// - Argument errors exit non-zero, parser-style; every other failure,
//   including remote rejections and network faults, is reported as
//   text and the process still exits zero.

use chrono::Local;
use clap::Parser;

use pixtrack::api::ApiClient;
use pixtrack::cli::Cli;
use pixtrack::dispatch::{self, CliError};
use pixtrack::report::Outcome;
use pixtrack::request::Endpoints;
use pixtrack::ui::ConsolePrompter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let endpoints = Endpoints::from_env();
    let client = ApiClient::new()?;
    let mut prompter = ConsolePrompter;
    let today = Local::now().date_naive();

    match dispatch::run(&cli, &endpoints, &client, &mut prompter, today) {
        Ok(Outcome::Silent) => {}
        Ok(Outcome::Lines(lines)) => {
            for line in lines {
                println!("{line}");
            }
        }
        Ok(Outcome::RemoteFailure(message)) => println!("{message}"),
        Err(err) => {
            if let Some(cli_err) = err.downcast_ref::<CliError>() {
                eprintln!("error: {cli_err}");
                std::process::exit(2);
            }
            println!("{err}");
        }
    }
    Ok(())
}
