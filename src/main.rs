mod controller;
mod filter;
mod models;
mod run;
mod ui;
mod validation;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(),
        _ => {
            // stderr belongs to the terminal UI otherwise
            env_logger::init();
            run::as_cli(&args)
        }
    }
}
