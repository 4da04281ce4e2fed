use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{self, BufRead};

use crate::models::{allowed_list, ALLOWED_CATEGORIES};
use crate::ui::app::{App, InputMode};
use crate::ui::commands::{self, COMMANDS};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "run" => cli_run(io::stdin().lock()),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI — in-memory expense tracker");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  run                           Read commands from stdin, print the final table");
    println!("  categories                    List allowed categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Commands accepted by `run` (one per line, # starts a comment):");
    let mut names: Vec<(&str, &str)> = COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2 && **name != "help" && **name != "quit")
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    names.sort_by_key(|(name, _)| *name);
    for (name, desc) in names {
        println!("  {name:<28}  {desc}");
    }
    println!();
    println!("Set RUST_LOG=debug to trace controller activity on stderr.");
}

fn cli_categories() {
    for cat in ALLOWED_CATEGORIES {
        println!("{cat}");
    }
}

fn cli_run(input: impl BufRead) -> Result<()> {
    let app = run_script(input)?;
    println!();
    print_table(&app);
    Ok(())
}

/// Feed each input line to the command registry, echoing the feedback.
fn run_script(input: impl BufRead) -> Result<App> {
    let mut app = App::new();

    for (n, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", n + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        debug!("line {}: {line}", n + 1);

        commands::handle_command(line, &mut app)?;
        if app.input_mode == InputMode::Confirm {
            // No prompt to answer here
            app.cancel_pending();
            app.set_status("Use `remove <row>` to remove without confirmation");
        }
        if app.controller.view().last_add == Some(false) {
            warn!("line {}: {}", n + 1, app.status_message);
        }
        println!("{:>4}: {}", n + 1, app.status_message);
        app.status_message.clear();

        if !app.running {
            break;
        }
    }

    Ok(app)
}

fn print_table(app: &App) {
    let view = app.controller.view();
    println!("Filter: {}", app.controller.filter());
    println!("{:<4} {:>14}  {:<16} Date", "#", "Amount", "Category");
    println!("{}", "─".repeat(55));
    for (i, txn) in view.rows.iter().enumerate() {
        println!(
            "{:<4} {:>14}  {:<16} {}",
            i + 1,
            format_amount(txn.amount()),
            txn.category(),
            txn.timestamp()
        );
    }
    println!("{}", "─".repeat(55));
    println!("{:<4} {:>14}  Total", "", format_amount(view.total()));
    println!(
        "Undo: {}",
        if view.undo_enabled { "available" } else { "unavailable" }
    );
    if view.rows.is_empty() && app.controller.model().is_empty() {
        println!("(no transactions; allowed categories: {})", allowed_list());
    }
}
