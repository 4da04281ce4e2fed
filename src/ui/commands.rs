use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction};
use crate::filter::TransactionFilter;
use crate::models::{allowed_list, find_allowed};
use crate::ui::util::format_amount;
use crate::validation;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 12.50 food)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (e.g. :a 12.50 food)", cmd_add, r);
    register_command!(
        "remove",
        "Remove selected transaction, or row N (e.g. :remove 2)",
        cmd_remove,
        r
    );
    register_command!(
        "rm",
        "Remove selected transaction, or row N",
        cmd_remove,
        r
    );
    register_command!("undo", "Undo the last add", cmd_undo, r);
    register_command!("u", "Undo the last add", cmd_undo, r);
    register_command!(
        "filter-amount",
        "Show only an exact amount (e.g. :filter-amount 50)",
        cmd_filter_amount,
        r
    );
    register_command!(
        "fa",
        "Show only an exact amount",
        cmd_filter_amount,
        r
    );
    register_command!(
        "filter-category",
        "Show only one category (e.g. :filter-category food)",
        cmd_filter_category,
        r
    );
    register_command!(
        "fc",
        "Show only one category",
        cmd_filter_category,
        r
    );
    register_command!("clear-filter", "Show all transactions", cmd_clear_filter, r);
    register_command!("cf", "Show all transactions", cmd_clear_filter, r);
    register_command!(
        "categories",
        "List allowed categories",
        cmd_categories,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    // Add feedback only colours the status line of the command that produced it
    app.controller.view_mut().last_add = None;

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

pub(crate) fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut parts = args.split_whitespace();
    let (Some(amount), Some(category), None) = (parts.next(), parts.next(), parts.next()) else {
        app.set_status("Usage: :add <amount> <category>");
        return Ok(());
    };

    match app.controller.add_transaction_input(amount, category) {
        Ok(()) => {
            // New rows land at the end; follow them
            let len = app.rows().len();
            app.cursor.bottom(len, app.visible_rows);
            if let Some(txn) = app.controller.model().transactions().last() {
                let message = format!(
                    "Added: {} {} at {}",
                    format_amount(txn.amount()),
                    txn.category(),
                    txn.timestamp()
                );
                app.set_status(message);
            }
        }
        Err(validation::ValidationError::InvalidCategory) => {
            app.set_status(format!(
                "Invalid category '{category}'. Allowed: {}",
                allowed_list()
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_remove(args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.rows().is_empty() {
        app.set_status("No transactions to remove");
        return Ok(());
    }

    if args.is_empty() {
        if let Some(txn) = app.selected_transaction().cloned() {
            let message = format!("Remove {} {}?", format_amount(txn.amount()), txn.category());
            app.request_confirm(PendingAction::RemoveTransaction { txn }, message);
        }
        return Ok(());
    }

    // Rows are numbered from 1 as shown in the table
    let row = match args.parse::<usize>() {
        Ok(n) if (1..=app.rows().len()).contains(&n) => n,
        _ => {
            app.set_status(format!(
                "Invalid row: {args}. Expected 1 to {}",
                app.rows().len()
            ));
            return Ok(());
        }
    };
    app.cursor.select(row - 1, app.visible_rows);
    if let Some(txn) = app.selected_transaction().cloned() {
        app.pending_action = Some(PendingAction::RemoveTransaction { txn });
        app.confirm_pending();
    }
    Ok(())
}

fn cmd_undo(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.controller.undo() {
        app.clamp_cursor();
        app.set_status("Undid last add");
    } else {
        app.set_status("Nothing to undo");
    }
    Ok(())
}

fn cmd_filter_amount(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :filter-amount <amount>");
        return Ok(());
    }
    let amount = match validation::parse_amount(args) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {args}"));
            return Ok(());
        }
    };
    apply_filter(app, TransactionFilter::Amount(amount));
    Ok(())
}

fn cmd_filter_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Usage: :filter-category <category>. Allowed: {}",
            allowed_list()
        ));
        return Ok(());
    }
    if find_allowed(args).is_none() {
        app.set_status(format!(
            "Invalid category '{args}'. Allowed: {}",
            allowed_list()
        ));
        return Ok(());
    }
    apply_filter(app, TransactionFilter::Category(args.to_string()));
    Ok(())
}

fn cmd_clear_filter(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.controller.clear_filter();
    app.controller.refresh();
    app.clamp_cursor();
    app.set_status("Filter cleared");
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_status(format!("Categories: {}", allowed_list()));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn apply_filter(app: &mut App, filter: TransactionFilter) {
    let label = filter.to_string();
    app.controller.set_filter(filter);
    app.controller.refresh();
    app.cursor.top();
    let count = app.rows().len();
    app.set_status(format!(
        "Filter {label}: {count} match{}",
        if count == 1 { "" } else { "es" }
    ));
}

/// Open command mode with `prefix` already typed, for single-key shortcuts.
pub(crate) fn prefill(app: &mut App, prefix: &str) {
    app.input_mode = InputMode::Command;
    app.command_input = prefix.to_string();
}
