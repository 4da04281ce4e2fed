use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let filter = app.controller.filter();
    let rows_shown = app.rows();

    if rows_shown.is_empty() {
        let msg = if filter.is_active() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No transactions matching {filter}"),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press x to clear the filter",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a or type :add <amount> <category>",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Transactions (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["#", "Amount", "Category", "Date"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    // Borders, header and the total row
    let body_height = area.height.saturating_sub(4) as usize;

    let mut rows: Vec<Row> = rows_shown
        .iter()
        .enumerate()
        .skip(app.cursor.offset)
        .take(body_height)
        .map(|(i, txn)| {
            let style = if i == app.cursor.selected {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(Span::styled(format_amount(txn.amount()), theme::amount_style())),
                Cell::from(txn.category().to_string()),
                Cell::from(txn.timestamp().to_string()),
            ])
            .style(style)
        })
        .collect();

    rows.push(Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(format_amount(app.controller.view().total()), theme::total_style())),
        Cell::from(Span::styled("Total", theme::total_style())),
        Cell::from(""),
    ]));

    let widths = [
        Constraint::Length(5),
        Constraint::Length(16),
        Constraint::Length(18),
        Constraint::Min(18),
    ];

    let filter_label = if filter.is_active() {
        format!("filter: {filter} ")
    } else {
        String::new()
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Transactions ({}) {filter_label}", rows_shown.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
