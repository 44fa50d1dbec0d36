use crate::app::App;
use crate::export::print_report;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Full-screen rendition of the printable report.
pub fn render_print_view(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area().inner(Margin::new(2, 1)));

    let block = Block::default()
        .title(" Printable View ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    // The print action only opens this screen with exportable results held.
    let report = app.exportable().map(print_report).unwrap_or_default();

    let body = Paragraph::new(report)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.print_scroll, 0));
    f.render_widget(body, layout[0]);

    let hint = Paragraph::new(Span::styled(
        "Up/Down: scroll | Esc: back | q: quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(hint, layout[1]);
}
