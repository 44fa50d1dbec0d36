use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let entry = |key: &'static str, action: &'static str| {
        TextLine::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::raw(action),
        ])
    };

    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            "  Form",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        entry("Enter", "edit the paragraph / submit"),
        entry("Tab/Up/Down", "move between fields"),
        entry("Left/Right", "adjust count or difficulty"),
        entry("g", "generate questions"),
        entry("c", "clear the form"),
        entry("r", "show last results"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "  Results",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        entry("j", "export as JSON"),
        entry("t", "export as text"),
        entry("p", "printable view"),
        entry("n", "new paragraph"),
        entry("Esc/b", "back to the form"),
        TextLine::from(""),
        entry("q", "quit"),
        entry("F1 / ?", "toggle this help"),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, area);
}
