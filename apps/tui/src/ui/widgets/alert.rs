use crate::app::state::AlertLevel;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Dismissible notice banner, drawn over the top of whatever screen is
/// active. Expiry is handled in `App::update`.
pub fn render_alert(app: &App, f: &mut Frame<'_>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = f.area();
    if area.height < 4 || area.width < 10 {
        return;
    }

    let banner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 3,
    };

    let color = match alert.level {
        AlertLevel::Info => Color::Green,
        AlertLevel::Warning => Color::Yellow,
        AlertLevel::Danger => Color::Red,
    };

    let paragraph = Paragraph::new(alert.message.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(Clear, banner);
    f.render_widget(paragraph, banner);
}
