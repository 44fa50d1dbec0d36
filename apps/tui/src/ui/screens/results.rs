use crate::app::state::{App, UiState};
use crate::domain::ResultSet;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_results(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(5),    // Results area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title(f, layout[0]);
    render_body(app, f, layout[1]);
    render_shortcuts(app, f, layout[2]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Generated Questions",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    match &app.ui_state {
        UiState::Loading => render_loading(app, f, area, block),
        UiState::ShownEmpty => {
            // Informational, deliberately distinct from the error styling.
            let notice = Paragraph::new(Span::styled(
                "No questions could be generated. Please try another paragraph.",
                Style::default().fg(Color::Cyan),
            ))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(notice, area);
        }
        UiState::Shown => {
            if let Some(results) = &app.results {
                let paragraph = Paragraph::new(Text::from(result_lines(results)))
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((app.results_scroll, 0));
                f.render_widget(paragraph, area);
            }
        }
        UiState::Idle | UiState::Error(_) => {
            // The loop routes errors back to the form; this is only reached
            // when revisiting held results via `r`.
            if let Some(results) = &app.results {
                let paragraph = Paragraph::new(Text::from(result_lines(results)))
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((app.results_scroll, 0));
                f.render_widget(paragraph, area);
            } else {
                let notice = Paragraph::new("Nothing to show yet.")
                    .alignment(Alignment::Center)
                    .block(block);
                f.render_widget(notice, area);
            }
        }
    }
}

fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect, block: Block<'_>) {
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let row = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1.min(inner.height),
    };

    let spinner = Throbber::default().throbber_style(Style::default().fg(Color::Cyan));
    let line = TextLine::from(vec![
        spinner.to_symbol_span(&app.throbber_state),
        Span::styled(
            " Generating questions...",
            Style::default().fg(Color::Cyan),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        row,
    );
}

/// Display fragment for a result set: count header, then one numbered block
/// per pair in input order. Content is carried verbatim.
pub fn result_lines(results: &ResultSet) -> Vec<TextLine<'_>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("Total questions: {}", results.len()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for (index, pair) in results.pairs.iter().enumerate() {
        lines.push(TextLine::from(Span::styled(
            format!("Question {}", index + 1),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(vec![
            Span::styled("  Q: ", Style::default().fg(Color::Gray)),
            Span::raw(pair.question.as_str()),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("  A: ", Style::default().fg(Color::Gray)),
            Span::raw(pair.answer.as_str()),
        ]));
        lines.push(TextLine::from(Span::styled(
            format!("  Type: {}", pair.kind),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(TextLine::from(""));
    }

    lines
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hint = if app.is_loading() {
        "Generating... | q: quit"
    } else {
        "j: JSON export | t: text export | p: print view | n: new | Esc: back | q: quit"
    };
    let shortcuts = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    f.render_widget(shortcuts, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QaPair;

    fn pair(n: usize) -> QaPair {
        QaPair {
            question: format!("ప్రశ్న {n}?"),
            answer: format!("జవాబు {n}"),
            kind: "what".to_string(),
        }
    }

    fn rendered(results: &ResultSet) -> Vec<String> {
        result_lines(results)
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn renders_one_numbered_block_per_pair_in_order() {
        let results = ResultSet::new("పేరా", vec![pair(1), pair(2), pair(3)]);
        let lines = rendered(&results);

        assert_eq!(lines[0], "Total questions: 3");

        let headers: Vec<&String> = lines
            .iter()
            .filter(|line| line.starts_with("Question "))
            .collect();
        assert_eq!(
            headers,
            vec!["Question 1", "Question 2", "Question 3"]
        );
    }

    #[test]
    fn blocks_carry_question_answer_and_type_verbatim() {
        let results = ResultSet::new("పేరా", vec![pair(7)]);
        let joined = rendered(&results).join("\n");

        assert!(joined.contains("ప్రశ్న 7?"));
        assert!(joined.contains("జవాబు 7"));
        assert!(joined.contains("Type: what"));
    }
}
