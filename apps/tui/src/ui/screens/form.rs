use crate::app::state::{App, FormField, UiState};
use crate::domain::Difficulty;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_form(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(8),    // Form area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title(f, layout[0]);
    render_fields(app, f, layout[1]);
    render_status(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Telugu ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Q&A Generator",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn field_style(app: &App, field: FormField) -> Style {
    let is_selected = app.form.field == field;
    let is_editing = is_selected && app.form.editing;

    if is_editing {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn field_prefix(app: &App, field: FormField) -> &'static str {
    if app.form.field == field && app.form.editing {
        "► "
    } else if app.form.field == field {
        "> "
    } else {
        "  "
    }
}

fn render_fields(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Paragraph & Parameters ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Paragraph label
            Constraint::Min(3),    // Paragraph text
            Constraint::Length(1), // Question count
            Constraint::Length(1), // Difficulty
        ])
        .split(inner);

    let char_count = app.form.paragraph.chars().count();
    let paragraph_label = TextLine::from(vec![
        Span::styled(
            format!("{}Paragraph", field_prefix(app, FormField::Paragraph)),
            field_style(app, FormField::Paragraph),
        ),
        Span::styled(
            format!("  ({char_count} chars)"),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(paragraph_label), chunks[0]);

    let mut text = app.form.paragraph.clone();
    if app.form.field == FormField::Paragraph && app.form.editing {
        text.push('_');
    }
    let paragraph_body = Paragraph::new(Text::raw(text)).wrap(Wrap { trim: false });
    f.render_widget(paragraph_body, chunks[1]);

    let count_line = TextLine::from(vec![
        Span::styled(
            format!("{}Questions: ", field_prefix(app, FormField::NumQuestions)),
            field_style(app, FormField::NumQuestions),
        ),
        Span::styled(
            format!("◄ {} ►", app.form.num_questions),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(count_line), chunks[2]);

    let difficulty_line = TextLine::from(difficulty_spans(app));
    f.render_widget(Paragraph::new(difficulty_line), chunks[3]);
}

fn difficulty_spans(app: &App) -> Vec<Span<'_>> {
    let mut spans = vec![Span::styled(
        format!("{}Difficulty: ", field_prefix(app, FormField::Difficulty)),
        field_style(app, FormField::Difficulty),
    )];

    for index in 0..Difficulty::options().len() {
        let Some(level) = Difficulty::from_index(index) else {
            continue;
        };
        let style = if index == app.form.difficulty_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", level.label()), style));
        spans.push(Span::raw(" "));
    }

    spans
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (message, color) = match &app.ui_state {
        UiState::Idle => ("Ready".to_string(), Color::Gray),
        UiState::Loading => ("Generating questions...".to_string(), Color::Cyan),
        UiState::Shown => {
            let count = app.results.as_ref().map_or(0, crate::domain::ResultSet::len);
            (format!("{count} questions generated, press r to view"), Color::Green)
        }
        UiState::ShownEmpty => ("No questions were generated".to_string(), Color::Yellow),
        UiState::Error(message) => (message.clone(), Color::Red),
    };

    let status = Paragraph::new(Span::styled(message, Style::default().fg(color))).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hint = if app.form.editing {
        "Esc: stop editing | Enter: new line"
    } else {
        "Enter: edit/submit | g: generate | c: clear | r: results | F1: help | q: quit"
    };
    let shortcuts = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    f.render_widget(shortcuts, area);
}
