use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;
use crate::session::QuizSession;

use super::format_clock;

/// Seconds left at which the timer turns red.
const LOW_TIME_SECONDS: u32 = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let question = session.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_question_text(frame, chunks[3], session.current_index(), &question.prompt);
    render_options(
        frame,
        chunks[4],
        question,
        app.selected_option(),
        session.current_answer(),
    );
    render_controls(frame, chunks[5], session);
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let remaining = session.remaining_seconds();
    let timer_color = if remaining <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::Yellow
    };

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Paragraph::new(session.quiz().title.as_str()).fg(Color::DarkGray);
    frame.render_widget(title, halves[0]);

    let status = Line::from(vec![
        Span::styled(
            format!("{}  ", format_clock(remaining)),
            Style::default().fg(timer_color).bold(),
        ),
        Span::styled(
            format!(
                "{} of {}",
                session.current_index() + 1,
                session.quiz().len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), halves[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let widget = Gauge::default()
        .ratio(session.progress().clamp(0.0, 1.0))
        .label("")
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, index: usize, text: &str) {
    let content = vec![
        Line::from(Span::styled(
            format!("Question {}", index + 1),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(text, Style::default().fg(Color::White).bold())),
    ];
    let widget = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    highlighted: usize,
    recorded: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_recorded = recorded == Some(index);
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_recorded {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let bullet = if is_recorded { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", bullet), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let next = if session.is_last_question() {
        "n submit"
    } else {
        "n next"
    };
    let text = format!(
        "j/k move  ·  enter answer  ·  {}  ·  p previous  ·  s submit  ·  esc exit",
        next
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
