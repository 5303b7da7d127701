use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::format_clock;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_quiz_list(frame, chunks[1], app);
    render_notice(frame, chunks[2], app.notice());
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZ CATALOG",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Pick a quiz to see its details".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_quiz_list(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .catalog()
        .quizzes()
        .iter()
        .enumerate()
        .flat_map(|(index, quiz)| {
            let is_selected = index == app.catalog_cursor();
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            [
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled(quiz.title.clone(), style),
                ]),
                Line::from(Span::styled(
                    format!(
                        "   {} · {} · {} questions · {}",
                        quiz.topic,
                        quiz.difficulty,
                        quiz.len(),
                        format_clock(quiz.time_limit)
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ]
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Green);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter open  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
