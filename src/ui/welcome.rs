use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const INSTRUCTIONS: [&str; 4] = [
    "Read each question carefully",
    "Select the best answer from the options provided",
    "You can navigate back and forth between questions",
    "Submit your quiz before time runs out",
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let quiz = session.quiz();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.to_uppercase(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("{} · {}", quiz.topic, quiz.difficulty).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Questions ", Style::default().fg(Color::DarkGray)),
            Span::styled(quiz.len().to_string(), Style::default().fg(Color::White).bold()),
            Span::styled("   Time Limit ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}m", quiz.time_limit_minutes()),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled("   Difficulty ", Style::default().fg(Color::DarkGray)),
            Span::styled(quiz.difficulty.as_str(), Style::default().fg(Color::White).bold()),
        ]),
        Line::from(""),
    ];

    content.extend(
        INSTRUCTIONS
            .iter()
            .map(|text| Line::from(format!("• {}", text).fg(Color::Gray))),
    );
    content.extend([
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start  ·  esc back".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
