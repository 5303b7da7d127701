use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{QuestionStatus, ReviewRow, Score};

use super::format_clock;

const QUESTION_PREVIEW_LENGTH: usize = 60;
const LINES_PER_QUESTION: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let (Ok(score), Some(review)) = (session.score(), session.review()) else {
        return;
    };
    let grade_color = get_grade_color(score.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(
        frame,
        chunks[0],
        score,
        session.elapsed_seconds(),
        app.notice(),
        grade_color,
    );
    render_question_breakdown(frame, chunks[1], &review, app.result_scroll());
    render_controls(frame, chunks[2]);
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: Score,
    elapsed: u32,
    notice: Option<&str>,
    grade_color: Color,
) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", score.correct, score.total, score.percentage()),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(format!("time taken {}", format_clock(elapsed)).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(notice.unwrap_or_default().fg(Color::Green)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, review: &[ReviewRow<'_>], scroll: usize) {
    let lines: Vec<Line> = review.iter().flat_map(review_lines).collect();
    let offset = u16::try_from(scroll * LINES_PER_QUESTION).unwrap_or(u16::MAX);

    // Unwrapped, so each question spans exactly LINES_PER_QUESTION rows.
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn review_lines<'a>(row: &ReviewRow<'a>) -> [Line<'a>; LINES_PER_QUESTION] {
    let question = row.question;
    let (symbol, color) = match row.status {
        QuestionStatus::Correct => ("+", Color::Green),
        QuestionStatus::Unanswered => ("?", Color::Yellow),
        _ => ("-", Color::Red),
    };

    let chosen = match row.chosen.and_then(|i| question.options.get(i)) {
        Some(option) if row.is_correct() => Span::styled(option.as_str(), Style::default().fg(Color::Green)),
        Some(option) => Span::styled(option.as_str(), Style::default().fg(Color::Red)),
        None => Span::styled("not answered", Style::default().fg(Color::Yellow)),
    };

    [
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", row.number),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate_question(&question.prompt), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("     your answer: ", Style::default().fg(Color::DarkGray)),
            chosen,
        ]),
        Line::from(vec![
            Span::styled("     correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                question.correct_option().unwrap_or_default(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", question.explanation),
            Style::default().fg(Color::Gray).italic(),
        )),
        Line::from(""),
    ]
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  c continue learning  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
