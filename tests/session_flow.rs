use std::sync::{Arc, Mutex};
use std::time::Duration;

use quiz_session::{
    Catalog, Countdown, Difficulty, MalformedQuiz, Phase, Question, QuestionId, Quiz, QuizSession,
    Score, SessionError,
};

fn quiz_with_answers(correct: &[usize], time_limit: u32) -> Quiz {
    Quiz {
        id: "flow".to_string(),
        title: "Flow".to_string(),
        topic: "testing".to_string(),
        difficulty: Difficulty::Intermediate,
        time_limit,
        questions: correct
            .iter()
            .enumerate()
            .map(|(i, &answer)| Question {
                id: QuestionId(i as u32 + 1),
                prompt: format!("q{}", i + 1),
                options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
                correct_answer: answer,
                explanation: format!("because {}", answer),
            })
            .collect(),
    }
}

#[test]
fn test_score_is_independent_of_navigation_order() {
    let correct = [2, 0, 3, 1, 1];
    let answers = [(QuestionId(5), 1), (QuestionId(1), 2), (QuestionId(3), 0), (QuestionId(2), 0)];

    let mut in_order = QuizSession::new(quiz_with_answers(&correct, 60)).unwrap();
    in_order.start().unwrap();
    for (question, option) in answers {
        in_order.select_answer(question, option).unwrap();
    }
    in_order.submit().unwrap();

    let mut walking = QuizSession::new(quiz_with_answers(&correct, 60)).unwrap();
    walking.start().unwrap();
    for _ in 0..4 {
        walking.advance().unwrap();
    }
    for (question, option) in answers.iter().rev() {
        walking.retreat().unwrap();
        walking.select_answer(*question, *option).unwrap();
    }
    walking.submit().unwrap();

    let expected = Score { correct: 3, total: 5 };
    assert_eq!(in_order.score(), Ok(expected));
    assert_eq!(walking.score(), Ok(expected));
    assert_eq!(in_order.final_score(), Some(expected));
}

#[test]
fn test_time_limit_ticks_submit_with_recorded_answers() {
    let mut session = QuizSession::new(quiz_with_answers(&[0, 1, 0], 300)).unwrap();
    session.start().unwrap();
    session.select_answer(QuestionId(1), 0).unwrap();

    for _ in 0..300 {
        session.tick().unwrap();
    }

    assert_eq!(session.phase(), Phase::Submitted);
    assert_eq!(session.remaining_seconds(), 0);
    assert_eq!(session.score(), Ok(Score { correct: 1, total: 3 }));
}

#[test]
fn test_documented_scenario_scores_two_of_three() {
    let mut session = QuizSession::new(quiz_with_answers(&[0, 1, 0], 300)).unwrap();
    session.start().unwrap();
    session.select_answer(QuestionId(1), 0).unwrap();
    session.select_answer(QuestionId(2), 1).unwrap();
    session.select_answer(QuestionId(3), 1).unwrap();
    session.submit().unwrap();

    let score = session.score().unwrap();
    assert_eq!((score.correct, score.total), (2, 3));
    assert_eq!(score.percentage(), 67);
}

#[test]
fn test_answering_before_start_is_a_precondition_violation() {
    let mut session = QuizSession::new(quiz_with_answers(&[0, 1, 0], 300)).unwrap();
    let result = session.select_answer(QuestionId(1), 0);

    assert!(matches!(result, Err(SessionError::WrongPhase { phase: Phase::NotStarted, .. })));
    assert_eq!(session.phase(), Phase::NotStarted);
    assert_eq!(session.answer_for(QuestionId(1)), None);
    assert_eq!(session.remaining_seconds(), 300);
}

#[test]
fn test_out_of_bounds_correct_answer_is_rejected_at_construction() {
    let mut quiz = quiz_with_answers(&[0, 1], 300);
    quiz.questions[1].correct_answer = 5;

    assert_eq!(
        QuizSession::new(quiz).unwrap_err(),
        MalformedQuiz::CorrectAnswerOutOfRange {
            question: QuestionId(2),
            index: 5,
            options: 4,
        }
    );
}

#[test]
fn test_completion_sink_receives_the_final_score() {
    let received = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&received);

    let catalog = Catalog::builtin().unwrap();
    let quiz = Arc::clone(catalog.find("2").unwrap());
    let mut session = QuizSession::new(quiz)
        .unwrap()
        .with_sink(move |score: Score| *slot.lock().unwrap() = Some(score));

    session.start().unwrap();
    session.select_option(1).unwrap();
    session.advance().unwrap();
    session.select_option(0).unwrap();
    session.advance().unwrap();

    assert_eq!(*received.lock().unwrap(), Some(Score { correct: 1, total: 2 }));
}

#[tokio::test(start_paused = true)]
async fn test_countdown_drives_a_session_to_submission() {
    let mut session = QuizSession::new(quiz_with_answers(&[1, 1], 3)).unwrap();
    session.start().unwrap();
    session.select_answer(QuestionId(2), 1).unwrap();

    let (countdown, mut ticks) = Countdown::start(Duration::from_secs(1));
    while session.is_running() {
        ticks.recv().await.unwrap();
        session.tick().unwrap();
    }
    countdown.stop();

    assert_eq!(session.elapsed_seconds(), 3);
    assert_eq!(session.score(), Ok(Score { correct: 1, total: 2 }));
    assert_eq!(ticks.recv().await, None);
}
