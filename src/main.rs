use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;
use quiz_session::{AppError, Catalog, Difficulty, QuizRunner, format_clock, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz catalog from (built-in quizzes if omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Open the quiz with this id directly
    #[arg(long, conflicts_with = "topic")]
    quiz: Option<String>,

    /// Draw a quiz for this topic (requires --difficulty)
    #[arg(long, requires = "difficulty")]
    topic: Option<String>,

    /// Difficulty of the drawn quiz: beginner, intermediate or advanced
    #[arg(long, requires = "topic")]
    difficulty: Option<Difficulty>,

    /// Number of questions to draw with --topic
    #[arg(long, default_value_t = 5)]
    questions: usize,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info", value_parser = logging::parse_level)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    logging::init(args.log_file.as_deref(), args.log_level)?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json(path)?,
        None => Catalog::builtin()?,
    };

    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }

    let opened = match (&args.quiz, &args.topic, args.difficulty) {
        (Some(id), _, _) => Some(Arc::clone(catalog.find(id)?)),
        (None, Some(topic), Some(difficulty)) => {
            let drawn = catalog.draw(topic, difficulty, args.questions, &mut rand::thread_rng())?;
            log::info!("drew quiz {} with {} questions", drawn.id, drawn.len());
            Some(Arc::new(drawn))
        }
        _ => None,
    };

    let mut runner = QuizRunner::new(catalog);
    if let Some(quiz) = opened {
        runner.open(quiz)?;
    }
    runner.run().await
}

fn print_catalog(catalog: &Catalog) {
    println!("Topics: {}", catalog.topics().join(", "));
    for quiz in catalog.quizzes() {
        println!(
            "{:>4}  {}  [{} · {} · {} questions · {}]",
            quiz.id,
            quiz.title,
            quiz.topic,
            quiz.difficulty,
            quiz.len(),
            format_clock(quiz.time_limit)
        );
    }
}
