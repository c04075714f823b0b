use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quiz_core::model::Difficulty;
use services::{Clock, QuizLoopService, TriviaConfig, TriviaService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidDifficulty { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --questions value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (easy|medium|hard)")
            }
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    default_difficulty: Difficulty,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn default_difficulty(&self) -> Difficulty {
        self.default_difficulty
    }
}

struct Args {
    question_count: u32,
    difficulty: Difficulty,
    api_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <n>] [--difficulty <easy|medium|hard>] [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions 10");
    eprintln!("  --difficulty medium");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTION_COUNT, QUIZ_DIFFICULTY, QUIZ_API_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut question_count = std::env::var("QUIZ_QUESTION_COUNT")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|count| *count > 0)
            .unwrap_or(10);
        let mut difficulty = std::env::var("QUIZ_DIFFICULTY")
            .ok()
            .and_then(|value| Difficulty::from_str(&value).ok())
            .unwrap_or_default();
        let mut api_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    let parsed: u32 = value
                        .parse()
                        .ok()
                        .filter(|count| *count > 0)
                        .ok_or(ArgsError::InvalidCount { raw: value.clone() })?;
                    question_count = parsed;
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    difficulty = Difficulty::from_str(&value)
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value.clone() })?;
                }
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            question_count,
            difficulty,
            api_url,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(
        questions = parsed.question_count,
        difficulty = %parsed.difficulty,
        "starting QuizMaster"
    );

    let trivia_config = parsed
        .api_url
        .map(TriviaConfig::with_base_url)
        .unwrap_or_else(TriviaConfig::from_env);
    let source = Arc::new(TriviaService::new(trivia_config));
    let quiz_loop = Arc::new(
        QuizLoopService::new(Clock::default_clock(), source)
            .with_question_count(parsed.question_count),
    );

    let app = DesktopApp {
        quiz_loop,
        default_difficulty: parsed.difficulty,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuizMaster")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
