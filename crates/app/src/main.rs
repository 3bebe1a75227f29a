use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mentor_core::model::{AppSettings, AppSettingsDraft, AppSettingsError};
use mentor_core::rank_by_score;
use services::{AssessmentLoopService, ChatService, Clock};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidAnswers { raw: String },
    MissingAnswers,
    EmptyQuestion,
    Settings(AppSettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidAnswers { raw } => {
                write!(f, "invalid --answers value: {raw} (expected e.g. 0,1,2,3,0)")
            }
            ArgsError::MissingAnswers => write!(f, "assess requires --answers"),
            ArgsError::EmptyQuestion => write!(f, "ask requires a question"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<AppSettingsError> for ArgsError {
    fn from(err: AppSettingsError) -> Self {
        ArgsError::Settings(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_millis(raw: &str, flag: &'static str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

struct DesktopApp {
    settings: AppSettings,
    assessment_loop: Arc<AssessmentLoopService>,
    chat_service: Arc<ChatService>,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> AppSettings {
        self.settings
    }

    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--result-delay-ms <ms>] [--reply-delay-ms <ms>]");
    eprintln!("  cargo run -p app -- assess --answers 0,1,2,3,0 [--ranked]");
    eprintln!("  cargo run -p app -- ask    <question...>");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --result-delay-ms {}", AppSettings::DEFAULT_RESULT_DELAY_MS);
    eprintln!("  --reply-delay-ms {}", AppSettings::DEFAULT_REPLY_DELAY_MS);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MENTOR_RESULT_DELAY_MS, MENTOR_REPLY_DELAY_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Assess,
    Ask,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "assess" => Some(Self::Assess),
            "ask" => Some(Self::Ask),
            _ => None,
        }
    }
}

const RESULT_DELAY_ENV: &str = "MENTOR_RESULT_DELAY_MS";
const REPLY_DELAY_ENV: &str = "MENTOR_REPLY_DELAY_MS";

/// Delay overrides from `MENTOR_*` variables.
fn settings_draft_from_env() -> Result<AppSettingsDraft, ArgsError> {
    settings_draft_from_vars(|name| std::env::var(name).ok())
}

fn settings_draft_from_vars(
    lookup: impl Fn(&'static str) -> Option<String>,
) -> Result<AppSettingsDraft, ArgsError> {
    let read = |name: &'static str| {
        lookup(name)
            .map(|value| parse_millis(&value, name))
            .transpose()
    };
    Ok(AppSettingsDraft {
        result_delay_ms: read(RESULT_DELAY_ENV)?,
        reply_delay_ms: read(REPLY_DELAY_ENV)?,
    })
}

#[derive(Debug, PartialEq, Eq)]
struct UiArgs {
    settings: AppSettings,
}

impl UiArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        mut draft: AppSettingsDraft,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--result-delay-ms" => {
                    let value = require_value(args, "--result-delay-ms")?;
                    draft.result_delay_ms = Some(parse_millis(&value, "--result-delay-ms")?);
                }
                "--reply-delay-ms" => {
                    let value = require_value(args, "--reply-delay-ms")?;
                    draft.reply_delay_ms = Some(parse_millis(&value, "--reply-delay-ms")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            settings: draft.validate()?,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
struct AssessArgs {
    answers: Vec<usize>,
    ranked: bool,
}

impl AssessArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut answers = None;
        let mut ranked = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--answers" => {
                    let value = require_value(args, "--answers")?;
                    answers = Some(parse_answers(&value)?);
                }
                "--ranked" => ranked = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            answers: answers.ok_or(ArgsError::MissingAnswers)?,
            ranked,
        })
    }
}

fn parse_answers(raw: &str) -> Result<Vec<usize>, ArgsError> {
    raw.split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ArgsError::InvalidAnswers {
            raw: raw.to_string(),
        })
}

fn parse_question(args: impl Iterator<Item = String>) -> Result<String, ArgsError> {
    let question = args.collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        return Err(ArgsError::EmptyQuestion);
    }
    Ok(question)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }
    let mut iter = argv.into_iter();

    match cmd {
        Command::Ui => {
            let parsed = settings_draft_from_env()
                .and_then(|draft| UiArgs::parse(&mut iter, draft))
                .map_err(|e| {
                    eprintln!("{e}");
                    print_usage();
                    e
                })?;
            launch_desktop(parsed.settings);
            Ok(())
        }
        Command::Assess => {
            let parsed = AssessArgs::parse(&mut iter)?;
            let assessment_loop = AssessmentLoopService::new(&AppSettings::instant());
            let mut results = assessment_loop.run_to_completion(&parsed.answers).await?;
            if parsed.ranked {
                results = rank_by_score(&results);
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Command::Ask => {
            let question = parse_question(iter)?;
            let chat = ChatService::new(Clock::default_clock(), &AppSettings::instant());
            let mut thread = chat.start_thread();
            let pending = chat.submit(&mut thread, &question)?;
            let reply = chat.compose_reply(pending).await;
            let message = chat.deliver(&mut thread, reply)?;
            println!("{}", message.content());
            Ok(())
        }
    }
}

fn launch_desktop(settings: AppSettings) {
    tracing::info!(
        result_delay = ?settings.result_delay(),
        reply_delay = ?settings.reply_delay(),
        "launching desktop ui"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        assessment_loop: Arc::new(AssessmentLoopService::new(&settings)),
        chat_service: Arc::new(ChatService::new(Clock::default_clock(), &settings)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("AI 360 Career Mentor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(values: &[&str]) -> std::vec::IntoIter<String> {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn ui_flags_override_env_draft() {
        let draft = AppSettingsDraft {
            result_delay_ms: Some(10),
            reply_delay_ms: Some(20),
        };
        let parsed = UiArgs::parse(&mut args(&["--reply-delay-ms", "5"]), draft).unwrap();
        assert_eq!(parsed.settings.result_delay(), Duration::from_millis(10));
        assert_eq!(parsed.settings.reply_delay(), Duration::from_millis(5));
    }

    #[test]
    fn env_draft_reads_delays_and_rejects_typos() {
        let draft = settings_draft_from_vars(|name| match name {
            RESULT_DELAY_ENV => Some(" 250 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(draft.result_delay_ms, Some(250));
        assert_eq!(draft.reply_delay_ms, None);

        let err = settings_draft_from_vars(|name| match name {
            REPLY_DELAY_ENV => Some("15OO".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ArgsError::InvalidNumber { flag: REPLY_DELAY_ENV, ref raw } if raw == "15OO"
        ));
    }

    #[test]
    fn ui_rejects_oversized_delay() {
        let err = UiArgs::parse(
            &mut args(&["--result-delay-ms", "600000"]),
            AppSettingsDraft::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ArgsError::Settings(_)));
    }

    #[test]
    fn assess_parses_answers_and_rank_flag() {
        let parsed = AssessArgs::parse(&mut args(&["--answers", "0, 1,2,3,0", "--ranked"])).unwrap();
        assert_eq!(parsed.answers, vec![0, 1, 2, 3, 0]);
        assert!(parsed.ranked);
    }

    #[test]
    fn assess_requires_numeric_answers() {
        let err = AssessArgs::parse(&mut args(&["--answers", "0,x"])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidAnswers { .. }));
        assert!(matches!(
            AssessArgs::parse(&mut args(&[])).unwrap_err(),
            ArgsError::MissingAnswers
        ));
    }

    #[test]
    fn ask_joins_words() {
        assert_eq!(
            parse_question(args(&["Recommend", "learning", "resources"])).unwrap(),
            "Recommend learning resources"
        );
        assert!(matches!(
            parse_question(args(&["  "])).unwrap_err(),
            ArgsError::EmptyQuestion
        ));
    }
}
