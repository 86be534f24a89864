use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use vowel_core::model::{ModeParseError, QuestionMode};
use vowel_core::{Dataset, HighlightResolver};

const SEED_ENV: &str = "VOWEL_QUIZ_SEED";
const MODE_ENV: &str = "VOWEL_QUIZ_MODE";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidMode(ModeParseError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidMode(err) => write!(f, "invalid --mode value: {err}"),
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
    dataset: Arc<Dataset>,
    highlighter: Arc<HighlightResolver>,
    seed: Option<u64>,
    mode: QuestionMode,
    show_examples: bool,
}

impl UiApp for DesktopApp {
    fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    fn highlighter(&self) -> Arc<HighlightResolver> {
        Arc::clone(&self.highlighter)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn initial_mode(&self) -> QuestionMode {
        self.mode
    }

    fn show_examples_on_launch(&self) -> bool {
        self.show_examples
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    mode: QuestionMode,
    show_examples: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--mode <name-to-symbol|symbol-to-name>] [--show-examples]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  random order, --mode name-to-symbol, examples hidden");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SEED_ENV}, {MODE_ENV}, RUST_LOG");
}

impl Args {
    /// Parse flags, falling back to `env` for values not given on the command line.
    /// Unparseable environment values are ignored.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: env(SEED_ENV).and_then(|value| value.trim().parse::<u64>().ok()),
            mode: env(MODE_ENV)
                .and_then(|value| value.parse::<QuestionMode>().ok())
                .unwrap_or_default(),
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed = value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    parsed.mode = value.parse().map_err(ArgsError::InvalidMode)?;
                }
                "--show-examples" => parsed.show_examples = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args, |key| std::env::var(key).ok()).inspect_err(|_| {
        print_usage();
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let dataset = Arc::new(Dataset::builtin());
    tracing::info!(
        entries = dataset.len(),
        seed = ?parsed.seed,
        mode = %parsed.mode,
        show_examples = parsed.show_examples,
        "starting vowel quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        dataset,
        highlighter: Arc::new(HighlightResolver::builtin()),
        seed: parsed.seed,
        mode: parsed.mode,
        show_examples: parsed.show_examples,
    });
    let context = build_app_context(&app);

    // tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("IPA Vowel Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
