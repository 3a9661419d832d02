use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use readiness_core::scoring::{
    DEFAULT_THRESHOLDS, DEFAULT_WEIGHTS, ScoringError, ScoringPolicy, SectionWeights,
    TierThresholds,
};
use services::{Catalog, ResultsService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidWeights { raw: String },
    InvalidThresholds { raw: String },
    Policy(ScoringError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidWeights { raw } => {
                write!(f, "invalid weights {raw:?}, expected three numbers like 0.3,0.3,0.4")
            }
            ArgsError::InvalidThresholds { raw } => {
                write!(f, "invalid thresholds {raw:?}, expected two integers like 80,65")
            }
            ArgsError::Policy(err) => write!(f, "invalid scoring policy: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ScoringError> for ArgsError {
    fn from(err: ScoringError) -> Self {
        Self::Policy(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Catalog,
    results: Arc<ResultsService>,
    skip_landing: bool,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn skip_landing(&self) -> bool {
        self.skip_landing
    }

    fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}

#[derive(Debug)]
struct Args {
    skip_landing: bool,
    policy: ScoringPolicy,
}

#[derive(Debug)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui [--skip-landing] [--weights <p,t,w>] [--thresholds <pursue,consider>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --weights 0.3,0.3,0.4");
    eprintln!("  --thresholds 80,65");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  READINESS_SKIP_LANDING, READINESS_WEIGHTS, READINESS_THRESHOLDS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            _ => None,
        }
    }
}

fn parse_weights(raw: &str) -> Result<SectionWeights, ArgsError> {
    let invalid = || ArgsError::InvalidWeights {
        raw: raw.to_string(),
    };
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        [psychometric, technical, wiscar] => Ok(SectionWeights {
            psychometric: *psychometric,
            technical: *technical,
            wiscar: *wiscar,
        }),
        _ => Err(invalid()),
    }
}

fn parse_thresholds(raw: &str) -> Result<TierThresholds, ArgsError> {
    let invalid = || ArgsError::InvalidThresholds {
        raw: raw.to_string(),
    };
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        [pursue, consider] => Ok(TierThresholds {
            pursue: *pursue,
            consider: *consider,
        }),
        _ => Err(invalid()),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "yes" | "on")
}

impl Args {
    fn parse_ui(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut skip_landing = env("READINESS_SKIP_LANDING").is_some_and(|v| parse_flag(&v));
        let mut weights = env("READINESS_WEIGHTS")
            .map(|raw| parse_weights(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_WEIGHTS);
        let mut thresholds = env("READINESS_THRESHOLDS")
            .map(|raw| parse_thresholds(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_THRESHOLDS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--skip-landing" => skip_landing = true,
                "--weights" => {
                    let value = require_value(args, "--weights")?;
                    weights = parse_weights(&value)?;
                }
                "--thresholds" => {
                    let value = require_value(args, "--thresholds")?;
                    thresholds = parse_thresholds(&value)?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let policy = ScoringPolicy::try_new(weights, thresholds)?;
        Ok(Parsed::Run(Self {
            skip_landing,
            policy,
        }))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
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
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter, |key| std::env::var(key).ok()),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let parsed = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    log::info!(
        "starting assessment ui (weights={:?}, thresholds={:?}, skip_landing={})",
        parsed.policy.weights(),
        parsed.policy.thresholds(),
        parsed.skip_landing
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog: Catalog::standard(),
        results: Arc::new(ResultsService::new(parsed.policy)),
        skip_landing: parsed.skip_landing,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Legal UX Assessment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
