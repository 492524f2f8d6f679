use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use services::{
    DEFAULT_BASE, Location, MemoryLocation, ViewerOptions, load_deck_from_path, sample_deck,
};
use slides_core::location::set_page;
use slides_core::model::Deck;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPage { raw: String },
    InvalidUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPage { raw } => {
                write!(f, "invalid --page value: {raw} (expected a number from 1)")
            }
            ArgsError::InvalidUrl { raw } => write!(f, "invalid --url value: {raw}"),
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
    deck: Arc<Deck>,
    options: ViewerOptions,
    start: MemoryLocation,
}

impl UiApp for DesktopApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn options(&self) -> ViewerOptions {
        self.options
    }

    fn location(&self) -> Box<dyn Location> {
        Box::new(self.start.clone())
    }
}

#[derive(Debug)]
struct Args {
    deck_path: Option<PathBuf>,
    page: Option<usize>,
    url: Option<String>,
    simple: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--deck <path.json>] [--page <n>] [--url <location>] [--simple]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --deck  built-in sample deck");
    eprintln!("  --page  1");
    eprintln!("  --url   {DEFAULT_BASE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SLIDES_DECK, SLIDES_PAGE, SLIDES_SIMPLE, RUST_LOG");
}

/// Raw `SLIDES_*` values; flags on the command line override them.
#[derive(Debug, Default)]
struct EnvDefaults {
    deck: Option<String>,
    page: Option<String>,
    simple: Option<String>,
}

impl EnvDefaults {
    fn from_process() -> Self {
        Self {
            deck: std::env::var("SLIDES_DECK").ok(),
            page: std::env::var("SLIDES_PAGE").ok(),
            simple: std::env::var("SLIDES_SIMPLE").ok(),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}

fn parse_page(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ArgsError::InvalidPage { raw }),
    }
}

impl Args {
    fn parse(
        env: EnvDefaults,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut deck_path = env.deck.map(PathBuf::from);
        let mut page = env.page.map(parse_page).transpose()?;
        let mut url = None;
        let mut simple = env.simple.as_deref().is_some_and(is_truthy);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--deck" => deck_path = Some(PathBuf::from(require_value(args, "--deck")?)),
                "--page" => page = Some(parse_page(require_value(args, "--page")?)?),
                "--url" => url = Some(require_value(args, "--url")?),
                "--simple" => simple = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            deck_path,
            page,
            url,
            simple,
        })
    }

    fn options(&self) -> ViewerOptions {
        if self.simple {
            ViewerOptions::simple()
        } else {
            ViewerOptions::default()
        }
    }

    /// The location a new viewer starts from. `--page` wins over a page
    /// carried by `--url`.
    fn start_location(&self) -> Result<MemoryLocation, ArgsError> {
        let mut location = match self.url.as_deref() {
            Some(raw) => MemoryLocation::parse(raw).map_err(|_| ArgsError::InvalidUrl {
                raw: raw.to_string(),
            })?,
            None => MemoryLocation::default(),
        };
        if let Some(page) = self.page {
            let mut url = location.current();
            set_page(&mut url, page - 1);
            location = MemoryLocation::new(url);
        }
        Ok(location)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(EnvDefaults::from_process(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let deck = match parsed.deck_path.as_deref() {
        Some(path) => load_deck_from_path(path)?,
        None => sample_deck()?,
    };
    let start = parsed.start_location()?;
    let options = parsed.options();
    info!(
        "opening \"{}\" at {start_url} ({options:?})",
        deck.title(),
        start_url = start.current()
    );

    let title = deck.title().to_string();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        deck: Arc::new(deck),
        options,
        start,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window on macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with(env: EnvDefaults, args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(env, &mut iter)
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_with(EnvDefaults::default(), args)
    }

    #[test]
    fn page_flag_overrides_url_page() {
        let args = parse(&["--url", "?page=4&lang=en", "--page", "2"]).expect("args parse");
        let url = args.start_location().expect("location").current();
        assert_eq!(url.query(), Some("page=2&lang=en"));
    }

    #[test]
    fn rejects_page_zero_and_missing_values() {
        assert!(matches!(
            parse(&["--page", "0"]),
            Err(ArgsError::InvalidPage { .. })
        ));
        assert!(matches!(
            parse(&["--deck"]),
            Err(ArgsError::MissingValue { flag: "--deck" })
        ));
        assert!(matches!(
            parse(&["--fullscreen"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn simple_flag_disables_persistence_and_keys() {
        let args = parse(&["--simple"]).expect("args parse");
        assert_eq!(args.options(), ViewerOptions::simple());
    }

    #[test]
    fn env_values_apply_until_flags_override_them() {
        let env = EnvDefaults {
            deck: Some("talk.json".into()),
            page: Some("3".into()),
            simple: Some("yes".into()),
        };
        let args = parse_with(env, &["--page", "1"]).expect("args parse");
        assert_eq!(args.deck_path, Some(PathBuf::from("talk.json")));
        assert_eq!(args.page, Some(1));
        assert!(args.simple);
    }

    #[test]
    fn bad_env_page_is_reported() {
        let env = EnvDefaults {
            page: Some("three".into()),
            ..EnvDefaults::default()
        };
        assert!(matches!(
            parse_with(env, &[]),
            Err(ArgsError::InvalidPage { .. })
        ));
    }
}
