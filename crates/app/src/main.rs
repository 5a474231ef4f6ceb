mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tryunfo_core::model::Deck;
use ui::{App, UiApp, build_app_context};

use crate::config::{Command, Config, print_usage};

struct DesktopApp {
    title: String,
    deck: Deck,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn initial_deck(&self) -> Deck {
        self.deck.clone()
    }
}

fn init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Config::load(|key| std::env::var(key).ok(), std::env::args().skip(1))
        .inspect_err(|_| print_usage())?;
    let config = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(config) => config,
    };

    init_tracing(&config.log_filter)?;

    let deck = if config.demo {
        services::demo_deck()?
    } else {
        Deck::new()
    };
    info!(title = %config.title, cards = deck.len(), "starting Tryunfo");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: config.title.clone(),
        deck,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
