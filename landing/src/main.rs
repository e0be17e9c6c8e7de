// Archivedesign.ai Landing Page, Leptos 0.8 client-side build

mod console;

use archivedesign_site::SiteConfig;
use archivedesign_site::components::{LandingPage, LandingStyles};
use leptos::prelude::*;
use tracing_subscriber::filter::LevelFilter;

/// Embedded at build time; edit `landing/site.toml` to change it.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let config = load_config();
    init_logging(&config);
    tracing::info!(base_url = %config.base_url, "mounting landing page");

    leptos::mount::mount_to_body(move || {
        view! {
            <LandingStyles />
            <LandingPage config=config />
        }
    });
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            console::warn(&format!("[landing][warn] {e}; using defaults"));
            SiteConfig::default()
        }
    }
}

fn init_logging(config: &SiteConfig) {
    let level = config
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    let result = tracing_subscriber::fmt()
        .with_writer(console::MakeConsoleWriter)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        console::warn(&format!("[landing][warn] logger not installed: {e}"));
    }
}
