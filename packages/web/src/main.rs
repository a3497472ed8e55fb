use dioxus::prelude::*;
use site::{PortfolioConfig, ThemePreference};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Presentation settings, baked in at build time.
const PORTFOLIO_TOML: &str = include_str!("../portfolio.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> PortfolioConfig {
    match PortfolioConfig::from_toml(PORTFOLIO_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "invalid {}, using defaults: {e}",
                PortfolioConfig::filename()
            );
            PortfolioConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    // Theme context: System until the stored preference has been read
    let mut theme: ui::ThemeSignal =
        use_context_provider(|| Signal::new(ThemePreference::default()));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::Portfolio {}
    }
}
