use dioxus::prelude::*;
use site::PortfolioConfig;

/// The configuration provided by the launcher, or defaults when none was.
pub fn use_config() -> PortfolioConfig {
    use_hook(|| try_consume_context::<PortfolioConfig>().unwrap_or_default())
}
