//! This crate contains all portfolio UI components.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

mod glyphs;
pub use glyphs::{NetworkGlyph, SkillGlyph, TestimonialGlyph};

mod config;
pub use config::use_config;

mod reveal;
pub use reveal::Reveal;

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal, ThemeToggle};

mod layout;
pub use layout::Layout;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod skills;
pub use skills::{SkillCard, Skills};

mod experience;
pub use experience::Experience;

mod about;
pub use about::About;

mod projects;
pub use projects::Projects;

mod testimonials;
pub use testimonials::Testimonials;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;

mod portfolio;
pub use portfolio::Portfolio;
