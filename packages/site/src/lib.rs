pub mod config;
pub mod contact;
pub mod content;
pub mod models;
pub mod motion;
pub mod nav;
pub mod showcase;
pub mod theme;

pub use config::PortfolioConfig;
pub use contact::{ContactError, ContactField, ContactForm, ContactMessage};
pub use models::{
    Experience, ExperienceProject, Image, NavItem, Network, Profile, Project, RepoLinks, Skill,
    SkillIcon, SocialLink, Testimonial, TestimonialIcon,
};
pub use motion::{Ease, Float, Motion, Pose, Stagger, Transition, Trigger};
pub use nav::MenuState;
pub use showcase::Showcase;
pub use theme::ThemePreference;
