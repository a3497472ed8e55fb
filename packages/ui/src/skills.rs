use dioxus::prelude::*;
use site::content::SKILLS;
use site::{Ease, Motion, Pose, Skill};

use crate::{use_config, Reveal, SkillGlyph};

/// Marks a card's own reveal so only it drives the proficiency bar.
const SKILL_REVEAL_CLASS: &str = "skill-reveal";

#[component]
pub fn Skills() -> Element {
    let config = use_config();

    rsx! {
        section {
            id: "skills",
            class: "w-full bg-background-light dark:bg-background-dark py-16 md:py-24",
            Reveal {
                motion: config.reveal.section_motion(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8",
                    Reveal {
                        class: "text-center mb-16",
                        motion: Motion::fade_up(50.0).duration(0.8),
                        h2 {
                            class: "text-4xl md:text-5xl lg:text-6xl tracking-tight",
                            span { class: "font-light text-gray-800 dark:text-gray-200", "My" }
                            " "
                            span { class: "font-extrabold text-black dark:text-white", "Skills" }
                        }
                    }
                    div {
                        class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4 md:gap-8",
                        for (index, skill) in SKILLS.iter().enumerate() {
                            SkillCard { key: "{skill.title}", skill: *skill, index }
                        }
                    }
                }
            }
        }
    }
}

/// One skill tile. Reveals with a staggered 3D-ish pop and keeps its icon bobbing.
#[component]
pub fn SkillCard(skill: Skill, index: usize) -> Element {
    let motion = Motion::default()
        .from_pose(Pose {
            y: 80.0,
            scale: 0.8,
            opacity: 0.0,
            ..Pose::REST
        })
        .duration(1.0)
        .ease(Ease::BackOut)
        .in_view(0.85)
        .reversible()
        .stagger(index, 0.15);

    let palette = if skill.filled {
        "bg-black dark:bg-white text-white dark:text-black hover:bg-white hover:text-black dark:hover:bg-black dark:hover:text-white"
    } else {
        "bg-white dark:bg-card-dark hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black"
    };
    let bob_delay = format!("animation-delay: {:.1}s;", index as f32 * 0.3);
    let fill_delay = format!("transition-delay: {:.1}s;", index as f32 * 0.1);

    rsx! {
        Reveal {
            class: "{SKILL_REVEAL_CLASS}",
            motion,
            div {
                class: "group relative flex flex-col items-center justify-center p-6 md:p-8 border-2 border-black dark:border-white rounded-lg cursor-default transition-all duration-500 overflow-hidden hover:scale-105 hover:-translate-y-2 {palette}",
                div { class: "absolute inset-0 bg-gradient-to-br from-blue-500/10 via-purple-500/10 to-pink-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500" }
                div { class: "absolute inset-0 rounded-lg bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 opacity-0 group-hover:opacity-30 transition-opacity duration-500 blur-sm" }
                div {
                    class: "absolute inset-0 pointer-events-none",
                    for i in 0..5u32 {
                        div {
                            key: "{i}",
                            class: "absolute w-1 h-1 bg-white rounded-full opacity-0 group-hover:opacity-80 animate-sparkle",
                            style: format!(
                                "left: {}%; top: {}%; animation-delay: {:.1}s;",
                                15 + i * 20,
                                10 + i * 15,
                                i as f32 * 0.4
                            ),
                        }
                    }
                }
                div {
                    class: "relative z-10 mb-3 md:mb-4 animate-bob",
                    style: "{bob_delay}",
                    div {
                        class: "group-hover:scale-125 transition-transform duration-300",
                        SkillGlyph { icon: skill.icon }
                    }
                }
                h3 { class: "relative z-10 font-bold text-base md:text-lg text-center", "{skill.title}" }
                div {
                    class: "relative z-10 w-full mt-3 bg-gray-300 dark:bg-gray-600 rounded-full h-1 overflow-hidden opacity-0 group-hover:opacity-100 transition-opacity duration-500",
                    div {
                        class: "h-full bg-gradient-to-r from-blue-500 to-purple-500 rounded-full proficiency-bar",
                        style: "{fill_delay}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTFOLIO_CSS_SOURCE: &str = include_str!("../assets/styling/portfolio.css");

    #[test]
    fn test_proficiency_bar_follows_own_card() {
        let scoped = format!(".{SKILL_REVEAL_CLASS}[data-reveal=\"shown\"] .proficiency-bar");
        assert!(PORTFOLIO_CSS_SOURCE.contains(&scoped));
        // No rule may fill the bar from an arbitrary revealed ancestor
        assert!(!PORTFOLIO_CSS_SOURCE
            .lines()
            .any(|line| line.trim_start().starts_with("[data-reveal=\"shown\"] .proficiency-bar")));
    }
}
