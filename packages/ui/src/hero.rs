use dioxus::prelude::*;
use site::content::PROFILE;
use site::motion::letters;
use site::{Ease, Float, Motion, Pose, Stagger};

use crate::icons::{FaBolt, FaCode, FaWandMagicSparkles};
use crate::{Icon, NetworkGlyph, Reveal};

/// Corner positions of the decorative background icons.
const FLOATING_SPOTS: [&str; 4] = [
    "top-20 left-20",
    "top-40 right-20",
    "bottom-40 left-10",
    "bottom-20 right-40",
];

#[component]
pub fn Hero() -> Element {
    let items = Stagger::new(0.2, 0.15);
    let item = |index: usize| {
        Motion::fade_up(60.0)
            .duration(0.8)
            .delay(items.delay(index))
            .on_mount()
    };
    let (strong_title, outlined_title) = PROFILE.title;

    rsx! {
        section {
            class: "bg-background-light dark:bg-background-dark min-h-screen flex items-center pt-20 relative overflow-hidden",

            // Animated background
            div {
                class: "absolute inset-0 pointer-events-none",
                for (index, spot) in FLOATING_SPOTS.iter().enumerate() {
                    div {
                        key: "{spot}",
                        class: "absolute {spot} opacity-10 dark:opacity-20 text-blue-500",
                        style: Float::scattered(index).style(),
                        {match index % 3 {
                            0 => rsx! { Icon { icon: FaCode, width: 32, height: 32 } },
                            1 => rsx! { Icon { icon: FaWandMagicSparkles, width: 32, height: 32 } },
                            _ => rsx! { Icon { icon: FaBolt, width: 32, height: 32 } },
                        }}
                    }
                }
                div { class: "absolute top-1/4 left-1/4 w-64 h-64 bg-gradient-to-r from-blue-400 to-purple-600 rounded-full opacity-20 blur-3xl animate-orbit" }
                div { class: "absolute bottom-1/4 right-1/4 w-48 h-48 bg-gradient-to-r from-pink-400 to-yellow-600 rounded-full opacity-20 blur-3xl animate-orbit-reverse" }
            }

            header {
                id: "hero",
                class: "max-w-7xl mx-auto px-4 md:px-8 py-12 md:py-20 flex flex-col md:flex-row items-center justify-between gap-8 md:gap-12 w-full relative z-10",

                div {
                    class: "w-full md:w-1/2 space-y-6 md:space-y-8",
                    div {
                        class: "space-y-2 md:space-y-4",
                        Reveal {
                            motion: item(0),
                            h1 {
                                class: "text-2xl md:text-3xl lg:text-4xl xl:text-5xl leading-tight font-display",
                                "{PROFILE.greeting} "
                                AnimatedName { name: PROFILE.name }
                            }
                        }
                        Reveal {
                            motion: item(1),
                            h2 {
                                class: "text-2xl md:text-3xl lg:text-4xl xl:text-5xl font-bold leading-tight font-display",
                                span { class: "font-extrabold inline-block hover:scale-105 transition-transform", "{strong_title}" }
                                " "
                                span { class: "text-outline", "{outlined_title}" }
                            }
                        }
                        Reveal {
                            motion: item(2),
                            h3 {
                                class: "text-2xl md:text-3xl lg:text-4xl xl:text-5xl font-bold leading-tight font-display",
                                "Based In "
                                span {
                                    class: "font-extrabold relative inline-block hover:scale-105 transition-transform",
                                    "{PROFILE.location}"
                                    span { class: "absolute -bottom-1 left-0 right-0 h-1 bg-gradient-to-r from-green-500 to-red-500 rounded-full underline-grow" }
                                }
                                "."
                            }
                        }
                    }

                    Reveal {
                        motion: item(3),
                        p {
                            class: "text-gray-600 dark:text-gray-400 max-w-lg leading-relaxed text-sm md:text-base",
                            "{PROFILE.tagline}"
                        }
                    }

                    Reveal {
                        motion: item(4),
                        div {
                            class: "flex items-center gap-3 pt-4",
                            for (index, social) in PROFILE.socials.iter().enumerate() {
                                Reveal {
                                    key: "{social.href}",
                                    motion: Motion::fade_up(50.0)
                                        .rotate(-180.0)
                                        .duration(0.6)
                                        .ease(Ease::Spring)
                                        .delay(Stagger::new(3.2, 0.1).delay(index))
                                        .on_mount(),
                                    a {
                                        class: if index == 0 {
                                            "w-10 h-10 md:w-12 md:h-12 flex items-center justify-center rounded border-2 border-black dark:border-white transition-all hover:scale-110 hover:-translate-y-1 bg-black dark:bg-white text-white dark:text-black"
                                        } else {
                                            "w-10 h-10 md:w-12 md:h-12 flex items-center justify-center rounded border-2 border-black dark:border-white transition-all hover:scale-110 hover:-translate-y-1 bg-transparent hover:bg-black hover:text-white dark:hover:bg-white dark:hover:text-black"
                                        },
                                        href: social.href,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "aria-label": social.network.label(),
                                        span {
                                            class: if index == 0 { "animate-spin-slow" } else { "" },
                                            NetworkGlyph { network: social.network, size: 18 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "w-full md:w-1/2 flex justify-center relative",
                    div { class: "absolute bottom-0 w-3/4 h-1 bg-black dark:bg-white rounded-full underline-grow" }
                    Reveal {
                        class: "w-full max-w-sm md:max-w-md h-auto relative",
                        motion: Motion::default()
                            .from_pose(Pose { scale: 0.5, rotate: -10.0, opacity: 0.0, ..Pose::REST })
                            .duration(1.2)
                            .delay(0.8)
                            .ease(Ease::Spring)
                            .on_mount(),
                        div {
                            class: "relative w-full aspect-square rounded-full overflow-hidden p-1 animate-gradient hover:scale-105 hover:rotate-2 transition-transform",
                            div {
                                class: "w-full h-full rounded-full overflow-hidden",
                                img {
                                    src: PROFILE.banner.src,
                                    alt: PROFILE.banner.alt,
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                        div {
                            class: "absolute -top-4 -right-4 bg-blue-500 rounded-full p-3 shadow-lg text-white animate-bob",
                            Icon { icon: FaCode, width: 24, height: 24 }
                        }
                        div {
                            class: "absolute -bottom-4 -left-4 bg-purple-500 rounded-full p-3 shadow-lg text-white animate-bob-reverse",
                            Icon { icon: FaWandMagicSparkles, width: 24, height: 24 }
                        }
                        div {
                            class: "absolute top-1/2 -right-8 bg-pink-500 rounded-full p-2 shadow-lg text-white animate-sway",
                            Icon { icon: FaBolt, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}

/// The name, letter by letter, followed by a blinking dot.
#[component]
fn AnimatedName(name: &'static str) -> Element {
    rsx! {
        span {
            class: "font-extrabold block mt-1 md:mt-2 bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent",
            for (index, (letter, delay)) in letters(name, Stagger::new(1.0, 0.1)).into_iter().enumerate() {
                Reveal {
                    key: "{index}",
                    class: "inline-block",
                    motion: Motion::fade_up(50.0).duration(0.5).delay(delay).on_mount(),
                    span {
                        class: "inline-block cursor-pointer hover:scale-125 hover:text-blue-500 transition-transform",
                        "{letter}"
                    }
                }
            }
            span { class: "inline-block ml-1 text-blue-500 animate-blink", "." }
        }
    }
}
