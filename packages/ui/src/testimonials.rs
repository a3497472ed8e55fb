use dioxus::prelude::*;
use site::content::TESTIMONIALS;
use site::{Ease, Motion, Pose, Testimonial};

use crate::icons::FaQuoteLeft;
use crate::{use_config, Icon, Reveal, TestimonialGlyph};

#[component]
pub fn Testimonials() -> Element {
    let config = use_config();

    rsx! {
        section {
            id: "testimonials",
            class: "bg-background-light dark:bg-background-dark py-16 md:py-24",
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
                            span { class: "font-extrabold text-black dark:text-white", "Philosophy" }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6 lg:gap-8 items-stretch md:items-center",
                        for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                            PhilosophyCard { key: "{testimonial.id}", testimonial: *testimonial, index }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PhilosophyCard(testimonial: Testimonial, index: usize) -> Element {
    let featured = testimonial.featured;
    let card = if featured {
        "bg-black text-white md:scale-105 z-10 shadow-2xl"
    } else {
        "bg-white dark:bg-gray-800 hover:shadow-lg border border-gray-100 dark:border-gray-700"
    };
    let tile = if featured {
        "bg-black text-white"
    } else {
        "bg-white dark:bg-gray-800 text-black dark:text-white border-2 border-gray-200 dark:border-gray-700"
    };
    let badge = if featured {
        "bg-white text-black"
    } else {
        "bg-black text-white"
    };
    let (quote, name, role) = if featured {
        ("text-gray-300", "text-white", "text-gray-400")
    } else {
        (
            "text-gray-600 dark:text-gray-400",
            "text-gray-900 dark:text-white",
            "text-gray-500 dark:text-gray-500",
        )
    };
    let step = 0.2;

    rsx! {
        Reveal {
            class: "h-full",
            motion: Motion::fade_up(50.0).duration(0.6).in_view(0.95).stagger(index, step),
            article {
                class: "h-full p-8 rounded-2xl transition-all duration-300 text-center flex flex-col items-center hover:-translate-y-1 {card}",
                div {
                    class: "relative mb-6",
                    Reveal {
                        motion: Motion::default()
                            .from_pose(Pose { scale: 0.0, rotate: -180.0, ..Pose::REST })
                            .duration(0.8)
                            .ease(Ease::Spring)
                            .stagger(index, step),
                        div {
                            class: "w-24 h-24 rounded-tr-xl rounded-bl-xl flex items-center justify-center transition-all duration-300 hover:scale-110 hover:rotate-6 {tile}",
                            div {
                                class: "animate-sway",
                                TestimonialGlyph { icon: testimonial.icon }
                            }
                        }
                    }
                    Reveal {
                        class: "absolute bottom-0 right-0",
                        motion: Motion::pop(0.0).delay(0.5).stagger(index, step),
                        div {
                            class: "rounded-full p-1 w-8 h-8 flex items-center justify-center transition-transform duration-500 hover:scale-125 hover:rotate-[360deg] {badge}",
                            Icon { icon: FaQuoteLeft, width: 12, height: 12 }
                        }
                    }
                }
                p { class: "text-sm leading-relaxed mb-6 font-medium {quote}", "{testimonial.quote}" }
                div {
                    class: "mt-auto",
                    h3 { class: "font-display font-bold text-lg {name}", "{testimonial.name}" }
                    p { class: "text-sm font-medium mt-1 {role}", "{testimonial.role}" }
                }
            }
        }
    }
}
