use dioxus::prelude::*;
use site::content::EXPERIENCES;
use site::Motion;

use crate::{use_config, Reveal};

#[component]
pub fn Experience() -> Element {
    let config = use_config();

    rsx! {
        section {
            id: "experience",
            class: "w-full bg-black py-16 md:py-24",
            Reveal {
                motion: config.reveal.section_motion(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8",
                    Reveal {
                        class: "text-center mb-16",
                        motion: Motion::fade_up(50.0).duration(0.8),
                        h2 {
                            class: "text-4xl md:text-5xl lg:text-6xl tracking-tight",
                            span { class: "font-light text-gray-200", "My" }
                            " "
                            span { class: "font-extrabold text-white", "Experience" }
                        }
                    }

                    Reveal {
                        motion: Motion::fade_up(30.0).duration(0.8).delay(0.2),
                        h3 { class: "text-2xl md:text-3xl font-bold text-white mb-8 text-center", "Professional Experience" }
                    }

                    div {
                        class: "space-y-6",
                        for (index, experience) in EXPERIENCES.iter().enumerate() {
                            ExperienceCard { key: "{experience.role}", experience: *experience, index }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceCard(experience: site::Experience, index: usize) -> Element {
    rsx! {
        Reveal {
            motion: Motion::fade_up(50.0).duration(0.6).in_view(0.95).stagger(index, 0.2),
            article {
                class: "group relative rounded-xl border border-card-border-dark bg-card-dark p-6 transition-all hover:border-neutral-600 hover:shadow-lg hover:scale-[1.02]",
                div {
                    class: "flex flex-col sm:flex-row justify-between items-start sm:items-center mb-4",
                    div {
                        class: "flex items-center gap-4 mb-2 sm:mb-0",
                        div {
                            class: "flex h-10 w-10 shrink-0 items-center justify-center rounded-lg bg-neutral-900 border border-neutral-800",
                            img { alt: experience.logo.alt, class: "h-6 w-6", src: experience.logo.src }
                        }
                        div {
                            h3 { class: "text-xl font-bold text-white", "{experience.role}" }
                            p { class: "text-sm text-neutral-500", "{experience.company}" }
                        }
                    }
                    span { class: "text-sm font-medium text-neutral-400", "{experience.period}" }
                }
                p { class: "text-neutral-400 text-sm leading-relaxed mb-4", "{experience.description}" }

                if !experience.projects.is_empty() {
                    div {
                        class: "mt-6",
                        h4 { class: "text-lg font-semibold text-white mb-4", "Key Project Achievements:" }
                        div {
                            class: "space-y-4",
                            for (project_index, project) in experience.projects.iter().enumerate() {
                                Reveal {
                                    key: "{project.title}",
                                    motion: Motion::fade_up(20.0).duration(0.5).stagger(project_index, 0.1),
                                    div {
                                        class: "bg-gray-800 p-4 rounded-lg border border-gray-700 hover:border-gray-600 hover:scale-[1.01] transition-all",
                                        h5 { class: "text-base font-semibold text-white mb-2", "{project.title}" }
                                        p { class: "text-gray-300 text-sm mb-3 leading-relaxed", "{project.description}" }
                                        div {
                                            class: "text-xs text-blue-400 font-medium bg-blue-900/20 px-2 py-1 rounded inline-block",
                                            "{project.technologies}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(training) = experience.training {
                    Reveal {
                        motion: Motion::fade_up(20.0).duration(0.5).delay(0.6),
                        div {
                            class: "mt-4 p-3 bg-gray-700 rounded-lg border border-gray-600",
                            p {
                                class: "text-gray-300 text-sm",
                                strong { class: "text-white", "Additional Training:" }
                                " {training}"
                            }
                        }
                    }
                }
            }
        }
    }
}
