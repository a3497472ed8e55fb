use dioxus::prelude::*;
use site::content::PROJECTS;
use site::showcase::image_first;
use site::{Motion, Project, Showcase};

use crate::brands::FaGithub;
use crate::icons::{FaArrowUpRightFromSquare, FaChevronDown};
use crate::{use_config, Icon, Reveal};

#[component]
pub fn Projects() -> Element {
    let config = use_config();
    let mut showcase = use_signal(|| Showcase::new(config.projects.initial_visible));
    let state = showcase();
    let label = state.label();
    let chevron = state.chevron_rotation();

    rsx! {
        section {
            id: "projects",
            class: "font-poppins bg-black py-16 md:py-24",
            Reveal {
                motion: config.reveal.section_motion(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8",
                    Reveal {
                        class: "text-center mb-20",
                        motion: Motion::fade_up(50.0).duration(0.8),
                        h2 {
                            class: "text-4xl md:text-5xl lg:text-6xl tracking-tight",
                            span { class: "font-light text-gray-400", "My" }
                            " "
                            span { class: "font-extrabold text-white", "Projects" }
                        }
                    }

                    div {
                        class: "space-y-24 md:space-y-32",
                        for (index, project) in state.visible(PROJECTS).iter().enumerate() {
                            ProjectRow { key: "{project.id}", project: *project, index }
                        }
                    }

                    if state.has_more(PROJECTS.len()) {
                        Reveal {
                            class: "flex justify-center mt-16",
                            motion: Motion::fade_up(20.0).duration(0.6).delay(0.3),
                            button {
                                class: "group flex items-center gap-3 px-8 py-4 bg-white text-black rounded-full font-semibold text-lg hover:bg-gray-200 hover:scale-105 hover:-translate-y-0.5 transition-all duration-300 shadow-lg hover:shadow-xl",
                                "aria-expanded": state.show_all,
                                onclick: move |_| {
                                    showcase.write().toggle();
                                    tracing::debug!(show_all = showcase().show_all, "toggled project showcase");
                                },
                                span { "{label}" }
                                span {
                                    class: "inline-flex transition-transform duration-300",
                                    style: "transform: rotate({chevron}deg);",
                                    Icon { icon: FaChevronDown, width: 20, height: 20 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, index: usize) -> Element {
    let direction = if image_first(index) {
        "md:flex-row"
    } else {
        "md:flex-row-reverse"
    };
    let title_from = if image_first(index) { -30.0 } else { 30.0 };
    let number = project.number();

    rsx! {
        Reveal {
            motion: Motion::fade_up(50.0).duration(0.6).in_view(0.9).stagger(index, 0.1),
            article {
                class: "flex flex-col {direction} items-center gap-10 md:gap-16 group",
                div {
                    class: "w-full md:w-1/2 relative",
                    div {
                        class: "relative rounded-xl overflow-hidden shadow-2xl transition-transform duration-500 hover:-translate-y-2 hover:scale-[1.02]",
                        div { class: "absolute inset-0 bg-gray-200 dark:bg-gray-700 animate-pulse" }
                        img {
                            alt: project.image.alt,
                            class: "relative w-full h-auto object-cover rounded-xl border border-gray-100 dark:border-gray-800",
                            src: project.image.src,
                            loading: "lazy",
                        }
                    }
                }

                div {
                    class: "w-full md:w-1/2 space-y-4 md:space-y-6",
                    Reveal {
                        motion: Motion::pop(0.5).delay(0.2),
                        span { class: "text-5xl md:text-6xl font-bold text-white", "{number}" }
                    }
                    Reveal {
                        motion: Motion::slide_x(title_from).duration(0.6).delay(0.3),
                        h3 { class: "text-2xl md:text-3xl font-bold leading-tight text-white", "{project.title}" }
                    }
                    Reveal {
                        motion: Motion::fade_up(20.0).duration(0.6).delay(0.4),
                        p { class: "text-gray-300 leading-relaxed text-base md:text-lg mb-4", "{project.description}" }
                    }
                    Reveal {
                        class: "mb-4 flex flex-wrap gap-2",
                        motion: Motion::fade_up(20.0).duration(0.6).delay(0.45),
                        for tag in project.tags() {
                            span {
                                key: "{tag}",
                                class: "text-sm text-blue-400 font-medium bg-blue-900/20 px-3 py-1 rounded-full",
                                "{tag}"
                            }
                        }
                    }
                    Reveal {
                        class: "flex flex-wrap items-center gap-4 pt-2",
                        motion: Motion::pop(0.8).duration(0.4).delay(0.5),
                        a {
                            "aria-label": "View Live Demo",
                            class: "inline-flex items-center gap-2 px-4 py-2 bg-white text-black rounded-full font-semibold text-sm hover:bg-gray-200 hover:scale-105 hover:-translate-y-0.5 transition-all duration-200",
                            href: project.link,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                            "Live Demo"
                        }
                        div {
                            class: "flex items-center gap-2",
                            for (label, href) in project.repositories.iter() {
                                a {
                                    key: "{href}",
                                    "aria-label": "View {label} Repository",
                                    class: if label == "GitHub" {
                                        "inline-flex items-center gap-2 px-4 py-2 border border-gray-600 text-white rounded-full font-semibold text-sm hover:bg-gray-800 hover:scale-105 transition-all duration-200"
                                    } else {
                                        "inline-flex items-center gap-2 px-3 py-2 border border-gray-600 text-white rounded-full font-medium text-xs hover:bg-gray-800 hover:scale-105 transition-all duration-200"
                                    },
                                    href: href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Icon { icon: FaGithub, width: 14, height: 14 }
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
