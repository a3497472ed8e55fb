use dioxus::prelude::*;
use site::content::PROFILE;
use site::Motion;

use crate::{use_config, Reveal};

#[component]
pub fn About() -> Element {
    let config = use_config();

    rsx! {
        section {
            id: "about",
            class: "w-full bg-background-light dark:bg-background-dark py-16 md:py-24 border-t border-gray-100 dark:border-neutral-800",
            Reveal {
                motion: config.reveal.section_motion(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8",
                    div {
                        class: "flex flex-col lg:flex-row items-center lg:items-start gap-12 lg:gap-20",
                        Reveal {
                            class: "w-full max-w-md lg:w-1/2 flex justify-center lg:justify-end",
                            motion: Motion::slide_x(-50.0).duration(1.0),
                            div {
                                class: "relative w-full aspect-square max-w-[400px]",
                                div { class: "absolute inset-0 border-2 border-gray-200 dark:border-neutral-700 rounded-lg -translate-x-4 -translate-y-4 z-0" }
                                div {
                                    class: "relative z-10 w-full h-full bg-gray-50 dark:bg-neutral-800 rounded-lg overflow-hidden",
                                    img {
                                        src: PROFILE.portrait.src,
                                        alt: PROFILE.portrait.alt,
                                        class: "w-full h-full object-cover",
                                        loading: "lazy",
                                    }
                                }
                            }
                        }

                        div {
                            class: "w-full lg:w-1/2 text-left",
                            Reveal {
                                motion: Motion::fade_up(50.0).duration(0.8),
                                h2 {
                                    class: "text-4xl md:text-5xl font-bold mb-8 text-gray-400 dark:text-gray-500",
                                    "About "
                                    span { class: "text-gray-900 dark:text-white font-extrabold", "Me" }
                                }
                            }
                            Reveal {
                                class: "space-y-6 text-gray-600 dark:text-gray-300 leading-relaxed font-light text-lg",
                                motion: Motion::fade_up(50.0).duration(0.8).delay(0.2),
                                for paragraph in PROFILE.biography {
                                    p { key: "{paragraph}", "{paragraph}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
