use dioxus::prelude::*;
use site::content::PROFILE;
use site::{Motion, Network};

use crate::icons::FaHeart;
use crate::navbar::BrandMark;
use crate::{Icon, NetworkGlyph, Reveal};

fn hover_colour(network: Network) -> &'static str {
    match network {
        Network::GitHub => "hover:text-gray-400",
        Network::LinkedIn => "hover:text-blue-400",
        Network::Facebook => "hover:text-blue-500",
        Network::Discord => "hover:text-indigo-400",
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "bg-gradient-to-br from-neutral-900 via-slate-900 to-neutral-800 text-white py-12 px-4 md:px-8 mt-auto relative overflow-hidden",
            Reveal {
                motion: Motion::fade_up(50.0).duration(0.8).in_view(1.0),
                div {
                    class: "absolute inset-0 opacity-5 pointer-events-none",
                    div { class: "absolute inset-0 bg-gradient-to-r from-blue-500/10 to-purple-500/10" }
                    div { class: "absolute top-0 left-0 w-full h-full bg-[radial-gradient(circle_at_50%_50%,rgba(120,119,198,0.1),transparent_50%)]" }
                }

                div {
                    class: "max-w-7xl mx-auto relative z-10",
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-8 mb-8",
                        Reveal {
                            class: "space-y-4",
                            motion: Motion::slide_x(-20.0).duration(0.6).delay(0.2).in_view(1.0),
                            div {
                                class: "flex items-center gap-3 group",
                                BrandMark {}
                                span { class: "font-bold font-display tracking-wide text-xl", "{PROFILE.name}" }
                            }
                            p { class: "text-gray-400 text-sm leading-relaxed max-w-sm", "{PROFILE.footer_blurb}" }
                        }

                        Reveal {
                            class: "space-y-4",
                            motion: Motion::slide_x(20.0).duration(0.6).delay(0.3).in_view(1.0),
                            h3 { class: "font-semibold text-lg mb-4", "Follow Me" }
                            div {
                                class: "flex flex-wrap gap-4",
                                for (index, social) in PROFILE.socials.iter().enumerate() {
                                    Reveal {
                                        key: "{social.href}",
                                        motion: Motion::pop(0.0).delay(0.4).stagger(index, 0.1).in_view(1.0),
                                        a {
                                            class: format!(
                                                "block p-3 bg-gray-800 rounded-lg {} transition-all duration-300 hover:bg-gray-700 hover:scale-110 hover:-translate-y-1 hover:shadow-lg group",
                                                hover_colour(social.network)
                                            ),
                                            href: social.href,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "aria-label": social.network.label(),
                                            NetworkGlyph {
                                                network: social.network,
                                                class: "group-hover:scale-110 transition-transform",
                                            }
                                        }
                                    }
                                }
                            }
                            p { class: "text-gray-400 text-sm mt-4", "Let's connect and build something amazing together!" }
                        }
                    }

                    Reveal {
                        class: "border-t border-gray-700 pt-6 flex flex-col md:flex-row justify-between items-center gap-4",
                        motion: Motion::fade().duration(0.6).delay(0.6).in_view(1.0),
                        div {
                            class: "flex items-center gap-2 text-gray-400 text-sm",
                            span { "© {PROFILE.copyright_year} {PROFILE.name}. Made with" }
                            span {
                                class: "inline-flex text-red-500 animate-heartbeat",
                                Icon { icon: FaHeart, width: 16, height: 16 }
                            }
                            span { "in {PROFILE.location}" }
                        }
                        div {
                            class: "text-gray-400 text-sm hover:scale-105 transition-transform",
                            "Built with Rust, Dioxus & Tailwind CSS"
                        }
                    }
                }
            }
        }
    }
}
