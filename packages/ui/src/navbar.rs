use dioxus::prelude::*;
use site::content::{NAV_ITEMS, PROFILE};
use site::{MenuState, Motion, Stagger};

use crate::icons::{FaBars, FaDownload, FaXmark};
use crate::{Icon, Reveal, ThemeToggle};

/// Fixed top bar with section links, resume download and the mobile menu.
#[component]
pub fn Navbar() -> Element {
    let mut menu = use_signal(MenuState::default);
    let links = Stagger::new(0.0, 0.1);

    rsx! {
        nav {
            class: "fixed top-0 left-0 right-0 z-50 bg-background-light/90 dark:bg-background-dark/90 backdrop-blur-sm border-b border-gray-100 dark:border-neutral-800",
            Reveal {
                motion: Motion::fade_up(-100.0).duration(0.6).on_mount(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8 py-4 md:py-6 flex items-center justify-between",
                    Brand {}

                    div {
                        class: "hidden md:flex items-center gap-6 lg:gap-8 font-medium text-gray-600 dark:text-gray-300",
                        for (index, item) in NAV_ITEMS.iter().enumerate() {
                            Reveal {
                                key: "{item.href}",
                                motion: Motion::fade_up(-20.0).duration(0.5).delay(links.delay(index)).on_mount(),
                                a {
                                    class: "inline-block hover:text-primary dark:hover:text-white hover:-translate-y-0.5 transition-all text-sm lg:text-base",
                                    href: item.href,
                                    "{item.label}"
                                }
                            }
                        }
                    }

                    div {
                        class: "flex items-center gap-2 md:gap-4",
                        ThemeToggle {}

                        // Mobile: icon-only resume link and menu button
                        a {
                            class: "md:hidden bg-primary text-white px-3 py-2 rounded-md font-semibold flex items-center gap-1 hover:bg-gray-800 dark:bg-white dark:text-black dark:hover:bg-gray-200 transition-all text-sm",
                            href: PROFILE.resume_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "Download resume",
                            Icon { icon: FaDownload, width: 16, height: 16 }
                        }
                        button {
                            class: "md:hidden p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors",
                            "aria-label": menu().button_label(),
                            "aria-expanded": menu().open,
                            onclick: move |_| menu.write().toggle(),
                            if menu().open {
                                Icon { icon: FaXmark, width: 24, height: 24, class: "text-gray-700 dark:text-gray-300" }
                            } else {
                                Icon { icon: FaBars, width: 24, height: 24, class: "text-gray-700 dark:text-gray-300" }
                            }
                        }

                        Reveal {
                            class: "hidden md:block",
                            motion: Motion::slide_x(100.0).duration(0.6).delay(0.3).on_mount(),
                            a {
                                class: "flex bg-primary text-white px-4 py-2 md:px-5 md:py-3 rounded-md font-semibold items-center gap-2 hover:bg-gray-800 dark:bg-white dark:text-black dark:hover:bg-gray-200 transition-all shadow-lg hover:shadow-xl hover:-translate-y-0.5 text-sm md:text-base",
                                href: PROFILE.resume_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { "Resume" }
                                Icon { icon: FaDownload, width: 18, height: 18 }
                            }
                        }
                    }
                }
            }

            if menu().open {
                div {
                    class: "md:hidden bg-background-light/95 dark:bg-background-dark/95 backdrop-blur-sm border-t border-gray-100 dark:border-neutral-800 menu-drawer",
                    div {
                        class: "max-w-7xl mx-auto px-4 py-4 space-y-4",
                        for (index, item) in NAV_ITEMS.iter().enumerate() {
                            Reveal {
                                key: "{item.href}",
                                motion: Motion::slide_x(-20.0).duration(0.3).delay(links.delay(index)).on_mount(),
                                a {
                                    href: item.href,
                                    class: "block py-2 text-gray-700 dark:text-gray-300 hover:text-primary dark:hover:text-white hover:translate-x-2 transition-all font-medium",
                                    onclick: move |_| menu.write().close(),
                                    "{item.label}"
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
fn Brand() -> Element {
    rsx! {
        a {
            class: "flex items-center gap-2 group hover:scale-105 transition-transform",
            href: "#",
            BrandMark {}
            span { class: "font-bold text-xl tracking-wide dark:text-white", "{PROFILE.name}" }
        }
    }
}

/// Four-point star in a leaf-shaped tile; shared with the footer.
#[component]
pub(crate) fn BrandMark() -> Element {
    rsx! {
        div {
            class: "w-8 h-8 bg-primary dark:bg-white text-white dark:text-black rounded-tr-xl rounded-bl-xl flex items-center justify-center font-bold text-xl transition-transform group-hover:scale-110",
            svg {
                view_box: "0 0 24 24",
                class: "w-5 h-5",
                fill: "currentColor",
                path { d: "M12 2L13.09 8.26L20 9L13.09 15.74L12 22L10.91 15.74L4 9L10.91 8.26L12 2Z" }
            }
        }
    }
}
