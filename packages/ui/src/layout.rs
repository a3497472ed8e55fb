use dioxus::prelude::*;

/// Page shell: theme-aware background and text colours.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "bg-background-light dark:bg-background-dark text-neutral-800 dark:text-neutral-200 transition-colors duration-300 font-sans min-h-screen flex flex-col",
            {children}
        }
    }
}
