//! Light/dark theme handling.
//!
//! The preference lives in a [`ThemeSignal`] provided by the launcher and is
//! mirrored to `localStorage`. Applying a theme toggles the `dark` class on the
//! document root, which the `dark:` utility classes key off.

use dioxus::prelude::*;
use site::ThemePreference;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<ThemePreference>;

/// Read the stored preference, apply it and publish it to `theme`.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let mut theme = *theme;
    let js = format!(
        "dioxus.send(window.localStorage ? (localStorage.getItem(\"{key}\") || \"\") : \"\");",
        key = ThemePreference::STORAGE_KEY,
    );
    spawn(async move {
        let mut eval = document::eval(&js);
        match eval.recv::<String>().await {
            Ok(stored) => {
                let stored = (!stored.is_empty()).then_some(stored.as_str());
                let preference = ThemePreference::from_storage(stored);
                apply_theme(preference);
                theme.set(preference);
            }
            Err(e) => {
                tracing::debug!("theme storage unavailable: {e}");
                apply_theme(ThemePreference::System);
            }
        }
    });
}

/// Persist `preference` and update the `dark` class on `<html>`.
pub fn apply_theme(preference: ThemePreference) {
    let key = ThemePreference::STORAGE_KEY;
    let store = match preference.as_storage() {
        Some(value) => format!("localStorage.setItem(\"{key}\", \"{value}\");"),
        None => format!("localStorage.removeItem(\"{key}\");"),
    };
    let dark = match preference {
        ThemePreference::Dark => "true".to_string(),
        ThemePreference::Light => "false".to_string(),
        ThemePreference::System => {
            "window.matchMedia('(prefers-color-scheme: dark)').matches".to_string()
        }
    };
    let js = format!(
        r#"(function() {{
            try {{ {store} }} catch (e) {{}}
            document.documentElement.classList.toggle('dark', {dark});
        }})();"#
    );
    document::eval(&js);
}

/// Button cycling System -> Light -> Dark.
#[component]
pub fn ThemeToggle(#[props(default)] class: String) -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let current = theme();

    rsx! {
        button {
            class: "p-2 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors {class}",
            title: current.label(),
            "aria-label": current.label(),
            onclick: move |_| {
                let next = theme().next();
                apply_theme(next);
                theme.set(next);
            },
            {match current {
                ThemePreference::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 18, height: 18 } },
                ThemePreference::Light => rsx! { Icon { icon: FaSun, width: 18, height: 18 } },
                ThemePreference::Dark => rsx! { Icon { icon: FaMoon, width: 18, height: 18 } },
            }}
        }
    }
}
