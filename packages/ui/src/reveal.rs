//! Scroll and mount triggered entrance animations.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use site::{Motion, Trigger};

use crate::use_config;

/// Simple counter for unique element ids
static REVEAL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Script that reports `true` when the element should be shown and, for
/// reversible triggers, `false` when it drops back below the start line.
fn observer_script(element_id: &str, motion: &Motion) -> String {
    match motion.trigger {
        Trigger::Mount => r#"(function() {
                requestAnimationFrame(function() {
                    requestAnimationFrame(function() { dioxus.send(true); });
                });
            })();"#
            .to_string(),
        Trigger::InView { once, .. } => format!(
            r#"(function() {{
                var el = document.getElementById({eid_js});
                if (!el || typeof IntersectionObserver === 'undefined') {{
                    dioxus.send(true);
                    return;
                }}
                var once = {once};
                var observer = new IntersectionObserver(function(entries) {{
                    entries.forEach(function(entry) {{
                        if (entry.isIntersecting) {{
                            dioxus.send(true);
                            if (once) observer.disconnect();
                        }} else if (!once && entry.boundingClientRect.top > 0) {{
                            dioxus.send(false);
                        }}
                    }});
                }}, {{ rootMargin: {margin_js}, threshold: 0 }});
                observer.observe(el);
                window.__revealObservers = window.__revealObservers || {{}};
                window.__revealObservers[{eid_js}] = observer;
            }})();"#,
            eid_js = js_string_escape(element_id),
            margin_js = js_string_escape(&motion.root_margin()),
        ),
    }
}

fn disconnect_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
            var observers = window.__revealObservers;
            if (!observers || !observers[{eid_js}]) return;
            observers[{eid_js}].disconnect();
            delete observers[{eid_js}];
        }})();"#,
        eid_js = js_string_escape(element_id),
    )
}

/// Wraps its children in a `div` that animates from `motion.from` to rest.
///
/// Speed and the global motion switch come from the provided
/// [`site::PortfolioConfig`]. With motion disabled the element renders at rest
/// and no observer is installed.
#[component]
pub fn Reveal(
    motion: Motion,
    #[props(default)] id: Option<String>,
    #[props(default)] class: String,
    /// Extra inline style appended after the animation style.
    #[props(default)]
    style: String,
    children: Element,
) -> Element {
    let config = use_config();
    let enabled = config.motion.enabled;
    let motion = motion.scaled(config.motion.effective_speed());

    let element_id = use_hook(|| {
        id.unwrap_or_else(|| {
            let n = REVEAL_COUNTER.fetch_add(1, Ordering::Relaxed);
            format!("reveal-{n}")
        })
    });
    let mut shown = use_signal(move || !enabled);

    {
        let element_id = element_id.clone();
        use_effect(move || {
            if !enabled {
                return;
            }
            let js = observer_script(&element_id, &motion);
            spawn(async move {
                let mut eval = document::eval(&js);
                loop {
                    match eval.recv::<bool>().await {
                        Ok(visible) => shown.set(visible),
                        Err(e) => {
                            tracing::debug!("reveal observer unavailable: {e}");
                            shown.set(true);
                            break;
                        }
                    }
                }
            });
        });
    }

    // Observers outlive their element unless told otherwise
    {
        let element_id = element_id.clone();
        use_drop(move || {
            if enabled && !motion.trigger.is_mount() {
                document::eval(&disconnect_script(&element_id));
            }
        });
    }

    let animation = if !enabled {
        String::new()
    } else if shown() {
        motion.visible_style()
    } else {
        motion.hidden_style()
    };

    rsx! {
        div {
            id: "{element_id}",
            class: "{class}",
            "data-reveal": if shown() { "shown" } else { "hidden" },
            style: "{animation} {style}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
    }

    #[test]
    fn test_observer_script_embeds_margin_and_once() {
        let motion = Motion::fade_up(50.0).in_view(0.8).reversible();
        let js = observer_script("reveal-7", &motion);
        assert!(js.contains("\"reveal-7\""));
        assert!(js.contains("\"0px 0px -20% 0px\""));
        assert!(js.contains("var once = false;"));
    }

    #[test]
    fn test_mount_script_skips_observer() {
        let js = observer_script("reveal-1", &Motion::fade_up(10.0).on_mount());
        assert!(!js.contains("IntersectionObserver"));
        assert!(js.contains("dioxus.send(true)"));
    }
}
