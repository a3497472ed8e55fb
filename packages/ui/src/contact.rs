use dioxus::prelude::*;
use site::content::PROFILE;
use site::{ContactError, ContactField, ContactForm, Ease, Motion};

use crate::icons::{FaEnvelope, FaPaperPlane, FaPhone};
use crate::{use_config, Icon, NetworkGlyph, Reveal};

const PITCH: &str = "I'm passionate about creating robust, scalable web applications using modern technologies. \
Let's collaborate to bring your ideas to life with clean, efficient code.";

const FIELD_CLASS: &str = "w-full bg-card-light dark:bg-slate-800 border-2 border-gray-300 dark:border-slate-600 rounded-lg px-5 py-4 outline-none focus:ring-2 focus:ring-neutral-900 dark:focus:ring-white focus:border-transparent transition-all placeholder-gray-400 dark:placeholder-gray-500 text-sm";

#[component]
pub fn Contact() -> Element {
    let config = use_config();
    let mut form = use_signal(ContactForm::default);
    let mut error = use_signal(|| None::<ContactError>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(message) => {
                tracing::info!(
                    name = %message.name,
                    email = %message.email,
                    website = ?message.website,
                    message = %message.message,
                    "contact form submitted"
                );
                error.set(None);
            }
            Err(e) => {
                tracing::warn!("contact form rejected: {e}");
                error.set(Some(e));
            }
        }
    };

    rsx! {
        section {
            id: "contact",
            class: "bg-background-light dark:bg-background-dark py-16 md:py-24",
            Reveal {
                motion: config.reveal.section_motion(),
                div {
                    class: "max-w-7xl mx-auto px-4 md:px-8",
                    div {
                        class: "grid grid-cols-1 lg:grid-cols-2 gap-16 lg:gap-24",
                        Reveal {
                            motion: Motion::slide_x(-50.0).duration(1.0).ease(Ease::Power2Out),
                            form {
                                class: "space-y-5",
                                onsubmit: submit,
                                for (index, field) in ContactField::ALL.into_iter().enumerate() {
                                    Reveal {
                                        key: "{field}",
                                        class: "relative",
                                        motion: Motion::fade_up(20.0).duration(0.6).delay(0.1).stagger(index, 0.1),
                                        FieldInput {
                                            field,
                                            value: form.read().get(field).to_string(),
                                            oninput: move |value: String| form.write().set(field, value),
                                        }
                                    }
                                }

                                if let Some(e) = error() {
                                    p {
                                        class: "text-sm font-medium text-red-600 dark:text-red-400",
                                        role: "alert",
                                        "{e}"
                                    }
                                }

                                Reveal {
                                    class: "flex flex-col sm:flex-row items-start sm:items-center gap-4 pt-2",
                                    motion: Motion::fade_up(20.0).duration(0.6).delay(0.5),
                                    button {
                                        class: "bg-black text-white font-semibold px-8 py-4 rounded-lg hover:bg-gray-800 hover:scale-105 hover:-translate-y-0.5 active:scale-95 transition-all text-sm tracking-wide flex items-center gap-2",
                                        r#type: "submit",
                                        Icon { icon: FaPaperPlane, width: 16, height: 16 }
                                        "Get In Touch"
                                    }
                                    div {
                                        class: "flex gap-3",
                                        for (index, social) in PROFILE.socials.iter().enumerate() {
                                            Reveal {
                                                key: "{social.href}",
                                                motion: Motion::pop(0.0).duration(0.4).delay(0.6).stagger(index, 0.1),
                                                a {
                                                    class: "w-12 h-12 flex items-center justify-center bg-black text-white rounded-lg hover:bg-gray-800 hover:scale-110 hover:-translate-y-0.5 transition-all",
                                                    href: social.href,
                                                    target: "_blank",
                                                    rel: "noopener noreferrer",
                                                    "aria-label": social.network.label(),
                                                    NetworkGlyph { network: social.network }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        Reveal {
                            class: "flex flex-col justify-center",
                            motion: Motion::slide_x(50.0).duration(1.0).ease(Ease::Power2Out),
                            Reveal {
                                motion: Motion::fade_up(30.0).duration(0.8).delay(0.2),
                                h2 {
                                    class: "text-4xl sm:text-5xl lg:text-6xl font-display font-extrabold leading-tight mb-8 text-neutral-900 dark:text-white",
                                    "Let's "
                                    span { class: "text-outline", "talk" }
                                    " for"
                                    br {}
                                    "Something special"
                                }
                            }
                            Reveal {
                                motion: Motion::fade_up(20.0).duration(0.8).delay(0.4),
                                p { class: "text-gray-500 dark:text-gray-400 mb-10 text-base leading-relaxed max-w-lg", "{PITCH}" }
                            }
                            Reveal {
                                class: "space-y-3",
                                motion: Motion::fade_up(20.0).duration(0.8).delay(0.6),
                                a {
                                    class: "flex items-center gap-3 text-2xl font-bold font-display text-neutral-900 dark:text-white hover:text-gray-600 dark:hover:text-gray-300 hover:translate-x-2 transition-all",
                                    href: PROFILE.mailto(),
                                    Icon { icon: FaEnvelope, width: 20, height: 20 }
                                    "{PROFILE.email}"
                                }
                                a {
                                    class: "flex items-center gap-3 text-2xl font-bold font-display text-neutral-900 dark:text-white hover:text-gray-600 dark:hover:text-gray-300 hover:translate-x-2 transition-all",
                                    href: PROFILE.tel(),
                                    Icon { icon: FaPhone, width: 20, height: 20 }
                                    "{PROFILE.phone}"
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
fn FieldInput(field: ContactField, value: String, oninput: EventHandler<String>) -> Element {
    if field == ContactField::Message {
        return rsx! {
            textarea {
                name: field.key(),
                class: "{FIELD_CLASS} resize-none",
                placeholder: field.placeholder(),
                rows: 5,
                required: true,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        };
    }

    rsx! {
        input {
            name: field.key(),
            class: FIELD_CLASS,
            placeholder: field.placeholder(),
            r#type: if field == ContactField::Email { "email" } else { "text" },
            required: field.required(),
            value: "{value}",
            oninput: move |evt| oninput.call(evt.value()),
        }
    }
}
