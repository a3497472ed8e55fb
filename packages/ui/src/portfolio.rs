use dioxus::prelude::*;

use crate::{
    About, Contact, Experience, Footer, Hero, Layout, Navbar, Projects, Skills, Testimonials,
    PORTFOLIO_CSS,
};

/// The whole single-page site.
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }

        Layout {
            Navbar {}
            main {
                Hero {}
                Skills {}
                Experience {}
                About {}
                Projects {}
                Testimonials {}
                Contact {}
            }
            Footer {}
        }
    }
}
