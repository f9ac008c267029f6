//! Page footer.

use dioxus::prelude::*;

use crate::config::PLACEHOLDER_HREF;
use crate::content::{FOOTER_COPYRIGHT, FOOTER_LINKS, FOOTER_TAGLINE};

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "site-footer",

            p { class: "footer-copyright", "{FOOTER_COPYRIGHT}" }
            p { class: "footer-tagline", "{FOOTER_TAGLINE}" }

            div {
                class: "footer-links",
                for label in FOOTER_LINKS {
                    a { key: "{label}", href: PLACEHOLDER_HREF, "{label}" }
                }
            }
        }
    }
}
