//! Theme support for the landing page.

use dioxus::prelude::*;

/// `data-theme` value selecting the palette in `styles.css`.
pub const THEME_NAME: &str = "henna";

/// Root component that applies the page palette.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": THEME_NAME,
            {children}
        }
    }
}
