//! Sticky header with desktop navigation and the mobile drawer.

use dioxus::prelude::*;

use crate::content::{NavItem, NAV_ITEMS};
use crate::state::PageState;

use super::scroll_to_anchor;

/// Site header. The drawer state lives in the page signal.
#[component]
pub fn Header(logo_path: String, mut page: Signal<PageState>) -> Element {
    let drawer_open = page.read().drawer.is_open();

    rsx! {
        header {
            class: "site-header",

            div {
                class: "header-inner",

                a {
                    class: "header-logo",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_anchor("home");
                    },
                    img {
                        src: "{logo_path}",
                        alt: "Faria's Henna Art Logo",
                        width: "100",
                        height: "100",
                    }
                }

                nav {
                    class: "desktop-nav",
                    ul {
                        class: "nav-list",
                        for item in NAV_ITEMS {
                            li {
                                key: "{item.anchor}",
                                NavLink { item, class: "nav-link".to_string() }
                            }
                        }
                    }
                }

                button {
                    class: "menu-button",
                    "aria-expanded": "{drawer_open}",
                    onclick: move |_| {
                        let open = page.write().drawer.toggle();
                        tracing::debug!("Mobile navigation {}", if open { "opened" } else { "closed" });
                    },
                    span { class: "menu-icon", "\u{2630}" }
                    span { class: "sr-only", "Open menu" }
                }
            }

            if drawer_open {
                MobileNav { page }
            }
        }
    }
}

/// Overlay drawer listing the same anchors as the desktop bar.
#[component]
fn MobileNav(mut page: Signal<PageState>) -> Element {
    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| page.write().drawer.close(),
        }

        aside {
            class: "drawer",
            role: "dialog",
            "aria-label": "Navigation",

            button {
                class: "drawer-close",
                onclick: move |_| page.write().drawer.close(),
                span { "\u{2715}" }
                span { class: "sr-only", "Close menu" }
            }

            nav {
                class: "drawer-nav",
                for item in NAV_ITEMS {
                    NavLink {
                        key: "{item.anchor}",
                        item,
                        class: "drawer-link".to_string(),
                        on_follow: move |_| page.write().drawer.close(),
                    }
                }
            }
        }
    }
}

/// Fragment link that scrolls smoothly instead of jumping.
#[component]
fn NavLink(item: NavItem, class: String, on_follow: Option<EventHandler<()>>) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: item.href(),
            onclick: move |evt| {
                evt.prevent_default();
                scroll_to_anchor(item.anchor);
                if let Some(handler) = on_follow {
                    handler.call(());
                }
            },
            "{item.label}"
        }
    }
}
