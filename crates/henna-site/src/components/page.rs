//! Main page: header, content sections and footer.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::motion::Motion;
use crate::state::{observer_script, ObserverReport, PageState, Section};

use super::{
    AboutSection, ContactSection, GallerySection, Header, HeroSection, ServicesSection,
    SiteFooter,
};

/// The landing page once the splash screen is gone.
#[component]
pub fn Page(config: SiteConfig, motion: Motion) -> Element {
    let mut page = use_signal(PageState::new);

    // Watch sections for their first viewport intersection
    use_effect(move || {
        spawn(async move {
            let mut observer = document::eval(&observer_script());
            while let Ok(message) = observer.recv::<String>().await {
                let report = page.write().handle_report(&message);
                match report {
                    Some(ObserverReport::Intersected(section)) => {
                        tracing::debug!("Section revealed: {}", section.id());
                    }
                    Some(ObserverReport::Missing(section)) => {
                        tracing::warn!(
                            "Section #{} not found by the observer, revealing it now",
                            section.id()
                        );
                    }
                    None => {}
                }
            }

            let remaining = page.write().reveal_remaining();
            if !remaining.is_empty() {
                tracing::warn!(
                    "Intersection observer channel closed with {} sections unrevealed, revealing them",
                    remaining.len()
                );
            } else {
                tracing::debug!("Intersection observer channel closed");
            }
        });
    });

    let state = page.read();
    let revealed = |section: Section| state.is_revealed(section);
    let fade = motion.page_fade.animation_style("fade-in");

    rsx! {
        div {
            class: "page",
            style: fade,

            Header {
                logo_path: config.logo_path.clone(),
                page,
            }

            main {
                HeroSection { motion, revealed: revealed(Section::Home) }
                AboutSection { motion, revealed: revealed(Section::About) }
                ServicesSection { motion, revealed: revealed(Section::Services) }
                GallerySection { motion, revealed: revealed(Section::Gallery) }
                ContactSection {
                    config: config.clone(),
                    motion,
                    revealed: revealed(Section::Contact),
                }
            }

            SiteFooter {}
        }
    }
}

/// Smoothly scrolls the webview to the element with the given id.
pub(crate) fn scroll_to_anchor(anchor: &str) {
    let js = format!(
        "document.getElementById('{}')?.scrollIntoView({{behavior:'smooth'}})",
        anchor
    );
    document::eval(&js);
}
