//! Content sections of the landing page.
//!
//! Each section takes the motion presets and its reveal latch as props and
//! renders only static content.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::{
    gallery_entries, SocialPlatform, ABOUT_PARAGRAPHS, ABOUT_TITLE, CALL_HREF, CALL_LABEL,
    CONTACT_TAGLINE, CONTACT_TITLE, FEATURES, GALLERY_OVERLAY, GALLERY_TITLE, HERO_BACKGROUND, HERO_CTA,
    HERO_TAGLINE, HERO_TITLE, SERVICES, SERVICES_TITLE,
};
use crate::motion::Motion;

use super::scroll_to_anchor;

/// Hero banner with the call-to-action into the services list.
#[component]
pub fn HeroSection(motion: Motion, revealed: bool) -> Element {
    let fade = motion.fade_in_up;
    let title_style = fade.transition_style(revealed, 0);
    let tagline_style = fade.transition_style(revealed, 200);
    let cta_style = fade.transition_style(revealed, 400);

    rsx! {
        section {
            id: "home",
            class: "hero",
            style: "background-image: url('{HERO_BACKGROUND}');",

            div { class: "hero-overlay" }

            div {
                class: "hero-content",

                h1 { class: "hero-title", style: title_style, "{HERO_TITLE}" }
                p { class: "hero-tagline", style: tagline_style, "{HERO_TAGLINE}" }

                div {
                    style: cta_style,
                    a {
                        class: "button button-primary",
                        href: "#services",
                        onclick: move |evt| {
                            evt.prevent_default();
                            scroll_to_anchor("services");
                        },
                        "{HERO_CTA}"
                    }
                }
            }
        }
    }
}

/// About block with the three feature callouts.
#[component]
pub fn AboutSection(motion: Motion, revealed: bool) -> Element {
    let fade = motion.fade_in_up;
    let stagger = motion.stagger;
    let feature_offset = ABOUT_PARAGRAPHS.len();

    rsx! {
        section {
            id: "about",
            class: "section section-light",

            div {
                class: "section-inner narrow",

                h2 { class: "section-title", "{ABOUT_TITLE}" }

                div {
                    class: "about-copy",
                    for (i, paragraph) in ABOUT_PARAGRAPHS.iter().enumerate() {
                        p {
                            key: "{i}",
                            style: fade.transition_style(revealed, stagger.delay_for(i)),
                            "{paragraph}"
                        }
                    }
                }

                div {
                    class: "feature-row",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        div {
                            key: "{feature.title}",
                            class: "feature",
                            style: fade.transition_style(revealed, stagger.delay_for(feature_offset + i)),
                            div {
                                class: "feature-card",
                                span { class: "icon", "{feature.icon.glyph()}" }
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-description", "{feature.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Grid of fixed-price service listings.
#[component]
pub fn ServicesSection(motion: Motion, revealed: bool) -> Element {
    let fade = motion.fade_in_up;
    let stagger = motion.stagger;

    rsx! {
        section {
            id: "services",
            class: "section section-cream",

            div {
                class: "section-inner",

                h2 { class: "section-title", "{SERVICES_TITLE}" }

                div {
                    class: "services-grid",
                    for (i, service) in SERVICES.iter().enumerate() {
                        div {
                            key: "{service.name}",
                            class: "service-card",
                            style: fade.transition_style(revealed, stagger.delay_for(i)),
                            span { class: "icon", "{service.icon.glyph()}" }
                            h3 { class: "service-name", "{service.name}" }
                            p { class: "service-price", "{service.price}" }
                            p { class: "service-description", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder image gallery with a hover overlay.
#[component]
pub fn GallerySection(motion: Motion, revealed: bool) -> Element {
    let fade = motion.fade_in_up;
    let stagger = motion.stagger;
    let entries = gallery_entries();

    rsx! {
        section {
            id: "gallery",
            class: "section section-light",

            div {
                class: "section-inner",

                h2 { class: "section-title", "{GALLERY_TITLE}" }

                div {
                    class: "gallery-grid",
                    for (i, entry) in entries.iter().enumerate() {
                        figure {
                            key: "{entry.number}",
                            class: "gallery-item",
                            style: fade.transition_style(revealed, stagger.delay_for(i)),
                            img {
                                src: "{entry.src}",
                                alt: "{entry.label}",
                                width: "400",
                                height: "400",
                                loading: "lazy",
                            }
                            figcaption {
                                class: "gallery-overlay",
                                "{GALLERY_OVERLAY}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Booking call-to-action with the phone link and social links.
#[component]
pub fn ContactSection(config: SiteConfig, motion: Motion, revealed: bool) -> Element {
    let fade = motion.fade_in_up;
    let stagger = motion.stagger;

    rsx! {
        section {
            id: "contact",
            class: "section section-cream",

            div {
                class: "section-inner narrow",

                h2 { class: "section-title", "{CONTACT_TITLE}" }
                p { class: "contact-tagline", "{CONTACT_TAGLINE}" }

                a {
                    class: "button button-primary call-link",
                    href: CALL_HREF,
                    "{CALL_LABEL}"
                }

                div {
                    class: "social-row",
                    for (i, platform) in SocialPlatform::ALL.into_iter().enumerate() {
                        a {
                            key: "{platform.label()}",
                            class: "social-link",
                            href: "{config.social.href(platform)}",
                            style: fade.transition_style(revealed, stagger.delay_for(i)),
                            span { class: "sr-only", "{platform.label()}" }
                            span { class: "social-badge", "aria-hidden": "true", "{platform.badge()}" }
                        }
                    }
                }
            }
        }
    }
}
