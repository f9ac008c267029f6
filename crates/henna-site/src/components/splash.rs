//! Branded splash screen shown while the page is held back.

use dioxus::prelude::*;

use crate::content::BUSINESS_NAME;
use crate::motion::SplashMotion;

/// Full-viewport splash with logo, title and a filling progress bar.
#[component]
pub fn SplashScreen(logo_path: String, motion: SplashMotion) -> Element {
    let logo_style = motion.logo.animation_style("pop-in");
    let title_style = motion.title.animation_style("rise-in");
    let bar_style = motion.bar.animation_style("pop-in");
    let fill_style = motion.progress.animation_style("progress-fill");

    rsx! {
        div {
            class: "splash",
            role: "status",
            "aria-label": "Loading",

            div {
                class: "splash-content",

                div {
                    class: "splash-logo",
                    style: logo_style,
                    img {
                        src: "{logo_path}",
                        alt: "Faria's Henna Logo",
                        width: "200",
                        height: "200",
                    }
                }

                h1 {
                    class: "splash-title",
                    style: title_style,
                    "{BUSINESS_NAME}"
                }

                div {
                    class: "splash-progress",
                    style: bar_style,
                    div {
                        class: "splash-progress-fill",
                        style: fill_style,
                    }
                }
            }
        }
    }
}
