//! Root application component: splash screen first, then the page.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::motion::{Motion, SplashMotion};
use crate::state::{SplashState, SplashTimer};
use crate::theme::ThemedRoot;

use super::{Page, SplashScreen};

/// Root application component.
///
/// Owns the splash flag. The hide timer is cancelled when this component is
/// dropped, so a late expiry never writes into a torn-down scope.
#[component]
pub fn App(config: SiteConfig) -> Element {
    let mut splash = use_signal(SplashState::new);
    let timer = use_hook(|| SplashTimer::new(config.splash_delay()));

    let pending = timer.clone();
    use_hook(move || {
        tracing::debug!("Splash timer armed for {:?}", pending.delay());
        spawn(async move {
            if pending.elapsed().await && splash.write().hide() {
                tracing::info!("Splash screen hidden");
            }
        })
    });

    use_drop(move || {
        if timer.cancel() {
            tracing::debug!("Cancelled pending splash timer");
        }
    });

    let showing = splash.read().is_showing();

    rsx! {
        ThemedRoot {
            if showing {
                SplashScreen {
                    logo_path: config.logo_path.clone(),
                    motion: SplashMotion::default(),
                }
            } else {
                Page {
                    config: config.clone(),
                    motion: Motion::default(),
                }
            }
        }
    }
}
