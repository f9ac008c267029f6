//! Splash screen state and its one-shot hide timer.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Visibility of the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Showing,
    Hidden,
}

/// Splash screen state. `Hidden` is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplashState {
    phase: SplashPhase,
}

impl SplashState {
    /// Creates the state in the `Showing` phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_showing(&self) -> bool {
        self.phase == SplashPhase::Showing
    }

    /// Moves to `Hidden`. Returns whether this call made the transition.
    pub fn hide(&mut self) -> bool {
        match self.phase {
            SplashPhase::Showing => {
                self.phase = SplashPhase::Hidden;
                true
            }
            SplashPhase::Hidden => false,
        }
    }
}

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Fixed-delay timer guarding the splash transition.
///
/// Clones share one outcome, so the copy held by a drop hook can cancel the
/// copy awaited by the pending task. The outcome is settled exactly once:
/// either the delay fires or the timer is cancelled, never both.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    delay: Duration,
    outcome: Arc<AtomicU8>,
}

impl SplashTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Arc::new(AtomicU8::new(PENDING)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the delay. Resolves to `true` only if the timer was not
    /// cancelled in the meantime.
    pub async fn elapsed(&self) -> bool {
        tokio::time::sleep(self.delay).await;
        self.settle(FIRED)
    }

    /// Cancels the timer. Returns whether a pending expiry was actually
    /// cancelled; `false` once the timer has fired or was already cancelled.
    pub fn cancel(&self) -> bool {
        self.settle(CANCELLED)
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.outcome.load(Ordering::Acquire) == CANCELLED
    }

    fn settle(&self, outcome: u8) -> bool {
        self.outcome
            .compare_exchange(PENDING, outcome, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Mutex;

    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_starts_showing() {
        let state = SplashState::new();
        assert!(state.is_showing());
        assert_eq!(state, SplashState::default());
    }

    #[test]
    fn test_hide_transitions_once() {
        let mut state = SplashState::new();
        assert!(state.hide());
        assert!(!state.is_showing());

        // A second expiry is a no-op
        assert!(!state.hide());
        assert!(!state.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_not_elapsed_before_delay() {
        let timer = SplashTimer::new(DELAY);
        let early = tokio::time::timeout(DELAY - Duration::from_millis(1), timer.elapsed()).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_hides_splash_after_delay() {
        let state = Arc::new(Mutex::new(SplashState::new()));
        let timer = SplashTimer::new(DELAY);

        let task = {
            let state = state.clone();
            let timer = timer.clone();
            tokio::spawn(async move {
                if timer.elapsed().await {
                    state.lock().unwrap().hide();
                }
            })
        };

        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(state.lock().unwrap().is_showing());

        tokio::time::sleep(Duration::from_millis(1)).await;
        task.await.unwrap();
        assert!(!state.lock().unwrap().is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let timer = SplashTimer::new(DELAY);

        let task = {
            let fired = fired.clone();
            let timer = timer.clone();
            tokio::spawn(async move {
                if timer.elapsed().await {
                    fired.store(true, Ordering::Relaxed);
                }
            })
        };

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(timer.cancel());
        assert!(!timer.cancel());

        task.await.unwrap();
        assert!(timer.is_cancelled());
        assert!(!fired.load(Ordering::Relaxed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire_is_noop() {
        let timer = SplashTimer::new(DELAY);
        assert!(timer.elapsed().await);

        assert!(!timer.cancel());
        assert!(!timer.is_cancelled());
    }
}
