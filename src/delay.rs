use std::time::{Duration, Instant};

/// Frames for the busy spinner, advanced once per app tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Pause played with an asset descriptor loaded, matching the source's
/// animation length.
const WITH_ASSET: Duration = Duration::from_secs(2);
/// Shorter fallback pause when the asset fetch failed or has not landed.
const WITHOUT_ASSET: Duration = Duration::from_secs(1);

/// Bounded, non-cancelable pause played after a successful submit. Purely
/// cosmetic: the record is already stored when the pause starts. The app
/// polls `is_finished` from its tick instead of sleeping, so other sessions
/// of a hosting process are never stalled.
#[derive(Debug)]
pub struct SubmitDelay {
    started: Instant,
    duration: Duration,
    frame: usize,
}

impl SubmitDelay {
    pub fn start(asset_loaded: bool) -> Self {
        Self {
            started: Instant::now(),
            duration: Self::duration_for(asset_loaded),
            frame: 0,
        }
    }

    pub const fn duration_for(asset_loaded: bool) -> Duration {
        if asset_loaded {
            WITH_ASSET
        } else {
            WITHOUT_ASSET
        }
    }

    pub fn is_finished(&self) -> bool {
        self.started.elapsed() >= self.duration
    }

    /// Advances the spinner and reports whether the pause has expired.
    pub fn tick(&mut self) -> bool {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        self.is_finished()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_finishes_immediately() {
        let delay = SubmitDelay {
            started: Instant::now(),
            duration: Duration::ZERO,
            frame: 0,
        };
        assert!(delay.is_finished());
    }

    #[test]
    fn long_duration_is_still_pending() {
        let mut delay = SubmitDelay {
            started: Instant::now(),
            duration: Duration::from_secs(60),
            frame: 0,
        };
        assert!(!delay.is_finished());
        assert!(!delay.tick());
    }

    #[test]
    fn asset_presence_selects_the_duration() {
        assert_eq!(SubmitDelay::duration_for(true), Duration::from_secs(2));
        assert_eq!(SubmitDelay::duration_for(false), Duration::from_secs(1));
        assert_eq!(SubmitDelay::start(true).duration, Duration::from_secs(2));
    }

    #[test]
    fn spinner_cycles_through_frames() {
        let mut delay = SubmitDelay::start(false);
        let first = delay.spinner();
        delay.tick();
        assert_ne!(delay.spinner(), first);
        for _ in 0..SPINNER_FRAMES.len() - 1 {
            delay.tick();
        }
        assert_eq!(delay.spinner(), first);
    }
}
