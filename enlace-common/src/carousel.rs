//! Announcement carousel
//!
//! A cyclic index over a fixed number of slides. Auto-advance is driven by a
//! scheduled tick that carries the timer token it was scheduled with; every
//! navigation issues a new token, so ticks scheduled before the navigation are
//! discarded and the countdown effectively restarts.

use std::time::Duration;

/// Default delay between automatic advances
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Identifies one scheduled auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Carousel position and timer state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    token: u64,
}

impl Carousel {
    /// Carousel over `len` slides, showing the first
    ///
    /// Returns `None` for an empty carousel, which has nothing to rotate.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            token: 0,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Index of the visible slide
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether slide `index` is the visible one (for dot highlighting)
    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// Token of the currently scheduled auto-advance
    pub fn token(&self) -> TimerToken {
        TimerToken(self.token)
    }

    /// Show slide `n`, wrapping any integer into range, and restart the timer
    ///
    /// Returns the token the caller should schedule the next tick with.
    pub fn go_to(&mut self, n: i64) -> TimerToken {
        // len is non-zero and far below i64::MAX
        let len = self.len as i64;
        self.current = n.rem_euclid(len) as usize;
        self.token = self.token.wrapping_add(1);
        self.token()
    }

    /// Show the following slide
    pub fn next(&mut self) -> TimerToken {
        self.go_to(self.current as i64 + 1)
    }

    /// Show the preceding slide
    pub fn previous(&mut self) -> TimerToken {
        self.go_to(self.current as i64 - 1)
    }

    /// Handle a scheduled tick
    ///
    /// Advances and returns the next token if `token` is still current;
    /// returns `None` for a tick made stale by manual navigation.
    pub fn tick(&mut self, token: TimerToken) -> Option<TimerToken> {
        (token == self.token()).then(|| self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_go_to_wraps_like_modulo() {
        let len = 4_i64;
        let mut carousel = Carousel::new(len as usize).expect("carousel");
        for n in -len..(2 * len) {
            carousel.go_to(n);
            assert_eq!(carousel.current() as i64, (n + len) % len, "n = {n}");
        }
    }

    #[test]
    fn test_go_to_far_negative_stays_in_range() {
        let mut carousel = Carousel::new(3).expect("carousel");
        carousel.go_to(-7);
        assert_eq!(carousel.current(), 2);
        carousel.go_to(i64::MIN);
        assert!(carousel.current() < 3);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut carousel = Carousel::new(5).expect("carousel");
        carousel.previous();
        assert_eq!(carousel.current(), 4);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_tick_advances_with_current_token() {
        let mut carousel = Carousel::new(3).expect("carousel");
        let token = carousel.go_to(0);
        let next = carousel.tick(token).expect("tick accepted");
        assert_eq!(carousel.current(), 1);
        assert_ne!(next, token);
        assert_eq!(next, carousel.token());
    }

    #[test]
    fn test_manual_navigation_cancels_pending_tick() {
        let mut carousel = Carousel::new(3).expect("carousel");
        let scheduled = carousel.go_to(0);
        carousel.go_to(2);
        assert_eq!(carousel.tick(scheduled), None);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut carousel = Carousel::new(1).expect("carousel");
        let token = carousel.token();
        carousel.tick(token);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_current(0));
    }
}
