//! Shoe/wall combo tracking
//!
//! The combo grows only while hits strictly alternate shoe, wall, shoe, wall...
//! with each hit landing inside the timeout window. Anything else quietly
//! drops the counter back to zero.

use serde::{Deserialize, Serialize};

/// Last thing the ball hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    #[default]
    None,
    Wall,
    Shoe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboState {
    pub last_hit: HitKind,
    /// Timestamp of the last hit (ms)
    pub last_hit_at: f64,
    pub count: u32,
    timeout_ms: f64,
    max: u32,
}

impl ComboState {
    pub fn new(timeout_ms: f64, max: u32) -> Self {
        Self {
            last_hit: HitKind::None,
            last_hit_at: 0.0,
            count: 0,
            timeout_ms,
            max,
        }
    }

    fn is_stale(&self, now: f64) -> bool {
        now - self.last_hit_at > self.timeout_ms
    }

    /// Drop a combo whose last hit is older than the timeout
    pub fn expire(&mut self, now: f64) {
        if self.is_stale(now) {
            self.count = 0;
            self.last_hit = HitKind::None;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.last_hit = HitKind::None;
    }

    /// The shoe touched the ball. Only a shoe hit following a wall hit keeps
    /// the counter.
    pub fn register_shoe_hit(&mut self, now: f64) {
        if self.is_stale(now) || self.last_hit != HitKind::Wall {
            self.count = 0;
        }
        self.last_hit = HitKind::Shoe;
        self.last_hit_at = now;
    }

    /// The ball bounced off a wall. Returns the new combo count when the hit
    /// completes a shoe-then-wall pair.
    pub fn register_wall_hit(&mut self, now: f64) -> Option<u32> {
        let scored = self.last_hit == HitKind::Shoe && !self.is_stale(now);
        self.last_hit = HitKind::Wall;
        self.last_hit_at = now;

        if scored {
            self.count = (self.count + 1).min(self.max);
            Some(self.count)
        } else {
            self.count = 0;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{COMBO_TIMEOUT_MS, MAX_COMBO};
    use proptest::prelude::*;

    fn combo() -> ComboState {
        ComboState::new(COMBO_TIMEOUT_MS, MAX_COMBO)
    }

    #[test]
    fn test_alternating_hits_build_combo() {
        let mut c = combo();

        c.register_shoe_hit(0.0);
        assert_eq!(c.register_wall_hit(500.0), Some(1));
        assert_eq!(c.last_hit, HitKind::Wall);

        c.register_shoe_hit(600.0);
        assert_eq!(c.last_hit, HitKind::Shoe);
        assert_eq!(c.count, 1);

        assert_eq!(c.register_wall_hit(700.0), Some(2));
        assert_eq!(c.count, 2);
    }

    #[test]
    fn test_double_shoe_resets() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        c.register_wall_hit(100.0);
        c.register_shoe_hit(200.0);
        c.register_shoe_hit(300.0);
        assert_eq!(c.count, 0);
        assert_eq!(c.last_hit, HitKind::Shoe);
        // The second shoe hit still opens a new pair
        assert_eq!(c.register_wall_hit(400.0), Some(1));
    }

    #[test]
    fn test_double_wall_resets() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        assert_eq!(c.register_wall_hit(100.0), Some(1));
        assert_eq!(c.register_wall_hit(200.0), None);
        assert_eq!(c.count, 0);
        assert_eq!(c.last_hit, HitKind::Wall);
    }

    #[test]
    fn test_shoe_after_timeout_resets() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        c.register_wall_hit(100.0);
        c.register_shoe_hit(2101.0);
        assert_eq!(c.count, 0);
        assert_eq!(c.last_hit, HitKind::Shoe);
    }

    #[test]
    fn test_wall_after_timeout_does_not_score() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        assert_eq!(c.register_wall_hit(2500.0), None);
        assert_eq!(c.count, 0);
    }

    #[test]
    fn test_hit_exactly_at_timeout_counts() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        assert_eq!(c.register_wall_hit(COMBO_TIMEOUT_MS), Some(1));
    }

    #[test]
    fn test_expire_clears_state() {
        let mut c = combo();
        c.register_shoe_hit(0.0);
        c.register_wall_hit(100.0);

        c.expire(1000.0);
        assert_eq!(c.count, 1);

        c.expire(2200.0);
        assert_eq!(c.count, 0);
        assert_eq!(c.last_hit, HitKind::None);
    }

    #[test]
    fn test_wall_first_never_scores() {
        let mut c = combo();
        assert_eq!(c.register_wall_hit(10.0), None);
        c.register_shoe_hit(20.0);
        assert_eq!(c.register_wall_hit(30.0), Some(1));
    }

    proptest! {
        #[test]
        fn prop_count_never_exceeds_max(pairs in 1usize..40) {
            let mut c = combo();
            let mut now = 0.0;
            for _ in 0..pairs {
                c.register_shoe_hit(now);
                now += 100.0;
                c.register_wall_hit(now);
                now += 100.0;
            }
            prop_assert_eq!(c.count, (pairs as u32).min(MAX_COMBO));
        }

        #[test]
        fn prop_points_follow_previous_count(prior in 0u32..10) {
            let mut c = combo();
            let mut now = 0.0;
            for _ in 0..prior {
                c.register_shoe_hit(now);
                c.register_wall_hit(now + 1.0);
                now += 10.0;
            }
            let before = c.count;
            c.register_shoe_hit(now);
            prop_assert_eq!(c.register_wall_hit(now), Some(before + 1));
        }
    }
}
