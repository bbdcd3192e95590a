//! Catch detection and score keeping
//!
//! One catch per cooldown window across ALL beans: the first bean in list
//! order that qualifies wins, later ones see the new deadline.

use super::hit_zone::HitZone;
use super::projectile::Projectile;

#[derive(Clone, Debug)]
pub struct Scoreboard {
    score: u32,
    cooldown_until_ms: f64,
    cooldown_ms: f64,
    catchable_age: f64,
}

impl Scoreboard {
    pub fn new(cooldown_ms: f64, catchable_age: f64) -> Self {
        Self {
            score: 0,
            cooldown_until_ms: 0.0,
            cooldown_ms,
            catchable_age,
        }
    }

    /// Test one bean against the zone. On a catch: score, start the
    /// cooldown, and deactivate the bean.
    pub fn evaluate(&mut self, bean: &mut Projectile, zone: &HitZone, now_ms: f64) -> bool {
        if !zone.detected || bean.age() <= self.catchable_age || self.is_cooling_down(now_ms) {
            return false;
        }

        let (x, y) = bean.position();
        if !zone.contains(x, y) {
            return false;
        }

        self.score += 1;
        self.cooldown_until_ms = now_ms + self.cooldown_ms;
        bean.deactivate();
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn cooldown_until_ms(&self) -> f64 {
        self.cooldown_until_ms
    }

    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        now_ms <= self.cooldown_until_ms
    }

    pub fn hud_text(&self) -> String {
        hud_text(self.score)
    }
}

/// Score line shown above the canvas
pub fn hud_text(score: u32) -> String {
    format!("HIT : {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::projectile::Trajectory;

    /// Bean aged `frames` updates with its position placed on the zone center
    fn bean_at_zone(zone: &HitZone, frames: usize) -> Projectile {
        let trajectory = Trajectory::default();
        let mut age = 0.0;
        for _ in 0..frames {
            age += trajectory.age_step;
        }
        // Pick a start so that after `frames` updates it sits on the zone center
        let start = (zone.x, zone.y - trajectory.offset_y(age));
        let mut bean = Projectile::new(start, trajectory);
        for _ in 0..frames {
            bean.update();
        }
        bean
    }

    fn zone() -> HitZone {
        HitZone { x: 500.0, y: 500.0, radius: 120.0, detected: true }
    }

    #[test]
    fn test_catch_scores_and_starts_cooldown() {
        let mut board = Scoreboard::new(800.0, 0.7);
        let mut bean = bean_at_zone(&zone(), 25);

        assert!(board.evaluate(&mut bean, &zone(), 1_000.0));
        assert_eq!(board.score(), 1);
        assert_eq!(board.cooldown_until_ms(), 1_800.0);
        assert!(!bean.is_active());
        assert_eq!(board.hud_text(), "HIT : 1");
    }

    #[test]
    fn test_young_bean_cannot_score() {
        let mut board = Scoreboard::new(800.0, 0.7);
        // 23 updates -> age 0.69
        let mut bean = bean_at_zone(&zone(), 23);
        assert!((bean.age() - 0.69).abs() < 1e-9);

        assert!(!board.evaluate(&mut bean, &zone(), 1_000.0));
        assert_eq!(board.score(), 0);
        assert!(bean.is_active());
    }

    #[test]
    fn test_undetected_zone_never_scores() {
        let mut board = Scoreboard::new(800.0, 0.7);
        let undetected = HitZone { detected: false, ..zone() };
        let mut bean = bean_at_zone(&undetected, 28);

        assert!(!board.evaluate(&mut bean, &undetected, 1_000.0));
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_cooldown_is_global() {
        let mut board = Scoreboard::new(800.0, 0.7);
        let mut first = bean_at_zone(&zone(), 26);
        let mut second = bean_at_zone(&zone(), 26);

        assert!(!board.is_cooling_down(1_000.0));
        assert!(board.evaluate(&mut first, &zone(), 1_000.0));
        assert!(board.is_cooling_down(1_000.0));
        assert!(!board.evaluate(&mut second, &zone(), 1_000.0));
        assert!(second.is_active());

        // Deadline itself is still blocked, just after it is not
        assert!(board.is_cooling_down(1_800.0));
        assert!(!board.evaluate(&mut second, &zone(), 1_800.0));
        assert!(!board.is_cooling_down(1_800.5));
        assert!(board.evaluate(&mut second, &zone(), 1_800.5));
        assert_eq!(board.score(), 2);
    }

    #[test]
    fn test_hud_text_before_any_catch() {
        let board = Scoreboard::new(800.0, 0.7);
        assert_eq!(board.hud_text(), "HIT : 0");
        assert_eq!(hud_text(0), "HIT : 0");
    }

    #[test]
    fn test_outside_radius_misses() {
        let mut board = Scoreboard::new(800.0, 0.7);
        let far = HitZone { x: 800.0, ..zone() };
        let mut bean = bean_at_zone(&zone(), 26);

        assert!(!board.evaluate(&mut bean, &far, 1_000.0));
        assert!(bean.is_active());
    }
}
