//! Thrown bean - closed-form parabola with shrink-as-it-flies
//!
//! Position is a pure function of age and the fixed start point:
//!   y(t) = start_y - rise * t + fall * t²
//!   scale(t) = 1 - shrink * t
//! There is no horizontal motion.

use super::frame::{Disc, Frame};

/// Flight curve shared by every bean
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    /// Age added per frame
    pub age_step: f64,
    /// Linear upward term (pixels per unit age)
    pub rise: f64,
    /// Quadratic downward term
    pub fall: f64,
    /// Scale lost per unit age
    pub shrink: f64,
}

impl Default for Trajectory {
    fn default() -> Self {
        Self {
            age_step: 0.03,
            rise: 300.0,
            fall: 200.0,
            shrink: 0.6,
        }
    }
}

impl Trajectory {
    /// Vertical offset from the start point at `age` (negative is up)
    pub fn offset_y(&self, age: f64) -> f64 {
        -self.rise * age + self.fall * age * age
    }

    pub fn scale(&self, age: f64) -> f64 {
        1.0 - self.shrink * age
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    start: (f64, f64),
    position: (f64, f64),
    scale: f64,
    age: f64,
    active: bool,
    trajectory: Trajectory,
}

impl Projectile {
    pub fn new(start: (f64, f64), trajectory: Trajectory) -> Self {
        Self {
            start,
            position: start,
            scale: 1.0,
            age: 0.0,
            active: true,
            trajectory,
        }
    }

    /// Advance one frame. Deactivates once age passes 1.
    pub fn update(&mut self) {
        self.age += self.trajectory.age_step;
        self.position = (self.start.0, self.start.1 + self.trajectory.offset_y(self.age));
        self.scale = self.trajectory.scale(self.age);
        if self.age > 1.0 {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Push this bean onto the draw list as a scaled disc
    pub fn draw(&self, frame: &mut Frame, base_radius: f64) {
        frame.discs.push(Disc {
            x: self.position.0,
            y: self.position.1,
            radius: base_radius * self.scale,
        });
    }

    pub fn start(&self) -> (f64, f64) {
        self.start
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_closed_form() {
        let mut bean = Projectile::new((500.0, 780.0), Trajectory::default());
        for _ in 0..25 {
            bean.update();
            let t = bean.age();
            let (x, y) = bean.position();
            assert_eq!(x, 500.0);
            assert!((y - (780.0 - 300.0 * t + 200.0 * t * t)).abs() < 1e-9);
            assert!((bean.scale() - (1.0 - 0.6 * t)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rises_then_falls() {
        let mut bean = Projectile::new((0.0, 700.0), Trajectory::default());
        let mut lowest_y = f64::MAX;
        let mut apex_age = 0.0;
        while bean.is_active() {
            bean.update();
            if bean.position().1 < lowest_y {
                lowest_y = bean.position().1;
                apex_age = bean.age();
            }
        }
        // Apex of -300t + 200t² is at t = 0.75
        assert!((apex_age - 0.75).abs() < 0.031);
        assert!(bean.position().1 > lowest_y);
    }

    #[test]
    fn test_expires_after_age_one() {
        let mut bean = Projectile::new((0.0, 0.0), Trajectory::default());
        let mut frames = 0;
        while bean.is_active() {
            bean.update();
            frames += 1;
        }
        // 0.03 * 33 = 0.99 is still alive, 34th update crosses 1
        assert_eq!(frames, 34);
        assert!(bean.age() > 1.0);
    }

    #[test]
    fn test_age_one_deactivates_on_next_update() {
        let trajectory = Trajectory { age_step: 0.25, ..Trajectory::default() };
        let mut bean = Projectile::new((0.0, 0.0), trajectory);
        for _ in 0..4 {
            bean.update();
        }
        assert_eq!(bean.age(), 1.0);
        assert!(bean.is_active());

        bean.update();
        assert!(!bean.is_active());
    }

    #[test]
    fn test_draw_scales_radius() {
        let mut bean = Projectile::new((10.0, 20.0), Trajectory { age_step: 0.5, ..Trajectory::default() });
        bean.update();
        let mut frame = Frame::default();
        bean.draw(&mut frame, 25.0);
        assert_eq!(frame.discs.len(), 1);
        assert!((frame.discs[0].radius - 17.5).abs() < 1e-9);
        assert_eq!(frame.discs[0].x, 10.0);
    }
}
