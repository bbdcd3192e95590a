//! Game session - all mutable game state, advanced one frame at a time
//!
//! Nothing here touches the browser. Time comes in as a parameter and the
//! result goes out as a `Frame` draw list, so tests can drive it directly.

use super::config::GameConfig;
use super::frame::{Frame, Ring};
use super::hit_zone::HitZone;
use super::inbox::Inbox;
use super::pose::TorsoLandmarks;
use super::projectiles::ProjectileSet;
use super::scoring::Scoreboard;

/// What happened during one `Session::step`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: u32,
    pub hits: u32,
    pub expired: u32,
    pub live: usize,
    pub score: u32,
    /// The hit zone saw its first pose this frame
    pub newly_detected: bool,
}

pub struct Session {
    config: GameConfig,
    width: f64,
    height: f64,
    zone: HitZone,
    beans: ProjectileSet,
    scoreboard: Scoreboard,
    frame: Frame,
}

impl Session {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, GameConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: GameConfig) -> Self {
        Self {
            config,
            width,
            height,
            zone: HitZone::new(width, height, config.hit_radius),
            beans: ProjectileSet::new(),
            scoreboard: Scoreboard::new(config.cooldown_ms, config.catchable_age),
            frame: Frame::default(),
        }
    }

    /// Bottom-center of the canvas
    pub fn spawn_point(&self) -> (f64, f64) {
        (self.width / 2.0, self.height - self.config.spawn_margin)
    }

    /// Returns true if this was the first pose ever seen
    pub fn apply_pose(&mut self, torso: Option<&TorsoLandmarks>) -> bool {
        self.zone.track(torso, self.width, self.height)
    }

    pub fn spawn(&mut self) {
        let start = self.spawn_point();
        self.beans.spawn(start, self.config.trajectory);
    }

    /// Compute one frame: apply inputs, move beans, score, build the draw list.
    pub fn step(&mut self, now_ms: f64, inbox: &mut Inbox) -> FrameReport {
        let drained = inbox.drain();
        let mut report = FrameReport {
            newly_detected: self.apply_pose(drained.pose.as_ref()),
            spawned: drained.spawns,
            ..FrameReport::default()
        };
        for _ in 0..drained.spawns {
            self.spawn();
        }

        self.frame.clear();
        if self.zone.detected {
            self.frame.ring = Some(Ring {
                x: self.zone.x,
                y: self.zone.y,
                radius: self.zone.radius,
            });
        }

        // Beans that expire this update still get one last catch check and draw
        for bean in self.beans.iter_mut() {
            bean.update();
            if self.scoreboard.evaluate(bean, &self.zone, now_ms) {
                report.hits += 1;
            } else if !bean.is_active() {
                report.expired += 1;
            }
            bean.draw(&mut self.frame, self.config.bean_radius);
        }

        self.beans.compact();
        self.frame.hud_text = self.scoreboard.hud_text();

        report.live = self.beans.len();
        report.score = self.scoreboard.score();
        report
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn zone(&self) -> &HitZone {
        &self.zone
    }

    pub fn beans(&self) -> &ProjectileSet {
        &self.beans
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
