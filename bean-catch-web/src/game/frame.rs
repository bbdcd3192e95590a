//! Draw list for one frame, in canvas pixels
//!
//! The game core fills this; the renderer turns it into vertices.

/// Hit-zone debug outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A filled bean
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub ring: Option<Ring>,
    pub discs: Vec<Disc>,
    pub hud_text: String,
}

impl Frame {
    /// Empty the draw list, keeping allocations
    pub fn clear(&mut self) {
        self.ring = None;
        self.discs.clear();
        self.hud_text.clear();
    }
}
