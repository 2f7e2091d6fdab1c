//! Rendering contract
//!
//! The simulation hands its state to a `RenderSink` after every tick and every
//! paddle move. Sinks hold no game logic and are assumed to always succeed.

pub mod terminal;

use glam::Vec2;

pub use terminal::TerminalSink;

/// Fixed text areas on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRegion {
    /// Top line: per-tick status
    Status,
    /// Below the status: details of the last paddle hit
    Debug,
}

/// Receives draw calls for one frame
pub trait RenderSink {
    /// Outlined circle inside the bounding box whose top-left corner is `pos`
    fn draw_ball(&mut self, pos: Vec2, radius: f32);

    /// Filled rectangle at `(0, top)`
    fn draw_paddle(&mut self, top: f32, width: f32, height: f32);

    /// Replace the text shown in `region`
    fn draw_text(&mut self, region: TextRegion, text: &str);

    /// Flush the frame
    fn present(&mut self) {}
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub paddle_top: f32,
    pub paddle_size: Vec2,
    pub status: String,
    pub debug: String,
}

impl RenderSink for Scene {
    fn draw_ball(&mut self, pos: Vec2, radius: f32) {
        self.ball_pos = pos;
        self.ball_radius = radius;
    }

    fn draw_paddle(&mut self, top: f32, width: f32, height: f32) {
        self.paddle_top = top;
        self.paddle_size = Vec2::new(width, height);
    }

    fn draw_text(&mut self, region: TextRegion, text: &str) {
        let slot = match region {
            TextRegion::Status => &mut self.status,
            TextRegion::Debug => &mut self.debug,
        };
        slot.clear();
        slot.push_str(text);
    }
}
