//! Terminal render sink
//!
//! Rasterizes the fixed-size display into a character grid scaled to whatever
//! area the terminal offers.

use glam::Vec2;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{RenderSink, Scene, TextRegion};

const PADDLE_CHAR: char = '█';
const BALL_CHAR: char = 'o';

/// Render sink drawing into a ratatui terminal
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    /// Display size in display units
    display: Vec2,
    scene: Scene,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>, display: Vec2) -> Self {
        Self {
            terminal,
            display,
            scene: Scene::default(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    fn draw_ball(&mut self, pos: Vec2, radius: f32) {
        self.scene.draw_ball(pos, radius);
    }

    fn draw_paddle(&mut self, top: f32, width: f32, height: f32) {
        self.scene.draw_paddle(top, width, height);
    }

    fn draw_text(&mut self, region: TextRegion, text: &str) {
        self.scene.draw_text(region, text);
    }

    fn present(&mut self) {
        let scene = &self.scene;
        let display = self.display;
        if let Err(e) = self.terminal.draw(|frame| render(frame, scene, display)) {
            log::warn!("Failed to draw frame: {}", e);
        }
    }
}

fn render(frame: &mut Frame, scene: &Scene, display: Vec2) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
        .title(" Bounce Pong ")
        .style(Style::default().bg(Color::Rgb(10, 10, 20)));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Text regions
            Constraint::Min(0),    // Display
        ])
        .split(inner);

    let text = Paragraph::new(vec![
        Line::from(scene.status.as_str()),
        Line::from(scene.debug.as_str()),
    ])
    .style(Style::default().fg(Color::Rgb(180, 180, 200)));
    frame.render_widget(text, chunks[0]);

    let field = chunks[1];
    let lines: Vec<Line> = rasterize(scene, display, field.width, field.height)
        .into_iter()
        .map(Line::from)
        .collect();
    let p = Paragraph::new(lines).style(Style::default().fg(Color::Rgb(255, 255, 255)));
    frame.render_widget(p, field);
}

/// Character grid of `rows` lines by `cols` columns covering the whole display
pub fn rasterize(scene: &Scene, display: Vec2, cols: u16, rows: u16) -> Vec<String> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let cell = Vec2::new(display.x / f32::from(cols), display.y / f32::from(rows));
    let center = scene.ball_pos + Vec2::splat(scene.ball_radius);
    // Outline sits one unit inside the bounding box
    let ring = (scene.ball_radius - 1.0).max(0.0);
    let band = 0.5 * cell.max_element();
    let paddle_bottom = scene.paddle_top + scene.paddle_size.y;

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let origin = Vec2::new(f32::from(col), f32::from(row)) * cell;
                    let far = origin + cell;
                    let in_paddle = origin.x < scene.paddle_size.x
                        && far.x > 0.0
                        && origin.y < paddle_bottom
                        && far.y > scene.paddle_top;
                    let dist = (origin + cell * 0.5).distance(center);
                    if in_paddle {
                        PADDLE_CHAR
                    } else if (dist - ring).abs() <= band {
                        BALL_CHAR
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn scene() -> Scene {
        let mut scene = Scene::default();
        scene.draw_ball(Vec2::new(10.0, 84.0), 10.0);
        scene.draw_paddle(84.0, 5.0, 30.0);
        scene
    }

    #[test]
    fn test_rasterize_dimensions() {
        let grid = rasterize(&scene(), Vec2::new(144.0, 168.0), 36, 42);
        assert_eq!(grid.len(), 42);
        assert!(grid.iter().all(|line| line.chars().count() == 36));
        assert!(rasterize(&scene(), Vec2::new(144.0, 168.0), 0, 42).is_empty());
    }

    #[test]
    fn test_rasterize_paddle_cells() {
        // 4x4 display units per cell
        let grid = rasterize(&scene(), Vec2::new(144.0, 168.0), 36, 42);
        let paddle_rows: Vec<usize> = grid
            .iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with("██"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(paddle_rows, (21..=28).collect::<Vec<_>>());
        assert!(!grid[21].starts_with("███"));
    }

    #[test]
    fn test_rasterize_ball_is_outlined() {
        let grid = rasterize(&scene(), Vec2::new(144.0, 168.0), 36, 42);
        let row: Vec<char> = grid[23].chars().collect();
        // Left edge of the outline, hollow center
        assert_eq!(row[2], BALL_CHAR);
        assert_eq!(row[5], ' ');
    }

    #[test]
    fn test_present_draws_text_and_shapes() {
        let terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        let mut sink = TerminalSink::new(terminal, Vec2::new(144.0, 168.0));
        sink.draw_ball(Vec2::new(60.0, 60.0), 10.0);
        sink.draw_paddle(84.0, 5.0, 30.0);
        sink.draw_text(TextRegion::Status, "elapsed: 20");
        sink.present();

        let text: String = sink
            .terminal_mut()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("elapsed: 20"));
        assert!(text.contains(PADDLE_CHAR));
        assert!(text.contains(BALL_CHAR));
    }
}
