//! The update step
//!
//! `Game` owns the simulation state and the pending timer. Each expiry reads the
//! clock, runs one simulation tick, renders, then arms its own successor so the
//! loop self-paces to the configured tick period.

use crate::config::SimulationConfig;
use crate::input::Command;
use crate::platform::{Clock, Scheduler, SchedulerError, TimerHandle, millis_between};
use crate::render::{RenderSink, TextRegion};
use crate::sim::{self, GameState, TickOutcome};

/// Counters collected across the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub misses: u32,
    /// Longest time spent inside one update step
    pub max_processing_ms: u16,
}

pub struct Game {
    config: SimulationConfig,
    state: GameState,
    pending: Option<TimerHandle>,
    stats: TickStats,
    status: String,
    debug: String,
}

impl Game {
    pub fn new(config: SimulationConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            pending: None,
            stats: TickStats::default(),
            status: String::new(),
            debug: String::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Timer the next tick is waiting on
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Text currently shown in `region`
    pub fn text(&self, region: TextRegion) -> &str {
        match region {
            TextRegion::Status => &self.status,
            TextRegion::Debug => &self.debug,
        }
    }

    /// Arm the first tick one period from now
    pub fn start(&mut self, scheduler: &mut impl Scheduler) -> Result<TimerHandle, SchedulerError> {
        self.arm(scheduler, self.config.tick_period_ms)
    }

    /// Handle a timer expiry
    ///
    /// Expiries for anything but the pending timer are ignored and yield `None`.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
        clock: &impl Clock,
        scheduler: &mut impl Scheduler,
        sink: &mut impl RenderSink,
    ) -> Result<Option<TickOutcome>, SchedulerError> {
        if self.pending != Some(handle) {
            log::warn!("Ignoring stale timer {}", handle.id());
            return Ok(None);
        }
        self.pending = None;
        self.update(clock, scheduler, sink).map(Some)
    }

    /// Apply a paddle command and redraw right away
    pub fn handle_command(&mut self, command: Command, sink: &mut impl RenderSink) -> bool {
        let moved = command.apply(&mut self.state, &self.config);
        if moved {
            self.render(sink);
        }
        moved
    }

    /// Cancel the pending tick; the loop halts for good
    pub fn shutdown(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        log::info!(
            "Stopped after {} ticks, {} misses, longest tick {} ms",
            self.stats.ticks,
            self.stats.misses,
            self.stats.max_processing_ms
        );
    }

    fn update(
        &mut self,
        clock: &impl Clock,
        scheduler: &mut impl Scheduler,
        sink: &mut impl RenderSink,
    ) -> Result<TickOutcome, SchedulerError> {
        let start = clock.millis();
        let elapsed = if self.state.started {
            millis_between(self.state.last_tick_millis, start)
        } else {
            0
        };

        let outcome = sim::tick(&mut self.state, &self.config, elapsed);
        match outcome {
            TickOutcome::Initialized => {}
            TickOutcome::Advanced { hit, .. } => {
                self.status = format!("elapsed: {}", elapsed);
                if let Some(hit) = hit {
                    self.debug = format!(
                        "n: {}, x: {} y:{}",
                        hit.hits,
                        (hit.vel_after.x * 10000.0) as i32,
                        (hit.vel_after.y * 10000.0) as i32
                    );
                }
            }
            TickOutcome::Missed { .. } => {
                self.stats.misses += 1;
                self.status.clear();
                self.debug.clear();
            }
        }
        self.render(sink);

        // Next elapsed time is measured from the end of this tick's work
        let end = clock.millis();
        self.state.last_tick_millis = end;

        let processing = millis_between(start, end);
        self.stats.ticks += 1;
        self.stats.max_processing_ms = self.stats.max_processing_ms.max(processing);

        let delay = self.config.tick_period_ms.saturating_sub(processing);
        self.arm(scheduler, delay)?;
        Ok(outcome)
    }

    fn arm(
        &mut self,
        scheduler: &mut impl Scheduler,
        delay_ms: u16,
    ) -> Result<TimerHandle, SchedulerError> {
        match scheduler.schedule_once(delay_ms) {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(handle)
            }
            Err(e) => {
                log::error!("Failed to arm next tick: {}", e);
                Err(e)
            }
        }
    }

    fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_ball(self.state.ball.pos, self.config.ball_radius);
        sink.draw_paddle(
            self.state.paddle_y,
            self.config.paddle_width,
            self.config.paddle_height,
        );
        sink.draw_text(TextRegion::Status, &self.status);
        sink.draw_text(TextRegion::Debug, &self.debug);
        sink.present();
    }
}
