use bounce_pong::platform::millis_between;
use bounce_pong::sim::{self, GameState, TickOutcome, clamp_to_bounds, deflect};
use bounce_pong::{Command, SimulationConfig};
use glam::Vec2;
use proptest::prelude::*;

/// One step of a random session: a tick or a paddle command
#[derive(Debug, Clone)]
enum Step {
    Tick(u16),
    Press(Command),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0u16..60).prop_map(Step::Tick),
        1 => Just(Step::Press(Command::PaddleUp)),
        1 => Just(Step::Press(Command::PaddleDown)),
        1 => Just(Step::Press(Command::Select)),
    ]
}

proptest! {
    #[test]
    fn elapsed_wraps_into_range(earlier in 0u16..1000, later in 0u16..1000) {
        let elapsed = millis_between(earlier, later);
        prop_assert!(elapsed < 1000);
        prop_assert_eq!((earlier + elapsed) % 1000, later);
    }

    #[test]
    fn session_ramps_speed_and_contains_ball(steps in prop::collection::vec(step(), 1..400)) {
        let config = SimulationConfig::default();
        let mut state = GameState::new(&config);

        for step in steps {
            match step {
                Step::Press(command) => {
                    command.apply(&mut state, &config);
                }
                Step::Tick(elapsed) => {
                    let before = state.speed;
                    match sim::tick(&mut state, &config, elapsed) {
                        TickOutcome::Advanced { bounces, .. } => {
                            let mut expected = before;
                            for _ in 0..bounces.count() {
                                expected *= config.speed_ramp;
                            }
                            prop_assert_eq!(state.speed, expected);
                            prop_assert!(state.speed >= before);

                            // Boundary handling at the start of the next tick
                            // pulls the integrated ball back on screen
                            let max = config.max_ball_position();
                            let mut next = state.ball;
                            clamp_to_bounds(&mut next, max);
                            prop_assert!(state.ball.pos.is_finite());
                            prop_assert!(next.pos.x >= 0.0 && next.pos.x <= max.x);
                            prop_assert!(next.pos.y >= 0.0 && next.pos.y <= max.y);
                        }
                        TickOutcome::Initialized | TickOutcome::Missed { .. } => {
                            prop_assert_eq!(state.speed, 1.0);
                        }
                    }
                    prop_assert!(state.speed >= 1.0);
                }
            }
        }
    }

    #[test]
    fn clamp_contains_ball(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        vx in -1.0f32..1.0,
        vy in -1.0f32..1.0,
    ) {
        let config = SimulationConfig::default();
        let max = config.max_ball_position();
        let mut ball = sim::Ball { pos: Vec2::new(x, y), vel: Vec2::new(vx, vy) };

        clamp_to_bounds(&mut ball, max);

        prop_assert!(ball.pos.x >= 0.0 && ball.pos.x <= max.x);
        prop_assert!(ball.pos.y >= 0.0 && ball.pos.y <= max.y);
        prop_assert_eq!(ball.vel.length(), Vec2::new(vx, vy).length());
    }

    #[test]
    fn clamped_ball_heads_inward(x in -500.0f32..500.0, vx in -1.0f32..1.0) {
        let config = SimulationConfig::default();
        let max = config.max_ball_position();
        let mut ball = sim::Ball { pos: Vec2::new(x, 50.0), vel: Vec2::new(vx, 0.0) };

        let hits = clamp_to_bounds(&mut ball, max);

        if x > max.x {
            prop_assert!(hits.x && ball.vel.x <= 0.0);
        } else if x < 0.0 {
            prop_assert!(hits.x && ball.vel.x >= 0.0);
        } else {
            prop_assert!(!hits.x);
            prop_assert_eq!(ball.vel.x, vx);
        }
    }

    #[test]
    fn deflect_preserves_speed(
        vx in 0.001f32..0.5,
        vy in -0.5f32..0.5,
        over in -10.0f32..10.0,
    ) {
        let vel = Vec2::new(vx, vy);
        let bent = deflect(vel, over, 10.0);

        let before = vel.length_squared();
        let after = bent.length_squared();
        prop_assert!((after - before).abs() < 0.01);
        prop_assert!((after - before).abs() <= 0.011 * before);
    }
}
