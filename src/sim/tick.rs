//! Per-frame simulation step
//!
//! Core game loop that advances the ground, the ready gate, the ball and the
//! ambience clock in a fixed order.

use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key is held this frame
    pub jump: bool,
}

/// Advance the game state by one frame
///
/// Events left over from the previous frame are discarded first; drain them
/// after each `tick` and `apply_input` to observe them.
pub fn tick(state: &mut GameState, dt: f32, tuning: &Tuning) {
    state.events.clear();
    state.frames += 1;

    state
        .ground
        .advance(state.screen_width, tuning.scroll_speed, tuning.edge_margin);

    if state.phase == GamePhase::NotReady && state.ground.blocks[0].x < 0.0 {
        state.phase = GamePhase::Ready;
        state.events.push(GameEvent::BecameReady);
        log::info!("Ground ready after {} frames", state.frames);
    }

    if state.phase != GamePhase::Ready {
        return;
    }

    let ground_y = state.ground.ground_y();
    let was_moving = state.ball.vertical_speed != 0.0;
    state.ball.advance(ground_y, dt, tuning);
    if was_moving && state.ball.is_landed(ground_y) {
        state.events.push(GameEvent::Landed);
    }

    if state.ambience.advance(dt, tuning.ambience_interval) {
        state.events.push(GameEvent::Ambience);
    }
}

/// Apply this frame's input to the ball
///
/// Input is taken in both phases; before the gate opens the frozen ball is
/// normally above the jump band, so nothing happens.
pub fn apply_input(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    let ground_y = state.ground.ground_y();
    if let Some(stage) = state.ball.on_jump_input(input.jump, ground_y, tuning) {
        log::debug!("Jump {:?} at frame {}", stage, state.frames);
        state.events.push(GameEvent::Jumped(stage));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::JumpStage;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let state = GameState::new(800, 480, 64.0, &tuning).unwrap();
        (state, tuning)
    }

    #[test]
    fn test_not_ready_until_first_block_crosses_zero() {
        let (mut state, tuning) = new_state();
        // 800 / 5 = 160 frames to reach exactly 0, which is not < 0
        for _ in 0..160 {
            tick(&mut state, DT, &tuning);
        }
        assert_eq!(state.ground.blocks[0].x, 0.0);
        assert_eq!(state.phase, GamePhase::NotReady);

        tick(&mut state, DT, &tuning);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.drain_events(), vec![GameEvent::BecameReady]);
    }

    #[test]
    fn test_ball_frozen_before_ready() {
        let (mut state, tuning) = new_state();
        let start = state.ball.clone();
        for _ in 0..100 {
            tick(&mut state, DT, &tuning);
        }
        assert_eq!(state.ball, start);
        assert_eq!(state.ambience.elapsed, 0.0);
    }

    #[test]
    fn test_ready_gate_never_closes() {
        let (mut state, tuning) = new_state();
        for _ in 0..2000 {
            let was_ready = state.is_ready();
            tick(&mut state, DT, &tuning);
            if was_ready {
                assert!(state.is_ready());
            }
        }
        // Block 0 has recycled back to the right side by now
        assert!(state.is_ready());
    }

    #[test]
    fn test_ball_falls_to_ground_and_lands() {
        let (mut state, tuning) = new_state();
        for _ in 0..161 {
            tick(&mut state, DT, &tuning);
        }
        state.drain_events();

        let ground_y = state.ground.ground_y();
        let mut landed = false;
        for _ in 0..200 {
            tick(&mut state, DT, &tuning);
            if state.drain_events().contains(&GameEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert!(state.ball.is_landed(ground_y));
        assert_eq!(state.ball.vertical_speed, 0.0);
        assert_eq!(state.ball.jump_stage, JumpStage::Grounded);
    }

    #[test]
    fn test_rising_ball_leaves_band_before_cooldown() {
        let (mut state, tuning) = new_state();
        // Put the ball on the ground after the gate opens
        for _ in 0..161 {
            tick(&mut state, DT, &tuning);
        }
        let ground_y = state.ground.ground_y();
        state.ball.pos.y = ground_y - state.ball.height / 4.0;
        // The gate-opening tick already applied one frame of gravity
        state.ball.vertical_speed = 0.0;
        state.drain_events();

        let hold = TickInput { jump: true };
        apply_input(&mut state, &hold, &tuning);
        assert_eq!(state.ball.jump_stage, JumpStage::First);
        assert_eq!(state.ball.vertical_speed, -5.0);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Jumped(JumpStage::First)]
        );

        // Rising at ~5/frame leaves the jump band after a few frames,
        // before the cooldown: no second jump on the way up
        for _ in 0..7 {
            tick(&mut state, DT, &tuning);
            apply_input(&mut state, &hold, &tuning);
        }
        assert_eq!(state.ball.jump_stage, JumpStage::First);
        assert!(state.ball.jump_frames < tuning.double_jump_cooldown_frames);
    }

    #[test]
    fn test_ambience_fires_after_interval() {
        let (mut state, tuning) = new_state();
        for _ in 0..161 {
            tick(&mut state, DT, &tuning);
        }
        state.drain_events();
        state.ambience.elapsed = 0.0;

        // 0.25 is exact, so 20 frames sum to exactly 5 seconds
        let mut fired_at = None;
        for frame in 1..=20 {
            tick(&mut state, 0.25, &tuning);
            if state.drain_events().contains(&GameEvent::Ambience) {
                fired_at = Some(frame);
                break;
            }
        }
        assert_eq!(fired_at, Some(20));
        assert_eq!(state.ambience.elapsed, 0.0);
    }

    #[test]
    fn test_undrained_events_do_not_pile_up() {
        let (mut state, tuning) = new_state();
        let hold = TickInput { jump: true };
        for _ in 0..2000 {
            tick(&mut state, 0.25, &tuning);
            apply_input(&mut state, &hold, &tuning);
            assert!(state.events.len() <= 4, "{} events queued", state.events.len());
        }
        assert!(state.is_ready());
    }
}
