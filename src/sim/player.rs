//! Player integration step
//!
//! Runs once per frame, before collision resolution. The ordering inside
//! `integrate` is load-bearing: gravity reads the `falling` flag *after*
//! the vertical-velocity coupling, so a landing is only ever confirmed by
//! the collision pass, one frame later.

use super::entity::Player;
use super::input::FrameInput;
use crate::consts::{GRAVITY, JUMP_IMPULSE};

/// Advance the player by one frame of movement and input
pub fn integrate(player: &mut Player, input: &FrameInput, dt: f32) {
    player.pos += player.vel * dt;

    // Any vertical motion means airborne, including motion gravity itself
    // just caused. Only the collision pass clears `falling`.
    if player.vel.y != 0.0 {
        player.falling = true;
    }

    // Per-frame accumulation, no terminal velocity
    if player.falling {
        player.vel.y += GRAVITY;
    }

    movement_controller(player, input);
}

/// Horizontal input and jump. Right is checked before left, so holding
/// both favors left (the later branch); this tie-break is part of the
/// contract.
fn movement_controller(player: &mut Player, input: &FrameInput) {
    if input.move_right {
        player.vel.x = player.speed;
    } else if input.move_left {
        player.vel.x = -player.speed;
    } else {
        player.vel.x = 0.0;
    }

    // Edge-triggered: `jump_pressed` is set only on the frame the key
    // went down, so holding the key cannot re-fire the impulse.
    if input.jump_pressed && !player.falling {
        player.vel.y = JUMP_IMPULSE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn grounded_player() -> Player {
        let mut p = Player::new(100.0, 100.0);
        p.falling = false;
        p
    }

    #[test]
    fn test_integration_moves_by_velocity_times_dt() {
        let mut p = grounded_player();
        p.vel = Vec2::new(250.0, 0.0);
        integrate(&mut p, &FrameInput::default(), 0.5);
        assert_eq!(p.pos, Vec2::new(225.0, 100.0));
    }

    #[test]
    fn test_gravity_accumulates_per_frame() {
        let mut p = Player::new(0.0, 0.0);
        p.falling = true;
        for i in 1..=5 {
            integrate(&mut p, &FrameInput::default(), 0.0);
            assert_eq!(p.vel.y, GRAVITY * i as f32);
        }
    }

    #[test]
    fn test_no_gravity_while_grounded() {
        let mut p = grounded_player();
        integrate(&mut p, &FrameInput::default(), 1.0 / 120.0);
        assert_eq!(p.vel.y, 0.0);
        assert!(!p.falling);
    }

    #[test]
    fn test_vertical_velocity_implies_falling() {
        let mut p = grounded_player();
        p.vel.y = -500.0;
        integrate(&mut p, &FrameInput::default(), 0.0);
        assert!(p.falling);
        // And gravity already started pulling the jump back down
        assert_eq!(p.vel.y, -500.0 + GRAVITY);
    }

    #[test]
    fn test_horizontal_input_right_left_release() {
        let mut p = grounded_player();

        let mut input = FrameInput::default();
        input.move_right = true;
        integrate(&mut p, &input, 0.0);
        assert_eq!(p.vel.x, 250.0);

        input.move_right = false;
        input.move_left = true;
        integrate(&mut p, &input, 0.0);
        assert_eq!(p.vel.x, -250.0);

        input.move_left = false;
        integrate(&mut p, &input, 0.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_opposing_keys_favor_right_branch() {
        let mut p = grounded_player();
        let input = FrameInput {
            move_left: true,
            move_right: true,
            ..FrameInput::default()
        };
        integrate(&mut p, &input, 0.0);
        assert_eq!(p.vel.x, 250.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let input = FrameInput {
            jump_pressed: true,
            ..FrameInput::default()
        };

        let mut airborne = Player::new(0.0, 0.0);
        airborne.falling = true;
        airborne.vel.y = 30.0;
        integrate(&mut airborne, &input, 0.0);
        // No impulse, just another frame of gravity
        assert_eq!(airborne.vel.y, 30.0 + GRAVITY);

        let mut grounded = grounded_player();
        integrate(&mut grounded, &input, 0.0);
        assert_eq!(grounded.vel.y, JUMP_IMPULSE);
    }

    proptest! {
        /// With gravity out of the picture, one step is exactly
        /// `pos + vel * dt` for any non-negative dt.
        #[test]
        fn prop_integration_is_exact(
            px in -1e4f32..1e4,
            py in -1e4f32..1e4,
            vx in -1e3f32..1e3,
            dt in 0.0f32..0.25,
        ) {
            let mut p = Player::new(px, py);
            p.falling = false;
            p.vel = Vec2::new(vx, 0.0);
            let expected = p.pos + p.vel * dt;
            integrate(&mut p, &FrameInput::default(), dt);
            // movement_controller zeroes vel.x afterwards, but the position
            // step must already have happened
            prop_assert_eq!(p.pos, expected);
        }
    }
}
