// Player entity - animation and input component wiring

use super::animation::{AnimationComponent, AnimationFrame, AnimationState, SpriteSheetBinding};
use crate::engine::input::{vk, InputState};
use glam::Vec2;

/// Horizontal movement speed in pixels per second
const RUN_SPEED: f32 = 220.0;

/// Reads the input snapshot each frame and turns it into movement and
/// animation intent for the player.
#[derive(Debug, Default)]
pub struct PlayerController {
    jump_requested: bool,
    direction: Vec2,
}

impl PlayerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the input buffer. Movement is level state (held keys), jump is
    /// an edge so holding the key does not retrigger.
    pub fn update(&mut self, input: &InputState) {
        let mut direction = Vec2::ZERO;
        if input.key_is_down(vk::KEY_A) || input.key_is_down(vk::LEFT) {
            direction.x -= 1.0;
        }
        if input.key_is_down(vk::KEY_D) || input.key_is_down(vk::RIGHT) {
            direction.x += 1.0;
        }
        self.direction = direction;
        self.jump_requested = input.key_was_pressed(vk::SPACE) || input.key_was_pressed(vk::KEY_W);
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// Which animation the current input asks for.
    pub fn animation_intent(&self) -> AnimationState {
        if self.jump_requested {
            AnimationState::Jump
        } else if self.direction.x != 0.0 {
            AnimationState::RunRight
        } else {
            AnimationState::Idle
        }
    }
}

/// The player game entity.
///
/// Pure composition: construction binds the sprite sheets to the three
/// animation states and wires up the input controller; per-frame work is
/// delegated to the components. Drawing delegates to the animation component
/// only.
pub struct Player {
    animation: AnimationComponent,
    controller: PlayerController,
    position: Vec2,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        let position = Vec2::new(x, y);
        let mut animation = AnimationComponent::new();

        animation.bind_sprite(
            AnimationState::RunRight,
            SpriteSheetBinding {
                sheet: "images/adventurer_run.png".to_string(),
                columns: 4,
                rows: 2,
                start_frame: 0,
                end_frame: 7,
                frame_duration: 0.1,
                looping: true,
            },
        );
        animation.bind_sprite(
            AnimationState::Idle,
            SpriteSheetBinding {
                sheet: "images/adventurer_idle.png".to_string(),
                columns: 5,
                rows: 2,
                start_frame: 0,
                end_frame: 9,
                frame_duration: 0.1,
                looping: true,
            },
        );
        animation.bind_sprite(
            AnimationState::Jump,
            SpriteSheetBinding {
                sheet: "images/adventurer_jump.png".to_string(),
                columns: 5,
                rows: 2,
                start_frame: 0,
                end_frame: 9,
                frame_duration: 0.05,
                looping: true,
            },
        );
        animation.set_position(position);
        animation.change_state(AnimationState::Idle);

        Self {
            animation,
            controller: PlayerController::new(),
            position,
        }
    }

    /// Per-frame update: controller first, then animation.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.controller.update(input);

        self.position.x += self.controller.direction().x * RUN_SPEED * dt;
        self.animation.set_position(self.position);
        self.animation.change_state(self.controller.animation_intent());
        self.animation.update(dt);
    }

    /// Drawing delegates to the animation component only.
    pub fn draw(&self) -> Option<AnimationFrame> {
        self.animation.frame_data()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animation.current_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_player_starts_idle() {
        let player = Player::new(100.0, 200.0);
        assert_eq!(player.animation_state(), Some(AnimationState::Idle));
        assert_eq!(player.position(), Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_draw_reports_initial_frame() {
        let player = Player::new(100.0, 200.0);
        let frame = player.draw().unwrap();
        assert_eq!(frame.state, AnimationState::Idle);
        assert_eq!(frame.sheet, "images/adventurer_idle.png");
        assert_eq!(frame.position, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_holding_right_runs_and_moves() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_D);

        player.update(&input, 0.1);
        assert_eq!(player.animation_state(), Some(AnimationState::RunRight));
        assert_relative_eq!(player.position().x, RUN_SPEED * 0.1);
    }

    #[test]
    fn test_holding_left_moves_negative() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::LEFT);

        player.update(&input, 0.1);
        assert_relative_eq!(player.position().x, -RUN_SPEED * 0.1);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        input.set_key_down(vk::KEY_D);

        player.update(&input, 0.1);
        assert_relative_eq!(player.position().x, 0.0);
        assert_eq!(player.animation_state(), Some(AnimationState::Idle));
    }

    #[test]
    fn test_jump_edge_enters_jump_state() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::SPACE);

        player.update(&input, 0.016);
        assert_eq!(player.animation_state(), Some(AnimationState::Jump));

        // After the frame boundary the edge is gone and the player settles
        input.end_frame();
        input.set_key_up(vk::SPACE);
        player.update(&input, 0.016);
        assert_eq!(player.animation_state(), Some(AnimationState::Idle));
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_D);
        player.update(&input, 0.1);
        assert_eq!(player.animation_state(), Some(AnimationState::RunRight));

        input.set_key_up(vk::KEY_D);
        input.end_frame();
        player.update(&input, 0.1);
        assert_eq!(player.animation_state(), Some(AnimationState::Idle));
    }

    #[test]
    fn test_update_moves_bound_sprites_with_player() {
        let mut player = Player::new(0.0, 0.0);
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_D);

        player.update(&input, 0.1);
        let frame = player.draw().unwrap();
        assert_eq!(frame.position, player.position());
    }
}
