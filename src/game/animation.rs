// Player animation component

use glam::Vec2;
use std::collections::HashMap;

/// The player's animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle,
    RunRight,
    Jump,
}

/// A sprite sheet bound to one animation state.
///
/// Frames are laid out on a column/row grid and played from `start_frame`
/// through `end_frame` inclusive.
#[derive(Debug, Clone)]
pub struct SpriteSheetBinding {
    /// Asset path of the sheet; decoding and upload belong to the renderer.
    pub sheet: String,
    pub columns: u32,
    pub rows: u32,
    pub start_frame: u32,
    pub end_frame: u32,
    /// Seconds each frame is shown
    pub frame_duration: f32,
    pub looping: bool,
}

impl SpriteSheetBinding {
    pub fn frame_count(&self) -> u32 {
        self.end_frame.saturating_sub(self.start_frame) + 1
    }

    /// Grid cell (column, row) for an absolute frame index.
    pub fn grid_cell(&self, frame: u32) -> (u32, u32) {
        (frame % self.columns, (frame / self.columns) % self.rows.max(1))
    }
}

/// Everything the renderer needs for the current frame.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub sheet: String,
    pub column: u32,
    pub row: u32,
    pub position: Vec2,
    pub state: AnimationState,
}

/// Drives sprite-sheet playback for a game entity.
///
/// Binds one sheet per animation state, shares a single position across all
/// bound sheets, and advances the active clip on `update`. Resource loading
/// and drawing stay outside; this component only answers "which sheet, which
/// grid cell, where".
#[derive(Debug, Default)]
pub struct AnimationComponent {
    bindings: HashMap<AnimationState, SpriteSheetBinding>,
    current: Option<AnimationState>,
    current_frame: u32,
    frame_timer: f32,
    position: Vec2,
}

impl AnimationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a sprite sheet to an animation state, replacing any previous
    /// binding for that state.
    pub fn bind_sprite(&mut self, state: AnimationState, binding: SpriteSheetBinding) {
        self.bindings.insert(state, binding);
    }

    /// Position shared by every bound sheet.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Switch to a different animation state, restarting playback. Switching
    /// to the already-active state is a no-op so a held key does not reset
    /// the clip every frame.
    pub fn change_state(&mut self, state: AnimationState) {
        if self.current == Some(state) {
            return;
        }
        if !self.bindings.contains_key(&state) {
            log::warn!("no sprite bound for animation state {state:?}");
            return;
        }
        self.current = Some(state);
        self.current_frame = self.bindings[&state].start_frame;
        self.frame_timer = 0.0;
    }

    pub fn current_state(&self) -> Option<AnimationState> {
        self.current
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Advance the active clip by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(state) = self.current else {
            return;
        };
        let Some(clip) = self.bindings.get(&state) else {
            return;
        };

        self.frame_timer += dt;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            if self.current_frame >= clip.end_frame {
                if clip.looping {
                    self.current_frame = clip.start_frame;
                } else {
                    // Hold the last frame
                    self.frame_timer = 0.0;
                }
            } else {
                self.current_frame += 1;
            }
        }
    }

    /// Data for drawing the current frame, or `None` before the first
    /// `change_state`.
    pub fn frame_data(&self) -> Option<AnimationFrame> {
        let state = self.current?;
        let clip = self.bindings.get(&state)?;
        let (column, row) = clip.grid_cell(self.current_frame);
        Some(AnimationFrame {
            sheet: clip.sheet.clone(),
            column,
            row,
            position: self.position,
            state,
        })
    }
}
