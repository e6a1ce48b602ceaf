// Pixelframe - a small 2D game framework
//
// The framework's core is a buffered input-polling layer: the window
// system's push-style events are translated into a per-frame snapshot that
// gameplay code queries, with edge state cleared at an explicit frame
// boundary. On top of it sits a player entity wiring sprite-sheet animation
// to input intent.

pub mod engine;
pub mod game;
