// Engine module - framework-level systems

pub mod frame;
pub mod input;
