//! Run lifecycle state machine for a complete transform

/// Transform controller and render frame types
pub mod controller;

pub use controller::{ControllerState, Frame, FrameParticle, TransformController};
