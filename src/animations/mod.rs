//! Built-in animations.
//!
//! Every animation is a unit value implementing [`Animation`]. Rendering is a pure function of
//! [`Progress`]: all step indices, interpolations and caption metrics are derived from the one
//! scalar passed in.

use crate::foundation::core::{Canvas, Progress};
use crate::frame::model::Frame;

pub(crate) mod alignment;
pub(crate) mod generation;
pub(crate) mod infrastructure;
pub(crate) mod kit;
pub(crate) mod multimodal;
pub(crate) mod reasoning;
pub(crate) mod retrieval;
pub(crate) mod speculative;

/// Capability shared by every gallery animation: draw one frame for a progress value.
///
/// Implementations must not read clocks, global state or unseeded randomness. The same
/// `progress` always produces the same [`Frame`].
pub trait Animation: Send + Sync {
    /// Logical size of every frame this animation produces.
    fn canvas(&self) -> Canvas;

    fn render(&self, progress: Progress) -> Frame;
}
