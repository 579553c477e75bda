//! loopreel is a gallery of small looping animations that illustrate LLM concepts.
//!
//! Every animation is a pure function of one progress value in `[0, 1)`. A per-viewer
//! [`AnimationClock`] turns elapsed time into progress, a [`Viewer`] renders the selected
//! animation on every tick, and a [`Gallery`] handles browsing and filtering on top:
//!
//! - Look up entries and renderers through a [`Library`]
//! - Mount a [`Viewer`] (or a whole [`Gallery`]) on a [`PlaybackContext`]
//! - Rasterize [`Frame`]s with a [`RenderBackend`] or stream a cycle into a [`FrameSink`]
//!
//! See [`guide`] for the longer walkthrough.
#![forbid(unsafe_code)]

mod animations;
mod catalog;
mod config;
mod encode;
mod foundation;
mod frame;
mod gallery;
mod library;
mod playback;
mod render;
mod tui;
mod viewer;

pub mod guide;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Progress, Rect, Rgba8Premul, Size};
pub use crate::foundation::error::{LoopreelError, LoopreelResult};

pub use crate::frame::color::Color;
pub use crate::frame::model::{DrawOp, Frame, PATH_TOLERANCE, StrokeStyle, TextAnchor, TextStyle};
pub use crate::frame::text::{mono_width, wrap_words};

pub use crate::animations::Animation;
pub use crate::catalog::category::Category;
pub use crate::catalog::entries::builtin_entries;
pub use crate::catalog::model::{Catalog, CatalogEntry};
pub use crate::library::registry::Registry;
pub use crate::library::{Library, check_consistency};

pub use crate::playback::PlaybackContext;
pub use crate::playback::clock::{AnimationClock, DEFAULT_CYCLE, PlayState};
pub use crate::playback::scheduler::{TickHandle, TickId, TickScheduler};
pub use crate::playback::time::{ManualTimeSource, SystemTimeSource, TimeSource};

pub use crate::gallery::shell::{DEFAULT_KEY, Gallery};
pub use crate::viewer::card::{CARD_WIDTH, compose_card, status_line};
pub use crate::viewer::viewer::Viewer;

pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::{CpuBackend, rasterize_vectors};
pub use crate::render::fonts::font_database;
pub use crate::render::pipeline::{CycleOpts, Framing, RenderStats, frame_at, render_cycle};
pub use crate::render::svg::{SvgOptions, frame_to_svg};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, ensure_parent_dir};

pub use crate::config::{RenderConfig, Settings};
pub use crate::tui::run::{Flow, handle_key, run_gallery};
