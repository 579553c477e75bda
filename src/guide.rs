//! # loopreel guide
//!
//! A walkthrough of how a progress value becomes pixels, and where each piece lives.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Progress`](crate::Progress): a real number in `[0, 1)`. The only input an animation sees.
//! - [`Animation`](crate::Animation): `render(progress) -> Frame`. Same input, same frame, down
//!   to the bit pattern of every coordinate.
//! - [`Frame`](crate::Frame): a logical canvas, an ordered list of [`DrawOp`](crate::DrawOp)s
//!   and a caption string such as `12 / 50 steps`.
//! - [`Catalog`](crate::Catalog) and [`Registry`](crate::Registry): two read-only maps keyed by
//!   the same animation keys. [`Library`](crate::Library) pairs them and refuses to build unless
//!   [`check_consistency`](crate::check_consistency) passes in both directions.
//! - [`AnimationClock`](crate::AnimationClock): `Playing` or `Paused`, progress derived from a
//!   stored anchor, never accumulated per tick.
//! - [`Viewer`](crate::Viewer): one entry, one renderer, one clock and at most one tick.
//! - [`Gallery`](crate::Gallery): selection, category filter and the current viewer.
//!
//! ---
//!
//! ## Progress
//!
//! Animations derive everything from the one scalar:
//!
//! - step reveal: [`Progress::step`](crate::Progress::step) is `floor(p * n)`, always `< n`
//! - counters for captions: [`Progress::count`](crate::Progress::count)
//! - phase inside a step: [`Progress::within_step`](crate::Progress::within_step)
//! - delayed starts: [`Progress::after`](crate::Progress::after)
//!
//! Wall-clock time, randomness and shared mutable state are never read while rendering. Metrics
//! may wrap when progress wraps from just under 1 back to 0, but never move backwards inside a
//! cycle.
//!
//! ```
//! use loopreel::{Library, Progress};
//!
//! let lib = Library::builtin()?;
//! let (_, rag) = lib.resolve("rag")?;
//! let frame = rag.render(Progress::new(0.5)?);
//! assert_eq!(frame.caption(), "3 / 6 passages retrieved");
//! assert_eq!(frame.fingerprint(), rag.render(Progress::new(0.5)?).fingerprint());
//! # Ok::<(), loopreel::LoopreelError>(())
//! ```
//!
//! ---
//!
//! ## Time, clocks and ticks
//!
//! All time flows through a [`TimeSource`](crate::TimeSource). The binary uses
//! [`SystemTimeSource`](crate::SystemTimeSource); tests drive a
//! [`ManualTimeSource`](crate::ManualTimeSource) by hand.
//!
//! A clock computes `progress = (elapsed mod cycle) / cycle`. `pause()` freezes the elapsed
//! time, `start()` moves the anchor so playback resumes from the frozen value, and `restart()`
//! always lands on progress 0 and `Playing`.
//!
//! Redraws are driven by a [`TickScheduler`](crate::TickScheduler). Scheduling returns a
//! [`TickHandle`](crate::TickHandle); dropping the handle removes the registration at once, so
//! a paused or dropped viewer can never be woken by a stale tick. Missed ticks are coalesced:
//! each poll reports a tick at most once.
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use loopreel::{Gallery, Library, ManualTimeSource, PlaybackContext};
//!
//! let time = Rc::new(ManualTimeSource::new());
//! let ctx = PlaybackContext::new(time.clone(), Duration::from_secs(6), Duration::from_millis(16))?;
//! let mut gallery = Gallery::new(Library::builtin()?, ctx)?;
//!
//! time.advance(Duration::from_secs(3));
//! assert!(gallery.pump());
//! assert!((gallery.viewer().progress().value() - 0.5).abs() < 1e-9);
//!
//! gallery.select("attention")?;
//! assert_eq!(gallery.viewer().progress().value(), 0.0);
//! # Ok::<(), loopreel::LoopreelError>(())
//! ```
//!
//! ---
//!
//! ## Pixels
//!
//! Frames are vector data. Rasterization lives behind [`RenderBackend`](crate::RenderBackend):
//!
//! - [`CpuBackend`](crate::CpuBackend) fills paths with `vello_cpu`, outlines strokes with
//!   `kurbo`, and draws text through an SVG overlay rendered by `resvg`
//! - [`frame_to_svg`](crate::frame_to_svg) exports any frame as a standalone document
//! - [`render_cycle`](crate::render_cycle) samples one or more cycles into a
//!   [`FrameSink`](crate::FrameSink): frame `i` of `n` shows progress `i / n`
//!
//! Output pixels are premultiplied RGBA8. PNG output un-premultiplies; the `ffmpeg` sink
//! flattens over the configured background first.
//!
//! ---
//!
//! ## Viewer cards
//!
//! [`compose_card`](crate::compose_card) wraps an animation frame in the gallery card: icon
//! badge, label, tags, the scaled animation, caption, play-state line and description. The
//! card is itself a [`Frame`](crate::Frame), so it rasterizes and exports like any other.
