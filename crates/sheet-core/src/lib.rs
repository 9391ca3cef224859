#![forbid(unsafe_code)]

//! Core: viewport geometry, pointer input, drag tracking, and motion.
//!
//! # Role in the workspace
//! `sheet-core` is the collaborator layer beneath the bottom sheet. It owns
//! the pieces a host platform would normally provide: viewport metrics,
//! normalized pointer events, a gesture-capture primitive that reports
//! cumulative drag deltas, and an animated scalar that interpolates toward
//! a target using either a timing curve or a spring.
//!
//! # Primary responsibilities
//! - **Viewport / Rect**: device metrics and hit-test rectangles.
//! - **PointerEvent**: touch-down, move, up and cancel samples.
//! - **DragTracker**: turns pointer samples into captured drag deltas.
//! - **AnimatedValue**: a single scalar with at most one active motion;
//!   starting a new motion supersedes the previous one.
//!
//! # How it fits in the system
//! `sheet-widgets` builds the sheet state machine on top of these types and
//! never reads a clock itself; the host advances [`animation::AnimatedValue`]
//! with frame deltas.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod gesture;
#[cfg(feature = "tracing")]
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, info_span, trace, trace_span, warn};
