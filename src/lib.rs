// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison against exact constants is routine in input math
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
// Pixel/NDC casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

//! Unified touch/mouse pointer facade for game and visualization engines.
//!
//! Tactile presents a single read-only view of "the current pointer" — a
//! finger on touch-capable platforms, the mouse elsewhere — plus a small set
//! of geometric queries built on top of it: projecting the pointer onto a
//! world-space plane, hit-testing colliders, and testing screen rects.
//!
//! # Key entry points
//!
//! - [`input::InputFacade`] - the unified pointer query surface
//! - [`input::PointerSource`] - the touch/mouse backend abstraction
//! - [`camera::Camera`] - perspective camera with screen-to-ray unprojection
//! - [`options::InputOptions`] - TOML-backed runtime configuration
//!
//! # Coordinate conventions
//!
//! Pointer positions are in *screen space*: origin bottom-left, Y up, units
//! of physical pixels. UI rects ([`geometry::Rect`]) live in *UI space*:
//! origin top-left, Y down. [`input::InputFacade::rect_contains`] reconciles
//! the two.
//!
//! # Architecture
//!
//! The facade owns a boxed [`input::PointerSource`] selected at startup from
//! [`options::Backend`] (platform-detected under `Backend::Auto`). The host
//! event loop feeds raw events in via `handle_event` and marks frame
//! boundaries with `begin_frame`; every query is then a pure function of the
//! current frame's state. All queries are total — they degrade to `false` or
//! a best-effort geometric result rather than erroring.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;

pub use camera::Camera;
pub use error::TactileError;
pub use geometry::{AabbCollider, Collider, Plane, Ray, Rect, SphereCollider};
pub use input::{InputFacade, MouseSource, PointerSource, TouchSource};
pub use options::{Backend, InputOptions};
