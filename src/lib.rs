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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-rendered solar system scene with point-of-interest camera
//! navigation, built on wgpu.
//!
//! The camera flies between planets one at a time. Scroll advances or
//! retreats along the ordered planet list (clamped at both ends, never
//! wrapping); clicking a planet jumps straight to it. Each move is an eased
//! tween, and input is ignored while one is in flight.
//!
//! # Key entry points
//!
//! - [`engine::SolarSystemEngine`] - GPU context, renderer, and scene
//! - [`engine::SceneView`] - the same scene without a GPU
//! - [`navigation::NavigationController`] - the index/transition state
//!   machine
//! - [`options::Options`] - TOML configuration (camera, navigation,
//!   planets, stars)
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread except texture loading: a
//! background [`assets::TextureLoader`] fetches and decodes planet maps
//! and the render thread drains finished loads each frame. A planet is
//! drawn and clickable only once its texture arrives; a failed load leaves
//! it invisible but still reachable by scrolling.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{SceneView, SolarSystemEngine};
pub use error::OrreryError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use navigation::{
    CommandOutcome, NavigationCommand, NavigationController, NavigationError,
};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
