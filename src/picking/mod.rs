//! CPU ray picking against planet bounding spheres.
//!
//! Only bodies whose texture has loaded are registered, so a click on a
//! planet that is still loading (or failed to load) hits nothing.

#[allow(clippy::module_inception)]
mod picking;

pub use picking::{HitRegistry, Picker};
