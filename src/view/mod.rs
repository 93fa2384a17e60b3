//! Presentation layer.
//!
//! A single [`RoutineView`] is built from the current state and handed to
//! one of two renderers, chosen by [`Orientation`]. Both renderers show the
//! same content; only the arrangement differs.

pub mod input;
mod model;
pub mod render;
mod strings;
mod theme;

pub use input::{map_key, Intent};
pub use model::{Controls, Orientation, OrientationMode, RoutineView};
pub use render::draw;
pub use strings::{Locale, Strings};
pub use theme::Palette;
