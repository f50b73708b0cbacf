//! Painters for each canvas view.
//!
//! Painters only talk to a [`Surface`], so the same code draws into the
//! browser canvas and into a [`DrawList`] under test.

pub mod heat;
pub mod histogram;
pub mod network;
pub mod scatter;
pub mod surface;

pub use heat::paint_heat_map;
pub use histogram::paint_histogram;
pub use network::{paint_families, paint_network};
pub use scatter::paint_scatter;
pub use surface::{DrawCommand, DrawList, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
