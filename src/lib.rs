//! blockwave: a square grid of extruded blocks whose colors and heights
//! reroll to new data-driven targets with a staggered, synchronized-finish
//! wave. The animation core (grid layout, drivers, clock, per-cell
//! interpolation) is pure and deterministic; wgpu rendering and the winit
//! window sit behind narrow seams.

pub mod camera;
pub mod clock;
pub mod drivers;
pub mod field;
pub mod grid;
pub mod palette;
#[cfg(feature = "play")]
pub mod play;
pub mod render;
pub mod renderer;
pub mod scene;
pub mod schema;
