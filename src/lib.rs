// Paint circles onto a persistent canvas with the mouse.
// The window lives in `draw`; everything else is headless and testable.

pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod paint;
pub mod palette;
pub mod raster;
pub mod stroke;
pub mod types;
