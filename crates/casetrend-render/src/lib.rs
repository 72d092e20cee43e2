//! Chart rendering for wide case tables.
//!
//! The pipeline talks to the [`Renderer`] trait so the drawing backend stays
//! replaceable; [`ChartRenderer`] is the plotters-backed implementation that
//! writes PNG or SVG files.

mod chart;
mod format;

pub use chart::{ChartRenderer, ImageFormat, RenderOptions, Renderer};
pub use format::format_thousands;
