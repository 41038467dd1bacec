//! chromaplot draws colour-space results: points classified into one of the
//! perceptual colour spaces used in visual ecology and colour science.
//!
//! A [`ColorspaceResult`] is tagged with its [`Space`]. [`plot`] hands it to
//! the method of a [`Renderer`] that draws that space, and
//! [`render::ImageRenderer`] is a renderer that draws into images.

#![deny(missing_docs)]

mod convert;
mod dispatch;
mod error;
mod math;
pub mod models;
mod options;
pub mod render;
mod result;
mod space;


pub use dispatch::{plot, plot_raw, Cie, Renderer};
pub use error::{PlotError, PlotResult};
pub use options::{Decorations, PlotOptions, Rgb8};
pub use result::{Colorspace, ColorspaceResult, RawColorspace};
pub use space::{Component, HasSpace, Space};
