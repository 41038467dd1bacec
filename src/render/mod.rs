//! A [`Renderer`] that draws plots into raster images.
//!
//! ```rust
//! use chromaplot::{
//!     models::Trichromat, render::ImageRenderer, Colorspace, ColorspaceResult, PlotOptions,
//! };
//!
//! let result = ColorspaceResult::from(Colorspace::new(vec![
//!     Trichromat::new(0.2, 0.3, 0.5, 0.21, -0.04),
//! ]));
//!
//! let image = result
//!     .plot(&PlotOptions::default(), &mut ImageRenderer::new())
//!     .unwrap();
//! assert_eq!(image.dimensions(), (600, 600));
//! ```

use std::path::Path;

use image::RgbImage;
use rusttype::Font;
use tracing::info;

use crate::{
    dispatch::{Cie, Renderer},
    error::{PlotError, PlotResult},
    models::{Categorical, Coc, Dichromat, Hexagon, Tetrahedral, Trichromat},
    options::PlotOptions,
    result::{Colorspace, ColorspaceResult},
};

mod canvas;
mod cie;
mod opponent;
mod receptor;

pub use receptor::{HEXAGON, TETRAHEDRON, TRIANGLE};

/// Draws plots into an [`RgbImage`]. Text is only drawn when a font has been
/// given with [`ImageRenderer::with_font`].
#[derive(Default)]
pub struct ImageRenderer {
    font: Option<Font<'static>>,
}

impl ImageRenderer {
    /// Create a renderer that draws no text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the TrueType font in `data` for labels and titles.
    pub fn with_font(mut self, data: Vec<u8>) -> PlotResult<Self> {
        self.font = Some(Font::try_from_vec(data).ok_or(PlotError::Font)?);
        Ok(self)
    }

    fn font(&self) -> Option<&Font<'static>> {
        self.font.as_ref()
    }
}

impl Renderer for ImageRenderer {
    type Output = RgbImage;

    fn diplot(
        &mut self,
        data: &Colorspace<Dichromat>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(receptor::diplot(data, options, self.font()))
    }

    fn triplot(
        &mut self,
        data: &Colorspace<Trichromat>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(receptor::triplot(data, options, self.font()))
    }

    fn hexplot(
        &mut self,
        data: &Colorspace<Hexagon>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(receptor::hexplot(data, options, self.font()))
    }

    fn tcsplot(
        &mut self,
        data: &Colorspace<Tetrahedral>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(receptor::tcsplot(data, options, self.font()))
    }

    fn cocplot(
        &mut self,
        data: &Colorspace<Coc>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(opponent::cocplot(data, options, self.font()))
    }

    fn catplot(
        &mut self,
        data: &Colorspace<Categorical>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(opponent::catplot(data, options, self.font()))
    }

    fn cieplot(&mut self, data: Cie<'_>, options: &PlotOptions) -> PlotResult<Self::Output> {
        options.validate()?;
        Ok(match data {
            Cie::Xyz(data) => cie::xyzplot(data, options, self.font()),
            Cie::Lab(data) => cie::labplot(data, options, self.font()),
        })
    }
}

/// Plot `result` with an [`ImageRenderer`] and save the image to `path`. The
/// image format follows the file extension.
pub fn plot_to_file(
    result: &ColorspaceResult,
    options: &PlotOptions,
    renderer: &mut ImageRenderer,
    path: impl AsRef<Path>,
) -> PlotResult<()> {
    let image = result.plot(options, renderer)?;
    image.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), space = %result.space(), "plot written");
    Ok(())
}
