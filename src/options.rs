//! Options shared by every renderer.
//!
//! [`PlotOptions`] is handed to renderers untouched by the dispatcher. It
//! deserializes with defaults for any field left out, so a configuration file
//! only needs to name what it changes:
//!
//! ```rust
//! # use chromaplot::{Decorations, PlotOptions};
//! let options: PlotOptions = serde_json::from_str(r#"{ "width": 400 }"#).unwrap();
//! assert_eq!(options.width, 400);
//! assert_eq!(options.height, PlotOptions::default().height);
//! assert!(options.decorations.contains(Decorations::OUTLINE));
//! ```

use bitflags::bitflags;
use serde::Deserialize;

use crate::{
    error::{PlotError, PlotResult},
    space::Component,
};

/// An 8-bit sRGB colour.
pub type Rgb8 = [u8; 3];

bitflags! {
    /// Optional furniture drawn around the points.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Decorations : u8 {
        /// The boundary of the space (line, triangle, hexagon, ...).
        const OUTLINE = 1 << 0;
        /// Labels on vertices or axis ends. Needs a font.
        const VERTICES = 1 << 1;
        /// A marker on the achromatic centre.
        const ACHROMATIC = 1 << 2;
        /// Axis lines, and the category boundaries of the categorical space.
        const AXES = 1 << 3;
        /// The spectral locus of the chromaticity diagram.
        const LOCUS = 1 << 4;
        /// Sample names next to their points. Needs a font.
        const NAMES = 1 << 5;
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations::all()
    }
}

/// Options controlling how a plot is drawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// Blank border around the plot in pixels.
    pub margin: u32,
    /// Radius of each point in pixels.
    pub point_radius: u32,
    /// Fill colour of the points. When unset, CIE plots fill each point with
    /// its own colour and every other plot uses the foreground colour.
    pub point_colour: Option<Rgb8>,
    /// Colour of the image background.
    pub background: Rgb8,
    /// Colour of outlines, axes and labels.
    pub foreground: Rgb8,
    /// Which decorations to draw.
    pub decorations: Decorations,
    /// Height of label text in pixels.
    pub label_size: f32,
    /// Title drawn at the top of the plot. Needs a font.
    pub title: Option<String>,
    /// Azimuth of the tetrahedral view, in degrees.
    pub theta: Component,
    /// Elevation of the tetrahedral view, in degrees.
    pub phi: Component,
    /// Half extent of the axes of the unbounded spaces (colour opponent
    /// coding and CIE-Lab). Each space has its own default.
    pub range: Option<Component>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            margin: 40,
            point_radius: 4,
            point_colour: None,
            background: [255, 255, 255],
            foreground: [0, 0, 0],
            decorations: Decorations::default(),
            label_size: 18.0,
            title: None,
            theta: 45.0,
            phi: 10.0,
            range: None,
        }
    }
}

impl PlotOptions {
    /// Set the image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the blank border around the plot.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set a single fill colour for every point.
    pub fn with_point_colour(mut self, colour: Rgb8) -> Self {
        self.point_colour = Some(colour);
        self
    }

    /// Set the background colour.
    pub fn with_background(mut self, colour: Rgb8) -> Self {
        self.background = colour;
        self
    }

    /// Set the point radius.
    pub fn with_point_radius(mut self, radius: u32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Set the decorations to draw.
    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tetrahedral view angles, in degrees.
    pub fn with_view(mut self, theta: Component, phi: Component) -> Self {
        self.theta = theta;
        self.phi = phi;
        self
    }

    /// Set the half extent of the unbounded axes.
    pub fn with_range(mut self, range: Component) -> Self {
        self.range = Some(range);
        self
    }

    /// Check that the options can produce a plot.
    pub fn validate(&self) -> PlotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::InvalidOptions(format!(
                "image size {}x{} is empty",
                self.width, self.height
            )));
        }

        if self.margin.saturating_mul(2) >= self.width.min(self.height) {
            return Err(PlotError::InvalidOptions(format!(
                "margin {} leaves no room in a {}x{} image",
                self.margin, self.width, self.height
            )));
        }

        if let Some(range) = self.range {
            if !(range.is_finite() && range > 0.0) {
                return Err(PlotError::InvalidOptions(format!(
                    "range must be positive, got {range}"
                )));
            }
        }

        if !(self.label_size.is_finite() && self.label_size > 0.0) {
            return Err(PlotError::InvalidOptions(format!(
                "label size must be positive, got {}",
                self.label_size
            )));
        }

        if !(self.theta.is_finite() && self.phi.is_finite()) {
            return Err(PlotError::InvalidOptions(
                "view angles must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// The range to use for a space whose default half extent is `default`.
    pub fn range_or(&self, default: Component) -> Component {
        self.range.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        PlotOptions::default().validate().unwrap();
    }

    #[test]
    fn rejects_empty_images() {
        let options = PlotOptions::default().with_size(0, 100);
        assert!(matches!(
            options.validate(),
            Err(PlotError::InvalidOptions(_))
        ));
    }

    #[test]
    fn rejects_margins_that_fill_the_image() {
        let options = PlotOptions::default().with_size(100, 60).with_margin(30);
        assert!(options.validate().is_err());

        let options = PlotOptions::default().with_size(100, 60).with_margin(29);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_range() {
        assert!(PlotOptions::default().with_range(0.0).validate().is_err());
        assert!(PlotOptions::default()
            .with_range(Component::NAN)
            .validate()
            .is_err());
        assert!(PlotOptions::default().with_range(5.0).validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: PlotOptions = serde_json::from_str(
            r#"{ "point_colour": [255, 0, 0], "decorations": "OUTLINE | AXES", "range": 20.0 }"#,
        )
        .unwrap();

        assert_eq!(options.point_colour, Some([255, 0, 0]));
        assert_eq!(options.decorations, Decorations::OUTLINE | Decorations::AXES);
        assert_eq!(options.range_or(12.0), 20.0);
        assert_eq!(options.width, 600);
        assert_eq!(options.theta, 45.0);
    }
}
