//! Plots of the opponent spaces.

use image::RgbImage;
use rusttype::Font;

use super::canvas::{Anchor, Canvas};
use crate::{
    math::Point,
    models::{Categorical, Coc, Planar},
    options::{Decorations, PlotOptions, Rgb8},
    result::Colorspace,
    space::Component,
};

/// Default half extent of the colour-opponent-coding axes.
pub const COC_RANGE: Component = 12.0;

/// Draw the colour-opponent-coding plane, spanning `±range`.
pub fn cocplot(
    data: &Colorspace<Coc>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let half = options.range_or(COC_RANGE);
    let pad = half * 1.15;
    let mut canvas = Canvas::new(options, font, (Point::new(-pad, -pad), Point::new(pad, pad)));

    canvas.square_frame(half, ["A", "B"]);
    canvas.points(points(data, options));
    canvas.finish()
}

/// Draw the categorical plane split into its four fly categories.
pub fn catplot(
    data: &Colorspace<Categorical>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-1.15, -1.15), Point::new(1.15, 1.15)),
    );

    // Quadrant names follow the sign convention of `Categorical::category`.
    if canvas.shows(Decorations::VERTICES) {
        canvas.label(Point::new(0.5, 0.5), "S L", Anchor::Above);
        canvas.label(Point::new(-0.5, 0.5), "U L", Anchor::Above);
        canvas.label(Point::new(-0.5, -0.5), "U M", Anchor::Below);
        canvas.label(Point::new(0.5, -0.5), "S M", Anchor::Below);
    }

    canvas.square_frame(1.0, ["x", "y"]);
    canvas.points(points(data, options));
    canvas.finish()
}

/// The points of a planar result, all filled alike.
fn points<'d, M: Planar>(
    data: &'d Colorspace<M>,
    options: &PlotOptions,
) -> impl Iterator<Item = (Point, Rgb8, Option<&'d str>)> + 'd {
    let fill = options.point_colour.unwrap_or(options.foreground);
    data.points.iter().enumerate().map(move |(i, p)| {
        let (x, y) = p.xy();
        (Point::new(x, y), fill, data.name(i))
    })
}
