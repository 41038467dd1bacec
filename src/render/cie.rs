//! Plots of the CIE spaces: the chromaticity diagram and the `a*, b*` plane.

use image::RgbImage;
use rusttype::Font;

use super::canvas::{Anchor, Canvas};
use crate::{
    convert::to_rgb8,
    math::Point,
    models::{CieLab, CieXyz},
    options::{Decorations, PlotOptions},
    result::Colorspace,
    space::Component,
};

/// Default half extent of the `a*` and `b*` axes.
pub const LAB_RANGE: Component = 128.0;

/// Chromaticity of the CIE 1931 2° spectral locus, from 380nm to 700nm.
#[rustfmt::skip]
const SPECTRAL_LOCUS: [(u16, Component, Component); 22] = [
    (380, 0.1741, 0.0050), (400, 0.1733, 0.0048), (420, 0.1714, 0.0051),
    (440, 0.1644, 0.0109), (460, 0.1440, 0.0297), (470, 0.1241, 0.0578),
    (480, 0.0913, 0.1327), (490, 0.0454, 0.2950), (500, 0.0082, 0.5384),
    (510, 0.0139, 0.7502), (520, 0.0743, 0.8338), (530, 0.1547, 0.8059),
    (540, 0.2296, 0.7543), (550, 0.3016, 0.6923), (560, 0.3731, 0.6245),
    (570, 0.4441, 0.5547), (580, 0.5125, 0.4866), (590, 0.5752, 0.4242),
    (600, 0.6270, 0.3725), (620, 0.6915, 0.3083), (640, 0.7190, 0.2809),
    (700, 0.7347, 0.2653),
];

/// Wavelengths labelled along the locus.
const LOCUS_LABELS: [u16; 5] = [460, 500, 520, 560, 620];

/// Achromatic point of the chromaticity diagram (equal energy white).
const EQUAL_ENERGY: (Component, Component) = (1.0 / 3.0, 1.0 / 3.0);

/// Draw the CIE 1931 chromaticity diagram.
pub fn xyzplot(
    data: &Colorspace<CieXyz>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-0.05, -0.05), Point::new(0.85, 0.95)),
    );

    if canvas.shows(Decorations::AXES) {
        canvas.polyline(&[
            Point::new(0.0, 0.9),
            Point::new(0.0, 0.0),
            Point::new(0.8, 0.0),
        ]);
    }
    if canvas.shows(Decorations::VERTICES) {
        canvas.label(Point::new(0.8, 0.0), "x", Anchor::Below);
        canvas.label(Point::new(0.0, 0.9), "y", Anchor::Left);
    }
    if canvas.shows(Decorations::LOCUS) {
        let locus: Vec<Point> = SPECTRAL_LOCUS
            .iter()
            .map(|&(_, x, y)| Point::new(x, y))
            .collect();
        // Closed by the line of purples.
        canvas.polygon(&locus);

        for &(nm, x, y) in SPECTRAL_LOCUS.iter() {
            if LOCUS_LABELS.contains(&nm) {
                let anchor = if x < EQUAL_ENERGY.0 { Anchor::Left } else { Anchor::Right };
                canvas.label(Point::new(x, y), &nm.to_string(), anchor);
            }
        }
    }
    if canvas.shows(Decorations::ACHROMATIC) {
        canvas.achromatic(Point::new(EQUAL_ENERGY.0, EQUAL_ENERGY.1));
    }

    canvas.points(data.points.iter().enumerate().map(|(i, p)| {
        let fill = options
            .point_colour
            .unwrap_or_else(|| to_rgb8(p.to_srgb()));
        (Point::new(p.x, p.y), fill, data.name(i))
    }));

    canvas.finish()
}

/// Draw the `a*, b*` plane of CIE-Lab, spanning `±range`.
pub fn labplot(
    data: &Colorspace<CieLab>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let half = options.range_or(LAB_RANGE);
    let pad = half * 1.15;
    let mut canvas = Canvas::new(options, font, (Point::new(-pad, -pad), Point::new(pad, pad)));

    canvas.square_frame(half, ["a*", "b*"]);

    // Lightness is not shown by position, so draw dark points first.
    let mut order: Vec<(usize, &CieLab)> = data.points.iter().enumerate().collect();
    order.sort_by(|(_, a), (_, b)| a.lightness.total_cmp(&b.lightness));

    canvas.points(order.into_iter().map(|(i, p)| {
        let fill = options
            .point_colour
            .unwrap_or_else(|| to_rgb8(p.to_srgb()));
        (Point::new(p.a, p.b), fill, data.name(i))
    }));

    canvas.finish()
}
