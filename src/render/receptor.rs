//! Plots of the receptor-based spaces.

use image::RgbImage;
use num_traits::FloatConst;
use rusttype::Font;
use tracing::trace;

use super::canvas::{Anchor, Canvas};
use crate::{
    math::{project, transform, view_rotation, Point},
    models::{Dichromat, Hexagon, Tetrahedral, Trichromat},
    options::{Decorations, PlotOptions},
    result::Colorspace,
    space::Component,
};

/// Vertices of the Maxwell triangle: S, M and L.
#[allow(clippy::excessive_precision)]
pub const TRIANGLE: [[Component; 2]; 3] = [
    [-0.7071067811865476, -0.4082482904638631],
    [0.0, 0.816496580927726],
    [0.7071067811865476, -0.4082482904638631],
];

/// Receptor vertices of the colour hexagon: S, M and L.
#[allow(clippy::excessive_precision)]
pub const HEXAGON: [[Component; 2]; 3] = [
    [-0.8660254037844386, -0.5],
    [0.0, 1.0],
    [0.8660254037844386, -0.5],
];

/// Vertices of the tetrahedral colour space: U, S, M and L.
#[allow(clippy::excessive_precision)]
pub const TETRAHEDRON: [[Component; 3]; 4] = [
    [0.0, 0.0, 0.75],
    [-0.6123724356957945, -0.3535533905932738, -0.25],
    [0.0, 0.7071067811865476, -0.25],
    [0.6123724356957945, -0.3535533905932738, -0.25],
];

fn point([x, y]: [Component; 2]) -> Point {
    Point::new(x, y)
}

fn fill(options: &PlotOptions) -> [u8; 3] {
    options.point_colour.unwrap_or(options.foreground)
}

/// Draw dichromatic points on the S-L axis.
pub fn diplot(
    data: &Colorspace<Dichromat>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let end = Component::FRAC_1_SQRT_2();
    let (s, l) = (Point::new(-end, 0.0), Point::new(end, 0.0));
    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-0.85, -0.25), Point::new(0.85, 0.25)),
    );

    if canvas.shows(Decorations::OUTLINE) {
        canvas.line(s, l);
    }
    if canvas.shows(Decorations::VERTICES) {
        canvas.label(s, "S", Anchor::Left);
        canvas.label(l, "L", Anchor::Right);
    }
    if canvas.shows(Decorations::ACHROMATIC) {
        canvas.achromatic(Point::origin());
    }

    for p in &data.points {
        canvas.point(Point::new(p.x, 0.0), fill(options));
    }
    canvas.names(
        data.points
            .iter()
            .enumerate()
            .map(|(i, p)| (Point::new(p.x, 0.0), data.name(i))),
    );

    canvas.finish()
}

/// Draw trichromatic points in the Maxwell triangle.
pub fn triplot(
    data: &Colorspace<Trichromat>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let [s, m, l] = TRIANGLE.map(point);
    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-0.85, -0.55), Point::new(0.85, 0.95)),
    );

    if canvas.shows(Decorations::OUTLINE) {
        canvas.polygon(&[s, m, l]);
    }
    if canvas.shows(Decorations::AXES) {
        // Medians, meeting at the achromatic centre.
        canvas.line(s, m.lerp(l, 0.5));
        canvas.line(m, l.lerp(s, 0.5));
        canvas.line(l, s.lerp(m, 0.5));
    }
    if canvas.shows(Decorations::VERTICES) {
        canvas.label(s, "S", Anchor::Left);
        canvas.label(m, "M", Anchor::Above);
        canvas.label(l, "L", Anchor::Right);
    }
    if canvas.shows(Decorations::ACHROMATIC) {
        canvas.achromatic(Point::origin());
    }

    for p in &data.points {
        canvas.point(Point::new(p.x, p.y), fill(options));
    }
    canvas.names(
        data.points
            .iter()
            .enumerate()
            .map(|(i, p)| (Point::new(p.x, p.y), data.name(i))),
    );

    canvas.finish()
}

/// The six corners of the unit colour hexagon, counter clockwise from 30°.
pub(crate) fn hexagon_corners() -> [Point; 6] {
    let step = Component::FRAC_PI_3();
    let start = Component::FRAC_PI_6();
    std::array::from_fn(|i| {
        let angle = start + step * i as Component;
        Point::new(angle.cos(), angle.sin())
    })
}

/// Draw points in the colour hexagon.
pub fn hexplot(
    data: &Colorspace<Hexagon>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let corners = hexagon_corners();
    let [s, m, l] = HEXAGON.map(point);
    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-1.15, -1.15), Point::new(1.15, 1.15)),
    );

    if canvas.shows(Decorations::OUTLINE) {
        canvas.polygon(&corners);
    }
    if canvas.shows(Decorations::AXES) {
        for i in 0..3 {
            canvas.line(corners[i], corners[i + 3]);
        }
    }
    if canvas.shows(Decorations::VERTICES) {
        canvas.label(s, "S", Anchor::Left);
        canvas.label(m, "M", Anchor::Above);
        canvas.label(l, "L", Anchor::Right);
    }
    if canvas.shows(Decorations::ACHROMATIC) {
        canvas.achromatic(Point::origin());
    }

    for p in &data.points {
        canvas.point(Point::new(p.x, p.y), fill(options));
    }
    canvas.names(
        data.points
            .iter()
            .enumerate()
            .map(|(i, p)| (Point::new(p.x, p.y), data.name(i))),
    );

    canvas.finish()
}

/// Draw the tetrahedral space from the configured view.
pub fn tcsplot(
    data: &Colorspace<Tetrahedral>,
    options: &PlotOptions,
    font: Option<&Font<'static>>,
) -> RgbImage {
    let rotation = view_rotation(options.theta, options.phi);
    let vertices = TETRAHEDRON.map(|v| project(&rotation, v));
    trace!(theta = options.theta, phi = options.phi, ?vertices, "tetrahedron");

    let mut canvas = Canvas::new(
        options,
        font,
        (Point::new(-0.85, -0.85), Point::new(0.85, 0.85)),
    );

    if canvas.shows(Decorations::OUTLINE) {
        for i in 0..4 {
            for j in i + 1..4 {
                canvas.line(vertices[i], vertices[j]);
            }
        }
    }
    if canvas.shows(Decorations::AXES) {
        for v in vertices {
            canvas.line(Point::origin(), v);
        }
    }
    if canvas.shows(Decorations::VERTICES) {
        for (v, name) in vertices.iter().zip(["U", "S", "M", "L"]) {
            let anchor = if v.y >= 0.0 { Anchor::Above } else { Anchor::Below };
            canvas.label(*v, name, anchor);
        }
    }
    if canvas.shows(Decorations::ACHROMATIC) {
        canvas.achromatic(Point::origin());
    }

    // Far points first, so that near points are drawn over them.
    let mut order: Vec<(Component, Point, usize)> = data
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let [x, y, depth] = transform(&rotation, p.xyz());
            (depth, Point::new(x, y), i)
        })
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, p, _) in &order {
        canvas.point(*p, fill(options));
    }
    canvas.names(order.iter().map(|(_, p, i)| (*p, data.name(*i))));

    canvas.finish()
}
