//! A raster canvas addressed in data coordinates.

use euclid::default::Transform2D;
use image::{Rgb, RgbImage};
use imageproc::drawing;
use rusttype::{Font, Scale};
use tracing::{trace, warn};

use crate::{
    math::{fit_transform, Point},
    options::{Decorations, PlotOptions, Rgb8},
    space::Component,
};

/// Which side of an anchor point a label is placed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Centred above the point.
    Above,
    /// Centred below the point.
    Below,
    /// To the left, vertically centred.
    Left,
    /// To the right, vertically centred.
    Right,
}

/// An image being drawn, with a transform from data to pixel coordinates.
pub struct Canvas<'a> {
    image: RgbImage,
    to_pixel: Transform2D<Component>,
    bounds: (Point, Point),
    options: &'a PlotOptions,
    font: Option<&'a Font<'static>>,
    outside: usize,
}

impl<'a> Canvas<'a> {
    /// Create a canvas showing the data rectangle `bounds` (min, max). Room
    /// is kept at the top for the title when one will be drawn.
    pub fn new(
        options: &'a PlotOptions,
        font: Option<&'a Font<'static>>,
        bounds: (Point, Point),
    ) -> Self {
        let margin = options.margin as Component;
        let title_room = match (&options.title, font) {
            (Some(_), Some(_)) => options.label_size as Component * 1.5,
            _ => 0.0,
        };

        let width = (options.width as Component - 2.0 * margin).max(1.0);
        let height = (options.height as Component - 2.0 * margin - title_room).max(1.0);
        let to_pixel = fit_transform(bounds, (margin, margin + title_room), (width, height));

        trace!(?bounds, width, height, "canvas");

        Self {
            image: RgbImage::from_pixel(options.width, options.height, Rgb(options.background)),
            to_pixel,
            bounds,
            options,
            font,
            outside: 0,
        }
    }

    /// Whether the given decoration should be drawn.
    pub fn shows(&self, decoration: Decorations) -> bool {
        self.options.decorations.contains(decoration)
    }

    fn pixel(&self, p: Point) -> (f32, f32) {
        let p = self.to_pixel.transform_point(p);
        (p.x as f32, p.y as f32)
    }

    /// Whether a pixel position lies within `reach` pixels of the image. Only
    /// such positions are safe to round to `i32` and offset.
    fn near_image(&self, (x, y): (f32, f32), reach: f32) -> bool {
        let (width, height) = self.image.dimensions();
        x >= -reach && y >= -reach && x <= width as f32 + reach && y <= height as f32 + reach
    }

    /// Draw a line in the foreground colour.
    pub fn line(&mut self, a: Point, b: Point) {
        let (a, b) = (self.pixel(a), self.pixel(b));
        drawing::draw_line_segment_mut(&mut self.image, a, b, Rgb(self.options.foreground));
    }

    /// Draw a closed polygon outline in the foreground colour.
    pub fn polygon(&mut self, vertices: &[Point]) {
        self.polyline(vertices);
        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            self.line(*last, *first);
        }
    }

    /// Draw connected line segments in the foreground colour.
    pub fn polyline(&mut self, vertices: &[Point]) {
        for pair in vertices.windows(2) {
            self.line(pair[0], pair[1]);
        }
    }

    /// Mark the achromatic centre with a cross.
    pub fn achromatic(&mut self, p: Point) {
        let (x, y) = self.pixel(p);
        let (x, y) = (x.round() as i32, y.round() as i32);
        let arm = self.options.point_radius.max(3) as i32;
        let colour = Rgb(self.options.foreground);

        drawing::draw_line_segment_mut(
            &mut self.image,
            ((x - arm) as f32, y as f32),
            ((x + arm) as f32, y as f32),
            colour,
        );
        drawing::draw_line_segment_mut(
            &mut self.image,
            (x as f32, (y - arm) as f32),
            (x as f32, (y + arm) as f32),
            colour,
        );
    }

    /// Draw a data point filled with `fill` and ringed in the foreground
    /// colour. Points outside the canvas bounds are counted and drawn anyway
    /// where they still land on the image.
    pub fn point(&mut self, p: Point, fill: Rgb8) {
        if !p.x.is_finite() || !p.y.is_finite() {
            self.outside += 1;
            return;
        }

        let (min, max) = self.bounds;
        if p.x < min.x || p.x > max.x || p.y < min.y || p.y > max.y {
            self.outside += 1;
        }

        let radius = self.options.point_radius.min(i32::MAX as u32) as i32;
        let pixel = self.pixel(p);
        if !self.near_image(pixel, radius as f32) {
            trace!(?p, "point off the image");
            return;
        }

        let (x, y) = pixel;
        let centre = (x.round() as i32, y.round() as i32);

        drawing::draw_filled_circle_mut(&mut self.image, centre, radius, Rgb(fill));
        if radius > 1 {
            drawing::draw_hollow_circle_mut(
                &mut self.image,
                centre,
                radius,
                Rgb(self.options.foreground),
            );
        }
    }

    /// Draw `text` next to `p`. Does nothing without a font.
    pub fn label(&mut self, p: Point, text: &str, anchor: Anchor) {
        let Some(font) = self.font else {
            trace!(text, "no font, label skipped");
            return;
        };

        let scale = Scale::uniform(self.options.label_size);
        let (w, h) = drawing::text_size(scale, font, text);
        let gap = self.options.point_radius.min(u16::MAX as u32) as i32 + 4;

        let pixel = self.pixel(p);
        if !self.near_image(pixel, (w.max(h) + gap) as f32) {
            trace!(text, "label off the image");
            return;
        }

        let (x, y) = (pixel.0.round() as i32, pixel.1.round() as i32);

        let (x, y) = match anchor {
            Anchor::Above => (x - w / 2, y - h - gap),
            Anchor::Below => (x - w / 2, y + gap),
            Anchor::Left => (x - w - gap, y - h / 2),
            Anchor::Right => (x + gap, y - h / 2),
        };

        drawing::draw_text_mut(
            &mut self.image,
            Rgb(self.options.foreground),
            x,
            y,
            scale,
            font,
            text,
        );
    }

    /// Draw the sample names of `points` next to them, if asked to.
    pub fn names<'n>(&mut self, points: impl IntoIterator<Item = (Point, Option<&'n str>)>) {
        if !self.shows(Decorations::NAMES) {
            return;
        }

        for (p, name) in points {
            if let Some(name) = name {
                self.label(p, name, Anchor::Right);
            }
        }
    }

    /// Draw the frame of a square plane spanning `±half` on both axes: its
    /// outline, the axes through the origin, the axis labels and the
    /// achromatic marker at the origin.
    pub fn square_frame(&mut self, half: Component, labels: [&str; 2]) {
        if self.shows(Decorations::OUTLINE) {
            self.polygon(&[
                Point::new(-half, -half),
                Point::new(half, -half),
                Point::new(half, half),
                Point::new(-half, half),
            ]);
        }
        if self.shows(Decorations::AXES) {
            self.line(Point::new(-half, 0.0), Point::new(half, 0.0));
            self.line(Point::new(0.0, -half), Point::new(0.0, half));
        }
        if self.shows(Decorations::VERTICES) {
            self.label(Point::new(half, 0.0), labels[0], Anchor::Right);
            self.label(Point::new(0.0, half), labels[1], Anchor::Above);
        }
        if self.shows(Decorations::ACHROMATIC) {
            self.achromatic(Point::origin());
        }
    }

    /// Draw each point with its own fill, then the names.
    pub fn points<'n>(
        &mut self,
        points: impl IntoIterator<Item = (Point, Rgb8, Option<&'n str>)>,
    ) {
        let points: Vec<_> = points.into_iter().collect();
        for &(p, fill, _) in &points {
            self.point(p, fill);
        }
        self.names(points.into_iter().map(|(p, _, name)| (p, name)));
    }

    /// Draw the title, finish the image and report points outside the
    /// bounds.
    pub fn finish(mut self) -> RgbImage {
        if let (Some(title), Some(font)) = (&self.options.title, self.font) {
            let scale = Scale::uniform(self.options.label_size * 1.2);
            let (w, _) = drawing::text_size(scale, font, title);
            let x = (self.options.width as i32 - w) / 2;
            let y = self.options.margin as i32 / 2;
            drawing::draw_text_mut(
                &mut self.image,
                Rgb(self.options.foreground),
                x,
                y,
                scale,
                font,
                title,
            );
        }

        if self.outside > 0 {
            warn!(points = self.outside, "points fall outside the plotted space");
        }

        self.image
    }
}
