//! Math utility functions.

use euclid::default::{Point2D, Transform2D, Transform3D, Vector3D};

use crate::space::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// A position in data coordinates.
pub type Point = Point2D<Component>;

/// Build a 3x3 transform. Arguments are the matrix columns, so that vectors
/// can be multiplied from the left with [`transform`].
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Rotation for viewing a 3D scene from azimuth `theta` and elevation `phi`
/// (both in degrees). After rotation the scene is viewed along the z axis,
/// so dropping z gives an orthographic projection.
pub fn view_rotation(theta: Component, phi: Component) -> Transform {
    use euclid::Angle;

    // Spin around the vertical axis first, then tilt towards the viewer.
    Transform::rotation(0.0, 0.0, 1.0, Angle::degrees(-theta))
        .then(&Transform::rotation(1.0, 0.0, 0.0, Angle::degrees(phi - 90.0)))
}

/// Project a 3D point to 2D with the given view rotation.
pub fn project(rotation: &Transform, p: [Component; 3]) -> Point {
    let [x, y, _] = transform(rotation, p);
    Point::new(x, y)
}

/// Map data coordinates inside `bounds` (min, max) onto a pixel rectangle
/// with the same aspect ratio, flipping the y axis so that up is up.
pub fn fit_transform(
    (min, max): (Point, Point),
    (left, top): (Component, Component),
    (width, height): (Component, Component),
) -> Transform2D<Component> {
    let span_x = (max.x - min.x).max(Component::EPSILON);
    let span_y = (max.y - min.y).max(Component::EPSILON);
    let scale = (width / span_x).min(height / span_y);

    // Centre the data inside the pixel rectangle.
    let offset_x = left + (width - span_x * scale) / 2.0;
    let offset_y = top + (height - span_y * scale) / 2.0;

    Transform2D::translation(-min.x, -max.y)
        .then_scale(scale, -scale)
        .then_translate(euclid::vec2(offset_x, offset_y))
}

/// Check whether a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Normalize a hue angle into the range `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn fit_transform_flips_and_centres() {
        let t = fit_transform(
            (Point::new(-1.0, -1.0), Point::new(1.0, 1.0)),
            (10.0, 10.0),
            (200.0, 100.0),
        );

        // Square data in a wide rectangle is centred horizontally.
        let top_left = t.transform_point(Point::new(-1.0, 1.0));
        assert_component_eq!(top_left.x, 60.0);
        assert_component_eq!(top_left.y, 10.0);

        let bottom_right = t.transform_point(Point::new(1.0, -1.0));
        assert_component_eq!(bottom_right.x, 160.0);
        assert_component_eq!(bottom_right.y, 110.0);

        let centre = t.transform_point(Point::new(0.0, 0.0));
        assert_component_eq!(centre.x, 110.0);
        assert_component_eq!(centre.y, 60.0);
    }

    #[test]
    fn top_down_view_keeps_plane() {
        // Looking straight down (phi = 90) with no spin is the identity on x, y.
        let r = view_rotation(0.0, 90.0);
        let p = project(&r, [0.25, -0.5, 0.75]);
        assert_component_eq!(p.x, 0.25);
        assert_component_eq!(p.y, -0.5);
    }

    #[test]
    fn side_view_shows_height() {
        // Looking from the side (phi = 0) the z axis becomes vertical.
        let r = view_rotation(0.0, 0.0);
        let p = project(&r, [0.0, 0.0, 0.75]);
        assert_component_eq!(p.x, 0.0);
        assert_component_eq!(p.y.abs(), 0.75);
    }

    #[test]
    fn hue_is_normalized() {
        assert_component_eq!(normalize_hue(-90.0), 270.0);
        assert_component_eq!(normalize_hue(360.0), 0.0);
        assert!(almost_zero(0.0));
        assert!(!almost_zero(0.01));
    }
}
