//! Conversions used to fill points with their own colour. Only the paths the
//! CIE plots need are implemented: Lab to XYZ, and XYZ to gamma encoded sRGB.
//!
//! All XYZ values are relative to a D65 white with `Y = 1`.

use crate::{
    math::{transform, transform_3x3, Transform},
    space::Component,
};

/// The D65 reference white.
#[allow(clippy::excessive_precision)]
pub const D65: [Component; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

/// Convert CIE-Lab against a D65 white to CIE-XYZ.
pub fn lab_to_xyz([lightness, a, b]: [Component; 3]) -> [Component; 3] {
    const KAPPA: Component = 24389.0 / 27.0;
    const EPSILON: Component = 216.0 / 24389.0;

    let f1 = (lightness + 16.0) / 116.0;
    let f0 = f1 + a / 500.0;
    let f2 = f1 - b / 200.0;

    let f0_cubed = f0 * f0 * f0;
    let x = if f0_cubed > EPSILON {
        f0_cubed
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lightness / KAPPA
    };

    let f2_cubed = f2 * f2 * f2;
    let z = if f2_cubed > EPSILON {
        f2_cubed
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    [x * D65[0], y * D65[1], z * D65[2]]
}

/// Convert CIE-XYZ to linear light sRGB.
pub fn xyz_to_linear_srgb(xyz: [Component; 3]) -> [Component; 3] {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
        -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
        -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
    );

    transform(&FROM_XYZ, xyz)
}

/// Apply the sRGB transfer function to linear light components.
pub fn gamma_encode(linear: [Component; 3]) -> [Component; 3] {
    linear.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Convert CIE-XYZ to gamma encoded sRGB. Out of gamut colours are not
/// clamped.
pub fn xyz_to_srgb(xyz: [Component; 3]) -> [Component; 3] {
    gamma_encode(xyz_to_linear_srgb(xyz))
}

/// Clamp gamma encoded components into 8-bit channels.
pub fn to_rgb8(srgb: [Component; 3]) -> [u8; 3] {
    srgb.map(|c| {
        if c.is_nan() {
            0
        } else {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
    })
}
