//! Models for the CIE spaces.
//!
//! Tristimulus values are relative to a white with `Y = 1`.

use crate::{
    convert::{lab_to_xyz, xyz_to_srgb},
    space::{Component, HasSpace, Space},
};

chromaplot_macros::gen_model! {
    /// A colour in CIE-XYZ, with its chromaticity coordinates.
    pub struct CieXyz {
        /// X tristimulus value.
        #[column = "X"]
        big_x: Component,
        /// Y tristimulus value.
        #[column = "Y"]
        big_y: Component,
        /// Z tristimulus value.
        #[column = "Z"]
        big_z: Component,
        /// x chromaticity coordinate.
        x: Component,
        /// y chromaticity coordinate.
        y: Component,
        /// z chromaticity coordinate.
        z: Component,
    }
}

impl HasSpace for CieXyz {
    const SPACE: Space = Space::CieXyz;
}

impl CieXyz {
    /// The gamma encoded sRGB colour of this point, unclamped.
    pub fn to_srgb(&self) -> [Component; 3] {
        xyz_to_srgb([self.big_x, self.big_y, self.big_z])
    }
}

chromaplot_macros::gen_model! {
    /// A colour in CIE-Lab, with the tristimulus values it was computed from.
    pub struct CieLab {
        /// X tristimulus value.
        #[column = "X"]
        big_x: Component,
        /// Y tristimulus value.
        #[column = "Y"]
        big_y: Component,
        /// Z tristimulus value.
        #[column = "Z"]
        big_z: Component,
        /// Lightness.
        #[column = "L"]
        lightness: Component,
        /// The green-red opponent axis.
        a: Component,
        /// The blue-yellow opponent axis.
        b: Component,
    }
}

impl HasSpace for CieLab {
    const SPACE: Space = Space::CieLab;
}

impl CieLab {
    /// The gamma encoded sRGB colour of this point, unclamped. Computed from
    /// the Lab coordinates against a D65 white.
    pub fn to_srgb(&self) -> [Component; 3] {
        xyz_to_srgb(lab_to_xyz([self.lightness, self.a, self.b]))
    }

    /// Chroma in the `a*, b*` plane.
    pub fn chroma(&self) -> Component {
        self.a.hypot(self.b)
    }
}
