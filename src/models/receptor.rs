//! Models for the receptor-based spaces: the dichromat line, the Maxwell
//! triangle, the colour hexagon and the tetrahedral colour space.
//!
//! The `u`, `s`, `m` and `l` columns hold the relative quantum catches (or
//! excitations, for the hexagon) of the ultraviolet, short, medium and long
//! wavelength receptors.

use crate::{
    math::{almost_zero, normalize_hue},
    models::Planar,
    space::{Component, HasSpace, Space},
};

chromaplot_macros::gen_model! {
    /// A point in dichromatic space.
    pub struct Dichromat {
        /// Short wavelength receptor catch.
        s: Component,
        /// Long wavelength receptor catch.
        l: Component,
        /// Position on the opponent axis.
        x: Component,
    }
}

impl HasSpace for Dichromat {
    const SPACE: Space = Space::Dichromat;
}

impl Dichromat {
    /// Distance of the point from the achromatic centre.
    pub fn chroma(&self) -> Component {
        self.x.abs()
    }
}

chromaplot_macros::gen_model! {
    /// A point in the trichromatic Maxwell triangle.
    pub struct Trichromat {
        /// Short wavelength receptor catch.
        s: Component,
        /// Medium wavelength receptor catch.
        m: Component,
        /// Long wavelength receptor catch.
        l: Component,
        /// Horizontal position in the triangle.
        x: Component,
        /// Vertical position in the triangle.
        y: Component,
    }
}

impl HasSpace for Trichromat {
    const SPACE: Space = Space::Trichromat;
}

impl Planar for Trichromat {
    fn xy(&self) -> (Component, Component) {
        (self.x, self.y)
    }
}

chromaplot_macros::gen_model! {
    /// A point in the colour hexagon.
    pub struct Hexagon {
        /// Short wavelength receptor excitation.
        s: Component,
        /// Medium wavelength receptor excitation.
        m: Component,
        /// Long wavelength receptor excitation.
        l: Component,
        /// Horizontal position in the hexagon.
        x: Component,
        /// Vertical position in the hexagon.
        y: Component,
    }
}

impl HasSpace for Hexagon {
    const SPACE: Space = Space::Hexagon;
}

impl Planar for Hexagon {
    fn xy(&self) -> (Component, Component) {
        (self.x, self.y)
    }
}

chromaplot_macros::gen_model! {
    /// A point in the tetrahedral colour space.
    pub struct Tetrahedral {
        /// Ultraviolet receptor catch.
        u: Component,
        /// Short wavelength receptor catch.
        s: Component,
        /// Medium wavelength receptor catch.
        m: Component,
        /// Long wavelength receptor catch.
        l: Component,
        /// Cartesian x coordinate.
        x: Component,
        /// Cartesian y coordinate.
        y: Component,
        /// Cartesian z coordinate, towards the ultraviolet vertex.
        z: Component,
    }
}

impl HasSpace for Tetrahedral {
    const SPACE: Space = Space::Tetrahedral;
}

impl Tetrahedral {
    /// Distance of the point from the achromatic centre.
    pub fn chroma(&self) -> Component {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Hue angle in the x, y plane, in degrees. `NaN` on the z axis.
    pub fn hue_theta(&self) -> Component {
        if almost_zero(self.x.hypot(self.y)) {
            Component::NAN
        } else {
            normalize_hue(self.y.atan2(self.x).to_degrees())
        }
    }

    /// Elevation of the hue above the x, y plane, in degrees. `NaN` at the
    /// achromatic centre.
    pub fn hue_phi(&self) -> Component {
        let r = self.chroma();
        if almost_zero(r) {
            Component::NAN
        } else {
            (self.z / r).asin().to_degrees()
        }
    }

    /// The cartesian position.
    pub fn xyz(&self) -> [Component; 3] {
        [self.x, self.y, self.z]
    }
}
