//! Models for the opponent spaces used with insect vision: the
//! colour-opponent-coding space and the categorical fly space.

use crate::{
    models::Planar,
    space::{Component, HasSpace, Space},
};

chromaplot_macros::gen_model! {
    /// A point in the colour-opponent-coding space.
    pub struct Coc {
        /// Short wavelength receptor excitation.
        s: Component,
        /// Medium wavelength receptor excitation.
        m: Component,
        /// Long wavelength receptor excitation.
        l: Component,
        /// The A opponent channel.
        x: Component,
        /// The B opponent channel.
        y: Component,
    }
}

impl HasSpace for Coc {
    const SPACE: Space = Space::Coc;
}

impl Planar for Coc {
    fn xy(&self) -> (Component, Component) {
        (self.x, self.y)
    }
}

impl Coc {
    /// Distance from the achromatic centre in the city-block metric, which
    /// is how colour differences are measured in this space.
    pub fn city_block(&self) -> Component {
        self.x.abs() + self.y.abs()
    }
}

chromaplot_macros::gen_model! {
    /// A point in the categorical fly colour space.
    pub struct Categorical {
        /// Ultraviolet receptor catch.
        u: Component,
        /// Short wavelength receptor catch.
        s: Component,
        /// Medium wavelength receptor catch.
        m: Component,
        /// Long wavelength receptor catch.
        l: Component,
        /// The `u`/`s` opponent channel, positive when `s` dominates.
        x: Component,
        /// The `m`/`l` opponent channel, positive when `l` dominates.
        y: Component,
    }
}

impl HasSpace for Categorical {
    const SPACE: Space = Space::Categorical;
}

impl Planar for Categorical {
    fn xy(&self) -> (Component, Component) {
        (self.x, self.y)
    }
}

/// One of the four colour categories of the fly model, named after the
/// dominating receptor types of each opponent channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// `s` dominates `u`, `l` dominates `m`.
    SL,
    /// `u` dominates `s`, `l` dominates `m`.
    UL,
    /// `u` dominates `s`, `m` dominates `l`.
    UM,
    /// `s` dominates `u`, `m` dominates `l`.
    SM,
}

impl Categorical {
    /// The category a point falls into. Ties count towards `s` and `l`.
    pub fn category(&self) -> Category {
        match (self.x >= 0.0, self.y >= 0.0) {
            (true, true) => Category::SL,
            (false, true) => Category::UL,
            (false, false) => Category::UM,
            (true, false) => Category::SM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Model};

    #[test]
    fn coc_distance() {
        let p = Coc::new(0.0, 0.0, 0.0, 3.0, -4.0);
        assert_component_eq!(p.city_block(), 7.0);
        assert_component_eq!(p.chroma(), 5.0);
    }

    #[test]
    fn categories_by_quadrant() {
        let at = |x, y| Categorical::new(0.0, 0.0, 0.0, 0.0, x, y).category();
        assert_eq!(at(0.5, 0.5), Category::SL);
        assert_eq!(at(-0.5, 0.5), Category::UL);
        assert_eq!(at(-0.5, -0.5), Category::UM);
        assert_eq!(at(0.5, -0.5), Category::SM);
        assert_eq!(at(0.0, 0.0), Category::SL);
    }

    #[test]
    fn columns() {
        assert_eq!(Coc::COLUMNS, &["s", "m", "l", "x", "y"]);
        assert_eq!(Categorical::COLUMNS, &["u", "s", "m", "l", "x", "y"]);
    }
}
