//! A [`Space`] identifies the geometric model a colour-space result was
//! classified into, and with it the renderer that knows how to draw it.

use std::{fmt, str::FromStr};

use crate::error::PlotError;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all coordinates are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all coordinates are stored as.
pub type Component = f64;

/// The colour spaces a result can be tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Dichromatic receptor-noise space, a single opponent axis.
    Dichromat = 0,
    /// Trichromatic Maxwell triangle.
    Trichromat = 1,
    /// The colour hexagon of Chittka (1992).
    Hexagon = 2,
    /// Tetrachromatic tetrahedral colour space.
    Tetrahedral = 3,
    /// Colour-opponent-coding space of Backhaus (1991).
    Coc = 4,
    /// Categorical fly colour space of Troje (1993).
    Categorical = 5,
    /// CIE-XYZ, plotted as a chromaticity diagram.
    CieXyz = 6,
    /// CIE-Lab.
    CieLab = 7,
}

impl Space {
    /// Every space, in discriminant order.
    pub const ALL: [Space; 8] = [
        Space::Dichromat,
        Space::Trichromat,
        Space::Hexagon,
        Space::Tetrahedral,
        Space::Coc,
        Space::Categorical,
        Space::CieXyz,
        Space::CieLab,
    ];

    /// The canonical tag upstream classifiers attach to a result.
    pub const fn tag(self) -> &'static str {
        match self {
            Space::Dichromat => "di",
            Space::Trichromat => "tri",
            Space::Hexagon => "hexagon",
            Space::Tetrahedral => "tcs",
            Space::Coc => "coc",
            Space::Categorical => "categorical",
            Space::CieXyz => "ciexyz",
            Space::CieLab => "cielab",
        }
    }

    /// Name of the [`Renderer`](crate::Renderer) method results in this space
    /// are dispatched to.
    pub const fn renderer(self) -> &'static str {
        match self {
            Space::Dichromat => "diplot",
            Space::Trichromat => "triplot",
            Space::Hexagon => "hexplot",
            Space::Tetrahedral => "tcsplot",
            Space::Coc => "cocplot",
            Space::Categorical => "catplot",
            Space::CieXyz | Space::CieLab => "cieplot",
        }
    }
}

impl FromStr for Space {
    type Err = PlotError;

    /// Tags are matched exactly. Anything else is reported, never ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Space::ALL
            .into_iter()
            .find(|space| space.tag() == s)
            .ok_or_else(|| PlotError::UnknownSpace(s.to_string()))
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Implemented by every model that belongs to a single space.
pub trait HasSpace {
    /// The space the model's coordinates live in.
    const SPACE: Space;
}
