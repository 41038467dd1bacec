//! Each colour space has its own point model. A model is one row of a
//! colour-space result, with one field per coordinate column.
//!
//! Models are generated with `gen_model!`, which also implements [`Model`] so
//! that untyped rows coming from upstream classifiers can be read into them.

use std::collections::BTreeMap;

use crate::{
    error::{PlotError, PlotResult},
    math::{almost_zero, normalize_hue},
    space::{Component, HasSpace, Space},
};

pub mod cie;
pub mod opponent;
pub mod receptor;

pub use cie::{CieLab, CieXyz};
pub use opponent::{Categorical, Coc};
pub use receptor::{Dichromat, Hexagon, Tetrahedral, Trichromat};

/// An untyped row of named coordinates.
pub type Row = BTreeMap<String, Component>;

/// A trait implemented for point models that can be read from an untyped
/// [`Row`].
pub trait Model: HasSpace + Sized {
    /// The columns a row needs to hold, in field order.
    const COLUMNS: &'static [&'static str];

    /// Read a model from a row. `index` is only used for error reporting.
    fn from_row(row: &Row, index: usize) -> PlotResult<Self>;
}

/// Look up a required column in `row`.
pub fn column(
    row: &Row,
    space: Space,
    column: &'static str,
    index: usize,
) -> PlotResult<Component> {
    row.get(column).copied().ok_or(PlotError::MissingColumn {
        space,
        column,
        row: index,
    })
}

/// Models whose plotted position is a point in a plane.
pub trait Planar {
    /// The plotted position.
    fn xy(&self) -> (Component, Component);

    /// Hue angle of the point around the achromatic centre, in degrees.
    /// `NaN` for a point on the centre.
    fn hue(&self) -> Component {
        let (x, y) = self.xy();
        if almost_zero(self.chroma()) {
            Component::NAN
        } else {
            normalize_hue(y.atan2(x).to_degrees())
        }
    }

    /// Distance of the point from the achromatic centre.
    fn chroma(&self) -> Component {
        let (x, y) = self.xy();
        x.hypot(y)
    }
}
