//! Colour-space results: the objects upstream classifiers hand to the plot
//! dispatcher.

use serde::Deserialize;

use crate::{
    error::{PlotError, PlotResult},
    models::{
        Categorical, CieLab, CieXyz, Coc, Dichromat, Hexagon, Model, Row, Tetrahedral,
        Trichromat,
    },
    space::Space,
};

/// The points of one colour space.
#[derive(Clone, Debug, PartialEq)]
pub struct Colorspace<M> {
    /// One point per sample.
    pub points: Vec<M>,
    /// Optional sample names, one per point when present.
    pub names: Option<Vec<String>>,
}

impl<M> Colorspace<M> {
    /// Create a result without sample names.
    pub fn new(points: Vec<M>) -> Self {
        Self {
            points,
            names: None,
        }
    }

    /// Attach sample names.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Name of the point at `index`, if names were given.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names
            .as_ref()
            .and_then(|names| names.get(index))
            .map(String::as_str)
    }
}

impl<M: Model> Colorspace<M> {
    fn from_rows(rows: &[Row], names: Option<Vec<String>>) -> PlotResult<Self> {
        let points = rows
            .iter()
            .enumerate()
            .map(|(index, row)| M::from_row(row, index))
            .collect::<PlotResult<Vec<_>>>()?;

        if let Some(names) = &names {
            if names.len() != points.len() {
                return Err(PlotError::MismatchedNames {
                    names: names.len(),
                    points: points.len(),
                });
            }
        }

        Ok(Self { points, names })
    }
}

/// A classified colour-space result. The variant is the tag that selects the
/// renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorspaceResult {
    /// See [`Space::Dichromat`].
    Dichromat(Colorspace<Dichromat>),
    /// See [`Space::Trichromat`].
    Trichromat(Colorspace<Trichromat>),
    /// See [`Space::Hexagon`].
    Hexagon(Colorspace<Hexagon>),
    /// See [`Space::Tetrahedral`].
    Tetrahedral(Colorspace<Tetrahedral>),
    /// See [`Space::Coc`].
    Coc(Colorspace<Coc>),
    /// See [`Space::Categorical`].
    Categorical(Colorspace<Categorical>),
    /// See [`Space::CieXyz`].
    CieXyz(Colorspace<CieXyz>),
    /// See [`Space::CieLab`].
    CieLab(Colorspace<CieLab>),
}

impl ColorspaceResult {
    /// The space this result is tagged with.
    pub fn space(&self) -> Space {
        match self {
            ColorspaceResult::Dichromat(_) => Space::Dichromat,
            ColorspaceResult::Trichromat(_) => Space::Trichromat,
            ColorspaceResult::Hexagon(_) => Space::Hexagon,
            ColorspaceResult::Tetrahedral(_) => Space::Tetrahedral,
            ColorspaceResult::Coc(_) => Space::Coc,
            ColorspaceResult::Categorical(_) => Space::Categorical,
            ColorspaceResult::CieXyz(_) => Space::CieXyz,
            ColorspaceResult::CieLab(_) => Space::CieLab,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        match self {
            ColorspaceResult::Dichromat(c) => c.points.len(),
            ColorspaceResult::Trichromat(c) => c.points.len(),
            ColorspaceResult::Hexagon(c) => c.points.len(),
            ColorspaceResult::Tetrahedral(c) => c.points.len(),
            ColorspaceResult::Coc(c) => c.points.len(),
            ColorspaceResult::Categorical(c) => c.points.len(),
            ColorspaceResult::CieXyz(c) => c.points.len(),
            ColorspaceResult::CieLab(c) => c.points.len(),
        }
    }

    /// Whether the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_colorspace {
    ($($model:ident),*) => {
        $(
            impl From<Colorspace<$model>> for ColorspaceResult {
                fn from(value: Colorspace<$model>) -> Self {
                    ColorspaceResult::$model(value)
                }
            }
        )*
    };
}

impl_from_colorspace!(
    Dichromat,
    Trichromat,
    Hexagon,
    Tetrahedral,
    Coc,
    Categorical,
    CieXyz,
    CieLab
);

/// A result as produced upstream, before its tag has been checked: a tag
/// string and rows of named coordinates.
///
/// ```rust
/// # use chromaplot::{ColorspaceResult, RawColorspace, Space};
/// let raw: RawColorspace = serde_json::from_str(
///     r#"{ "space": "di", "rows": [ { "s": 0.7, "l": 0.3, "x": -0.28 } ] }"#,
/// ).unwrap();
/// let result = ColorspaceResult::try_from(raw).unwrap();
/// assert_eq!(result.space(), Space::Dichromat);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawColorspace {
    /// The space tag.
    pub space: String,
    /// One row per sample.
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Optional sample names.
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

impl TryFrom<RawColorspace> for ColorspaceResult {
    type Error = PlotError;

    fn try_from(raw: RawColorspace) -> PlotResult<Self> {
        let space: Space = raw.space.parse()?;
        let RawColorspace { rows, names, .. } = raw;

        Ok(match space {
            Space::Dichromat => Colorspace::<Dichromat>::from_rows(&rows, names)?.into(),
            Space::Trichromat => Colorspace::<Trichromat>::from_rows(&rows, names)?.into(),
            Space::Hexagon => Colorspace::<Hexagon>::from_rows(&rows, names)?.into(),
            Space::Tetrahedral => Colorspace::<Tetrahedral>::from_rows(&rows, names)?.into(),
            Space::Coc => Colorspace::<Coc>::from_rows(&rows, names)?.into(),
            Space::Categorical => Colorspace::<Categorical>::from_rows(&rows, names)?.into(),
            Space::CieXyz => Colorspace::<CieXyz>::from_rows(&rows, names)?.into(),
            Space::CieLab => Colorspace::<CieLab>::from_rows(&rows, names)?.into(),
        })
    }
}
