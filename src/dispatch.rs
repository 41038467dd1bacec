//! Routing a colour-space result to the renderer for its space.
//!
//! Every space has exactly one renderer method on [`Renderer`]. The two CIE
//! spaces share [`Renderer::cieplot`], which receives a [`Cie`] so it can tell
//! them apart. The dispatcher does no validation of its own: it hands the data
//! and the options to the renderer as they are and returns what the renderer
//! returns.

use tracing::{debug, warn};

use crate::{
    error::PlotResult,
    models::{Categorical, CieLab, CieXyz, Coc, Dichromat, Hexagon, Tetrahedral, Trichromat},
    options::PlotOptions,
    result::{Colorspace, ColorspaceResult, RawColorspace},
};

/// Data for the CIE renderer, which draws both CIE spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cie<'a> {
    /// A CIE-XYZ result.
    Xyz(&'a Colorspace<CieXyz>),
    /// A CIE-Lab result.
    Lab(&'a Colorspace<CieLab>),
}

/// Draws colour-space results, one method per kind of plot.
pub trait Renderer {
    /// What a finished plot is.
    type Output;

    /// Plot dichromatic points on their opponent axis.
    fn diplot(
        &mut self,
        data: &Colorspace<Dichromat>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output>;

    /// Plot trichromatic points in the Maxwell triangle.
    fn triplot(
        &mut self,
        data: &Colorspace<Trichromat>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output>;

    /// Plot points in the colour hexagon.
    fn hexplot(
        &mut self,
        data: &Colorspace<Hexagon>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output>;

    /// Plot points in the tetrahedral colour space.
    fn tcsplot(
        &mut self,
        data: &Colorspace<Tetrahedral>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output>;

    /// Plot points in the colour-opponent-coding space.
    fn cocplot(&mut self, data: &Colorspace<Coc>, options: &PlotOptions)
        -> PlotResult<Self::Output>;

    /// Plot points in the categorical fly colour space.
    fn catplot(
        &mut self,
        data: &Colorspace<Categorical>,
        options: &PlotOptions,
    ) -> PlotResult<Self::Output>;

    /// Plot points in either CIE space.
    fn cieplot(&mut self, data: Cie<'_>, options: &PlotOptions) -> PlotResult<Self::Output>;
}

/// Plot `result` with the renderer for its space.
///
/// Exactly one renderer method is called, once, with the data of `result` and
/// `options` unchanged.
pub fn plot<R: Renderer + ?Sized>(
    result: &ColorspaceResult,
    options: &PlotOptions,
    renderer: &mut R,
) -> PlotResult<R::Output> {
    let space = result.space();
    debug!(
        space = %space,
        renderer = space.renderer(),
        points = result.len(),
        "dispatching colour space plot"
    );

    match result {
        ColorspaceResult::Dichromat(data) => renderer.diplot(data, options),
        ColorspaceResult::Trichromat(data) => renderer.triplot(data, options),
        ColorspaceResult::Hexagon(data) => renderer.hexplot(data, options),
        ColorspaceResult::Tetrahedral(data) => renderer.tcsplot(data, options),
        ColorspaceResult::Coc(data) => renderer.cocplot(data, options),
        ColorspaceResult::Categorical(data) => renderer.catplot(data, options),
        ColorspaceResult::CieXyz(data) => renderer.cieplot(Cie::Xyz(data), options),
        ColorspaceResult::CieLab(data) => renderer.cieplot(Cie::Lab(data), options),
    }
}

/// Check the tag of an upstream result and plot it.
///
/// An unrecognised tag, or a row missing a coordinate, is returned as an
/// error and no renderer is called.
pub fn plot_raw<R: Renderer + ?Sized>(
    raw: RawColorspace,
    options: &PlotOptions,
    renderer: &mut R,
) -> PlotResult<R::Output> {
    let result = ColorspaceResult::try_from(raw).inspect_err(|err| {
        warn!(%err, "colour space result rejected");
    })?;

    plot(&result, options, renderer)
}

impl ColorspaceResult {
    /// Plot this result with `renderer`. See [`plot`].
    pub fn plot<R: Renderer + ?Sized>(
        &self,
        options: &PlotOptions,
        renderer: &mut R,
    ) -> PlotResult<R::Output> {
        plot(self, options, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PlotError, space::Space};

    /// Answers with the name of the method that was called.
    struct Names;

    impl Renderer for Names {
        type Output = &'static str;

        fn diplot(
            &mut self,
            _: &Colorspace<Dichromat>,
            _: &PlotOptions,
        ) -> PlotResult<Self::Output> {
            Ok("diplot")
        }

        fn triplot(
            &mut self,
            _: &Colorspace<Trichromat>,
            _: &PlotOptions,
        ) -> PlotResult<Self::Output> {
            Ok("triplot")
        }

        fn hexplot(
            &mut self,
            _: &Colorspace<Hexagon>,
            _: &PlotOptions,
        ) -> PlotResult<Self::Output> {
            Ok("hexplot")
        }

        fn tcsplot(
            &mut self,
            _: &Colorspace<Tetrahedral>,
            _: &PlotOptions,
        ) -> PlotResult<Self::Output> {
            Ok("tcsplot")
        }

        fn cocplot(&mut self, _: &Colorspace<Coc>, _: &PlotOptions) -> PlotResult<Self::Output> {
            Ok("cocplot")
        }

        fn catplot(
            &mut self,
            _: &Colorspace<Categorical>,
            _: &PlotOptions,
        ) -> PlotResult<Self::Output> {
            Ok("catplot")
        }

        fn cieplot(&mut self, _: Cie<'_>, _: &PlotOptions) -> PlotResult<Self::Output> {
            Ok("cieplot")
        }
    }

    fn empty(space: Space) -> ColorspaceResult {
        ColorspaceResult::try_from(RawColorspace {
            space: space.tag().to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn renderer_matches_space() {
        for space in Space::ALL {
            let result = empty(space);
            let called = plot(&result, &PlotOptions::default(), &mut Names).unwrap();
            assert_eq!(called, space.renderer());
        }
    }

    #[test]
    fn dispatch_through_trait_object() {
        let renderer: &mut dyn Renderer<Output = &'static str> = &mut Names;
        let result = empty(Space::Coc);
        assert_eq!(result.plot(&PlotOptions::default(), renderer).unwrap(), "cocplot");
    }

    #[test]
    fn raw_with_unknown_tag_is_an_error() {
        let raw = RawColorspace {
            space: "cielch".to_string(),
            ..Default::default()
        };
        let err = plot_raw(raw, &PlotOptions::default(), &mut Names).unwrap_err();
        assert!(matches!(err, PlotError::UnknownSpace(tag) if tag == "cielch"));
    }
}
