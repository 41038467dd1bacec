use chromaplot::{
    models::{Categorical, CieLab, CieXyz, Coc, Dichromat, Hexagon, Tetrahedral, Trichromat},
    plot_raw,
    render::{plot_to_file, ImageRenderer},
    Colorspace, ColorspaceResult, Decorations, PlotError, PlotOptions, RawColorspace, Space,
};
use image::{Rgb, RgbImage};

const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

const FONT: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

fn with_font() -> ImageRenderer {
    ImageRenderer::new().with_font(FONT.to_vec()).unwrap()
}

fn bare() -> PlotOptions {
    PlotOptions::default()
        .with_size(200, 200)
        .with_margin(10)
        .with_decorations(Decorations::empty())
}

fn render(result: impl Into<ColorspaceResult>, options: &PlotOptions) -> RgbImage {
    let result: ColorspaceResult = result.into();
    result.plot(options, &mut ImageRenderer::new()).unwrap()
}

fn count(image: &RgbImage, colour: [u8; 3]) -> usize {
    image.pixels().filter(|p| **p == Rgb(colour)).count()
}

/// Pixels that are not background, in rows `0..rows`.
fn inked(image: &RgbImage, rows: u32) -> usize {
    image
        .enumerate_pixels()
        .filter(|(_, y, p)| *y < rows && **p != Rgb(WHITE))
        .count()
}

/// Mean position of the pixels of `colour`.
fn centre_of(image: &RgbImage, colour: [u8; 3]) -> (f64, f64) {
    let (mut x, mut y, mut n) = (0.0, 0.0, 0.0);
    for (px, py, p) in image.enumerate_pixels() {
        if *p == Rgb(colour) {
            x += px as f64;
            y += py as f64;
            n += 1.0;
        }
    }
    assert!(n > 0.0, "no pixels of {colour:?}");
    (x / n, y / n)
}

#[test]
fn image_has_the_configured_size_and_background() {
    let options = bare().with_size(320, 240);
    let image = render(Colorspace::<Trichromat>::new(vec![]), &options);

    assert_eq!(image.dimensions(), (320, 240));
    assert!(image.pixels().all(|p| *p == Rgb([255, 255, 255])));
}

#[test]
fn outline_is_drawn_in_the_foreground_colour() {
    let options = bare().with_decorations(Decorations::OUTLINE);
    let image = render(Colorspace::<Hexagon>::new(vec![]), &options);

    assert!(count(&image, [0, 0, 0]) > 100);
}

#[test]
fn centred_point_lands_in_the_middle() {
    let options = bare().with_point_colour(RED);
    for result in [
        ColorspaceResult::from(Colorspace::new(vec![Hexagon::new(0.3, 0.3, 0.3, 0.0, 0.0)])),
        Colorspace::new(vec![Coc::new(0.3, 0.3, 0.3, 0.0, 0.0)]).into(),
        Colorspace::new(vec![Categorical::new(0.25, 0.25, 0.25, 0.25, 0.0, 0.0)]).into(),
        Colorspace::new(vec![CieLab::new(0.2, 0.2, 0.2, 50.0, 0.0, 0.0)]).into(),
    ] {
        let space = result.space();
        let image = render(result, &options);
        assert_eq!(*image.get_pixel(100, 100), Rgb(RED), "{space}");
    }
}

#[test]
fn every_renderer_draws_its_points() {
    let options = bare().with_point_colour(RED);
    let results: Vec<ColorspaceResult> = vec![
        Colorspace::new(vec![Dichromat::new(0.7, 0.3, -0.28)]).into(),
        Colorspace::new(vec![Trichromat::new(0.2, 0.3, 0.5, 0.21, -0.04)]).into(),
        Colorspace::new(vec![Hexagon::new(0.4, 0.6, 0.5, 0.09, 0.15)]).into(),
        Colorspace::new(vec![Tetrahedral::new(0.1, 0.2, 0.3, 0.4, 0.1, -0.05, -0.1)]).into(),
        Colorspace::new(vec![Coc::new(0.4, 0.6, 0.5, 2.5, 4.6)]).into(),
        Colorspace::new(vec![Categorical::new(0.1, 0.2, 0.3, 0.4, 0.1, 0.1)]).into(),
        Colorspace::new(vec![CieXyz::new(0.3, 0.3, 0.3, 0.333, 0.333, 0.333)]).into(),
        Colorspace::new(vec![CieLab::new(0.3, 0.3, 0.3, 61.0, 2.0, -3.0)]).into(),
    ];

    for result in results {
        let space = result.space();
        let image = render(result, &options);
        assert!(count(&image, RED) > 10, "{space} drew no points");
    }
}

#[test]
fn cie_points_are_filled_with_their_own_colour() {
    let grey = Colorspace::new(vec![CieLab::new(0.2, 0.2, 0.2, 50.0, 0.0, 0.0)]);
    let image = render(grey, &bare());
    assert_eq!(*image.get_pixel(100, 100), Rgb([119, 119, 119]));

    let white = Colorspace::new(vec![CieXyz::new(
        0.9505, 1.0, 1.089, 0.3127, 0.329, 0.3583,
    )]);
    let image = render(white, &bare().with_background([0, 0, 0]));
    assert!(count(&image, [255, 255, 255]) > 10);
}

#[test]
fn invalid_options_are_rejected_by_the_renderer() {
    let result: ColorspaceResult = Colorspace::<Coc>::new(vec![]).into();

    let err = result
        .plot(&bare().with_size(0, 0), &mut ImageRenderer::new())
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidOptions(_)));

    let err = result
        .plot(&bare().with_range(-1.0), &mut ImageRenderer::new())
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidOptions(_)));
}

#[test]
fn bad_font_data_is_an_error() {
    let err = ImageRenderer::new()
        .with_font(b"not a font".to_vec())
        .err()
        .unwrap();
    assert!(matches!(err, PlotError::Font));
}

#[test]
fn points_outside_the_space_do_not_fail() {
    let options = bare().with_point_colour(RED);
    let far = Colorspace::new(vec![
        Trichromat::new(0.0, 0.0, 0.0, 40.0, -40.0),
        Trichromat::new(0.0, 0.0, 0.0, f32::NAN as _, 0.0),
    ]);
    let image = render(far, &options);
    assert_eq!(count(&image, RED), 0);
}

#[test]
fn tetrahedral_view_changes_the_picture() {
    let options = bare().with_decorations(Decorations::OUTLINE);
    let data = || Colorspace::<Tetrahedral>::new(vec![]);

    let front = render(data(), &options.clone().with_view(0.0, 10.0));
    let side = render(data(), &options.with_view(90.0, 45.0));
    assert_ne!(front, side);
}

#[test]
fn plot_is_written_to_file() {
    let path = std::env::temp_dir().join(format!("chromaplot-{}.png", std::process::id()));
    let result: ColorspaceResult =
        Colorspace::new(vec![Dichromat::new(0.7, 0.3, -0.28)]).into();

    plot_to_file(&result, &bare(), &mut ImageRenderer::new(), &path).unwrap();

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (200, 200));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn points_far_off_the_image_are_skipped() {
    let raw = |rows: &str| -> RawColorspace {
        serde_json::from_str(&format!(r#"{{ "space": "coc", "names": ["far"], "rows": {rows} }}"#))
            .unwrap()
    };
    let far = r#"[ { "s": 0.4, "m": 0.6, "l": 0.5, "x": 1e10, "y": 0.0 } ]"#;
    let further = r#"[ { "s": 0.4, "m": 0.6, "l": 0.5, "x": 1e12, "y": -1e12 } ]"#;
    let options = PlotOptions::default();

    let frame = plot_raw(
        RawColorspace {
            space: "coc".to_string(),
            ..Default::default()
        },
        &options,
        &mut ImageRenderer::new(),
    )
    .unwrap();
    let image = plot_raw(raw(far), &options, &mut ImageRenderer::new()).unwrap();
    assert_eq!(image, frame);

    // Names are placed next to the point, so they are skipped with it.
    let image = plot_raw(raw(further), &options, &mut with_font()).unwrap();
    assert_eq!(image.dimensions(), (600, 600));
}

#[test]
fn fonts_load_from_truetype_data() {
    let options = bare().with_decorations(Decorations::VERTICES);
    let result: ColorspaceResult = Colorspace::<Trichromat>::new(vec![]).into();

    let plain = result.plot(&options, &mut ImageRenderer::new()).unwrap();
    let labelled = result.plot(&options, &mut with_font()).unwrap();

    assert_eq!(inked(&plain, 200), 0);
    assert!(inked(&labelled, 200) > 0);
}

#[test]
fn every_plot_labels_its_vertices() {
    let options = bare().with_decorations(Decorations::VERTICES);
    let mut renderer = with_font();

    for space in Space::ALL {
        let raw = RawColorspace {
            space: space.tag().to_string(),
            ..Default::default()
        };
        let image = plot_raw(raw, &options, &mut renderer).unwrap();
        assert!(inked(&image, 200) > 0, "{space} has no labels");
    }
}

#[test]
fn names_are_written_next_to_points() {
    let data = || {
        Colorspace::new(vec![Hexagon::new(0.3, 0.3, 0.3, 0.0, 0.0)])
            .with_names(vec!["petal".to_string()])
    };
    let named = bare()
        .with_point_colour(RED)
        .with_decorations(Decorations::NAMES);
    let unnamed = bare().with_point_colour(RED);

    let result: ColorspaceResult = data().into();
    let with_names = result.plot(&named, &mut with_font()).unwrap();
    let without = result.plot(&unnamed, &mut with_font()).unwrap();
    let no_font = result.plot(&named, &mut ImageRenderer::new()).unwrap();

    assert!(inked(&with_names, 200) > inked(&without, 200));
    assert_eq!(no_font, without);

    // The name is to the right of the point, which stays in the middle.
    let right_of_point = with_names
        .enumerate_pixels()
        .filter(|(x, _, p)| *x > 110 && **p != Rgb(WHITE))
        .count();
    assert!(right_of_point > 0);
    assert_eq!(*with_names.get_pixel(100, 100), Rgb(RED));
}

#[test]
fn title_is_drawn_above_and_pushes_the_plot_down() {
    let data = || Colorspace::new(vec![Hexagon::new(0.3, 0.3, 0.3, 0.0, 0.0)]);
    let options = bare().with_point_colour(RED);
    let titled = options.clone().with_title("Bees");

    let image = render(data(), &options);
    let (x, y) = centre_of(&image, RED);
    assert!((x - 100.0).abs() < 1.0 && (y - 100.0).abs() < 1.0);

    // Without a font there is no title and no room kept for it.
    assert_eq!(render(data(), &titled), image);

    let result: ColorspaceResult = data().into();
    let image = result.plot(&titled, &mut with_font()).unwrap();
    assert!(inked(&image, 30) > 0, "title missing");

    // 27 pixels are kept for the title, so the centre moves down by half that.
    let (x, y) = centre_of(&image, RED);
    assert!((x - 100.0).abs() < 1.0);
    assert!((y - 113.5).abs() < 1.0, "centre at {y}");
}
