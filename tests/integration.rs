use std::path::{Path, PathBuf};

use shadegen::backends::css::CssBackend;
use shadegen::backends::tailwind::TailwindBackend;
use shadegen::backends::ThemeBackend;
use shadegen::cli::Artifact;
use shadegen::color::{Color, ColorError};
use shadegen::generate::{generate, load_theme};
use shadegen::pipeline::parse::parse_palette;
use shadegen::pipeline::shades::{derive_ramp, Ramp, Step, CEILING, FLOOR};
use shadegen::theme::Theme;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const COLORS_TXT: &str = "\
# Brand palette
e70000 # Fire Red
0066CC # Ocean Blue

808080 # Slate
fefefe # Snow
010101 # Ink
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shadegen-it-{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_input(dir: &Path) -> PathBuf {
    let path = dir.join("colors.txt");
    std::fs::write(&path, COLORS_TXT).unwrap();
    path
}

fn lightness_sequence(ramp: &Ramp) -> Vec<f32> {
    ramp.iter().map(|shade| shade.hsl.lightness).collect()
}

fn assert_non_increasing(ramp: &Ramp) {
    let seq = lightness_sequence(ramp);
    for window in seq.windows(2) {
        // f32 rounding on equal channel sums can differ in the last ulp
        assert!(
            window[0] + 1e-3 >= window[1],
            "lightness increased for {}: {seq:?}",
            ramp.base()
        );
    }
}

// ---------------------------------------------------------------------------
// Ramp properties
// ---------------------------------------------------------------------------

#[test]
fn fire_red_example() {
    let base = Color::from_hex("e70000").unwrap();
    let hsl = base.to_hsl();
    assert!(hsl.hue.abs() < 0.01);
    assert!((hsl.saturation - 100.0).abs() < 0.01);
    assert!((hsl.lightness - 45.3).abs() < 0.05);

    let ramp = derive_ramp(base);
    assert_eq!(ramp.get(Step::S500).to_hex(), "e70000");

    let s50 = ramp.get(Step::S50).to_hsl();
    assert!(CEILING - s50.lightness < 5.0, "step 50 lightness {}", s50.lightness);
    assert!(s50.saturation < 100.0);

    let s900 = ramp.get(Step::S900).to_hsl();
    assert!(s900.lightness - FLOOR < 5.0, "step 900 lightness {}", s900.lightness);

    for shade in ramp.iter() {
        assert!(shade.hsl.hue.abs() < 0.5, "step {} hue {}", shade.step, shade.hsl.hue);
    }
    assert_non_increasing(&ramp);
}

#[test]
fn gray_and_extreme_bases_are_ordered() {
    for hex in ["808080", "fefefe", "010101"] {
        let ramp = derive_ramp(Color::from_hex(hex).unwrap());
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.base().to_hex(), hex);
        assert_non_increasing(&ramp);
        for shade in ramp.iter() {
            assert_eq!(shade.hsl.saturation, 0.0, "{hex} step {}", shade.step);
            assert!(!shade.hsl.lightness.is_nan());
        }
    }
}

#[test]
fn malformed_hex_never_reaches_ramp() {
    for input in ["zzzzzz", "12345", ""] {
        let result = Color::from_hex(input).map(derive_ramp);
        assert_eq!(result, Err(ColorError::InvalidFormat(input.to_string())));
    }
}

// ---------------------------------------------------------------------------
// End-to-end generation
// ---------------------------------------------------------------------------

#[test]
fn generates_every_artifact() {
    let dir = scratch_dir("all");
    let input = write_input(&dir);
    let out = dir.join("out");

    let theme = load_theme(&input).unwrap();
    assert_eq!(theme.len(), 5);

    let written = generate(&theme, &out, &Artifact::ALL, None).unwrap();

    let mut names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected = vec![
        "GUIDELINES.md".to_string(),
        "index.html".to_string(),
        "palette.css".to_string(),
        "palette.png".to_string(),
        "tailwind.config.js".to_string(),
    ];
    for slug in ["fire-red", "ocean-blue", "slate", "snow", "ink"] {
        expected.push(format!("{slug}.png"));
        expected.push(format!("{slug}-shades.png"));
    }
    expected.sort();
    assert_eq!(names, expected);

    let on_disk = std::fs::read_dir(&out).unwrap().count();
    assert_eq!(on_disk, expected.len(), "nothing else should be written");

    let css = std::fs::read_to_string(out.join("palette.css")).unwrap();
    assert!(css.contains("--color-ocean-blue-500: #0066cc;"));

    let palette = image::open(out.join("palette.png")).unwrap().to_rgb8();
    assert_eq!(palette.dimensions(), (600, 400));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn swatches_carry_labels_when_a_font_is_found() {
    if shadegen::swatch::label::LabelFont::discover().is_none() {
        eprintln!("no system monospace font found, skipping");
        return;
    }
    let dir = scratch_dir("labels");
    let input = write_input(&dir);
    let out = dir.join("out");

    generate(&load_theme(&input).unwrap(), &out, &[Artifact::Images], None).unwrap();

    let swatch = image::open(out.join("fire-red.png")).unwrap().to_rgb8();
    let fill = image::Rgb([0xe7, 0x00, 0x00]);
    assert_eq!(*swatch.get_pixel(0, 0), fill);
    assert!(swatch.pixels().filter(|p| **p != fill).count() > 100);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn generation_is_byte_identical_across_runs() {
    let dir = scratch_dir("determinism");
    let input = write_input(&dir);
    let artifacts = [Artifact::Css, Artifact::Tailwind, Artifact::Guidelines, Artifact::Html];

    let first = dir.join("first");
    let second = dir.join("second");
    generate(&load_theme(&input).unwrap(), &first, &artifacts, None).unwrap();
    generate(&load_theme(&input).unwrap(), &second, &artifacts, None).unwrap();

    for file in ["palette.css", "tailwind.config.js", "GUIDELINES.md", "index.html"] {
        let a = std::fs::read(first.join(file)).unwrap();
        let b = std::fs::read(second.join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between runs");
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_input_names_path() {
    let err = load_theme(Path::new("/nonexistent/colors.txt")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/colors.txt"));
}

#[test]
fn ramps_do_not_depend_on_other_colors() {
    let alone = Theme::from_colors(&parse_palette("0066cc # Ocean Blue\n"));
    let together = Theme::from_colors(&parse_palette(COLORS_TXT));
    let ocean = together
        .colors
        .iter()
        .find(|c| c.slug == "ocean-blue")
        .unwrap();
    assert_eq!(alone.colors[0].ramp, ocean.ramp);

    let css_alone = CssBackend.serialize(&alone);
    assert!(TailwindBackend.serialize(&together).contains("'ocean-blue'"));
    assert!(css_alone.contains("--color-ocean-blue-900:"));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        any::<[u8; 3]>().prop_map(|[r, g, b]| Color::new(r, g, b))
    }

    proptest! {
        #[test]
        fn hex_round_trip(digits in "#?[0-9a-fA-F]{6}") {
            let color = Color::from_hex(&digits).unwrap();
            let expected = digits.trim_start_matches('#').to_lowercase();
            prop_assert_eq!(color.to_hex(), expected);
        }

        #[test]
        fn malformed_hex_rejected(input in "[0-9a-f]{0,5}|[0-9a-f]{7,9}|[g-z]{6}") {
            prop_assert!(matches!(Color::from_hex(&input), Err(ColorError::InvalidFormat(_))));
        }

        #[test]
        fn hsl_round_trip_within_one(color in arb_color()) {
            let recovered = Color::from_hsl(color.to_hsl());
            prop_assert!((color.r as i16 - recovered.r as i16).abs() <= 1);
            prop_assert!((color.g as i16 - recovered.g as i16).abs() <= 1);
            prop_assert!((color.b as i16 - recovered.b as i16).abs() <= 1);
        }

        #[test]
        fn hsl_ranges(color in arb_color()) {
            let hsl = color.to_hsl();
            prop_assert!((0.0..360.0).contains(&hsl.hue));
            prop_assert!((0.0..=100.0).contains(&hsl.saturation));
            prop_assert!((0.0..=100.0).contains(&hsl.lightness));
        }

        #[test]
        fn ramp_has_fixed_steps(color in arb_color()) {
            let ramp = derive_ramp(color);
            let labels: Vec<u16> = ramp.iter().map(|s| s.step.label()).collect();
            prop_assert_eq!(labels, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
        }

        #[test]
        fn step_500_is_base(color in arb_color()) {
            prop_assert_eq!(derive_ramp(color).get(Step::S500), color);
        }

        #[test]
        fn lightness_never_increases(color in arb_color()) {
            let ramp = derive_ramp(color);
            let keys: Vec<u16> = ramp.iter().map(|s| s.color.lightness_key()).collect();
            for window in keys.windows(2) {
                prop_assert!(window[0] >= window[1], "{} -> {:?}", color, keys);
            }
        }
    }
}
