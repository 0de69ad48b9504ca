//! Tests for colormaps.

use map_common::{Color, PaletteConfig, PaletteName};
use renderer::colormap::{ColorMap, GradientColorMap};

const PALETTES: [PaletteName; 4] = [
    PaletteName::Viridis,
    PaletteName::Magma,
    PaletteName::Plasma,
    PaletteName::Cividis,
];

#[test]
fn test_builtin_palettes_increase_in_luminance() {
    for palette in PALETTES {
        let cmap = GradientColorMap::named(palette);
        let colors: Vec<Color> = (0..=100).map(|i| cmap.color_for(i as f64 / 100.0)).collect();
        for pair in colors.windows(2) {
            assert!(
                pair[1].luminance() > pair[0].luminance(),
                "{}: {} -> {} not brighter",
                palette.as_str(),
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_distinct_inputs_give_distinct_colors() {
    let cmap = GradientColorMap::viridis();
    let inputs = [0.0, 0.1, 0.25, 0.4, 0.5, 0.75, 0.9, 1.0];
    for i in 0..inputs.len() {
        for j in (i + 1)..inputs.len() {
            assert_ne!(cmap.color_for(inputs[i]), cmap.color_for(inputs[j]));
        }
    }
}

#[test]
fn test_saturated_beyond_endpoints() {
    let cmap = GradientColorMap::named(PaletteName::Magma);
    assert_eq!(cmap.color_for(1.0), cmap.color_for(3.0));
    assert_eq!(cmap.color_for(0.0), cmap.color_for(-3.0));
}

#[test]
fn test_colormaps_are_substitutable() {
    let maps: [Box<dyn ColorMap>; 3] = [
        Box::new(GradientColorMap::viridis()),
        Box::new(GradientColorMap::named(PaletteName::Cividis)),
        Box::new(|t: f64| {
            let v = (t * 255.0).round() as u8;
            Color::new(v, v, v)
        }),
    ];
    for cmap in &maps {
        assert!(cmap.color_for(1.0).luminance() > cmap.color_for(0.0).luminance());
    }
}

#[test]
fn test_from_default_config_is_viridis() {
    let cmap = GradientColorMap::from_config(&PaletteConfig::default()).unwrap();
    assert_eq!(cmap.name(), "viridis");
    assert_eq!(cmap, GradientColorMap::viridis());
}
