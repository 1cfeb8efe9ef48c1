use daykeep_core::{
    contrast_ratio, contrasting_text_color, relative_luminance, resolve_color, resolve_tag_color,
    Color, Foreground, Palette, PaletteEntry, WCAG_AA, WCAG_AAA,
};

#[test]
fn palette_resolves_known_tints() {
    assert_eq!(resolve_color("red"), Color::RED);
    assert_eq!(resolve_color("green"), Color::GREEN);
}

#[test]
fn unknown_tint_falls_back_to_the_default() {
    assert_eq!(resolve_color("Unknown Tint"), Color::BLUE);
    assert_eq!(resolve_color(""), Color::BLUE);
}

#[test]
fn palette_lookup_takes_the_first_matching_entry() {
    let palette = Palette::new(
        vec![
            PaletteEntry {
                name: "accent",
                color: Color::RED,
            },
            PaletteEntry {
                name: "accent",
                color: Color::GREEN,
            },
        ],
        Color::GRAY,
    );

    assert_eq!(palette.resolve("accent"), Color::RED);
    assert_eq!(palette.resolve("missing"), Color::GRAY);
}

#[test]
fn tag_colors_match_names_case_insensitively() {
    assert_eq!(resolve_tag_color("RED"), resolve_tag_color("red"));
    assert_eq!(resolve_tag_color("Purple"), Color::PURPLE);
    assert_eq!(resolve_tag_color("white"), Color::WHITE);
}

#[test]
fn tag_colors_parse_rrggbb_hex() {
    assert_eq!(resolve_tag_color("#00FF00"), Color::rgb(0.0, 1.0, 0.0));
    assert_eq!(resolve_tag_color("#000000"), Color::BLACK);

    let mid = resolve_tag_color("#808080");
    assert!((mid.r - 128.0 / 255.0).abs() < 1e-12);
    assert_eq!(mid.r, mid.g);
    assert_eq!(mid.g, mid.b);
}

#[test]
fn unresolvable_tag_colors_fall_back_to_gray() {
    assert_eq!(resolve_tag_color("notacolor"), Color::GRAY);
    assert_eq!(resolve_tag_color("#12345"), Color::GRAY);
    assert_eq!(resolve_tag_color("#1234567"), Color::GRAY);
    assert_eq!(resolve_tag_color("#GGGGGG"), Color::GRAY);
    assert_eq!(resolve_tag_color(""), Color::GRAY);
}

#[test]
fn hex_formatting_roundtrips_through_tag_resolution() {
    let color = resolve_tag_color("#3A7BD5");
    assert_eq!(color.to_hex(), "#3A7BD5");
}

#[test]
fn luminance_matches_wcag_anchors() {
    assert_eq!(relative_luminance(Color::BLACK), 0.0);
    assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    // sRGB red: 0.2126 channel weight.
    assert!((relative_luminance(Color::RED) - 0.2126).abs() < 1e-9);
}

#[test]
fn black_and_white_hit_the_maximum_ratio() {
    let ratio = contrast_ratio(
        relative_luminance(Color::BLACK),
        relative_luminance(Color::WHITE),
    );
    assert!((ratio - 21.0).abs() < 1e-6);
}

#[test]
fn black_background_gets_white_text_and_vice_versa() {
    assert_eq!(
        contrasting_text_color(Color::BLACK, WCAG_AA),
        Foreground::White
    );
    assert_eq!(
        contrasting_text_color(Color::WHITE, WCAG_AA),
        Foreground::Black
    );
}

#[test]
fn dark_backgrounds_prefer_white_text() {
    let navy = Color::rgb(0.0, 0.0, 0.5);
    assert_eq!(contrasting_text_color(navy, WCAG_AA), Foreground::White);
    assert_eq!(contrasting_text_color(navy, WCAG_AAA), Foreground::White);
}

#[test]
fn mid_gray_fails_the_white_threshold() {
    // White against 50% gray sits below 4.5:1, so black text wins even
    // though neither choice reaches the AA threshold.
    assert_eq!(
        contrasting_text_color(Color::GRAY, WCAG_AA),
        Foreground::Black
    );
}

#[test]
fn threshold_is_a_configuration_point() {
    // Luminance ~0.15: white contrast ~5.25, black contrast ~4.0.
    let slate = Color::rgb(0.4237, 0.4237, 0.4237);
    assert_eq!(contrasting_text_color(slate, WCAG_AA), Foreground::White);
    assert_eq!(contrasting_text_color(slate, WCAG_AAA), Foreground::Black);
}

#[test]
fn decision_is_total_over_the_rgb_domain() {
    for step in 0..=4 {
        let channel = f64::from(step) / 4.0;
        let color = Color::rgb(channel, 1.0 - channel, channel / 2.0);
        // Must produce one of the two choices for any input, never panic.
        let _ = contrasting_text_color(color, WCAG_AA);
    }
}
