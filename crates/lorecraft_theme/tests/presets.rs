//! Preset resolution and override layering

use lorecraft_theme::{Theme, ThemeError, ThemeName, ThemeOverrides, Viewport};

#[test]
fn test_dark_preset_at_reference_size() {
    let theme = Theme::resolve(ThemeName::Dark, Viewport::default());

    assert_eq!(theme.card_height, 933.0);
    assert_eq!(theme.card_scale_initial, 1.25);
    assert_eq!(theme.card_scale_final, 0.65);
    assert_eq!(theme.app_scale_initial, 0.5);
    assert_eq!(theme.app_cycle_ms(), 5000.0);
    assert_eq!(theme.screen_animation_y, 200.0);
    assert_eq!(theme.screen_animation_speed_ms, 850.0);
    assert_eq!(theme.screen_animation_out_speed_ms, 250.0);
    assert_eq!(theme.side_menu_width, 350.0);
    assert_eq!(theme.side_menu_speed_ms, 450.0);
    assert_eq!(theme.nav_button_span(), 150.0);
    assert_eq!(theme.card_width(), 600.0);
}

#[test]
fn test_broken_preset_at_reference_size() {
    let theme = Theme::resolve(ThemeName::Broken, Viewport::default());

    assert_eq!(theme.name, ThemeName::Broken);
    assert_eq!(theme.card_height, 1300.0);
    assert_eq!(theme.app_scale_initial, 1.5);
    assert_eq!(theme.app_cycle_ms(), 500.0);
    assert_eq!(theme.screen_animation_y, -300.0);
    assert_eq!(theme.screen_animation_out_speed_ms, 1.0);
    assert_eq!(theme.side_menu_width, 75.0);
    assert_eq!(theme.side_menu_speed_ms, 5000.0);
    assert_eq!(theme.nav_button_width, 100.0);
    assert_eq!(theme.nav_button_span(), 100.0);
}

#[test]
fn test_card_height_follows_limiting_dimension() {
    // narrow window, limited by width
    let narrow = Theme::resolve(ThemeName::Dark, Viewport::new(400.0, 800.0));
    assert_eq!(narrow.card_height, 600.0);

    // short window, limited by height
    let short = Theme::resolve(ThemeName::Dark, Viewport::new(1984.0, 500.0));
    assert_eq!(short.card_height, 400.0);

    // huge window, capped at the authored height
    let huge = Theme::resolve(ThemeName::Dark, Viewport::new(4000.0, 3000.0));
    assert_eq!(huge.card_height, 933.0);
}

#[test]
fn test_overrides_replace_only_set_tokens() {
    let overrides = ThemeOverrides::from_toml(
        r#"
card_height = 700.0
app_cycle_time_s = 2.5
"#,
    )
    .unwrap();
    assert!(!overrides.is_empty());

    let base = Theme::resolve(ThemeName::Dark, Viewport::default());
    let theme = overrides.applied_to(&base);

    assert_eq!(theme.card_height, 700.0);
    assert_eq!(theme.app_cycle_ms(), 2500.0);
    assert_eq!(theme.side_menu_width, base.side_menu_width);
    assert_eq!(theme.name, ThemeName::Dark);
}

#[test]
fn test_empty_overrides_are_a_no_op() {
    let overrides = ThemeOverrides::from_toml("").unwrap();
    assert!(overrides.is_empty());

    let base = Theme::resolve(ThemeName::Broken, Viewport::default());
    assert_eq!(overrides.applied_to(&base), base);
}

#[test]
fn test_unknown_override_is_rejected() {
    let err = ThemeOverrides::from_toml("card_colour = 3.0").unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)));
}

#[test]
fn test_theme_serializes_with_lowercase_name() {
    let theme = Theme::resolve(ThemeName::Broken, Viewport::default());
    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(json["name"], "broken");
    assert_eq!(json["card_height"], 1300.0);

    let back: Theme = serde_json::from_value(json).unwrap();
    assert_eq!(back, theme);
}
