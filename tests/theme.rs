//! Theme tests - builtin themes, JSON packs, registry lookup

use std::fs;

use vtmledit::syntax::TokenType;
use vtmledit::theme::{
    parse_theme_pack, Color, HighlightTheme, ThemeRegistry, ThemeSource, BUILTIN_THEMES,
    DEFAULT_THEME_YAML, HIGH_CONTRAST_THEME_YAML,
};

const PACK: &str = r##"[
    {
        "Code": "Solar",
        "FontName": "Serif",
        "FontSize": 18,
        "TokenColors": { "TagName": "#FF8800", "Text": null }
    },
    { "Code": "", "FontName": "Serif", "FontSize": 12 },
    { "Code": "tiny", "FontName": "Mono", "FontSize": 0 },
    { "Code": "nofont", "FontSize": 12 },
    {
        "code": "bad-color",
        "font_name": "Mono",
        "font_size": 12,
        "token_colors": { "TagName": "orange", "AttributeName": "#00FF00" }
    }
]"##;

#[test]
fn test_color_from_hex() {
    assert_eq!(Color::from_hex("#1E1E1E").unwrap(), Color::rgb(0x1E, 0x1E, 0x1E));
    assert_eq!(Color::from_hex("#1E1E1E80").unwrap().a, 0x80);
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("#ééé").is_err());
    assert!(Color::from_hex("#+1+2+3").is_err());
}

#[test]
fn test_color_hex_roundtrip() {
    let color = Color::rgba(0x6B, 0xA6, 0xCF, 0xFF);
    assert_eq!(color.to_hex(), "#6BA6CFFF");
    assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
}

#[test]
fn test_builtin_yaml_parses() {
    for yaml in [DEFAULT_THEME_YAML, HIGH_CONTRAST_THEME_YAML] {
        let theme = HighlightTheme::from_yaml(yaml).unwrap();
        assert!(theme.font_size > 0.0);
        assert_eq!(theme.color_for(TokenType::Text), None);
        assert!(theme.color_for(TokenType::TagName).is_some());
    }
    assert_eq!(BUILTIN_THEMES.len(), 2);
}

#[test]
fn test_default_theme_colors() {
    let theme = HighlightTheme::default();
    assert_eq!(theme.code, "default");
    assert_eq!(
        theme.color_for(TokenType::AttributeValue),
        Some(Color::rgb(0x6B, 0xA6, 0xCF))
    );
}

#[test]
fn test_pack_skips_invalid_entries() {
    let themes = parse_theme_pack(PACK).unwrap();
    let codes: Vec<&str> = themes.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["Solar", "bad-color"]);

    let solar = &themes[0];
    assert_eq!(solar.font_name, "Serif");
    assert_eq!(solar.font_size, 18.0);
    assert_eq!(solar.color_for(TokenType::TagName), Some(Color::rgb(0xFF, 0x88, 0x00)));
    assert_eq!(solar.color_for(TokenType::AttributeName), None);

    // A malformed color falls back to the font color; the rest survive
    let bad = &themes[1];
    assert_eq!(bad.color_for(TokenType::TagName), None);
    assert_eq!(bad.color_for(TokenType::AttributeName), Some(Color::rgb(0, 0xFF, 0)));
}

#[test]
fn test_pack_that_is_not_an_array_is_an_error() {
    assert!(parse_theme_pack("{ \"Code\": \"x\" }").is_err());
    assert!(parse_theme_pack("not json").is_err());
}

#[test]
fn test_registry_lookup_order() {
    let mut registry = ThemeRegistry::new();
    let added = registry
        .add_pack(
            r##"[{ "Code": "default", "FontName": "Custom", "FontSize": 10 }]"##,
            "memory.json",
        )
        .unwrap();
    assert_eq!(added, 1);

    // User themes shadow builtins, case-insensitively
    assert_eq!(registry.load_theme("DEFAULT").font_name, "Custom");
    assert_eq!(registry.load_theme("high-contrast").code, "high-contrast");
    assert_eq!(registry.load_theme("missing").code, "default");
    assert_eq!(ThemeRegistry::new().load_theme("missing").font_name, "monospace");
}

#[test]
fn test_registry_loads_json_files_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), PACK).unwrap();
    fs::write(
        dir.path().join("a.json"),
        r##"[{ "Code": "Night", "FontName": "Mono", "FontSize": 13 }]"##,
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "[{").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let registry = ThemeRegistry::load_from_dir(dir.path());
    let list = registry.list();
    let codes: Vec<&str> = list.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["Night", "Solar", "bad-color", "default", "high-contrast"]);

    assert_eq!(list[0].source, ThemeSource::User(dir.path().join("a.json")));
    assert_eq!(list[3].source, ThemeSource::Builtin);
    assert_eq!(registry.load_theme("night").font_size, 13.0);
}

#[test]
fn test_registry_missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ThemeRegistry::load_from_dir(&dir.path().join("nope"));
    assert_eq!(registry.list().len(), BUILTIN_THEMES.len());
}
