//! Highlight themes for the markup editor
//!
//! Built-in themes are embedded YAML; user themes come from JSON theme packs,
//! each file holding an array of themes.
//!
//! Theme loading priority:
//! 1. User packs: `~/.config/vtml-editor/themes/*.json`
//! 2. Embedded: Built-in themes compiled into binary
//! 3. The built-in `default` theme (with a warning)

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::syntax::TokenType;

// Embed theme YAML files at compile time
pub const DEFAULT_THEME_YAML: &str = include_str!("../themes/default.yaml");
pub const HIGH_CONTRAST_THEME_YAML: &str = include_str!("../themes/high-contrast.yaml");

/// Code of the theme used when nothing else matches
pub const DEFAULT_THEME_CODE: &str = "default";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable code for config (e.g. "default", "high-contrast")
    pub code: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        code: DEFAULT_THEME_CODE,
        yaml: DEFAULT_THEME_YAML,
    },
    BuiltinTheme {
        code: "high-contrast",
        yaml: HIGH_CONTRAST_THEME_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Theme pack file in ~/.config/vtml-editor/themes/
    User(PathBuf),
    /// Built-in theme embedded in binary
    Builtin,
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSource::User(path) => write!(f, "user ({})", path.display()),
            ThemeSource::Builtin => f.write_str("builtin"),
        }
    }
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub code: String,
    pub font_name: String,
    pub source: ThemeSource,
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("{}: {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBBAA"
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// Raw theme data as parsed from YAML or a JSON theme pack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeData {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(alias = "FontName")]
    pub font_name: String,
    #[serde(alias = "FontSize")]
    pub font_size: f32,
    /// Token type -> hex color; null means "use the font color"
    #[serde(default, alias = "TokenColors")]
    pub token_colors: BTreeMap<TokenType, Option<String>>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightTheme {
    pub code: String,
    pub font_name: String,
    pub font_size: f32,
    pub token_colors: HashMap<TokenType, Option<Color>>,
}

impl HighlightTheme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by code
    pub fn from_builtin(code: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("Unknown theme code: {}", code))?;
        Self::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to a resolved theme.
    ///
    /// Code and font name must be non-empty and the font size positive.
    /// A malformed color is dropped with a warning, as if it were null.
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.code.trim().is_empty() {
            return Err("Theme code is empty".to_string());
        }
        if data.font_name.trim().is_empty() {
            return Err(format!("Theme {} has no font name", data.code));
        }
        if data.font_size.is_nan() || data.font_size <= 0.0 {
            return Err(format!(
                "Theme {} has invalid font size {}",
                data.code, data.font_size
            ));
        }

        let mut token_colors = HashMap::new();
        for (token_type, hex) in data.token_colors {
            let color = match hex.as_deref().map(Color::from_hex).transpose() {
                Ok(color) => color,
                Err(e) => {
                    tracing::warn!(
                        "Theme {}: ignoring color for {}: {}",
                        data.code,
                        token_type,
                        e
                    );
                    None
                }
            };
            token_colors.insert(token_type, color);
        }

        Ok(Self {
            code: data.code,
            font_name: data.font_name,
            font_size: data.font_size,
            token_colors,
        })
    }

    /// Color for a token type; None means the default font color
    pub fn color_for(&self, token_type: TokenType) -> Option<Color> {
        self.token_colors.get(&token_type).copied().flatten()
    }

    /// Built-in default theme (YAML-backed with Rust fallback)
    pub fn default_theme() -> Self {
        match Self::from_yaml(DEFAULT_THEME_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                let gray = Some(Color::rgb(0x8F, 0x8F, 0x8F));
                Self {
                    code: DEFAULT_THEME_CODE.to_string(),
                    font_name: "monospace".to_string(),
                    font_size: 14.0,
                    token_colors: HashMap::from([
                        (TokenType::Text, None),
                        (TokenType::TagDelimiter, gray),
                        (TokenType::TagName, gray),
                        (TokenType::AttributeName, Some(Color::rgb(0xCC, 0x99, 0x66))),
                        (TokenType::EqualsSign, gray),
                        (TokenType::AttributeValue, Some(Color::rgb(0x6B, 0xA6, 0xCF))),
                    ]),
                }
            }
        }
    }
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Parse a JSON theme pack (an array of themes).
///
/// Entries that fail to deserialize or validate are skipped with a warning;
/// only a file that is not a JSON array at all is an error.
pub fn parse_theme_pack(json: &str) -> Result<Vec<HighlightTheme>, String> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| format!("JSON parse error: {}", e))?;

    let mut themes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = serde_json::from_value::<ThemeData>(entry)
            .map_err(|e| e.to_string())
            .and_then(HighlightTheme::from_data);
        match parsed {
            Ok(theme) => themes.push(theme),
            Err(e) => tracing::warn!("failed to load theme at index {}: {}", index, e),
        }
    }
    Ok(themes)
}

/// Load a theme pack file
pub fn from_file(path: &Path) -> Result<Vec<HighlightTheme>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme pack {}: {}", path.display(), e))?;
    parse_theme_pack(&content)
}

/// All themes available to the editor: user packs first, then built-ins.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    user_themes: Vec<(HighlightTheme, PathBuf)>,
}

impl ThemeRegistry {
    /// Registry with built-in themes only
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the packs from the user's config directory
    pub fn load() -> Self {
        match crate::config_paths::themes_dir() {
            Some(dir) => Self::load_from_dir(&dir),
            None => Self::new(),
        }
    }

    /// Registry with every `*.json` pack in `dir` (sorted by file name)
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut registry = Self::new();
        let Ok(entries) = std::fs::read_dir(dir) else {
            tracing::debug!("No theme directory at {}", dir.display());
            return registry;
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            match from_file(&path) {
                Ok(themes) => {
                    tracing::info!("Loaded {} theme(s) from {}", themes.len(), path.display());
                    registry
                        .user_themes
                        .extend(themes.into_iter().map(|t| (t, path.clone())));
                }
                Err(e) => tracing::warn!("Skipping theme pack: {}", e),
            }
        }
        registry
    }

    /// Add themes from an in-memory pack
    pub fn add_pack(&mut self, json: &str, origin: impl Into<PathBuf>) -> Result<usize, String> {
        let origin = origin.into();
        let themes = parse_theme_pack(json)?;
        let count = themes.len();
        self.user_themes
            .extend(themes.into_iter().map(|t| (t, origin.clone())));
        Ok(count)
    }

    /// Find a user theme by code (case-insensitive)
    pub fn user_theme(&self, code: &str) -> Option<&HighlightTheme> {
        self.user_themes
            .iter()
            .map(|(theme, _)| theme)
            .find(|theme| theme.code.eq_ignore_ascii_case(code))
    }

    /// Load theme by code with priority: user → builtin → default
    pub fn load_theme(&self, code: &str) -> HighlightTheme {
        if let Some(theme) = self.user_theme(code) {
            tracing::info!("Using user theme: {}", theme.code);
            return theme.clone();
        }

        match HighlightTheme::from_builtin(code) {
            Ok(theme) => {
                tracing::info!("Using builtin theme: {}", theme.code);
                theme
            }
            Err(e) => {
                tracing::warn!("{}; falling back to the default theme", e);
                HighlightTheme::default_theme()
            }
        }
    }

    /// List all available themes; user themes shadow builtins with the same code
    pub fn list(&self) -> Vec<ThemeInfo> {
        let mut themes: Vec<ThemeInfo> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for (theme, path) in &self.user_themes {
            if seen.insert(theme.code.to_lowercase()) {
                themes.push(ThemeInfo {
                    code: theme.code.clone(),
                    font_name: theme.font_name.clone(),
                    source: ThemeSource::User(path.clone()),
                });
            }
        }

        for builtin in BUILTIN_THEMES {
            if seen.insert(builtin.code.to_lowercase()) {
                let font_name = HighlightTheme::from_yaml(builtin.yaml)
                    .map(|t| t.font_name)
                    .unwrap_or_default();
                themes.push(ThemeInfo {
                    code: builtin.code.to_string(),
                    font_name,
                    source: ThemeSource::Builtin,
                });
            }
        }

        themes
    }
}
