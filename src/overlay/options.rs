use eframe::egui;
use egui_extras::syntax_highlighting::CodeTheme;
use serde::{Deserialize, Serialize};

/// Colour palette used for highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightTheme {
    Dark,
    Light,
    /// Dark or light depending on the host's current visuals.
    FollowUi,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        HighlightTheme::Dark
    }
}

impl HighlightTheme {
    pub const ALL: [HighlightTheme; 3] = [
        HighlightTheme::Dark,
        HighlightTheme::Light,
        HighlightTheme::FollowUi,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HighlightTheme::Dark => "dark",
            HighlightTheme::Light => "light",
            HighlightTheme::FollowUi => "follow_ui",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HighlightTheme::Dark => "Dark",
            HighlightTheme::Light => "Light",
            HighlightTheme::FollowUi => "Match UI",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn code_theme(self, style: &egui::Style) -> CodeTheme {
        match self {
            HighlightTheme::Dark => CodeTheme::dark(),
            HighlightTheme::Light => CodeTheme::light(),
            HighlightTheme::FollowUi => CodeTheme::from_style(style),
        }
    }

    /// Fill painted behind the text region so the palette stays readable
    /// regardless of the host's visuals.
    pub fn background(self, style: &egui::Style) -> egui::Color32 {
        match self {
            HighlightTheme::Dark => egui::Color32::from_rgb(43, 48, 59),
            HighlightTheme::Light => egui::Color32::from_rgb(253, 246, 227),
            HighlightTheme::FollowUi => style.visuals.extreme_bg_color,
        }
    }
}

/// Grammar the payload text is highlighted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageGrammar {
    Json,
    #[serde(rename = "javascript")]
    JavaScript,
    Yaml,
    Rust,
    Python,
    PlainText,
}

impl Default for LanguageGrammar {
    fn default() -> Self {
        LanguageGrammar::Json
    }
}

impl LanguageGrammar {
    pub const ALL: [LanguageGrammar; 6] = [
        LanguageGrammar::Json,
        LanguageGrammar::JavaScript,
        LanguageGrammar::Yaml,
        LanguageGrammar::Rust,
        LanguageGrammar::Python,
        LanguageGrammar::PlainText,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LanguageGrammar::Json => "json",
            LanguageGrammar::JavaScript => "javascript",
            LanguageGrammar::Yaml => "yaml",
            LanguageGrammar::Rust => "rust",
            LanguageGrammar::Python => "python",
            LanguageGrammar::PlainText => "plain_text",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LanguageGrammar::Json => "JSON",
            LanguageGrammar::JavaScript => "JavaScript",
            LanguageGrammar::Yaml => "YAML",
            LanguageGrammar::Rust => "Rust",
            LanguageGrammar::Python => "Python",
            LanguageGrammar::PlainText => "Plain text",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }

    /// Token handed to the highlighter. Unknown tokens fall back to
    /// unhighlighted monospace text.
    pub fn syntax_token(self) -> &'static str {
        match self {
            LanguageGrammar::Json => "json",
            LanguageGrammar::JavaScript => "js",
            LanguageGrammar::Yaml => "yaml",
            LanguageGrammar::Rust => "rs",
            LanguageGrammar::Python => "py",
            LanguageGrammar::PlainText => "txt",
        }
    }
}

/// User-toggleable presentation settings. Independent of the payload and of
/// the panel's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default)]
    pub wrap_long_lines: bool,
    #[serde(default)]
    pub show_line_numbers: bool,
    #[serde(default)]
    pub theme: HighlightTheme,
    #[serde(default)]
    pub language: LanguageGrammar,
}
