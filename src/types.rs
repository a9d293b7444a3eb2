use crate::error::{Result, ScriptGenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme colour used when none is chosen
pub const DEFAULT_THEME: &str = "Violet";

/// How demanding a feature idea is. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Insane => "Insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ScriptGenError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScriptGenError::Input(format!("Unknown difficulty: {}", s)))
    }
}

/// A titled, described feature suggestion, brainstormed or hand-written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptIdea {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Extra generator context that is never shown as a label
    #[serde(
        default,
        rename = "featureContext",
        skip_serializing_if = "Option::is_none"
    )]
    pub feature_context: Option<String>,
}

impl ScriptIdea {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
            feature_context: None,
        }
    }

    /// Build a hand-authored idea, rejecting blank title or description
    pub fn custom(title: &str, description: &str, difficulty: Difficulty) -> Result<Self> {
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(ScriptGenError::Input(
                "Please fill in all fields for the custom script.".to_string(),
            ));
        }
        Ok(Self::new(title.trim(), description.trim(), difficulty))
    }

    pub fn with_feature_context(mut self, context: impl Into<String>) -> Self {
        self.feature_context = Some(context.into());
        self
    }
}

/// Target UI library the generated script is written against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UiLibrary {
    #[default]
    Rayfield,
    Fluent,
    Solaris,
    Orion,
    Kavo,
}

impl UiLibrary {
    pub const ALL: [UiLibrary; 5] = [
        UiLibrary::Rayfield,
        UiLibrary::Fluent,
        UiLibrary::Solaris,
        UiLibrary::Orion,
        UiLibrary::Kavo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UiLibrary::Rayfield => "Rayfield",
            UiLibrary::Fluent => "Fluent",
            UiLibrary::Solaris => "Solaris",
            UiLibrary::Orion => "Orion",
            UiLibrary::Kavo => "Kavo",
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UiLibrary {
    type Err = ScriptGenError;

    fn from_str(s: &str) -> Result<Self> {
        UiLibrary::ALL
            .into_iter()
            .find(|lib| lib.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScriptGenError::Input(format!("Unknown UI library: {}", s)))
    }
}

/// Everything that determines one script synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub game_name: String,
    pub idea: ScriptIdea,
    pub library: UiLibrary,
    pub include_universal_kit: bool,
    pub theme_color: String,
}

impl GenerationRequest {
    /// Rayfield, no universal kit, Violet theme
    pub fn new(game_name: impl Into<String>, idea: ScriptIdea) -> Self {
        Self {
            game_name: game_name.into(),
            idea,
            library: UiLibrary::default(),
            include_universal_kit: false,
            theme_color: DEFAULT_THEME.to_string(),
        }
    }

    pub fn with_library(mut self, library: UiLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn with_universal_kit(mut self, include: bool) -> Self {
        self.include_universal_kit = include;
        self
    }

    pub fn with_theme(mut self, theme_color: impl Into<String>) -> Self {
        self.theme_color = theme_color.into();
        self
    }
}
