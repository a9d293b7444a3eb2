//! Quick-start data: suggested games, theme colours and one-click kits.

use crate::types::{Difficulty, ScriptIdea};

pub const POPULAR_GAMES: [&str; 6] = [
    "Murder Mystery 2",
    "Doors Floor 1",
    "The Glass Bridge",
    "Blox Fruits",
    "Pet Simulator 99",
    "BedWars",
];

pub const THEME_COLORS: [&str; 6] = ["Violet", "Red", "Blue", "Green", "Orange", "White"];

/// Game used by the universal kit when no game name is entered
pub const UNIVERSAL_GAME: &str = "Universal";

/// A ready-made idea, optionally pinned to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKit {
    Universal,
    MurderMystery2,
    Doors,
    GlassBridge,
}

impl PresetKit {
    pub const ALL: [PresetKit; 4] = [
        PresetKit::Universal,
        PresetKit::MurderMystery2,
        PresetKit::Doors,
        PresetKit::GlassBridge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PresetKit::Universal => "Universal Kit",
            PresetKit::MurderMystery2 => "MM2 OP Kit",
            PresetKit::Doors => "Doors OP Kit",
            PresetKit::GlassBridge => "Glass Bridge Kit",
        }
    }

    /// The game this kit switches to, or `None` to keep the current one
    pub fn game_name(&self) -> Option<&'static str> {
        match self {
            PresetKit::Universal => None,
            PresetKit::MurderMystery2 => Some("Murder Mystery 2"),
            PresetKit::Doors => Some("Doors"),
            PresetKit::GlassBridge => Some("The Glass Bridge"),
        }
    }

    /// Game to generate for given what the user has typed so far
    pub fn resolve_game(&self, current: &str) -> String {
        match self.game_name() {
            Some(game) => game.to_string(),
            None if current.trim().is_empty() => UNIVERSAL_GAME.to_string(),
            None => current.trim().to_string(),
        }
    }

    pub fn idea(&self) -> ScriptIdea {
        match self {
            PresetKit::Universal => ScriptIdea::new(
                "Universal God Mode Kit",
                "SAFE MODE ENABLED: Noclip (Toggle), Fly (CFrame), Infinite Jump, WalkSpeed Slider, NoFog, Full Light (FullBright), Fling All, Fling Target Player.",
                Difficulty::Insane,
            ),
            PresetKit::MurderMystery2 => ScriptIdea::new(
                "MM2 OP Kit",
                "Auto Coins (Tween), Kill Aura (Murder), Auto Grab Gun, ESP Roles (Murder/Sheriff/Innocent - Updates 0.1s), Hitbox Expander (Size 10), Silent Aim.",
                Difficulty::Insane,
            ),
            PresetKit::Doors => ScriptIdea::new(
                "Doors OP Kit (Optimized)",
                "LAG FREE + ANTI-CRASH: Includes Closets/Wardrobes, Doors, Keys, Books, Chests, Breakers, Noclip, Loot Aura, Code Solver, FullBright, Speed, Fly.",
                Difficulty::Insane,
            ),
            PresetKit::GlassBridge => ScriptIdea::new(
                "Glass Bridge God Mode",
                "Auto Highlight Safe Path (Green for Tempered, Red for Weak). Uses 'Step' model detection. Includes WalkSpeed, JumpPower, and Anti-Fall.",
                Difficulty::Easy,
            ),
        }
    }
}
