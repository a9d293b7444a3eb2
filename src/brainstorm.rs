//! Idea brainstorm prompt, output schema and response parsing.

use crate::error::{Result, ScriptGenError};
use crate::sanitize::strip_code_fences;
use crate::types::{Difficulty, ScriptIdea};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

/// Number of ideas requested per brainstorm
pub const IDEA_COUNT: usize = 10;

/// Generic titles that are never acceptable as a category label
pub const BANNED_TITLES: [&str; 2] = ["Script", "Hack"];

pub const BRAINSTORM_TEMPLATE: &str = r#"Generate {{idea_count}} distinct and advanced Roblox script feature ideas for the game "{{game_name}}".

The user wants a "Script Hub" style output (like Rayfield/Fluent).

STRICT FORMATTING RULES:
1. **Title**: MUST be a single generic category word.
   - ALLOWED: "Vision", "Trolling", "Combat", "Movement", "Automation", "World".
   - BANNED: "{{game_name}}", "Script", "Hack", "MM2", "Blox Fruits".

2. **Description**: MUST be a concise list of features within that category.
   - Do not use sentences.
   - List specific mechanics.

Examples for style matching:

Game: "Murder Mystery 2"
Idea 1:
- Title: "Vision"
- Description: "ESP Murderer, ESP Sheriff, ESP Innocent, ESP Gun (If Drop), Tracers, Box ESP."
Idea 2:
- Title: "Trolling"
- Description: "Fling Player, Fling All, Fling Murderer, Fling Sheriff, Fling Random Player, Spinbot."
Idea 3:
- Title: "Combat"
- Description: "(Only Murderer) Auto Aim, (Only Sheriff) Auto Grab Gun, Kill Aura, Silent Aim."

Game: "Blox Fruits"
Idea 1:
- Title: "Automation"
- Description: "Auto Farm Level, Auto Collect Fruit, Auto Stats, Auto Raid."

Generate {{idea_count}} ideas for "{{game_name}}" following this exact pattern.
Include at least one "Insane" difficulty idea for the most overpowered features.

Return exactly {{idea_count}} ideas."#;

/// Values substituted into [`BRAINSTORM_TEMPLATE`]
#[derive(Debug, Serialize)]
pub struct BrainstormContext<'a> {
    pub game_name: &'a str,
    pub idea_count: usize,
}

impl<'a> BrainstormContext<'a> {
    pub fn new(game_name: &'a str) -> Self {
        Self {
            game_name,
            idea_count: IDEA_COUNT,
        }
    }
}

/// Response schema: an array of `{title, description, difficulty}` objects
pub fn output_schema() -> Value {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "difficulty": { "type": "STRING", "enum": difficulties },
            },
            "required": ["title", "description", "difficulty"],
        },
    })
}

/// Parse the service's JSON text into ideas, tolerating drift per element.
///
/// The top level must be an array (or `null`, meaning no ideas). Elements
/// that do not decode, have blank fields, or use a banned title are dropped,
/// and the result is capped at [`IDEA_COUNT`].
pub fn parse_ideas(text: &str, game_name: &str) -> Result<Vec<ScriptIdea>> {
    let body = strip_code_fences(text);
    let items = match serde_json::from_str::<Value>(&body)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ScriptGenError::MalformedResponse(format!(
                "expected a JSON array of ideas, got {}",
                kind_of(&other)
            )));
        }
    };

    let total = items.len();
    let mut ideas: Vec<ScriptIdea> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ScriptIdea>(item) {
            Ok(idea) => Some(idea),
            Err(e) => {
                warn!("Dropping idea that does not match the schema: {}", e);
                None
            }
        })
        .filter(|idea| {
            let acceptable = is_acceptable(idea, game_name);
            if !acceptable {
                warn!("Dropping idea with unusable title '{}'", idea.title);
            }
            acceptable
        })
        .collect();

    if ideas.len() > IDEA_COUNT {
        warn!("Service returned {} ideas, keeping {}", ideas.len(), IDEA_COUNT);
        ideas.truncate(IDEA_COUNT);
    }
    if ideas.len() < total {
        warn!("Kept {} of {} ideas", ideas.len(), total);
    }
    Ok(ideas)
}

fn is_acceptable(idea: &ScriptIdea, game_name: &str) -> bool {
    let title = idea.title.trim();
    if title.is_empty() || idea.description.trim().is_empty() {
        return false;
    }
    if BANNED_TITLES.iter().any(|banned| title.eq_ignore_ascii_case(banned)) {
        return false;
    }
    let game = game_name.trim().to_lowercase();
    game.is_empty() || !title.to_lowercase().contains(&game)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
