//! Script synthesis prompt.
//!
//! The prompt is one handlebars template whose sections always appear in the
//! same order: persona, debugging requirements, UI mapping rules with the
//! library's syntax guide, configuration summary, theme directive,
//! performance rules, code structure with the library import, game blocks,
//! universal kit, persistence, and output format rules.

use crate::games;
use crate::kit;
use crate::library;
use crate::types::{DEFAULT_THEME, GenerationRequest};
use serde::Serialize;

pub const SYNTHESIS_TEMPLATE: &str = r#"You are an elite Roblox Lua Scripter. Write a ROBUST, CRASH-PROOF LocalScript for "{{game_name}}".

### CRITICAL: DEBUGGING & FEEDBACK (FIX "SCRIPT NOT WORKING")
1. **Wait For Game**: Start with 'repeat task.wait() until game:IsLoaded()' to ensure the game is ready.
2. **Load Notification**: IMMEDIATELY after loading the Library, call the Library's Notify function (e.g., Fluent:Notify or Rayfield:Notify) with Title="Script Loaded" and Content="Enjoy your script!". This confirms to the user that the code is running.
3. **Anti-AFK**: Include a simple Anti-AFK script at the bottom: 'game:GetService("VirtualUser"):CaptureController()'.
4. **Safety Checks**:
   - NEVER index 'workspace' directly for dynamic folders. Use 'workspace:WaitForChild("FolderName", 5)'.
   - Always check 'if LocalPlayer.Character then' before accessing Character parts.
5. **Thread Safety**: Wrap infinite loops (while true do) inside 'task.spawn(function() ... end)' so they do not freeze the UI.

### CRITICAL: UI GENERATION RULES (FIX "EMPTY GUI")
1. **ALWAYS Create Elements**: You MUST create actual UI elements (Buttons, Toggles, Sliders) inside the Tab. Do not just write standalone logic code.
2. **Mapping Rules**:
   - "ESP", "Auto", "Loop", "Aura" -> MUST be a **Toggle**.
   - "Teleport", "Get", "Give", "Kill" -> MUST be a **Button**.
   - "Speed", "Height", "Distance" -> MUST be a **Slider**.
3. **Syntax Guide**: Use the following syntax for the selected library:
{{syntax_guide}}

### CONFIGURATION
- **Library**: {{library}}
- **Feature Category**: {{idea_title}}
- **Specific Features**: {{idea_description}}
- **Difficulty**: {{difficulty}}
{{#if feature_context}}
- **Feature Context**: {{feature_context}}
{{/if}}

{{theme_directive}}

### PERFORMANCE & FPS OPTIMIZATION
You MUST optimize the ESP logic:
1. **NO Heavy Loops in RenderStepped**: NEVER loop through 'workspace:GetDescendants()' or 'GetChildren()' inside a 'RunService.RenderStepped' loop. This causes massive lag.
2. **Event-Based Caching**:
   - Create a table 'local ValidTargets = {}'.
   - Listen to 'workspace.DescendantAdded' (or specific folder events like 'CurrentRooms.DescendantAdded') to insert valid items into 'ValidTargets'.
   - Listen to 'workspace.DescendantRemoving' to remove them.
   - In 'RenderStepped', ONLY iterate through the 'ValidTargets' table to update positions/highlights.
3. **Instance Reuse**: Use 'Highlight' instances (Adornee = model) instead of manual Line/Box drawing if possible, as Roblox optimizes Highlights natively. Do not create new Instances every frame.
4. **Distance Checks**: Only render ESP if 'LocalPlayer:DistanceFromCharacter(target) < 2000' (or appropriate range).

### CODE STRUCTURE REQUIREMENTS
1. **Imports & Services**:
   - Start with 'local Players = game:GetService("Players")'
   - 'local RunService = game:GetService("RunService")'
   - 'local UserInputService = game:GetService("UserInputService")'
   - 'local LocalPlayer = Players.LocalPlayer'
   - THEN include the library loadstring:
{{import_code}}

2. **Window Creation**: Initialize the Window/Hub using the official {{library}} syntax.
   - Title: "GenAI | {{game_name}}"

3. **Tabs**:
   - Create a Tab named "{{idea_title}}".
   - Implement the "Specific Features" listed above inside this tab using Toggles/Buttons.
   - USE 'pcall' for risky operations.

{{mm2_block}}

{{doors_block}}

{{glass_bridge_block}}

{{kit_block}}

4. **Safety & Persistence (CRITICAL)**:
   - **Respawn Safety**: If a feature (like Fly, Speed, ESP) is enabled, it MUST automatically re-enable after the LocalPlayer respawns.
   - **Cleanup**: Ensure old connections are cleaned up.

### OUTPUT RULES
- Output ONLY raw Lua code.
- NO markdown backticks (e.g. ```lua).
- NO explanation text.
- The code must be copy-paste ready."#;

pub const THEME_TEMPLATE: &str = r#"### THEME CONFIGURATION
The user selected the color: **{{default theme_color "Violet"}}**.
- **Rayfield**: Set 'Configuration.Theme' to '{{rayfield_theme}}' to match {{default theme_color "Violet"}} (e.g., 'Amethyst' for Violet, 'Light' for White, 'Amber' for Orange, 'Green', 'Red', 'DarkBlue').
- **Fluent**: Configure the Window 'Theme' or 'MainColor' options to match **{{default theme_color "Violet"}}**.
- **Other libraries**: Use the library's accent or theme color options to match **{{default theme_color "Violet"}}**."#;

/// Rayfield's built-in theme closest to a colour name
pub fn rayfield_theme(theme_color: &str) -> String {
    let color = theme_color.trim();
    let color = if color.is_empty() { DEFAULT_THEME } else { color };
    match color.to_lowercase().as_str() {
        "violet" | "purple" => "Amethyst".to_string(),
        "white" => "Light".to_string(),
        "orange" => "Amber".to_string(),
        "green" => "Green".to_string(),
        "red" => "Red".to_string(),
        "blue" => "DarkBlue".to_string(),
        _ => color.to_string(),
    }
}

/// Values substituted into [`THEME_TEMPLATE`]
#[derive(Debug, Serialize)]
pub struct ThemeContext<'a> {
    pub theme_color: &'a str,
    pub rayfield_theme: String,
}

impl<'a> ThemeContext<'a> {
    pub fn new(theme_color: &'a str) -> Self {
        Self {
            theme_color,
            rayfield_theme: rayfield_theme(theme_color),
        }
    }
}

/// Values substituted into [`SYNTHESIS_TEMPLATE`]
#[derive(Debug, Serialize)]
pub struct SynthesisContext<'a> {
    pub game_name: &'a str,
    pub library: &'static str,
    pub idea_title: &'a str,
    pub idea_description: &'a str,
    pub difficulty: &'static str,
    pub feature_context: &'a str,
    pub syntax_guide: &'static str,
    pub import_code: &'static str,
    pub theme_directive: String,
    pub mm2_block: &'static str,
    pub doors_block: &'static str,
    pub glass_bridge_block: &'static str,
    pub kit_block: &'static str,
}

impl<'a> SynthesisContext<'a> {
    /// Resolve every conditional block for a request. The theme directive
    /// is rendered separately and passed in.
    pub fn new(request: &'a GenerationRequest, theme_directive: String) -> Self {
        let templates = library::lookup(request.library);
        let [mm2_block, doors_block, glass_bridge_block] = games::game_blocks(&request.game_name);

        Self {
            game_name: &request.game_name,
            library: request.library.name(),
            idea_title: &request.idea.title,
            idea_description: &request.idea.description,
            difficulty: request.idea.difficulty.as_str(),
            feature_context: request.idea.feature_context.as_deref().unwrap_or(""),
            syntax_guide: templates.syntax_guide,
            import_code: templates.import_snippet,
            theme_directive,
            mm2_block,
            doors_block,
            glass_bridge_block,
            kit_block: kit::kit_block(request.include_universal_kit),
        }
    }
}
