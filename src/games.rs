//! Game-specific prompt blocks.
//!
//! Each rule pairs a predicate over the game name with a fixed block of
//! implementation directives. Rules are evaluated independently and in
//! order; a name matching no rule adds nothing to the prompt.

/// A predicate over the game name and the block it enables
#[derive(Debug, Clone, Copy)]
pub struct GameRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub block: &'static str,
}

pub const MM2_BLOCK: &str = r#"### SPECIFIC GAME LOGIC: MURDER MYSTERY 2
- **ESP Requirement**: You MUST detect roles by scanning every Player's 'Backpack' and 'Character' for a Tool named "Knife" (Murderer) or "Gun" (Sheriff).
- **Auto Coins (CRITICAL FIX)**: The coins are NOT in a fixed folder. They are inside the ACTIVE MAP folder (e.g., workspace.Bank2.CoinAreas). You MUST iterate 'workspace:GetChildren()' to find the active map, BUT DO THIS ONCE per round, not every frame.
- **Kill Aura**: If LocalPlayer is Murderer (has Knife), loop through players < 15 studs. If found, activate the Knife tool."#;

pub const DOORS_BLOCK: &str = r#"### SPECIFIC GAME LOGIC: DOORS
- **UI STYLING**:
  - For the ESP/Visuals tab/section, use an **Eye** icon (e.g. 'lucide-eye', 'rbxassetid://4483362458' or similar).
  - For Movement, use a **Human/Walking** icon (e.g. 'lucide-footprints').

- **ESP PERFORMANCE (CRITICAL)**:
  - **Scope**: ONLY scan 'workspace.CurrentRooms'. Do NOT scan the entire workspace.
  - **Caching**: Use 'workspace.CurrentRooms.DescendantAdded:Connect()' to add items to ESP tables. Do NOT loop descendants every frame.

- **ESP TARGETS**:
  - **Items**: Key, Lighter, Flashlight, Vitamins, Crucifix, Bandage.
  - **Loot**: "Chest" (Box), "Drawer" (if containing items).
  - **Objectives**: "Book", "BreakerSwitch", "Lever", "Key", "Gate", "Door".
  - **Hiding Spots**: Highlight "Wardrobe" and "Closet" models (useful for hiding from Rush).
  - **Entities**: Red Highlight for "RushMoving", "AmbushMoving", "Eyes", "Screech", "Seek".

- **AUTO LOOT AURA**:
  - Loop nearby descendants of CurrentRooms (Radius < 14).
  - If Name is "Gold" or an Item AND has a ProximityPrompt, fire it automatically.

- **LIBRARY SOLVER**:
  - Highlight all "Book" models in the library. If possible, display the "Hint" code on screen (ScreenGui TextLabel).

- **ANTI-ENTITY**:
  - Destroy "Spider" (Timothy) and "Screech" on ChildAdded.

- **MOVEMENT**:
  - Speed Slider (16-25), Noclip (Toggle via Stepped loop on Character), Fly (G keybind)."#;

pub const GLASS_BRIDGE_BLOCK: &str = r#"### SPECIFIC GAME LOGIC: THE GLASS BRIDGE
- **REQUIRED UI**: You MUST create a Toggle named "Highlight Safe Path".
- **Implementation Logic**:
  1. Listen to 'workspace.DescendantAdded' or 'ChildAdded'.
  2. When scanning, verify the Object Name is "Step".
  3. If it is a "Step":
     - Find child "glass_tempered" -> Apply GREEN Highlight (FillColor = Color3.fromRGB(0,255,0)).
     - Find child "glass_weak" -> Apply RED Highlight (FillColor = Color3.fromRGB(255,0,0)).
- **Important**: The "Step" might be in a folder. Use 'workspace:GetDescendants()' once on enable, then listen for new steps."#;

/// Case-insensitive substring test against any of the triggers
fn contains_any(game_name: &str, triggers: &[&str]) -> bool {
    let lower = game_name.to_lowercase();
    triggers.iter().any(|trigger| lower.contains(trigger))
}

pub fn is_mm2(game_name: &str) -> bool {
    contains_any(game_name, &["murder mystery 2", "mm2"])
}

pub fn is_doors(game_name: &str) -> bool {
    contains_any(game_name, &["doors"])
}

pub fn is_glass_bridge(game_name: &str) -> bool {
    contains_any(game_name, &["glass bridge"])
}

/// Rules in prompt order
pub const GAME_RULES: &[GameRule] = &[
    GameRule {
        name: "Murder Mystery 2",
        matches: is_mm2,
        block: MM2_BLOCK,
    },
    GameRule {
        name: "DOORS",
        matches: is_doors,
        block: DOORS_BLOCK,
    },
    GameRule {
        name: "The Glass Bridge",
        matches: is_glass_bridge,
        block: GLASS_BRIDGE_BLOCK,
    },
];

/// Rules whose predicate accepts `game_name`, in prompt order
pub fn matching_rules(game_name: &str) -> Vec<&'static GameRule> {
    GAME_RULES
        .iter()
        .filter(|rule| (rule.matches)(game_name))
        .collect()
}

/// One entry per rule: the block when it matches, empty otherwise
pub fn game_blocks(game_name: &str) -> [&'static str; 3] {
    let mut blocks = [""; 3];
    for (slot, rule) in blocks.iter_mut().zip(GAME_RULES) {
        if (rule.matches)(game_name) {
            *slot = rule.block;
        }
    }
    blocks
}
