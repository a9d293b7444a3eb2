//! The optional universal kit: seven generic controls requested regardless
//! of game or idea.

/// Control headings, one per directive in [`UNIVERSAL_KIT_BLOCK`]
pub const UNIVERSAL_KIT_CONTROLS: [&str; 7] = [
    "Toggle: Noclip",
    "Toggle: Fly",
    "Toggle: Infinite Jump",
    "Slider: WalkSpeed",
    "Button: Fling All",
    "Input & Button: Fling Target",
    "Toggle: FullBright",
];

pub const UNIVERSAL_KIT_BLOCK: &str = r#"### UNIVERSAL KIT REQUIREMENT (CRITICAL)
You MUST Create a NEW Tab called "Universal" or "OP Settings".
Inside this tab, add these WORKING features using standard Roblox services:

1. **Toggle: Noclip**
   - Use 'RunService.Stepped' connection.
   - Loop through LocalPlayer.Character:GetDescendants().
   - If part is BasePart, set CanCollide = false.

2. **Toggle: Fly**
   - Do NOT use simple BodyVelocity. Use a loop that sets HumanoidRootPart.CFrame based on Camera CFrame.
   - Include keybinds (W,A,S,D, Space, Shift).

3. **Toggle: Infinite Jump**
   - Connect to 'UserInputService.JumpRequest'.
   - Set Humanoid:ChangeState(Enum.HumanoidStateType.Jumping).

4. **Slider: WalkSpeed**
   - Range: 16 to 500.
   - IMPORTANT: Use 'Humanoid:GetPropertyChangedSignal("WalkSpeed")' to force the speed back if the game tries to reset it.

5. **Button: Fling All**
   - Loop through all players.
   - For each target:
     - Set LocalPlayer.HumanoidRootPart.CFrame to target.HumanoidRootPart.CFrame.
     - Apply a 'BodyAngularVelocity' with MaxTorque = Vector3.new(math.huge,math.huge,math.huge) and AngularVelocity = Vector3.new(0,10000,0).
     - Wait 0.1s, then remove the velocity and move to the next player.
   - Keep Noclip active during the fling so the LocalPlayer does not die.

6. **Input & Button: Fling Target**
   - Accept a username string (partial match).
   - Apply the same 'BodyAngularVelocity' logic to that one player until toggled off or the button logic finishes.

7. **Toggle: FullBright**
   - Lighting.Brightness = 2, Lighting.ClockTime = 14, Lighting.GlobalShadows = false."#;

/// The kit block when requested, otherwise empty
pub fn kit_block(include: bool) -> &'static str {
    if include { UNIVERSAL_KIT_BLOCK } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lists_every_control() {
        for control in UNIVERSAL_KIT_CONTROLS {
            assert!(UNIVERSAL_KIT_BLOCK.contains(&format!("**{}**", control)), "{control}");
        }
    }

    #[test]
    fn test_disabled_kit_is_empty() {
        assert_eq!(kit_block(false), "");
        assert_eq!(kit_block(true), UNIVERSAL_KIT_BLOCK);
    }
}
