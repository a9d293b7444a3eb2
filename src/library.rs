//! Static per-library prompt text.
//!
//! Each supported UI library maps to the snippet that bootstraps it and a
//! short syntax guide showing the window, tab, toggle, button and slider
//! calls. Solaris and Kavo have no authored guide.

use crate::types::UiLibrary;
use tracing::warn;

/// Bootstrap snippet and syntax guide for one UI library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryTemplate {
    pub import_snippet: &'static str,
    pub syntax_guide: &'static str,
}

pub const RAYFIELD_IMPORT: &str = r#"getgenv().SecureMode = true
local Rayfield = loadstring(game:HttpGet('https://sirius.menu/rayfield'))()"#;

pub const FLUENT_IMPORT: &str = r#"local Fluent = loadstring(game:HttpGet("https://github.com/dawid-scripts/Fluent/releases/latest/download/main.lua"))()"#;

pub const SOLARIS_IMPORT: &str = r#"local SolarisLib = loadstring(game:HttpGet("https://raw.githubusercontent.com/BloodBall/Solaris-Lib/main/SolarisLib.lua"))()"#;

pub const ORION_IMPORT: &str = r#"local OrionLib = loadstring(game:HttpGet(('https://raw.githubusercontent.com/shlexware/Orion/main/source')))()"#;

pub const KAVO_IMPORT: &str = r#"local Kavo = loadstring(game:HttpGet("https://raw.githubusercontent.com/xHeptc/Kavo-UI-Library/main/source.lua"))()"#;

pub const RAYFIELD_SYNTAX: &str = r#"-- RAYFIELD SYNTAX GUIDE (DO NOT HALLUCINATE)
local Window = Rayfield:CreateWindow({Name = "GenAI Hub", LoadingTitle = "GenAI", Configuration = {Saving = {Enabled = false}}})
local Tab = Window:CreateTab("Main", 4483362458) -- Title, IconID
local Section = Tab:CreateSection("Features")

-- Toggle
Tab:CreateToggle({
   Name = "Toggle Name",
   CurrentValue = false,
   Flag = "Toggle1",
   Callback = function(Value)
      getgenv().FeatureEnabled = Value
      if Value then task.spawn(function() while getgenv().FeatureEnabled do task.wait() end end) end
   end
})

-- Button
Tab:CreateButton({
   Name = "Button Name",
   Callback = function()
      print("Clicked")
   end
})

-- Slider
Tab:CreateSlider({
   Name = "Slider Name",
   Range = {0, 100},
   Increment = 1,
   Suffix = "Value",
   CurrentValue = 10,
   Flag = "Slider1",
   Callback = function(Value)
      print(Value)
   end
})"#;

pub const FLUENT_SYNTAX: &str = r#"-- FLUENT SYNTAX GUIDE (DO NOT HALLUCINATE)
local Window = Fluent:CreateWindow({Title = "GenAI Hub", SubTitle = "by GenAI", TabWidth = 160, Size = UDim2.fromOffset(580, 460), Theme = "Dark", MinimizeKey = Enum.KeyCode.LeftControl})
local Tab = Window:AddTab({ Title = "Main", Icon = "" })

-- Toggle
local Toggle = Tab:AddToggle("MyToggle", {Title = "Toggle Name", Default = false})
Toggle:OnChanged(function()
    getgenv().FeatureEnabled = Toggle.Value
    if Toggle.Value then task.spawn(function() while getgenv().FeatureEnabled do task.wait() end end) end
end)

-- Button
Tab:AddButton({
    Title = "Button Name",
    Callback = function()
        print("Clicked")
    end
})

-- Slider
local Slider = Tab:AddSlider("MySlider", {
    Title = "Slider Name",
    Description = "Optional description",
    Default = 16,
    Min = 0,
    Max = 100,
    Rounding = 1,
    Callback = function(Value)
        print(Value)
    end
})"#;

pub const ORION_SYNTAX: &str = r#"-- ORION SYNTAX GUIDE (DO NOT HALLUCINATE)
local Window = OrionLib:MakeWindow({Name = "GenAI Hub", HidePremium = false, SaveConfig = false, IntroText = "GenAI"})
local Tab = Window:MakeTab({Name = "Main", Icon = "rbxassetid://4483345998", PremiumOnly = false})
local Section = Tab:AddSection({Name = "Features"})

-- Toggle
Tab:AddToggle({
    Name = "Toggle Name",
    Default = false,
    Callback = function(Value)
        getgenv().FeatureEnabled = Value
        if Value then task.spawn(function() while getgenv().FeatureEnabled do task.wait() end end) end
    end
})

-- Button
Tab:AddButton({
    Name = "Button Name",
    Callback = function()
        print("Clicked")
    end
})

-- Slider
Tab:AddSlider({
    Name = "Slider Name",
    Min = 0,
    Max = 100,
    Default = 16,
    Increment = 1,
    ValueName = "Value",
    Callback = function(Value)
        print(Value)
    end
})

-- Must be called once after every element is created
OrionLib:Init()"#;

/// Lookup table from library to its templates. Rayfield must stay first.
pub const LIBRARY_TABLE: &[(UiLibrary, LibraryTemplate)] = &[
    (
        UiLibrary::Rayfield,
        LibraryTemplate {
            import_snippet: RAYFIELD_IMPORT,
            syntax_guide: RAYFIELD_SYNTAX,
        },
    ),
    (
        UiLibrary::Fluent,
        LibraryTemplate {
            import_snippet: FLUENT_IMPORT,
            syntax_guide: FLUENT_SYNTAX,
        },
    ),
    (
        UiLibrary::Solaris,
        LibraryTemplate {
            import_snippet: SOLARIS_IMPORT,
            syntax_guide: "",
        },
    ),
    (
        UiLibrary::Orion,
        LibraryTemplate {
            import_snippet: ORION_IMPORT,
            syntax_guide: ORION_SYNTAX,
        },
    ),
    (
        UiLibrary::Kavo,
        LibraryTemplate {
            import_snippet: KAVO_IMPORT,
            syntax_guide: "",
        },
    ),
];

/// Resolve a library's templates, falling back to Rayfield when absent
pub fn lookup(library: UiLibrary) -> &'static LibraryTemplate {
    resolve(LIBRARY_TABLE, library)
}

fn resolve(
    table: &'static [(UiLibrary, LibraryTemplate)],
    library: UiLibrary,
) -> &'static LibraryTemplate {
    match table.iter().find(|(lib, _)| *lib == library) {
        Some((_, template)) => template,
        None => {
            warn!("No templates for {}, falling back to Rayfield", library);
            &LIBRARY_TABLE[0].1
        }
    }
}
