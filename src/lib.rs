//! # gamecode-scriptgen
//!
//! Brainstorm feature ideas for game automation scripts and synthesize the
//! scripts with a text-completion service.
//!
//! ## Features
//!
//! - **Idea Brainstorming**: Ask the service for exactly ten schema-constrained ideas
//! - **Script Synthesis**: Assemble a composite prompt from library, game and kit blocks
//! - **Template Support**: Prompts are Handlebars templates rendered without escaping
//! - **Sanitization**: Code fences are stripped from generated text
//! - **Workflow**: A small state machine for driving both operations from a UI
//! - **Export**: Write generated scripts to disk under a predictable name
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gamecode_scriptgen::{GenerationRequest, ScriptGenerator, UiLibrary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ScriptGenerator::new()?;
//!
//! let ideas = generator.brainstorm("Doors").await?;
//! let request = GenerationRequest::new("Doors", ideas[0].clone())
//!     .with_library(UiLibrary::Fluent)
//!     .with_theme("Blue");
//!
//! let code = generator.synthesize(&request).await?;
//! println!("{}", code);
//! # Ok(())
//! # }
//! ```

pub mod brainstorm;
pub mod completion;
pub mod error;
pub mod export;
pub mod games;
pub mod kit;
pub mod library;
pub mod presets;
pub mod sanitize;
pub mod synthesis;
pub mod template;
pub mod types;
pub mod workflow;

use crate::brainstorm::BrainstormContext;
use crate::completion::{CompletionRequest, CompletionService, GeminiClient};
use crate::error::{BRAINSTORM_FAILURE, EMPTY_CODE_PLACEHOLDER, Result, SYNTHESIS_FAILURE};
use crate::synthesis::{SynthesisContext, ThemeContext};
use crate::template::TemplateEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Default Gemini API root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Fast model used for JSON idea generation
pub const DEFAULT_BRAINSTORM_MODEL: &str = "gemini-2.5-flash";
/// Stronger model used for code generation
pub const DEFAULT_SYNTHESIS_MODEL: &str = "gemini-3-pro-preview";

/// Configuration for script generation
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion service credential; calls fail without one
    pub api_key: Option<String>,
    pub base_url: String,
    pub brainstorm_model: String,
    pub synthesis_model: String,
    /// Maximum rendered prompt length in characters
    pub max_prompt_length: usize,
    /// Where exported scripts go (downloads directory if None)
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            brainstorm_model: DEFAULT_BRAINSTORM_MODEL.to_string(),
            synthesis_model: DEFAULT_SYNTHESIS_MODEL.to_string(),
            max_prompt_length: 32_000,
            export_dir: None,
        }
    }
}

impl Config {
    /// Read the credential and overrides from the environment.
    ///
    /// The key comes from `GEMINI_API_KEY`, then `API_KEY`. `SCRIPTGEN_BASE_URL`,
    /// `SCRIPTGEN_BRAINSTORM_MODEL` and `SCRIPTGEN_SYNTHESIS_MODEL` override the
    /// defaults when set.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            base_url: var("SCRIPTGEN_BASE_URL").unwrap_or(defaults.base_url),
            brainstorm_model: var("SCRIPTGEN_BRAINSTORM_MODEL").unwrap_or(defaults.brainstorm_model),
            synthesis_model: var("SCRIPTGEN_SYNTHESIS_MODEL").unwrap_or(defaults.synthesis_model),
            ..defaults
        }
    }
}

/// Main interface for brainstorming ideas and synthesizing scripts
pub struct ScriptGenerator {
    service: Arc<dyn CompletionService>,
    template_engine: TemplateEngine,
    config: Config,
}

impl ScriptGenerator {
    /// Create a generator configured from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(Config::from_env())
    }

    /// Create a generator talking to Gemini with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let client = GeminiClient::new(config.base_url.clone(), config.api_key.clone());
        Self::with_service(config, Arc::new(client))
    }

    /// Create a generator over any completion backend
    pub fn with_service(config: Config, service: Arc<dyn CompletionService>) -> Result<Self> {
        Ok(Self {
            service,
            template_engine: TemplateEngine::new()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the brainstorm prompt for a game
    pub fn brainstorm_prompt(&self, game_name: &str) -> Result<String> {
        require_game_name(game_name)?;
        let prompt = self
            .template_engine
            .render(template::BRAINSTORM, &BrainstormContext::new(game_name.trim()))?;
        self.validate_prompt(&prompt)?;
        Ok(prompt)
    }

    /// Build the synthesis prompt for a request
    pub fn synthesis_prompt(&self, request: &GenerationRequest) -> Result<String> {
        require_game_name(&request.game_name)?;
        let theme_directive = self
            .template_engine
            .render(template::THEME, &ThemeContext::new(&request.theme_color))?;
        let prompt = self
            .template_engine
            .render(template::SYNTHESIS, &SynthesisContext::new(request, theme_directive))?;
        self.validate_prompt(&prompt)?;
        Ok(prompt)
    }

    /// Ask the service for ten feature ideas for `game_name`.
    ///
    /// Blank names and oversized prompts fail with [`ScriptGenError::Input`]
    /// before any call. Any other failure, including a reply with no text at
    /// all, is logged and reported as [`ScriptGenError::Generation`].
    pub async fn brainstorm(&self, game_name: &str) -> Result<Vec<ScriptIdea>> {
        require_game_name(game_name)?;
        let prompt = self.brainstorm_prompt(game_name).map_err(oversized_as_input);
        let outcome = match prompt {
            Ok(prompt) => self.try_brainstorm(game_name, prompt).await,
            Err(e) if e.is_input() => return Err(e),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(ideas) => {
                info!("Brainstormed {} ideas for '{}'", ideas.len(), game_name);
                Ok(ideas)
            }
            Err(e) => {
                error!("Error brainstorming ideas for '{}': {}", game_name, e);
                Err(ScriptGenError::Generation(BRAINSTORM_FAILURE.to_string()))
            }
        }
    }

    async fn try_brainstorm(&self, game_name: &str, prompt: String) -> Result<Vec<ScriptIdea>> {
        let request = CompletionRequest::json(
            self.config.brainstorm_model.clone(),
            prompt,
            brainstorm::output_schema(),
        );

        let response = self.service.complete(&request).await?;
        let text = response
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ScriptGenError::MalformedResponse("no text returned".to_string()))?;

        brainstorm::parse_ideas(&text, game_name.trim())
    }

    /// Generate a script for the request and strip code fences from it.
    ///
    /// A reply with no usable text yields [`EMPTY_CODE_PLACEHOLDER`] rather
    /// than an error. A prompt over `max_prompt_length`, usually from a long
    /// custom description, is reported as [`ScriptGenError::Input`].
    pub async fn synthesize(&self, request: &GenerationRequest) -> Result<String> {
        require_game_name(&request.game_name)?;
        let prompt = self.synthesis_prompt(request).map_err(oversized_as_input);
        let outcome = match prompt {
            Ok(prompt) => self.try_synthesize(prompt).await,
            Err(e) if e.is_input() => return Err(e),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(code) => {
                info!(
                    "Generated {} chars of code for '{}' ({})",
                    code.len(),
                    request.game_name,
                    request.library
                );
                Ok(code)
            }
            Err(e) => {
                error!("Error generating script for '{}': {}", request.game_name, e);
                Err(ScriptGenError::Generation(SYNTHESIS_FAILURE.to_string()))
            }
        }
    }

    async fn try_synthesize(&self, prompt: String) -> Result<String> {
        let completion = CompletionRequest::text(self.config.synthesis_model.clone(), prompt);

        let response = self.service.complete(&completion).await?;
        let code = response
            .text
            .map(|text| sanitize::strip_code_fences(&text))
            .unwrap_or_default();

        if code.is_empty() {
            return Ok(EMPTY_CODE_PLACEHOLDER.to_string());
        }
        Ok(code)
    }

    /// Write generated code to the configured export directory
    pub fn export(&self, game_name: &str, code: &str) -> Result<PathBuf> {
        let dir = match &self.config.export_dir {
            Some(dir) => dir.clone(),
            None => export::default_export_dir()?,
        };
        export::export_script(dir, game_name, code)
    }

    /// Validate a rendered prompt according to current config
    fn validate_prompt(&self, prompt: &str) -> Result<()> {
        if prompt.trim().is_empty() {
            return Err(ScriptGenError::InvalidPrompt("Prompt cannot be empty".to_string()));
        }

        if prompt.len() > self.config.max_prompt_length {
            return Err(ScriptGenError::InvalidPrompt(format!(
                "Prompt exceeds maximum length of {} characters",
                self.config.max_prompt_length
            )));
        }

        Ok(())
    }
}

fn require_game_name(game_name: &str) -> Result<()> {
    if game_name.trim().is_empty() {
        return Err(ScriptGenError::Input("Please enter a game name.".to_string()));
    }
    Ok(())
}

// An oversized prompt comes from what the user typed, not from the service
fn oversized_as_input(e: ScriptGenError) -> ScriptGenError {
    match e {
        ScriptGenError::InvalidPrompt(msg) => ScriptGenError::Input(msg),
        other => other,
    }
}

// Re-export important types
pub use crate::error::ScriptGenError;
pub use crate::types::{Difficulty, GenerationRequest, ScriptIdea, UiLibrary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::OutputFormat;
    use crate::completion::testing::StubService;
    use crate::games::{DOORS_BLOCK, GLASS_BRIDGE_BLOCK, MM2_BLOCK};
    use crate::kit::{UNIVERSAL_KIT_BLOCK, UNIVERSAL_KIT_CONTROLS};
    use crate::library::{RAYFIELD_IMPORT, RAYFIELD_SYNTAX};

    fn generator(stub: &Arc<StubService>) -> ScriptGenerator {
        ScriptGenerator::with_service(Config::default(), stub.clone()).unwrap()
    }

    fn offline() -> ScriptGenerator {
        generator(&Arc::new(StubService::empty()))
    }

    fn vision() -> ScriptIdea {
        ScriptIdea::new("Vision", "ESP Items", Difficulty::Hard)
    }

    #[test]
    fn test_brainstorm_prompt_contract() {
        let prompt = offline().brainstorm_prompt("Pet Simulator 99").unwrap();
        assert!(prompt.contains(r#"for the game "Pet Simulator 99""#));
        assert!(prompt.contains("Return exactly 10 ideas."));
        assert!(prompt.contains(r#"BANNED: "Pet Simulator 99", "Script", "Hack""#));
        assert!(prompt.contains(r#""Insane" difficulty"#));
        assert!(prompt.contains("Game: \"Blox Fruits\""));
    }

    #[test]
    fn test_doors_scenario_prompt() {
        let request = GenerationRequest::new("Doors", vision())
            .with_library(UiLibrary::Rayfield)
            .with_theme("Violet");
        let prompt = offline().synthesis_prompt(&request).unwrap();

        assert!(prompt.contains(RAYFIELD_IMPORT));
        assert!(prompt.contains(RAYFIELD_SYNTAX));
        assert!(prompt.contains(DOORS_BLOCK));
        assert!(prompt.contains("ONLY scan 'workspace.CurrentRooms'"));
        assert!(!prompt.contains(MM2_BLOCK));
        assert!(!prompt.contains(GLASS_BRIDGE_BLOCK));
        assert!(!prompt.contains(UNIVERSAL_KIT_BLOCK));
        assert!(prompt.contains("- **Feature Category**: Vision"));
        assert!(prompt.contains("- **Difficulty**: Hard"));
        assert!(prompt.contains("'Configuration.Theme' to 'Amethyst'"));
        assert!(prompt.contains(r#"Title: "GenAI | Doors""#));
    }

    #[test]
    fn test_prompt_sections_keep_their_order() {
        let request = GenerationRequest::new("mm2", vision()).with_universal_kit(true);
        let prompt = offline().synthesis_prompt(&request).unwrap();

        let markers = [
            "You are an elite Roblox Lua Scripter",
            "### CRITICAL: DEBUGGING & FEEDBACK",
            "### CRITICAL: UI GENERATION RULES",
            "-- RAYFIELD SYNTAX GUIDE",
            "### CONFIGURATION",
            "### THEME CONFIGURATION",
            "### PERFORMANCE & FPS OPTIMIZATION",
            "### CODE STRUCTURE REQUIREMENTS",
            "getgenv().SecureMode = true",
            "### SPECIFIC GAME LOGIC: MURDER MYSTERY 2",
            "### UNIVERSAL KIT REQUIREMENT",
            "**Safety & Persistence (CRITICAL)**",
            "### OUTPUT RULES",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| prompt.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_game_matching_in_prompt() {
        let generator = offline();
        let prompt = |game: &str| generator.synthesis_prompt(&GenerationRequest::new(game, vision())).unwrap();

        assert!(prompt("MURDER mystery 2 remake").contains(MM2_BLOCK));
        assert!(prompt("The Glass Bridge Challenge").contains(GLASS_BRIDGE_BLOCK));

        let plain = prompt("Blox Fruits");
        for block in [MM2_BLOCK, DOORS_BLOCK, GLASS_BRIDGE_BLOCK] {
            assert!(!plain.contains(block));
        }
    }

    #[test]
    fn test_universal_kit_toggle() {
        let generator = offline();
        for game in ["Doors", "Arsenal", "mm2"] {
            let base = GenerationRequest::new(game, vision());
            let without = generator.synthesis_prompt(&base.clone().with_universal_kit(false)).unwrap();
            let with = generator.synthesis_prompt(&base.with_universal_kit(true)).unwrap();
            for control in UNIVERSAL_KIT_CONTROLS {
                assert!(!without.contains(control), "{game}: {control}");
                assert!(with.contains(control), "{game}: {control}");
            }
        }
    }

    #[test]
    fn test_every_library_yields_a_prompt() {
        let generator = offline();
        for library in UiLibrary::ALL {
            let request = GenerationRequest::new("Arsenal", vision()).with_library(library);
            let prompt = generator.synthesis_prompt(&request).unwrap();
            assert!(prompt.contains(library::lookup(library).import_snippet));
            assert!(prompt.contains(&format!("- **Library**: {}", library)));
        }
    }

    #[test]
    fn test_feature_context_line() {
        let generator = offline();
        let plain = generator.synthesis_prompt(&GenerationRequest::new("Doors", vision())).unwrap();
        assert!(!plain.contains("**Feature Context**"));

        let idea = vision().with_feature_context("Items spawn in drawers");
        let prompt = generator.synthesis_prompt(&GenerationRequest::new("Doors", idea)).unwrap();
        assert!(prompt.contains("- **Feature Context**: Items spawn in drawers"));
    }

    #[test]
    fn test_blank_theme_defaults_to_violet() {
        let request = GenerationRequest::new("Doors", vision()).with_theme(" ");
        let prompt = offline().synthesis_prompt(&request).unwrap();
        assert!(prompt.contains("The user selected the color: **Violet**."));
    }

    #[test]
    fn test_prompt_length_limit() {
        let config = Config {
            max_prompt_length: 100,
            ..Config::default()
        };
        let generator = ScriptGenerator::with_service(config, Arc::new(StubService::empty())).unwrap();
        assert!(matches!(generator.brainstorm_prompt("Doors"), Err(ScriptGenError::InvalidPrompt(_))));
    }

    #[tokio::test]
    async fn test_long_custom_description_is_an_input_error() {
        let stub = Arc::new(StubService::text("print(1)"));
        let config = Config {
            max_prompt_length: 20_000,
            ..Config::default()
        };
        let generator = ScriptGenerator::with_service(config, stub.clone()).unwrap();
        let idea = ScriptIdea::custom("Farm", &"Auto Farm, ".repeat(3_000), Difficulty::Easy).unwrap();
        let request = GenerationRequest::new("Blox Fruits", idea);

        let err = generator.synthesize(&request).await.unwrap_err();
        assert!(err.is_input(), "{:?}", err);
        assert_ne!(err.to_string(), SYNTHESIS_FAILURE);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_brainstorm_sends_json_request() {
        let stub = Arc::new(StubService::text(
            r#"[{"title":"Vision","description":"ESP Items","difficulty":"Hard"}]"#,
        ));
        let ideas = generator(&stub).brainstorm("Doors").await.unwrap();
        assert_eq!(ideas, vec![vision()]);

        let request = stub.last_request();
        assert_eq!(request.model, DEFAULT_BRAINSTORM_MODEL);
        assert_eq!(request.format, OutputFormat::Json { schema: brainstorm::output_schema() });
    }

    #[tokio::test]
    async fn test_brainstorm_filters_stub_output() {
        let stub = Arc::new(StubService::text(
            r#"[
                {"title":"Script","description":"Everything","difficulty":"Easy"},
                {"title":"hack","description":"Everything","difficulty":"Easy"},
                {"title":"Movement","description":"Fly, Noclip","difficulty":"Medium"}
            ]"#,
        ));
        let ideas = generator(&stub).brainstorm("Arsenal").await.unwrap();
        assert_eq!(ideas.len(), 1);
        for idea in &ideas {
            let title = idea.title.to_lowercase();
            assert!(title != "script" && title != "hack");
        }
    }

    #[tokio::test]
    async fn test_brainstorm_empty_array_is_ok() {
        let stub = Arc::new(StubService::text("[]"));
        assert!(generator(&stub).brainstorm("Doors").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_brainstorm_failures_collapse() {
        for stub in [
            StubService::empty(),
            StubService::text("   "),
            StubService::text("not json"),
            StubService::failing(429),
        ] {
            let err = generator(&Arc::new(stub)).brainstorm("Doors").await.unwrap_err();
            assert!(matches!(&err, ScriptGenError::Generation(msg) if msg == BRAINSTORM_FAILURE));
        }
    }

    #[tokio::test]
    async fn test_blank_game_never_reaches_service() {
        let stub = Arc::new(StubService::text("[]"));
        let scripts = generator(&stub);

        assert!(scripts.brainstorm("  ").await.unwrap_err().is_input());
        let request = GenerationRequest::new("\t", vision());
        assert!(scripts.synthesize(&request).await.unwrap_err().is_input());
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_synthesize_strips_fences() {
        let stub = Arc::new(StubService::text("```lua\nprint('loaded')\n```"));
        let request = GenerationRequest::new("Doors", vision());
        let code = generator(&stub).synthesize(&request).await.unwrap();
        assert_eq!(code, "print('loaded')");

        let sent = stub.last_request();
        assert_eq!(sent.model, DEFAULT_SYNTHESIS_MODEL);
        assert_eq!(sent.format, OutputFormat::Text);
        assert!(sent.prompt.contains(DOORS_BLOCK));
    }

    #[tokio::test]
    async fn test_synthesize_empty_reply_is_placeholder() {
        let request = GenerationRequest::new("Doors", vision());
        for stub in [StubService::empty(), StubService::text("```lua\n```")] {
            let code = generator(&Arc::new(stub)).synthesize(&request).await.unwrap();
            assert_eq!(code, EMPTY_CODE_PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn test_synthesize_failure_collapses() {
        let stub = Arc::new(StubService::failing(403));
        let request = GenerationRequest::new("Doors", vision());
        let err = generator(&stub).synthesize(&request).await.unwrap_err();
        assert!(matches!(&err, ScriptGenError::Generation(msg) if msg == SYNTHESIS_FAILURE));
        assert_ne!(SYNTHESIS_FAILURE, BRAINSTORM_FAILURE);
    }

    #[tokio::test]
    async fn test_missing_api_key_collapses_to_generation_error() {
        let generator = ScriptGenerator::with_config(Config::default()).unwrap();
        let err = generator.brainstorm("Doors").await.unwrap_err();
        assert_eq!(err.to_string(), BRAINSTORM_FAILURE);
    }

    #[test]
    fn test_export_uses_configured_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            export_dir: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        let generator = ScriptGenerator::with_service(config, Arc::new(StubService::empty())).unwrap();
        let path = generator.export("Murder Mystery 2", "print(1)").unwrap();
        assert_eq!(path, temp_dir.path().join("Murder_Mystery_2_Script.lua"));
    }
}
