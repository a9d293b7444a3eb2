//! Generation workflow state machine.
//!
//! A [`Session`] holds the transient state a front end needs to drive the
//! two core operations: the game name, brainstormed ideas, the selected
//! idea, generation options, and the last result or error. Each begin/complete
//! pair moves the session through [`WorkflowState`]; starting a request while
//! another is outstanding is rejected.

use crate::error::{Result, ScriptGenError};
use crate::export;
use crate::presets::PresetKit;
use crate::types::{DEFAULT_THEME, Difficulty, GenerationRequest, ScriptIdea, UiLibrary};
use crate::ScriptGenerator;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    AwaitingBrainstorm,
    IdeasReady,
    AwaitingSynthesis,
    CodeReady,
    Failed,
}

impl WorkflowState {
    pub fn is_busy(&self) -> bool {
        matches!(self, WorkflowState::AwaitingBrainstorm | WorkflowState::AwaitingSynthesis)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Idle => "idle",
            WorkflowState::AwaitingBrainstorm => "awaiting ideas",
            WorkflowState::IdeasReady => "ideas ready",
            WorkflowState::AwaitingSynthesis => "awaiting a script",
            WorkflowState::CodeReady => "code ready",
            WorkflowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// In-memory state for one user session
#[derive(Debug, Clone)]
pub struct Session {
    state: WorkflowState,
    game_name: String,
    ideas: Vec<ScriptIdea>,
    selected: Option<ScriptIdea>,
    library: UiLibrary,
    theme_color: String,
    include_universal_kit: bool,
    generated_code: Option<String>,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new("")
    }
}

impl Session {
    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            state: WorkflowState::Idle,
            game_name: game_name.into(),
            ideas: Vec::new(),
            selected: None,
            library: UiLibrary::default(),
            theme_color: DEFAULT_THEME.to_string(),
            include_universal_kit: false,
            generated_code: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn ideas(&self) -> &[ScriptIdea] {
        &self.ideas
    }

    pub fn selected_idea(&self) -> Option<&ScriptIdea> {
        self.selected.as_ref()
    }

    pub fn library(&self) -> UiLibrary {
        self.library
    }

    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    pub fn includes_universal_kit(&self) -> bool {
        self.include_universal_kit
    }

    pub fn generated_code(&self) -> Option<&str> {
        self.generated_code.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn ensure_idle(&self, action: &'static str) -> Result<()> {
        if self.state.is_busy() {
            return Err(ScriptGenError::InvalidTransition {
                state: self.state.to_string(),
                action,
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!("Workflow {} -> {}", self.state, next);
        self.state = next;
    }

    pub fn set_game_name(&mut self, game_name: impl Into<String>) -> Result<()> {
        self.ensure_idle("change the game")?;
        self.game_name = game_name.into();
        Ok(())
    }

    pub fn set_library(&mut self, library: UiLibrary) -> Result<()> {
        self.ensure_idle("change the library")?;
        self.library = library;
        Ok(())
    }

    pub fn set_theme(&mut self, theme_color: impl Into<String>) -> Result<()> {
        self.ensure_idle("change the theme")?;
        self.theme_color = theme_color.into();
        Ok(())
    }

    pub fn set_universal_kit(&mut self, include: bool) -> Result<()> {
        self.ensure_idle("toggle the universal kit")?;
        self.include_universal_kit = include;
        Ok(())
    }

    /// Start a brainstorm, clearing previous ideas
    pub fn begin_brainstorm(&mut self) -> Result<String> {
        self.ensure_idle("brainstorm")?;
        let game_name = self.game_name.trim().to_string();
        if game_name.is_empty() {
            return Err(ScriptGenError::Input("Please enter a game name.".to_string()));
        }

        self.ideas.clear();
        self.last_error = None;
        self.transition(WorkflowState::AwaitingBrainstorm);
        Ok(game_name)
    }

    pub fn complete_brainstorm(&mut self, result: Result<Vec<ScriptIdea>>) -> Result<()> {
        self.expect_state(WorkflowState::AwaitingBrainstorm, "finish brainstorming")?;
        match result {
            Ok(ideas) => {
                self.ideas = ideas;
                self.transition(WorkflowState::IdeasReady);
            }
            Err(e) => self.fail(e),
        }
        Ok(())
    }

    /// Pick one of the brainstormed ideas
    pub fn select_idea(&mut self, index: usize) -> Result<&ScriptIdea> {
        self.ensure_idle("select an idea")?;
        let idea = self
            .ideas
            .get(index)
            .cloned()
            .ok_or_else(|| ScriptGenError::Input(format!("No idea at position {}", index)))?;
        Ok(self.choose(idea))
    }

    /// Use a hand-written idea
    pub fn select_custom(
        &mut self,
        title: &str,
        description: &str,
        difficulty: Difficulty,
    ) -> Result<&ScriptIdea> {
        self.ensure_idle("select an idea")?;
        if self.game_name.trim().is_empty() {
            return Err(ScriptGenError::Input(
                "Please fill in all fields for the custom script.".to_string(),
            ));
        }
        let idea = ScriptIdea::custom(title, description, difficulty)?;
        Ok(self.choose(idea))
    }

    /// Use a preset kit, switching the game when the kit is pinned to one
    pub fn select_preset(&mut self, kit: PresetKit) -> Result<&ScriptIdea> {
        self.ensure_idle("select an idea")?;
        self.game_name = kit.resolve_game(&self.game_name);
        Ok(self.choose(kit.idea()))
    }

    fn choose(&mut self, idea: ScriptIdea) -> &ScriptIdea {
        // Generation options start fresh for every new idea
        self.include_universal_kit = false;
        self.theme_color = DEFAULT_THEME.to_string();
        self.generated_code = None;
        self.last_error = None;
        self.transition(WorkflowState::IdeasReady);
        self.selected.insert(idea)
    }

    /// Start synthesis for the selected idea
    pub fn begin_synthesis(&mut self) -> Result<GenerationRequest> {
        self.ensure_idle("generate a script")?;
        let idea = self
            .selected
            .clone()
            .ok_or_else(|| ScriptGenError::Input("Select an idea first.".to_string()))?;
        if self.game_name.trim().is_empty() {
            return Err(ScriptGenError::Input("Please enter a game name.".to_string()));
        }

        let request = GenerationRequest::new(self.game_name.trim(), idea)
            .with_library(self.library)
            .with_universal_kit(self.include_universal_kit)
            .with_theme(self.theme_color.clone());

        self.generated_code = None;
        self.last_error = None;
        self.transition(WorkflowState::AwaitingSynthesis);
        Ok(request)
    }

    pub fn complete_synthesis(&mut self, result: Result<String>) -> Result<()> {
        self.expect_state(WorkflowState::AwaitingSynthesis, "finish generating")?;
        match result {
            Ok(code) => {
                self.generated_code = Some(code);
                self.transition(WorkflowState::CodeReady);
            }
            Err(e) => self.fail(e),
        }
        Ok(())
    }

    /// Brainstorm ideas for the current game with `generator`
    pub async fn brainstorm(&mut self, generator: &ScriptGenerator) -> Result<()> {
        let game_name = self.begin_brainstorm()?;
        let result = generator.brainstorm(&game_name).await;
        self.complete_brainstorm(result)
    }

    /// Generate a script for the selected idea with `generator`
    pub async fn generate(&mut self, generator: &ScriptGenerator) -> Result<()> {
        let request = self.begin_synthesis()?;
        let result = generator.synthesize(&request).await;
        self.complete_synthesis(result)
    }

    /// Name the generated script would be saved under
    pub fn download_file_name(&self) -> String {
        export::script_file_name(self.game_name.trim())
    }

    /// Back to a blank session, keeping the game name
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_idle("reset")?;
        *self = Self::new(std::mem::take(&mut self.game_name));
        Ok(())
    }

    fn expect_state(&self, expected: WorkflowState, action: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(ScriptGenError::InvalidTransition {
                state: self.state.to_string(),
                action,
            });
        }
        Ok(())
    }

    fn fail(&mut self, error: ScriptGenError) {
        self.last_error = Some(error.to_string());
        self.transition(WorkflowState::Failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::completion::testing::StubService;
    use crate::error::{BRAINSTORM_FAILURE, SYNTHESIS_FAILURE};
    use std::sync::Arc;

    fn vision() -> ScriptIdea {
        ScriptIdea::new("Vision", "ESP Items", Difficulty::Hard)
    }

    fn generator(stub: StubService) -> ScriptGenerator {
        ScriptGenerator::with_service(Config::default(), Arc::new(stub)).unwrap()
    }

    #[test]
    fn test_brainstorm_transitions() {
        let mut session = Session::new("Doors");
        assert_eq!(session.state(), WorkflowState::Idle);

        assert_eq!(session.begin_brainstorm().unwrap(), "Doors");
        assert_eq!(session.state(), WorkflowState::AwaitingBrainstorm);

        session.complete_brainstorm(Ok(vec![vision()])).unwrap();
        assert_eq!(session.state(), WorkflowState::IdeasReady);
        assert_eq!(session.ideas(), &[vision()]);
    }

    #[test]
    fn test_blank_game_stays_idle() {
        let mut session = Session::new("   ");
        assert!(session.begin_brainstorm().unwrap_err().is_input());
        assert_eq!(session.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_duplicate_requests_are_rejected() {
        let mut session = Session::new("Doors");
        session.begin_brainstorm().unwrap();

        let err = session.begin_brainstorm().unwrap_err();
        assert!(matches!(err, ScriptGenError::InvalidTransition { .. }));
        assert!(session.set_library(UiLibrary::Fluent).is_err());
        assert!(session.begin_synthesis().is_err());
        assert!(session.reset().is_err());
    }

    #[test]
    fn test_completion_requires_matching_request() {
        let mut session = Session::new("Doors");
        assert!(session.complete_brainstorm(Ok(vec![])).is_err());
        assert!(session.complete_synthesis(Ok(String::new())).is_err());
    }

    #[test]
    fn test_failure_records_message() {
        let mut session = Session::new("Doors");
        session.begin_brainstorm().unwrap();
        session
            .complete_brainstorm(Err(ScriptGenError::Generation(BRAINSTORM_FAILURE.to_string())))
            .unwrap();
        assert_eq!(session.state(), WorkflowState::Failed);
        assert_eq!(session.last_error(), Some(BRAINSTORM_FAILURE));

        // A retry is allowed from Failed and clears the error
        session.begin_brainstorm().unwrap();
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn test_selecting_an_idea_resets_options() {
        let mut session = Session::new("Doors");
        session.begin_brainstorm().unwrap();
        session.complete_brainstorm(Ok(vec![vision()])).unwrap();

        session.set_universal_kit(true).unwrap();
        session.set_theme("Red").unwrap();
        session.set_library(UiLibrary::Orion).unwrap();

        session.select_idea(0).unwrap();
        assert!(!session.includes_universal_kit());
        assert_eq!(session.theme_color(), "Violet");
        assert_eq!(session.library(), UiLibrary::Orion);
        assert!(session.select_idea(5).unwrap_err().is_input());
    }

    #[test]
    fn test_synthesis_request_reflects_options() {
        let mut session = Session::new(" Blox Fruits ");
        session
            .select_custom("Farm", "Auto Farm Level 1-100", Difficulty::Medium)
            .unwrap();
        session.set_library(UiLibrary::Fluent).unwrap();
        session.set_theme("Green").unwrap();
        session.set_universal_kit(true).unwrap();

        let request = session.begin_synthesis().unwrap();
        assert_eq!(request.game_name, "Blox Fruits");
        assert_eq!(request.library, UiLibrary::Fluent);
        assert_eq!(request.theme_color, "Green");
        assert!(request.include_universal_kit);
        assert_eq!(session.state(), WorkflowState::AwaitingSynthesis);

        session.complete_synthesis(Ok("print(1)".to_string())).unwrap();
        assert_eq!(session.state(), WorkflowState::CodeReady);
        assert_eq!(session.generated_code(), Some("print(1)"));
        assert_eq!(session.download_file_name(), "Blox_Fruits_Script.lua");
    }

    #[test]
    fn test_synthesis_needs_an_idea() {
        let mut session = Session::new("Doors");
        assert!(session.begin_synthesis().unwrap_err().is_input());
        assert!(session.select_custom("", "Fly", Difficulty::Easy).is_err());
        assert_eq!(session.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_preset_switches_game() {
        let mut session = Session::new("Arsenal");
        session.select_preset(PresetKit::GlassBridge).unwrap();
        assert_eq!(session.game_name(), "The Glass Bridge");
        assert_eq!(session.selected_idea().unwrap().title, "Glass Bridge God Mode");

        let mut session = Session::default();
        session.select_preset(PresetKit::Universal).unwrap();
        assert_eq!(session.game_name(), "Universal");
    }

    #[test]
    fn test_reset_keeps_game_name() {
        let mut session = Session::new("Doors");
        session.select_preset(PresetKit::Doors).unwrap();
        session.reset().unwrap();
        assert_eq!(session.state(), WorkflowState::Idle);
        assert_eq!(session.game_name(), "Doors");
        assert!(session.selected_idea().is_none());
    }

    #[tokio::test]
    async fn test_end_to_end_with_stub() {
        let brainstormer = generator(StubService::text(
            r#"[{"title":"Vision","description":"ESP Items","difficulty":"Hard"}]"#,
        ));
        let mut session = Session::new("Doors");
        session.brainstorm(&brainstormer).await.unwrap();
        assert_eq!(session.state(), WorkflowState::IdeasReady);
        session.select_idea(0).unwrap();

        let coder = generator(StubService::text("```lua\nprint('ok')\n```"));
        session.generate(&coder).await.unwrap();
        assert_eq!(session.state(), WorkflowState::CodeReady);
        assert_eq!(session.generated_code(), Some("print('ok')"));
    }

    #[tokio::test]
    async fn test_service_failure_lands_in_failed() {
        let mut session = Session::new("Doors");
        session.select_preset(PresetKit::Doors).unwrap();
        session.generate(&generator(StubService::failing(500))).await.unwrap();
        assert_eq!(session.state(), WorkflowState::Failed);
        assert_eq!(session.last_error(), Some(SYNTHESIS_FAILURE));
    }
}
