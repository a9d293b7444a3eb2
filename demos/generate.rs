use anyhow::{Context, Result};
use gamecode_scriptgen::presets::{POPULAR_GAMES, THEME_COLORS};
use gamecode_scriptgen::workflow::{Session, WorkflowState};
use gamecode_scriptgen::{ScriptGenerator, UiLibrary};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for better debugging
    tracing_subscriber::fmt::init();

    println!("=== GameCode Script Generator Demo ===\n");

    let game_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| POPULAR_GAMES[1].to_string());
    let library: UiLibrary = std::env::args()
        .nth(2)
        .map(|name| name.parse::<UiLibrary>())
        .transpose()?
        .unwrap_or_default();

    let generator = ScriptGenerator::new()?;
    if generator.config().api_key.is_none() {
        println!("No GEMINI_API_KEY set; calls will fail.\n");
    }

    let mut session = Session::new(game_name);

    // 1. Brainstorm
    println!("--- Brainstorm: {} ---", session.game_name());
    session.brainstorm(&generator).await?;
    if session.state() == WorkflowState::Failed {
        println!("{}", session.last_error().unwrap_or("unknown error"));
        return Ok(());
    }
    for (i, idea) in session.ideas().iter().enumerate() {
        println!("{:2}. [{}] {} - {}", i + 1, idea.difficulty, idea.title, idea.description);
    }

    // 2. Configure
    let idea = session
        .select_idea(0)
        .context("the service returned no usable ideas")?
        .title
        .clone();
    session.set_library(library)?;
    session.set_theme(THEME_COLORS[2])?;
    println!("\n--- Generating '{}' with {} ---", idea, session.library());

    // 3. Generate
    session.generate(&generator).await?;
    match session.generated_code() {
        Some(code) => {
            println!("{}\n", code);
            let path = generator.export(session.game_name(), code)?;
            println!("Saved to {}", path.display());
        }
        None => println!("{}", session.last_error().unwrap_or("unknown error")),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
