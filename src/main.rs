// Main entry point
use clap::Parser;
use colored::Colorize;
use qwen_mt::domain::model::{ModelSelection, TranslationRequest};
use qwen_mt::domain::traits::Translator;
use qwen_mt::infrastructure::config::{
    generate_config_sample, get_config_path, load_config, Logging,
};
use qwen_mt::interfaces::cli::Cli;
use qwen_mt::state::AppState;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, config_warning) = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }
    if let Some(e) = config_warning {
        tracing::warn!("Failed to parse config file: {}. Using defaults.", e);
    }

    if cli.generate_config {
        generate_config_sample()?;
        return Ok(());
    }

    if let Some(model) = cli.model.as_deref().filter(|m| !m.is_empty()) {
        config.qwen.model_name = Some(model.to_string());
    }

    let state = AppState::new(config)?;

    if cli.status {
        print_status(&state);
        return Ok(());
    }

    if cli.text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let request = TranslationRequest::new(cli.text.join(" "), cli.from, cli.to);

    let result = tokio::select! {
        result = state.translator.translate(&request) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n{}", "Interrupted".yellow());
            return Ok(());
        }
    };

    let translation = match result {
        Ok(translation) => translation,
        Err(e) => {
            tracing::error!(kind = ?e.kind(), "translation failed");
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };

    if cli.json {
        let model = ModelSelection::resolve(state.config.qwen.model_name.as_deref());
        let output = json!({
            "text": request.text,
            "model": model.name(),
            "source_lang": request.source_lang,
            "target_lang": request.target_lang,
            "translation": translation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", translation);
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(state: &AppState) {
    println!("{}", "qmt Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    let qwen = state.translator.config();
    let model = ModelSelection::resolve(qwen.model_name.as_deref());
    println!("Model: {}", model.name());
    if model.is_translation_model() {
        println!("Mode: translation_options");
    } else {
        println!("Mode: chat prompt");
    }

    if qwen.has_api_key() {
        println!("Qwen API: Configured");
    } else {
        println!("Qwen API: Not configured");
    }
}
