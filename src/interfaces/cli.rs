use clap::Parser;

#[derive(Parser)]
#[command(name = "qmt")]
#[command(about = "Translate text with Qwen-MT from the command line.")]
#[command(version)]
pub struct Cli {
    /// Source language, passed to the API as-is
    #[arg(short = 'f', long, default_value = "auto")]
    pub from: String,

    /// Target language, passed to the API as-is
    #[arg(short = 't', long, default_value = "English")]
    pub to: String,

    /// Override the configured model
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["qmt", "你好", "世界"]);
        assert_eq!(cli.from, "auto");
        assert_eq!(cli.to, "English");
        assert!(cli.model.is_none());
        assert!(!cli.json);
        assert_eq!(cli.text, vec!["你好", "世界"]);
    }

    #[test]
    fn languages_and_model() {
        let cli = Cli::parse_from([
            "qmt", "-f", "zh", "-t", "ja", "-m", "qwen-plus", "--json", "hello",
        ]);
        assert_eq!(cli.from, "zh");
        assert_eq!(cli.to, "ja");
        assert_eq!(cli.model.as_deref(), Some("qwen-plus"));
        assert!(cli.json);
    }
}
