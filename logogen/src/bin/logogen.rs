//! CLI for LogoGen - generate a brand logo from the terminal.

use clap::{Parser, ValueEnum};
use logogen::{LogoClient, LogoModel};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "logogen")]
#[command(about = "Generate brand logos with the Gemini image models")]
#[command(version)]
struct Cli {
    /// The text prompt describing the logo
    prompt: String,

    /// Model tier to use
    #[arg(short, long, value_enum, default_value = "fast")]
    model: ModelArg,

    /// Output file path
    #[arg(short, long, default_value = "logo.png")]
    output: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Fast,
    Pro,
}

impl From<ModelArg> for LogoModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Fast => LogoModel::Flash,
            ModelArg::Pro => LogoModel::Pro,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let model: LogoModel = cli.model.into();

    let client = LogoClient::builder().build()?;
    let logo = client.generate(&cli.prompt, model).await?;
    logo.save(&cli.output)?;

    if cli.json {
        let result = serde_json::json!({
            "success": true,
            "id": logo.id,
            "output": cli.output.display().to_string(),
            "size_bytes": logo.image_bytes()?.len(),
            "mime_type": logo.mime_type(),
            "model": logo.model,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Generated logo: {} ({} bytes) via {}",
            cli.output.display(),
            logo.image_bytes()?.len(),
            logo.model
        );
    }

    Ok(())
}
