//! Linreg CLI - upload a dataset to a linear-regression service
//!
//! ```bash
//! linreg upload data.csv                         # Fit and print coefficients
//! linreg upload data.csv --html fit.html         # Also write the widget page
//! linreg upload data.csv --image fit.png         # Also write the plot
//! linreg render response.json -o fit.html        # Render a saved response
//! ```
//!
//! Configuration is read from `LINREG_*` environment variables (and `.env`);
//! flags take precedence.

use clap::{Parser, Subcommand};
use linreg_client::{
    export, format_fit, parse_timeout, ApplyPolicy, ClientConfig, ClientError, ClientResult,
    FitResult, Resolution, SelectedFile, UploadWidget,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linreg")]
#[command(about = "Upload a dataset to a linear-regression service and show the fit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and display the fitted line
    Upload {
        /// Dataset file to upload
        input: PathBuf,

        /// Base URL of the fitting service (default: $LINREG_BASE_URL or http://localhost:8000)
        #[arg(short, long)]
        base_url: Option<String>,

        /// Request timeout in seconds (default: none)
        #[arg(short, long)]
        timeout: Option<String>,

        /// Apply policy for overlapping responses
        #[arg(long)]
        policy: Option<ApplyPolicy>,

        /// Write the rendered widget page to this file
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the decoded PNG plot to this file
        #[arg(long)]
        image: Option<PathBuf>,

        /// Print the raw JSON response instead of the summary
        #[arg(long)]
        json: bool,
    },

    /// Render a saved JSON response as the widget page
    Render {
        /// JSON file with image, slope, intercept, r_squared
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Upload {
            input,
            base_url,
            timeout,
            policy,
            html,
            image,
            json,
        } => {
            cmd_upload(
                &input,
                base_url.as_deref(),
                timeout.as_deref(),
                policy,
                html.as_deref(),
                image.as_deref(),
                json,
            )
            .await
        }

        Commands::Render { input, output } => cmd_render(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_upload(
    input: &Path,
    base_url: Option<&str>,
    timeout: Option<&str>,
    policy: Option<ApplyPolicy>,
    html: Option<&Path>,
    image: Option<&Path>,
    json: bool,
) -> ClientResult<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(parse_timeout(secs)?);
    }
    if let Some(policy) = policy {
        config = config.with_policy(policy);
    }

    let file = SelectedFile::from_path(input).await?;

    let widget = UploadWidget::from_config(&config);
    let resolution = widget
        .handle_file_selected(file)
        .await
        .map_err(|e| ClientError::Task(e.to_string()))?;

    match resolution {
        Resolution::Applied => {}
        Resolution::Failed(err) => return Err(err.into()),
        Resolution::Superseded => {
            return Err(ClientError::NotApplied("superseded by a newer request".to_string()))
        }
        Resolution::Discarded => {
            return Err(ClientError::NotApplied("widget was reset".to_string()))
        }
    }
    let result = widget
        .result()
        .ok_or_else(|| ClientError::NotApplied("no result held".to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_fit(&result));
    }

    if let Some(path) = html {
        export::write_page(Some(&result), path)?;
        eprintln!("💾 Page written to: {}", path.display());
    }
    if let Some(path) = image {
        export::write_image(&result, path)?;
        eprintln!("💾 Plot written to: {}", path.display());
    }

    Ok(())
}

fn cmd_render(input: &Path, output: Option<&Path>) -> ClientResult<()> {
    let content = fs::read_to_string(input)?;
    let result: FitResult = serde_json::from_str(&content)?;

    match output {
        Some(path) => {
            export::write_page(Some(&result), path)?;
            eprintln!("💾 Output written to: {}", path.display());
        }
        None => {
            println!("{}", linreg_client::render_page(Some(&result)));
        }
    }

    Ok(())
}
