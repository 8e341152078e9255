mod api;
mod server;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use engage_sim::config::PredictorConfig;
use engage_sim::{
    compare_all_post_types, format_float, format_number, predict_from_metadata, predict_from_text,
    ModelContext, Month, PostMetadata, PostType, PredictorError,
};

#[derive(Parser)]
#[command(name = "engage-sim", about = "Social post engagement predictor")]
struct Cli {
    /// Path to the predictor config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict engagement for a post described by its metadata.
    Predict(PredictArgs),
    /// Rank all post types for the given projections.
    Compare(CompareArgs),
    /// Score raw post text against content heuristics.
    Analyze(AnalyzeArgs),
    /// Run the HTTP API.
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    #[arg(long)]
    post_type: String,
    #[arg(long, default_value = "May")]
    month: String,
    #[arg(long, default_value_t = 1000)]
    impressions: u64,
    #[arg(long, default_value_t = 1200)]
    reach: u64,
    #[arg(long, default_value_t = 100)]
    clicks: u64,
}

#[derive(Args, Debug, Clone)]
struct CompareArgs {
    #[arg(long, default_value = "May")]
    month: String,
    #[arg(long, default_value_t = 1000)]
    impressions: u64,
    #[arg(long, default_value_t = 1200)]
    reach: u64,
    #[arg(long, default_value_t = 100)]
    clicks: u64,
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    /// Post text; read from stdin when omitted.
    #[arg(long)]
    text: Option<String>,
    #[arg(long, default_value = "text")]
    post_type: String,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PredictorError> {
    let cli = Cli::parse();
    let (config, _) = PredictorConfig::load(cli.config)?;

    match cli.command {
        Command::Predict(args) => run_predict(&config, args),
        Command::Compare(args) => run_compare(&config, args),
        Command::Analyze(args) => run_analyze(args),
        Command::Serve(args) => server::serve(args, config).await,
    }
}

fn run_predict(config: &PredictorConfig, args: PredictArgs) -> Result<(), PredictorError> {
    let context = ModelContext::load(&config.model.bundle_path)?;
    let metadata = PostMetadata {
        post_type: parse_post_type(&args.post_type)?,
        month: Month::parse_lenient(&args.month),
        impressions: args.impressions,
        reach: args.reach,
        clicks: args.clicks,
    };

    let result = predict_from_metadata(&context, &metadata)?;

    println!(
        "Predicted engagement score: {} ({})",
        format_number(result.engagement_score),
        result.rating.label()
    );
    println!(
        "Expected engagement: reactions ~{} | comments ~{} | shares ~{}",
        format_number(result.estimated_reactions as f64),
        format_number(result.estimated_comments as f64),
        format_number(result.estimated_shares as f64)
    );
    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in result.recommendations {
            println!("- {}", recommendation);
        }
    }

    Ok(())
}

fn run_compare(config: &PredictorConfig, args: CompareArgs) -> Result<(), PredictorError> {
    let context = ModelContext::load(&config.model.bundle_path)?;
    let month = Month::parse_lenient(&args.month);
    let comparison =
        compare_all_post_types(&context, month, args.impressions, args.reach, args.clicks)?;

    println!("Expected performance for {}:", month.label());
    for entry in comparison {
        println!(
            "  {:<6} {:>8}  {}",
            entry.post_type.label(),
            format_number(entry.engagement_score),
            entry.rating.label()
        );
    }

    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), PredictorError> {
    let post_type = parse_post_type(&args.post_type)?;
    let text = read_text(args.text)?;
    let result = predict_from_text(&text, post_type)?;

    println!("Score: {}/100 ({})", result.score, result.rating.label());
    println!(
        "Words: {} | hashtags: {} | emoji: {} | polarity: {}",
        result.features.word_count,
        result.features.hashtag_count,
        result.features.emoji_count,
        format_float(result.features.polarity, 2)
    );
    println!("\nFeedback:");
    for line in result.feedback {
        println!("- {}", line);
    }

    Ok(())
}

fn parse_post_type(value: &str) -> Result<PostType, PredictorError> {
    PostType::from_str(value)
        .ok_or_else(|| PredictorError::validation(format!("invalid post type: {}", value)))
}

fn read_text(arg: Option<String>) -> Result<String, PredictorError> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(PredictorError::validation(
            "missing post text: pass --text or pipe stdin".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
