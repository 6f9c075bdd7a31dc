use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use onpage_score::{AnalysisRequest, Result, Scorer, ScoringWeights};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "onpage-score",
    about = "Score on-page content: keyword placement, structure, links, readability and citability",
    version
)]
struct Cli {
    /// JSON analysis requests to score (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// JSON file overriding entries of the scoring table
    #[arg(long, env = "ONPAGE_SCORE_WEIGHTS")]
    weights: Option<PathBuf>,

    /// The site's own domain, used to classify links as internal
    #[arg(long, env = "ONPAGE_SCORE_SITE_DOMAIN")]
    site_domain: Option<String>,

    /// Print only the citability result
    #[arg(long)]
    citability_only: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let weights = match &cli.weights {
        Some(path) => ScoringWeights::from_json_file(path)?,
        None => ScoringWeights::default(),
    };
    let mut scorer = Scorer::new(weights);
    if let Some(domain) = &cli.site_domain {
        scorer = scorer.with_site_domain(domain.as_str());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        score_input(&scorer, &input, cli.citability_only)?;
    } else {
        for path in &cli.files {
            let input = std::fs::read_to_string(path)?;
            tracing::debug!(path = %path.display(), "scoring request");
            score_input(&scorer, &input, cli.citability_only)?;
        }
    }
    Ok(())
}

fn score_input(scorer: &Scorer, input: &str, citability_only: bool) -> Result<()> {
    let request: AnalysisRequest = serde_json::from_str(input)?;
    let json = if citability_only {
        let result = scorer.citability(&request.content, Some(&request.title));
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string_pretty(&scorer.analyze(&request))?
    };
    println!("{json}");
    Ok(())
}
