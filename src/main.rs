use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use lexical_fit::{FitScorer, ScorerConfig};

/// lexical-fit: score how well resumes fit a job description.
///
/// Input files must already be plain UTF-8 text.
#[derive(Parser)]
#[command(name = "lexical-fit", version, about)]
struct Cli {
    /// Max matching keywords per result (overrides LEXICAL_FIT_TOP_N)
    #[arg(long, global = true)]
    top_n: Option<usize>,

    /// Print human-readable text instead of JSON
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one candidate against a reference
    Score {
        /// Candidate document (resume)
        #[arg(long)]
        candidate: PathBuf,

        /// Reference document (job description)
        #[arg(long)]
        reference: PathBuf,
    },

    /// Rank candidates against a reference, best fit first
    Rank {
        /// Reference document (job description)
        #[arg(long)]
        reference: PathBuf,

        /// Candidate documents
        #[arg(required = true)]
        candidates: Vec<PathBuf>,
    },
}

fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexical_fit=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ScorerConfig::from_env().context("invalid configuration")?;
    if let Some(top_n) = cli.top_n {
        config = config.with_top_n(top_n);
    }
    let scorer: FitScorer = FitScorer::new(config);

    match cli.command {
        Commands::Score { candidate, reference } => {
            let candidate_text = read_text(&candidate)?;
            let reference_text = read_text(&reference)?;
            let report = scorer.evaluate(&candidate_text, &reference_text);
            info!(fit_score = report.fit_score, keywords = report.matching_keywords.len(), "scored");
            if cli.plain {
                println!("{:.2}  [{}]", report.fit_score, report.matching_keywords.join(", "));
            } else {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Rank { reference, candidates } => {
            let reference_text = read_text(&reference)?;
            let documents = candidates
                .iter()
                .map(|path| Ok((path.display().to_string(), read_text(path)?)))
                .collect::<Result<Vec<(String, String)>>>()?;
            let ranking = scorer.rank(&reference_text, &documents);
            if cli.plain {
                print!("{}", ranking);
            } else {
                println!("{}", serde_json::to_string_pretty(&ranking)?);
            }
        }
    }

    Ok(())
}
