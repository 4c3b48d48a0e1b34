use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;
use papertag_cmr::CmrClient;
use papertag_core::{Tagger, TaggerConfig, Vocabulary};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod merge;
mod report;

#[derive(Parser)]
#[command(name = "papertag")]
#[command(about = "Mine paper text for mission/instrument/variable evidence", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Label every .txt paper in a directory; write CSV rows and a features JSON
    Label(LabelArgs),

    /// Merge a features JSON into a manually reviewed ground-truth JSON
    Merge(MergeArgs),

    /// Tag a single sentence and print its evidence store (debugging aid)
    Sentence(SentenceArgs),
}

#[derive(Args)]
struct VocabArgs {
    /// Vocabulary JSON with missions/instruments/variables/exceptions lists
    #[arg(long)]
    vocabulary: PathBuf,

    /// Aliases JSON with the four raw-to-canonical tables
    #[arg(long)]
    aliases: PathBuf,

    /// Use the legacy short-circuit variant (early-exit scanning plus
    /// per-triple deduplication)
    #[arg(long)]
    legacy: bool,
}

#[derive(Args)]
struct LabelArgs {
    /// Directory of preprocessed .txt papers
    input_dir: PathBuf,

    #[command(flatten)]
    vocab: VocabArgs,

    /// Output directory for the CSV and features JSON
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output name prefix (a timestamp is prepended so runs never overwrite)
    #[arg(long, default_value = "features")]
    prefix: String,

    /// Query CMR once per distinct tag and record the first dataset hit
    #[arg(long)]
    query_cmr: bool,
}

#[derive(Args)]
struct MergeArgs {
    /// Ground-truth JSON keyed by review entry (each entry names its paper
    /// via a "pdf" field)
    ground_truth: PathBuf,

    /// Features JSON produced by `label`
    features: PathBuf,

    /// Merged output path
    #[arg(long, default_value = "features_merged.json")]
    out: PathBuf,
}

#[derive(Args)]
struct SentenceArgs {
    /// The sentence to tag
    sentence: String,

    #[command(flatten)]
    vocab: VocabArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Label(args) => run_label(args).await,
        Commands::Merge(args) => run_merge(args),
        Commands::Sentence(args) => run_sentence(args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_tagger(vocab: &VocabArgs) -> Result<Tagger> {
    let vocabulary = Vocabulary::load(&vocab.vocabulary, &vocab.aliases).with_context(|| {
        format!(
            "Failed to load vocabulary from {} / {}",
            vocab.vocabulary.display(),
            vocab.aliases.display()
        )
    })?;
    let config = if vocab.legacy {
        TaggerConfig::legacy_short_circuit()
    } else {
        TaggerConfig::default()
    };
    Ok(Tagger::with_config(vocabulary, config))
}

async fn run_label(args: LabelArgs) -> Result<()> {
    let tagger = load_tagger(&args.vocab)?;

    let pattern = args.input_dir.join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non-UTF-8 input path {}", args.input_dir.display()))?;
    let mut papers: Vec<PathBuf> = glob::glob(pattern)
        .context("Invalid input pattern")?
        .filter_map(std::result::Result::ok)
        .collect();
    papers.sort();

    if papers.is_empty() {
        log::warn!("No .txt papers found in {}", args.input_dir.display());
    }

    let cmr = args.query_cmr.then(CmrClient::new);
    let progress = ProgressBar::new(papers.len() as u64);
    let mut csv = String::new();
    let mut features = serde_json::Map::new();

    for path in &papers {
        let paper = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let store = tagger.tag_document(&text);
        log::debug!(
            "{paper}: {} tags, {} records",
            store.len(),
            store.record_count()
        );
        csv.push_str(&report::render_csv_section(&paper, &store));

        let mut paper_features = serde_json::Map::new();
        paper_features.insert("tags".to_string(), serde_json::to_value(&store)?);

        if let Some(client) = &cmr {
            let mut datasets = serde_json::Map::new();
            for (tag, _) in store.iter() {
                let record = client
                    .find_dataset(tag)
                    .await
                    .with_context(|| format!("CMR query failed for {tag}"))?;
                datasets.insert(tag.to_string(), serde_json::to_value(record)?);
            }
            paper_features.insert("datasets".to_string(), Value::Object(datasets));
        }

        features.insert(paper, Value::Object(paper_features));
        progress.inc(1);
    }
    progress.finish_and_clear();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let csv_path = args
        .out_dir
        .join(report::timestamped_name(&format!("{}_sentences", args.prefix), "csv"));
    fs::write(&csv_path, csv).with_context(|| format!("Failed to write {}", csv_path.display()))?;

    let json_path = args
        .out_dir
        .join(report::timestamped_name(&format!("{}_features", args.prefix), "json"));
    fs::write(
        &json_path,
        serde_json::to_string_pretty(&Value::Object(features))?,
    )
    .with_context(|| format!("Failed to write {}", json_path.display()))?;

    log::info!(
        "Labeled {} papers -> {} and {}",
        papers.len(),
        csv_path.display(),
        json_path.display()
    );
    Ok(())
}

fn run_merge(args: MergeArgs) -> Result<()> {
    let mut ground_truth: Value = read_json(&args.ground_truth)?;
    let features: Value = read_json(&args.features)?;

    merge::merge_features(&mut ground_truth, &features)?;

    fs::write(&args.out, serde_json::to_string_pretty(&ground_truth)?)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    log::info!("Wrote merged ground truth to {}", args.out.display());
    Ok(())
}

fn run_sentence(args: SentenceArgs) -> Result<()> {
    let tagger = load_tagger(&args.vocab)?;
    let store = tagger.tag_document(&args.sentence);
    println!("{}", serde_json::to_string_pretty(&store)?);
    Ok(())
}

fn read_json(path: &std::path::Path) -> Result<Value> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
