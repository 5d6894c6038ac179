use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use spam_filter::{
    artifacts,
    data::{load_split, Splits},
    PipelineConfig,
};

/// Trains and evaluates the SMS spam classifiers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Training split, one `label<TAB>text` row per message.
    #[arg(long, default_value = "ds6_train.tsv")]
    train: PathBuf,

    /// Validation split, used to pick the SVM radius.
    #[arg(long, default_value = "ds6_val.tsv")]
    val: PathBuf,

    /// Test split.
    #[arg(long, default_value = "ds6_test.tsv")]
    test: PathBuf,

    /// Directory the artifacts are written to.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// JSON file overriding the default settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the minimum document frequency of vocabulary words.
    #[arg(long)]
    min_df: Option<NonZeroUsize>,

    /// Overrides the number of indicative words reported.
    #[arg(long)]
    top_k: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(min_df) = args.min_df {
        config.min_df = min_df;
    }
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }

    let splits = Splits {
        train: load_split(&args.train).context("loading training split")?,
        val: load_split(&args.val).context("loading validation split")?,
        test: load_split(&args.test).context("loading test split")?,
    };
    info!(
        "loaded {} train, {} val and {} test messages",
        splits.train.len(),
        splits.val.len(),
        splits.test.len()
    );

    let report = spam_filter::run(&config, &splits)?;
    artifacts::write_report(&args.out_dir, &report)
        .with_context(|| format!("writing artifacts to {}", args.out_dir.display()))?;

    println!(
        "Naive Bayes had an accuracy of {} on the testing set",
        report.nb_accuracy
    );
    println!(
        "The top {} indicative words for Naive Bayes are: {:?}",
        config.top_k, report.top_words
    );
    println!(
        "The optimal SVM radius was {}",
        report.radius_selection.best.radius
    );
    println!(
        "The SVM model had an accuracy of {} on the testing set",
        report.svm_accuracy
    );

    Ok(())
}
