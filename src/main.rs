//! logreg CLI: train a MAP logistic-regression model on a CSV table, report
//! held-out quality, and write test-set predictions.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use env_logger::Env;
use rust_logreg::{
    logistic::{Dataset, FeatureMatrix, LogisticModel, SplitSpec},
    optimization::loglik_optimizer::{LineSearcher, LogProgress},
    utils::{build_train_options, read_numeric_csv, write_predictions},
};
use std::path::PathBuf;

/// Column holding the binary target; column 0 is a record identifier.
const LABEL_COLUMN: usize = 1;

#[derive(Parser, Debug)]
#[command(name = "logreg")]
#[command(about = "MAP logistic regression with gradient descent or L-BFGS")]
#[command(version)]
struct Cli {
    /// Training table (header row, id, target, features)
    #[arg(long, default_value = "./data/cs-training_mod.csv")]
    train: PathBuf,

    /// Unlabeled test table; its trailing columns are the features
    #[arg(long, default_value = "./data/cs-test_mod.csv")]
    test: PathBuf,

    /// Number of iterations
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Gradient-descent step size
    #[arg(short = 'n', long, default_value_t = 1e-11)]
    eta: f64,

    /// Gradient-norm threshold for L-BFGS
    #[arg(short, long, default_value_t = 10.0)]
    threshold: f64,

    /// Prior variance of the Gaussian on the weights
    #[arg(short, long = "regularisation-parameter", default_value_t = 10.0)]
    regularisation: f64,

    /// Train with L-BFGS instead of fixed-step gradient descent
    #[arg(short, long)]
    bfgs: bool,

    /// Line search used by L-BFGS (MoreThuente or HagerZhang)
    #[arg(long, default_value = "MoreThuente")]
    line_search: LineSearcher,

    /// Number of contiguous folds
    #[arg(long, default_value_t = 10)]
    folds: usize,

    /// Index of the held-out fold
    #[arg(long, default_value_t = 9)]
    test_fold: usize,

    /// Output file for test-set predictions
    #[arg(short = 'o', long, default_value = "logreg-entry.csv")]
    test_out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let table = read_numeric_csv(&cli.train)
        .with_context(|| format!("reading training data from {}", cli.train.display()))?;
    ensure!(table.ncols() > 2, "training table needs an id, a target and at least one feature");
    let n_features = table.ncols() - 2;
    let data = Dataset::from_table(table.view(), LABEL_COLUMN, n_features)?;
    log::info!("loaded {} records with {} features", data.len(), n_features);

    let (train, heldout) = SplitSpec::new(cli.folds, cli.test_fold)?.split(&data)?;
    log::info!("training on {} records, holding out {}", train.len(), heldout.len());

    let options = build_train_options(
        cli.iterations,
        cli.eta,
        cli.threshold,
        cli.regularisation,
        cli.bfgs,
        cli.line_search,
    )?;
    let mut model = LogisticModel::new(options);
    model.fit(&train, Box::new(LogProgress))?;
    if let Some(outcome) = &model.results {
        log::info!("stopped after {} iterations: {}", outcome.iterations, outcome.status);
    }

    println!("Final training cross entropy {}", model.cross_entropy(&train)?);
    println!("Final heldout cross entropy {}", model.cross_entropy(&heldout)?);
    report_auc("Training AUC", &model, &train);
    report_auc("Heldout development AUC", &model, &heldout);

    let test_table = read_numeric_csv(&cli.test)
        .with_context(|| format!("reading test data from {}", cli.test.display()))?;
    let test = FeatureMatrix::from_table(test_table.view(), n_features)?;
    let probabilities = model.predict(test.features.view())?;
    write_predictions(&cli.test_out, probabilities.view())
        .with_context(|| format!("writing predictions to {}", cli.test_out.display()))?;
    log::info!("wrote {} predictions to {}", probabilities.len(), cli.test_out.display());
    Ok(())
}

/// Print the AUC of `model` on `data` under `heading`.
///
/// A failed evaluation (e.g. a single-class fold) is logged and yields
/// `None`; the rest of the run continues.
fn report_auc(heading: &str, model: &LogisticModel, data: &Dataset) -> Option<f64> {
    match model.evaluate(data.features.view(), Some(data.labels.view())).map(|e| e.auc) {
        Ok(Some(auc)) => {
            println!("{heading} {auc}");
            Some(auc)
        }
        Ok(None) => None,
        Err(err) => {
            log::error!("{heading} unavailable: {err}");
            None
        }
    }
}
