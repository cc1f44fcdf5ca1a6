//! utils — I/O boundary helpers: numeric CSV tables in, prediction files out,
//! and assembly of training options from raw front-end values.
//!
//! Purpose
//! -------
//! Keep file handling and raw-argument plumbing out of the numerical modules.
//! The CLI (and integration tests) read tables here, hand validated
//! containers to `logistic`, and write predictions back out.
//!
//! Conventions
//! -----------
//! - Tables have exactly one header row, which is skipped.
//! - Empty fields parse as `NaN`; rejecting them is the job of dataset
//!   validation, which knows which columns are used.
//! - Line numbers in errors are 1-based and count the header.
//! - Prediction files have one line `"<1-based index>,<probability>"` per
//!   record, probabilities with six decimals, in record order.
use crate::{
    logistic::core::options::{RegularizationStrength, TrainOptions},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{LineSearcher, MLEOptions, Strategy, Tolerances},
    },
};
use ndarray::{Array2, ArrayView1};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

pub type DataIoResult<T> = Result<T, DataIoError>;

/// Errors raised while reading tables or writing predictions.
#[derive(Debug, Clone, PartialEq)]
pub enum DataIoError {
    /// File could not be opened, created, or written.
    Io { path: String, message: String },

    /// The CSV reader rejected a record.
    CsvParse { line: usize, message: String },

    /// A record's field count differs from the header's.
    RaggedRow { line: usize, expected: usize, actual: usize },

    /// A non-empty field is not a number.
    InvalidNumber { line: usize, column: usize, text: String },

    /// The table has a header but no records.
    EmptyTable,
}

impl std::error::Error for DataIoError {}

impl std::fmt::Display for DataIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataIoError::Io { path, message } => write!(f, "I/O error on '{path}': {message}"),
            DataIoError::CsvParse { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            DataIoError::RaggedRow { line, expected, actual } => {
                write!(f, "Line {line} has {actual} fields; the header has {expected}.")
            }
            DataIoError::InvalidNumber { line, column, text } => {
                write!(f, "Line {line}, column {column}: '{text}' is not a number.")
            }
            DataIoError::EmptyTable => write!(f, "Table has no data rows."),
        }
    }
}

/// Read a numeric CSV file into an `N × C` matrix.
///
/// # Errors
/// - [`DataIoError::Io`] when the file cannot be opened.
/// - Everything [`read_numeric_table`] returns.
pub fn read_numeric_csv<P: AsRef<Path>>(path: P) -> DataIoResult<Array2<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataIoError::Io {
        path: path.display().to_string(),
        message: format!("Failed to open CSV: {e}"),
    })?;
    read_numeric_table(file)
}

/// Parse numeric CSV content (header row skipped) into an `N × C` matrix.
///
/// # Errors
/// - [`DataIoError::CsvParse`] for malformed CSV.
/// - [`DataIoError::RaggedRow`] when a record's width differs from the header.
/// - [`DataIoError::InvalidNumber`] for a non-empty, non-numeric field.
/// - [`DataIoError::EmptyTable`] when there are no records.
pub fn read_numeric_table<R: Read>(source: R) -> DataIoResult<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(source);
    let width = reader
        .headers()
        .map_err(|e| DataIoError::CsvParse { line: 1, message: format!("Failed to read header: {e}") })?
        .len();

    let mut values = Vec::new();
    let mut rows = 0;
    for (offset, result) in reader.records().enumerate() {
        let line = offset + 2;
        let record =
            result.map_err(|e| DataIoError::CsvParse { line, message: format!("{e}") })?;
        if record.len() != width {
            return Err(DataIoError::RaggedRow { line, expected: width, actual: record.len() });
        }
        for (column, field) in record.iter().enumerate() {
            values.push(parse_field(field, line, column)?);
        }
        rows += 1;
    }
    if rows == 0 {
        return Err(DataIoError::EmptyTable);
    }
    Array2::from_shape_vec((rows, width), values).map_err(|e| DataIoError::CsvParse {
        line: rows + 1,
        message: format!("Inconsistent table shape: {e}"),
    })
}

/// Write `probabilities` as `"<i + 1>,<p>"` lines to `path`.
///
/// # Errors
/// - [`DataIoError::Io`] when the file cannot be created or written.
pub fn write_predictions<P: AsRef<Path>>(
    path: P, probabilities: ArrayView1<f64>,
) -> DataIoResult<()> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| DataIoError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    format_predictions(&mut writer, probabilities).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Stream prediction lines into any writer.
pub fn format_predictions<W: Write>(
    writer: &mut W, probabilities: ArrayView1<f64>,
) -> std::io::Result<()> {
    for (i, p) in probabilities.iter().enumerate() {
        writeln!(writer, "{},{:.6}", i + 1, p)?;
    }
    Ok(())
}

/// Build [`TrainOptions`] from raw front-end values.
///
/// - `bfgs = false`: fixed-step descent, `iterations` steps of size `eta`;
///   `threshold` is ignored.
/// - `bfgs = true`: L-BFGS with `line_searcher`, stopping when the gradient
///   norm drops below `threshold` or after `iterations` iterations; `eta` is
///   ignored.
///
/// # Errors
/// - Configuration errors from `Tolerances::new`, `MLEOptions::new`, and
///   `RegularizationStrength::new`, as `OptError`.
pub fn build_train_options(
    iterations: usize, eta: f64, threshold: f64, regularisation: f64, bfgs: bool,
    line_searcher: LineSearcher,
) -> OptResult<TrainOptions> {
    let (tols, strategy) = if bfgs {
        (
            Tolerances::new(Some(threshold), None, Some(iterations))?,
            Strategy::QuasiNewton { line_searcher, lbfgs_mem: None },
        )
    } else {
        (Tolerances::new(None, None, Some(iterations))?, Strategy::GradientDescent { step_size: eta })
    };
    let mle_opts = MLEOptions::new(tols, strategy, false)?;
    let regularization = RegularizationStrength::new(regularisation)?;
    Ok(TrainOptions::new(mle_opts, regularization))
}

// ---- Helper Methods ----

fn parse_field(field: &str, line: usize, column: usize) -> DataIoResult<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|_| DataIoError::InvalidNumber {
        line,
        column,
        text: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use ndarray::array;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Header skipping, empty-field handling and error reporting of the
    //   table reader.
    // - The prediction line format, in memory and on disk.
    // - Strategy selection in `build_train_options`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The header is skipped and empty fields become NaN.
    //
    // Given
    // -----
    // - `id,target,x1,x2` header, two rows, one with an empty target.
    //
    // Expect
    // ------
    // - A 2×4 matrix; entry (1, 1) is NaN.
    fn reads_table_and_maps_empty_fields_to_nan() {
        // Arrange
        let text = "id,target,x1,x2\n1,0,0.5,-1.5\n2,,3,4e-1\n";

        // Act
        let table = read_numeric_table(text.as_bytes()).unwrap();

        // Assert
        assert_eq!(table.dim(), (2, 4));
        assert_eq!(table.row(0).to_vec(), vec![1.0, 0.0, 0.5, -1.5]);
        assert!(table[[1, 1]].is_nan());
        assert_eq!(table[[1, 3]], 0.4);
    }

    #[test]
    // Purpose
    // -------
    // Malformed content is reported with its line number.
    //
    // Given
    // -----
    // - A ragged row at line 3; a non-numeric field at line 2; a header only.
    //
    // Expect
    // ------
    // - `RaggedRow`, `InvalidNumber`, `EmptyTable`.
    fn malformed_tables_are_reported() {
        // Act
        let ragged = read_numeric_table("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        let word = read_numeric_table("a,b\n1,x\n".as_bytes()).unwrap_err();
        let empty = read_numeric_table("a,b\n".as_bytes()).unwrap_err();

        // Assert
        assert_eq!(ragged, DataIoError::RaggedRow { line: 3, expected: 2, actual: 1 });
        assert_eq!(word, DataIoError::InvalidNumber { line: 2, column: 1, text: "x".into() });
        assert_eq!(empty, DataIoError::EmptyTable);
    }

    #[test]
    // Purpose
    // -------
    // Prediction lines are 1-based with six decimals, in order.
    //
    // Given
    // -----
    // - Probabilities `[0.25, 1/3, 1]`.
    //
    // Expect
    // ------
    // - `"1,0.250000\n2,0.333333\n3,1.000000\n"`, in memory and on disk.
    fn predictions_use_one_based_six_decimal_lines() {
        // Arrange
        let probs = array![0.25, 1.0 / 3.0, 1.0];
        let file = NamedTempFile::new().expect("temp file");
        let mut buffer = Vec::new();

        // Act
        format_predictions(&mut buffer, probs.view()).unwrap();
        write_predictions(file.path(), probs.view()).unwrap();

        // Assert
        let expected = "1,0.250000\n2,0.333333\n3,1.000000\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), expected);
    }

    #[test]
    // Purpose
    // -------
    // Files on disk are read the same way as in-memory content.
    //
    // Given
    // -----
    // - A temp file with a header and one row; a missing path.
    //
    // Expect
    // ------
    // - A 1×3 matrix; `DataIoError::Io` for the missing path.
    fn reads_csv_files_from_disk() {
        // Arrange
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "id,target,x").expect("write header");
        writeln!(file, "7,1,2.5").expect("write row");

        // Act
        let table = read_numeric_csv(file.path()).unwrap();
        let missing = read_numeric_csv("./definitely/not/here.csv").unwrap_err();

        // Assert
        assert_eq!(table, array![[7.0, 1.0, 2.5]]);
        assert!(matches!(missing, DataIoError::Io { .. }));
    }

    #[test]
    // Purpose
    // -------
    // The `bfgs` switch picks the strategy and which knobs matter.
    //
    // Given
    // -----
    // - Descent with η = 1e-11; L-BFGS with threshold 10; descent with η = 0.
    //
    // Expect
    // ------
    // - `GradientDescent`, `QuasiNewton` with `tol_grad = 10`,
    //   `InvalidStepSize`.
    fn build_train_options_selects_strategy() {
        // Act
        let gd = build_train_options(1000, 1e-11, 10.0, 10.0, false, LineSearcher::MoreThuente)
            .unwrap();
        let qn = build_train_options(1000, 1e-11, 10.0, 10.0, true, LineSearcher::HagerZhang)
            .unwrap();
        let bad = build_train_options(1000, 0.0, 10.0, 10.0, false, LineSearcher::MoreThuente)
            .unwrap_err();

        // Assert
        assert_eq!(gd.mle_opts.strategy, Strategy::GradientDescent { step_size: 1e-11 });
        assert_eq!(gd.regularization.value(), 10.0);
        assert_eq!(
            qn.mle_opts.strategy,
            Strategy::QuasiNewton { line_searcher: LineSearcher::HagerZhang, lbfgs_mem: None }
        );
        assert_eq!(qn.mle_opts.tols.tol_grad, Some(10.0));
        assert!(matches!(bad, OptError::InvalidStepSize { .. }));
    }
}
