use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use ndarray::Array2;
use serde::Serialize;

use crate::{pipeline::Report, Result, SpamErr};

pub const DICTIONARY: &str = "dictionary.json";
pub const SAMPLE_TRAIN_MATRIX: &str = "sample_train_matrix.txt";
pub const NB_PREDICTIONS: &str = "naive_bayes_predictions.txt";
pub const NB_MODEL: &str = "naive_bayes_model.json";
pub const TOP_WORDS: &str = "top_indicative_words.json";
pub const OPTIMAL_RADIUS: &str = "optimal_radius.json";
pub const RADIUS_ACCURACIES: &str = "radius_accuracies.json";

/// Writes every artifact of `report` into `out_dir`, creating the directory if needed.
pub fn write_report(out_dir: impl AsRef<Path>, report: &Report) -> Result<()> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|e| SpamErr::io(out_dir, e))?;

    write_json(out_dir.join(DICTIONARY), &report.vocabulary.to_map())?;
    write_matrix(out_dir.join(SAMPLE_TRAIN_MATRIX), &report.sample_matrix)?;
    write_lines(out_dir.join(NB_PREDICTIONS), report.nb_predictions.as_slice())?;
    report.naive_bayes.save(out_dir.join(NB_MODEL))?;
    write_json(out_dir.join(TOP_WORDS), &report.top_words)?;
    write_json(
        out_dir.join(OPTIMAL_RADIUS),
        &report.radius_selection.best.radius,
    )?;
    write_json(
        out_dir.join(RADIUS_ACCURACIES),
        &report.radius_selection.scores,
    )?;

    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    debug!("writing {}", path.display());
    let file = File::create(path).map_err(|e| SpamErr::io(path, e))?;
    Ok(BufWriter::new(file))
}

fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| SpamErr::io(path, e))
}

/// One row per line, values separated by a single space.
fn write_matrix(path: impl AsRef<Path>, matrix: &Array2<u32>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    for row in matrix.rows() {
        let line = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}").map_err(|e| SpamErr::io(path, e))?;
    }

    writer.flush().map_err(|e| SpamErr::io(path, e))
}

fn write_lines<T: std::fmt::Display>(path: impl AsRef<Path>, values: &[T]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    for value in values {
        writeln!(writer, "{value}").map_err(|e| SpamErr::io(path, e))?;
    }

    writer.flush().map_err(|e| SpamErr::io(path, e))
}
