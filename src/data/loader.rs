use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use super::{Label, Message};
use crate::{Result, SpamErr};

/// Loads a dataset split from a TSV file where every row is `label<TAB>text`.
///
/// # Arguments
/// * `path` - The file to read.
///
/// # Returns
/// The messages in file order, or an error if the file can't be read or a row is malformed.
pub fn load_split(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SpamErr::io(path, e))?;
    let messages = parse_split(BufReader::new(file)).map_err(|e| match e {
        SpamErr::Io { source, .. } => SpamErr::io(path, source),
        other => other,
    })?;

    debug!("loaded {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Parses `label<TAB>text` rows from any buffered reader.
///
/// Blank lines are skipped. A row without a tab, with an empty label or with an unknown label
/// fails the whole split, since silently dropping it would misalign messages and labels.
pub fn parse_split<R: BufRead>(reader: R) -> Result<Vec<Message>> {
    let mut messages = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| SpamErr::io("<reader>", e))?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }

        let Some((label, text)) = line.split_once('\t') else {
            return Err(SpamErr::MalformedRow {
                line: line_no,
                reason: "missing tab between label and text",
            });
        };

        if label.trim().is_empty() {
            return Err(SpamErr::MalformedRow {
                line: line_no,
                reason: "missing label",
            });
        }

        let label = Label::parse(label).map_err(|_| SpamErr::MalformedRow {
            line: line_no,
            reason: "label must be spam/ham or 1/0",
        })?;

        messages.push(Message::new(text, label));
    }

    Ok(messages)
}
