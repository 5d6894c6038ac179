use std::fmt;

use serde::{Deserialize, Serialize};

use super::Message;
use crate::{Result, SpamErr};

/// Binary class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham = 0,
    Spam = 1,
}

impl Label {
    /// Parses the label column of a dataset row.
    ///
    /// Accepts `spam`/`ham` in any case, or `1`/`0`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("spam") || raw == "1" {
            Ok(Label::Spam)
        } else if raw.eq_ignore_ascii_case("ham") || raw == "0" {
            Ok(Label::Ham)
        } else {
            Err(SpamErr::InvalidLabel {
                value: raw.to_string(),
            })
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = SpamErr;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Label::Ham),
            1 => Ok(Label::Spam),
            other => Err(SpamErr::InvalidLabel {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// An immutable vector of 0/1 labels, aligned by index with a feature matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(Vec<u8>);

impl Labels {
    /// Builds a label vector from raw values, rejecting anything but 0 and 1.
    pub fn from_vec(values: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = values.iter().find(|&&v| v > 1) {
            return Err(SpamErr::InvalidLabel {
                value: bad.to_string(),
            });
        }

        Ok(Self(values))
    }

    pub fn from_messages(messages: &[Message]) -> Self {
        Self(messages.iter().map(|m| m.label().as_u8()).collect())
    }

    pub(crate) fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        Self(labels.into_iter().map(Label::as_u8).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Iterates over the labels as `Label`s.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.0
            .iter()
            .filter_map(|&v| Label::try_from(v).ok())
    }

    /// Returns the number of labels equal to `label`.
    pub fn count(&self, label: Label) -> usize {
        self.0.iter().filter(|&&v| v == label.as_u8()).count()
    }
}
