mod label;
mod loader;

pub use label::{Label, Labels};
pub use loader::{load_split, parse_split};

/// A labeled SMS message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    label: Label,
}

impl Message {
    /// Creates a new `Message`.
    ///
    /// # Arguments
    /// * `text` - The raw message body.
    /// * `label` - Whether the message is spam or ham.
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

/// The three aligned splits consumed by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Splits {
    pub train: Vec<Message>,
    pub val: Vec<Message>,
    pub test: Vec<Message>,
}

/// Returns the texts of `messages` in order.
pub fn texts(messages: &[Message]) -> impl Iterator<Item = &str> {
    messages.iter().map(Message::text)
}
