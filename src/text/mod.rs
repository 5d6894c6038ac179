//! Bag-of-words text representation: tokenization, vocabulary and count matrices.

mod features;
mod tokenizer;
mod vocabulary;

pub use features::FeatureMatrix;
pub use tokenizer::tokenize;
pub use vocabulary::Vocabulary;
