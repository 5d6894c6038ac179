/// Splits a message into lowercase words.
///
/// Words are separated by whitespace only; punctuation stays attached to the word it touches.
pub fn tokenize(message: &str) -> Vec<String> {
    message.split_whitespace().map(str::to_lowercase).collect()
}
