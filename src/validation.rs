/// Input classification for the shared search box
use serde::Serialize;
use thiserror::Error;

/// Substrings that mark an input as a Reddit thread link
pub const RECOGNIZED_DOMAINS: &[&str] = &["reddit.com"];

/// Validation failures reported before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a keyword to search")]
    EmptyKeyword,
    #[error("This looks like a URL. Please use the \"Fetch by Thread URL\" button instead.")]
    KeywordLooksLikeUrl,
    #[error("Please enter a Reddit URL to fetch")]
    EmptyUrl,
    #[error("Please enter a valid Reddit URL")]
    UnrecognizedUrl,
}

/// What the search box currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Empty,
    Keyword,
    ThreadUrl,
    ForeignUrl,
}

fn has_recognized_domain(input: &str) -> bool {
    RECOGNIZED_DOMAINS.iter().any(|domain| input.contains(domain))
}

/// Classify raw input the way the two trigger buttons would see it
pub fn classify_input(raw: &str) -> InputKind {
    let input = raw.trim();
    if input.is_empty() {
        InputKind::Empty
    } else if has_recognized_domain(input) {
        InputKind::ThreadUrl
    } else if input.starts_with("http") {
        InputKind::ForeignUrl
    } else {
        InputKind::Keyword
    }
}

/// Validate a keyword search, returning the trimmed keyword
pub fn validate_keyword(raw: &str) -> Result<&str, InputError> {
    match classify_input(raw) {
        InputKind::Empty => Err(InputError::EmptyKeyword),
        InputKind::ThreadUrl | InputKind::ForeignUrl => Err(InputError::KeywordLooksLikeUrl),
        InputKind::Keyword => Ok(raw.trim()),
    }
}

/// Validate a thread link, returning the trimmed URL
pub fn validate_thread_url(raw: &str) -> Result<&str, InputError> {
    match classify_input(raw) {
        InputKind::Empty => Err(InputError::EmptyUrl),
        InputKind::ThreadUrl => Ok(raw.trim()),
        InputKind::Keyword | InputKind::ForeignUrl => Err(InputError::UnrecognizedUrl),
    }
}
