/// Split a query into lowercase, non-empty, whitespace-delimited tokens.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !token.is_empty())
        .collect()
}
