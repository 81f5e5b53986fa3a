/// Canonical form used to compare Lichess usernames.
///
/// Lichess treats usernames case-insensitively, so two spellings that only
/// differ in letter case (or surrounding whitespace) name the same account.
pub fn normalize_username(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn same_username(a: &str, b: &str) -> bool {
    normalize_username(a) == normalize_username(b)
}
