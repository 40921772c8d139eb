/// Repeat a string n times
pub fn repeat_str(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Ensure a string ends with a newline
pub fn ensure_ends_with_newline(s: &str) -> String {
    if s.ends_with('\n') {
        s.to_string()
    } else {
        format!("{}\n", s)
    }
}
