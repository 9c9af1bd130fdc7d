/// Parse a strictly positive integer (used for widths and counts that cannot
/// be zero).
///
/// # Errors
///
/// Returns a message for non-numeric input or zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {s}"))?;
    if n == 0 {
        return Err("Value must be at least 1".to_string());
    }
    Ok(n)
}
