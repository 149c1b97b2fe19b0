//! Cell parsing helpers.

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    // Sources exported through floating-point tooling render integers as
    // "12.0"; accept those when the fraction is zero.
    match trimmed.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 => Some(v as i64),
        _ => None,
    }
}

/// Parses a non-negative count cell, returning None for invalid, empty, or
/// negative values.
pub fn parse_u32(value: &str) -> Option<u32> {
    parse_i64(value).and_then(|v| u32::try_from(v).ok())
}

/// Extracts the 4-digit year embedded in an edition label such as
/// "1896 Summer Olympics".
pub fn extract_year(label: &str) -> Option<i32> {
    let bytes = label.as_bytes();
    let mut run = 0usize;
    for (idx, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            run += 1;
            if run == 4 {
                let next_is_digit = bytes
                    .get(idx + 1)
                    .is_some_and(|next| next.is_ascii_digit());
                if !next_is_digit {
                    let start = idx + 1 - 4;
                    return label[start..=idx].parse().ok();
                }
            }
        } else {
            run = 0;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_float_renderings() {
        assert_eq!(parse_i64("1896"), Some(1896));
        assert_eq!(parse_i64(" 12.0 "), Some(12));
        assert_eq!(parse_i64("12.5"), None);
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("abc"), None);
    }

    #[test]
    fn counts_reject_negatives() {
        assert_eq!(parse_u32("3"), Some(3));
        assert_eq!(parse_u32("-1"), None);
    }

    #[test]
    fn extracts_year_from_edition_label() {
        assert_eq!(extract_year("1896 Summer Olympics"), Some(1896));
        assert_eq!(extract_year("Summer 2020"), Some(2020));
        assert_eq!(extract_year("no year here"), None);
        // Five digits in a row are not a year.
        assert_eq!(extract_year("12345"), None);
    }
}
