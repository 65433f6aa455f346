//! Label shortening that never splits a UTF-8 character.

/// Snap a byte position back to the nearest char boundary at or before it.
/// Positions past the end snap to `s.len()`.
pub fn snap_to_char_boundary(s: &str, byte_pos: usize) -> usize {
    if byte_pos >= s.len() {
        return s.len();
    }
    (0..=byte_pos).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Shorten `s` to at most `max_chars` characters, ending with `…` when
/// anything was cut. `max_chars == 0` yields an empty string.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) => {
            // keep max_chars - 1 characters plus the ellipsis
            let cut = s
                .char_indices()
                .nth(max_chars - 1)
                .map(|(i, _)| i)
                .unwrap_or(s.len());
            format!("{}…", &s[..snap_to_char_boundary(s, cut)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_ascii() {
        let s = "hello";
        assert_eq!(snap_to_char_boundary(s, 0), 0);
        assert_eq!(snap_to_char_boundary(s, 3), 3);
        assert_eq!(snap_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn test_snap_multibyte() {
        // '중' is 3 bytes in UTF-8
        let s = "중간";
        assert_eq!(snap_to_char_boundary(s, 1), 0);
        assert_eq!(snap_to_char_boundary(s, 2), 0);
        assert_eq!(snap_to_char_boundary(s, 3), 3);
        assert_eq!(snap_to_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_ellipsize_short_is_untouched() {
        assert_eq!(ellipsize("Budget Report.xlsx", 40), "Budget Report.xlsx");
        assert_eq!(ellipsize("abc", 3), "abc");
    }

    #[test]
    fn test_ellipsize_long() {
        assert_eq!(ellipsize("Meeting Recording.mp4", 8), "Meeting…");
        assert_eq!(ellipsize("abcd", 3), "ab…");
    }

    #[test]
    fn test_ellipsize_multibyte() {
        assert_eq!(ellipsize("연의 저장소 파일", 4), "연의 …");
        assert_eq!(ellipsize("a😀b😀c", 3), "a😀…");
    }

    #[test]
    fn test_ellipsize_zero() {
        assert_eq!(ellipsize("anything", 0), "");
        assert_eq!(ellipsize("", 5), "");
    }
}
