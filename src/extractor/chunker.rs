use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("max_chars must be at least 1")]
    InvalidMaxChars,
}

/// Partition `text` into contiguous slices of at most `max_chars` characters.
///
/// Boundaries are pure length: every chunk except possibly the last holds
/// exactly `max_chars` characters, and concatenating the result reproduces
/// `text`. Empty input yields an empty vec.
pub fn chunk(text: &str, max_chars: usize) -> Result<Vec<String>, ChunkError> {
    if max_chars == 0 {
        return Err(ChunkError::InvalidMaxChars);
    }

    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_scenario() {
        let chunks = chunk("abcdefgh", 3).unwrap();
        assert_eq!(chunks, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_empty_input() {
        let chunks = chunk("", 100).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_zero_max_chars_rejected() {
        assert_eq!(chunk("abc", 0), Err(ChunkError::InvalidMaxChars));
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let chunks = chunk("abcdef", 3).unwrap();
        assert_eq!(chunks, vec!["abc", "def"]);
    }

    #[test]
    fn test_single_chunk_when_under_limit() {
        let chunks = chunk("short", 8000).unwrap();
        assert_eq!(chunks, vec!["short"]);
    }

    #[test]
    fn test_multibyte_boundaries() {
        // 4 characters, 10 bytes; a byte-indexed split would panic here
        let chunks = chunk("日本語a", 3).unwrap();
        assert_eq!(chunks, vec!["日本語", "a"]);
    }

    proptest! {
        #[test]
        fn prop_round_trip(text in ".{0,300}", max in 1usize..64) {
            let chunks = chunk(&text, max).unwrap();
            prop_assert_eq!(chunks.concat(), text);
        }

        #[test]
        fn prop_chunk_bound(text in ".{0,300}", max in 1usize..64) {
            for c in chunk(&text, max).unwrap() {
                let len = c.chars().count();
                prop_assert!(len > 0 && len <= max);
            }
        }

        #[test]
        fn prop_chunk_count(text in ".{1,300}", max in 1usize..64) {
            let n = text.chars().count();
            let chunks = chunk(&text, max).unwrap();
            prop_assert_eq!(chunks.len(), n.div_ceil(max));
        }
    }
}
