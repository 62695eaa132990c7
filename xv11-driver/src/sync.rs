/// Byte-at-a-time matcher for a fixed framing pattern.
///
/// Advances one state per matching byte. A byte that fails to extend the
/// match resets the matcher to its searching state and is discarded; it
/// is never re-examined as a potential new start of the pattern.
pub(crate) struct SyncMatcher {
    pattern: &'static [u8],
    matched: usize,
}

impl SyncMatcher {
    pub(crate) fn new(pattern: &'static [u8]) -> SyncMatcher {
        SyncMatcher {
            pattern,
            matched: 0,
        }
    }

    /// Feeds one byte and reports whether the full pattern has now been
    /// seen. The matcher is ready for the next frame after a match.
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if byte == self.pattern[self.matched] {
            self.matched += 1;
        } else {
            self.matched = 0;
        }
        if self.matched == self.pattern.len() {
            self.matched = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEGACY_SYNC_PATTERN, PACKET_SYNC_PATTERN};

    fn feed(matcher: &mut SyncMatcher, bytes: &[u8]) -> Vec<bool> {
        bytes.iter().map(|&b| matcher.push(b)).collect()
    }

    #[test]
    fn test_clean_match() {
        let mut matcher = SyncMatcher::new(LEGACY_SYNC_PATTERN);
        assert_eq!(
            feed(&mut matcher, &[0x5A, 0xA5, 0x00, 0xC0]),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_match_after_garbage() {
        let mut matcher = SyncMatcher::new(LEGACY_SYNC_PATTERN);
        assert!(!feed(&mut matcher, &[0x00, 0xFF, 0xA5, 0xC0]).contains(&true));
        assert_eq!(
            feed(&mut matcher, &[0x5A, 0xA5, 0x00, 0xC0]),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_mismatch_discards_byte() {
        // The second 0x5A breaks the match and is not reused as a new
        // start, so the trailing A5 00 C0 must not complete the pattern.
        let mut matcher = SyncMatcher::new(LEGACY_SYNC_PATTERN);
        assert!(!feed(&mut matcher, &[0x5A, 0x5A, 0xA5, 0x00, 0xC0]).contains(&true));
    }

    #[test]
    fn test_packet_pattern_restarts_on_repeated_header() {
        let mut matcher = SyncMatcher::new(PACKET_SYNC_PATTERN);
        // FA FA resets to the searching state; the repeated header byte
        // is discarded, so FA A0 is required from scratch.
        assert_eq!(feed(&mut matcher, &[0xFA, 0xFA, 0xA0]), vec![false, false, false]);
        assert_eq!(feed(&mut matcher, &[0xFA, 0xA0]), vec![false, true]);
    }

    #[test]
    fn test_matcher_ready_after_match() {
        let mut matcher = SyncMatcher::new(PACKET_SYNC_PATTERN);
        assert_eq!(feed(&mut matcher, &[0xFA, 0xA0]), vec![false, true]);
        assert_eq!(feed(&mut matcher, &[0xFA, 0xA0]), vec![false, true]);
    }
}
