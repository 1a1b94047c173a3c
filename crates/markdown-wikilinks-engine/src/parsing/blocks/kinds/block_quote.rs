/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here rather than in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`. Up to three
    /// spaces may precede each `>`; one optional space after it belongs to
    /// the prefix.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mut j = i;
            while j < b.len() && j - i < 3 && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == Self::PREFIX {
                depth = depth.saturating_add(1);
                i = j + 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", (0, 0))]
    #[case("> hello", (1, 2))]
    #[case("> > hello", (2, 4))]
    #[case(">> hello", (2, 3))]
    #[case("   > hello", (1, 5))]
    #[case(">", (1, 1))]
    fn strip_prefixes_cases(#[case] line: &str, #[case] expected: (u8, usize)) {
        assert_eq!(BlockQuote::strip_prefixes(line), expected);
    }

    #[test]
    fn four_spaces_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefixes("    > code"), (0, 0));
    }
}
