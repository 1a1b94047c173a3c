/// A bullet (`-`, `*`, `+`) or ordered (`1.`, `1)`) list item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Bytes consumed by the marker and the whitespace after it.
    pub width: usize,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITERS: [u8; 2] = [b'.', b')'];
    /// Ordered markers have at most nine digits.
    const MAX_DIGITS: usize = 9;

    /// Recognizes a list marker at the start of `text`. The marker must be
    /// followed by whitespace or end the line.
    pub fn marker(text: &str) -> Option<ListMarker> {
        let b = text.as_bytes();
        let (ordered, marker_len) = match b.first()? {
            c if Self::BULLETS.contains(c) => (false, 1),
            c if c.is_ascii_digit() => {
                let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_DIGITS {
                    return None;
                }
                match b.get(digits) {
                    Some(d) if Self::ORDERED_DELIMITERS.contains(d) => (true, digits + 1),
                    _ => return None,
                }
            }
            _ => return None,
        };

        let rest = &text[marker_len..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let spaces = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        Some(ListMarker {
            ordered,
            width: marker_len + spaces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some(ListMarker { ordered: false, width: 2 }))]
    #[case("*   spaced", Some(ListMarker { ordered: false, width: 4 }))]
    #[case("+", Some(ListMarker { ordered: false, width: 1 }))]
    #[case("1. first", Some(ListMarker { ordered: true, width: 3 }))]
    #[case("12) twelfth", Some(ListMarker { ordered: true, width: 4 }))]
    #[case("-not a list", None)]
    #[case("1.5 ratio", None)]
    #[case("[[Link]]", None)]
    fn marker_cases(#[case] text: &str, #[case] expected: Option<ListMarker>) {
        assert_eq!(ListItem::marker(text), expected);
    }
}
