//! Extraction of typed fields from descriptor file text.
//!
//! Descriptor files are line-oriented; the only fields the engines care
//! about are `CircleSize:` (the key count) and `Mode:` (the game mode code).
//! Parsing is total: an absent label, a non-numeric value or undecodable
//! content all yield `None` rather than an error, and downstream filters
//! treat an unknown field as "does not satisfy any specific value".

const KEY_COUNT_LABEL: &str = "CircleSize:";
const MODE_LABEL: &str = "Mode:";

/// Returns the trimmed value of the first line starting with `label`.
///
/// Only the first matching line is considered; a malformed value there does
/// not fall through to later occurrences.
fn field_value<'a>(content: &'a str, label: &str) -> Option<&'a str> {
    content
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix(label))
        .map(str::trim)
}

/// Parses the key count from the `CircleSize:` line of descriptor content.
pub fn parse_key_count(content: &str) -> Option<u32> {
    field_value(content, KEY_COUNT_LABEL)?.parse().ok()
}

/// Parses the game mode code from the `Mode:` line of descriptor content.
pub fn parse_mode(content: &str) -> Option<u32> {
    field_value(content, MODE_LABEL)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_count_is_extracted() {
        let content = "[Difficulty]\nHPDrainRate:6\nCircleSize: 7\nOverallDifficulty:8\n";
        assert_eq!(parse_key_count(content), Some(7));
    }

    #[test]
    fn missing_label_yields_none() {
        assert_eq!(parse_key_count("osu file format v14\n[Metadata]\n"), None);
        assert_eq!(parse_mode(""), None);
    }

    #[test]
    fn non_numeric_value_yields_none() {
        assert_eq!(parse_key_count("CircleSize: abc\n"), None);
        assert_eq!(parse_key_count("CircleSize: 4.5\n"), None);
    }

    #[test]
    fn first_matching_line_wins() {
        // A malformed first occurrence is not rescued by a later valid one.
        assert_eq!(parse_key_count("CircleSize: x\nCircleSize: 4\n"), None);
        assert_eq!(parse_key_count("CircleSize:4\nCircleSize:9\n"), Some(4));
    }

    #[test]
    fn whitespace_and_line_ending_variants_are_tolerated() {
        assert_eq!(parse_key_count("CircleSize:4"), Some(4));
        assert_eq!(parse_key_count("  CircleSize:  4  \n"), Some(4));
        assert_eq!(parse_key_count("Mode: 3\r\nCircleSize: 7\r\n"), Some(7));
        assert_eq!(parse_mode("Mode: 3\r\n"), Some(3));
    }

    #[test]
    fn mode_is_extracted_independently_of_key_count() {
        let content = "[General]\nMode: 1\n\n[Difficulty]\nCircleSize:5\n";
        assert_eq!(parse_mode(content), Some(1));
        assert_eq!(parse_key_count(content), Some(5));
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn key_count_round_trips(value in 0u32..=18) {
                let content = format!(
                    "[Difficulty]\nHPDrainRate:5\nCircleSize:{value}\nOverallDifficulty:7\n"
                );
                prop_assert_eq!(parse_key_count(&content), Some(value));
            }

            #[test]
            fn arbitrary_text_never_panics(content in "\\PC*") {
                let _ = parse_key_count(&content);
                let _ = parse_mode(&content);
            }
        }
    }
}
