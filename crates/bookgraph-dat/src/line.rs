//! Line grammar for GraphBase encounter data.
//!
//! Datasets are line-oriented with exactly two meaningful shapes:
//!
//! ```text
//! AA Anna Arkadyevna Karenina, wife of Karenin
//! 1.2:AA,VV;KI,TA
//! ```
//!
//! The first defines a character (two-letter code, then a display name up
//! to the first comma). The second records the encounters of one chapter:
//! semicolon-separated groups of comma-separated participant codes. Every
//! other line, including chapter headers without a colon, is ignored.

/// One classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A character-definition line
    CharacterDef {
        /// Two-letter character code
        id: &'a str,
        /// Display name between the first space and the first comma, trimmed
        name: &'a str,
    },
    /// A chapter-encounter line
    Encounter {
        /// Chapter label before the first colon, trimmed
        chapter: &'a str,
        /// Raw encounter text after the first colon
        encounters: &'a str,
    },
    /// Blank lines, commentary, continuation lines, colonless chapter headers
    Ignored,
}

/// Classify one line, first match wins.
///
/// The caller is expected to trim surrounding whitespace first; the parser
/// trims every raw line before classifying it.
pub fn classify(line: &str) -> Line<'_> {
    if starts_with_character_code(line) {
        let (id, name) = split_character_def(line);
        return Line::CharacterDef { id, name };
    }

    if starts_with_chapter_label(line) {
        // A label without a colon is a chapter header with no encounter data
        return match line.split_once(':') {
            Some((chapter, encounters)) => Line::Encounter {
                chapter: chapter.trim(),
                encounters,
            },
            None => Line::Ignored,
        };
    }

    Line::Ignored
}

/// Split encounter text into groups of participant ids.
///
/// Groups are separated by semicolons, participants by commas. Tokens are
/// trimmed and empty tokens from stray separators are discarded, so groups
/// may come back empty; callers decide what a usable group must contain.
pub fn encounter_groups(encounters: &str) -> Vec<Vec<&str>> {
    encounters
        .split(';')
        .map(|group| {
            group
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .collect()
}

/// Two leading ASCII uppercase letters begin a character definition.
fn starts_with_character_code(line: &str) -> bool {
    matches!(line.as_bytes(), [a, b, ..] if a.is_ascii_uppercase() && b.is_ascii_uppercase())
}

/// A leading digit begins a dotted chapter label (one or more digit groups
/// separated by dots: "1", "1.2", "1.2.3"); a single digit group already
/// commits the line to the chapter shape.
fn starts_with_chapter_label(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit())
}

/// Extract the id and name fields of a character-definition line.
///
/// The id is the two-letter code; the name is the text between the first
/// space and the first comma. Definition lines without a comma use the
/// whole remainder; a comma before any space leaves the name empty.
fn split_character_def(line: &str) -> (&str, &str) {
    let id = &line[..2];

    let name = match line.find(' ') {
        Some(space) => match line.find(',') {
            Some(comma) if comma > space => line[space + 1..comma].trim(),
            Some(_) => "",
            None => line[space + 1..].trim(),
        },
        None => "",
    };

    (id, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_character_definition() {
        let line = classify("AB Alice, protagonist");
        assert_eq!(
            line,
            Line::CharacterDef {
                id: "AB",
                name: "Alice"
            }
        );
    }

    #[test]
    fn test_classify_multi_word_name() {
        let line = classify("AA Anna Arkadyevna Karenina, wife of Karenin");
        assert_eq!(
            line,
            Line::CharacterDef {
                id: "AA",
                name: "Anna Arkadyevna Karenina"
            }
        );
    }

    #[test]
    fn test_classify_definition_without_comma() {
        let line = classify("AB Alice");
        assert_eq!(
            line,
            Line::CharacterDef {
                id: "AB",
                name: "Alice"
            }
        );
    }

    #[test]
    fn test_classify_definition_without_space() {
        let line = classify("ABCD");
        assert_eq!(line, Line::CharacterDef { id: "AB", name: "" });
    }

    #[test]
    fn test_classify_definition_comma_before_space() {
        let line = classify("AB,x y");
        assert_eq!(line, Line::CharacterDef { id: "AB", name: "" });
    }

    #[test]
    fn test_classify_encounter_line() {
        let line = classify("1.2.3: AB,CD;EF");
        assert_eq!(
            line,
            Line::Encounter {
                chapter: "1.2.3",
                encounters: " AB,CD;EF"
            }
        );
    }

    #[test]
    fn test_classify_single_group_label() {
        let line = classify("7:AB,CD");
        assert_eq!(
            line,
            Line::Encounter {
                chapter: "7",
                encounters: "AB,CD"
            }
        );
    }

    #[test]
    fn test_classify_splits_on_first_colon_only() {
        let line = classify("1.1:AB:CD");
        assert_eq!(
            line,
            Line::Encounter {
                chapter: "1.1",
                encounters: "AB:CD"
            }
        );
    }

    #[test]
    fn test_classify_chapter_header_without_colon() {
        assert_eq!(classify("3.0"), Line::Ignored);
    }

    #[test]
    fn test_classify_ignores_everything_else() {
        assert_eq!(classify(""), Line::Ignored);
        assert_eq!(classify("* Commentary from the file header"), Line::Ignored);
        assert_eq!(classify("&,CC,DD"), Line::Ignored);
        assert_eq!(classify("aB lowercase start"), Line::Ignored);
    }

    #[test]
    fn test_character_code_wins_over_chapter_label() {
        // First match wins: an uppercase pair is a definition even if
        // the rest of the line looks like an encounter
        let line = classify("AB 1.1: CD");
        assert_eq!(
            line,
            Line::CharacterDef {
                id: "AB",
                name: "1.1: CD"
            }
        );
    }

    #[test]
    fn test_encounter_groups_split_and_trim() {
        let groups = encounter_groups(" AB,CD ; EF ,GH,IJ ");
        assert_eq!(groups, vec![vec!["AB", "CD"], vec!["EF", "GH", "IJ"]]);
    }

    #[test]
    fn test_encounter_groups_drop_empty_tokens() {
        let groups = encounter_groups("AB,,CD;;EF,");
        assert_eq!(groups, vec![vec!["AB", "CD"], vec![], vec!["EF"]]);
    }

    #[test]
    fn test_encounter_groups_only_separators() {
        let groups = encounter_groups(" ,; ,");
        assert_eq!(groups, vec![Vec::<&str>::new(), Vec::<&str>::new()]);
    }
}
