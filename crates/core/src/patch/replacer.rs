//! The block matching and replacement logic.

use regex::Regex;
use tracing::debug;

use crate::patch::types::{PatchError, PatchOutcome};

/// Build the non-greedy span pattern: the escaped marker, the shortest run
/// of any characters (newlines included), then the escaped delimiter.
fn block_pattern(marker: &str, delimiter: char) -> Result<Regex, PatchError> {
    let pattern = format!(
        "(?s){}.*?{}",
        regex::escape(marker),
        regex::escape(&delimiter.to_string())
    );
    Ok(Regex::new(&pattern)?)
}

/// Check whether a marker-delimited block is present in `host`.
///
/// # Errors
///
/// Returns [`PatchError::BadPattern`] if the marker and delimiter cannot be
/// compiled into a match pattern.
pub fn contains_block(host: &str, marker: &str, delimiter: char) -> Result<bool, PatchError> {
    Ok(block_pattern(marker, delimiter)?.is_match(host))
}

/// Replace the first marker-delimited block in `host`.
///
/// Finds the first occurrence of `marker` followed by the shortest run of
/// characters up to the next `delimiter`, and substitutes `replacement` for
/// the block body. The body may contain anything, including newlines, tabs
/// and zero-width characters. The marker and the closing delimiter are kept;
/// a single newline is inserted between the marker and the replacement.
///
/// Only the first match is touched; later occurrences of the marker or the
/// delimiter are left alone. There is no escape awareness: an unescaped
/// delimiter inside the block terminates the match early, and a replacement
/// that itself contains the delimiter makes a second run match a shorter
/// span. Both are accepted limitations of the shortest-match rule, so the
/// operation is not guaranteed to be idempotent.
///
/// # Errors
///
/// Returns [`PatchError::PatternNotFound`] when no marker/delimiter span
/// exists in `host`. No other outcome is possible for well-formed inputs;
/// this function is pure and performs no I/O.
pub fn replace_block(
    host: &str,
    marker: &str,
    delimiter: char,
    replacement: &str,
) -> Result<PatchOutcome, PatchError> {
    let re = block_pattern(marker, delimiter)?;

    let Some(found) = re.find(host) else {
        return Err(PatchError::PatternNotFound {
            marker: marker.to_string(),
            delimiter,
        });
    };

    debug!(start = found.start(), end = found.end(), "matched block span");

    let span_len = found.end() - found.start();
    let new_len = host.len() - span_len
        + marker.len()
        + 1
        + replacement.len()
        + delimiter.len_utf8();

    let mut text = String::with_capacity(new_len);
    text.push_str(&host[..found.start()]);
    text.push_str(marker);
    text.push('\n');
    text.push_str(replacement);
    text.push(delimiter);
    text.push_str(&host[found.end()..]);

    Ok(PatchOutcome {
        text,
        replacements: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_simple_block() {
        let host = "PREFIX=`OLDBLOCK` SUFFIX";
        let out = replace_block(host, "PREFIX=`", '`', "NEWBLOCK").unwrap();

        assert_eq!(out.text, "PREFIX=`\nNEWBLOCK` SUFFIX");
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn test_missing_marker_is_an_error() {
        let host = "nothing to see here";
        let err = replace_block(host, "PREFIX=`", '`', "NEWBLOCK").unwrap_err();

        match err {
            PatchError::PatternNotFound { marker, delimiter } => {
                assert_eq!(marker, "PREFIX=`");
                assert_eq!(delimiter, '`');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_marker_without_closing_delimiter_is_an_error() {
        let host = "PREFIX=`never closed";
        let err = replace_block(host, "PREFIX=`", '`', "x").unwrap_err();
        assert!(matches!(err, PatchError::PatternNotFound { .. }));
    }

    #[test]
    fn test_block_with_invisible_characters() {
        // Tabs, newlines, zero-width space, zero-width joiner, BOM.
        let host = "head SRC=`\t\n\u{200b}\u{200d}\u{feff}\nold body\n` tail";
        let out = replace_block(host, "SRC=`", '`', "fresh").unwrap();

        assert_eq!(out.text, "head SRC=`\nfresh` tail");
    }

    #[test]
    fn test_shortest_span_wins() {
        let host = "A=`one` B=`two`";
        let out = replace_block(host, "A=`", '`', "X").unwrap();

        // The second block is untouched.
        assert_eq!(out.text, "A=`\nX` B=`two`");
    }

    #[test]
    fn test_only_first_marker_occurrence_is_replaced() {
        let host = "V=`a` mid V=`b` end";
        let out = replace_block(host, "V=`", '`', "new").unwrap();

        assert_eq!(out.text, "V=`\nnew` mid V=`b` end");
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn test_marker_with_regex_metacharacters() {
        let host = "CONF[0].src=`old` rest";
        let out = replace_block(host, "CONF[0].src=`", '`', "new").unwrap();

        assert_eq!(out.text, "CONF[0].src=`\nnew` rest");
    }

    #[test]
    fn test_replacement_with_dollar_signs_is_verbatim() {
        let host = "K=`old`";
        let out = replace_block(host, "K=`", '`', "$1 ${name} $$").unwrap();

        assert_eq!(out.text, "K=`\n$1 ${name} $$`");
    }

    #[test]
    fn test_empty_replacement() {
        let host = "K=`old` rest";
        let out = replace_block(host, "K=`", '`', "").unwrap();

        assert_eq!(out.text, "K=`\n` rest");
    }

    #[test]
    fn test_surrounding_text_is_preserved_byte_for_byte() {
        let prefix = "var a=1;\nvar b=\"x\";\n";
        let suffix = "\nexport{a};\n// trailing `stray` backticks\n";
        let host = format!("{prefix}CODE=`line1\nline2`{suffix}");

        let out = replace_block(&host, "CODE=`", '`', "patched").unwrap();

        assert!(out.text.starts_with(prefix));
        assert!(out.text.ends_with(suffix));
        assert_eq!(out.text, format!("{prefix}CODE=`\npatched`{suffix}"));
    }

    #[test]
    fn test_non_idempotent_when_replacement_embeds_delimiter() {
        // Documented limitation: a delimiter inside the replacement makes
        // the second run close the block early.
        let host = "K=`old` rest";
        let first = replace_block(host, "K=`", '`', "a`b").unwrap();
        assert_eq!(first.text, "K=`\na`b` rest");

        let second = replace_block(&first.text, "K=`", '`', "a`b").unwrap();
        assert_ne!(second.text, first.text);
    }

    #[test]
    fn test_contains_block() {
        assert!(contains_block("X=`body`", "X=`", '`').unwrap());
        assert!(!contains_block("X=`body", "X=`", '`').unwrap());
        assert!(!contains_block("no marker at all", "X=`", '`').unwrap());
    }
}
