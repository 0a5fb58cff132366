use std::sync::Arc;

use super::{AuthorIdentity, AuthorSource, SignOff, is_bot_co_author_line, is_co_author_line, is_sign_off_line};
use crate::{PatternSet, PatternStore};

/// Result of a cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CleanedMessage {
    pub text: String,
    pub changed: bool,
}

impl CleanedMessage {
    fn unchanged(text: impl Into<String>) -> Self {
        Self { text: text.into(), changed: false }
    }
}

/// Splits on `\n` or `\r\n`. A final newline yields a trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// Removes bot co-author lines and, when that leaves the footer to the pull
/// request author alone, the author's own sign-off (and its `---` separator).
pub fn clean_message(text: impl AsRef<str>, patterns: &PatternSet, author: Option<&AuthorIdentity>) -> CleanedMessage {
    let text = text.as_ref();
    if text.is_empty() {
        return CleanedMessage::unchanged(text);
    }

    let lines = split_lines(text);
    let had_co_authors = lines.iter().any(|line| is_co_author_line(line));
    let mut removed_bot_co_author = false;
    let mut kept = Vec::with_capacity(lines.len());
    for line in lines {
        if is_bot_co_author_line(line, patterns) {
            tracing::debug!("Removing bot co-author: {line:?}");
            removed_bot_co_author = true;
            continue;
        }
        kept.push(line);
    }
    let mut changed = removed_bot_co_author;

    let has_co_authors_left = kept.iter().any(|line| is_co_author_line(line));
    if removed_bot_co_author || (had_co_authors && !has_co_authors_left) {
        match author {
            Some(author) => changed |= remove_author_sign_off(&mut kept, author),
            None => {
                tracing::debug!("No pull request author known, leaving sign-off in place");
            }
        }
    }

    while kept.last().is_some_and(|line| is_blank(line)) {
        kept.pop();
        changed = true;
    }

    match changed {
        true => CleanedMessage {
            text: kept.join("\n"),
            changed,
        },
        false => CleanedMessage::unchanged(text),
    }
}

/// Only the first sign-off is considered.
fn remove_author_sign_off(lines: &mut Vec<&str>, author: &AuthorIdentity) -> bool {
    let Some(index) = lines.iter().position(|line| is_sign_off_line(line)) else {
        return false;
    };
    let Some(sign_off) = SignOff::parse(lines[index]) else {
        tracing::trace!("Unparseable sign-off kept: {:?}", lines[index]);
        return false;
    };
    if !sign_off.belongs_to(author) {
        tracing::debug!("Sign-off by {:?} <{}> does not belong to {author}", sign_off.name, sign_off.email);
        return false;
    }

    tracing::debug!("Removing sign-off of {author}: {:?}", lines[index]);
    lines.remove(index);

    let above = lines[..index].iter().rposition(|line| !is_blank(line));
    match above {
        Some(separator) if is_separator(lines[separator]) => {
            lines.remove(separator);
        }
        _ => {
            if !lines.iter().any(|line| is_co_author_line(line)) {
                if let Some(separator) = lines.iter().position(|line| is_separator(line)) {
                    tracing::debug!("Removing dangling separator at line {separator}");
                    lines.remove(separator);
                }
            }
        }
    }
    true
}

/// Binds the live pattern configuration and an author lookup.
pub struct MessageCleaner<A> {
    patterns: Arc<PatternStore>,
    author: A,
}

impl<A: AuthorSource> MessageCleaner<A> {
    pub fn new(patterns: Arc<PatternStore>, author: A) -> Self {
        Self { patterns, author }
    }

    pub fn clean(&self, text: impl AsRef<str>) -> CleanedMessage {
        let patterns = self.patterns.current();
        let author = self.author.author();
        clean_message(text, &patterns, author.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const DEPENDABOT: &str = "Co-authored-by: dependabot[bot] <49699333+dependabot[bot]@users.noreply.github.com>";
    const ALICE_SIGN_OFF: &str = "Signed-off-by: Alice <12345+alice@users.noreply.github.com>";

    #[fixture]
    fn patterns() -> PatternSet {
        PatternSet::default()
    }

    fn identity(name: &str) -> Option<AuthorIdentity> {
        AuthorIdentity::new(name)
    }

    fn dedent(text: &str) -> String {
        textwrap::dedent(text).trim_start_matches('\n').to_string()
    }

    #[rstest]
    #[case::alice_signs_off(format!("Merge PR\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}"), identity("alice"), "Merge PR")]
    #[case::bob_is_author(format!("Merge PR\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}"), identity("bob"), format!("Merge PR\n\n{ALICE_SIGN_OFF}"))]
    #[case::no_author(format!("Merge PR\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}"), None, format!("Merge PR\n\n{ALICE_SIGN_OFF}"))]
    #[case::sign_off_first(format!("Merge PR\n\n{ALICE_SIGN_OFF}\n{DEPENDABOT}"), identity("alice"), "Merge PR")]
    #[case::tagged_noreply_sign_off(
        "Merge PR\n\nCo-authored-by: dependabot[bot] <1+dependabot[bot]@users.noreply.github.com>\nSigned-off-by: Xyz <123+alice+work@users.noreply.github.com>",
        identity("alice"),
        "Merge PR"
    )]
    #[case::bot_only(format!("Bump serde\n\n{DEPENDABOT}"), identity("alice"), "Bump serde")]
    #[case::crlf(format!("Merge PR\r\n\r\n{DEPENDABOT}\r\n"), None, "Merge PR")]
    #[case::trailing_blanks("Merge PR\n\n  \n\t\n", None, "Merge PR")]
    #[case::only_newline("\n", None, "")]
    #[case::only_whitespace("   ", None, "")]
    fn test_clean_changed(#[case] input: impl AsRef<str>, #[case] author: Option<AuthorIdentity>, #[case] expected: impl AsRef<str>, patterns: PatternSet) {
        let cleaned = clean_message(input, &patterns, author.as_ref());
        assert_eq!(cleaned.text, expected.as_ref());
        assert!(cleaned.changed);
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_line("Merge PR")]
    #[case::human_co_author("Merge PR\n\nCo-authored-by: Carol <carol@example.com>")]
    #[case::human_co_author_with_sign_off("Merge PR\n\nCo-authored-by: Carol <carol@example.com>\nSigned-off-by: Alice <alice@example.com>")]
    #[case::sign_off_without_co_authors("Merge PR\n\nSigned-off-by: Alice <alice@example.com>")]
    #[case::unparseable_bot_line("Merge PR\n\nCo-authored-by: dependabot[bot]")]
    #[case::crlf_kept_verbatim("Merge PR\r\n\r\nBody")]
    #[case::leading_blank_lines("\n\nMerge PR")]
    fn test_clean_unchanged(#[case] input: &str, patterns: PatternSet) {
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned, CleanedMessage::unchanged(input));
    }

    #[rstest]
    fn test_separator_directly_above_is_removed(patterns: PatternSet) {
        let input = dedent(
            r#"
            Merge pull request #7 from alice/feature

            Adds the thing.

            ---

            Co-authored-by: renovate[bot] <29139614+renovate[bot]@users.noreply.github.com>
            Signed-off-by: Alice <alice@example.com>
            "#,
        );
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned.text, "Merge pull request #7 from alice/feature\n\nAdds the thing.");
        assert!(cleaned.changed);
    }

    #[rstest]
    fn test_dangling_separator_is_removed(patterns: PatternSet) {
        let input = dedent(
            r#"
            Title

            ---
            Co-authored-by: github-actions[bot] <41898282+github-actions[bot]@users.noreply.github.com>
            Notes
            Signed-off-by: Alice <alice@example.com>
            "#,
        );
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned.text, "Title\n\nNotes");
    }

    #[rstest]
    fn test_separator_kept_while_co_authors_remain(patterns: PatternSet) {
        let input = dedent(
            r#"
            Title
            ---
            Co-authored-by: github-actions[bot] <41898282+github-actions[bot]@users.noreply.github.com>
            Co-authored-by: Carol <carol@example.com>
            Notes
            Signed-off-by: Alice <alice@example.com>
            "#,
        );
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned.text, "Title\n---\nCo-authored-by: Carol <carol@example.com>\nNotes");
    }

    #[rstest]
    fn test_only_first_sign_off_is_considered(patterns: PatternSet) {
        let input = format!("Merge PR\n\n{DEPENDABOT}\nSigned-off-by: Bob <bob@example.com>\n{ALICE_SIGN_OFF}");
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned.text, format!("Merge PR\n\nSigned-off-by: Bob <bob@example.com>\n{ALICE_SIGN_OFF}"));
    }

    #[rstest]
    fn test_unparseable_sign_off_is_kept(patterns: PatternSet) {
        let input = format!("Merge PR\n\n{DEPENDABOT}\nSigned-off-by: alice");
        let cleaned = clean_message(input, &patterns, identity("alice").as_ref());
        assert_eq!(cleaned.text, "Merge PR\n\nSigned-off-by: alice");
        assert!(cleaned.changed);
    }

    #[rstest]
    fn test_human_co_authors_keep_their_order(patterns: PatternSet) {
        let input = dedent(
            r#"
            Merge PR

            Co-authored-by: Zed <zed@example.com>
            Co-authored-by: Copilot <198982749+Copilot@users.noreply.github.com>
            Co-authored-by: Amy <amy@example.com>
            Co-authored-by: release-bot <release-bot@example.com>
            Co-authored-by: Mo <mo@example.com>
            "#,
        );
        let cleaned = clean_message(input, &patterns, None);
        assert_eq!(
            cleaned.text,
            "Merge PR\n\nCo-authored-by: Zed <zed@example.com>\nCo-authored-by: Amy <amy@example.com>\nCo-authored-by: Mo <mo@example.com>"
        );
    }

    #[test]
    fn test_custom_patterns_replace_defaults() {
        let patterns = PatternSet::compile([r"\[bot\]"]);
        let input = "Merge PR\n\nCo-authored-by: Copilot <198982749+Copilot@users.noreply.github.com>";
        let cleaned = clean_message(input, &patterns, None);
        assert!(!cleaned.changed);
        assert_eq!(cleaned.text, input);
    }

    #[rstest]
    #[case::scenario(format!("Merge PR\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}"))]
    #[case::separator(format!("Title\n\n---\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}\n\n"))]
    #[case::mixed(format!("Title\n---\n{DEPENDABOT}\nCo-authored-by: Carol <carol@example.com>\n{ALICE_SIGN_OFF}\n"))]
    #[case::crlf(format!("Title\r\n\r\n{DEPENDABOT}\r\n{ALICE_SIGN_OFF}\r\n"))]
    #[case::untouched("Title\n\nBody".to_string())]
    fn test_idempotent(#[case] input: String, patterns: PatternSet) {
        let author = identity("alice");
        let first = clean_message(&input, &patterns, author.as_ref());
        let second = clean_message(&first.text, &patterns, author.as_ref());
        assert_eq!(second.text, first.text);
        assert!(!second.changed);
    }

    #[test]
    fn test_message_cleaner_reads_current_patterns() {
        let store = Arc::new(PatternStore::default());
        let cleaner = MessageCleaner::new(Arc::clone(&store), || AuthorIdentity::new("alice"));
        let input = format!("Merge PR\n\nCo-authored-by: Copilot <198982749+Copilot@users.noreply.github.com>\n{ALICE_SIGN_OFF}");

        assert_eq!(cleaner.clean(&input).text, "Merge PR");

        store.replace(["renovate"]);
        let cleaned = cleaner.clean(&input);
        assert!(!cleaned.changed);
        assert_eq!(cleaned.text, input);
    }

    #[test]
    fn test_message_cleaner_without_author() {
        let cleaner = MessageCleaner::new(Arc::new(PatternStore::default()), None::<AuthorIdentity>);
        let cleaned = cleaner.clean(format!("Merge PR\n\n{DEPENDABOT}\n{ALICE_SIGN_OFF}"));
        assert_eq!(cleaned.text, format!("Merge PR\n\n{ALICE_SIGN_OFF}"));
    }

    #[test]
    fn test_cleaned_message_json() {
        let cleaned = CleanedMessage {
            text: "Merge PR".to_string(),
            changed: true,
        };
        assert_eq!(serde_json::to_string(&cleaned).unwrap(), r#"{"text":"Merge PR","changed":true}"#);
    }
}
