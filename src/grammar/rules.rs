use tracing::debug;

use super::error::GrammarError;
use super::{GrammarChecker, GrammarIssue};

/// Offline grammar checker covering the mistakes generated titles make most:
/// repeated words, spacing around punctuation and unpaired brackets.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleChecker;

pub const RULE_DOUBLED_WORD: &str = "DOUBLED_WORD";
pub const RULE_SPACE_BEFORE_PUNCT: &str = "SPACE_BEFORE_PUNCTUATION";
pub const RULE_MISSING_SPACE: &str = "MISSING_SPACE_AFTER_SEPARATOR";
pub const RULE_REPEATED_WHITESPACE: &str = "REPEATED_WHITESPACE";
pub const RULE_UNPAIRED_BRACKET: &str = "UNPAIRED_BRACKET";

const CLOSING_PUNCT: &[char] = &[',', '.', ';', ':', '!', '?'];
const SEPARATORS: &[char] = &[',', ';'];

impl RuleChecker {
    pub fn new() -> Self {
        Self
    }
}

impl GrammarChecker for RuleChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let mut issues = Vec::new();
        doubled_words(text, &mut issues);
        spacing(text, &mut issues);
        brackets(text, &mut issues);
        issues.sort_by_key(|issue| issue.offset);

        debug!(
            text_len = text.len(),
            issues = issues.len(),
            "Rule check complete"
        );
        Ok(issues)
    }
}

/// Byte spans of maximal runs of alphanumerics and apostrophes.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        let in_word = c.is_alphanumeric() || c == '\'';
        match (in_word, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

fn doubled_words(text: &str, issues: &mut Vec<GrammarIssue>) {
    for pair in word_spans(text).windows(2) {
        let ((a_start, a_end), (b_start, b_end)) = (pair[0], pair[1]);
        let first = &text[a_start..a_end];
        let second = &text[b_start..b_end];
        let gap = &text[a_end..b_start];

        // Numbers legitimately repeat ("2 2-packs"); only flag words.
        if gap.chars().all(char::is_whitespace)
            && first.chars().any(char::is_alphabetic)
            && first.to_lowercase() == second.to_lowercase()
        {
            issues.push(GrammarIssue::new(
                RULE_DOUBLED_WORD,
                format!("Possible typo: you repeated a word ('{}')", first),
                a_start,
                b_end - a_start,
            ));
        }
    }
}

fn spacing(text: &str, issues: &mut Vec<GrammarIssue>) {
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len();
    if start >= end {
        return;
    }
    let body = &text[start..end];

    let chars: Vec<(usize, char)> = body.char_indices().map(|(i, c)| (i + start, c)).collect();

    for pair in chars.windows(2) {
        let ((prev_at, prev), (cur_at, cur)) = (pair[0], pair[1]);

        if prev.is_whitespace() && CLOSING_PUNCT.contains(&cur) {
            issues.push(GrammarIssue::new(
                RULE_SPACE_BEFORE_PUNCT,
                format!("Don't put a space before '{}'", cur),
                prev_at,
                cur_at + cur.len_utf8() - prev_at,
            ));
        }

        if SEPARATORS.contains(&prev) && cur.is_alphabetic() {
            issues.push(GrammarIssue::new(
                RULE_MISSING_SPACE,
                format!("Add a space after '{}'", prev),
                prev_at,
                cur_at + cur.len_utf8() - prev_at,
            ));
        }
    }

    let sentinel = (end, '\0');
    let mut run: Option<(usize, usize)> = None;
    for &(at, c) in chars.iter().chain(std::iter::once(&sentinel)) {
        if c == ' ' {
            run = match run {
                Some((run_start, count)) => Some((run_start, count + 1)),
                None => Some((at, 1)),
            };
            continue;
        }
        if let Some((run_start, count)) = run.take()
            && count > 1
        {
            issues.push(GrammarIssue::new(
                RULE_REPEATED_WHITESPACE,
                "Possible typo: more than one space in a row".to_string(),
                run_start,
                count,
            ));
        }
    }
}

fn brackets(text: &str, issues: &mut Vec<GrammarIssue>) {
    let unpaired = |at: usize, c: char| {
        GrammarIssue::new(
            RULE_UNPAIRED_BRACKET,
            format!("Unpaired symbol: '{}' seems to be missing its counterpart", c),
            at,
            c.len_utf8(),
        )
    };

    let mut open: Vec<(char, usize)> = Vec::new();
    for (at, c) in text.char_indices() {
        let expected = match c {
            '(' | '[' | '{' => {
                open.push((c, at));
                continue;
            }
            ')' => '(',
            ']' => '[',
            '}' => '{',
            _ => continue,
        };

        match open.last() {
            Some(&(o, _)) if o == expected => {
                open.pop();
            }
            _ => issues.push(unpaired(at, c)),
        }
    }

    issues.extend(open.into_iter().map(|(c, at)| unpaired(at, c)));
}
