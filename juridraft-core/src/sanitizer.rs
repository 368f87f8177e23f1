//! Response cleanup for model output.
//!
//! Gemini tends to wrap headings in markdown bold and to append boilerplate
//! legal disclaimers. [`sanitize`] removes both and normalizes blank lines.
//!
//! Disclaimer stripping is a heuristic. Each pattern removes only its first
//! match, and because the anchors end in `.*` a match runs to the end of its
//! line, so legitimate text that follows a trigger phrase on the same line is
//! removed as well. Callers should treat the result as best-effort noise
//! reduction.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Disclaimer anchors, applied in order. Later patterns see the text already
/// stripped by earlier ones.
///
/// The last five entries carry a trailing `*` on their final character rather
/// than `.*`, so they only remove the anchor phrase itself.
pub const DISCLAIMER_PATTERNS: &[&str] = &[
    r"This is not (a substitute for|legal) advice.*",
    r"I am not a lawyer.*",
    r"As an AI language model.*",
    r"The model's responses.*",
    r"Please consult.*(a licensed attorney|legal professional).*",
    r"The information provided.*(general informational|not constitute).*",
    r"Always seek professional legal advice.*",
    r"Note:.*legal.*",
    r"This response is for informational purposes.*",
    r"Disclaimer*",
    r"Recommendation*",
    r"This analysis is based on my understanding*",
    r"Okay, let's provide a legal opinion*",
    r"Important Notes*",
];

const BOLD_PATTERN: &str = r"\*\*(.*?)\*\*";
const BLANK_LINES_PATTERN: &str = r"\n{2,}";

// Patterns are string constants; `every_pattern_compiles` keeps them valid.
#[allow(clippy::expect_used)]
fn compile(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .expect("sanitizer pattern must be a valid regex")
}

static BOLD: Lazy<Regex> = Lazy::new(|| compile(BOLD_PATTERN, false));

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| compile(BLANK_LINES_PATTERN, false));

static DISCLAIMERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DISCLAIMER_PATTERNS
        .iter()
        .map(|pattern| compile(pattern, true))
        .collect()
});

/// Strip bold markers, remove disclaimer boilerplate, collapse blank lines and
/// trim. Pure and total: the empty string maps to the empty string.
pub fn sanitize(text: &str) -> String {
    let mut cleaned = strip_bold(text);

    for regex in DISCLAIMERS.iter() {
        cleaned = regex.replace(&cleaned, "").into_owned();
    }

    collapse_blank_lines(&cleaned).trim().to_string()
}

/// `**text**` becomes `text`, non-greedy, everywhere.
pub fn strip_bold(text: &str) -> String {
    BOLD.replace_all(text, "$1").into_owned()
}

/// Any run of two or more newlines becomes exactly one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_pattern_compiles() {
        for pattern in DISCLAIMER_PATTERNS {
            assert!(
                RegexBuilder::new(pattern).case_insensitive(true).build().is_ok(),
                "invalid pattern: {pattern}"
            );
        }
        assert!(Regex::new(BOLD_PATTERN).is_ok());
        assert!(Regex::new(BLANK_LINES_PATTERN).is_ok());
        assert_eq!(DISCLAIMERS.len(), DISCLAIMER_PATTERNS.len());
    }

    proptest! {
        #[test]
        fn text_without_markers_is_only_collapsed_and_trimmed(s in "[a-z \n]{0,200}") {
            prop_assume!(DISCLAIMERS.iter().all(|regex| !regex.is_match(&s)));
            prop_assert_eq!(sanitize(&s), collapse_blank_lines(&s).trim().to_string());
        }

        #[test]
        fn output_never_has_surrounding_whitespace(s in "(?s).{0,200}") {
            let cleaned = sanitize(&s);
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\n  "), "");
    }

    #[test]
    fn removes_bold_markers() {
        assert_eq!(sanitize("**Note**: ok"), "Note: ok");
        assert_eq!(
            strip_bold("**Facts** and **Parties**"),
            "Facts and Parties"
        );
    }

    #[test]
    fn bold_does_not_span_lines() {
        assert_eq!(strip_bold("**open\nclose**"), "**open\nclose**");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(sanitize("Hello\n\n\n\nWorld"), "Hello\n\nWorld");
        assert_eq!(sanitize("Hello\nWorld"), "Hello\nWorld");
    }

    #[test]
    fn plain_text_is_only_trimmed_and_collapsed() {
        let input = "  The court granted the motion.\n\n\n\nCosts follow the event.  ";
        assert_eq!(
            sanitize(input),
            "The court granted the motion.\n\nCosts follow the event."
        );
    }

    #[test]
    fn strips_trailing_disclaimer_line() {
        let input = "Motion on notice.\n\nI am not a lawyer, so verify this.";
        assert_eq!(sanitize(input), "Motion on notice.");
    }

    #[test]
    fn disclaimer_match_is_case_insensitive() {
        let input = "Summary.\n\nAS AN AI LANGUAGE MODEL I cannot advise.";
        assert_eq!(sanitize(input), "Summary.");
    }

    #[test]
    fn note_requires_legal_keyword() {
        assert_eq!(sanitize("Note: filing fee applies"), "Note: filing fee applies");
        assert_eq!(sanitize("Body\n\nNote: seek legal counsel early"), "Body");
    }

    #[test]
    fn only_first_match_per_pattern_is_removed() {
        let input = "A\nI am not a lawyer.\nB\nI am not a lawyer.";
        assert_eq!(sanitize(input), "A\n\nB\nI am not a lawyer.");
    }

    #[test]
    fn consumes_rest_of_line_after_anchor() {
        let input = "Please consult a licensed attorney before filing the affidavit today.";
        assert_eq!(sanitize(input), "");
    }

    #[test]
    fn short_anchors_remove_only_the_phrase() {
        assert_eq!(sanitize("Disclaimer: none"), ": none");
        assert_eq!(sanitize("Important Notes\n\nServe by hand."), "Serve by hand.");
    }
}
