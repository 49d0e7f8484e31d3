//! The verdict on one fixture.

use refute_compile::CompilationResult;
use refute_fixture::CategoryId;

use crate::patterns::category_patterns;

/// Longest excerpt of compiler output quoted in an explanation.
const EXCERPT_LEN: usize = 400;

/// Pass/fail for one fixture, with a human-readable explanation on
/// mismatch.
#[derive(Clone, Debug)]
pub struct Verdict {
    /// The fixture provoked its expected diagnostic.
    pub passed: bool,
    /// Present exactly when `passed` is false.
    pub explanation: Option<String>,
}

impl Verdict {
    fn pass() -> Self {
        Verdict {
            passed: true,
            explanation: None,
        }
    }

    fn fail(explanation: String) -> Self {
        Verdict {
            passed: false,
            explanation: Some(explanation),
        }
    }
}

/// Judge a compilation result against a fixture's expectation.
///
/// Fails closed: exit code 0 is always a failure for a negative fixture,
/// regardless of diagnostic text. A timeout or signal death is an
/// expectation mismatch reported verbatim, since "does it produce a
/// civilized diagnostic" is itself under test.
pub fn match_fixture(
    expect: CategoryId,
    contains: Option<&str>,
    result: &CompilationResult,
) -> Verdict {
    if result.compiler_succeeded() {
        return Verdict::fail(format!(
            "compiler unexpectedly succeeded (exit code 0); \
             a {expect} fixture must fail to compile"
        ));
    }

    if result.timed_out {
        return Verdict::fail(format!(
            "compiler timed out after {:.2?} and was killed; output so far: {}",
            result.duration,
            excerpt(&result.diagnostic_text)
        ));
    }

    if result.exit_code.is_none() {
        return Verdict::fail(format!(
            "compiler process died without an exit code (signal); output: {}",
            excerpt(&result.diagnostic_text)
        ));
    }

    let patterns = category_patterns(expect);
    if !patterns
        .iter()
        .any(|p| result.diagnostic_text.contains(p))
    {
        return Verdict::fail(format!(
            "expected a {expect} diagnostic {}; compiler output did not match: {}",
            format_patterns(patterns),
            excerpt(&result.diagnostic_text)
        ));
    }

    if let Some(required) = contains {
        if !result.diagnostic_text.contains(required) {
            return Verdict::fail(format!(
                "diagnostic matched category {expect} but is missing the required \
                 substring '{required}': {}",
                excerpt(&result.diagnostic_text)
            ));
        }
    }

    Verdict::pass()
}

/// Format a pattern set for display in explanations.
fn format_patterns(patterns: &[&str]) -> String {
    let quoted: Vec<String> = patterns.iter().map(|p| format!("\"{p}\"")).collect();
    format!("(one of: {})", quoted.join(", "))
}

/// Quote a bounded excerpt of compiler output.
fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "(no output)".to_string();
    }
    // Cut on a char boundary at or below the cap.
    let mut end = EXCERPT_LEN.min(trimmed.len());
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    if end < trimmed.len() {
        format!("{}…", &trimmed[..end])
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn result(exit_code: Option<i32>, text: &str) -> CompilationResult {
        CompilationResult {
            exit_code,
            diagnostic_text: text.to_string(),
            timed_out: false,
            duration: Duration::from_millis(10),
        }
    }

    #[test]
    fn fails_closed_on_successful_compile() {
        // Even with "matching" text in the output, exit 0 always fails.
        let verdict = match_fixture(
            CategoryId::SyntaxError,
            None,
            &result(Some(0), "warning: expected ';' style note"),
        );
        assert!(!verdict.passed);
        assert!(verdict
            .explanation
            .unwrap()
            .contains("unexpectedly succeeded"));
    }

    #[test]
    fn matches_gcc_phrasing() {
        let verdict = match_fixture(
            CategoryId::SyntaxError,
            None,
            &result(
                Some(1),
                "bad.cpp:2:1: error: expected ';' after class definition",
            ),
        );
        assert!(verdict.passed);
        assert_eq!(verdict.explanation, None);
    }

    #[test]
    fn matches_clang_phrasing() {
        let verdict = match_fixture(
            CategoryId::UndefinedSymbol,
            None,
            &result(
                Some(1),
                "bad.cpp:3:5: error: use of undeclared identifier 'undefined_function'",
            ),
        );
        assert!(verdict.passed);
    }

    #[test]
    fn wrong_category_explains_the_mismatch() {
        let verdict = match_fixture(
            CategoryId::UseOfDeletedFunction,
            None,
            &result(Some(1), "error: expected ';' after class definition"),
        );
        assert!(!verdict.passed);
        let explanation = verdict.explanation.unwrap();
        assert!(explanation.contains("use-of-deleted-function"));
        assert!(explanation.contains("use of deleted function"));
        assert!(explanation.contains("expected ';' after class definition"));
    }

    #[test]
    fn contains_refinement_is_enforced() {
        let output = "bad.cpp:1:6: error: invalid conversion from 'int' to 'int*'";
        let pass = match_fixture(
            CategoryId::InvalidTypeConversion,
            Some("'int' to 'int*'"),
            &result(Some(1), output),
        );
        assert!(pass.passed);

        let fail = match_fixture(
            CategoryId::InvalidTypeConversion,
            Some("'long' to 'char*'"),
            &result(Some(1), output),
        );
        assert!(!fail.passed);
        assert!(fail.explanation.unwrap().contains("required"));
    }

    #[test]
    fn timeout_is_a_mismatch_not_a_harness_error() {
        let timed_out = CompilationResult {
            exit_code: None,
            diagnostic_text: "partial output".to_string(),
            timed_out: true,
            duration: Duration::from_secs(30),
        };
        let verdict = match_fixture(CategoryId::SyntaxError, None, &timed_out);
        assert!(!verdict.passed);
        let explanation = verdict.explanation.unwrap();
        assert!(explanation.contains("timed out"));
        assert!(explanation.contains("partial output"));
    }

    #[test]
    fn signal_death_is_a_mismatch() {
        let verdict = match_fixture(CategoryId::SyntaxError, None, &result(None, ""));
        assert!(!verdict.passed);
        let explanation = verdict.explanation.unwrap();
        assert!(explanation.contains("signal"));
        assert!(explanation.contains("(no output)"));
    }

    #[test]
    fn excerpt_is_bounded() {
        let long_output = "x".repeat(5000);
        let verdict = match_fixture(CategoryId::SyntaxError, None, &result(Some(1), &long_output));
        let explanation = verdict.explanation.unwrap();
        assert!(explanation.len() < 1000);
        assert!(explanation.contains('…'));
    }

    #[test]
    fn verdict_is_deterministic() {
        let output = result(Some(1), "error: control reaches end of non-void function");
        let first = match_fixture(CategoryId::MissingReturnValue, None, &output);
        let second = match_fixture(CategoryId::MissingReturnValue, None, &output);
        assert_eq!(first.passed, second.passed);
        assert_eq!(first.explanation, second.explanation);
    }
}
