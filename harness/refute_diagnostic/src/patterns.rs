//! Per-category diagnostic patterns.
//!
//! Each category maps to substrings that identify it in GCC or Clang
//! output. Matching is against the *combined* compiler output, so notes
//! (`template argument deduction/substitution failed`, `candidate template
//! ignored`) count as well as the primary error line.

use refute_fixture::CategoryId;

/// Substrings that identify a category in compiler output.
///
/// A fixture's diagnostic text must contain at least one of them.
pub fn category_patterns(category: CategoryId) -> &'static [&'static str] {
    match category {
        CategoryId::SyntaxError => &[
            "expected ';'",
            "expected ')'",
            "expected '}'",
            "expected unqualified-id",
            "expected declaration",
        ],
        CategoryId::UndefinedSymbol => &[
            "was not declared in this scope",
            "use of undeclared identifier",
            "undefined reference to",
            "does not name a type",
        ],
        CategoryId::OverloadResolutionFailure => &[
            "no matching function for call",
            "is ambiguous",
            "no viable conversion",
            "invalid user-defined conversion",
        ],
        CategoryId::TemplateDeductionFailure => &[
            "template argument deduction",
            "couldn't deduce template parameter",
            "couldn't infer template argument",
            "candidate template ignored",
            "deduced conflicting types",
        ],
        CategoryId::UseOfDeletedFunction => &[
            "use of deleted function",
            "call to deleted function",
            "attempt to use a deleted function",
        ],
        CategoryId::InvalidTypeConversion => &[
            "invalid conversion",
            "cannot initialize a variable of type",
            "incompatible integer to pointer conversion",
            "cannot convert",
        ],
        CategoryId::MissingReturnValue => &[
            "control reaches end of non-void function",
            "non-void function does not return a value",
        ],
    }
}
