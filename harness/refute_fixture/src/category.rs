//! The closed set of diagnostic categories a fixture can expect.

use std::fmt;
use std::str::FromStr;

/// Category of compiler error a fixture is meant to provoke.
///
/// The set is closed: a manifest naming anything outside it is rejected at
/// load time, before any compiler runs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CategoryId {
    /// Malformed source the parser rejects (missing semicolon, unbalanced
    /// braces).
    SyntaxError,
    /// Reference to a name no declaration introduces.
    UndefinedSymbol,
    /// A call for which no overload is viable, or more than one is.
    OverloadResolutionFailure,
    /// A template call whose arguments cannot be deduced.
    TemplateDeductionFailure,
    /// A call to a function explicitly marked deleted.
    UseOfDeletedFunction,
    /// An initialization or assignment between incompatible types.
    InvalidTypeConversion,
    /// A non-void function with a control path that returns no value.
    MissingReturnValue,
}

impl CategoryId {
    /// Every category, in declaration order.
    pub const ALL: [CategoryId; 7] = [
        CategoryId::SyntaxError,
        CategoryId::UndefinedSymbol,
        CategoryId::OverloadResolutionFailure,
        CategoryId::TemplateDeductionFailure,
        CategoryId::UseOfDeletedFunction,
        CategoryId::InvalidTypeConversion,
        CategoryId::MissingReturnValue,
    ];

    /// The kebab-case name used in manifests and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::SyntaxError => "syntax-error",
            CategoryId::UndefinedSymbol => "undefined-symbol",
            CategoryId::OverloadResolutionFailure => "overload-resolution-failure",
            CategoryId::TemplateDeductionFailure => "template-deduction-failure",
            CategoryId::UseOfDeletedFunction => "use-of-deleted-function",
            CategoryId::InvalidTypeConversion => "invalid-type-conversion",
            CategoryId::MissingReturnValue => "missing-return-value",
        }
    }

    /// Render the full valid set for error messages.
    pub fn valid_set() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
        names.join(", ")
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}
