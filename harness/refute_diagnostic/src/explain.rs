//! Category documentation for `refute explain`.

use refute_fixture::CategoryId;

/// One-paragraph description of a category: what it covers and what a
/// conforming compiler emits for it.
pub fn explain(category: CategoryId) -> &'static str {
    match category {
        CategoryId::SyntaxError => {
            "The source is malformed at the token level: a missing semicolon after a \
             class definition, an unbalanced brace, a stray token. GCC reports these \
             as `expected ';' before ...` or `expected ';' after class definition`; \
             Clang as `expected ';' after class`. Fixtures in this category should \
             contain exactly one syntactic defect so the first diagnostic is the one \
             under test."
        }
        CategoryId::UndefinedSymbol => {
            "A name is used that no declaration introduces. At compile time GCC says \
             `'name' was not declared in this scope` and Clang says `use of \
             undeclared identifier 'name'`; when only the linker notices, the text is \
             `undefined reference to 'name'`. All three count as this category."
        }
        CategoryId::OverloadResolutionFailure => {
            "A call site where overload resolution cannot pick a function: either no \
             overload is viable (`no matching function for call`) or more than one is \
             equally good (`call ... is ambiguous`). A fixture usually passes an \
             argument type that none of the declared overloads accepts without an \
             explicit conversion."
        }
        CategoryId::TemplateDeductionFailure => {
            "A function template call whose template arguments cannot be deduced, \
             typically because the parameter only appears in the return type or the \
             arguments deduce conflicting types. Look for `template argument \
             deduction/substitution failed` and `couldn't deduce template parameter` \
             (GCC) or `candidate template ignored: couldn't infer template argument` \
             (Clang) in the notes."
        }
        CategoryId::UseOfDeletedFunction => {
            "A call to a function explicitly defined as `= delete`. GCC reports `use \
             of deleted function`; Clang reports `call to deleted function` or \
             `attempt to use a deleted function`."
        }
        CategoryId::InvalidTypeConversion => {
            "An initialization or assignment between types with no implicit \
             conversion, such as initializing a pointer from an integer literal. GCC \
             reports `invalid conversion from 'int' to 'int*'`; Clang reports `cannot \
             initialize a variable of type 'int *' with an rvalue of type 'int'`."
        }
        CategoryId::MissingReturnValue => {
            "A non-void function with a control path that falls off the end without \
             returning a value. Compilers treat this as a warning by default, so the \
             harness pins `-Werror=return-type` in its flag set; with it, GCC emits \
             `control reaches end of non-void function` and Clang emits `non-void \
             function does not return a value` as hard errors. Note that `main` is \
             exempt (implicit `return 0`), so fixtures must use a named function."
        }
    }
}
