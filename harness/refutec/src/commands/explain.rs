//! The `explain` command: display documentation for diagnostic categories.

use refute_diagnostic::{category_patterns, explain};
use refute_fixture::CategoryId;

/// Display detailed documentation for a given category name.
pub fn explain_category(name: &str) {
    let Ok(category) = name.parse::<CategoryId>() else {
        eprintln!("Unknown category: {name}");
        eprintln!();
        eprintln!("Valid categories: {}", CategoryId::valid_set());
        std::process::exit(1);
    };

    println!("{category}");
    println!();
    println!("{}", explain(category));
    println!();
    println!("Match patterns (any of):");
    for pattern in category_patterns(category) {
        println!("  \"{pattern}\"");
    }
}
