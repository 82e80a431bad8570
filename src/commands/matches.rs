//! Match command - preview what a keyword selects

use colored::Colorize;

use crate::PickerError;
use crate::label::LabelCatalog;
use crate::matching;
use crate::output;

type Result<T> = std::result::Result<T, PickerError>;

/// Execute the match command
///
/// # Errors
/// Currently infallible; kept fallible like the other commands.
pub fn execute(catalog: &LabelCatalog, keyword: &str, quiet: bool) -> Result<()> {
    let found: Vec<_> = matching::matching_labels(catalog, keyword).collect();

    if quiet {
        for label in &found {
            println!("{}", label.full_name());
        }
        return Ok(());
    }

    if found.is_empty() {
        println!("No labels match '{keyword}'.");
        return Ok(());
    }

    for label in &found {
        println!("  {} {}", output::swatch(label), label.full_name());
    }

    match found.as_slice() {
        [only] => println!(
            "{} toggles {}",
            format!("'{keyword}'").bold(),
            only.full_name().green()
        ),
        _ => println!(
            "{} is ambiguous ({} matches); refine it to toggle a label",
            format!("'{keyword}'").bold(),
            found.len()
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::priority_catalog;

    #[test]
    fn test_execute_handles_every_case() {
        let catalog = priority_catalog();
        for keyword in ["", "zzz", "p.high", "high"] {
            assert!(execute(&catalog, keyword, false).is_ok());
            assert!(execute(&catalog, keyword, true).is_ok());
        }
    }
}
