//! List command implementation

use anyhow::Result;
use niqqud_core::get_rules;

use super::ListCommands;
use crate::output::OutputFormat;

/// Execute a list subcommand against the embedded Hebrew rules
pub fn execute(subcommand: ListCommands) -> Result<()> {
    for line in lines(subcommand)? {
        println!("{line}");
    }
    Ok(())
}

fn lines(subcommand: ListCommands) -> Result<Vec<String>> {
    let lines = match subcommand {
        ListCommands::Prefixes => {
            let rules = get_rules("he")?;
            let mut lines = vec!["Attached prefixes:".to_string()];
            lines.extend(rules.prefixes().iter().map(|rule| {
                format!(
                    "  {}  {:<18} {}",
                    rule.letter(),
                    rule.name(),
                    rule.patterns().join(", ")
                )
            }));
            lines
        }
        ListCommands::Romanization => {
            let rules = get_rules("he")?;
            let table = rules.romanization();
            let mut lines = vec![format!(
                "Romanization table (separator \"{}\"):",
                table.separator()
            )];
            lines.extend(
                table
                    .entries()
                    .into_iter()
                    .map(|(unit, symbol)| format!("  {unit}\t{symbol}")),
            );
            lines
        }
        ListCommands::Formats => {
            let mut lines = vec!["Available output formats:".to_string()];
            lines.extend(
                OutputFormat::descriptions()
                    .iter()
                    .map(|(name, description)| format!("  {name:<10} {description}")),
            );
            lines
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prefixes() {
        let lines = lines(ListCommands::Prefixes).unwrap();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("ו"));
        assert!(lines[1].contains("və, ve"));
        assert!(lines.iter().any(|l| l.contains("definite article")));
    }

    #[test]
    fn test_list_romanization() {
        let lines = lines(ListCommands::Romanization).unwrap();
        assert!(lines[0].contains("separator \"-\""));
        assert!(lines.iter().any(|l| l.contains("\u{05E9}\u{05C2}\ts")));
    }

    #[test]
    fn test_list_formats() {
        let lines = lines(ListCommands::Formats).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].trim_start().starts_with("json"));
    }
}
