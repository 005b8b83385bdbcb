//! niqqud: decompose pointed Hebrew words into syllables and letters

use clap::Parser;
use niqqud_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "niqqud", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_word_command() {
        let cli = Cli::try_parse_from([
            "niqqud", "word", "--hebrew", "בָּרָא", "--ipa", "baˈra",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Word(_)));
    }
}
