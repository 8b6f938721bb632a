use crate::core::query::{QueryEngine, Report};
use crate::utils::error::{GolfError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Places,
    Clubs { location: String },
    Rounds { club: String },
    Played { player: String },
    Compare { first: String, second: String },
    Quit,
}

impl Command {
    /// Parses already-split words; the first word names the command.
    ///
    /// A known command with the wrong number of arguments is a usage error
    /// and is never executed.
    pub fn parse(words: &[String]) -> Result<Self> {
        let (name, args) = match words.split_first() {
            Some((name, args)) => (name.as_str(), args),
            None => {
                return Err(GolfError::UnknownCommand {
                    command: String::new(),
                })
            }
        };

        let usage = || GolfError::UsageError {
            command: name.to_string(),
        };

        match name {
            "places" => match args {
                [] => Ok(Command::Places),
                _ => Err(usage()),
            },
            "clubs" => match args {
                [location] => Ok(Command::Clubs {
                    location: location.clone(),
                }),
                _ => Err(usage()),
            },
            "rounds" => match args {
                [club] => Ok(Command::Rounds { club: club.clone() }),
                _ => Err(usage()),
            },
            "played" => match args {
                [player] => Ok(Command::Played {
                    player: player.clone(),
                }),
                _ => Err(usage()),
            },
            "compare" => match args {
                [first, second] => Ok(Command::Compare {
                    first: first.clone(),
                    second: second.clone(),
                }),
                _ => Err(usage()),
            },
            "quit" => match args {
                [] => Ok(Command::Quit),
                _ => Err(usage()),
            },
            other => Err(GolfError::UnknownCommand {
                command: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Places => "places",
            Command::Clubs { .. } => "clubs",
            Command::Rounds { .. } => "rounds",
            Command::Played { .. } => "played",
            Command::Compare { .. } => "compare",
            Command::Quit => "quit",
        }
    }

    /// `Quit` produces an empty report; the session decides what to do with it.
    pub fn execute(&self, engine: &QueryEngine<'_>) -> Result<Report> {
        match self {
            Command::Places => Ok(engine.places()),
            Command::Clubs { location } => engine.clubs(location),
            Command::Rounds { club } => engine.rounds(club),
            Command::Played { player } => engine.played(player),
            Command::Compare { first, second } => Ok(engine.compare(first, second)),
            Command::Quit => Ok(Report::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse(&words(&["places"])).unwrap(), Command::Places);
        assert_eq!(
            Command::parse(&words(&["clubs", "Tampere"])).unwrap(),
            Command::Clubs {
                location: "Tampere".to_string()
            }
        );
        assert_eq!(
            Command::parse(&words(&["compare", "Alice", "Bob"])).unwrap(),
            Command::Compare {
                first: "Alice".to_string(),
                second: "Bob".to_string()
            }
        );
        assert_eq!(Command::parse(&words(&["quit"])).unwrap(), Command::Quit);
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for bad in [
            vec!["places", "x"],
            vec!["clubs"],
            vec!["rounds", "a", "b"],
            vec!["played"],
            vec!["compare", "Alice"],
            vec!["quit", "now"],
        ] {
            let expected = bad[0].to_string();
            match Command::parse(&words(&bad)) {
                Err(GolfError::UsageError { command }) => assert_eq!(command, expected),
                other => panic!("expected usage error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Command::parse(&words(&["foo"])),
            Err(GolfError::UnknownCommand { command }) if command == "foo"
        ));
        assert!(matches!(
            Command::parse(&words(&["Places"])),
            Err(GolfError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(Command::Places.name(), "places");
        assert_eq!(
            Command::Played {
                player: "x".to_string()
            }
            .name(),
            "played"
        );
    }
}
