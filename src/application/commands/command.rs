//! Parsing channel text into bot commands.
//!
//! A command is a message that starts with the configured prefix. The first
//! word after the prefix names the command and the rest of the message is
//! its argument.

use thiserror::Error;

/// Every command the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Help,
    Tally,
    VoteCount,
    MovieCount,
    Wheel,
    WheelFallen,
    WheelPurge,
    Rollover,
    Holdover,
    PrintHoldover,
    Winner,
    WinnerList,
    WinnerClear,
    Winner2,
    Winners,
    WinnersRuntime,
    Fallen,
    RandomFallen,
    RemoveFallen,
    Imdb,
    ImdbSummary,
    Trivia,
    Random,
}

impl CommandName {
    /// Listing order for `help`.
    pub const ALL: [CommandName; 23] = [
        CommandName::Help,
        CommandName::Tally,
        CommandName::VoteCount,
        CommandName::MovieCount,
        CommandName::Wheel,
        CommandName::WheelFallen,
        CommandName::WheelPurge,
        CommandName::Rollover,
        CommandName::Holdover,
        CommandName::PrintHoldover,
        CommandName::Winner,
        CommandName::WinnerList,
        CommandName::WinnerClear,
        CommandName::Winner2,
        CommandName::Winners,
        CommandName::WinnersRuntime,
        CommandName::Fallen,
        CommandName::RandomFallen,
        CommandName::RemoveFallen,
        CommandName::Imdb,
        CommandName::ImdbSummary,
        CommandName::Trivia,
        CommandName::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Help => "help",
            CommandName::Tally => "tally",
            CommandName::VoteCount => "votecount",
            CommandName::MovieCount => "moviecount",
            CommandName::Wheel => "wheel",
            CommandName::WheelFallen => "wheel_fallen",
            CommandName::WheelPurge => "wheel_purge",
            CommandName::Rollover => "rollover",
            CommandName::Holdover => "holdover",
            CommandName::PrintHoldover => "print_holdover",
            CommandName::Winner => "winner",
            CommandName::WinnerList => "winner_list",
            CommandName::WinnerClear => "winner_clear",
            CommandName::Winner2 => "winner2",
            CommandName::Winners => "winners",
            CommandName::WinnersRuntime => "winners_runtime",
            CommandName::Fallen => "fallen",
            CommandName::RandomFallen => "random_fallen",
            CommandName::RemoveFallen => "remove_fallen",
            CommandName::Imdb => "imdb",
            CommandName::ImdbSummary => "imdb_summary",
            CommandName::Trivia => "trivia",
            CommandName::Random => "random",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(&self) -> &'static str {
        match self {
            CommandName::Help => "List the available commands",
            CommandName::Tally => "Show the votes for every nomination this week",
            CommandName::VoteCount => "Count the votes cast this week",
            CommandName::MovieCount => "Count the movies nominated this week",
            CommandName::Wheel => "Put this week's nominations on the wheel",
            CommandName::WheelFallen => "Put The Fallen on the wheel",
            CommandName::WheelPurge => "Delete every shared wheel",
            CommandName::Rollover => "Close the week and announce next week's wheel",
            CommandName::Holdover => "Save this week's nominations as a holdover list",
            CommandName::PrintHoldover => "Close the week and replay the holdover list",
            CommandName::Winner => "Exclude a winning title from voting",
            CommandName::WinnerList => "Show the excluded titles",
            CommandName::WinnerClear => "Clear the excluded titles",
            CommandName::Winner2 => "Add a search result to the past showings",
            CommandName::Winners => "List past showings",
            CommandName::WinnersRuntime => "Estimate the runtime of every past showing",
            CommandName::Fallen => "List The Fallen",
            CommandName::RandomFallen => "Pick a random title from The Fallen",
            CommandName::RemoveFallen => "Remove a title from The Fallen",
            CommandName::Imdb => "Search IMDB for a movie",
            CommandName::ImdbSummary => "Summarize a movie from the last search",
            CommandName::Trivia => "Trivia for a past showing",
            CommandName::Random => "Pick a random B-movie",
        }
    }

    /// Argument placeholder for usage messages, if the command takes one.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            CommandName::Winner | CommandName::Imdb => Some("<title>"),
            CommandName::Winner2
            | CommandName::RemoveFallen
            | CommandName::ImdbSummary
            | CommandName::Trivia => Some("<index>"),
            _ => None,
        }
    }

    /// Commands that may be issued outside the operator channels.
    pub fn allowed_anywhere(&self) -> bool {
        matches!(
            self,
            CommandName::Rollover | CommandName::Holdover | CommandName::PrintHoldover
        )
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommandName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCommand(s.to_string()))
    }
}

/// Errors from turning text into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {0}")]
    MissingArgument(CommandName),

    #[error("Invalid index for {command}: {value}")]
    InvalidIndex { command: CommandName, value: String },
}

impl ParseError {
    /// Command the error belongs to, when it was recognized.
    pub fn command(&self) -> Option<CommandName> {
        match self {
            ParseError::UnknownCommand(_) => None,
            ParseError::MissingArgument(command) => Some(*command),
            ParseError::InvalidIndex { command, .. } => Some(*command),
        }
    }
}

/// A parsed command with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Help,
    Tally,
    VoteCount,
    MovieCount,
    Wheel,
    WheelFallen,
    WheelPurge,
    Rollover,
    Holdover,
    PrintHoldover,
    Winner(String),
    WinnerList,
    WinnerClear,
    Winner2(usize),
    Winners,
    WinnersRuntime,
    Fallen,
    RandomFallen,
    RemoveFallen(usize),
    Imdb(String),
    ImdbSummary(usize),
    Trivia(usize),
    Random,
}

impl BotCommand {
    /// Parse `text` as a command.
    ///
    /// Returns `None` when the text does not start with `prefix`.
    pub fn parse(prefix: &str, text: &str) -> Option<Result<Self, ParseError>> {
        let body = text.trim().strip_prefix(prefix)?;
        let (word, rest) = match body.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (body, ""),
        };
        if word.is_empty() {
            return None;
        }

        Some(word.parse::<CommandName>().and_then(|name| Self::build(name, rest)))
    }

    fn build(name: CommandName, arg: &str) -> Result<Self, ParseError> {
        let command = match name {
            CommandName::Help => BotCommand::Help,
            CommandName::Tally => BotCommand::Tally,
            CommandName::VoteCount => BotCommand::VoteCount,
            CommandName::MovieCount => BotCommand::MovieCount,
            CommandName::Wheel => BotCommand::Wheel,
            CommandName::WheelFallen => BotCommand::WheelFallen,
            CommandName::WheelPurge => BotCommand::WheelPurge,
            CommandName::Rollover => BotCommand::Rollover,
            CommandName::Holdover => BotCommand::Holdover,
            CommandName::PrintHoldover => BotCommand::PrintHoldover,
            CommandName::Winner => BotCommand::Winner(text_arg(name, arg)?),
            CommandName::WinnerList => BotCommand::WinnerList,
            CommandName::WinnerClear => BotCommand::WinnerClear,
            CommandName::Winner2 => BotCommand::Winner2(index_arg(name, arg)?),
            CommandName::Winners => BotCommand::Winners,
            CommandName::WinnersRuntime => BotCommand::WinnersRuntime,
            CommandName::Fallen => BotCommand::Fallen,
            CommandName::RandomFallen => BotCommand::RandomFallen,
            CommandName::RemoveFallen => BotCommand::RemoveFallen(index_arg(name, arg)?),
            CommandName::Imdb => BotCommand::Imdb(text_arg(name, arg)?),
            CommandName::ImdbSummary => BotCommand::ImdbSummary(index_arg(name, arg)?),
            CommandName::Trivia => BotCommand::Trivia(index_arg(name, arg)?),
            CommandName::Random => BotCommand::Random,
        };
        Ok(command)
    }

    pub fn name(&self) -> CommandName {
        match self {
            BotCommand::Help => CommandName::Help,
            BotCommand::Tally => CommandName::Tally,
            BotCommand::VoteCount => CommandName::VoteCount,
            BotCommand::MovieCount => CommandName::MovieCount,
            BotCommand::Wheel => CommandName::Wheel,
            BotCommand::WheelFallen => CommandName::WheelFallen,
            BotCommand::WheelPurge => CommandName::WheelPurge,
            BotCommand::Rollover => CommandName::Rollover,
            BotCommand::Holdover => CommandName::Holdover,
            BotCommand::PrintHoldover => CommandName::PrintHoldover,
            BotCommand::Winner(_) => CommandName::Winner,
            BotCommand::WinnerList => CommandName::WinnerList,
            BotCommand::WinnerClear => CommandName::WinnerClear,
            BotCommand::Winner2(_) => CommandName::Winner2,
            BotCommand::Winners => CommandName::Winners,
            BotCommand::WinnersRuntime => CommandName::WinnersRuntime,
            BotCommand::Fallen => CommandName::Fallen,
            BotCommand::RandomFallen => CommandName::RandomFallen,
            BotCommand::RemoveFallen(_) => CommandName::RemoveFallen,
            BotCommand::Imdb(_) => CommandName::Imdb,
            BotCommand::ImdbSummary(_) => CommandName::ImdbSummary,
            BotCommand::Trivia(_) => CommandName::Trivia,
            BotCommand::Random => CommandName::Random,
        }
    }

    pub fn allowed_anywhere(&self) -> bool {
        self.name().allowed_anywhere()
    }
}

fn text_arg(name: CommandName, arg: &str) -> Result<String, ParseError> {
    if arg.is_empty() {
        Err(ParseError::MissingArgument(name))
    } else {
        Ok(arg.to_string())
    }
}

fn index_arg(name: CommandName, arg: &str) -> Result<usize, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    arg.parse::<usize>().map_err(|_| ParseError::InvalidIndex {
        command: name,
        value: arg.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Result<BotCommand, ParseError>> {
        BotCommand::parse(".", text)
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse("Hausu"), None);
        assert_eq!(parse("."), None);
    }

    #[test]
    fn parses_commands_without_arguments() {
        assert_eq!(parse(".tally"), Some(Ok(BotCommand::Tally)));
        assert_eq!(parse("  .print_holdover "), Some(Ok(BotCommand::PrintHoldover)));
    }

    #[test]
    fn text_argument_keeps_inner_spaces() {
        assert_eq!(
            parse(".winner The Thing From Another World"),
            Some(Ok(BotCommand::Winner("The Thing From Another World".into())))
        );
    }

    #[test]
    fn index_argument_is_parsed() {
        assert_eq!(parse(".remove_fallen 2"), Some(Ok(BotCommand::RemoveFallen(2))));
    }

    #[test]
    fn bad_index_is_reported() {
        assert_eq!(
            parse(".remove_fallen two"),
            Some(Err(ParseError::InvalidIndex {
                command: CommandName::RemoveFallen,
                value: "two".into(),
            }))
        );
        assert_eq!(
            parse(".trivia"),
            Some(Err(ParseError::MissingArgument(CommandName::Trivia)))
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse(".kill"),
            Some(Err(ParseError::UnknownCommand("kill".into())))
        );
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(BotCommand::parse("!", "!fallen"), Some(Ok(BotCommand::Fallen)));
        assert_eq!(BotCommand::parse("!", ".fallen"), None);
    }

    #[test]
    fn only_cycle_commands_run_anywhere() {
        let anywhere: Vec<_> = CommandName::ALL
            .iter()
            .filter(|c| c.allowed_anywhere())
            .map(|c| c.as_str())
            .collect();
        assert_eq!(anywhere, vec!["rollover", "holdover", "print_holdover"]);
    }

    #[test]
    fn names_round_trip() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>(), Ok(name));
        }
    }
}
