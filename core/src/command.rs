use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cell-level move named by a command keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal,
    Mark,
    Guess,
}

impl FromStr for Action {
    type Err = InvalidCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reveal" | "r" => Ok(Self::Reveal),
            "mark" | "m" => Ok(Self::Mark),
            "guess" | "g" => Ok(Self::Guess),
            _ => Err(InvalidCommand::Unrecognized),
        }
    }
}

impl Action {
    fn apply(self, model: &mut MinefieldModel, coords: Coord2) -> Result<Outcome, BoundsError> {
        match self {
            Self::Reveal => model.reveal(coords),
            Self::Mark => model.mark(coords).map(|()| Outcome::Continue),
            Self::Guess => model.guess(coords).map(|()| Outcome::Continue),
        }
    }
}

/// One parsed input line, before any bounds checking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    NoFog,
    Quit,
    /// `verb` is `None` when the keyword is unknown or the coordinates are followed by anything else.
    Cell {
        verb: Option<Action>,
        row: i32,
        col: i32,
    },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, InvalidCommand> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(InvalidCommand::Malformed)?;

        match keyword {
            "help" | "h" => return Ok(Self::Help),
            "nofog" => return Ok(Self::NoFog),
            "quit" | "q" => return Ok(Self::Quit),
            _ => {}
        }

        let row = parse_coord(tokens.next())?;
        let col = parse_coord(tokens.next())?;
        let verb = match tokens.next() {
            Some(_) => None,
            None => keyword.parse().ok(),
        };

        Ok(Self::Cell { verb, row, col })
    }
}

impl FromStr for Command {
    type Err = InvalidCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_coord(token: Option<&str>) -> Result<i32, InvalidCommand> {
    token
        .and_then(|token| token.parse().ok())
        .ok_or(InvalidCommand::Malformed)
}

/// What happened to one input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    Help,
    FogToggled,
    Quit,
    Applied(Outcome),
    Invalid(InvalidCommand),
    /// Coordinates were off the grid so nothing was applied. `unrecognized` tells whether the verb would have been
    /// rejected as well.
    BoundsRejected {
        violation: BoundsError,
        unrecognized: bool,
    },
}

/// Turns command lines into model mutations. Holds no state between lines.
#[derive(Copy, Clone, Debug, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    pub fn process(&self, line: &str, model: &mut MinefieldModel) -> CommandResult {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(invalid) => {
                log::debug!("Rejected {:?}: {}", line, invalid);
                return CommandResult::Invalid(invalid);
            }
        };

        match command {
            Command::Help => {
                model.count_round();
                CommandResult::Help
            }
            Command::NoFog => {
                model.toggle_fog(true);
                CommandResult::FogToggled
            }
            Command::Quit => CommandResult::Quit,
            Command::Cell { verb, row, col } => {
                // bounds first, so a bad verb with bad coordinates reports both
                let coords = match model.check_bounds(row, col) {
                    Ok(coords) => coords,
                    Err(violation) => {
                        log::debug!("Rejected {:?}: {}", line, violation);
                        return CommandResult::BoundsRejected {
                            violation,
                            unrecognized: verb.is_none(),
                        };
                    }
                };

                let Some(action) = verb else {
                    log::debug!("Rejected {:?}: unrecognized command", line);
                    return CommandResult::Invalid(InvalidCommand::Unrecognized);
                };

                match action.apply(model, coords) {
                    Ok(outcome) => CommandResult::Applied(outcome),
                    Err(violation) => CommandResult::BoundsRejected {
                        violation,
                        unrecognized: false,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> MinefieldModel {
        MinefieldModel::new(5, 5, &[(2, 2)]).unwrap()
    }

    fn process(line: &str, model: &mut MinefieldModel) -> CommandResult {
        CommandInterpreter.process(line, model)
    }

    #[test]
    fn parses_keywords_and_aliases() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("h anything here"), Ok(Command::Help));
        assert_eq!(Command::parse("  nofog "), Ok(Command::NoFog));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("g -1 +3"),
            Ok(Command::Cell {
                verb: Some(Action::Guess),
                row: -1,
                col: 3
            })
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            Command::parse("Reveal 1 1"),
            Ok(Command::Cell {
                verb: None,
                row: 1,
                col: 1
            })
        );
        assert_eq!(Command::parse("QUIT"), Err(InvalidCommand::Malformed));
    }

    #[test]
    fn malformed_lines() {
        for line in ["", "   ", "reveal", "reveal 1", "reveal x 1", "m 1 y", "foo", "r 1 99999999999"] {
            assert_eq!(Command::parse(line), Err(InvalidCommand::Malformed), "{:?}", line);
        }
    }

    #[test]
    fn trailing_token_drops_the_verb() {
        assert_eq!(
            "mark 2 2 extra".parse::<Command>(),
            Ok(Command::Cell {
                verb: None,
                row: 2,
                col: 2
            })
        );
    }

    #[test]
    fn short_and_long_reveal_are_equivalent() {
        let mut short = model();
        let mut long = model();

        let a = process("r 2 1", &mut short);
        let b = process("reveal 2 1", &mut long);

        assert_eq!(a, CommandResult::Applied(Outcome::Continue));
        assert_eq!(a, b);
        assert_eq!(short, long);
        assert_eq!(short.cell_at((2, 1)), Ok(Cell::Revealed(1)));
    }

    #[test]
    fn reveal_on_mine_reports_loss() {
        let mut model = model();

        let result = process("r 2 2", &mut model);

        assert_eq!(result, CommandResult::Applied(Outcome::Loss));
        assert_eq!(model.rounds_completed(), 0);
    }

    #[test]
    fn mark_and_guess_dispatch() {
        let mut model = model();

        assert_eq!(
            process("m 2 2", &mut model),
            CommandResult::Applied(Outcome::Continue)
        );
        assert_eq!(
            process("guess 0 4", &mut model),
            CommandResult::Applied(Outcome::Continue)
        );
        assert_eq!(model.cell_at((2, 2)), Ok(Cell::Flagged));
        assert_eq!(model.cell_at((0, 4)), Ok(Cell::Guessed));
        assert_eq!(model.flagged_mine_count(), 1);
        assert_eq!(model.rounds_completed(), 2);
    }

    #[test]
    fn rejected_lines_do_not_mutate() {
        let mut model = model();
        let before = model.clone();

        assert_eq!(
            process("mark 2 2 extra", &mut model),
            CommandResult::Invalid(InvalidCommand::Unrecognized)
        );
        assert_eq!(
            process("foo 1 1", &mut model),
            CommandResult::Invalid(InvalidCommand::Unrecognized)
        );
        assert_eq!(
            process("reveal one 1", &mut model),
            CommandResult::Invalid(InvalidCommand::Malformed)
        );
        assert_eq!(
            process("", &mut model),
            CommandResult::Invalid(InvalidCommand::Malformed)
        );
        assert_eq!(model, before);
    }

    #[test]
    fn bounds_are_checked_before_the_verb() {
        let mut model = model();
        let before = model.clone();

        assert_eq!(
            process("r 5 0", &mut model),
            CommandResult::BoundsRejected {
                violation: BoundsError {
                    axis: Axis::Row,
                    value: 5,
                    limit: 5
                },
                unrecognized: false
            }
        );
        assert_eq!(
            process("r -1 7", &mut model),
            CommandResult::BoundsRejected {
                violation: BoundsError {
                    axis: Axis::Row,
                    value: -1,
                    limit: 5
                },
                unrecognized: false
            }
        );
        assert_eq!(
            process("foo 0 9", &mut model),
            CommandResult::BoundsRejected {
                violation: BoundsError {
                    axis: Axis::Col,
                    value: 9,
                    limit: 5
                },
                unrecognized: true
            }
        );
        assert_eq!(
            process("mark 0 9 extra", &mut model),
            CommandResult::BoundsRejected {
                violation: BoundsError {
                    axis: Axis::Col,
                    value: 9,
                    limit: 5
                },
                unrecognized: true
            }
        );
        assert_eq!(model, before);
    }

    #[test]
    fn help_and_fog_count_rounds_quit_does_not() {
        let mut model = model();

        assert_eq!(process("h", &mut model), CommandResult::Help);
        assert_eq!(process("nofog", &mut model), CommandResult::FogToggled);
        assert!(model.is_fogged());
        assert_eq!(model.cell_at((2, 2)), Ok(Cell::HiddenFog));
        assert_eq!(process("q", &mut model), CommandResult::Quit);
        assert_eq!(model.rounds_completed(), 2);
    }
}
