use fogsweeper_core::{CommandInterpreter, CommandResult, InvalidCommand, MinefieldModel, Outcome};
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::render;
use crate::settings::Settings;

/// Why the game loop stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
    InputClosed,
}

/// Machine readable result of a finished session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub end: SessionEnd,
    pub rounds: u32,
    pub score: String,
    pub rows: u8,
    pub cols: u8,
    pub mines: u16,
}

/// Owns the mine field for one play-through and drives it from a line reader.
#[derive(Debug)]
pub struct Session {
    model: MinefieldModel,
    interpreter: CommandInterpreter,
    prompt: String,
    banners: bool,
}

impl Session {
    pub fn new(model: MinefieldModel, settings: &Settings) -> Self {
        Self {
            model,
            interpreter: CommandInterpreter,
            prompt: settings.prompt.clone(),
            banners: settings.banners,
        }
    }

    pub fn model(&self) -> &MinefieldModel {
        &self.model
    }

    /// Plays until the field is won, a mine goes off, the player quits or `input` runs dry. Game text goes to `out`,
    /// rejected commands are reported on `err`.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<SessionEnd> {
        if self.banners {
            render::welcome(out)?;
        }

        let mut buf = Vec::new();
        loop {
            if self.model.is_won() {
                log::info!("Won after {} rounds", self.model.rounds_completed());
                render::win(out, self.model.score(), self.banners)?;
                return Ok(SessionEnd::Won);
            }

            render::rounds(out, self.model.rounds_completed())?;
            render::grid(out, &self.model)?;
            // the overlay only lives for the render right after `nofog`
            self.model.toggle_fog(false);
            render::prompt(out, &self.prompt)?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::info!("Input closed after {} rounds", self.model.rounds_completed());
                return Ok(SessionEnd::InputClosed);
            }
            // bad bytes become U+FFFD and fail to parse like any other junk
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();

            let result = self.interpreter.process(line, &mut self.model);
            log::debug!("{:?} -> {:?}", line, result);

            match result {
                CommandResult::Help => render::help(out)?,
                CommandResult::FogToggled | CommandResult::Applied(Outcome::Continue) => {}
                CommandResult::Quit => {
                    render::quit(out)?;
                    return Ok(SessionEnd::Quit);
                }
                CommandResult::Applied(Outcome::Loss) => {
                    log::info!(
                        "Lost on {:?} after {} rounds",
                        self.model.triggered_mine(),
                        self.model.rounds_completed()
                    );
                    render::loss(out, self.banners)?;
                    return Ok(SessionEnd::Lost);
                }
                CommandResult::Invalid(invalid) => render::invalid(err, invalid)?,
                CommandResult::BoundsRejected {
                    violation,
                    unrecognized,
                } => {
                    render::bounds(err, violation)?;
                    if unrecognized {
                        render::invalid(err, InvalidCommand::Unrecognized)?;
                    }
                }
            }
        }
    }

    pub fn summary(&self, end: SessionEnd) -> Summary {
        let (rows, cols) = self.model.size();
        Summary {
            end,
            rounds: self.model.rounds_completed(),
            score: self.model.score().to_string(),
            rows,
            cols,
            mines: self.model.mine_count(),
        }
    }
}
