use fogsweeper_core::{BoundsError, Cell, InvalidCommand, MinefieldModel, Score};
use std::io::{self, Write};

const WELCOME: &str = r"        _
  /\/\ (F)_ __   ___  _____      _____  ___ _ __   ___ _ __
 /    \| | '_ \ / _ \/ __\ \ /\ / / _ \/ _ \ '_ \ / _ \ '__|
/ /\/\ \ | | | |  __/\__ \\ V  V /  __/  __/ |_) |  __/ |
\/    \/_|_| |_|\___||___/ \_/\_/ \___|\___| .__/ \___|_|
                             ALPHA EDITION |_|";

const GAME_OVER: &str = r"  __ _  __ _ _ __ ___   ___    _____   _____ _ __
 / _` |/ _` | '_ ` _ \ / _ \  / _ \ \ / / _ \ '__|
| (_| | (_| | | | | | |  __/ | (_) \ V /  __/ |
 \__, |\__,_|_| |_| |_|\___|  \___/ \_/ \___|_|
 |___/";

const YOU_WON: &str = r" __   _____  _   _  __        _____  _   _ _
 \ \ / / _ \| | | | \ \      / / _ \| \ | | |
  \ V / | | | | | |  \ \ /\ / / | | |  \| | |
   | || |_| | |_| |   \ V  V /| |_| | |\  |_|
   |_| \___/ \___/     \_/\_/  \___/|_| \_(_)";

pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{WELCOME}")
}

pub fn rounds(out: &mut impl Write, rounds: u32) -> io::Result<()> {
    writeln!(out, "\n Rounds Completed: {rounds}")
}

fn cell(out: &mut impl Write, cell: Cell) -> io::Result<()> {
    match cell {
        Cell::Hidden => out.write_all(b"   "),
        Cell::Revealed(count) => write!(out, " {count} "),
        Cell::Flagged => out.write_all(b" F "),
        Cell::Guessed => out.write_all(b" ? "),
        Cell::FlaggedFog => out.write_all(b"<F>"),
        Cell::HiddenFog => out.write_all(b"< >"),
    }
}

/// One line per row with the row index in front, then a footer with the column indices.
pub fn grid(out: &mut impl Write, model: &MinefieldModel) -> io::Result<()> {
    for ((row, col), state) in model.cells() {
        if col == 0 {
            write!(out, "\n{row:>2} |")?;
        }
        cell(out, state)?;
        out.write_all(b"|")?;
    }
    out.write_all(b"\n ")?;
    for col in 0..model.cols() {
        write!(out, "   {col}")?;
    }
    writeln!(out)
}

pub fn prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "\n{prompt}")?;
    out.flush()
}

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n Commands Available...\
         \n  - Reveal: r/reveal row col\
         \n  -   Mark: m/mark   row col\
         \n  -  Guess: g/guess  row col\
         \n  -   Help: h/help\
         \n  -   Quit: q/quit"
    )
}

pub fn quit(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n Quitting the game...\n Bye!")
}

pub fn loss(out: &mut impl Write, banners: bool) -> io::Result<()> {
    writeln!(out, "\n Oh no... You revealed a mine!")?;
    if banners {
        writeln!(out, "{GAME_OVER}")?;
    }
    Ok(())
}

pub fn win(out: &mut impl Write, score: Score, banners: bool) -> io::Result<()> {
    if banners {
        writeln!(out, "\n{YOU_WON}")?;
    }
    writeln!(out, "\n CONGRATULATIONS! YOU HAVE WON!\n SCORE: {score}")
}

pub fn bounds(err: &mut impl Write, violation: BoundsError) -> io::Result<()> {
    writeln!(err, "Invalid Command: {violation}")
}

pub fn invalid(err: &mut impl Write, invalid: InvalidCommand) -> io::Result<()> {
    match invalid {
        InvalidCommand::Malformed => writeln!(err, "Input Error: Command Not Recognized!"),
        InvalidCommand::Unrecognized => writeln!(err, "Input Error: Command not recognized!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fogsweeper_core::Axis;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn grid_shows_every_state() {
        let mut model = MinefieldModel::new(5, 6, &[(2, 2), (3, 3)]).unwrap();
        model.mark((0, 0)).unwrap();
        model.reveal((1, 1)).unwrap();
        model.guess((4, 5)).unwrap();
        model.mark((3, 3)).unwrap();
        model.toggle_fog(true);

        let text = render(|out| grid(out, &model));

        assert_eq!(
            text,
            "\n 0 | F |   |   |   |   |   |\
             \n 1 |   | 1 |   |   |   |   |\
             \n 2 |   |   |< >|   |   |   |\
             \n 3 |   |   |   |<F>|   |   |\
             \n 4 |   |   |   |   |   | ? |\
             \n    0   1   2   3   4   5\n"
        );
    }

    #[test]
    fn ten_rows_keep_their_alignment() {
        let model = MinefieldModel::new(10, 5, &[(9, 4)]).unwrap();

        let text = render(|out| grid(out, &model));

        assert!(text.contains("\n 9 |   |   |   |   |   |\n"));
        assert!(text.ends_with("\n    0   1   2   3   4\n"));
    }

    #[test]
    fn rounds_line() {
        assert_eq!(render(|out| rounds(out, 7)), "\n Rounds Completed: 7\n");
    }

    #[test]
    fn error_messages() {
        let violation = BoundsError {
            axis: Axis::Col,
            value: 12,
            limit: 6,
        };

        assert_eq!(
            render(|err| bounds(err, violation)),
            "Invalid Command: Index 12 out of bounds for length 6\n"
        );
        assert_eq!(
            render(|err| invalid(err, InvalidCommand::Unrecognized)),
            "Input Error: Command not recognized!\n"
        );
        assert_eq!(
            render(|err| invalid(err, InvalidCommand::Malformed)),
            "Input Error: Command Not Recognized!\n"
        );
    }

    #[test]
    fn win_prints_score_with_or_without_banner() {
        let mut model = MinefieldModel::new(5, 5, &[(0, 0)]).unwrap();
        for _ in 0..50 {
            model.guess((1, 1)).unwrap();
        }

        let plain = render(|out| win(out, model.score(), false));
        let fancy = render(|out| win(out, model.score(), true));

        assert_eq!(plain, "\n CONGRATULATIONS! YOU HAVE WON!\n SCORE: 50.00\n");
        assert!(fancy.ends_with(&plain));
        assert!(fancy.len() > plain.len());
    }
}
