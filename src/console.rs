//! Line-oriented terminal front end for a single [`Game`].

use std::io::{self, BufRead, Write};

use crate::board::{
    parse_coordinate_move, CoordinateMove, Game, GameStatus, MoveParseError, Piece, Square,
};

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(CoordinateMove),
    Destinations(Square),
    Undo,
    Reset,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, MoveParseError> {
    match line.trim() {
        "undo" => Ok(Command::Undo),
        "reset" | "new" => Ok(Command::Reset),
        "board" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        text if text.len() == 2 => text
            .parse()
            .map(Command::Destinations)
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            }),
        text => parse_coordinate_move(text).map(Command::Move),
    }
}

fn parse_promotion_choice(text: &str) -> Option<Piece> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_char(c).filter(|piece| piece.is_promotable()),
        _ => None,
    }
}

const HELP: &str = "\
commands:
  e2e4 / e7e8q   play a move (promotion letter optional)
  e2             list legal destinations of the piece on e2
  undo           take back the last move
  reset          start a new game
  board          print the board
  quit           leave";

/// Drive `game` from `input` until `quit` or end of input.
///
/// Normal output goes to `out`, rejected commands to `err`.
pub fn run<R: BufRead, W: Write, E: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    let mut lines = input.lines();
    writeln!(out, "{}", game.board())?;
    prompt(game, out)?;

    while let Some(line) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(game, out)?;
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(err, "{e}")?;
                prompt(game, out)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => writeln!(out, "{}", game.board())?,
            Command::Reset => {
                game.reset();
                writeln!(out, "{}", game.board())?;
            }
            Command::Undo => match game.undo_move() {
                Ok(record) => {
                    writeln!(out, "took back {record}")?;
                    writeln!(out, "{}", game.board())?;
                }
                Err(e) => writeln!(err, "{e}")?,
            },
            Command::Destinations(from) => list_destinations(game, from, out)?,
            Command::Move(mv) => play_move(game, mv, &mut lines, out, err)?,
        }
        prompt(game, out)?;
    }
    Ok(())
}

/// Run against the process's standard streams.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut game = Game::new();
    run(&mut game, stdin.lock(), &mut stdout, &mut stderr)
}

fn prompt<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    write!(out, "{} to move> ", game.side_to_move())?;
    out.flush()
}

fn list_destinations<W: Write>(game: &mut Game, from: Square, out: &mut W) -> io::Result<()> {
    let targets = game.legal_destinations(from);
    if targets.is_empty() {
        return writeln!(out, "no legal moves from {from}");
    }
    let names: Vec<String> = targets.iter().map(Square::to_string).collect();
    writeln!(out, "{from}: {}", names.join(" "))
}

fn play_move<I, W, E>(
    game: &mut Game,
    mv: CoordinateMove,
    lines: &mut I,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
    E: Write,
{
    let status = game.status();
    if status.is_over() {
        return writeln!(err, "{status}; undo or reset to continue");
    }

    let mut promotion = mv.promotion;
    if promotion.is_none() && game.is_promotion_move(mv.from, mv.to) {
        loop {
            write!(out, "promote to (q, r, b, n)? ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                return Ok(());
            };
            match parse_promotion_choice(&line?) {
                Some(piece) => {
                    promotion = Some(piece);
                    break;
                }
                None => writeln!(err, "answer with one of q, r, b, n")?,
            }
        }
    }

    match game.apply_move(mv.from, mv.to, promotion) {
        Ok(record) => {
            writeln!(out, "{} plays {record}", record.color())?;
            writeln!(out, "{}", game.board())?;
            report(game, out)
        }
        Err(e) => writeln!(err, "{e}"),
    }
}

fn report<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    match game.status() {
        GameStatus::Ongoing => {
            let mover = game.side_to_move();
            if game.is_in_check(mover) {
                writeln!(out, "{mover} is in check")?;
            }
            Ok(())
        }
        status => writeln!(out, "{status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (Game, String, String) {
        let mut game = Game::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut game, script.as_bytes(), &mut out, &mut err).unwrap();
        (
            game,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("undo"), Ok(Command::Undo));
        assert_eq!(parse_command(" quit "), Ok(Command::Quit));
        assert_eq!(parse_command("e2"), Ok(Command::Destinations(Square(1, 4))));
        assert!(matches!(parse_command("e2e4"), Ok(Command::Move(_))));
        assert!(parse_command("z9").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[test]
    fn test_promotion_choice() {
        assert_eq!(parse_promotion_choice("n"), Some(Piece::Knight));
        assert_eq!(parse_promotion_choice(" Q "), Some(Piece::Queen));
        assert_eq!(parse_promotion_choice("k"), None);
        assert_eq!(parse_promotion_choice("qq"), None);
    }

    #[test]
    fn test_moves_and_undo() {
        let (game, out, err) = session("e2e4\ne7e5\nundo\n");
        assert_eq!(game.history().len(), 1);
        assert!(out.contains("White plays e2e4"));
        assert!(out.contains("took back e7e5"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_destination_listing() {
        let (_, out, _) = session("g1\n");
        assert!(out.contains("g1: h3 f3"));
    }

    #[test]
    fn test_errors_go_to_stderr() {
        let (game, _, err) = session("e2e5\nundo\nxyz\n");
        assert!(game.history().is_empty());
        assert!(err.contains("Illegal move e2e5"));
        assert!(err.contains("No moves to undo"));
        assert_eq!(err.lines().count(), 3);
    }

    #[test]
    fn test_checkmate_stops_moves() {
        let (game, out, err) = session("f2f3\ne7e5\ng2g4\nd8h4\na2a3\n");
        assert_eq!(game.history().len(), 4);
        assert!(out.contains("checkmate, Black wins"));
        assert!(err.contains("undo or reset"));
    }

    #[test]
    fn test_promotion_prompt() {
        use crate::board::{Color, GameBuilder};

        let mut game = GameBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(6, 0), Color::White, Piece::Pawn)
            .piece(Square(7, 7), Color::Black, Piece::King)
            .build()
            .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut game, "a7a8\nk\nn\n".as_bytes(), &mut out, &mut err).unwrap();

        assert_eq!(game.board().piece_at(Square(7, 0)), Some((Color::White, Piece::Knight)));
        assert!(String::from_utf8(err).unwrap().contains("q, r, b, n"));
    }

    #[test]
    fn test_quit_ignores_rest() {
        let (game, _, _) = session("e2e4\nquit\nd7d5\n");
        assert_eq!(game.history().len(), 1);
    }
}
