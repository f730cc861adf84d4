//! Text-mode stand-ins for the scene: a line-based picker and a presenter
//! that prints the table.

use crate::collaborators::{Cue, HostEvent, Picker, PresentError, Presenter};
use crate::config::GameConfig;
use std::io::{BufRead, ErrorKind, Write};
use tabletop_engine::{Board, Cell, GameStatus, Player};
use tracing::{debug, instrument, warn};

const HELP: &str =
    "Pick a cell as `row col` (0-2) or 1-9, `new` for a new game, `quit` to leave.";

/// Why a line of input did not become an event.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PickError {
    /// The line named a cell off the grid.
    #[display("({}, {}) is off the board", row, col)]
    OffBoard {
        /// Parsed row.
        row: i32,
        /// Parsed column.
        col: i32,
    },
    /// The line could not be understood.
    #[display("Unrecognized input: {:?}", _0)]
    Unrecognized(String),
}

impl std::error::Error for PickError {}

/// Parses one line of user input.
///
/// Accepts `row col` or `row,col`, a keypad digit `1`-`9` (row-major),
/// `new`, and `quit`. Blank lines yield `Ok(None)`.
#[instrument]
pub fn parse_line(line: &str) -> Result<Option<HostEvent>, PickError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    match line.to_lowercase().as_str() {
        "new" | "n" | "restart" => return Ok(Some(HostEvent::NewGame)),
        "quit" | "q" | "exit" => return Ok(Some(HostEvent::Quit)),
        _ => {}
    }

    if let Some(digit) = line.chars().next().and_then(|c| c.to_digit(10))
        && line.len() == 1
    {
        return match digit {
            1..=9 => Ok(Cell::from_index(digit as usize - 1).map(HostEvent::from)),
            _ => Err(PickError::Unrecognized(line.to_string())),
        };
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(PickError::Unrecognized(line.to_string()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<i32>(), col.parse::<i32>()) else {
        return Err(PickError::Unrecognized(line.to_string()));
    };

    // Picks that miss the board are not forwarded.
    Cell::try_new(row, col)
        .map(|cell| Some(HostEvent::from(cell)))
        .map_err(|_| PickError::OffBoard { row, col })
}

/// Reads events from lines of text.
///
/// Bad lines are reported to `feedback` and skipped.
pub struct LinePicker<R, W> {
    input: R,
    feedback: W,
}

impl<R: BufRead, W: Write> LinePicker<R, W> {
    /// Creates a picker over `input`, writing complaints to `feedback`.
    pub fn new(input: R, feedback: W) -> Self {
        Self { input, feedback }
    }
}

impl<R: BufRead, W: Write> Picker for LinePicker<R, W> {
    fn next_event(&mut self) -> Option<HostEvent> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.input.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "Input failed, ending session");
                    return None;
                }
            }

            // Undecodable bytes become U+FFFD and fall through to the
            // unrecognized-input path.
            let line = String::from_utf8_lossy(&buf);
            match parse_line(&line) {
                Ok(Some(event)) => return Some(event),
                Ok(None) => continue,
                Err(e) => {
                    debug!(error = %e, "Dropped pick");
                    if let Err(write_err) = writeln!(self.feedback, "{e}. {HELP}") {
                        warn!(error = %write_err, "Could not write input feedback");
                    }
                }
            }
        }
    }
}

/// Prints the table as text.
pub struct TerminalPresenter<W> {
    out: W,
    config: GameConfig,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`, using the player names from `config`.
    pub fn new(out: W, config: &GameConfig) -> Self {
        Self {
            out,
            config: config.clone(),
        }
    }

    /// Consumes the presenter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn name(&self, player: Player) -> &str {
        self.config.name_of(player)
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn place_piece(&mut self, player: Player, cell: Cell) -> Result<(), PresentError> {
        let name = self.name(player).to_string();
        writeln!(self.out, "{name} ({player}) plays {cell}")?;
        Ok(())
    }

    fn clear_highlight(&mut self) -> Result<(), PresentError> {
        // Text mode has no hover highlight.
        Ok(())
    }

    fn play_cue(&mut self, cue: Cue) -> Result<(), PresentError> {
        writeln!(self.out, "[{cue}]")?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), PresentError> {
        writeln!(self.out, "\n{}\n", board.display())?;
        Ok(())
    }

    fn show_turn(&mut self, player: Player) -> Result<(), PresentError> {
        let name = self.name(player).to_string();
        writeln!(self.out, "{name} ({player}) to move.")?;
        Ok(())
    }

    fn show_result(&mut self, status: &GameStatus) -> Result<(), PresentError> {
        match status {
            GameStatus::Won { winner, line } => {
                let name = self.name(*winner).to_string();
                writeln!(self.out, "Game over. {name} ({winner}) wins with the {line}!")?;
            }
            GameStatus::Draw => writeln!(self.out, "Game over. Draw!")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn prompt_new_game(&mut self) -> Result<(), PresentError> {
        writeln!(self.out, "Type `new` to play again or `quit` to leave.")?;
        Ok(())
    }

    fn clear_board(&mut self, first: Player) -> Result<(), PresentError> {
        let name = self.name(first).to_string();
        writeln!(self.out, "New game. {name} ({first}) goes first.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_line("1 2"),
            Ok(Some(HostEvent::CellSelected { row: 1, col: 2 }))
        );
        assert_eq!(
            parse_line(" 0,0 \n"),
            Ok(Some(HostEvent::CellSelected { row: 0, col: 0 }))
        );
    }

    #[test]
    fn test_parse_keypad_digit() {
        assert_eq!(
            parse_line("5"),
            Ok(Some(HostEvent::CellSelected { row: 1, col: 1 }))
        );
        assert_eq!(
            parse_line("9"),
            Ok(Some(HostEvent::CellSelected { row: 2, col: 2 }))
        );
        assert!(parse_line("0").is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("NEW"), Ok(Some(HostEvent::NewGame)));
        assert_eq!(parse_line("q"), Ok(Some(HostEvent::Quit)));
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn test_off_board_not_forwarded() {
        assert_eq!(
            parse_line("3 -1"),
            Err(PickError::OffBoard { row: 3, col: -1 })
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(parse_line("a b"), Err(PickError::Unrecognized(_))));
        assert!(matches!(parse_line("1 2 3"), Err(PickError::Unrecognized(_))));
    }

    #[test]
    fn test_line_picker_skips_bad_lines() {
        let input = Cursor::new("hello\n4 4\n\n2 1\nquit\n");
        let mut feedback = Vec::new();
        let mut picker = LinePicker::new(input, &mut feedback);

        assert_eq!(
            picker.next_event(),
            Some(HostEvent::CellSelected { row: 2, col: 1 })
        );
        assert_eq!(picker.next_event(), Some(HostEvent::Quit));
        assert_eq!(picker.next_event(), None);

        let feedback = String::from_utf8(feedback).unwrap();
        assert!(feedback.contains("Unrecognized input"));
        assert!(feedback.contains("(4, 4) is off the board"));
    }

    #[test]
    fn test_line_picker_survives_invalid_utf8() {
        let input = Cursor::new(&b"\xff\xfe\n1 1\n"[..]);
        let mut feedback = Vec::new();
        let mut picker = LinePicker::new(input, &mut feedback);

        assert_eq!(
            picker.next_event(),
            Some(HostEvent::CellSelected { row: 1, col: 1 })
        );
        assert_eq!(picker.next_event(), None);

        let feedback = String::from_utf8(feedback).unwrap();
        assert!(feedback.contains("Unrecognized input"));
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_feedback_does_not_end_input() {
        let input = Cursor::new("bogus\n0 2\n");
        let mut picker = LinePicker::new(input, BrokenWriter);

        assert_eq!(
            picker.next_event(),
            Some(HostEvent::CellSelected { row: 0, col: 2 })
        );
    }

    #[test]
    fn test_presenter_output() {
        let config = GameConfig::from_toml(r#"x_name = "Ada""#).unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), &config);
        let cell = Cell::try_new(1, 1).unwrap();

        presenter.place_piece(Player::X, cell).unwrap();
        presenter.play_cue(Cue::Move).unwrap();
        presenter
            .show_result(&GameStatus::Won {
                winner: Player::X,
                line: tabletop_engine::WinLine::MainDiagonal,
            })
            .unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Ada (X) plays Center (1, 1)"));
        assert!(text.contains("[move]"));
        assert!(text.contains("Ada (X) wins with the main diagonal!"));
    }

    #[test]
    fn test_presenter_uses_default_names() {
        let mut presenter = TerminalPresenter::new(Vec::new(), &GameConfig::default());
        presenter.show_turn(Player::O).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "Player O (O) to move.\n");
    }
}
