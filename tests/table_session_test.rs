//! Tests for the table session wiring engine, picker and presenter.

use std::io::Cursor;
use tabletop_tictactoe::{
    Board, Cell, Cue, GameConfig, GameStatus, HostEvent, LinePicker, Picker, Player,
    PresentError, Presenter, SessionControl, TableSession, TerminalPresenter, WinLine,
};

/// Presenter call, as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Place(Player, Cell),
    ClearHighlight,
    Cue(Cue),
    Board,
    Turn(Player),
    Result(GameStatus),
    PromptNewGame,
    Clear(Player),
}

#[derive(Debug, Default)]
struct RecordingPresenter {
    calls: Vec<Call>,
}

impl Presenter for RecordingPresenter {
    fn place_piece(&mut self, player: Player, cell: Cell) -> Result<(), PresentError> {
        self.calls.push(Call::Place(player, cell));
        Ok(())
    }

    fn clear_highlight(&mut self) -> Result<(), PresentError> {
        self.calls.push(Call::ClearHighlight);
        Ok(())
    }

    fn play_cue(&mut self, cue: Cue) -> Result<(), PresentError> {
        self.calls.push(Call::Cue(cue));
        Ok(())
    }

    fn show_board(&mut self, _board: &Board) -> Result<(), PresentError> {
        self.calls.push(Call::Board);
        Ok(())
    }

    fn show_turn(&mut self, player: Player) -> Result<(), PresentError> {
        self.calls.push(Call::Turn(player));
        Ok(())
    }

    fn show_result(&mut self, status: &GameStatus) -> Result<(), PresentError> {
        self.calls.push(Call::Result(*status));
        Ok(())
    }

    fn prompt_new_game(&mut self) -> Result<(), PresentError> {
        self.calls.push(Call::PromptNewGame);
        Ok(())
    }

    fn clear_board(&mut self, first: Player) -> Result<(), PresentError> {
        self.calls.push(Call::Clear(first));
        Ok(())
    }
}

/// Picker that replays a fixed list of events.
struct ScriptedPicker(std::vec::IntoIter<HostEvent>);

impl Picker for ScriptedPicker {
    fn next_event(&mut self) -> Option<HostEvent> {
        self.0.next()
    }
}

fn pick(row: i32, col: i32) -> HostEvent {
    HostEvent::CellSelected { row, col }
}

fn cell(row: i32, col: i32) -> Cell {
    Cell::try_new(row, col).expect("Test cell in range")
}

fn session() -> TableSession<RecordingPresenter> {
    TableSession::new(GameConfig::default(), RecordingPresenter::default())
}

#[test]
fn test_accepted_move_places_piece_then_cues() {
    let mut session = session();
    session.start().unwrap();
    let control = session.handle(pick(1, 1)).unwrap();

    assert_eq!(control, SessionControl::Continue);
    assert_eq!(
        session.presenter().calls,
        vec![
            Call::Clear(Player::X),
            Call::Board,
            Call::Turn(Player::X),
            Call::ClearHighlight,
            Call::Place(Player::X, cell(1, 1)),
            Call::Cue(Cue::Move),
            Call::Board,
            Call::Turn(Player::O),
        ]
    );
}

#[test]
fn test_win_triggers_end_of_game_cues() {
    let mut session = session();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.handle(pick(row, col)).unwrap();
    }

    let calls = &session.presenter().calls;
    let tail = &calls[calls.len() - 4..];
    assert_eq!(
        tail,
        &[
            Call::Board,
            Call::Cue(Cue::Win),
            Call::Result(GameStatus::Won {
                winner: Player::X,
                line: WinLine::TopRow
            }),
            Call::PromptNewGame,
        ]
    );
    assert_eq!(session.stats().x_wins(), 1);
}

#[test]
fn test_occupied_pick_is_rejected_without_placement() {
    let mut session = session();
    session.handle(pick(2, 2)).unwrap();
    let before = session.presenter().calls.len();

    session.handle(pick(2, 2)).unwrap();

    assert_eq!(
        &session.presenter().calls[before..],
        &[Call::Cue(Cue::Rejected)]
    );
    assert_eq!(session.engine().move_count(), 1);
}

#[test]
fn test_off_board_pick_is_rejected() {
    let mut session = session();
    session.handle(pick(-1, 4)).unwrap();

    assert_eq!(session.presenter().calls, vec![Call::Cue(Cue::Rejected)]);
    assert_eq!(session.engine().move_count(), 0);
}

#[test]
fn test_pick_after_game_over_prompts_new_game() {
    let mut session = session();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.handle(pick(row, col)).unwrap();
    }
    let before = session.presenter().calls.len();

    session.handle(pick(2, 2)).unwrap();

    assert_eq!(
        &session.presenter().calls[before..],
        &[Call::PromptNewGame]
    );
    assert_eq!(session.engine().move_count(), 5);
}

#[test]
fn test_new_game_resets_engine() {
    let config = GameConfig::from_toml(r#"starting_player = "o""#).unwrap();
    let mut session = TableSession::new(config, RecordingPresenter::default());
    session.handle(pick(0, 0)).unwrap();

    session.handle(HostEvent::NewGame).unwrap();

    assert_eq!(session.engine().move_count(), 0);
    assert_eq!(session.engine().current_player(), Player::O);
    let calls = &session.presenter().calls;
    assert_eq!(
        &calls[calls.len() - 3..],
        &[Call::Clear(Player::O), Call::Board, Call::Turn(Player::O)]
    );
}

#[test]
fn test_run_tallies_games_until_quit() {
    let mut events = Vec::new();
    // X wins the top row.
    events.extend([pick(0, 0), pick(1, 0), pick(0, 1), pick(1, 1), pick(0, 2)]);
    events.push(HostEvent::NewGame);
    // Cat's game.
    events.extend([
        pick(0, 0),
        pick(0, 1),
        pick(0, 2),
        pick(1, 1),
        pick(1, 0),
        pick(1, 2),
        pick(2, 1),
        pick(2, 0),
        pick(2, 2),
    ]);
    events.push(HostEvent::Quit);
    events.push(pick(0, 0));

    let mut session = session();
    let stats = session
        .run(&mut ScriptedPicker(events.into_iter()))
        .unwrap();

    assert_eq!(stats.x_wins(), 1);
    assert_eq!(stats.o_wins(), 0);
    assert_eq!(stats.draws(), 1);
    assert_eq!(stats.games(), 2);
    // The pick after Quit was never handled.
    assert_eq!(session.engine().move_count(), 9);
}

#[test]
fn test_terminal_game_end_to_end() {
    let config = GameConfig::from_toml("x_name = \"Ada\"\no_name = \"Grace\"").unwrap();
    let presenter = TerminalPresenter::new(Vec::new(), &config);
    let mut session = TableSession::new(config, presenter);
    // X center, O corner, X corner, an off-board pick, O corner, X keypad 7.
    let input = Cursor::new("5\n1\n0 2\n9 9\n2,2\n7\n3\n");
    let mut picker = LinePicker::new(input, Vec::new());

    let stats = session.run(&mut picker).unwrap();

    let text = String::from_utf8(session.into_presenter().into_inner()).unwrap();
    assert!(text.starts_with("New game. Ada (X) goes first."));
    assert!(text.contains("Ada (X) plays Center (1, 1)"));
    assert!(text.contains("Grace (O) plays Top-left (0, 0)"));
    assert!(text.contains("Game over. Ada (X) wins with the anti-diagonal!"));
    assert_eq!(stats.x_wins(), 1);
}
