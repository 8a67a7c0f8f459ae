//! Turn and termination state machine.

use super::error::{OthelloError, SetupError};
use super::rules::{Outcome, Score, decide_outcome};
use super::{Board, Color, Player, PlayerState};
use std::fmt;
use tracing::{debug, info, instrument};

/// The complete state of one Othello game.
///
/// Owns the board and both players. Black moves first. The game ends when
/// two skips happen back to back; the outcome is then computed once from
/// the token counts and cached.
///
/// Callers must serialise all mutation of one instance. Use
/// [`GameState::deep_copy`] to explore hypothetical moves on another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    black_player: Player,
    white_player: Player,
    current: Color,
    consecutive_skips: u32,
    black_state: PlayerState,
    white_state: PlayerState,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a game on `board` for two players, seated by their colours.
    ///
    /// # Errors
    ///
    /// - [`SetupError::DuplicateColor`] if both players use the same colour.
    /// - [`SetupError::DuplicateName`] if both players share a name.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn new(board: Board, first: Player, second: Player) -> Result<Self, OthelloError> {
        if first.color() == second.color() {
            return Err(SetupError::DuplicateColor(first.color()).into());
        }
        if first.name() == second.name() {
            return Err(SetupError::DuplicateName(first.name().to_string()).into());
        }

        let (black_player, white_player) = match first.color() {
            Color::Black => (first, second),
            Color::White => (second, first),
        };

        info!(black = %black_player.name(), white = %white_player.name(), "Game state created");
        Ok(Self {
            board,
            black_player,
            white_player,
            current: Color::Black,
            consecutive_skips: 0,
            black_state: PlayerState::Playing,
            white_state: PlayerState::Playing,
            outcome: None,
        })
    }

    /// Creates a game on a fresh board of the given size.
    ///
    /// # Errors
    ///
    /// Fails like [`Board::new`] and [`GameState::new`].
    pub fn with_size(size: usize, first: Player, second: Player) -> Result<Self, OthelloError> {
        Self::new(Board::new(size)?, first, second)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board for mutation by moves.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the player using black tokens.
    pub fn black_player(&self) -> &Player {
        &self.black_player
    }

    /// Returns the player using white tokens.
    pub fn white_player(&self) -> &Player {
        &self.white_player
    }

    /// Returns the player using the given colour.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black_player,
            Color::White => &self.white_player,
        }
    }

    /// Returns both players, black first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.black_player, &self.white_player]
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Returns the player waiting for their turn.
    pub fn other_player(&self) -> &Player {
        self.player(self.current.opponent())
    }

    /// Returns the players allowed to move next: always exactly the current one.
    pub fn compute_next_players(&self) -> Vec<&Player> {
        vec![self.current_player()]
    }

    /// Returns the number of skip moves made back to back.
    pub fn consecutive_skips(&self) -> u32 {
        self.consecutive_skips
    }

    /// Returns the status of the player with the given colour.
    pub fn state_of(&self, color: Color) -> PlayerState {
        match color {
            Color::Black => self.black_state,
            Color::White => self.white_state,
        }
    }

    /// Returns the status of the named player.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] for names not in this game.
    pub fn player_state(&self, name: &str) -> Result<PlayerState, OthelloError> {
        Ok(self.state_of(self.color_of(name)?))
    }

    /// Sets the status of the named player.
    ///
    /// This is the hook for caller-driven transitions such as resignation.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] for names not in this game.
    #[instrument(skip(self))]
    pub fn set_player_state(&mut self, name: &str, state: PlayerState) -> Result<(), OthelloError> {
        let color = self.color_of(name)?;
        *self.state_slot(color) = state;
        Ok(())
    }

    /// Resigns the player of `color`: they are RESIGNED and the opponent WON.
    #[instrument(skip(self))]
    pub fn resign(&mut self, color: Color) {
        if self.outcome.is_some() {
            return;
        }
        *self.state_slot(color) = PlayerState::Resigned;
        *self.state_slot(color.opponent()) = PlayerState::Won;
        self.outcome = Some(Outcome::Winner(color.opponent()));
        info!(%color, "Player resigned");
    }

    /// Returns the outcome once the game is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the current token counts.
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Returns true once no player is PLAYING any more.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some() || self.black_state.is_final() || self.white_state.is_final()
    }

    /// Records a completed move.
    ///
    /// A skip increments the consecutive-skip counter and finalises the game
    /// once it exceeds one; any placement resets the counter.
    #[instrument(skip(self))]
    pub(crate) fn move_completed(&mut self, skip_move: bool) {
        if skip_move {
            self.consecutive_skips += 1;
            if self.consecutive_skips > 1 {
                self.finalize();
            }
        } else {
            self.consecutive_skips = 0;
        }
        debug!(consecutive_skips = self.consecutive_skips, "Move completed");
    }

    /// Passes the turn to the other player.
    ///
    /// Finalises the game if two skips happened back to back; this is a no-op
    /// when the outcome is already known.
    #[instrument(skip(self))]
    pub fn next_turn(&mut self) {
        self.current = self.current.opponent();
        if self.consecutive_skips > 1 {
            self.finalize();
        }
        debug!(current = %self.current, "Next turn");
    }

    /// Produces a fully independent copy of the game.
    #[instrument(skip(self))]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Decides the game by token majority, at most once.
    fn finalize(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let score = self.score();
        let outcome = decide_outcome(score);
        let (black, white) = match outcome {
            Outcome::Winner(Color::Black) => (PlayerState::Won, PlayerState::Lost),
            Outcome::Winner(Color::White) => (PlayerState::Lost, PlayerState::Won),
            Outcome::Draw => (PlayerState::Draw, PlayerState::Draw),
        };
        self.black_state = black;
        self.white_state = white;
        self.outcome = Some(outcome);

        info!(%score, %outcome, "Game finished");
    }

    fn color_of(&self, name: &str) -> Result<Color, OthelloError> {
        if self.black_player.name() == name {
            Ok(Color::Black)
        } else if self.white_player.name() == name {
            Ok(Color::White)
        } else {
            Err(SetupError::UnknownPlayer(name.to_string()).into())
        }
    }

    fn state_slot(&mut self, color: Color) -> &mut PlayerState {
        match color {
            Color::Black => &mut self.black_state,
            Color::White => &mut self.white_state,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        match self.outcome {
            Some(outcome) => writeln!(f, "Game over: {} ({})", outcome, self.score()),
            None => writeln!(
                f,
                "{} to move ({}), consecutive skips: {}",
                self.current_player(),
                self.score(),
                self.consecutive_skips
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> (Player, Player) {
        (
            Player::new("Black".to_string(), Color::Black),
            Player::new("White".to_string(), Color::White),
        )
    }

    #[test]
    fn test_seats_players_by_colour() {
        let (black, white) = players();
        let state = GameState::with_size(4, white, black).unwrap();
        assert_eq!(state.black_player().name(), "Black");
        assert_eq!(state.white_player().name(), "White");
        assert_eq!(state.current_player().color(), Color::Black);
    }

    #[test]
    fn test_finalize_runs_once() {
        let (black, white) = players();
        let mut state = GameState::with_size(4, black, white).unwrap();
        state.move_completed(true);
        state.next_turn();
        state.move_completed(true);
        assert_eq!(state.outcome(), Some(Outcome::Draw));

        // Corrupting the board afterwards must not re-decide the game.
        state
            .board_mut()
            .field_at_mut(crate::games::othello::Position::new(0, 1))
            .unwrap()
            .place_token(Color::Black)
            .unwrap();
        state.next_turn();
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert_eq!(state.state_of(Color::Black), PlayerState::Draw);
    }

    #[test]
    fn test_placement_resets_skips() {
        let (black, white) = players();
        let mut state = GameState::with_size(4, black, white).unwrap();
        state.move_completed(true);
        assert_eq!(state.consecutive_skips(), 1);
        state.move_completed(false);
        assert_eq!(state.consecutive_skips(), 0);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_resign() {
        let (black, white) = players();
        let mut state = GameState::with_size(4, black, white).unwrap();
        state.resign(Color::White);
        assert_eq!(state.player_state("White").unwrap(), PlayerState::Resigned);
        assert_eq!(state.player_state("Black").unwrap(), PlayerState::Won);
        assert_eq!(state.outcome(), Some(Outcome::Winner(Color::Black)));
    }

    #[test]
    fn test_unknown_player() {
        let (black, white) = players();
        let mut state = GameState::with_size(4, black, white).unwrap();
        assert_eq!(
            state.player_state("Carol"),
            Err(OthelloError::Configuration(SetupError::UnknownPlayer(
                "Carol".to_string()
            )))
        );
        assert!(state.set_player_state("Carol", PlayerState::Resigned).is_err());
    }
}
