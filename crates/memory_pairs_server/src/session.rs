//! Game session registry shared by the REST routes and MCP tools.

use crate::error::ServerError;
use crate::schema::{ActResponse, BoardResponse, SetupResponse};
use memory_pairs::{GameSnapshot, MemoryGame, RewardScheme, SeededRng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Id of the session every transport plays against.
pub const DEFAULT_SESSION: &str = "default";

/// Holds live games keyed by session id.
///
/// Every operation takes the lock for one synchronous step; nothing awaits
/// while holding it, so concurrent callers simply serialize.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, MemoryGame>>>,
    rng: Arc<Mutex<SeededRng>>,
    default_size: usize,
    rewards: RewardScheme,
}

impl SessionManager {
    /// Creates a registry holding one fresh game under [`DEFAULT_SESSION`].
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Configuration`] if `board_size` is not a valid
    /// board size.
    #[instrument(skip(rewards))]
    pub fn new(
        board_size: usize,
        seed: Option<u64>,
        rewards: RewardScheme,
    ) -> Result<Self, ServerError> {
        info!("Creating session manager");
        let manager = Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            rng: Arc::new(Mutex::new(SeededRng::from_optional_seed(seed))),
            default_size: board_size,
            rewards,
        };
        manager.create_session(DEFAULT_SESSION.to_string(), board_size)?;
        Ok(manager)
    }

    /// Board size used when a reset does not name one.
    pub fn default_size(&self) -> usize {
        self.default_size
    }

    /// Creates or replaces a session with a fresh game.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId, size: usize) -> Result<(), ServerError> {
        let game = {
            let mut rng = lock(&self.rng);
            MemoryGame::with_rewards(size, &mut *rng, self.rewards)?
        };
        lock(&self.sessions).insert(id.clone(), game);
        info!(session_id = %id, size, "Created session");
        Ok(())
    }

    /// Runs `f` against the session's game while holding the lock.
    #[instrument(skip(self, f))]
    fn with_game<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut MemoryGame) -> R,
    ) -> Result<R, ServerError> {
        let mut sessions = lock(&self.sessions);
        let game = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            ServerError::SessionNotFound(id.to_string())
        })?;
        Ok(f(game))
    }

    /// Applies a move and renders the resulting board.
    #[instrument(skip(self))]
    pub fn act(&self, id: &str, action: &str) -> Result<ActResponse, ServerError> {
        self.with_game(id, |game| {
            let outcome = game.make_move(action);
            info!(
                session_id = id,
                result = %outcome.result(),
                reward = outcome.reward(),
                "Move completed"
            );
            ActResponse {
                result: *outcome.result(),
                reward: *outcome.reward(),
                accumulated_reward: game.accumulated_reward(),
                detail: outcome.rejection().as_ref().map(ToString::to_string),
                board: game.render(false),
            }
        })
    }

    /// Starts a new game in the session, keeping the old one on error.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str, size: Option<usize>) -> Result<SetupResponse, ServerError> {
        let size = size.unwrap_or(self.default_size);
        let mut rng = lock(&self.rng);
        self.with_game(id, |game| {
            game.reset(size, &mut *rng).map_err(|e| {
                warn!(session_id = id, size, error = %e, "Reset rejected");
                ServerError::from(e)
            })?;
            Ok(SetupResponse {
                ok: true,
                board: game.render(false),
            })
        })?
    }

    /// Renders the session's board.
    #[instrument(skip(self))]
    pub fn board(&self, id: &str, debug_reveal: bool) -> Result<BoardResponse, ServerError> {
        self.with_game(id, |game| BoardResponse {
            board: game.render(debug_reveal),
        })
    }

    /// Captures the session's full state.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<GameSnapshot, ServerError> {
        self.with_game(id, |game| game.snapshot())
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
