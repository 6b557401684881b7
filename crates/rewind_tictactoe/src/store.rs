//! Game store: owns the current state and tells subscribers when it changes.

use crate::action::{Action, Rejection};
use crate::game::GameState;
use tracing::{debug, instrument};

/// Handle returned by [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameState)>;

/// Owns one [`GameState`] and routes actions through its transitions.
///
/// Subscribers run after every accepted action, in registration order,
/// and never for rejected ones.
pub struct GameStore {
    state: GameState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl GameStore {
    /// Creates a store around an existing state.
    #[instrument(skip(state), fields(size = state.board_size()))]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates a store with a fresh game of the given size.
    pub fn with_size(size: usize) -> Result<Self, Rejection> {
        GameState::new(size).map(Self::new)
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a callback run with the new state after each change.
    #[instrument(skip_all)]
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        debug!(?id, count = self.subscribers.len(), "Subscriber added");
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    /// Applies an action.
    ///
    /// On success the new state replaces the old one and subscribers are
    /// notified. On rejection nothing changes.
    #[instrument(skip(self), fields(current_move = self.state.current_move()))]
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState, Rejection> {
        let next = self
            .state
            .apply(action)
            .inspect_err(|rejection| debug!(%rejection, "Action ignored"))?;
        self.state = next;

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
