//! In-memory ticket repository.

use crate::ticket::{
    domain::{
        NewTicket, StatusTransition, Ticket, TicketNumber, TicketNumberSequence, TicketPrefix,
        TicketScope,
    },
    ports::{TicketRepository, TicketRepositoryError, TicketRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory ticket store.
///
/// Creation runs under the map's write lock, which also guards the number
/// sequence. Status changes serialise on a per-ticket mutex and publish the
/// updated ticket by swapping an `Arc`, so readers only ever observe whole
/// tickets and two different tickets can change concurrently.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketRepository {
    state: Arc<RwLock<InMemoryTicketState>>,
}

#[derive(Debug, Default)]
struct InMemoryTicketState {
    sequence: TicketNumberSequence,
    tickets: HashMap<TicketNumber, StoredTicket>,
}

#[derive(Debug)]
struct StoredTicket {
    current: Arc<Ticket>,
    write_guard: Arc<Mutex<()>>,
}

impl StoredTicket {
    fn new(ticket: Ticket) -> Self {
        Self {
            current: Arc::new(ticket),
            write_guard: Arc::new(Mutex::new(())),
        }
    }
}

impl InMemoryTicketRepository {
    /// Creates an empty repository using the default `SMG` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository issuing numbers with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: TicketPrefix) -> Self {
        let state = InMemoryTicketState {
            sequence: TicketNumberSequence::new(prefix),
            tickets: HashMap::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Loads a previously persisted ticket, advancing the number sequence
    /// past it.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRepositoryError::DuplicateTicket`] when the number is
    /// already stored.
    pub fn restore(&self, ticket: Ticket) -> TicketRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        if state.tickets.contains_key(ticket.number()) {
            return Err(TicketRepositoryError::DuplicateTicket(
                ticket.number().clone(),
            ));
        }
        state.sequence.observe(ticket.number());
        state
            .tickets
            .insert(ticket.number().clone(), StoredTicket::new(ticket));
        Ok(())
    }
}

fn poisoned(err: impl Display) -> TicketRepositoryError {
    TicketRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn read_state(
    state: &RwLock<InMemoryTicketState>,
) -> TicketRepositoryResult<RwLockReadGuard<'_, InMemoryTicketState>> {
    state.read().map_err(poisoned)
}

fn write_state(
    state: &RwLock<InMemoryTicketState>,
) -> TicketRepositoryResult<RwLockWriteGuard<'_, InMemoryTicketState>> {
    state.write().map_err(poisoned)
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn create(&self, draft: NewTicket) -> TicketRepositoryResult<Ticket> {
        let mut state = write_state(&self.state)?;
        let number = state.sequence.next(draft.submitted_at())?;
        if state.tickets.contains_key(&number) {
            return Err(TicketRepositoryError::DuplicateTicket(number));
        }

        let ticket = Ticket::open(number.clone(), draft);
        state
            .tickets
            .insert(number, StoredTicket::new(ticket.clone()));
        Ok(ticket)
    }

    async fn find_by_number(&self, number: &TicketNumber) -> TicketRepositoryResult<Option<Ticket>> {
        let state = read_state(&self.state)?;
        Ok(state
            .tickets
            .get(number)
            .map(|stored| Ticket::clone(&stored.current)))
    }

    async fn list(&self, scope: &TicketScope) -> TicketRepositoryResult<Vec<Ticket>> {
        let state = read_state(&self.state)?;
        let mut tickets: Vec<Ticket> = state
            .tickets
            .values()
            .filter(|stored| scope.includes(&stored.current))
            .map(|stored| Ticket::clone(&stored.current))
            .collect();
        drop(state);

        tickets.sort_by(|left, right| {
            right
                .submitted_at()
                .cmp(&left.submitted_at())
                .then_with(|| right.number().cmp(left.number()))
        });
        Ok(tickets)
    }

    async fn transition(
        &self,
        number: &TicketNumber,
        transition: &StatusTransition,
    ) -> TicketRepositoryResult<Ticket> {
        let write_guard = {
            let state = read_state(&self.state)?;
            let stored = state
                .tickets
                .get(number)
                .ok_or_else(|| TicketRepositoryError::NotFound(number.clone()))?;
            Arc::clone(&stored.write_guard)
        };
        let _serialised = write_guard.lock().map_err(poisoned)?;

        let mut updated = {
            let state = read_state(&self.state)?;
            let stored = state
                .tickets
                .get(number)
                .ok_or_else(|| TicketRepositoryError::NotFound(number.clone()))?;
            Ticket::clone(&stored.current)
        };
        updated.apply(transition)?;

        let published = Arc::new(updated);
        let mut state = write_state(&self.state)?;
        let stored = state
            .tickets
            .get_mut(number)
            .ok_or_else(|| TicketRepositoryError::NotFound(number.clone()))?;
        stored.current = Arc::clone(&published);
        Ok(Ticket::clone(&published))
    }
}
