use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::types::ConstraintTable;

/// Ticket issued when a load begins. Tickets order publishes: a table carried
/// by an older ticket never replaces one published under a newer ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishTicket(u64);

impl PublishTicket {
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Storage for the currently published constraint table.
///
/// Implementations must be shareable across threads. The two-step
/// `begin_publish` / `publish` protocol lets concurrent loads race without a
/// stale response overwriting a fresher table.
pub trait ConstraintsStore: Send + Sync {
    /// Reserves a ticket for an upcoming publish. Call this before starting
    /// the work that produces the table, so tickets reflect request order.
    fn begin_publish(&self) -> PublishTicket;

    /// Publishes a table under the given ticket. Returns `false` and leaves
    /// the store untouched when a newer ticket has already published.
    fn publish(&self, ticket: PublishTicket, table: ConstraintTable) -> bool;

    /// The currently published table, if any load has completed yet.
    fn current(&self) -> Option<Arc<ConstraintTable>>;
}

#[derive(Debug, Default)]
struct StoreState {
    table: Option<Arc<ConstraintTable>>,
    published: u64,
}

/// Default in-memory [`ConstraintsStore`].
///
/// Ticket issuance is a lone atomic counter so `begin_publish` never blocks on
/// readers. Publishing takes the write lock, checks staleness, and swaps the
/// table in one critical section.
#[derive(Debug, Default)]
pub struct SharedConstraintsStore {
    issued: AtomicU64,
    state: RwLock<StoreState>,
}

impl SharedConstraintsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConstraintsStore for SharedConstraintsStore {
    fn begin_publish(&self) -> PublishTicket {
        PublishTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn publish(&self, ticket: PublishTicket, table: ConstraintTable) -> bool {
        let mut state = self.state.write().unwrap();
        if ticket.0 <= state.published {
            return false;
        }
        state.published = ticket.0;
        state.table = Some(Arc::new(table));
        true
    }

    fn current(&self) -> Option<Arc<ConstraintTable>> {
        self.state.read().unwrap().table.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::types::FieldConstraints;

    fn table_with_entity(entity: &str) -> ConstraintTable {
        let mut table = ConstraintTable::new();
        table.insert(entity, "name", FieldConstraints::default());
        table
    }

    #[test]
    fn store_starts_empty() {
        let store = SharedConstraintsStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn publish_makes_table_current() {
        let store = SharedConstraintsStore::new();
        let ticket = store.begin_publish();
        assert!(store.publish(ticket, table_with_entity("Hero")));
        assert_eq!(store.current().unwrap().len(), 1);
    }

    #[test]
    fn tickets_increase_per_begin_publish() {
        let store = SharedConstraintsStore::new();
        let first = store.begin_publish();
        let second = store.begin_publish();
        assert!(second > first);
    }

    #[test]
    fn stale_ticket_does_not_overwrite_newer_table() {
        let store = SharedConstraintsStore::new();
        let old = store.begin_publish();
        let new = store.begin_publish();

        assert!(store.publish(new, table_with_entity("Fresh")));
        assert!(!store.publish(old, table_with_entity("Stale")));

        let current = store.current().unwrap();
        let field = crate::constraints::FieldRef::parse("Fresh.name").unwrap();
        assert!(current.constraints_for(&field).is_some());
    }

    #[test]
    fn reusing_a_published_ticket_is_rejected() {
        let store = SharedConstraintsStore::new();
        let ticket = store.begin_publish();
        assert!(store.publish(ticket, table_with_entity("A")));
        assert!(!store.publish(ticket, table_with_entity("B")));
    }

    #[test]
    fn publishes_from_concurrent_threads_keep_the_newest_ticket() {
        use std::thread;

        let store = Arc::new(SharedConstraintsStore::new());
        let tickets: Vec<PublishTicket> = (0..8).map(|_| store.begin_publish()).collect();
        let newest = *tickets.last().unwrap();

        let handles: Vec<_> = tickets
            .into_iter()
            .map(|ticket| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.publish(ticket, table_with_entity(&format!("E{}", ticket.value())));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every ticket attempted a publish, so the newest one must have won:
        // its publish succeeds whenever it runs and blocks all older tickets
        // afterwards.
        let current = store.current().unwrap();
        let field =
            crate::constraints::FieldRef::parse(&format!("E{}.name", newest.value())).unwrap();
        assert!(current.constraints_for(&field).is_some());
    }
}
