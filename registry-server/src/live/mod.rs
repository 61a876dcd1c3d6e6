//! RosterHub - live employee listing per collection
//!
//! ```text
//! register / delete handler
//!       │ publish(scope, action, id)
//!       ▼
//! RosterHub
//!   └── channels: Scope → ScopeChannel { sender, version }
//!       │
//!       ▼
//! RosterSubscription (one per SSE client)
//!       next() → full re-read of the scope → RosterSnapshot
//! ```
//!
//! Subscribers never receive diffs. Every notification (or a lag) triggers a
//! fresh `list()` so a client can always replace its view wholesale.
//!
//! A scope's entry lives only while it has subscribers. The version restarts
//! at 0 when a scope is opened again, which is harmless because every feed
//! starts with a full snapshot.

use dashmap::DashMap;
use shared::models::RosterSnapshot;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use crate::db::repository::{EmployeeStore, RepoResult, Scope};

/// Broadcast channel capacity per scope
const BROADCAST_CAPACITY: usize = 64;

/// Mutation kinds announced to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Created,
    Deleted,
}

impl RosterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deleted => "deleted",
        }
    }
}

/// Hub notification; carries no record data
#[derive(Debug, Clone)]
pub struct RosterChange {
    pub version: u64,
    pub action: RosterAction,
    pub id: i64,
}

struct ScopeChannel {
    tx: broadcast::Sender<RosterChange>,
    version: u64,
}

impl ScopeChannel {
    fn new() -> Self {
        Self {
            tx: broadcast::channel(BROADCAST_CAPACITY).0,
            version: 0,
        }
    }
}

/// Per-scope fan-out of roster changes
#[derive(Clone, Default)]
pub struct RosterHub {
    channels: Arc<DashMap<Scope, ScopeChannel>>,
}

impl RosterHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mutation in `scope` and notify its subscribers
    ///
    /// Returns the scope's new version, or 0 when nobody is listening.
    pub fn publish(&self, scope: &Scope, action: RosterAction, id: i64) -> u64 {
        let (version, unheard) = match self.channels.get_mut(scope) {
            Some(mut channel) => {
                channel.version += 1;
                let version = channel.version;
                let unheard = channel.tx.send(RosterChange { version, action, id }).is_err();
                (version, unheard)
            }
            None => (0, false),
        };
        // The entry guard is released above; remove_if takes the shard lock again
        if unheard {
            self.evict_if_idle(scope);
        }

        tracing::debug!(collection = %scope, version, action = action.as_str(), id, "Roster changed");
        version
    }

    /// Current version of `scope` (0 while it has no subscribers)
    pub fn version(&self, scope: &Scope) -> u64 {
        self.channels.get(scope).map(|ch| ch.version).unwrap_or(0)
    }

    /// Open a live view of `scope`
    pub fn subscribe(&self, scope: Scope, store: Arc<dyn EmployeeStore>) -> RosterSubscription {
        let rx = self
            .channels
            .entry(scope.clone())
            .or_insert_with(ScopeChannel::new)
            .tx
            .subscribe();

        tracing::debug!(collection = %scope, "Roster subscriber attached");
        RosterSubscription {
            hub: self.clone(),
            scope,
            store,
            rx: Some(rx),
            primed: false,
        }
    }

    /// Number of live subscriptions on `scope`
    pub fn subscriber_count(&self, scope: &Scope) -> usize {
        self.channels
            .get(scope)
            .map(|ch| ch.tx.receiver_count())
            .unwrap_or(0)
    }

    /// Number of scopes with an open channel
    pub fn active_scopes(&self) -> usize {
        self.channels.len()
    }

    /// Drop the scope's entry once its last receiver is gone
    fn evict_if_idle(&self, scope: &Scope) {
        self.channels
            .remove_if(scope, |_, ch| ch.tx.receiver_count() == 0);
    }
}

/// A single subscriber's view of one scope
///
/// Dropping it detaches from the hub.
pub struct RosterSubscription {
    hub: RosterHub,
    scope: Scope,
    store: Arc<dyn EmployeeStore>,
    rx: Option<broadcast::Receiver<RosterChange>>,
    primed: bool,
}

impl RosterSubscription {
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Wait for the next full snapshot
    ///
    /// The first call returns the current set immediately. Later calls wait
    /// for a change; changes queued in the meantime collapse into one re-read
    /// reported under the newest version. `None` once the hub side is gone.
    pub async fn next(&mut self) -> Option<RepoResult<RosterSnapshot>> {
        let (version, action) = if !self.primed {
            self.primed = true;
            (self.hub.version(&self.scope), "snapshot")
        } else {
            self.wait_for_change().await?
        };

        let result = self
            .store
            .list(&self.scope)
            .await
            .map(|employees| RosterSnapshot::new(version, action, employees));
        Some(result)
    }

    async fn wait_for_change(&mut self) -> Option<(u64, &'static str)> {
        let rx = self.rx.as_mut()?;

        let mut latest = None;
        match rx.recv().await {
            Ok(change) => latest = Some(change),
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(collection = %self.scope, skipped, "Roster subscriber lagged");
            }
            Err(RecvError::Closed) => return None,
        }
        let mut lagged = latest.is_none();

        loop {
            match rx.try_recv() {
                Ok(change) => latest = Some(newest(latest, change)),
                Err(TryRecvError::Lagged(_)) => lagged = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        match latest {
            Some(change) if !lagged => Some((change.version, change.action.as_str())),
            _ => Some((self.hub.version(&self.scope), "resync")),
        }
    }
}

fn newest(current: Option<RosterChange>, incoming: RosterChange) -> RosterChange {
    match current {
        Some(current) if current.version > incoming.version => current,
        _ => incoming,
    }
}

impl Drop for RosterSubscription {
    fn drop(&mut self) {
        // Receiver first, so the count seen by eviction no longer includes it
        drop(self.rx.take());
        self.hub.evict_if_idle(&self.scope);
        tracing::debug!(collection = %self.scope, "Roster subscriber detached");
    }
}
