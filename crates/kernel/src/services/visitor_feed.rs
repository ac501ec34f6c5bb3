//! Live visitor counters.
//!
//! Updates replace the whole value; subscribers only ever see the latest
//! reading. Composition reads [`VisitorFeed::current`] once per pass.

use tokio::sync::watch;

use crate::models::VisitorStats;

#[derive(Debug)]
pub struct VisitorFeed {
    tx: watch::Sender<VisitorStats>,
}

impl VisitorFeed {
    pub fn new(initial: VisitorStats) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<VisitorStats> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> VisitorStats {
        *self.tx.borrow()
    }

    /// Replace every counter.
    pub fn replace(&self, stats: VisitorStats) {
        self.tx.send_replace(stats);
    }

    /// Update the online count, leaving the totals alone.
    pub fn set_online(&self, online: u64) {
        self.tx.send_if_modified(|stats| {
            if stats.online == online {
                return false;
            }
            stats.online = online;
            true
        });
    }
}

impl Default for VisitorFeed {
    fn default() -> Self {
        Self::new(VisitorStats::default())
    }
}
