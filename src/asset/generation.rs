//! Generation counters that let the newest decode of an upload slot win.
//!
//! Every decode takes a [`Ticket`]. When it resolves, its result is used only
//! if no newer ticket was issued for the same slot in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};

/// Upload slot a decode belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Pattern,
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub slot: Slot,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct DecodeTracker {
    pattern: AtomicU64,
    logo: AtomicU64,
}

impl DecodeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, slot: Slot) -> &AtomicU64 {
        match slot {
            Slot::Pattern => &self.pattern,
            Slot::Logo => &self.logo,
        }
    }

    /// Issue the newest ticket for `slot`, superseding all earlier ones
    pub fn begin(&self, slot: Slot) -> Ticket {
        let generation = self.counter(slot).fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { slot, generation }
    }

    /// Whether `ticket` is still the newest for its slot
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counter(ticket.slot).load(Ordering::Acquire) == ticket.generation
    }
}
