//! Generation guard for asynchronous results.
//!
//! Every list or detail request is stamped with a [`Ticket`] for its slot.
//! Starting a new request, or leaving the view that owns a slot, bumps that
//! slot's generation; a response whose ticket no longer matches is stale and
//! gets dropped.

/// Independent request slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Movie list (popular, search, favorites).
    List,
    /// Movie detail plus trailer.
    Detail,
}

/// Proof of the generation a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub slot: Slot,
    pub generation: u64,
}

/// Per-slot generation counters.
///
/// # Examples
///
/// ```
/// use marquee::app::generation::{Generations, Slot};
///
/// let mut generations = Generations::default();
/// let first = generations.begin(Slot::List);
/// let second = generations.begin(Slot::List);
/// assert!(!generations.is_current(first));
/// assert!(generations.is_current(second));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generations {
    list: u64,
    detail: u64,
}

impl Generations {
    fn counter(&mut self, slot: Slot) -> &mut u64 {
        match slot {
            Slot::List => &mut self.list,
            Slot::Detail => &mut self.detail,
        }
    }

    /// Starts a new request in `slot`, superseding any outstanding one.
    pub fn begin(&mut self, slot: Slot) -> Ticket {
        let counter = self.counter(slot);
        *counter = counter.wrapping_add(1);
        Ticket {
            slot,
            generation: *counter,
        }
    }

    /// Makes every outstanding ticket for `slot` stale.
    pub fn invalidate(&mut self, slot: Slot) {
        let counter = self.counter(slot);
        *counter = counter.wrapping_add(1);
    }

    /// Whether `ticket` is still the latest for its slot.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        let current = match ticket.slot {
            Slot::List => self.list,
            Slot::Detail => self.detail,
        };
        current == ticket.generation
    }
}
