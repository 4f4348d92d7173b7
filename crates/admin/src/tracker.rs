//! Sequencing for in-flight AI requests.
//!
//! Descriptions are keyed by product: while one is outstanding for a product,
//! another request for the same product is refused. Insights are ticketed:
//! only the completion carrying the most recently issued ticket is applied.

use std::collections::HashSet;

use berrima_core::ProductId;

/// Identifies one insight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Tracks outstanding description and insight requests.
#[derive(Debug, Default)]
pub struct RequestTracker {
    describing: HashSet<ProductId>,
    insight_issued: u64,
    insight_pending: bool,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a description request for `id` as started.
    ///
    /// Returns `false` if one is already outstanding for that product.
    pub fn begin_description(&mut self, id: &ProductId) -> bool {
        self.describing.insert(id.clone())
    }

    /// Mark the description request for `id` as finished.
    ///
    /// Returns `false` if none was outstanding.
    pub fn finish_description(&mut self, id: &ProductId) -> bool {
        self.describing.remove(id)
    }

    #[must_use]
    pub fn is_describing(&self, id: &ProductId) -> bool {
        self.describing.contains(id)
    }

    /// Issue a ticket for a new insight request, superseding earlier ones.
    pub const fn begin_insight(&mut self) -> Ticket {
        self.insight_issued += 1;
        self.insight_pending = true;
        Ticket(self.insight_issued)
    }

    /// Settle an insight request.
    ///
    /// Returns `true` only if `ticket` is the latest issued and has not been
    /// settled yet; the caller should apply its result.
    pub const fn finish_insight(&mut self, ticket: Ticket) -> bool {
        if self.insight_pending && ticket.0 == self.insight_issued {
            self.insight_pending = false;
            true
        } else {
            false
        }
    }

    /// Whether `ticket` is the latest issued.
    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.insight_issued
    }

    /// Whether an insight request is outstanding.
    #[must_use]
    pub const fn insight_pending(&self) -> bool {
        self.insight_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_description_for_same_product_is_refused() {
        let mut tracker = RequestTracker::new();
        let honey = ProductId::new("1");
        let oud = ProductId::new("2");

        assert!(tracker.begin_description(&honey));
        assert!(!tracker.begin_description(&honey));
        assert!(tracker.begin_description(&oud));
        assert!(tracker.is_describing(&honey));

        assert!(tracker.finish_description(&honey));
        assert!(!tracker.is_describing(&honey));
        assert!(tracker.begin_description(&honey));
    }

    #[test]
    fn test_finish_unknown_description() {
        let mut tracker = RequestTracker::new();
        assert!(!tracker.finish_description(&ProductId::new("9")));
    }

    #[test]
    fn test_tickets_increase() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin_insight();
        let second = tracker.begin_insight();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_stale_insight_is_discarded() {
        let mut tracker = RequestTracker::new();
        let stale = tracker.begin_insight();
        let fresh = tracker.begin_insight();

        assert!(tracker.finish_insight(fresh));
        assert!(!tracker.insight_pending());
        assert!(!tracker.finish_insight(stale));
    }

    #[test]
    fn test_insight_settles_once() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin_insight();
        assert!(tracker.insight_pending());
        assert!(tracker.finish_insight(ticket));
        assert!(!tracker.finish_insight(ticket));
    }
}
