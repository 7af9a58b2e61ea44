//! Ordering of in-flight submissions for one form.
//!
//! Submissions are never blocked or cancelled. Each takes a [`Ticket`], and
//! when its response settles it is applied only if no newer submission has
//! started since. A slow early response can therefore never overwrite the
//! result of a later one.

/// Proof of a submission, stamped with its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SubmissionGate {
    latest: u64,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Check a settled ticket, logging when its response is dropped.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let current = self.is_current(ticket);
        if !current {
            log::debug!(
                "discarding stale response (generation {} < {})",
                ticket.generation(),
                self.latest
            );
        }
        current
    }
}
