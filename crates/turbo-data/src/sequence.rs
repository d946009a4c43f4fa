//! Per-control request sequencing.
//!
//! A select control can fire a second request before the first one answers.
//! Each request takes a [`Ticket`]; when its response arrives the handler asks
//! whether the ticket is still the latest for that control and drops the
//! response otherwise.

use std::collections::HashMap;

/// Proof of issue for one request on one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    control: String,
    sequence: u64,
}

impl Ticket {
    pub fn control(&self) -> &str {
        &self.control
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Issues monotonically increasing tickets keyed by control name.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: u64,
    latest: HashMap<String, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier ticket for `control`.
    pub fn issue(&mut self, control: &str) -> Ticket {
        self.next += 1;
        self.latest.insert(control.to_string(), self.next);
        Ticket {
            control: control.to_string(),
            sequence: self.next,
        }
    }

    /// Whether no newer ticket has been issued for the ticket's control.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.control) == Some(&ticket.sequence)
    }

    /// Latest sequence number issued for a control.
    pub fn latest(&self, control: &str) -> Option<u64> {
        self.latest.get(control).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue("variant");
        let second = seq.issue("variant");

        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
        assert!(second.sequence() > first.sequence());
    }

    #[test]
    fn test_controls_are_independent() {
        let mut seq = RequestSequencer::new();
        let variant = seq.issue("variant");
        let category = seq.issue("category");

        assert!(seq.is_current(&variant));
        assert!(seq.is_current(&category));
        assert_eq!(seq.latest("variant"), Some(variant.sequence()));
        assert_eq!(seq.latest("promo"), None);
    }
}
