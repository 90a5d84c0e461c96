/// Identifies one issued fetch. Only the most recent ticket may install
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Monotonic counter of issued fetches.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_newest_ticket_is_latest() {
        let mut seq = FetchSequence::default();
        let first = seq.issue();
        assert!(seq.is_latest(first));

        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
        assert_eq!(second.id(), 2);
    }
}
