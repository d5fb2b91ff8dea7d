/// Things a response can be written into. Each slot has its own counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Services,
    Orders,
    Stats,
    Auth,
}

impl Slot {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Slot::Services => 0,
            Slot::Orders => 1,
            Slot::Stats => 2,
            Slot::Auth => 3,
        }
    }
}

/// Proof that a request was launched at a given generation of its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Monotonic request generations. A response may only be committed while
/// its ticket is still the newest one issued for the slot.
#[derive(Debug, Default)]
pub struct Generations {
    counters: [u64; Slot::COUNT],
}

impl Generations {
    pub fn issue(&mut self, slot: Slot) -> Ticket {
        let counter = &mut self.counters[slot.index()];
        *counter += 1;
        Ticket {
            slot,
            generation: *counter,
        }
    }

    /// Makes every ticket issued so far for `slot` stale.
    pub fn invalidate(&mut self, slot: Slot) {
        self.counters[slot.index()] += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counters[ticket.slot.index()] == ticket.generation
    }
}
