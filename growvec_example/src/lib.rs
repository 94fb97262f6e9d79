//! Sample element types for exercising [`growvec::Vector`], and scenario tests that drive
//! its public API the way an ordinary caller would.

use std::cell::Cell;
use std::rc::Rc;

/// Value stamped into every live [`Cookie`] and wiped when it is dropped.
pub const LIVE_COOKIE: u32 = 0xdead_beef;

/// An element that records whether it is still alive.
///
/// Reading a `Cookie` that was dropped (or never constructed) will almost certainly
/// report `is_alive() == false`, which makes it a cheap probe for lifetime bugs in a
/// container.
#[derive(Clone, Debug)]
pub struct Cookie {
    cookie: u32,
}

impl Cookie {
    /// Whether this value has been constructed and not yet dropped.
    pub fn is_alive(&self) -> bool {
        self.cookie == LIVE_COOKIE
    }
}

impl Default for Cookie {
    fn default() -> Self {
        Cookie {
            cookie: LIVE_COOKIE,
        }
    }
}

impl Drop for Cookie {
    fn drop(&mut self) {
        self.cookie = 0;
    }
}

/// Shared bookkeeping for [`Counted`] values.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    live: Rc<Cell<usize>>,
    clones_left: Rc<Cell<Option<usize>>>,
}

impl Ledger {
    /// A ledger with no limit on clones.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `n` clones succeed and every one after that panic.
    pub fn allow_clones(&self, n: usize) {
        self.clones_left.set(Some(n));
    }

    /// Number of [`Counted`] values currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Creates a value tied to this ledger.
    pub fn make(&self, id: u32) -> Counted {
        self.live.set(self.live.get() + 1);
        Counted {
            id,
            ledger: self.clone(),
        }
    }
}

/// An element that counts live instances and whose `clone` can be made to panic.
#[derive(Debug)]
pub struct Counted {
    /// Caller-chosen identity, preserved by `clone`.
    pub id: u32,
    ledger: Ledger,
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        if let Some(left) = self.ledger.clones_left.get() {
            if left == 0 {
                panic!("clone budget of Counted({}) exhausted", self.id);
            }
            self.ledger.clones_left.set(Some(left - 1));
        }
        self.ledger.make(self.id)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get() - 1);
    }
}
