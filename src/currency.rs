use std::fmt;

/// UK coin and note values in pence, from £50 down to 1p.
///
/// The set is canonical: the greedy pass over it is optimal in coin count, so no
/// search is needed. Kept descending so the breakdown can walk it front to back.
pub const DENOMINATIONS: [u32; 12] = [5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5, 2, 1];

/// One line of a change breakdown: how many units of a single denomination.
///
/// A breakdown never contains a zero count, and each denomination appears at
/// most once.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ChangePart {
    pub count: u64,
    pub denomination: u32,
}

impl fmt::Display for ChangePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Everything above 50p is a whole number of pounds.
        if self.denomination > 50 {
            write!(f, "{} x £{}", self.count, self.denomination / 100)
        } else {
            write!(f, "{} x {}p", self.count, self.denomination)
        }
    }
}
