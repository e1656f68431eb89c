// 🏦 Coinbank Entity - Fixed-denomination coin counting
//
// Models a mechanical coin bank that sorts pennies, nickels, dimes,
// and quarters into separate rolls.
//
// Problem solved:
// - Closed denomination set {1, 5, 10, 25}; everything else is unbankable
// - Withdrawals clamp to what is available, so counts never go negative
// - Invalid input is signaled through return values, never through panics

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DENOMINATIONS
// ============================================================================

/// Penny face value in cents
pub const PENNY_VALUE: i32 = 1;

/// Nickel face value in cents
pub const NICKEL_VALUE: i32 = 5;

/// Dime face value in cents
pub const DIME_VALUE: i32 = 10;

/// Quarter face value in cents
pub const QUARTER_VALUE: i32 = 25;

/// How many types of coins does the bank hold?
const COIN_TYPES: usize = 4;

/// Supported denominations in display order (penny, nickel, dime, quarter)
const DENOMINATIONS: [i32; COIN_TYPES] = [PENNY_VALUE, NICKEL_VALUE, DIME_VALUE, QUARTER_VALUE];

/// Map a denomination value to its slot in the count table.
/// Returns `None` for anything the bank cannot hold, including
/// zero and negative values.
fn slot(denomination: i32) -> Option<usize> {
    DENOMINATIONS.iter().position(|&d| d == denomination)
}

// ============================================================================
// COINBANK ENTITY
// ============================================================================

/// Coinbank Entity - in-memory counter store for the four denominations
///
/// State: one non-negative count per denomination, all zero at creation.
/// Every operation is a pure function of the current counts plus its
/// inputs; failed operations are strict no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coinbank {
    /// Coin counts, indexed in `DENOMINATIONS` order
    counts: [u32; COIN_TYPES],
}

impl Coinbank {
    /// Create a new Coinbank with 0 coins of each denomination
    pub fn new() -> Self {
        Coinbank {
            counts: [0; COIN_TYPES],
        }
    }

    /// Number of coins the bank holds of the given denomination,
    /// or -1 if the denomination is not bankable.
    ///
    /// Counts are invariantly non-negative, so -1 is unambiguous
    /// as an error sentinel.
    pub fn query(&self, denomination: i32) -> i32 {
        match slot(denomination) {
            Some(s) => self.counts[s] as i32,
            None => -1,
        }
    }

    /// Insert one coin into the bank. Returns true if the deposit
    /// succeeded (i.e. the coin was a penny, nickel, dime, or quarter).
    /// Returns false, leaving the bank untouched, if the coin is not
    /// recognized.
    pub fn deposit(&mut self, denomination: i32) -> bool {
        match slot(denomination) {
            Some(s) => {
                self.counts[s] += 1;
                true
            }
            None => false,
        }
    }

    /// Remove up to `requested` coins of the given denomination and
    /// return how many were actually removed.
    ///
    /// If the bank holds fewer coins than requested, all coins of that
    /// denomination are removed. An unbankable denomination or a
    /// non-positive request removes nothing and returns 0.
    pub fn withdraw(&mut self, denomination: i32, requested: i32) -> i32 {
        let Some(s) = slot(denomination) else {
            return 0;
        };
        if requested <= 0 {
            return 0;
        }

        let have = self.counts[s];
        let removed = have.min(requested as u32);
        self.counts[s] = have - removed;
        removed as i32
    }

    /// Total value of all held coins, in cents
    pub fn total_cents(&self) -> i64 {
        DENOMINATIONS
            .iter()
            .zip(self.counts.iter())
            .map(|(&d, &n)| i64::from(d) * i64::from(n))
            .sum()
    }

    /// Returns the bank as a printable multi-line report.
    ///
    /// The dollar total is cents / 100.0 rendered with default float
    /// formatting, so whole-dollar totals print without cents. Labels
    /// are always plural, even for counts of zero or one.
    pub fn describe(&self) -> String {
        let total = self.total_cents() as f64 / 100.0;

        let mut out = format!("The bank currently holds ${} consisting of \n", total);
        out += &format!("{} pennies\n", self.query(PENNY_VALUE));
        out += &format!("{} nickels\n", self.query(NICKEL_VALUE));
        out += &format!("{} dimes\n", self.query(DIME_VALUE));
        out += &format!("{} quarters\n", self.query(QUARTER_VALUE));
        out
    }

    /// JSON snapshot of the bank (counts + total), for reporting
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "pennies": self.query(PENNY_VALUE),
            "nickels": self.query(NICKEL_VALUE),
            "dimes": self.query(DIME_VALUE),
            "quarters": self.query(QUARTER_VALUE),
            "total_cents": self.total_cents(),
        })
    }
}

impl Default for Coinbank {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Coinbank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// TESTS
// ============================================================================
