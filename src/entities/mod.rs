// Entity Models
//
// The coin bank is the only entity: an in-memory counter store with a
// closed denomination set and no identity or versioning concerns.

pub mod coinbank;

pub use coinbank::{Coinbank, DIME_VALUE, NICKEL_VALUE, PENNY_VALUE, QUARTER_VALUE};
