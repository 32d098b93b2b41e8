//! Core data types for stable matching
//!
//! ## Types
//!
//! - [`Side`]: Proposer or Receiver
//! - [`Participant`]: Bound for opaque participant identifiers
//! - [`PreferenceTable`]: Ranked lists for every participant of one side
//! - [`Matching`]: A perfect stable pairing plus run statistics
//! - [`MatchReceipt`]: SSZ-encodable run summary with an assignment root

mod side;
mod preference;
mod matching;
mod receipt;

pub use side::Side;
pub use preference::{Participant, PreferenceTable};
pub use matching::{MatchStats, Matching, ProposalEvent, Response};
pub use receipt::MatchReceipt;
