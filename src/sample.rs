//! Sample data: the 3×3 dating-site instance.
//!
//! Three men propose, three women receive. Preferences run from favourite
//! to least favourite.
//!
//! ```text
//!         | 1st    | 2nd    | 3rd
//! Xavier  | Amy    | Bertha | Clare
//! Yancey  | Bertha | Amy    | Clare
//! Zeus    | Amy    | Bertha | Clare
//!
//! Amy     | Yancey | Xavier | Zeus
//! Bertha  | Xavier | Yancey | Zeus
//! Clare   | Xavier | Yancey | Zeus
//! ```
//!
//! The stable, proposer-optimal pairing is Xavier–Amy, Yancey–Bertha,
//! Zeus–Clare.

use crate::types::PreferenceTable;

/// Men's preference profile
pub fn proposer_preferences() -> PreferenceTable<&'static str, &'static str> {
    [
        ("Xavier", ["Amy", "Bertha", "Clare"]),
        ("Yancey", ["Bertha", "Amy", "Clare"]),
        ("Zeus", ["Amy", "Bertha", "Clare"]),
    ]
    .into_iter()
    .collect()
}

/// Women's preference profile
pub fn receiver_preferences() -> PreferenceTable<&'static str, &'static str> {
    [
        ("Amy", ["Yancey", "Xavier", "Zeus"]),
        ("Bertha", ["Xavier", "Yancey", "Zeus"]),
        ("Clare", ["Xavier", "Yancey", "Zeus"]),
    ]
    .into_iter()
    .collect()
}

/// A perfect but unstable pairing of the sample participants.
///
/// Xavier and Bertha prefer each other to Clare and Yancey, and Xavier and
/// Amy prefer each other to Clare and Zeus.
pub fn naive_assignment() -> Vec<(&'static str, &'static str)> {
    vec![("Xavier", "Clare"), ("Yancey", "Bertha"), ("Zeus", "Amy")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{is_stable, Matcher};

    #[test]
    fn test_sample_is_valid() {
        assert!(Matcher::new()
            .validate(&proposer_preferences(), &receiver_preferences())
            .is_ok());
    }

    #[test]
    fn test_naive_assignment_is_unstable() {
        let stable = is_stable(
            &proposer_preferences(),
            &receiver_preferences(),
            &naive_assignment(),
        )
        .expect("naive assignment is a perfect pairing");
        assert!(!stable);
    }
}
