use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Email addresses and phone numbers extracted from page text.
///
/// Both collections are sets: order is irrelevant and duplicates are
/// impossible by construction, which keeps the merge of homepage and
/// contact-page extractions a plain union.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub emails: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
}

impl ContactDetails {
    /// Unions `other` into `self`.
    pub fn merge(&mut self, other: ContactDetails) {
        self.emails.extend(other.emails);
        self.phone_numbers.extend(other.phone_numbers);
    }

    /// Returns `true` when neither emails nor phone numbers were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phone_numbers.is_empty()
    }
}
