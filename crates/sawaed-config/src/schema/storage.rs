//! Session storage key names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    pub amount_key: String,
    pub category_key: String,
    pub frequency_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            amount_key: "selectedDonationAmount".into(),
            category_key: "selectedCategory".into(),
            frequency_key: "donationFrequency".into(),
        }
    }
}
