//! Typed identifiers for backend keys.
//!
//! The bookkeeping backend hands out opaque keys. Wrapping them prevents passing
//! a `ProductId` where a `MerchantId` is expected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier must not be blank")]
pub struct BlankIdError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from a backend key, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns [`BlankIdError`] if the key is empty after trimming.
            pub fn new(key: impl AsRef<str>) -> Result<Self, BlankIdError> {
                let key = key.as_ref().trim();
                if key.is_empty() {
                    return Err(BlankIdError);
                }
                Ok(Self(key.to_string()))
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner key.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = BlankIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(BrokerId, "Identifier of the broker who owns a ledger.");
typed_id!(
    MerchantId,
    "Identifier of a merchant (seller or buyer) in the directory."
);
typed_id!(ProductId, "Identifier of a product in the catalog.");
typed_id!(FinancialYearId, "Identifier of a financial year.");
typed_id!(
    TransactionNumber,
    "Transaction number, unique per broker and financial year."
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_id_trims_key() {
        let id = MerchantId::new("  m-42 ").unwrap();
        assert_eq!(id.as_str(), "m-42");
        assert_eq!(id.to_string(), "m-42");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_id_rejected(#[case] key: &str) {
        assert_eq!(ProductId::from_str(key), Err(BlankIdError));
    }

    #[test]
    fn test_id_into_inner() {
        let id = FinancialYearId::new("fy-2025").unwrap();
        assert_eq!(id.into_inner(), "fy-2025".to_string());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = BrokerId::new("b1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"b1\"");
        let back: BrokerId = serde_json::from_str("\"b1\"").unwrap();
        assert_eq!(back, id);
    }
}
