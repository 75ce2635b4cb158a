use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a contact is looking to buy or to sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuyerType {
    Buyer,
    Seller,
}

impl BuyerType {
    pub const LABEL: &'static str = "BuyerType";

    pub const MESSAGE_CONSTRAINTS: &'static str = "Buyer type should be either 'buyer' or 'seller'";

    /// Parse `buyer` or `seller`, ignoring case.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        match raw.as_ref().to_ascii_lowercase().as_str() {
            "buyer" => Ok(BuyerType::Buyer),
            "seller" => Ok(BuyerType::Seller),
            _ => Err(ValidationError::new(Self::LABEL, Self::MESSAGE_CONSTRAINTS)),
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerType::Buyer => "buyer",
            BuyerType::Seller => "seller",
        }
    }
}

impl fmt::Display for BuyerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuyerType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
