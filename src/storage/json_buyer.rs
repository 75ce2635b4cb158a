use serde::{Deserialize, Serialize};

use super::StorageError;
use crate::field::{Address, BuyerType, Email, Name, Phone, Tag};
use crate::record::{require, Buyer, Record};

pub const MESSAGE_DUPLICATE_BUYER: &str = "Buyers list contains duplicate buyer(s).";

/// Stored form of a [`Buyer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedBuyer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub buyer_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Buyer> for JsonAdaptedBuyer {
    fn from(buyer: &Buyer) -> Self {
        Self {
            name: Some(buyer.name().to_string()),
            phone: Some(buyer.phone().to_string()),
            email: Some(buyer.email().to_string()),
            address: Some(buyer.address().to_string()),
            buyer_type: Some(buyer.buyer_type().to_string()),
            tags: buyer.tags().iter().map(Tag::to_string).collect(),
        }
    }
}

impl JsonAdaptedBuyer {
    /// Rebuild the buyer, validating every field.
    pub fn to_model(&self) -> Result<Buyer, StorageError> {
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let name = Name::parse(require::<Buyer, _>(self.name.as_deref(), Name::LABEL)?)?;
        let phone = Phone::parse(require::<Buyer, _>(self.phone.as_deref(), Phone::LABEL)?)?;
        let email = Email::parse(require::<Buyer, _>(self.email.as_deref(), Email::LABEL)?)?;
        let address =
            Address::parse(require::<Buyer, _>(self.address.as_deref(), Address::LABEL)?)?;
        let buyer_type = BuyerType::parse(require::<Buyer, _>(
            self.buyer_type.as_deref(),
            BuyerType::LABEL,
        )?)?;

        Ok(Buyer::new(name, phone, email, address, buyer_type, tags))
    }
}

/// The buyer list file: `{"buyers": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableBuyerList {
    #[serde(default)]
    pub buyers: Vec<JsonAdaptedBuyer>,
}

impl SerializableBuyerList {
    pub fn from_records<'a>(buyers: impl IntoIterator<Item = &'a Buyer>) -> Self {
        Self {
            buyers: buyers.into_iter().map(JsonAdaptedBuyer::from).collect(),
        }
    }

    /// Rebuild every buyer, rejecting the file if two share a name.
    pub fn to_records(&self) -> Result<Vec<Buyer>, StorageError> {
        let mut buyers: Vec<Buyer> = Vec::with_capacity(self.buyers.len());
        for adapted in &self.buyers {
            let buyer = adapted.to_model()?;
            if buyers.iter().any(|existing| existing.is_same(&buyer)) {
                return Err(StorageError::Duplicate(MESSAGE_DUPLICATE_BUYER));
            }
            buyers.push(buyer);
        }
        Ok(buyers)
    }
}
