use std::collections::BTreeSet;
use std::fmt;

use super::{require, MissingFieldError, Record};
use crate::field::{Address, BuyerType, Email, Name, Phone, Tag};

/// A buyer or seller in the contact list.
///
/// Every field is present; tags may be an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Buyer {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    buyer_type: BuyerType,
    tags: BTreeSet<Tag>,
}

impl Buyer {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        buyer_type: BuyerType,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            buyer_type,
            tags: tags.into_iter().collect(),
        }
    }

    /// Build a buyer from optional parts, failing on the first absent field.
    pub fn from_parts(
        name: Option<Name>,
        phone: Option<Phone>,
        email: Option<Email>,
        address: Option<Address>,
        buyer_type: Option<BuyerType>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, MissingFieldError> {
        Ok(Self::new(
            require::<Self, _>(name, Name::LABEL)?,
            require::<Self, _>(phone, Phone::LABEL)?,
            require::<Self, _>(email, Email::LABEL)?,
            require::<Self, _>(address, Address::LABEL)?,
            require::<Self, _>(buyer_type, BuyerType::LABEL)?,
            tags,
        ))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn buyer_type(&self) -> BuyerType {
        self.buyer_type
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Record for Buyer {
    const KIND: &'static str = "buyer";
    const TYPE_NAME: &'static str = "Buyer";

    /// Two buyers are the same contact if their names match.
    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Buyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Type: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.buyer_type
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
