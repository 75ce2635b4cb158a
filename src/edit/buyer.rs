use std::collections::BTreeSet;

use super::Descriptor;
use crate::field::{Address, BuyerType, Email, Name, Phone, Tag};
use crate::record::Buyer;

/// Fields to change on a buyer. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuyerDescriptor {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    buyer_type: Option<BuyerType>,
    tags: Option<BTreeSet<Tag>>,
}

impl EditBuyerDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = Some(phone);
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn set_buyer_type(&mut self, buyer_type: BuyerType) {
        self.buyer_type = Some(buyer_type);
    }

    pub fn buyer_type(&self) -> Option<BuyerType> {
        self.buyer_type
    }

    /// Replace the whole tag set. The tags are copied in; an empty set
    /// clears all tags on resolution.
    pub fn set_tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a Tag>) {
        self.tags = Some(tags.into_iter().cloned().collect());
    }

    /// Read-only view of the tag set, if one was given.
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }
}

impl Descriptor for EditBuyerDescriptor {
    type Target = Buyer;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.buyer_type.is_some()
            || self.tags.is_some()
    }

    fn apply(&self, existing: &Buyer) -> Buyer {
        Buyer::new(
            self.name.clone().unwrap_or_else(|| existing.name().clone()),
            self.phone.clone().unwrap_or_else(|| existing.phone().clone()),
            self.email.clone().unwrap_or_else(|| existing.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| existing.address().clone()),
            self.buyer_type.unwrap_or_else(|| existing.buyer_type()),
            self.tags.clone().unwrap_or_else(|| existing.tags().clone()),
        )
    }
}
