use std::fmt;

use super::{require, MissingFieldError, Record};
use crate::field::{From, Info, MeetUpName, To};

/// A scheduled meet-up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetUp {
    name: MeetUpName,
    info: Info,
    from: From,
    to: To,
}

impl MeetUp {
    pub fn new(name: MeetUpName, info: Info, from: From, to: To) -> Self {
        Self {
            name,
            info,
            from,
            to,
        }
    }

    /// Build a meet-up from optional parts, failing on the first absent field.
    pub fn from_parts(
        name: Option<MeetUpName>,
        info: Option<Info>,
        from: Option<From>,
        to: Option<To>,
    ) -> Result<Self, MissingFieldError> {
        Ok(Self::new(
            require::<Self, _>(name, MeetUpName::LABEL)?,
            require::<Self, _>(info, Info::LABEL)?,
            require::<Self, _>(from, From::LABEL)?,
            require::<Self, _>(to, To::LABEL)?,
        ))
    }

    pub fn name(&self) -> &MeetUpName {
        &self.name
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn from(&self) -> From {
        self.from
    }

    pub fn to(&self) -> To {
        self.to
    }
}

impl Record for MeetUp {
    const KIND: &'static str = "meet-up";
    const TYPE_NAME: &'static str = "MeetUp";

    /// Same title over the same time slot. Info is not identity-bearing.
    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for MeetUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Info: {}; From: {}; To: {}",
            self.name, self.info, self.from, self.to
        )
    }
}
