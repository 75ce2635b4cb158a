use super::Descriptor;
use crate::field::{From, Info, MeetUpName, To};
use crate::record::MeetUp;

/// Fields to change on a meet-up. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditMeetUpDescriptor {
    name: Option<MeetUpName>,
    info: Option<Info>,
    from: Option<From>,
    to: Option<To>,
}

impl EditMeetUpDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: MeetUpName) {
        self.name = Some(name);
    }

    pub fn name(&self) -> Option<&MeetUpName> {
        self.name.as_ref()
    }

    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    pub fn set_from(&mut self, from: From) {
        self.from = Some(from);
    }

    pub fn from(&self) -> Option<From> {
        self.from
    }

    pub fn set_to(&mut self, to: To) {
        self.to = Some(to);
    }

    pub fn to(&self) -> Option<To> {
        self.to
    }
}

impl Descriptor for EditMeetUpDescriptor {
    type Target = MeetUp;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.info.is_some() || self.from.is_some() || self.to.is_some()
    }

    fn apply(&self, existing: &MeetUp) -> MeetUp {
        MeetUp::new(
            self.name.clone().unwrap_or_else(|| existing.name().clone()),
            self.info.clone().unwrap_or_else(|| existing.info().clone()),
            self.from.unwrap_or_else(|| existing.from()),
            self.to.unwrap_or_else(|| existing.to()),
        )
    }
}
