use serde::{Deserialize, Serialize};

use super::StorageError;
use crate::field::{self, Info, MeetUpName};
use crate::record::{require, MeetUp, Record};

pub const MESSAGE_DUPLICATE_MEET_UP: &str = "Meet-up list contains duplicate meet-up(s).";

/// Stored form of a [`MeetUp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedMeetUp {
    pub name: Option<String>,
    pub info: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl From<&MeetUp> for JsonAdaptedMeetUp {
    fn from(meet_up: &MeetUp) -> Self {
        Self {
            name: Some(meet_up.name().to_string()),
            info: Some(meet_up.info().to_string()),
            from: Some(meet_up.from().to_string()),
            to: Some(meet_up.to().to_string()),
        }
    }
}

impl JsonAdaptedMeetUp {
    /// Rebuild the meet-up, validating every field.
    pub fn to_model(&self) -> Result<MeetUp, StorageError> {
        let name = MeetUpName::parse(require::<MeetUp, _>(
            self.name.as_deref(),
            MeetUpName::LABEL,
        )?)?;
        let info = Info::parse(require::<MeetUp, _>(self.info.as_deref(), Info::LABEL)?)?;
        let from = field::From::parse(require::<MeetUp, _>(
            self.from.as_deref(),
            field::From::LABEL,
        )?)?;
        let to = field::To::parse(require::<MeetUp, _>(self.to.as_deref(), field::To::LABEL)?)?;

        Ok(MeetUp::new(name, info, from, to))
    }
}

/// The meet-up list file: `{"meetUps": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableMeetUpList {
    #[serde(default)]
    pub meet_ups: Vec<JsonAdaptedMeetUp>,
}

impl SerializableMeetUpList {
    pub fn from_records<'a>(meet_ups: impl IntoIterator<Item = &'a MeetUp>) -> Self {
        Self {
            meet_ups: meet_ups.into_iter().map(JsonAdaptedMeetUp::from).collect(),
        }
    }

    pub fn to_records(&self) -> Result<Vec<MeetUp>, StorageError> {
        let mut meet_ups: Vec<MeetUp> = Vec::with_capacity(self.meet_ups.len());
        for adapted in &self.meet_ups {
            let meet_up = adapted.to_model()?;
            if meet_ups.iter().any(|existing| existing.is_same(&meet_up)) {
                return Err(StorageError::Duplicate(MESSAGE_DUPLICATE_MEET_UP));
            }
            meet_ups.push(meet_up);
        }
        Ok(meet_ups)
    }
}
