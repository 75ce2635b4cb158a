//! ModelManager - owns every record list and the user's preferences.

use std::path::Path;

use tracing::debug;

use super::record_list::RecordList;
use super::records::Records;
use crate::config::UserPrefs;
use crate::record::{Buyer, MeetUp};

/// In-memory state of the application.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    buyers: RecordList<Buyer>,
    meet_ups: RecordList<MeetUp>,
    user_prefs: UserPrefs,
}

impl ModelManager {
    pub fn new(buyers: Vec<Buyer>, meet_ups: Vec<MeetUp>, user_prefs: UserPrefs) -> Self {
        debug!(
            buyers = buyers.len(),
            meet_ups = meet_ups.len(),
            "initialising model"
        );
        Self {
            buyers: RecordList::from_records(buyers),
            meet_ups: RecordList::from_records(meet_ups),
            user_prefs,
        }
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn buyer_list_file_path(&self) -> &Path {
        self.user_prefs.buyer_list_file_path()
    }

    pub fn meet_up_list_file_path(&self) -> &Path {
        self.user_prefs.meet_up_list_file_path()
    }
}

impl Records<Buyer> for ModelManager {
    fn list(&self) -> &RecordList<Buyer> {
        &self.buyers
    }

    fn list_mut(&mut self) -> &mut RecordList<Buyer> {
        &mut self.buyers
    }
}

impl Records<MeetUp> for ModelManager {
    fn list(&self) -> &RecordList<MeetUp> {
        &self.meet_ups
    }

    fn list_mut(&mut self) -> &mut RecordList<MeetUp> {
        &mut self.meet_ups
    }
}
