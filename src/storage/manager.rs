use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{
    sample_buyers, sample_meet_ups, SerializableBuyerList, SerializableMeetUpList, StorageError,
};
use crate::config::UserPrefs;
use crate::json::{read_json, write_json};
use crate::model::ModelManager;
use crate::record::{Buyer, MeetUp, Record};

/// Reads and writes the data files and the preferences file.
#[derive(Debug, Clone)]
pub struct StorageManager {
    user_prefs_path: PathBuf,
}

impl StorageManager {
    pub fn new(user_prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            user_prefs_path: user_prefs_path.into(),
        }
    }

    pub fn user_prefs_path(&self) -> &Path {
        &self.user_prefs_path
    }

    pub fn read_user_prefs(&self) -> UserPrefs {
        UserPrefs::load_or_default(&self.user_prefs_path)
    }

    pub fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        prefs.save(&self.user_prefs_path)?;
        Ok(())
    }

    /// `Ok(None)` if the file does not exist.
    pub fn read_buyers(&self, path: &Path) -> Result<Option<Vec<Buyer>>, StorageError> {
        debug!(path = %path.display(), "reading buyer list");
        read_json::<SerializableBuyerList>(path)?
            .map(|list| list.to_records())
            .transpose()
    }

    pub fn save_buyers<'a>(
        &self,
        path: &Path,
        buyers: impl IntoIterator<Item = &'a Buyer>,
    ) -> Result<(), StorageError> {
        write_json(path, &SerializableBuyerList::from_records(buyers))?;
        Ok(())
    }

    /// `Ok(None)` if the file does not exist.
    pub fn read_meet_ups(&self, path: &Path) -> Result<Option<Vec<MeetUp>>, StorageError> {
        debug!(path = %path.display(), "reading meet-up list");
        read_json::<SerializableMeetUpList>(path)?
            .map(|list| list.to_records())
            .transpose()
    }

    pub fn save_meet_ups<'a>(
        &self,
        path: &Path,
        meet_ups: impl IntoIterator<Item = &'a MeetUp>,
    ) -> Result<(), StorageError> {
        write_json(path, &SerializableMeetUpList::from_records(meet_ups))?;
        Ok(())
    }

    /// Build the starting model: missing files give sample data, unreadable
    /// files give an empty list.
    pub fn load_model(&self) -> ModelManager {
        let prefs = self.read_user_prefs();
        let buyers = initial_records(
            self.read_buyers(prefs.buyer_list_file_path()),
            prefs.buyer_list_file_path(),
            sample_buyers,
        );
        let meet_ups = initial_records(
            self.read_meet_ups(prefs.meet_up_list_file_path()),
            prefs.meet_up_list_file_path(),
            sample_meet_ups,
        );
        ModelManager::new(buyers, meet_ups, prefs)
    }
}

fn initial_records<R: Record>(
    loaded: Result<Option<Vec<R>>, StorageError>,
    path: &Path,
    sample: fn() -> Vec<R>,
) -> Vec<R> {
    match loaded {
        Ok(Some(records)) => records,
        Ok(None) => {
            info!(kind = R::KIND, path = %path.display(), "data file not found, starting with sample data");
            sample()
        }
        Err(err) => {
            warn!(kind = R::KIND, path = %path.display(), error = %err, "data file could not be loaded, starting empty");
            Vec::new()
        }
    }
}
