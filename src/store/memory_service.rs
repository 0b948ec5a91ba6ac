use log::info;

use crate::store::table::Table;
use crate::types::mission::Mission;
use crate::types::user::User;

/// Process-local storage. One table per resource kind; the tables are
/// independent (missions are never checked against users). Nothing survives a
/// restart.
pub struct MemoryService {
    pub(crate) users: Table<User>,
    pub(crate) missions: Table<Mission>,
}

impl MemoryService {
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        MemoryService {
            users: Table::new(),
            missions: Table::new(),
        }
    }
}

impl Default for MemoryService {
    fn default() -> Self {
        Self::new()
    }
}
