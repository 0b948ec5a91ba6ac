use serde::{Deserialize, Serialize};

use crate::store::table::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub title: String,
    pub target: Option<String>,
    pub successful: bool,
    pub reward: f64,
    /// Free-text agent name. Not checked against the users collection.
    pub agent: String,
}

impl Record for Mission {
    const KIND: &'static str = "Mission";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RMissionUpsert {
    pub title: String,
    pub target: Option<String>,
    pub successful: bool,
    pub reward: f64,
    pub agent: String,
}

#[derive(Serialize, Deserialize)]
pub struct MissionDeleteRes {
    pub message: String,
    pub mission: Mission,
}
