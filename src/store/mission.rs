use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::mission::{Mission, RMissionUpsert};

impl MemoryService {
    pub fn create_mission(&self, payload: RMissionUpsert) -> Mission {
        self.missions.insert(|id| Mission {
            id,
            title: payload.title,
            target: payload.target,
            successful: payload.successful,
            reward: payload.reward,
            agent: payload.agent,
        })
    }

    pub fn list_missions(&self) -> Vec<Mission> {
        self.missions.list()
    }

    pub fn get_mission(&self, id: i64) -> Result<Mission, AppError> {
        self.missions.get(id)
    }

    pub fn update_mission(&self, id: i64, payload: RMissionUpsert) -> Result<Mission, AppError> {
        self.missions.replace(id, |id| Mission {
            id,
            title: payload.title,
            target: payload.target,
            successful: payload.successful,
            reward: payload.reward,
            agent: payload.agent,
        })
    }

    pub fn delete_mission(&self, id: i64) -> Result<Mission, AppError> {
        self.missions.remove(id)
    }
}
