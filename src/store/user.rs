use crate::store::memory_service::MemoryService;
use crate::types::error::AppError;
use crate::types::user::{RUserUpsert, User};

impl MemoryService {
    pub fn create_user(&self, payload: RUserUpsert) -> User {
        self.users.insert(|id| User {
            id,
            name: payload.name,
            job: payload.job,
            description: payload.description,
        })
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.users.get(id)
    }

    pub fn update_user(&self, id: i64, payload: RUserUpsert) -> Result<User, AppError> {
        self.users.replace(id, |id| User {
            id,
            name: payload.name,
            job: payload.job,
            description: payload.description,
        })
    }

    pub fn delete_user(&self, id: i64) -> Result<User, AppError> {
        self.users.remove(id)
    }
}
