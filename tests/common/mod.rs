use std::sync::Arc;

use agency_api::store::memory_service::MemoryService;

pub mod client;

pub struct TestContext {
    pub db: Arc<MemoryService>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            db: Arc::new(MemoryService::new()),
        }
    }
}

// Test data helpers
pub mod test_data {
    use agency_api::types::mission::RMissionUpsert;
    use agency_api::types::user::RUserUpsert;

    #[allow(dead_code)]
    pub fn sample_user(name: &str, job: &str) -> RUserUpsert {
        RUserUpsert {
            name: name.to_string(),
            job: job.to_string(),
            description: None,
        }
    }

    #[allow(dead_code)]
    pub fn sample_mission(title: &str, agent: &str) -> RMissionUpsert {
        RMissionUpsert {
            title: title.to_string(),
            target: None,
            successful: true,
            reward: 100.0,
            agent: agent.to_string(),
        }
    }
}
