use actix_web::{web, App};
use agency_api::routes::configure_routes;
use agency_api::store::memory_service::MemoryService;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<MemoryService>,
}

impl TestClient {
    pub fn new(db: Arc<MemoryService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(configure_routes)
    }
}
