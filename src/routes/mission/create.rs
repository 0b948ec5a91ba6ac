use std::sync::Arc;

use actix_web::{post, web};

use crate::store::memory_service::MemoryService;
use crate::types::mission::{Mission, RMissionUpsert};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create(
    db: web::Data<Arc<MemoryService>>,
    body: web::Json<RMissionUpsert>,
) -> ApiResult<Mission> {
    Ok(ApiResponse::Ok(db.create_mission(body.into_inner())))
}
