use std::sync::Arc;

use actix_web::{put, web};

use crate::store::memory_service::MemoryService;
use crate::types::mission::{Mission, RMissionUpsert};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i64>,
    body: web::Json<RMissionUpsert>,
) -> ApiResult<Mission> {
    Ok(ApiResponse::Ok(
        db.update_mission(path.into_inner(), body.into_inner())?,
    ))
}
