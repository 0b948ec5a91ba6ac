use std::sync::Arc;

use actix_web::{delete, web};

use crate::store::memory_service::MemoryService;
use crate::types::mission::MissionDeleteRes;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i64>,
) -> ApiResult<MissionDeleteRes> {
    let mission = db.delete_mission(path.into_inner())?;

    Ok(ApiResponse::Ok(MissionDeleteRes {
        message: "Mission deleted".to_string(),
        mission,
    }))
}
