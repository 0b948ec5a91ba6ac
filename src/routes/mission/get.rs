use std::sync::Arc;

use actix_web::{get, web};

use crate::store::memory_service::MemoryService;
use crate::types::mission::Mission;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get(db: web::Data<Arc<MemoryService>>, path: web::Path<i64>) -> ApiResult<Mission> {
    Ok(ApiResponse::Ok(db.get_mission(path.into_inner())?))
}
