use std::sync::Arc;

use actix_web::{get, web};

use crate::store::memory_service::MemoryService;
use crate::types::mission::Mission;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(db: web::Data<Arc<MemoryService>>) -> ApiResult<Vec<Mission>> {
    Ok(ApiResponse::Ok(db.list_missions()))
}
