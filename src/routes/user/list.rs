use std::sync::Arc;

use actix_web::{get, web};

use crate::store::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("")]
pub async fn list(db: web::Data<Arc<MemoryService>>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::Ok(db.list_users()))
}
