use std::sync::Arc;

use actix_web::{get, web};

use crate::store::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

#[get("/{id}")]
pub async fn get(db: web::Data<Arc<MemoryService>>, path: web::Path<i64>) -> ApiResult<User> {
    Ok(ApiResponse::Ok(db.get_user(path.into_inner())?))
}
