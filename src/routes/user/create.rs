use std::sync::Arc;

use actix_web::{post, web};

use crate::store::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpsert, User};

#[post("")]
pub async fn create(
    db: web::Data<Arc<MemoryService>>,
    body: web::Json<RUserUpsert>,
) -> ApiResult<User> {
    Ok(ApiResponse::Ok(db.create_user(body.into_inner())))
}
