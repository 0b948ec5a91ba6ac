use std::sync::Arc;

use actix_web::{put, web};

use crate::store::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpsert, User};

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i64>,
    body: web::Json<RUserUpsert>,
) -> ApiResult<User> {
    Ok(ApiResponse::Ok(
        db.update_user(path.into_inner(), body.into_inner())?,
    ))
}
