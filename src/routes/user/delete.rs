use std::sync::Arc;

use actix_web::{delete, web};

use crate::store::memory_service::MemoryService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserDeleteRes;

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<i64>,
) -> ApiResult<UserDeleteRes> {
    let user = db.delete_user(path.into_inner())?;

    Ok(ApiResponse::Ok(UserDeleteRes {
        message: "User deleted".to_string(),
        user,
    }))
}
