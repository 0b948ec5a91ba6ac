use serde::{Deserialize, Serialize};

use crate::store::table::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub description: Option<String>,
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Create/update body. `id` never comes from the client; an `id` key in the
/// body is ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct RUserUpsert {
    pub name: String,
    pub job: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UserDeleteRes {
    pub message: String,
    pub user: User,
}
