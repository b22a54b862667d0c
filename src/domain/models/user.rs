use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

/// Fields for a create; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
}

/// Replacement fields for an update. Both fields overwrite the stored
/// values; a `None` name clears it.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub name_contains: Option<String>,
    pub email_equals: Option<String>,
}
