use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, QueryBuilder};

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User, UserChanges, UserFilter},
    repositories::UserRepository,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let mut query = QueryBuilder::new("SELECT id, name, email FROM users WHERE true");
        if let Some(name) = filter.name_contains.as_deref() {
            query.push(" AND strpos(name, ").push_bind(name).push(") > 0");
        }
        if let Some(email) = filter.email_equals.as_deref() {
            query.push(" AND email = ").push_bind(email);
        }
        query.push(" ORDER BY id");

        let records = query
            .build_query_as::<UserRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(records.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        Ok(record.map(User::from))
    }

    async fn create(&self, fields: NewUser) -> Result<User, DomainError> {
        // The unique index on email surfaces concurrent duplicates here even
        // when the pre-write check passed.
        let record = sqlx::query_as::<_, UserRecord>(
            r#"INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email"#,
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| write_error(err, &fields.email))?;
        Ok(record.into())
    }

    async fn update(&self, id: i64, fields: UserChanges) -> Result<User, DomainError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"UPDATE users SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email"#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| write_error(err, &fields.email))?;
        record
            .map(User::from)
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }

    async fn delete(&self, id: i64) -> Result<User, DomainError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"DELETE FROM users WHERE id = $1 RETURNING id, name, email"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;
        record
            .map(User::from)
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    name: Option<String>,
    email: String,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

fn storage_error(err: sqlx::Error) -> DomainError {
    DomainError::Other(err.into())
}

fn write_error(err: sqlx::Error, email: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::AlreadyExists(format!("email {email}"))
        }
        _ => storage_error(err),
    }
}
