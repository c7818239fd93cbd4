//! PostgreSQL-backed [`UserRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed user repository.
///
/// # Examples
///
/// ```rust,no_run
/// use storefront::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/storefront")).await?;
/// let _repository = DieselUserRepository::new(pool);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn query_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        |message| UserPersistenceError::query(message),
        |message| UserPersistenceError::connection(message),
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| {
                map_pool_error(err, |message| UserPersistenceError::connection(message))
            })?;
        let row = NewUserRow::from(user);
        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_update()
            .set((
                users::name.eq(excluded(users::name)),
                users::email.eq(excluded(users::email)),
                users::role.eq(excluded(users::role)),
            ))
            .execute(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| {
                map_pool_error(err, |message| UserPersistenceError::connection(message))
            })?;
        let row = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(query_error)?;
        row.map(User::try_from)
            .transpose()
            .map_err(|message| {
                UserPersistenceError::query(format!("stored user is invalid: {message}"))
            })
    }
}
