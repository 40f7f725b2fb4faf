use std::ops::{Deref, DerefMut};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{Sqlite, SqliteConnection, pool::PoolConnection};

use crate::{db::DbPool, error::AppError};

/// A pooled connection scoped to one request.
///
/// Acquired when the handler's arguments are extracted and handed back to the
/// pool when the value is dropped, whichever way the handler exits.
#[derive(Debug)]
pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
    pub async fn acquire(pool: &DbPool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(Self(conn))
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    DbPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);
        Self::acquire(&pool).await
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
