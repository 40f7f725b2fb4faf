use sqlx::SqliteConnection;

use crate::{
    error::{AppError, Result},
    models::user::{User, UserPayload},
};

/// User store for database operations within a single session
pub struct UserStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserStore<'c> {
    /// Create a new UserStore over a borrowed session
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Get a list of all users, in store order
    pub async fn list_users(&mut self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, first_name, last_name, is_admin FROM users")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Insert a new user and return it with the id the store assigned
    pub async fn create_user(&mut self, user: &UserPayload) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, is_admin)
            VALUES (?, ?, ?)
            RETURNING id, first_name, last_name, is_admin
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_admin)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(AppError::Database)?;

        tracing::debug!(id = created.id, "inserted user");
        Ok(created)
    }

    /// Overwrite all mutable fields of an existing user
    pub async fn update_user(&mut self, id: i64, user: &UserPayload) -> Result<User> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, is_admin = ?
            WHERE id = ?
            RETURNING id, first_name, last_name, is_admin
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_admin)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::UserNotFound)?;

        tracing::debug!(id, "updated user");
        Ok(updated)
    }

    /// Delete a user by ID, returning the row as it was before deletion
    pub async fn delete_user(&mut self, id: i64) -> Result<User> {
        let deleted = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = ? RETURNING id, first_name, last_name, is_admin",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(AppError::Database)?
        .ok_or(AppError::UserNotFound)?;

        tracing::debug!(id, "deleted user");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbSession, memory_pool};

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let before = store.list_users().await.unwrap();
        assert!(before.is_empty());

        let created = store
            .create_user(&UserPayload::new("Ada", "Lovelace", true))
            .await
            .unwrap();

        let after = store.list_users().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after, vec![created.clone()]);
        assert_eq!(created.first_name, "Ada");
        assert_eq!(created.last_name, "Lovelace");
        assert!(created.is_admin);
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_id() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let mut payload = UserPayload::new("Grace", "Hopper", false);
        payload.id = Some(42);

        let created = store.create_user(&payload).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let first = store
            .create_user(&UserPayload::new("Alan", "Turing", false))
            .await
            .unwrap();
        store.delete_user(first.id).await.unwrap();

        let second = store
            .create_user(&UserPayload::new("Alan", "Turing", false))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let created = store
            .create_user(&UserPayload::new("Ada", "Lovelace", true))
            .await
            .unwrap();

        let updated = store
            .update_user(created.id, &UserPayload::new("Ada", "Byron", false))
            .await
            .unwrap();

        assert_eq!(
            updated,
            User {
                id: created.id,
                first_name: "Ada".into(),
                last_name: "Byron".into(),
                is_admin: false,
            }
        );
        assert_eq!(store.list_users().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let update = store
            .update_user(99, &UserPayload::new("No", "Body", false))
            .await;
        assert!(matches!(update, Err(AppError::UserNotFound)));

        let delete = store.delete_user(99).await;
        assert!(matches!(delete, Err(AppError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let pool = memory_pool().await;
        let mut session = DbSession::acquire(&pool).await.unwrap();
        let mut store = UserStore::new(&mut session);

        let created = store
            .create_user(&UserPayload::new("Edsger", "Dijkstra", false))
            .await
            .unwrap();

        let deleted = store.delete_user(created.id).await.unwrap();
        assert_eq!(deleted, created);

        let again = store.delete_user(created.id).await;
        assert!(matches!(again, Err(AppError::UserNotFound)));
        assert!(store.list_users().await.unwrap().is_empty());
    }
}
