//! Identity records keyed by email.

use crate::repositories::row;
use crate::Result as DbErrorResult;

use st_core::{DeleteResult, Identity, InsertResult, Role, SellerStatus, UpdateResult};

use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, name, role, status, created_at";

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: Option<String>,
    role: Option<String>,
    status: Option<String>,
    created_at: i64,
}

impl TryFrom<UserRow> for Identity {
    type Error = crate::DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(Identity {
            id: row::uuid(&r.id, "users.id")?,
            email: r.email,
            name: r.name,
            role: row::parsed_opt(r.role.as_deref(), "users.role")?,
            status: row::parsed_opt(r.status.as_deref(), "users.status")?,
            created_at: row::timestamp(r.created_at, "users.created_at")?,
        })
    }
}

/// Filter for listing identities. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub status: Option<SellerStatus>,
}

impl UserFilter {
    pub fn by_role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. A second registration for the same email is
    /// acknowledged but skipped, keeping one record per email.
    pub async fn insert(&self, identity: &Identity) -> DbErrorResult<InsertResult> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, email, name, role, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.name)
        .bind(identity.role.map(|r| r.as_str()))
        .bind(identity.status.map(|s| s.as_str()))
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            log::debug!("Identity {} already registered", identity.email);
            return Ok(InsertResult::skipped());
        }

        Ok(InsertResult::inserted(identity.id))
    }

    /// Insert the identity, or overwrite the role of an existing record with
    /// the same email. Only sellers keep a status.
    pub async fn ensure_role(&self, identity: &Identity) -> DbErrorResult<UpdateResult> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, email, name, role, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(email) DO UPDATE SET
                    role = excluded.role,
                    status = CASE
                        WHEN excluded.role = 'Seller' THEN COALESCE(users.status, excluded.status)
                        ELSE NULL
                    END
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.name)
        .bind(identity.role.map(|r| r.as_str()))
        .bind(identity.status.map(|s| s.as_str()))
        .bind(identity.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(UpdateResult::new(result.rows_affected()))
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Identity::try_from).transpose()
    }

    pub async fn find(&self, filter: &UserFilter) -> DbErrorResult<Vec<Identity>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE 1 = 1"));

        if let Some(role) = filter.role {
            query.push(" AND role = ").push_bind(role.as_str());
        }
        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        query.push(" ORDER BY created_at ASC");

        let rows = query
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Identity::try_from).collect()
    }

    /// Set the verification status of a seller. Non-seller records are not matched.
    pub async fn set_seller_status(
        &self,
        id: Uuid,
        status: SellerStatus,
    ) -> DbErrorResult<UpdateResult> {
        let result = sqlx::query("UPDATE users SET status = ? WHERE id = ? AND role = ?")
            .bind(status.as_str())
            .bind(id.to_string())
            .bind(Role::Seller.as_str())
            .execute(&self.pool)
            .await?;

        Ok(UpdateResult::new(result.rows_affected()))
    }

    /// Change the role of a record. A record becoming a seller starts as
    /// `pending` unless it already carries a status; any other role clears it.
    pub async fn set_role(&self, id: Uuid, role: Option<Role>) -> DbErrorResult<UpdateResult> {
        let role_str = role.map(|r| r.as_str());
        let result = sqlx::query(
            r#"
                UPDATE users
                SET role = ?,
                    status = CASE WHEN ? = 'Seller' THEN COALESCE(status, 'pending') ELSE NULL END
                WHERE id = ?
            "#,
        )
        .bind(role_str)
        .bind(role_str)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(UpdateResult::new(result.rows_affected()))
    }

    /// Delete a record only if it currently holds `role`
    pub async fn delete_with_role(&self, id: Uuid, role: Role) -> DbErrorResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND role = ?")
            .bind(id.to_string())
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
