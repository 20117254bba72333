use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use store::{
    EventFilter, Registration, RegistrationForm, RegistrationId, RegistrationStore, StoreError,
};

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, mobile, event, password, created_at FROM registrations";

/// Database backed registration row
#[derive(sqlx::FromRow)]
struct SqlRegistration {
    id: i64,
    name: String,
    email: String,
    mobile: String,
    event: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl SqlRegistration {
    fn into_registration(self) -> Registration {
        Registration {
            id: self.id,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            event: self.event,
            password: self.password,
            created_at: self.created_at,
        }
    }
}

/// [`RegistrationStore`] over a Postgres pool.
///
/// Every call checks out its own connection and hands it back when the
/// connection guard drops, on success and error alike.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::backend)
    }
}

impl RegistrationStore for PgStore {
    async fn insert(&self, form: &RegistrationForm) -> Result<RegistrationId, StoreError> {
        let mut conn = self.connection().await?;
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO registrations (name, email, mobile, event, password)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.mobile)
        .bind(&form.event)
        .bind(&form.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(StoreError::backend)?;
        Ok(id)
    }

    async fn update(&self, id: RegistrationId, form: &RegistrationForm) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        sqlx::query(
            "UPDATE registrations
             SET name = $1, email = $2, mobile = $3, event = $4, password = $5
             WHERE id = $6",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.mobile)
        .bind(&form.event)
        .bind(&form.password)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(StoreError::backend)?;
        Ok(())
    }

    async fn delete(&self, id: RegistrationId) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(StoreError::backend)?;
        Ok(())
    }

    async fn get(&self, id: RegistrationId) -> Result<Option<Registration>, StoreError> {
        let mut conn = self.connection().await?;
        let row: Option<SqlRegistration> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(StoreError::backend)?;
        Ok(row.map(SqlRegistration::into_registration))
    }

    async fn list(&self) -> Result<Vec<Registration>, StoreError> {
        let mut conn = self.connection().await?;
        let rows: Vec<SqlRegistration> = sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&mut *conn)
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(SqlRegistration::into_registration).collect())
    }

    async fn list_recent(&self, filter: &EventFilter) -> Result<Vec<Registration>, StoreError> {
        let mut conn = self.connection().await?;
        let rows: Vec<SqlRegistration> = match filter {
            EventFilter::All => {
                sqlx::query_as::<_, SqlRegistration>(&format!(
                    "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
                ))
                .fetch_all(&mut *conn)
                .await
            }
            EventFilter::Event(event) => {
                sqlx::query_as::<_, SqlRegistration>(&format!(
                    "{SELECT_COLUMNS} WHERE event = $1 ORDER BY created_at DESC, id DESC"
                ))
                .bind(event)
                .fetch_all(&mut *conn)
                .await
            }
        }
        .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(SqlRegistration::into_registration).collect())
    }
}
