//! PostgreSQL-backed `IdentityStore` implementation using Diesel ORM.
//!
//! Registrations run inside a single transaction: the user row is inserted
//! first, then the enterprise or employee row. Any failure rolls the whole
//! transaction back. Constraint violations are translated into the port's
//! domain errors so races with concurrent signups surface the same way as
//! the service's own pre-checks.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{AccountRegistration, IdentityStore, IdentityStoreError, Membership};
use crate::domain::{Email, Employee, Enterprise, EnterpriseId, UserAccount};

use super::models::{NewEmployeeRow, NewEnterpriseRow, NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{employees, enterprises, users};

/// Diesel-backed implementation of the `IdentityStore` port.
#[derive(Clone)]
pub struct DieselIdentityStore {
    pool: DbPool,
}

impl DieselIdentityStore {
    /// Create a new store with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use backend::outbound::persistence::{DbPool, DieselIdentityStore, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
    /// let store = DieselIdentityStore::new(pool);
    /// # let _ = store;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain store errors.
fn map_pool_error(error: PoolError) -> IdentityStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            IdentityStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to domain store errors.
fn map_diesel_error(error: diesel::result::Error) -> IdentityStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info
                .constraint_name()
                .is_some_and(|name| name.contains("email")) =>
        {
            IdentityStoreError::duplicate_email()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            IdentityStoreError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => IdentityStoreError::query(info.message().to_owned()),
        DieselError::NotFound => IdentityStoreError::query("record not found"),
        _ => IdentityStoreError::query(error_message),
    }
}

/// Map a failed registration, resolving foreign key violations on the
/// employee's enterprise reference.
fn map_registration_error(
    error: diesel::result::Error,
    registration: &AccountRegistration,
) -> IdentityStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let (
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info),
        Membership::Employee(employee),
    ) = (&error, registration.membership())
        && info
            .constraint_name()
            .is_some_and(|name| name.contains("enterprise_id"))
    {
        return IdentityStoreError::enterprise_not_found(employee.enterprise_id().to_string());
    }
    map_diesel_error(error)
}

async fn create_user(
    conn: &mut AsyncPgConnection,
    row: &NewUserRow<'_>,
) -> Result<(), diesel::result::Error> {
    diesel::insert_into(users::table)
        .values(row)
        .execute(conn)
        .await
        .map(|_| ())
}

async fn create_enterprise(
    conn: &mut AsyncPgConnection,
    enterprise: &Enterprise,
) -> Result<(), diesel::result::Error> {
    diesel::insert_into(enterprises::table)
        .values(NewEnterpriseRow::from(enterprise))
        .execute(conn)
        .await
        .map(|_| ())
}

async fn create_employee(
    conn: &mut AsyncPgConnection,
    employee: &Employee,
) -> Result<(), diesel::result::Error> {
    diesel::insert_into(employees::table)
        .values(NewEmployeeRow::from(employee))
        .execute(conn)
        .await
        .map(|_| ())
}

#[async_trait]
impl IdentityStore for DieselIdentityStore {
    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserAccount>, IdentityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(UserAccount::try_from)
            .transpose()
            .map_err(|err| IdentityStoreError::query(format!("stored user is invalid: {err}")))
    }

    async fn user_exists_with_email(&self, email: &Email) -> Result<bool, IdentityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            users::table.filter(users::email.eq(email.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn enterprise_exists(&self, id: &EnterpriseId) -> Result<bool, IdentityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            enterprises::table.filter(enterprises::id.eq(id.as_uuid())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn register_account(
        &self,
        registration: &AccountRegistration,
    ) -> Result<(), IdentityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_row = NewUserRow::new(registration.user(), registration.password_hash());
        let membership = registration.membership();

        conn.transaction(|conn| {
            async move {
                create_user(conn, &user_row).await?;
                match membership {
                    Membership::Owner(enterprise) => create_enterprise(conn, enterprise).await,
                    Membership::Employee(employee) => create_employee(conn, employee).await,
                }
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_registration_error(err, registration))?;

        debug!(user_id = %registration.user().id(), "registration committed");
        Ok(())
    }
}
