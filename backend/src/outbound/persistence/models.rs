//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{employees, enterprises, users};
use crate::domain::{
    Email, Employee, Enterprise, PasswordHash, User, UserAccount, UserId, UserName,
    UserValidationError,
};

/// Row struct for reading credentials and profile from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_owner: bool,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let user = User::new(
            UserId::from(row.id),
            UserName::new(row.name)?,
            Email::new(row.email)?,
            row.is_owner,
        );
        Ok(UserAccount::new(user, PasswordHash::new(row.password_hash)))
    }
}

/// Insertable struct for creating user records. `created_at` is filled by
/// the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub is_owner: bool,
}

impl<'a> NewUserRow<'a> {
    pub fn new(user: &'a User, password_hash: &'a PasswordHash) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
            password_hash: password_hash.as_str(),
            is_owner: user.is_owner(),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = enterprises)]
pub(crate) struct NewEnterpriseRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub owner_user_id: Uuid,
}

impl<'a> From<&'a Enterprise> for NewEnterpriseRow<'a> {
    fn from(enterprise: &'a Enterprise) -> Self {
        Self {
            id: *enterprise.id().as_uuid(),
            name: enterprise.name(),
            owner_user_id: *enterprise.owner_user_id().as_uuid(),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub user_id: Uuid,
}

impl From<&Employee> for NewEmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: *employee.id().as_uuid(),
            enterprise_id: *employee.enterprise_id().as_uuid(),
            user_id: *employee.user_id().as_uuid(),
        }
    }
}
