//! Driven port for the identity store holding users, enterprises and
//! employee links.
//!
//! Signup writes several records that must land together. Rather than
//! exposing a transaction handle, the port accepts an [`AccountRegistration`]
//! describing the whole saga (create the user, then its enterprise or its
//! employee link) and adapters apply it inside one all-or-nothing
//! transaction.

use async_trait::async_trait;

use crate::domain::{
    Email, Employee, Enterprise, EnterpriseId, PasswordHash, User, UserAccount, UserId, UserName,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity store adapters.
    pub enum IdentityStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "identity store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "identity store query failed: {message}",
        /// The storage-level uniqueness constraint on email fired.
        DuplicateEmail => "email is already registered",
        /// An employee link referenced an enterprise that does not exist.
        EnterpriseNotFound { enterprise_id: String } => "enterprise {enterprise_id} does not exist",
    }
}

/// Record created alongside the user during signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    /// The user owns this newly created enterprise.
    Owner(Enterprise),
    /// The user is linked to an existing enterprise.
    Employee(Employee),
}

/// All records written by one signup, applied atomically.
///
/// ## Invariants
/// - An owner registration carries `is_owner = true` and an enterprise whose
///   owner is the new user.
/// - An employee registration carries `is_owner = false` and an employee
///   link whose user is the new user.
///
/// # Examples
/// ```
/// use backend::domain::ports::{AccountRegistration, Membership};
/// use backend::domain::{Email, PasswordHash, UserName};
///
/// let registration = AccountRegistration::owner(
///     UserName::new("Ana Silva").expect("valid name"),
///     Email::new("ana@x.com").expect("valid email"),
///     PasswordHash::new("$argon2id$..."),
/// );
/// assert!(registration.user().is_owner());
/// match registration.membership() {
///     Membership::Owner(enterprise) => {
///         assert_eq!(enterprise.owner_user_id(), registration.user().id());
///     }
///     Membership::Employee(_) => unreachable!("owner registration"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRegistration {
    user: User,
    password_hash: PasswordHash,
    membership: Membership,
}

impl AccountRegistration {
    /// Plan an owner signup: a new owner user and the enterprise it owns.
    pub fn owner(name: UserName, email: Email, password_hash: PasswordHash) -> Self {
        let user = User::new(UserId::random(), name, email, true);
        let enterprise = Enterprise::for_owner(*user.id(), user.name());
        Self {
            user,
            password_hash,
            membership: Membership::Owner(enterprise),
        }
    }

    /// Plan an employee signup: a new non-owner user linked to `enterprise_id`.
    pub fn employee(
        name: UserName,
        email: Email,
        password_hash: PasswordHash,
        enterprise_id: EnterpriseId,
    ) -> Self {
        let user = User::new(UserId::random(), name, email, false);
        let employee = Employee::link(enterprise_id, *user.id());
        Self {
            user,
            password_hash,
            membership: Membership::Employee(employee),
        }
    }

    /// User record to create.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Credential hash stored with the user.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Enterprise or employee record created with the user.
    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// Consume the plan, keeping the user record.
    pub fn into_user(self) -> User {
        self.user
    }
}

/// Persistence port for identity records.
///
/// Adapters must enforce email uniqueness at the storage layer and report a
/// violation as [`IdentityStoreError::DuplicateEmail`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Fetch a user and its credential hash by exact email match.
    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserAccount>, IdentityStoreError>;

    /// Report whether any user already holds `email`.
    async fn user_exists_with_email(&self, email: &Email) -> Result<bool, IdentityStoreError>;

    /// Report whether an enterprise with `id` exists.
    async fn enterprise_exists(&self, id: &EnterpriseId) -> Result<bool, IdentityStoreError>;

    /// Create the user and its enterprise or employee link in one
    /// transaction. Nothing is persisted when any step fails.
    async fn register_account(
        &self,
        registration: &AccountRegistration,
    ) -> Result<(), IdentityStoreError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for registration plans.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn name() -> UserName {
        UserName::new("Bea").expect("valid name")
    }

    #[fixture]
    fn email() -> Email {
        Email::new("bea@x.com").expect("valid email")
    }

    #[rstest]
    fn owner_plan_links_enterprise_to_new_user(name: UserName, email: Email) {
        let registration = AccountRegistration::owner(name, email, PasswordHash::new("h"));

        assert!(registration.user().is_owner());
        let Membership::Owner(enterprise) = registration.membership() else {
            panic!("owner plan must create an enterprise");
        };
        assert_eq!(enterprise.owner_user_id(), registration.user().id());
        assert_eq!(enterprise.name(), "Enterprise of Bea");
    }

    #[rstest]
    fn employee_plan_links_existing_enterprise(name: UserName, email: Email) {
        let company_id = EnterpriseId::random();
        let registration =
            AccountRegistration::employee(name, email, PasswordHash::new("h"), company_id);

        assert!(!registration.user().is_owner());
        let Membership::Employee(employee) = registration.membership() else {
            panic!("employee plan must create an employee link");
        };
        assert_eq!(employee.enterprise_id(), &company_id);
        assert_eq!(employee.user_id(), registration.user().id());
    }

    #[rstest]
    fn store_errors_render_context() {
        let err = IdentityStoreError::enterprise_not_found("abc");
        assert_eq!(err.to_string(), "enterprise abc does not exist");
        assert_eq!(
            IdentityStoreError::duplicate_email().to_string(),
            "email is already registered"
        );
    }
}
