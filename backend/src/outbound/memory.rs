//! In-process identity store.
//!
//! Backs the server when no database URL is configured and serves as a
//! realistic fake in tests. All tables sit behind one mutex so a
//! registration is checked and applied under a single guard, which gives the
//! same all-or-nothing visibility as a database transaction.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AccountRegistration, IdentityStore, IdentityStoreError, Membership};
use crate::domain::{Email, Employee, Enterprise, EnterpriseId, UserAccount, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, UserAccount>,
    emails: HashMap<Email, UserId>,
    enterprises: HashMap<EnterpriseId, Enterprise>,
    employees: Vec<Employee>,
}

impl Tables {
    fn check(&self, registration: &AccountRegistration) -> Result<(), IdentityStoreError> {
        if self.emails.contains_key(registration.user().email()) {
            return Err(IdentityStoreError::duplicate_email());
        }
        if let Membership::Employee(employee) = registration.membership()
            && !self.enterprises.contains_key(employee.enterprise_id())
        {
            return Err(IdentityStoreError::enterprise_not_found(
                employee.enterprise_id().to_string(),
            ));
        }
        Ok(())
    }

    fn apply(&mut self, registration: &AccountRegistration) {
        let user = registration.user();
        self.emails.insert(user.email().clone(), *user.id());
        self.users.insert(
            *user.id(),
            UserAccount::new(user.clone(), registration.password_hash().clone()),
        );
        match registration.membership() {
            Membership::Owner(enterprise) => {
                self.enterprises.insert(*enterprise.id(), enterprise.clone());
            }
            Membership::Employee(employee) => self.employees.push(employee.clone()),
        }
    }
}

/// [`IdentityStore`] keeping every record in memory.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    tables: Mutex<Tables>,
}

impl InMemoryIdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, IdentityStoreError> {
        self.tables
            .lock()
            .map_err(|_| IdentityStoreError::query("identity store lock poisoned"))
    }

    /// Seed an enterprise directly, bypassing signup.
    pub fn insert_enterprise(&self, enterprise: Enterprise) -> Result<(), IdentityStoreError> {
        self.lock()?
            .enterprises
            .insert(*enterprise.id(), enterprise);
        Ok(())
    }

    /// Snapshot of stored user accounts.
    pub fn users(&self) -> Result<Vec<UserAccount>, IdentityStoreError> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    /// Snapshot of stored enterprises.
    pub fn enterprises(&self) -> Result<Vec<Enterprise>, IdentityStoreError> {
        Ok(self.lock()?.enterprises.values().cloned().collect())
    }

    /// Snapshot of stored employee links.
    pub fn employees(&self) -> Result<Vec<Employee>, IdentityStoreError> {
        Ok(self.lock()?.employees.clone())
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserAccount>, IdentityStoreError> {
        let tables = self.lock()?;
        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn user_exists_with_email(&self, email: &Email) -> Result<bool, IdentityStoreError> {
        Ok(self.lock()?.emails.contains_key(email))
    }

    async fn enterprise_exists(&self, id: &EnterpriseId) -> Result<bool, IdentityStoreError> {
        Ok(self.lock()?.enterprises.contains_key(id))
    }

    async fn register_account(
        &self,
        registration: &AccountRegistration,
    ) -> Result<(), IdentityStoreError> {
        let mut tables = self.lock()?;
        tables.check(registration)?;
        tables.apply(registration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordHash, UserName};
    use actix_rt::System;
    use rstest::{fixture, rstest};

    fn owner(email: &str) -> AccountRegistration {
        AccountRegistration::owner(
            UserName::new("Ana Silva").expect("valid name"),
            Email::new(email).expect("valid email"),
            PasswordHash::new("hash"),
        )
    }

    fn employee(email: &str, enterprise_id: EnterpriseId) -> AccountRegistration {
        AccountRegistration::employee(
            UserName::new("Bea").expect("valid name"),
            Email::new(email).expect("valid email"),
            PasswordHash::new("hash"),
            enterprise_id,
        )
    }

    #[fixture]
    fn store() -> InMemoryIdentityStore {
        InMemoryIdentityStore::new()
    }

    #[rstest]
    fn owner_registration_writes_user_and_enterprise(store: InMemoryIdentityStore) {
        let registration = owner("ana@x.com");

        System::new().block_on(async {
            store
                .register_account(&registration)
                .await
                .expect("registration succeeds");
            let found = store
                .find_user_by_email(registration.user().email())
                .await
                .expect("lookup succeeds")
                .expect("user stored");
            assert_eq!(found.user(), registration.user());
        });

        let enterprises = store.enterprises().expect("enterprises");
        assert_eq!(enterprises.len(), 1);
        assert_eq!(enterprises[0].owner_user_id(), registration.user().id());
        assert!(store.employees().expect("employees").is_empty());
    }

    #[rstest]
    fn employee_registration_links_existing_enterprise(store: InMemoryIdentityStore) {
        let boss = owner("ana@x.com");
        let Membership::Owner(enterprise) = boss.membership() else {
            panic!("owner plan");
        };
        let registration = employee("bea@x.com", *enterprise.id());

        System::new().block_on(async {
            store.register_account(&boss).await.expect("owner stored");
            store
                .register_account(&registration)
                .await
                .expect("employee stored");
        });

        let employees = store.employees().expect("employees");
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].user_id(), registration.user().id());
        assert_eq!(store.enterprises().expect("enterprises").len(), 1);
    }

    #[rstest]
    fn duplicate_email_leaves_store_untouched(store: InMemoryIdentityStore) {
        System::new().block_on(async {
            store
                .register_account(&owner("ana@x.com"))
                .await
                .expect("first registration");
            let err = store
                .register_account(&owner("ana@x.com"))
                .await
                .expect_err("duplicate must fail");
            assert_eq!(err, IdentityStoreError::duplicate_email());
        });

        assert_eq!(store.users().expect("users").len(), 1);
        assert_eq!(store.enterprises().expect("enterprises").len(), 1);
    }

    #[rstest]
    fn missing_enterprise_rolls_back_user(store: InMemoryIdentityStore) {
        let missing = EnterpriseId::random();

        System::new().block_on(async {
            let err = store
                .register_account(&employee("bea@x.com", missing))
                .await
                .expect_err("unknown enterprise must fail");
            assert_eq!(
                err,
                IdentityStoreError::enterprise_not_found(missing.to_string())
            );
            let exists = store
                .user_exists_with_email(&Email::new("bea@x.com").expect("valid email"))
                .await
                .expect("lookup succeeds");
            assert!(!exists);
        });

        assert!(store.users().expect("users").is_empty());
        assert!(store.employees().expect("employees").is_empty());
    }

    #[rstest]
    fn seeded_enterprise_is_visible(store: InMemoryIdentityStore) {
        let enterprise = Enterprise::new(EnterpriseId::random(), "Acme", UserId::random());
        let id = *enterprise.id();
        store.insert_enterprise(enterprise).expect("seed");

        let exists = System::new()
            .block_on(async { store.enterprise_exists(&id).await })
            .expect("lookup succeeds");
        assert!(exists);
    }

    #[rstest]
    fn email_lookup_is_exact(store: InMemoryIdentityStore) {
        System::new().block_on(async {
            store
                .register_account(&owner("ana@x.com"))
                .await
                .expect("registration");
            let other_case = store
                .find_user_by_email(&Email::new("ANA@x.com").expect("valid email"))
                .await
                .expect("lookup succeeds");
            assert!(other_case.is_none());
        });
    }
}
