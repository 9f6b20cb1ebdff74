//! Tenant records: enterprises and the employee links attaching users to them.

use serde::Serialize;

use super::{EmployeeId, EnterpriseId, UserId, UserName};

/// Organisation that groups users.
///
/// ## Invariants
/// - Every enterprise has exactly one owning user.
/// - Owner signup creates exactly one enterprise for the new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    id: EnterpriseId,
    name: String,
    owner_user_id: UserId,
}

impl Enterprise {
    /// Build an enterprise record.
    pub fn new(id: EnterpriseId, name: impl Into<String>, owner_user_id: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            owner_user_id,
        }
    }

    /// Create the enterprise implicitly owned by a freshly signed-up owner.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Enterprise, UserId, UserName};
    ///
    /// let owner = UserId::random();
    /// let name = UserName::new("Ana Silva").expect("valid name");
    /// let enterprise = Enterprise::for_owner(owner, &name);
    /// assert_eq!(enterprise.name(), "Enterprise of Ana Silva");
    /// assert_eq!(enterprise.owner_user_id(), &owner);
    /// ```
    pub fn for_owner(owner_user_id: UserId, owner_name: &UserName) -> Self {
        Self::new(
            EnterpriseId::random(),
            format!("Enterprise of {owner_name}"),
            owner_user_id,
        )
    }

    /// Stable enterprise identifier.
    pub fn id(&self) -> &EnterpriseId {
        &self.id
    }

    /// Enterprise display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Identifier of the owning user.
    pub fn owner_user_id(&self) -> &UserId {
        &self.owner_user_id
    }
}

/// Link between a non-owner user and an existing enterprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    enterprise_id: EnterpriseId,
    user_id: UserId,
}

impl Employee {
    /// Build an employee link record.
    pub fn new(id: EmployeeId, enterprise_id: EnterpriseId, user_id: UserId) -> Self {
        Self {
            id,
            enterprise_id,
            user_id,
        }
    }

    /// Link `user_id` to `enterprise_id` under a fresh identifier.
    pub fn link(enterprise_id: EnterpriseId, user_id: UserId) -> Self {
        Self::new(EmployeeId::random(), enterprise_id, user_id)
    }

    /// Stable employee link identifier.
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Enterprise the user works for.
    pub fn enterprise_id(&self) -> &EnterpriseId {
        &self.enterprise_id
    }

    /// The employed user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
