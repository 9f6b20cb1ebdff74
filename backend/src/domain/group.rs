//! Authorisation group records.
//!
//! Groups, their permissions and user memberships are persisted so the
//! schema is complete, but no authentication behaviour reads them yet.

use super::{GroupId, GroupPermissionId, UserGroupId, UserId};

/// Named group of users.
///
/// The owning reference points at the user that owns the enterprise the
/// group belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    name: String,
    enterprise_owner_id: UserId,
}

impl Group {
    /// Build a group record.
    pub fn new(id: GroupId, name: impl Into<String>, enterprise_owner_id: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            enterprise_owner_id,
        }
    }

    /// Stable group identifier.
    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Group name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Owner of the enterprise this group belongs to.
    pub fn enterprise_owner_id(&self) -> &UserId {
        &self.enterprise_owner_id
    }
}

/// Grants a named permission to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPermission {
    id: GroupPermissionId,
    group_id: GroupId,
    permission: String,
}

impl GroupPermission {
    /// Build a group-permission association.
    pub fn new(id: GroupPermissionId, group_id: GroupId, permission: impl Into<String>) -> Self {
        Self {
            id,
            group_id,
            permission: permission.into(),
        }
    }

    /// Stable association identifier.
    pub fn id(&self) -> &GroupPermissionId {
        &self.id
    }

    /// Group receiving the permission.
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// Permission code name.
    pub fn permission(&self) -> &str {
        self.permission.as_str()
    }
}

/// Places a user in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    id: UserGroupId,
    user_id: UserId,
    group_id: GroupId,
}

impl UserGroup {
    /// Build a user-group association.
    pub fn new(id: UserGroupId, user_id: UserId, group_id: GroupId) -> Self {
        Self {
            id,
            user_id,
            group_id,
        }
    }

    /// Stable association identifier.
    pub fn id(&self) -> &UserGroupId {
        &self.id
    }

    /// Member user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Group the user belongs to.
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }
}
