//! UUID-backed identifiers for identity records.
//!
//! Every persisted record carries its own identifier newtype so a user id can
//! never be passed where an enterprise id is expected.

use std::fmt;

use uuid::Uuid;

/// Errors returned when parsing an identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    /// Input was empty.
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    /// Input was not a well-formed UUID.
    #[error("{kind} must be a valid UUID")]
    Invalid { kind: &'static str },
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Parse an identifier from its textual UUID form.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                let raw = id.as_ref();
                if raw.is_empty() {
                    return Err(IdentifierValidationError::Empty { kind: $kind });
                }
                if raw.trim() != raw {
                    return Err(IdentifierValidationError::Invalid { kind: $kind });
                }
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| IdentifierValidationError::Invalid { kind: $kind })
            }

            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_identifier!(
    /// Stable user identifier.
    UserId,
    "user id"
);
define_identifier!(
    /// Stable enterprise identifier.
    EnterpriseId,
    "enterprise id"
);
define_identifier!(
    /// Identifier of an employee link between a user and an enterprise.
    EmployeeId,
    "employee id"
);
define_identifier!(
    /// Identifier of an authorisation group.
    GroupId,
    "group id"
);
define_identifier!(
    /// Identifier of a group-permission association.
    GroupPermissionId,
    "group permission id"
);
define_identifier!(
    /// Identifier of a user-group association.
    UserGroupId,
    "user group id"
);
