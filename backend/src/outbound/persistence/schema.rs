//! Diesel table definitions for the identity schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `email` carries a unique constraint named
    /// `users_email_key`.
    users (id) {
        id -> Uuid,
        /// Display name, stored trimmed.
        name -> Varchar,
        email -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        is_owner -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Enterprises created by owner signups.
    enterprises (id) {
        id -> Uuid,
        name -> Varchar,
        owner_user_id -> Uuid,
    }
}

diesel::table! {
    /// Links between employee users and their enterprise.
    employees (id) {
        id -> Uuid,
        enterprise_id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Permission groups. `enterprise_id` references the owning user.
    groups (id) {
        id -> Uuid,
        name -> Varchar,
        enterprise_id -> Uuid,
    }
}

diesel::table! {
    group_permissions (id) {
        id -> Uuid,
        group_id -> Uuid,
        permission -> Varchar,
    }
}

diesel::table! {
    user_groups (id) {
        id -> Uuid,
        user_id -> Uuid,
        group_id -> Uuid,
    }
}

diesel::joinable!(enterprises -> users (owner_user_id));
diesel::joinable!(employees -> enterprises (enterprise_id));
diesel::joinable!(employees -> users (user_id));
diesel::joinable!(groups -> users (enterprise_id));
diesel::joinable!(group_permissions -> groups (group_id));
diesel::joinable!(user_groups -> groups (group_id));
diesel::joinable!(user_groups -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    enterprises,
    employees,
    groups,
    group_permissions,
    user_groups,
);
