//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate them
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Int4,
        login -> Varchar,
        username -> Varchar,
        avatar_url -> Varchar,
        /// Canonical role name: `requester` or `worker`.
        role -> Varchar,
    }
}

diesel::table! {
    /// Annotation experiments.
    experiments (id) {
        id -> Int4,
        name -> Text,
        description -> Text,
    }
}

diesel::table! {
    /// File pairs assigned to users within an experiment.
    assignments (id) {
        id -> Int4,
        user_id -> Int4,
        pair_id -> Int4,
        experiment_id -> Int4,
        /// `NULL` until the user answers.
        answer -> Nullable<Text>,
        duration -> Int4,
    }
}

diesel::joinable!(assignments -> users (user_id));
diesel::joinable!(assignments -> experiments (experiment_id));

diesel::allow_tables_to_appear_in_same_query!(users, experiments, assignments);
