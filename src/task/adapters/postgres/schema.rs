//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, trashed or not.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Trimmed title.
        #[max_length = 100]
        title -> Varchar,
        /// Trimmed description, empty when absent.
        #[max_length = 500]
        description -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Soft-delete flag.
        is_deleted -> Bool,
        /// Soft-delete timestamp.
        deleted_at -> Nullable<Timestamptz>,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
