//! Diesel schema for message record persistence.

diesel::table! {
    /// Message records.
    #[sql_name = "rmqDemo"]
    rmq_demo (id) {
        /// Identity primary key.
        id -> Int4,
        /// Message payload.
        message -> Nullable<Text>,
    }
}
