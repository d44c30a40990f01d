use sea_orm::{DbErr, SqlErr};

/// True when the error comes from a violated unique constraint.
///
/// Falls back to message matching because pooled and mocked connections do not
/// always carry the structured SQLSTATE.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// True when a referenced row does not exist (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}

/// True when the error message names the given column or constraint fragment.
pub fn error_mentions(err: &DbErr, fragment: &str) -> bool {
    err.to_string().to_lowercase().contains(fragment)
}
