use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains("UNIQUE constraint failed") {
                DomainError::Conflict("unique constraint violated".into())
            } else if message.contains("FOREIGN KEY constraint failed") {
                DomainError::NotFound("referenced record not found".into())
            } else {
                DomainError::Persistence(message.to_string())
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
