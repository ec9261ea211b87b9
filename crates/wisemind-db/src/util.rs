use sea_orm::{DbErr, SqlErr, TransactionError};
use std::error::Error;

pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

/// Whether `err` comes from a primary key or unique constraint.
#[must_use]
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
