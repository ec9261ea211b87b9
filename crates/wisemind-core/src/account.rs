//! First sign-in of an external identity.

use sea_orm::prelude::*;
use sea_orm::{TransactionError, TransactionTrait};
use thiserror::Error;
use wisemind_db::util::FlattenTransactionResultExt;
use wisemind_entity::access_tokens::Model as AccessToken;
use wisemind_entity::user::{Model as User, Role};

#[derive(Debug, Error)]
enum UserCreationError {
    #[error(transparent)]
    DbErr(#[from] DbErr),

    #[error("User exists")]
    UserExists { user_id: Uuid },
}

/// Resolves `subject` to a user id, creating the user on first sight.
pub async fn create_user_id<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    subject: &str,
    name: &str,
    role: Role,
) -> Result<Uuid, DbErr> {
    if let Some(mapping) = wisemind_db::identity_mapping::Query::find_by_subject(conn, subject).await? {
        return Ok(mapping.user_id);
    }
    let subject = subject.to_owned();
    let name = name.to_owned();

    let res = conn
        .transaction(|txn| {
            Box::pin(async move {
                let user = wisemind_db::user::Mutation::create_user(txn, name, role).await?;
                let mapping =
                    wisemind_db::identity_mapping::Mutation::create_identity_mapping(txn, user.id, subject).await?;
                if user.id == mapping.user_id {
                    Result::<_, UserCreationError>::Ok(user.id)
                } else {
                    Err(UserCreationError::UserExists {
                        user_id: mapping.user_id,
                    })
                }
            })
        })
        .await;
    match res {
        Ok(user_id) => {
            tracing::info!(%user_id, "created user");
            Ok(user_id)
        }
        // lost a race against another sign-in, the new user was rolled back
        Err(TransactionError::Transaction(UserCreationError::UserExists { user_id })) => Ok(user_id),
        Err(TransactionError::Connection(error) | TransactionError::Transaction(UserCreationError::DbErr(error))) => {
            Err(error)
        }
    }
}

/// Signs in `subject` and returns its user together with an access token.
pub async fn sign_in<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    subject: &str,
    name: &str,
    role: Role,
) -> Result<(User, AccessToken), DbErr> {
    let user_id = create_user_id(conn, subject, name, role).await?;
    conn.transaction(|txn| {
        Box::pin(async move {
            let user = wisemind_db::user::Query::find_user_by_id(txn, user_id)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("user missing after sign in".to_owned()))?;
            let token = wisemind_db::access_tokens::Mutation::create_access_token(txn, user_id).await?;
            Ok::<_, DbErr>((user, token))
        })
    })
    .await
    .flatten_res()
}
