use crate::achievements;
use chrono::NaiveDate;
use sea_orm::{DbErr, TransactionTrait};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;
use wisemind_db::user;
use wisemind_db::util::FlattenTransactionResultExt;
use wisemind_entity::user::Model as User;
use wisemind_model::streak::next_streak;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub user: User,
    pub new_achievements: Vec<String>,
}

/// Updates the login streak of the user for a login on `today`.
#[instrument(skip(conn))]
pub async fn record_login<C: TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<LoginOutcome, LoginError> {
    conn.transaction(|txn| {
        Box::pin(async move {
            let user = user::Query::find_user_by_id(txn, user_id)
                .await?
                .ok_or(LoginError::UserNotFound(user_id))?;
            let streak = next_streak(user.streak, user.last_login, today);
            let user = user::Mutation::update_user_login(txn, user_id, streak, today).await?;
            let new_achievements = achievements::award_for_streak(txn, user_id, streak).await?;
            tracing::debug!(%user_id, streak, "login recorded");
            Ok::<_, LoginError>(LoginOutcome { user, new_achievements })
        })
    })
    .await
    .flatten_res()
}
