//! Lesson completion and the aggregates that follow from it.

use crate::achievements;
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::instrument;
use uuid::Uuid;
use wisemind_db::util::{FlattenTransactionResultExt, is_unique_violation};
use wisemind_db::{lesson, module, user};
use wisemind_entity::lesson::Model as Lesson;
use wisemind_entity::module::Model as Module;
use wisemind_entity::user::Model as User;
use wisemind_model::completion::CompletionResult;
use wisemind_model::progress::percentage;

pub mod error;

pub use error::ProgressError;

/// Marks `lesson_id` as completed by `user_id` and updates every aggregate in
/// one transaction.
///
/// Completing a lesson twice is not an error: the second call reports the
/// current aggregates and changes nothing. This also holds when two calls race
/// past the duplicate check, since the loser's transaction rolls back.
#[instrument(skip(conn))]
pub async fn complete_lesson<C>(conn: &C, user_id: Uuid, lesson_id: &str) -> Result<CompletionResult, ProgressError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let user = user::Query::find_user_by_id(conn, user_id)
        .await?
        .ok_or(ProgressError::UserNotFound(user_id))?;
    let (lesson, module) = lesson::Query::find_with_module(conn, lesson_id)
        .await?
        .ok_or_else(|| ProgressError::LessonNotFound(lesson_id.to_owned()))?;
    let module = module.ok_or_else(|| DbErr::RecordNotFound(format!("module of lesson {lesson_id} not found")))?;

    if lesson::completed::Query::find(conn, user_id, lesson_id).await?.is_some() {
        tracing::debug!(%user_id, lesson_id, "lesson was already completed");
        return current_state(conn, &user, &lesson).await;
    }

    let completing = lesson.clone();
    let res = conn
        .transaction(|txn| Box::pin(async move { apply_completion(txn, user_id, completing, module).await }))
        .await
        .flatten_res();
    let result = match res {
        // a concurrent call inserted the pair after the check above
        Err(ProgressError::Database(error)) if is_unique_violation(&error) => {
            tracing::debug!(%user_id, lesson_id, "lesson was completed concurrently");
            let user = user::Query::find_user_by_id(conn, user_id)
                .await?
                .ok_or(ProgressError::UserNotFound(user_id))?;
            return current_state(conn, &user, &lesson).await;
        }
        res => res.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, %user_id, lesson_id, "completion was rolled back");
        })?,
    };

    tracing::info!(
        %user_id,
        lesson_id,
        module_progress = result.module_progress,
        overall_progress = result.overall_progress,
        "lesson completed"
    );
    Ok(result)
}

async fn apply_completion(
    txn: &DatabaseTransaction,
    user_id: Uuid,
    lesson: Lesson,
    module: Module,
) -> Result<CompletionResult, ProgressError> {
    lesson::completed::Mutation::create(txn, user_id, lesson.id.clone()).await?;
    user::Mutation::add_xp(txn, user_id, lesson.xp_reward).await?;

    let module_progress = module_progress(txn, user_id, &module.id).await?;
    module::progress::Mutation::upsert(txn, user_id, module.id.clone(), module_progress).await?;

    let is_module_complete = module_progress == 100;
    let mut unlocked_module = None;
    if is_module_complete {
        if let Some(next) = module::Query::find_next(txn, module.order).await? {
            module::unlock::Mutation::unlock(txn, user_id, next.id.clone()).await?;
            tracing::debug!(%user_id, module = %next.id, "module unlocked");
            unlocked_module = Some(next.id);
        }
    }

    let overall_progress = overall_progress(txn, user_id).await?;
    let user = user::Mutation::update_user_overall_progress(txn, user_id, overall_progress).await?;

    let new_achievements =
        achievements::award_for_completion(txn, user_id, &module.id, module_progress, overall_progress).await?;

    Ok(CompletionResult {
        success: true,
        was_already_completed: false,
        lesson_id: lesson.id,
        module_id: module.id,
        xp_earned: lesson.xp_reward,
        new_total_xp: user.xp_points,
        module_progress,
        overall_progress,
        is_module_complete,
        unlocked_module,
        new_achievements,
    })
}

async fn current_state<C: ConnectionTrait>(
    conn: &C,
    user: &User,
    lesson: &Lesson,
) -> Result<CompletionResult, ProgressError> {
    let module_progress = module::progress::Query::find(conn, user.id, &lesson.module_id)
        .await?
        .map_or(0, |progress| progress.progress);
    Ok(CompletionResult {
        success: true,
        was_already_completed: true,
        lesson_id: lesson.id.clone(),
        module_id: lesson.module_id.clone(),
        xp_earned: 0,
        new_total_xp: user.xp_points,
        module_progress,
        overall_progress: user.overall_progress,
        is_module_complete: module_progress == 100,
        unlocked_module: None,
        new_achievements: vec![],
    })
}

/// Share of the module's lessons the user completed. A module without lessons is at 0.
pub async fn module_progress<C: ConnectionTrait>(conn: &C, user_id: Uuid, module_id: &str) -> Result<i32, DbErr> {
    let completed = lesson::completed::Query::count_for_user_in_module(conn, user_id, module_id).await?;
    let total = lesson::Query::count_for_module(conn, module_id).await?;
    Ok(percentage(completed, total))
}

/// Share of the whole catalog the user completed.
pub async fn overall_progress<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<i32, DbErr> {
    let completed = lesson::completed::Query::count_for_user(conn, user_id).await?;
    let total = lesson::Query::count_all(conn).await?;
    Ok(percentage(completed, total))
}
