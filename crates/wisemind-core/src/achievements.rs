use sea_orm::{ConnectionTrait, DbErr};
use std::collections::HashSet;
use uuid::Uuid;
use wisemind_db::achievement;
use wisemind_model::achievement::{DBT_GRADUATE, FIRST_LESSON, THREE_DAY_STREAK};
use wisemind_model::streak::STREAK_GOAL;

/// Awards every candidate that exists in the catalog and is not yet earned.
/// Returns the ids that were newly earned.
async fn award_new<C: ConnectionTrait>(conn: &C, user_id: Uuid, candidates: Vec<String>) -> Result<Vec<String>, DbErr> {
    if candidates.is_empty() {
        return Ok(vec![]);
    }
    let catalog: HashSet<String> = achievement::Query::all(conn)
        .await?
        .into_iter()
        .map(|achievement| achievement.id)
        .collect();
    let earned: HashSet<String> = achievement::user_achievement::Query::earned_ids(conn, user_id)
        .await?
        .into_iter()
        .collect();

    let mut awarded = vec![];
    for id in candidates {
        if !catalog.contains(&id) || earned.contains(&id) || awarded.contains(&id) {
            continue;
        }
        achievement::user_achievement::Mutation::award(conn, user_id, id.clone()).await?;
        tracing::info!(%user_id, achievement = %id, "achievement earned");
        awarded.push(id);
    }
    Ok(awarded)
}

pub async fn award_for_completion<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    module_id: &str,
    module_progress: i32,
    overall_progress: i32,
) -> Result<Vec<String>, DbErr> {
    let mut candidates = vec![FIRST_LESSON.to_owned()];
    if module_progress >= 100 {
        candidates.extend(
            achievement::Query::for_module(conn, module_id)
                .await?
                .into_iter()
                .map(|achievement| achievement.id),
        );
    }
    if overall_progress >= 100 {
        candidates.push(DBT_GRADUATE.to_owned());
    }
    award_new(conn, user_id, candidates).await
}

pub async fn award_for_streak<C: ConnectionTrait>(conn: &C, user_id: Uuid, streak: i32) -> Result<Vec<String>, DbErr> {
    if streak < STREAK_GOAL {
        return Ok(vec![]);
    }
    award_new(conn, user_id, vec![THREE_DAY_STREAK.to_owned()]).await
}
