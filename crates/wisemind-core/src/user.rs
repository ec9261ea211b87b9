use futures_util::try_join;
use sea_orm::{ConnectionTrait, DbErr};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use wisemind_db::{achievement, lesson, module, user};
use wisemind_model::permission::{Role, permissions_for};
use wisemind_model::user::{ModuleProgress, User};
use wisemind_model_tools::convert::IntoModel;

/// Loads the full user aggregate. Every module of the catalog is listed with
/// its progress and every achievement with its earned flag.
pub async fn load_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<User>, DbErr> {
    let Some(user) = user::Query::find_user_by_id(conn, user_id).await? else {
        return Ok(None);
    };

    let (achievements, records, modules, progress, unlocked, completed_lessons) = try_join!(
        achievement::Query::all(conn),
        achievement::user_achievement::Query::all_for_user(conn, user_id),
        module::Query::all_ordered(conn),
        module::progress::Query::all_for_user(conn, user_id),
        module::unlock::Query::unlocked_ids(conn, user_id),
        lesson::completed::Query::completed_ids(conn, user_id),
    )
    .inspect_err(|error| {
        tracing::error!(error = error as &dyn std::error::Error, %user_id, "error loading user aggregate");
    })?;

    let mut records: HashMap<_, _> = records
        .into_iter()
        .map(|record| (record.achievement_id.clone(), record))
        .collect();
    let progress: HashMap<_, _> = progress
        .into_iter()
        .map(|progress| (progress.module_id, progress.progress))
        .collect();
    let unlocked: HashSet<_> = unlocked.into_iter().collect();

    let role: Role = user.role.into_model();
    Ok(Some(User {
        id: user.id,
        name: user.name,
        streak: user.streak,
        last_login: user.last_login,
        skills_learned: user.skills_learned,
        xp_points: user.xp_points,
        overall_progress: user.overall_progress,
        role,
        permissions: permissions_for(role).to_vec(),
        created_at: user.created_at,
        achievements: achievements
            .into_iter()
            .map(|achievement| {
                let record = records.remove(&achievement.id);
                (achievement, record).into_model()
            })
            .collect(),
        module_progress: modules
            .into_iter()
            .map(|module| ModuleProgress {
                progress: progress.get(&module.id).copied().unwrap_or_default(),
                unlocked: module.unlocked || unlocked.contains(&module.id),
                module_id: module.id,
                title: module.title,
            })
            .collect(),
        completed_lessons,
    }))
}
