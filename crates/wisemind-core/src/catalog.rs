//! Reading and extending the module catalog.

use sea_orm::{ConnectionTrait, DbErr};
use std::collections::HashSet;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;
use wisemind_db::{achievement, lesson, module};
use wisemind_model::achievement::{Achievement, NewAchievement};
use wisemind_model::lesson::{Lesson, LessonWithModule, NewLesson};
use wisemind_model::module::{Module, ModuleWithLessons, NewModule};
use wisemind_model_tools::convert::{IntoDbModel, IntoModel};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Module {0} not found")]
    ModuleNotFound(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    Invalid(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Module ids unlocked for the user beyond the catalog defaults.
async fn unlocked_for<C: ConnectionTrait>(conn: &C, user_id: Option<Uuid>) -> Result<HashSet<String>, DbErr> {
    match user_id {
        Some(user_id) => Ok(module::unlock::Query::unlocked_ids(conn, user_id).await?.into_iter().collect()),
        None => Ok(HashSet::new()),
    }
}

fn effective(module: wisemind_entity::module::Model, unlocked: &HashSet<String>) -> Module {
    let is_unlocked = module.unlocked || unlocked.contains(&module.id);
    (module, is_unlocked).into_model()
}

async fn unlocked_single<C: ConnectionTrait>(
    conn: &C,
    module: &wisemind_entity::module::Model,
    user_id: Option<Uuid>,
) -> Result<bool, DbErr> {
    match user_id {
        Some(user_id) => module::unlock::Query::is_unlocked(conn, user_id, module).await,
        None => Ok(module.unlocked),
    }
}

pub async fn list_modules<C: ConnectionTrait>(conn: &C, user_id: Option<Uuid>) -> Result<Vec<Module>, DbErr> {
    let unlocked = unlocked_for(conn, user_id).await?;
    Ok(module::Query::all_ordered(conn)
        .await?
        .into_iter()
        .map(|module| effective(module, &unlocked))
        .collect())
}

pub async fn module_with_lessons<C: ConnectionTrait>(
    conn: &C,
    module_id: &str,
    user_id: Option<Uuid>,
) -> Result<Option<ModuleWithLessons>, DbErr> {
    let Some(module) = module::Query::find_by_id(conn, module_id).await? else {
        return Ok(None);
    };
    let is_unlocked = unlocked_single(conn, &module, user_id).await?;
    let lessons = lesson::Query::for_module(conn, module_id).await?;
    Ok(Some(ModuleWithLessons {
        module: (module, is_unlocked).into_model(),
        lessons: lessons.into_iter().map(IntoModel::into_model).collect(),
    }))
}

pub async fn lesson_with_module<C: ConnectionTrait>(
    conn: &C,
    lesson_id: &str,
    user_id: Option<Uuid>,
) -> Result<Option<LessonWithModule>, DbErr> {
    let Some((lesson, Some(module))) = lesson::Query::find_with_module(conn, lesson_id).await? else {
        return Ok(None);
    };
    let is_unlocked = unlocked_single(conn, &module, user_id).await?;
    Ok(Some(LessonWithModule {
        lesson: lesson.into_model(),
        module: (module, is_unlocked).into_model(),
    }))
}

fn require_id(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::Invalid("id must not be empty"));
    }
    Ok(())
}

/// Adds a module. Unless the request decides, the module is unlocked by
/// default when it comes first in the catalog.
#[instrument(skip_all, fields(module = %new.id))]
pub async fn create_module<C: ConnectionTrait>(conn: &C, new: NewModule) -> Result<Module, CatalogError> {
    require_id(&new.id)?;
    if module::Query::find_by_id(conn, &new.id).await?.is_some() {
        return Err(CatalogError::Duplicate(format!("Module {}", new.id)));
    }
    let unlocked = match new.unlocked {
        Some(unlocked) => unlocked,
        None => module::Query::lowest_order(conn)
            .await?
            .is_none_or(|lowest| new.order <= lowest),
    };
    let module = module::Mutation::create_module(conn, (new, unlocked).into_db_model()).await?;
    tracing::info!(unlocked, "module created");
    Ok(module.into_model())
}

#[instrument(skip_all, fields(module = %module_id, lesson = %new.id))]
pub async fn create_lesson<C: ConnectionTrait>(
    conn: &C,
    module_id: &str,
    new: NewLesson,
) -> Result<Lesson, CatalogError> {
    require_id(&new.id)?;
    if new.xp_reward <= 0 {
        return Err(CatalogError::Invalid("xpReward must be positive"));
    }
    if module::Query::find_by_id(conn, module_id).await?.is_none() {
        return Err(CatalogError::ModuleNotFound(module_id.to_owned()));
    }
    if lesson::Query::find_by_id(conn, &new.id).await?.is_some() {
        return Err(CatalogError::Duplicate(format!("Lesson {}", new.id)));
    }
    let lesson = lesson::Mutation::create_lesson(conn, (new, module_id.to_owned()).into_db_model()).await?;
    tracing::info!("lesson created");
    Ok(lesson.into_model())
}

#[instrument(skip_all, fields(achievement = %new.id))]
pub async fn create_achievement<C: ConnectionTrait>(
    conn: &C,
    new: NewAchievement,
) -> Result<Achievement, CatalogError> {
    require_id(&new.id)?;
    if let Some(module_id) = &new.module_id {
        if module::Query::find_by_id(conn, module_id).await?.is_none() {
            return Err(CatalogError::ModuleNotFound(module_id.clone()));
        }
    }
    if achievement::Query::find_by_id(conn, &new.id).await?.is_some() {
        return Err(CatalogError::Duplicate(format!("Achievement {}", new.id)));
    }
    let achievement = achievement::Mutation::create_achievement(conn, new.into_db_model()).await?;
    Ok((achievement, None).into_model())
}
