//! Catalog and user fixtures.

use sea_orm::{ConnectionTrait, DbErr};
use serde_json::json;
use wisemind_db::{achievement, lesson, module, user};
use wisemind_entity::lesson::Kind;
use wisemind_entity::user::Role;
use wisemind_model::achievement::{DBT_GRADUATE, FIRST_LESSON, THREE_DAY_STREAK};

pub struct Catalog {
    pub modules: Vec<wisemind_entity::module::Model>,
    /// Lessons per module, in module order.
    pub lessons: Vec<Vec<wisemind_entity::lesson::Model>>,
}

#[must_use]
pub fn module_id(index: usize) -> String {
    format!("module-{}", index + 1)
}

#[must_use]
pub fn lesson_id(module: usize, lesson: usize) -> String {
    format!("module-{}-lesson-{}", module + 1, lesson + 1)
}

/// Creates one module per entry of `lesson_counts`, each with that many lessons
/// worth `xp_reward`. Only the first module is unlocked.
pub async fn create_catalog<C: ConnectionTrait>(
    conn: &C,
    lesson_counts: &[usize],
    xp_reward: i32,
) -> Result<Catalog, DbErr> {
    let mut catalog = Catalog {
        modules: Vec::with_capacity(lesson_counts.len()),
        lessons: Vec::with_capacity(lesson_counts.len()),
    };
    for (index, &count) in lesson_counts.iter().enumerate() {
        let order = i32::try_from(index + 1).map_err(|err| DbErr::Custom(err.to_string()))?;
        let module = module::Mutation::create_module(
            conn,
            wisemind_entity::module::Model {
                id: module_id(index),
                title: format!("Module {}", index + 1),
                description: String::new(),
                icon: "leaf".to_owned(),
                color: "#9C27B0".to_owned(),
                order,
                unlocked: index == 0,
            },
        )
        .await?;

        let mut lessons = Vec::with_capacity(count);
        for lesson_index in 0..count {
            let order = i32::try_from(lesson_index + 1).map_err(|err| DbErr::Custom(err.to_string()))?;
            let lesson = lesson::Mutation::create_lesson(
                conn,
                wisemind_entity::lesson::Model {
                    id: lesson_id(index, lesson_index),
                    module_id: module.id.clone(),
                    title: format!("Lesson {}", lesson_index + 1),
                    description: String::new(),
                    kind: Kind::Theory,
                    xp_reward,
                    order,
                    content: json!({ "text": [format!("Lesson {} of {}", lesson_index + 1, module.id)] }),
                },
            )
            .await?;
            lessons.push(lesson);
        }
        catalog.modules.push(module);
        catalog.lessons.push(lessons);
    }
    Ok(catalog)
}

/// The built in badges plus a module badge for `module_id`, if given.
pub async fn create_achievements<C: ConnectionTrait>(conn: &C, module_id: Option<&str>) -> Result<(), DbErr> {
    let mut entries = vec![
        (FIRST_LESSON.to_owned(), "First Steps", None),
        (THREE_DAY_STREAK.to_owned(), "Consistent Practice", None),
        (DBT_GRADUATE.to_owned(), "DBT Graduate", None),
    ];
    if let Some(module_id) = module_id {
        entries.push((format!("{module_id}-master"), "Module Master", Some(module_id.to_owned())));
    }
    for (id, name, module_id) in entries {
        achievement::Mutation::create_achievement(
            conn,
            wisemind_entity::achievement::Model {
                id,
                name: name.to_owned(),
                description: String::new(),
                icon: "star".to_owned(),
                module_id,
            },
        )
        .await?;
    }
    Ok(())
}

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    role: Role,
) -> Result<wisemind_entity::user::Model, DbErr> {
    user::Mutation::create_user(conn, name.to_owned(), role).await
}
