use sea_orm::{Database, DatabaseConnection};
use serde_json::json;
use wisemind_db::{lesson, module, schema};
use wisemind_entity::lesson::Kind;

pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    schema::create(&db).await.unwrap();
    db
}

#[allow(dead_code)]
pub async fn create_module(db: &DatabaseConnection, id: &str, order: i32, unlocked: bool) -> wisemind_entity::module::Model {
    module::Mutation::create_module(
        db,
        wisemind_entity::module::Model {
            id: id.to_owned(),
            title: format!("Module {id}"),
            description: String::new(),
            icon: "leaf".to_owned(),
            color: "#7cb342".to_owned(),
            order,
            unlocked,
        },
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_lesson(
    db: &DatabaseConnection,
    module_id: &str,
    id: &str,
    order: i32,
    xp_reward: i32,
) -> wisemind_entity::lesson::Model {
    lesson::Mutation::create_lesson(
        db,
        wisemind_entity::lesson::Model {
            id: id.to_owned(),
            module_id: module_id.to_owned(),
            title: format!("Lesson {id}"),
            description: String::new(),
            kind: Kind::Theory,
            xp_reward,
            order,
            content: json!({"sections": []}),
        },
    )
    .await
    .unwrap()
}
