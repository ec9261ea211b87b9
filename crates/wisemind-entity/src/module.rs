use sea_orm::entity::prelude::*;

pub mod progress;
pub mod unlock;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub order: i32,
    /// Catalog default. Per-user unlocks live in [`unlock`].
    pub unlocked: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::lesson::Entity")]
    Lesson,
    #[sea_orm(has_many = "progress::Entity")]
    Progress,
    #[sea_orm(has_many = "unlock::Entity")]
    Unlock,
}

impl Related<crate::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Progress.def()
    }
}

impl Related<unlock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
