use sea_orm::entity::prelude::*;

pub mod completed;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Kind {
    #[sea_orm(string_value = "theory")]
    Theory,
    #[sea_orm(string_value = "exercise")]
    Exercise,
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "quiz")]
    Quiz,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub description: String,
    pub kind: Kind,
    pub xp_reward: i32,
    pub order: i32,
    pub content: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::module::Entity",
        from = "Column::ModuleId",
        to = "crate::module::Column::Id",
        on_delete = "Cascade"
    )]
    Module,
    #[sea_orm(has_many = "completed::Entity")]
    Completed,
}

impl Related<crate::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<completed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Completed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
