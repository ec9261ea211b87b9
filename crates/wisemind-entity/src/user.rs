use sea_orm::entity::prelude::*;

#[derive(Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Clone, Copy)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Role {
    #[sea_orm(string_value = "STUDENT")]
    Student,
    #[sea_orm(string_value = "TEACHER")]
    Teacher,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub xp_points: i32,
    pub skills_learned: i32,
    pub overall_progress: i32,
    pub streak: i32,
    pub role: Role,
    pub last_login: Option<Date>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::access_tokens::Entity")]
    AccessToken,
    #[sea_orm(has_many = "super::identity_mapping::Entity")]
    IdentityMapping,
    #[sea_orm(has_many = "super::lesson::completed::Entity")]
    LessonCompleted,
    #[sea_orm(has_many = "super::module::progress::Entity")]
    ModuleProgress,
    #[sea_orm(has_many = "super::module::unlock::Entity")]
    ModuleUnlock,
    #[sea_orm(has_many = "super::achievement::user_achievement::Entity")]
    UserAchievement,
}

impl Related<super::access_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessToken.def()
    }
}

impl Related<super::identity_mapping::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdentityMapping.def()
    }
}

impl Related<super::lesson::completed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonCompleted.def()
    }
}

impl Related<super::module::progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleProgress.def()
    }
}

impl Related<super::module::unlock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleUnlock.def()
    }
}

impl Related<super::achievement::user_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
