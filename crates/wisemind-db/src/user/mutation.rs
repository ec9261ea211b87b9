use paste::paste;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use wisemind_entity::user::{ActiveModel, Column, Entity, Model, Role};

pub struct Mutation;

macro_rules! update_user_field {
    ($i:ident, $t:ty) => {
        paste! {
            pub async fn [<update_user_ $i>]<C: ConnectionTrait>(conn: &C, user_id: Uuid, $i: $t) -> Result<Model, DbErr> {
                let user = ActiveModel {
                    id: Unchanged(user_id),
                    $i: Set($i),
                    ..Default::default()
                };
                user.update(conn).await
            }
        }
    };
}

impl Mutation {
    pub async fn create_user<C: ConnectionTrait>(conn: &C, name: String, role: Role) -> Result<Model, DbErr> {
        let new_user = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            xp_points: Set(0),
            skills_learned: Set(0),
            overall_progress: Set(0),
            streak: Set(0),
            role: Set(role),
            last_login: Set(None),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        Entity::insert(new_user).exec_with_returning(conn).await
    }

    update_user_field!(role, Role);
    update_user_field!(overall_progress, i32);

    /// Adds `xp` to the user and counts one more learned skill.
    /// Increments in place with a single `UPDATE`.
    pub async fn add_xp<C: ConnectionTrait>(conn: &C, user_id: Uuid, xp: i32) -> Result<(), DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::XpPoints, Expr::col(Column::XpPoints).add(xp))
            .col_expr(Column::SkillsLearned, Expr::col(Column::SkillsLearned).add(1))
            .filter(Column::Id.eq(user_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }
        Ok(())
    }

    pub async fn update_user_login<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        streak: i32,
        last_login: chrono::NaiveDate,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            streak: Set(streak),
            last_login: Set(Some(last_login)),
            ..Default::default()
        };
        user.update(conn).await
    }
}
