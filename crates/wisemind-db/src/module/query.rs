use sea_orm::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use wisemind_entity::module::{Column, Entity, Model};

pub struct Query;

impl Query {
    pub async fn all_ordered<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(conn).await
    }

    /// The module that follows `order` in the catalog, if any.
    pub async fn find_next<C: ConnectionTrait>(conn: &C, order: i32) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Order.gt(order))
            .order_by_asc(Column::Order)
            .order_by_asc(Column::Id)
            .one(conn)
            .await
    }

    pub async fn lowest_order<C: ConnectionTrait>(conn: &C) -> Result<Option<i32>, DbErr> {
        Entity::find()
            .select_only()
            .column_as(Column::Order.min(), "lowest")
            .into_tuple::<Option<i32>>()
            .one(conn)
            .await
            .map(Option::flatten)
    }
}
