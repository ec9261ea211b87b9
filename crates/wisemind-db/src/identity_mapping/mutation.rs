use crate::util::FlattenTransactionResultExt;
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{TransactionTrait, sea_query};
use wisemind_entity::{
    identity_mapping,
    identity_mapping::{ActiveModel, Entity, Model},
};

pub struct Mutation;

impl Mutation {
    /// Maps `subject` to `user_id`. An existing mapping for the subject wins.
    pub async fn create_identity_mapping<C: TransactionTrait>(
        conn: &C,
        user_id: Uuid,
        subject: String,
    ) -> Result<Model, DbErr> {
        let mapping = ActiveModel {
            user_id: Set(user_id),
            subject: Set(subject.clone()),
        };

        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::insert(mapping)
                    .on_conflict(
                        sea_query::OnConflict::column(identity_mapping::Column::Subject)
                            .do_nothing()
                            .to_owned(),
                    )
                    .do_nothing()
                    .exec(txn)
                    .await?;
                Entity::find_by_id(subject)
                    .one(txn)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("identity mapping missing after insert".to_owned()))
            })
        })
        .await
        .flatten_res()
    }
}
