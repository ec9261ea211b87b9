use crate::access_tokens::Query;
use crate::util::FlattenTransactionResultExt;
use base64::Engine;
use ring::rand::{SecureRandom, SystemRandom};
use sea_orm::ActiveValue::Set;
use sea_orm::prelude::*;
use sea_orm::{TransactionTrait, sea_query};
use wisemind_entity::{
    access_tokens,
    access_tokens::{ActiveModel, Entity, Model},
};

pub struct Mutation;

fn generate_token() -> Result<String, DbErr> {
    let mut bytes = [0u8; 48];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| DbErr::Custom("system random source is unavailable".to_owned()))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

impl Mutation {
    /// Returns the token of the user, creating one if the user has none yet.
    pub async fn create_access_token<C: TransactionTrait>(conn: &C, user_id: Uuid) -> Result<Model, DbErr> {
        let token = ActiveModel {
            user_id: Set(user_id),
            access_token: Set(generate_token()?),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        conn.transaction(|txn| {
            Box::pin(async move {
                Entity::insert(token)
                    .on_conflict(
                        sea_query::OnConflict::column(access_tokens::Column::UserId)
                            .do_nothing()
                            .to_owned(),
                    )
                    .do_nothing()
                    .exec(txn)
                    .await?;
                Query::find_by_user_id(txn, user_id)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound("access token missing after insert".to_owned()))
            })
        })
        .await
        .flatten_res()
    }

    pub async fn delete_access_tokens<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(access_tokens::Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token() {
        let token = generate_token().unwrap();
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(&token).unwrap();
        assert_eq!(bytes.len(), 48);
        assert!(bytes.iter().any(|&b| b != 0), "token was never filled");
        assert_ne!(token, generate_token().unwrap());
    }
}
