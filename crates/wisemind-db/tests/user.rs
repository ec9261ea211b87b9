mod common;

use crate::common::setup;
use test_log::test;
use uuid::Uuid;
use wisemind_db::{access_tokens, identity_mapping, user};
use wisemind_entity::user::Role;

#[test(tokio::test)]
async fn test_create_user_defaults() {
    let db = &setup().await;

    let user = user::Mutation::create_user(db, "Ada".to_owned(), Role::Student).await.unwrap();
    let loaded = user::Query::find_user_by_id(db, user.id).await.unwrap().unwrap();

    assert_eq!(loaded.name, "Ada");
    assert_eq!(loaded.role, Role::Student);
    assert_eq!(loaded.xp_points, 0);
    assert_eq!(loaded.streak, 0);
    assert_eq!(loaded.last_login, None);
}

#[test(tokio::test)]
async fn test_add_xp_accumulates() {
    let db = &setup().await;
    let user = user::Mutation::create_user(db, "Ada".to_owned(), Role::Student).await.unwrap();

    user::Mutation::add_xp(db, user.id, 10).await.unwrap();
    user::Mutation::add_xp(db, user.id, 15).await.unwrap();

    let user = user::Query::find_user_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(user.xp_points, 25);
    assert_eq!(user.skills_learned, 2);
}

#[test(tokio::test)]
async fn test_add_xp_unknown_user() {
    let db = &setup().await;
    let res = user::Mutation::add_xp(db, Uuid::new_v4(), 10).await;
    assert!(matches!(res, Err(sea_orm::DbErr::RecordNotUpdated)));
}

#[test(tokio::test)]
async fn test_update_role() {
    let db = &setup().await;
    let user = user::Mutation::create_user(db, "Grace".to_owned(), Role::Student).await.unwrap();

    let updated = user::Mutation::update_user_role(db, user.id, Role::Teacher).await.unwrap();
    assert_eq!(updated.role, Role::Teacher);
    assert_eq!(updated.name, "Grace");
}

#[test(tokio::test)]
async fn test_token_lookup_and_delete() {
    let db = &setup().await;
    let user = user::Mutation::create_user(db, "Linus".to_owned(), Role::Admin).await.unwrap();

    let token = access_tokens::Mutation::create_access_token(db, user.id).await.unwrap();
    let again = access_tokens::Mutation::create_access_token(db, user.id).await.unwrap();
    assert_eq!(token.access_token, again.access_token);
    let stored = access_tokens::Query::find_by_user_id(db, user.id).await.unwrap().unwrap();
    assert_eq!(stored.id, token.id);

    let found = user::Query::find_by_token(db, &token.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert!(user::Query::find_by_token(db, "nope").await.unwrap().is_none());

    let deleted = access_tokens::Mutation::delete_access_tokens(db, user.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(user::Query::find_by_token(db, &token.access_token).await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_identity_mapping_keeps_first_user() {
    let db = &setup().await;
    let first = user::Mutation::create_user(db, "One".to_owned(), Role::Student).await.unwrap();
    let second = user::Mutation::create_user(db, "Two".to_owned(), Role::Student).await.unwrap();

    identity_mapping::Mutation::create_identity_mapping(db, first.id, "sub-1".to_owned())
        .await
        .unwrap();
    let mapping = identity_mapping::Mutation::create_identity_mapping(db, second.id, "sub-1".to_owned())
        .await
        .unwrap();
    assert_eq!(mapping.user_id, first.id);

    let found = identity_mapping::Query::find_by_subject(db, "sub-1").await.unwrap().unwrap();
    assert_eq!(found.user_id, first.id);
}
