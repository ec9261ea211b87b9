use crate::app::create_router;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use serde_json::{Value, json};
use test_log::test;
use tower::ServiceExt;
use uuid::Uuid;
use wisemind_core::account::sign_in;
use wisemind_entity::user::Role;
use wisemind_test_helpers::fixtures::{create_achievements, create_catalog, lesson_id, module_id};
use wisemind_test_helpers::memory_db;

async fn setup() -> (Router, DatabaseConnection) {
    let conn = memory_db().await.unwrap();
    create_catalog(&conn, &[2, 1], 10).await.unwrap();
    create_achievements(&conn, Some(&module_id(0))).await.unwrap();
    (create_router(conn.clone()), conn)
}

async fn token(conn: &DatabaseConnection, subject: &str, role: Role) -> (Uuid, String) {
    let (user, token) = sign_in(conn, subject, subject, role).await.unwrap();
    (user.id, token.access_token)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::get(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    request.body(Body::empty()).unwrap()
}

fn post(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    request.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn complete(user_id: Uuid, lesson: &str) -> Value {
    json!({ "userId": user_id, "lessonId": lesson })
}

#[test(tokio::test)]
async fn test_status() {
    let (app, _conn) = setup().await;
    let (status, body) = send(&app, get("/api/status", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "database": "ok" }));
}

#[test(tokio::test)]
async fn test_anonymous_catalog() {
    let (app, _conn) = setup().await;

    let (status, body) = send(&app, get("/api/modules", None)).await;
    assert_eq!(status, StatusCode::OK);
    let modules = body.as_array().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0]["id"], module_id(0));
    assert_eq!(modules[0]["unlocked"], true);
    assert_eq!(modules[1]["unlocked"], false);
    assert!(modules[0].get("lessons").is_none());

    let (status, body) = send(&app, get(&format!("/api/modules/{}", module_id(0)), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lessons"].as_array().unwrap().len(), 2);
    assert_eq!(body["lessons"][0]["id"], lesson_id(0, 0));
    assert_eq!(body["lessons"][0]["type"], "theory");

    let (status, body) = send(&app, get(&format!("/api/lessons/{}", lesson_id(1, 0)), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module"]["id"], module_id(1));

    let (status, body) = send(&app, get("/api/modules/missing", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "statusCode": 404, "statusMessage": "Module not found" }));
}

#[test(tokio::test)]
async fn test_catalog_rejects_invalid_token() {
    let (app, _conn) = setup().await;

    for uri in [
        "/api/modules".to_owned(),
        format!("/api/modules/{}", module_id(0)),
        format!("/api/lessons/{}", lesson_id(0, 0)),
    ] {
        let (status, body) = send(&app, get(&uri, Some("not-a-token"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body, json!({ "statusCode": 401, "statusMessage": "Authentication failed." }));
    }
}

#[test(tokio::test)]
async fn test_failed_completion_answers_internal_error() {
    let (app, conn) = setup().await;
    let (user_id, user_token) = token(&conn, "student", Role::Student).await;
    conn.execute_unprepared("DROP TABLE module_progress").await.unwrap();

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &complete(user_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "statusCode": 500, "statusMessage": "Internal server error" }));

    let user = wisemind_db::user::Query::find_user_by_id(&conn, user_id).await.unwrap().unwrap();
    assert_eq!(user.xp_points, 0);
    assert_eq!(user.skills_learned, 0);
    let completed = wisemind_db::lesson::completed::Query::count_for_user(&conn, user_id).await.unwrap();
    assert_eq!(completed, 0);
}

#[test(tokio::test)]
async fn test_complete_module_unlocks_successor_for_user_only() {
    let (app, conn) = setup().await;
    let (user_id, user_token) = token(&conn, "student", Role::Student).await;
    let (_, other_token) = token(&conn, "other", Role::Student).await;

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &complete(user_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["wasAlreadyCompleted"], false);
    assert_eq!(body["xpEarned"], 10);
    assert_eq!(body["newTotalXp"], 10);
    assert_eq!(body["moduleProgress"], 50);
    assert_eq!(body["overallProgress"], 33);
    assert_eq!(body["isModuleComplete"], false);
    assert_eq!(body["newAchievements"], json!(["first-lesson"]));

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &complete(user_id, &lesson_id(0, 1))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moduleProgress"], 100);
    assert_eq!(body["overallProgress"], 67);
    assert_eq!(body["isModuleComplete"], true);
    assert_eq!(body["unlockedModule"], module_id(1));

    let (_, body) = send(&app, get("/api/modules", Some(&user_token))).await;
    assert_eq!(body[1]["unlocked"], true);
    let (_, body) = send(&app, get("/api/modules", Some(&other_token))).await;
    assert_eq!(body[1]["unlocked"], false);

    let (status, body) = send(&app, get("/api/user", Some(&user_token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["xpPoints"], 20);
    assert_eq!(body["skillsLearned"], 2);
    assert_eq!(body["completedLessons"], json!([lesson_id(0, 0), lesson_id(0, 1)]));
    assert_eq!(body["moduleProgress"][0]["progress"], 100);
    assert_eq!(body["permissions"], json!(["read:modules", "read:lessons"]));
    let earned: Vec<_> = body["achievements"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|achievement| achievement["earned"] == true)
        .map(|achievement| achievement["id"].as_str().unwrap().to_owned())
        .collect();
    assert!(earned.contains(&"first-lesson".to_owned()));
    assert!(earned.contains(&format!("{}-master", module_id(0))));
}

#[test(tokio::test)]
async fn test_repeated_completion() {
    let (app, conn) = setup().await;
    let (user_id, user_token) = token(&conn, "student", Role::Student).await;
    let request = complete(user_id, &lesson_id(0, 0));

    let (status, _) = send(&app, post("/api/lessons/complete", Some(&user_token), &request)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, post("/api/lessons/complete", Some(&user_token), &request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wasAlreadyCompleted"], true);
    assert_eq!(body["xpEarned"], 0);
    assert_eq!(body["newTotalXp"], 10);
    assert_eq!(body["moduleProgress"], 50);
}

#[test(tokio::test)]
async fn test_complete_errors() {
    let (app, conn) = setup().await;
    let (user_id, user_token) = token(&conn, "student", Role::Student).await;

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", None, &complete(user_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["statusCode"], 401);

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some("not-a-token"), &complete(user_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["statusMessage"], "Authentication failed.");

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &json!({ "userId": user_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);

    let (status, _) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &complete(user_id, " ")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&user_token), &complete(user_id, "missing")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "statusCode": 404, "statusMessage": "Lesson not found" }));
}

#[test(tokio::test)]
async fn test_complete_for_other_user() {
    let (app, conn) = setup().await;
    let (student_id, student_token) = token(&conn, "student", Role::Student).await;
    let (other_id, _) = token(&conn, "other", Role::Student).await;
    let (_, admin_token) = token(&conn, "admin", Role::Admin).await;

    let (status, _) = send(
        &app,
        post("/api/lessons/complete", Some(&student_token), &complete(other_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        post("/api/lessons/complete", Some(&admin_token), &complete(student_id, &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newTotalXp"], 10);

    let (status, _) = send(
        &app,
        post("/api/lessons/complete", Some(&admin_token), &complete(Uuid::new_v4(), &lesson_id(0, 0))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test(tokio::test)]
async fn test_update_role() {
    let (app, conn) = setup().await;
    let (student_id, _) = token(&conn, "student", Role::Student).await;
    let (_, teacher_token) = token(&conn, "teacher", Role::Teacher).await;
    let (_, admin_token) = token(&conn, "admin", Role::Admin).await;
    let request = json!({ "userId": student_id, "newRole": "TEACHER" });

    let (status, body) = send(&app, post("/api/user/update-role", Some(&teacher_token), &request)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["statusCode"], 403);

    let (status, body) = send(&app, post("/api/user/update-role", Some(&admin_token), &request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "user": { "id": student_id, "name": "student", "role": "TEACHER" } })
    );

    let (status, _) = send(
        &app,
        post(
            "/api/user/update-role",
            Some(&admin_token),
            &json!({ "userId": student_id, "newRole": "ROOT" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post(
            "/api/user/update-role",
            Some(&admin_token),
            &json!({ "userId": Uuid::new_v4(), "newRole": "ADMIN" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test(tokio::test)]
async fn test_catalog_creation_permissions() {
    let conn = memory_db().await.unwrap();
    let app = create_router(conn.clone());
    let (_, teacher_token) = token(&conn, "teacher", Role::Teacher).await;
    let (_, admin_token) = token(&conn, "admin", Role::Admin).await;
    let module = json!({
        "id": "mindfulness",
        "title": "Mindfulness",
        "description": "Core skills",
        "icon": "leaf",
        "color": "#9C27B0",
        "order": 1
    });

    let (status, _) = send(&app, post("/api/modules", Some(&teacher_token), &module)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, post("/api/modules", Some(&admin_token), &module)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["unlocked"], true);

    let (status, _) = send(&app, post("/api/modules", Some(&admin_token), &module)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let lesson = json!({
        "id": "wise-mind",
        "title": "Wise Mind",
        "type": "exercise",
        "xpReward": 15,
        "order": 1,
        "content": { "steps": ["breathe"] }
    });
    let (status, body) = send(&app, post("/api/modules/mindfulness/lessons", Some(&teacher_token), &lesson)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["moduleId"], "mindfulness");
    assert_eq!(body["xpReward"], 15);

    let (status, _) = send(&app, post("/api/modules/missing/lessons", Some(&teacher_token), &lesson)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let achievement = json!({ "id": "mindful", "name": "Mindful", "moduleId": "mindfulness" });
    let (status, _) = send(&app, post("/api/achievements", Some(&teacher_token), &achievement)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send(&app, post("/api/achievements", Some(&admin_token), &achievement)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["earned"], false);
}

#[test(tokio::test)]
async fn test_login_and_logout() {
    let (app, conn) = setup().await;
    let (_, user_token) = token(&conn, "student", Role::Student).await;

    let (status, body) = send(&app, post("/api/user/login", Some(&user_token), &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["streak"], 1);
    assert!(body["lastLogin"].is_string());

    let (status, body) = send(&app, post("/logout", Some(&user_token), &json!({}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, get("/api/user", Some(&user_token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
