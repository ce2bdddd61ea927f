/*
 * Responsibility
 * - API の URL 構造を定義
 * - 公開 route と /auth 配下 (要認証) を分けて merge/nest する
 * - bearer filter は全体に, require_member は /auth 配下だけに掛ける
 */
use axum::{
    Router, middleware as axum_mw,
    routing::{get, post, put},
};

use crate::middleware::auth::access;
use crate::state::AppState;

use crate::api::v1::handlers::{
    boards::{create_board, delete_board, get_board, list_boards, page_boards, update_board},
    comments::{create_comment, delete_comment, update_comment},
    hearts::toggle_heart,
    members::{login, logout, reissue, signup},
    mypage::{my_boards, my_comments, my_hearts},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/reissue", post(reissue))
        .route("/boards", get(list_boards))
        .route("/boards/pager", get(page_boards))
        .route("/boards/{board_id}", get(get_board));

    let protected = Router::new()
        .route("/boards", post(create_board))
        .route("/boards/{board_id}", put(update_board).delete(delete_board))
        .route("/boards/{board_id}/comments", post(create_comment))
        .route(
            "/comments/{comment_id}",
            put(update_comment).delete(delete_comment),
        )
        .route("/heart/{board_id}", post(toggle_heart))
        .route("/logout", post(logout))
        .route("/mypage/boards", get(my_boards))
        .route("/mypage/comments", get(my_comments))
        .route("/mypage/hearts", get(my_hearts))
        .route_layer(axum_mw::from_fn(access::require_member));

    let api = public.nest("/auth", protected);
    access::apply(api, state)
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::testing::{expired_access_token, test_jwt, test_router};

    struct Reply {
        status: StatusCode,
        headers: axum::http::HeaderMap,
        body: Value,
    }

    async fn call(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Reply {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .unwrap();

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Reply {
            status,
            headers,
            body,
        }
    }

    /// Sign up + log in; returns (access, refresh).
    async fn login(app: &Router, username: &str) -> (String, String) {
        let signup = call(
            app,
            Method::POST,
            "/api/signup",
            None,
            Some(json!({"username": username, "password": "pw", "password_confirm": "pw"})),
        )
        .await;
        assert_eq!(signup.status, StatusCode::CREATED);
        assert!(signup.body.get("password").is_none());

        let res = call(
            app,
            Method::POST,
            "/api/login",
            None,
            Some(json!({"username": username, "password": "pw"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["username"], username);

        let access = res.headers[header::AUTHORIZATION]
            .to_str()
            .unwrap()
            .strip_prefix("Bearer ")
            .unwrap()
            .to_string();
        let refresh = res.headers["refresh-token"].to_str().unwrap().to_string();
        (access, refresh)
    }

    async fn create_board(app: &Router, token: &str, title: &str) -> String {
        let res = call(
            app,
            Method::POST,
            "/api/auth/boards",
            Some(token),
            Some(json!({"title": title, "content": "body"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::CREATED);
        res.body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_public_and_hardened() {
        let (app, _) = test_router();
        let res = call(&app, Method::GET, "/health", None, None).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["status"], "ok");
        assert_eq!(res.headers["x-frame-options"], "DENY");
        assert!(res.headers.contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn protected_routes_need_a_valid_bearer_token() {
        let (app, _) = test_router();

        for token in [None, Some("garbage")] {
            let res = call(
                &app,
                Method::POST,
                "/api/auth/boards",
                token,
                Some(json!({"title": "t", "content": "c"})),
            )
            .await;
            assert_eq!(res.status, StatusCode::UNAUTHORIZED);
            assert_eq!(res.body["error"]["message"], "invalid or missing token");
        }

        let (_, refresh) = login(&app, "alice").await;
        let res = call(&app, Method::GET, "/api/auth/mypage/boards", Some(&refresh), None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);

        // a bad token on a public route is simply ignored
        let res = call(&app, Method::GET, "/api/boards", Some("garbage"), None).await;
        assert_eq!(res.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn signup_edge_cases() {
        let (app, _) = test_router();
        login(&app, "alice").await;

        let dup = call(
            &app,
            Method::POST,
            "/api/signup",
            None,
            Some(json!({"username": "alice", "password": "x", "password_confirm": "x"})),
        )
        .await;
        assert_eq!(dup.status, StatusCode::CONFLICT);

        let mismatch = call(
            &app,
            Method::POST,
            "/api/signup",
            None,
            Some(json!({"username": "bob", "password": "x", "password_confirm": "y"})),
        )
        .await;
        assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);

        let blank = call(
            &app,
            Method::POST,
            "/api/signup",
            None,
            Some(json!({"username": " ", "password": "x", "password_confirm": "x"})),
        )
        .await;
        assert_eq!(blank.status, StatusCode::BAD_REQUEST);

        let long = "p".repeat(73);
        let too_long = call(
            &app,
            Method::POST,
            "/api/signup",
            None,
            Some(json!({"username": "carol", "password": long, "password_confirm": long})),
        )
        .await;
        assert_eq!(too_long.status, StatusCode::BAD_REQUEST);

        let wrong = call(
            &app,
            Method::POST,
            "/api/login",
            None,
            Some(json!({"username": "alice", "password": "nope"})),
        )
        .await;
        assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn reissue_rotates_tokens_and_logout_ends_the_session() {
        let (app, _) = test_router();
        let (access, refresh) = login(&app, "alice").await;

        let res = call(
            &app,
            Method::POST,
            "/api/reissue",
            None,
            Some(json!({"access_token": access, "refresh_token": refresh})),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["grant_type"], "bearer");
        let new_access = res.body["access_token"].as_str().unwrap().to_string();
        let new_refresh = res.body["refresh_token"].as_str().unwrap().to_string();
        assert_ne!(new_refresh, refresh);

        // the old refresh token is burnt
        let res = call(
            &app,
            Method::POST,
            "/api/reissue",
            None,
            Some(json!({"access_token": new_access, "refresh_token": refresh})),
        )
        .await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);

        let res = call(&app, Method::POST, "/api/auth/logout", Some(&new_access), None).await;
        assert_eq!(res.status, StatusCode::NO_CONTENT);

        let res = call(
            &app,
            Method::POST,
            "/api/reissue",
            None,
            Some(json!({"access_token": new_access, "refresh_token": new_refresh})),
        )
        .await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body["error"]["message"], "member is logged out");
    }

    #[tokio::test]
    async fn expired_access_token_is_refused_but_can_be_exchanged() {
        let (app, _) = test_router();
        let (_, refresh) = login(&app, "alice").await;
        let stale = expired_access_token(&test_jwt(), "alice");

        let res = call(&app, Method::GET, "/api/auth/mypage/boards", Some(&stale), None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.body["error"]["message"], "invalid or missing token");

        let res = call(
            &app,
            Method::POST,
            "/api/reissue",
            None,
            Some(json!({"access_token": stale, "refresh_token": refresh})),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        let access = res.body["access_token"].as_str().unwrap().to_string();
        assert_ne!(res.body["refresh_token"], json!(refresh));

        let res = call(&app, Method::GET, "/api/auth/mypage/boards", Some(&access), None).await;
        assert_eq!(res.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn board_lifecycle_with_ownership_checks() {
        let (app, _) = test_router();
        let (alice, _) = login(&app, "alice").await;
        let (bob, _) = login(&app, "bob").await;

        let id = create_board(&app, &alice, "hello").await;
        let path = format!("/api/auth/boards/{id}");

        let res = call(
            &app,
            Method::PUT,
            &path,
            Some(&bob),
            Some(json!({"title": "hijack", "content": "x"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let res = call(&app, Method::DELETE, &path, Some(&bob), None).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let res = call(
            &app,
            Method::PUT,
            &path,
            Some(&alice),
            Some(json!({"title": "hello again", "content": "edited"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["title"], "hello again");
        assert_eq!(res.body["author"], "alice");

        let res = call(&app, Method::DELETE, &path, Some(&alice), None).await;
        assert_eq!(res.status, StatusCode::NO_CONTENT);

        let res = call(&app, Method::GET, &format!("/api/boards/{id}"), None, None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn board_detail_carries_comments_and_hearts() {
        let (app, _) = test_router();
        let (alice, _) = login(&app, "alice").await;
        let (bob, _) = login(&app, "bob").await;
        let id = create_board(&app, &alice, "hello").await;

        for text in ["first", "second"] {
            let res = call(
                &app,
                Method::POST,
                &format!("/api/auth/boards/{id}/comments"),
                Some(&bob),
                Some(json!({"content": text})),
            )
            .await;
            assert_eq!(res.status, StatusCode::CREATED);
            assert_eq!(res.body["board_id"], id.as_str());
        }

        let res = call(&app, Method::POST, &format!("/api/auth/heart/{id}"), Some(&bob), None).await;
        assert_eq!(res.body, json!({"hearted": true, "heart_count": 1}));

        let res = call(&app, Method::GET, &format!("/api/boards/{id}"), None, None).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["heart_count"], 1);
        assert_eq!(res.body["comment_count"], 2);
        let comments: Vec<_> = res.body["comments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["content"].as_str().unwrap())
            .collect();
        assert_eq!(comments, ["first", "second"]);

        let comment_id = res.body["comments"][0]["id"].as_str().unwrap().to_string();
        let res = call(
            &app,
            Method::PUT,
            &format!("/api/auth/comments/{comment_id}"),
            Some(&alice),
            Some(json!({"content": "not mine"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::FORBIDDEN);

        let res = call(
            &app,
            Method::DELETE,
            &format!("/api/auth/comments/{comment_id}"),
            Some(&bob),
            None,
        )
        .await;
        assert_eq!(res.status, StatusCode::NO_CONTENT);

        let res = call(&app, Method::POST, &format!("/api/auth/heart/{id}"), Some(&bob), None).await;
        assert_eq!(res.body, json!({"hearted": false, "heart_count": 0}));
    }

    #[tokio::test]
    async fn malformed_or_unknown_public_ids() {
        let (app, _) = test_router();
        let (alice, _) = login(&app, "alice").await;

        let res = call(&app, Method::GET, "/api/boards/!!bad!!", None, None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body["error"]["code"], "INVALID_PUBLIC_ID");

        let id = create_board(&app, &alice, "gone").await;
        call(&app, Method::DELETE, &format!("/api/auth/boards/{id}"), Some(&alice), None).await;

        let res = call(&app, Method::POST, &format!("/api/auth/heart/{id}"), Some(&alice), None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);

        let res = call(
            &app,
            Method::POST,
            &format!("/api/auth/boards/{id}/comments"),
            Some(&alice),
            Some(json!({"content": "hi"})),
        )
        .await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn pager_and_listing() {
        let (app, _) = test_router();
        let (alice, _) = login(&app, "alice").await;
        for title in ["c", "a", "b"] {
            create_board(&app, &alice, title).await;
        }

        let res = call(&app, Method::GET, "/api/boards", None, None).await;
        let titles: Vec<_> = res.body.as_array().unwrap().iter().map(|b| b["title"].clone()).collect();
        assert_eq!(titles, [json!("b"), json!("a"), json!("c")]);

        let res = call(
            &app,
            Method::GET,
            "/api/boards/pager?page=0&size=2&sort_by=title&is_asc=true",
            None,
            None,
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["total_elements"], 3);
        assert_eq!(res.body["total_pages"], 2);
        assert_eq!(res.body["first"], true);
        assert_eq!(res.body["last"], false);
        assert_eq!(res.body["content"][0]["title"], "a");

        let res = call(&app, Method::GET, "/api/boards/pager?sort_by=password", None, None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);

        let res = call(
            &app,
            Method::GET,
            "/api/boards/pager?page=92233720368547758&size=100",
            None,
            None,
        )
        .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["content"], json!([]));
        assert_eq!(res.body["last"], true);
    }

    #[tokio::test]
    async fn mypage_lists_own_activity() {
        let (app, _) = test_router();
        let (alice, _) = login(&app, "alice").await;
        let (bob, _) = login(&app, "bob").await;

        let id = create_board(&app, &alice, "mine").await;
        call(
            &app,
            Method::POST,
            &format!("/api/auth/boards/{id}/comments"),
            Some(&bob),
            Some(json!({"content": "nice"})),
        )
        .await;
        call(&app, Method::POST, &format!("/api/auth/heart/{id}"), Some(&bob), None).await;

        let res = call(&app, Method::GET, "/api/auth/mypage/boards", Some(&alice), None).await;
        assert_eq!(res.body.as_array().unwrap().len(), 1);

        let res = call(&app, Method::GET, "/api/auth/mypage/comments", Some(&alice), None).await;
        assert_eq!(res.body, json!([]));

        let res = call(&app, Method::GET, "/api/auth/mypage/comments", Some(&bob), None).await;
        assert_eq!(res.body[0]["content"], "nice");

        let res = call(&app, Method::GET, "/api/auth/mypage/hearts", Some(&bob), None).await;
        assert_eq!(res.body[0]["id"], id.as_str());
    }
}
