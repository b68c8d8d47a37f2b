mod common;

#[cfg(test)]
pub mod api_tests {
    use std::sync::Arc;

    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    use bookshelf::access::{MemoryStore, SessionStore};
    use bookshelf::api::{
        ApiClient, Endpoint, LogNavigator, authors, books, categories, comments, tags, users,
    };
    use bookshelf::common::{ApiError, ConfigError};
    use bookshelf::config::ApiConfig;
    use bookshelf::models::{
        AuthorInput, BookCreate, BookSearch, BookTagLink, CategoryInput, CommentStatusUpdate, Page,
        TagInput, UserUpdate,
    };
    use bookshelf::services::AuthService;

    use super::common::*;

    const TOKEN: &str = "abc";

    fn client_with(store: Arc<MemoryStore>, base_url: &str) -> (ApiClient, Arc<RecordingNavigator>) {
        let navigator = RecordingNavigator::new();
        let client = ApiClient::new(&ApiConfig::new(base_url), store, navigator.clone())
            .expect("valid base url");
        (client, navigator)
    }

    fn offline_client() -> ApiClient {
        ApiClient::new(
            &ApiConfig::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNavigator),
        )
        .unwrap()
    }

    fn bearer(req: &HttpRequest) -> Option<String> {
        req.headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    async fn login_handler() -> HttpResponse {
        HttpResponse::Ok().json(json!({ "token": TOKEN }))
    }

    async fn me_handler(req: HttpRequest) -> HttpResponse {
        if bearer(&req).as_deref() != Some("Bearer abc") {
            return HttpResponse::Unauthorized().finish();
        }
        HttpResponse::Ok().json(json!({
            "id": 1,
            "email": "reader@example.com",
            "role": "user",
            "registered_at": "2025-01-01T00:00:00Z",
            "is_active": true
        }))
    }

    async fn logout_handler() -> HttpResponse {
        HttpResponse::Ok().json(json!({ "message": "bye" }))
    }

    async fn expired_handler() -> HttpResponse {
        HttpResponse::Unauthorized().finish()
    }

    async fn forbidden_handler() -> HttpResponse {
        HttpResponse::Forbidden().body("admins only")
    }

    async fn echo_auth_handler(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(json!({ "authorization": bearer(&req) }))
    }

    async fn spawn_backend() -> String {
        let server = HttpServer::new(|| {
            App::new().service(
                web::scope("/api")
                    .route("/auth/login", web::post().to(login_handler))
                    .route("/auth/me", web::get().to(me_handler))
                    .route("/auth/logout", web::post().to(logout_handler))
                    .route("/books/{id}", web::get().to(expired_handler))
                    .route("/users", web::get().to(forbidden_handler))
                    .route("/echo-auth", web::get().to(echo_auth_handler)),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}/api")
    }

    /// Backend that issues a token but fails the profile lookup with `status`.
    async fn spawn_profile_failing_backend(status: actix_web::http::StatusCode) -> String {
        let server = HttpServer::new(move || {
            App::new().service(
                web::scope("/api")
                    .route("/auth/login", web::post().to(login_handler))
                    .route(
                        "/auth/me",
                        web::get().to(move || async move { HttpResponse::build(status).finish() }),
                    ),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind test backend");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}/api")
    }

    #[test]
    fn test_endpoints_use_fixed_paths_and_methods() {
        let author = AuthorInput {
            name: "Le Guin".into(),
            ..Default::default()
        };
        let category = CategoryInput {
            name: "Fiction".into(),
            parent_id: None,
        };
        let tag = TagInput {
            name: "classic".into(),
            ..Default::default()
        };
        let hidden = CommentStatusUpdate {
            status: "hidden".into(),
        };

        let cases = [
            (books::get_book(7), Method::GET, "/books/7"),
            (books::get_book_extras(7), Method::GET, "/books/7/extras"),
            (books::get_books_by_author(3), Method::GET, "/books/author/3"),
            (books::get_books_by_tag(5), Method::GET, "/books/tag/5"),
            (books::get_my_books(), Method::GET, "/books/mine"),
            (books::get_new_releases(), Method::GET, "/books/new-releases"),
            (books::get_favorite_books(), Method::GET, "/books/favorites"),
            (books::add_to_favorites(7), Method::POST, "/books/7/favorite/add"),
            (books::remove_from_favorites(7), Method::POST, "/books/7/favorite/remove"),
            (books::delete_book(7), Method::POST, "/books/7/delete"),
            (books::add_book_author(7, 3), Method::POST, "/books/7/authors/3"),
            (books::remove_book_author(7, 3), Method::POST, "/books/7/authors/3/remove"),
            (books::add_book_tag(7, 5), Method::POST, "/books/7/tags/5"),
            (books::remove_book_tag(7, 5), Method::POST, "/books/7/tags/5/remove"),
            (authors::list_authors(), Method::GET, "/authors"),
            (authors::get_author(3), Method::GET, "/authors/3"),
            (authors::create_author(&author).unwrap(), Method::POST, "/authors"),
            (authors::update_author(3, &author).unwrap(), Method::POST, "/authors/3"),
            (authors::delete_author(3), Method::POST, "/authors/3/delete"),
            (categories::get_all_categories(), Method::GET, "/categories"),
            (categories::get_root_categories(), Method::GET, "/categories/root"),
            (categories::get_category(2), Method::GET, "/categories/2"),
            (categories::get_category_children(2), Method::GET, "/categories/2/children"),
            (categories::get_category_books(2), Method::GET, "/categories/2/books"),
            (categories::create_category(&category).unwrap(), Method::POST, "/categories"),
            (categories::update_category(2, &category).unwrap(), Method::POST, "/categories/2"),
            (categories::delete_category(2), Method::POST, "/categories/2/delete"),
            (tags::get_tag(5), Method::GET, "/tags/5"),
            (tags::get_tags_by_book(7), Method::GET, "/tags/book/7"),
            (tags::create_tag(&tag).unwrap(), Method::POST, "/tags"),
            (tags::update_tag(5, &tag).unwrap(), Method::PUT, "/tags/5"),
            (tags::delete_tag(5), Method::POST, "/tags/5/delete"),
            (comments::delete_comment(11), Method::POST, "/comments/11/delete"),
            (comments::get_comments_by_user(4), Method::GET, "/comments/user/4"),
            (comments::get_last_comments(), Method::GET, "/comments/last"),
            (comments::set_comment_status(11, &hidden).unwrap(), Method::POST, "/comments/11/status"),
            (users::get_user_profile(4), Method::GET, "/users/4"),
            (users::get_users(), Method::GET, "/users"),
            (users::soft_delete_user(4), Method::POST, "/users/4/delete"),
            (users::hard_delete_user(4), Method::POST, "/users/4/harddelete"),
            (users::get_user_comments(4), Method::GET, "/comments/user/4"),
        ];

        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method, method, "{path}");
            assert_eq!(endpoint.path(), path);
        }
    }

    #[test]
    fn test_remove_tag_sends_ids_as_query() {
        let endpoint = tags::remove_tag(BookTagLink { book_id: 9, tag_id: 2 });

        assert_eq!(endpoint.method, Method::POST);
        assert_eq!(endpoint.path(), "/tags/remove");
        assert_eq!(endpoint.body, None);
        assert_eq!(
            offline_client().url(&endpoint).as_str(),
            "http://localhost:8080/api/tags/remove?book_id=9&tag_id=2"
        );
    }

    #[test]
    fn test_user_and_tag_updates_use_put() {
        let update = UserUpdate {
            name: Some("Reader".into()),
            ..Default::default()
        };
        let endpoint = users::update_user(4, &update).unwrap();
        assert_eq!(endpoint.method, Method::PUT);
        assert_eq!(endpoint.path(), "/users/4");
        assert_eq!(endpoint.body, Some(json!({ "name": "Reader" })));

        assert_eq!(users::hard_delete_user(4).path(), "/users/4/harddelete");
        assert!(matches!(
            users::update_user(4, &UserUpdate::default()),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_request_bodies() {
        let endpoint = books::set_book_tags(9, &[1, 2]).unwrap();
        assert_eq!(endpoint.body, Some(json!({ "tag_ids": [1, 2] })));

        let endpoint = tags::assign_tag(BookTagLink { book_id: 9, tag_id: 2 }).unwrap();
        assert_eq!(endpoint.path(), "/tags/assign");
        assert_eq!(endpoint.body, Some(json!({ "book_id": 9, "tag_id": 2 })));

        assert!(books::create_book(&BookCreate::default()).is_err());
    }

    #[test]
    fn test_urls_are_encoded_against_the_base() {
        let client = offline_client();

        let url = client.url(&books::get_duplicate_books("War & Peace/Vol 1"));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/books/duplicates/War%20&%20Peace%2FVol%201"
        );

        let search = BookSearch {
            title: Some("dune".into()),
            limit: Some(10),
            ..Default::default()
        };
        let url = client.url(&books::search_books(&search));
        assert_eq!(url.as_str(), "http://localhost:8080/api/books?title=dune&limit=10");

        let page = Page {
            limit: Some(20),
            offset: Some(40),
        };
        let url = client.url(&comments::get_comments_by_book(3, page));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/comments/book/3?limit=20&offset=40"
        );

        assert_eq!(client.url(&tags::search_tags("  ")).as_str(), "http://localhost:8080/api/tags");
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_tolerated() {
        let (client, _) = client_with(Arc::new(MemoryStore::new()), "http://books.local/api/");
        assert_eq!(
            client.url(&books::get_book(1)).as_str(),
            "http://books.local/api/books/1"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ApiClient::new(
            &ApiConfig::new("mailto:books@example.com"),
            Arc::new(MemoryStore::new()),
            Arc::new(LogNavigator),
        );
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_reject_unauthorized_clears_session_and_navigates_to_login() {
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("admin")));
        let (client, navigator) = client_with(store.clone(), "http://localhost:8080/api");

        let err = client.reject(StatusCode::UNAUTHORIZED, String::new());

        assert!(matches!(err, ApiError::Unauthorized));
        assert_eq!(store.load().token(), None);
        assert_eq!(store.load().role(), None);
        assert_eq!(navigator.visited(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_reject_other_status_keeps_session() {
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("user")));
        let (client, navigator) = client_with(store.clone(), "http://localhost:8080/api");

        let err = client.reject(StatusCode::FORBIDDEN, "admins only".into());

        assert_eq!(err.status(), Some(403));
        assert!(store.load().is_authenticated());
        assert!(navigator.visited().is_empty());
    }

    #[actix_web::test]
    async fn test_login_stores_token_and_role() {
        let base = spawn_backend().await;
        let store = Arc::new(MemoryStore::new());
        let (client, _) = client_with(store.clone(), &base);

        let profile = AuthService::new(client).login("reader@example.com", "secret").await.unwrap();

        assert_eq!(profile.role, "user");
        assert_eq!(store.load().token(), Some(TOKEN));
        assert_eq!(store.load().role(), Some("user"));
    }

    #[actix_web::test]
    async fn test_bearer_header_only_sent_with_token() {
        let base = spawn_backend().await;
        let store = Arc::new(MemoryStore::new());
        let (client, _) = client_with(store.clone(), &base);

        let anonymous: serde_json::Value = client.send(Endpoint::get(["echo-auth"])).await.unwrap();
        assert_eq!(anonymous["authorization"], serde_json::Value::Null);

        store.set_token(TOKEN);
        let signed: serde_json::Value = client.send(Endpoint::get(["echo-auth"])).await.unwrap();
        assert_eq!(signed["authorization"], "Bearer abc");
    }

    #[actix_web::test]
    async fn test_server_401_expires_session() {
        let base = spawn_backend().await;
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("user")));
        let (client, navigator) = client_with(store.clone(), &base);

        let err = client.send::<serde_json::Value>(books::get_book(1)).await.unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
        assert!(!store.load().is_authenticated());
        assert_eq!(navigator.visited(), vec!["/login".to_string()]);
    }

    #[actix_web::test]
    async fn test_server_403_is_reported_with_body() {
        let base = spawn_backend().await;
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("user")));
        let (client, _) = client_with(store.clone(), &base);

        let err = client.send::<serde_json::Value>(users::get_users()).await.unwrap_err();

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "admins only");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.load().is_authenticated());
    }

    #[actix_web::test]
    async fn test_logout_clears_session() {
        let base = spawn_backend().await;
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("user")));
        let (client, _) = client_with(store.clone(), &base);

        AuthService::new(client).logout().await;

        assert_eq!(store.load(), bookshelf::access::SessionContext::anonymous());
    }

    #[actix_web::test]
    async fn test_logout_clears_session_even_if_server_is_down() {
        let store = Arc::new(MemoryStore::with_session(Some(TOKEN), Some("user")));
        let (client, _) = client_with(store.clone(), "http://127.0.0.1:9/api");

        AuthService::new(client).logout().await;

        assert!(!store.load().is_authenticated());
    }

    #[actix_web::test]
    async fn test_login_requires_credentials() {
        let (client, _) = client_with(Arc::new(MemoryStore::new()), "http://127.0.0.1:9/api");
        let err = AuthService::new(client).login("  ", "").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[actix_web::test]
    async fn test_login_discards_token_when_profile_lookup_fails() {
        let base =
            spawn_profile_failing_backend(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR).await;
        let store = Arc::new(MemoryStore::new());
        let (client, navigator) = client_with(store.clone(), &base);

        let err = AuthService::new(client)
            .login("reader@example.com", "secret")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(store.load(), bookshelf::access::SessionContext::anonymous());
        assert!(navigator.visited().is_empty());
    }

    #[actix_web::test]
    async fn test_login_rejected_profile_sends_user_to_login() {
        let base = spawn_profile_failing_backend(actix_web::http::StatusCode::UNAUTHORIZED).await;
        let store = Arc::new(MemoryStore::new());
        let (client, navigator) = client_with(store.clone(), &base);

        let err = AuthService::new(client)
            .login("reader@example.com", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
        assert_eq!(store.load(), bookshelf::access::SessionContext::anonymous());
        assert_eq!(navigator.visited(), vec!["/login".to_string()]);
    }
}
