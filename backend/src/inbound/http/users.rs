//! User resource handlers.
//!
//! ```text
//! GET    /api/users       list every record
//! POST   /api/users       create from {"name":..,"email":..}
//! GET    /api/users/{id}  fetch one record
//! DELETE /api/users/{id}  remove one record
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, NewUser, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateEmail { email } => duplicate_email_error(&email),
    }
}

fn duplicate_email_error(email: &str) -> Error {
    Error::invalid_request("email already registered")
        .with_details(json!({ "field": "email", "code": "duplicate_email", "email": email }))
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All stored users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(users))
}

/// Create a user from a `{name, email}` payload.
///
/// The submitted email is looked up first so the common duplicate case is
/// rejected without attempting the insert. Two concurrent creates can both
/// pass that check; the storage-level unique index then rejects one and the
/// resulting [`UserPersistenceError::DuplicateEmail`] maps to the same 400.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Created user with generated id", body = User),
        (status = 400, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<web::Json<User>> {
    let new_user = payload.into_inner();

    let existing = state
        .users
        .find_by_email(&new_user.email)
        .await
        .map_err(map_persistence_error)?;
    if existing.is_some() {
        debug!(email = %new_user.email, "create rejected: email already registered");
        return Err(duplicate_email_error(&new_user.email));
    }

    let user = state
        .users
        .insert(&new_user)
        .await
        .map_err(map_persistence_error)?;
    info!(id = %user.id, "user created");
    Ok(web::Json(user))
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Surrogate key of the record")),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 404, description = "No record with that id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::from(path.into_inner());
    let found = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?;
    match found {
        Some(user) => Ok(web::Json(user)),
        None => Err(Error::not_found("user not found")),
    }
}

/// Remove a single user by id.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Surrogate key of the record")),
    responses(
        (status = 200, description = "Record removed"),
        (status = 404, description = "No record with that id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::from(path.into_inner());
    let found = state
        .users
        .find_by_id(id)
        .await
        .map_err(map_persistence_error)?;
    match found {
        Some(user) => {
            state
                .users
                .delete(user.id)
                .await
                .map_err(map_persistence_error)?;
            info!(id = %user.id, "user deleted");
            Ok(HttpResponse::Ok().finish())
        }
        None => Err(Error::not_found("user not found")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::outbound::persistence::InMemoryUserRepository;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = web::Data::new(HttpState::new(Arc::new(InMemoryUserRepository::default())));
        App::new().app_data(state).service(
            web::scope("/api")
                .service(list_users)
                .service(create_user)
                .service(get_user)
                .service(delete_user),
        )
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        name: &str,
        email: &str,
    ) -> actix_web::dev::ServiceResponse {
        let req = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(NewUser {
                name: name.into(),
                email: email.into(),
            })
            .to_request();
        actix_test::call_service(app, req).await
    }

    async fn list_len(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> usize {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::get().uri("/api/users").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Vec<User> = actix_test::read_body_json(res).await;
        body.len()
    }

    #[actix_web::test]
    async fn list_starts_empty() {
        let app = actix_test::init_service(test_app()).await;
        assert_eq!(list_len(&app).await, 0);
    }

    #[actix_web::test]
    async fn create_assigns_an_id_and_echoes_the_record() {
        let app = actix_test::init_service(test_app()).await;
        let res = create(&app, "Ada Lovelace", "ada@example.com").await;
        assert_eq!(res.status(), StatusCode::OK);
        let user: User = actix_test::read_body_json(res).await;
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
    }

    #[actix_web::test]
    async fn create_then_get_returns_the_matching_record() {
        let app = actix_test::init_service(test_app()).await;
        let res = create(&app, "Ada Lovelace", "ada@example.com").await;
        let created: User = actix_test::read_body_json(res).await;

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/users/{}", created.id))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let fetched: User = actix_test::read_body_json(res).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected_without_a_second_record() {
        let app = actix_test::init_service(test_app()).await;
        let res = create(&app, "Alice", "alice@x.com").await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = create(&app, "Bob", "alice@x.com").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        let details = body
            .get("details")
            .and_then(Value::as_object)
            .expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("duplicate_email")
        );

        assert_eq!(list_len(&app).await, 1);
    }

    #[actix_web::test]
    async fn get_unknown_id_returns_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/users/99")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Error = actix_test::read_body_json(res).await;
        assert_eq!(body.code, ErrorCode::NotFound);
    }

    #[actix_web::test]
    async fn delete_unknown_id_returns_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let req = actix_test::TestRequest::delete()
            .uri("/api/users/99")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_removes_the_record_and_returns_an_empty_body() {
        let app = actix_test::init_service(test_app()).await;
        let res = create(&app, "Ada Lovelace", "ada@example.com").await;
        let created: User = actix_test::read_body_json(res).await;

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/users/{}", created.id))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert!(body.is_empty());

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/users/{}", created.id))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn list_tracks_creates_minus_deletes() {
        let app = actix_test::init_service(test_app()).await;
        create(&app, "Ada", "ada@example.com").await;
        create(&app, "Grace", "grace@example.com").await;
        let res = create(&app, "Mary", "mary@example.com").await;
        let mary: User = actix_test::read_body_json(res).await;
        assert_eq!(list_len(&app).await, 3);

        let req = actix_test::TestRequest::delete()
            .uri(&format!("/api/users/{}", mary.id))
            .to_request();
        actix_test::call_service(&app, req).await;
        assert_eq!(list_len(&app).await, 2);
    }
}
