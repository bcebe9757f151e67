//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the four
//! user endpoints, the health probes, and the shared schemas. Swagger UI
//! serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, NewUser, User, UserId};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Minimal user directory: create, list, fetch, and delete users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserId, NewUser, Error, ErrorCode)),
    tags(
        (name = "users", description = "Operations on the user directory"),
        (name = "health", description = "Probes for orchestration and load balancers")
    )
)]
pub struct ApiDoc;
