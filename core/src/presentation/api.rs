use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::{RoleService, ServiceError, WorkspaceService};
use crate::domain::role::{CreateRoleInput, Role, RolePage, RoleUuid, UpdateRoleInput};
use crate::domain::workspace::{
    CreateWorkspaceInput, UpdateWorkspaceInput, Workspace, WorkspacePage, WorkspaceUuid,
};

pub struct AppState {
    pub roles: Arc<dyn RoleService>,
    pub workspaces: Arc<dyn WorkspaceService>,
}

/// REST gateway over the resource services.
///
/// The `{uuid}` path segment always binds the external id. Pagination uses
/// `offset`/`limit` query parameters, passed through to the service
/// unmodified; absent parameters default to zero, matching the proto3
/// defaults the gRPC surface sees.
pub fn app(roles: Arc<dyn RoleService>, workspaces: Arc<dyn WorkspaceService>) -> Router {
    let state = Arc::new(AppState { roles, workspaces });

    Router::new()
        .route("/health", get(health))
        .route("/v1/roles", get(list_roles).post(create_role))
        .route(
            "/v1/roles/{uuid}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .route("/v1/workspaces", get(list_workspaces).post(create_workspace))
        .route(
            "/v1/workspaces/{uuid}",
            get(get_workspace).put(update_workspace).delete(delete_workspace),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct TitleBody {
    pub title: String,
}

pub enum ApiError {
    Service(ServiceError),
    InvalidUuid(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidUuid(raw) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("invalid uuid: {}", raw) }),
            ),
            ApiError::Service(ServiceError::Validation(violation)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": violation.to_string(), "field": violation.field }),
            ),
            ApiError::Service(ServiceError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("no resource with uuid {}", id) }),
            ),
            ApiError::Service(ServiceError::Storage(err)) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "storage failure" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ── Roles ───────────────────────────────────────────────────────────────

async fn list_roles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<RolePage>, ApiError> {
    Ok(Json(state.roles.query(params.offset, params.limit).await?))
}

async fn get_role(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Role>, ApiError> {
    let uuid = RoleUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    Ok(Json(state.roles.get(uuid).await?))
}

async fn create_role(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateRoleInput>,
) -> Result<Json<Role>, ApiError> {
    Ok(Json(state.roles.create(input).await?))
}

async fn update_role(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    Json(body): Json<TitleBody>,
) -> Result<Json<Role>, ApiError> {
    let uuid = RoleUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    let input = UpdateRoleInput {
        uuid,
        title: body.title,
    };
    Ok(Json(state.roles.update(input).await?))
}

async fn delete_role(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Role>, ApiError> {
    let uuid = RoleUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    Ok(Json(state.roles.delete(uuid).await?))
}

// ── Workspaces ──────────────────────────────────────────────────────────

async fn list_workspaces(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<WorkspacePage>, ApiError> {
    Ok(Json(
        state.workspaces.query(params.offset, params.limit).await?,
    ))
}

async fn get_workspace(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Workspace>, ApiError> {
    let uuid =
        WorkspaceUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    Ok(Json(state.workspaces.get(uuid).await?))
}

async fn create_workspace(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateWorkspaceInput>,
) -> Result<Json<Workspace>, ApiError> {
    Ok(Json(state.workspaces.create(input).await?))
}

async fn update_workspace(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    Json(body): Json<TitleBody>,
) -> Result<Json<Workspace>, ApiError> {
    let uuid =
        WorkspaceUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    let input = UpdateWorkspaceInput {
        uuid,
        title: body.title,
    };
    Ok(Json(state.workspaces.update(input).await?))
}

async fn delete_workspace(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Workspace>, ApiError> {
    let uuid =
        WorkspaceUuid::from_string(&uuid).map_err(|_| ApiError::InvalidUuid(uuid.clone()))?;
    Ok(Json(state.workspaces.delete(uuid).await?))
}
