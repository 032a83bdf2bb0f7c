//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and boundary validation for the REST API,
//! plus the composition root that wires repositories into use cases.

pub mod dto;
pub mod handlers;
pub mod validation;

use std::sync::Arc;

use axum::http::{StatusCode, Uri};
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::use_cases::lookups::{
    CreateEntryUseCase, DeleteEntryUseCase, GetEntryByIdUseCase, ListEntriesUseCase,
    UpdateEntryUseCase,
};
use crate::domain::gateways::LookupRepository;
use crate::domain::models::EntityKind;
use crate::infrastructure::driving_adapters::api_rest::handlers::lookups;
use crate::infrastructure::driving_adapters::api_rest::validation::NameValidator;
use crate::shared::envelope::Envelope;

/// State shared by the handlers of one lookup resource
#[derive(Clone)]
pub struct LookupState {
    pub kind: EntityKind,
    pub name_validator: Arc<NameValidator>,
    pub create_entry_use_case: Arc<CreateEntryUseCase>,
    pub list_entries_use_case: Arc<ListEntriesUseCase>,
    pub get_entry_by_id_use_case: Arc<GetEntryByIdUseCase>,
    pub update_entry_use_case: Arc<UpdateEntryUseCase>,
    pub delete_entry_use_case: Arc<DeleteEntryUseCase>,
}

impl LookupState {
    /// Build the validator and use cases for `kind` on top of `repository`
    #[must_use]
    pub fn new(kind: EntityKind, repository: Arc<dyn LookupRepository>) -> Self {
        Self {
            kind,
            name_validator: Arc::new(NameValidator::new(kind, repository.clone())),
            create_entry_use_case: Arc::new(CreateEntryUseCase::new(kind, repository.clone())),
            list_entries_use_case: Arc::new(ListEntriesUseCase::new(kind, repository.clone())),
            get_entry_by_id_use_case: Arc::new(GetEntryByIdUseCase::new(kind, repository.clone())),
            update_entry_use_case: Arc::new(UpdateEntryUseCase::new(kind, repository.clone())),
            delete_entry_use_case: Arc::new(DeleteEntryUseCase::new(kind, repository)),
        }
    }
}

/// Application state: one `LookupState` per mounted resource
#[derive(Clone)]
pub struct AppState {
    pub roles: LookupState,
    pub user_statuses: LookupState,
}

impl AppState {
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn LookupRepository>,
        user_status_repository: Arc<dyn LookupRepository>,
    ) -> Self {
        Self {
            roles: LookupState::new(EntityKind::Role, role_repository),
            user_statuses: LookupState::new(EntityKind::UserStatus, user_status_repository),
        }
    }
}

/// The servable application: the router behind trailing-slash normalization
pub type App = NormalizePath<Router>;

/// Build the full application router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/roles", lookups::router().with_state(state.roles))
        .nest("/user-statuses", lookups::router().with_state(state.user_statuses))
        .fallback(route_not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Build the router and strip trailing slashes before routing, so that
/// `/roles/` reaches the same handler as `/roles`
pub fn build_app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

async fn route_not_found(uri: Uri) -> Envelope<()> {
    Envelope::error(StatusCode::NOT_FOUND, format!("Route {} not found", uri.path()))
}
