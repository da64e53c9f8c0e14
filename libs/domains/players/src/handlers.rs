use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, ValidatedJson, ValidatedPath, ValidatedQuery,
    errors::responses::{
        BadRequestParameterResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{PlayerError, PlayerResult};
use crate::models::{
    CreatePlayer, Page, Player, PlayerIdPath, Players, SearchParams, UpdatePlayer,
};
use crate::repository::PlayerRepository;
use crate::service::PlayerService;

pub const TAG: &str = "players";

/// OpenAPI documentation for Players API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_players,
        search_players,
        get_player,
        create_player,
        replace_player,
        patch_player,
        delete_player,
    ),
    components(
        schemas(Player, Players, CreatePlayer, UpdatePlayer, Page<Player>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestParameterResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Player management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<PlayerService<R>>>;

/// Create the player router with all HTTP endpoints
pub fn router<R: PlayerRepository + 'static>(service: PlayerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_players).post(create_player))
        .route("/search", get(search_players))
        .route(
            "/{id}",
            get(get_player)
                .put(replace_player)
                .patch(patch_player)
                .delete(delete_player),
        )
        .with_state(shared_service)
}

/// List every player
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All players", body = Players),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_players<R: PlayerRepository>(
    State(service): SharedService<R>,
) -> PlayerResult<Json<Players>> {
    let players = service.list_all().await?;
    Ok(Json(players))
}

/// Search players by last name fragment or birth year, paged.
///
/// `lastName` takes precedence over `birthYear`; with neither, all players
/// are paged.
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "One page of matching players", body = Page<Player>),
        (status = 400, response = BadRequestParameterResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_players<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> PlayerResult<Json<Page<Player>>> {
    let request = params.page_request().map_err(PlayerError::Validation)?;

    let page = if let Some(last_name) = params.last_name.as_deref() {
        service.search_by_last_name(last_name, &request).await?
    } else if let Some(birth_year) = params.birth_year.as_deref() {
        service.filter_by_birth_year(birth_year, &request).await?
    } else {
        service.list_paged(&request).await?
    };

    Ok(Json(page))
}

/// Get a player by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(PlayerIdPath),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 400, response = BadRequestParameterResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_player<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedPath(path): ValidatedPath<PlayerIdPath>,
) -> PlayerResult<Json<Player>> {
    service
        .get_by_id(&path.id)
        .await?
        .map(Json)
        .ok_or_else(|| PlayerError::NotFound(path.id))
}

/// Create a player, overwriting any player with the same ID
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreatePlayer,
    responses(
        (status = 201, description = "Player created", body = Player),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_player<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedJson(input): ValidatedJson<CreatePlayer>,
) -> PlayerResult<impl IntoResponse> {
    let player = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// Replace every attribute of a player; the path ID wins over the body
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(PlayerIdPath),
    request_body = UpdatePlayer,
    responses(
        (status = 200, description = "Player replaced", body = Player),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_player<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedPath(path): ValidatedPath<PlayerIdPath>,
    ValidatedJson(replacement): ValidatedJson<UpdatePlayer>,
) -> PlayerResult<Json<Player>> {
    service
        .replace(&path.id, replacement)
        .await?
        .map(Json)
        .ok_or_else(|| PlayerError::NotFound(path.id))
}

/// Update only the attributes present in the body
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(PlayerIdPath),
    request_body = UpdatePlayer,
    responses(
        (status = 200, description = "Player updated", body = Player),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_player<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedPath(path): ValidatedPath<PlayerIdPath>,
    JsonBody(patch): JsonBody<UpdatePlayer>,
) -> PlayerResult<Json<Player>> {
    service
        .patch(&path.id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| PlayerError::NotFound(path.id))
}

/// Delete a player
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(PlayerIdPath),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 400, response = BadRequestParameterResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_player<R: PlayerRepository>(
    State(service): SharedService<R>,
    ValidatedPath(path): ValidatedPath<PlayerIdPath>,
) -> PlayerResult<StatusCode> {
    if service.delete(&path.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PlayerError::NotFound(path.id))
    }
}
