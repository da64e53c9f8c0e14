use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Players API",
        version = "0.1.0",
        description = "CRUD, search and paging over baseball player records"
    ),
    nest(
        (path = "/v1/players", api = domain_players::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/v1/players/search"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/players/{id}"));
    }
}
