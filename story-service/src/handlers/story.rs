use crate::models::{GenerationConfig, StoryRequest, StoryResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

#[tracing::instrument(skip_all)]
pub async fn generate_story(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StoryRequest>,
) -> Result<Json<StoryResponse>, AppError> {
    let word = request.word.trim();

    let story = state
        .generator
        .generate_story(word, request.length, &GenerationConfig::default())
        .await?;

    Ok(Json(StoryResponse {
        word: word.to_string(),
        story,
        length: request.length,
        mock: state.generator.is_mock(),
    }))
}
