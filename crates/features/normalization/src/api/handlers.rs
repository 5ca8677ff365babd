use super::dto::{
    LanguageDto, NasalsModeDto, NormalizeRequest, NormalizeResponse, SchemaDto,
    ValidateOptionsRequest, ValidateOptionsResponse,
};
use crate::{dispatcher, samples};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use lipi_derive::api_handler;
use lipi_domain::config::NormalizerConfig;
use lipi_domain::constants::{LANGUAGES_TAG, NORMALIZATION_TAG, SYSTEM_TAG, WELCOME_MESSAGE};
use lipi_kernel::prelude::{ApiError, ErrorBody};
use serde_json::json;
use tracing::warn;

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "Welcome message", body = String)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn welcome() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

#[api_handler(
    post,
    path = "/",
    responses((status = OK, description = "Welcome message", body = String)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn welcome_post() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

#[api_handler(
    post,
    path = "/normalize",
    request_body = NormalizeRequest,
    responses(
        (status = OK, description = "Normalized text", body = NormalizeResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Unsupported language, invalid options or oversized text",
            body = ErrorBody
        ),
        (status = INTERNAL_SERVER_ERROR, description = "The normalizer failed", body = ErrorBody),
    ),
    tag = NORMALIZATION_TAG,
)]
pub(super) async fn normalize(
    State(limits): State<NormalizerConfig>,
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, ApiError> {
    let Json(request) = payload?;

    let chars = request.text.chars().count();
    if chars > limits.max_text_chars {
        warn!(chars, limit = limits.max_text_chars, "Rejecting oversized text");
        return Err(ApiError::unprocessable(
            "text_too_long",
            format!("Text has {chars} characters; the limit is {}", limits.max_text_chars),
        )
        .with_details(json!({ "length": chars, "maxTextChars": limits.max_text_chars })));
    }

    let result =
        dispatcher::normalize(&request.text, &request.language, request.options.as_ref())?;
    Ok(Json(result.into()))
}

#[api_handler(
    post,
    path = "/options/validate",
    request_body = ValidateOptionsRequest,
    responses(
        (status = OK, description = "Options with defaults applied", body = ValidateOptionsResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Unsupported language or invalid options",
            body = ErrorBody
        ),
    ),
    tag = NORMALIZATION_TAG,
)]
pub(super) async fn validate_options(
    payload: Result<Json<ValidateOptionsRequest>, JsonRejection>,
) -> Result<Json<ValidateOptionsResponse>, ApiError> {
    let Json(request) = payload?;
    let resolved = dispatcher::resolve_and_validate(&request.language, request.options.as_ref())?;
    Ok(Json(resolved.into()))
}

#[api_handler(
    get,
    path = "/languages",
    responses((status = OK, description = "Supported languages", body = Vec<LanguageDto>)),
    tag = LANGUAGES_TAG,
)]
pub(super) async fn list_languages() -> Json<Vec<LanguageDto>> {
    Json(dispatcher::list_supported_languages().into_iter().map(LanguageDto::from).collect())
}

#[api_handler(
    get,
    path = "/languages/{language}/options",
    params(("language" = String, Path, description = "Language code or label")),
    responses(
        (status = OK, description = "Options accepted by the language", body = SchemaDto),
        (status = UNPROCESSABLE_ENTITY, description = "Unsupported language", body = ErrorBody),
    ),
    tag = LANGUAGES_TAG,
)]
pub(super) async fn describe_options(
    Path(language): Path<String>,
) -> Result<Json<SchemaDto>, ApiError> {
    Ok(Json(dispatcher::describe_options(&language)?.into()))
}

#[api_handler(
    get,
    path = "/nasals-modes",
    responses((status = OK, description = "Nasals handling modes", body = Vec<NasalsModeDto>)),
    tag = LANGUAGES_TAG,
)]
pub(super) async fn list_nasals_modes() -> Json<Vec<NasalsModeDto>> {
    Json(dispatcher::list_nasals_modes().into_iter().map(NasalsModeDto::from).collect())
}

#[api_handler(
    get,
    path = "/examples",
    responses(
        (status = OK, description = "One ready-made request per language", body = Vec<NormalizeRequest>)
    ),
    tag = NORMALIZATION_TAG,
)]
pub(super) async fn list_examples() -> Json<Vec<NormalizeRequest>> {
    Json(samples::sample_requests().into_iter().map(NormalizeRequest::from).collect())
}

#[api_handler(
    get,
    path = "/examples/{language}",
    params(("language" = String, Path, description = "Language code or label")),
    responses(
        (status = OK, description = "Ready-made request", body = NormalizeRequest),
        (status = UNPROCESSABLE_ENTITY, description = "Unsupported language", body = ErrorBody),
    ),
    tag = NORMALIZATION_TAG,
)]
pub(super) async fn get_example(
    Path(language): Path<String>,
) -> Result<Json<NormalizeRequest>, ApiError> {
    Ok(Json(samples::sample_request(&language)?.into()))
}
