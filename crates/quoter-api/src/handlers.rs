use std::collections::HashMap;
use std::sync::{Arc, MutexGuard};

use axum::extract::{Multipart, Path, State};
use axum::Json;
use http::StatusCode;
use tracing::info;

use pricing_engine::{compute_price, estimate, ShapeSignal};
use quote_store::QuoteRepository;
use quoter_types::{Material, MaterialCode, PrintParameters, Quote, QuoteId, QuoteResult};

use crate::error::ApiError;
use crate::intake;
use crate::messages::{HealthResponse, QuoteListResponse, SaveQuoteRequest};
use crate::state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn list_materials(
    State(state): State<Arc<AppState>>,
) -> Json<HashMap<MaterialCode, Material>> {
    Json(state.catalog.list().clone())
}

/// The analyze pipeline: intake validation, then the coarse geometric
/// estimate, then pricing. A rejected upload never reaches the estimator.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<QuoteResult>, ApiError> {
    let mut upload: Option<(String, u64)> = None;
    let mut params = PrintParameters::defaults_for(MaterialCode::Pla);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                // Extension check runs before the body is even read.
                intake::validate_filename(&filename)?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
                intake::validate_size(bytes.len() as u64)?;
                upload = Some((filename, bytes.len() as u64));
            }
            "material" => {
                params.material = field_text(field, "material").await?.trim().parse()?;
            }
            "infill" => {
                params.infill_percent = parse_f64(&field_text(field, "infill").await?, "infill")?;
            }
            "layer_height" => {
                params.layer_height_mm =
                    parse_f64(&field_text(field, "layer_height").await?, "layer_height")?;
            }
            "include_supports" => {
                params.include_supports = Some(parse_bool(
                    &field_text(field, "include_supports").await?,
                )?);
            }
            _ => {}
        }
    }

    let (filename, file_size_bytes) =
        upload.ok_or_else(|| ApiError::bad_request("missing \"file\" field"))?;

    let material = state.catalog.get(params.material)?;
    let signal = ShapeSignal::from_upload(&filename, file_size_bytes);
    let analysis = estimate(&signal, &state.estimator)?;
    let pricing = compute_price(material, &analysis, &params, &state.pricing)?;

    info!(
        %filename,
        file_size_bytes,
        material = %params.material,
        total = pricing.costs.total,
        "analyzed upload"
    );
    Ok(Json(QuoteResult {
        filename,
        file_size_bytes,
        analysis,
        pricing,
    }))
}

pub async fn save_quote(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveQuoteRequest>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let filename = request
        .filename
        .unwrap_or_else(|| request.results.filename.clone());

    let mut quotes = lock_quotes(&state)?;
    let id = quotes.save(filename, request.results);
    let quote = quotes.find(&id)?.clone();

    info!(id = %quote.id, filename = %quote.filename, "saved quote");
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuoteListResponse>, ApiError> {
    let quotes = lock_quotes(&state)?;
    Ok(Json(QuoteListResponse {
        quotes: quotes.list().into_iter().cloned().collect(),
    }))
}

pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let quotes = lock_quotes(&state)?;
    let quote = quotes.find(&QuoteId(id))?.clone();
    Ok(Json(quote))
}

/// Deleting an absent quote is a no-op, so this always answers 204.
pub async fn delete_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = QuoteId(id);
    let removed = lock_quotes(&state)?.delete(&id);
    if removed {
        info!(%id, "deleted quote");
    }
    Ok(StatusCode::NO_CONTENT)
}

fn lock_quotes(
    state: &AppState,
) -> Result<MutexGuard<'_, Box<dyn QuoteRepository + Send>>, ApiError> {
    state
        .quotes
        .lock()
        .map_err(|_| ApiError::internal("quote repository lock poisoned"))
}

async fn field_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("failed to read \"{name}\" field: {e}")))
}

fn parse_f64(value: &str, name: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("\"{name}\" must be a number, got {value:?}")))
}

fn parse_bool(value: &str) -> Result<bool, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ApiError::bad_request(format!(
            "\"include_supports\" must be a boolean, got {other:?}"
        ))),
    }
}
