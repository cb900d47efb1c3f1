//! Axum handlers exposing the schema registry over HTTP.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Multipart, Path},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::validation::{validate_named, FileAttachment, RawInput, SchemaName};

/// Multipart part holding the JSON object of text fields.
const DATA_PART: &str = "data";

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub schema: SchemaName,
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub struct SchemaListResponse {
    pub schemas: Vec<SchemaName>,
}

/// GET /api/v1/schemas
pub async fn handle_list_schemas() -> Json<SchemaListResponse> {
    Json(SchemaListResponse {
        schemas: SchemaName::ALL.to_vec(),
    })
}

/// POST /api/v1/validate/:schema
///
/// Validates a JSON body against the named schema. 422 carries the full
/// violation list.
pub async fn handle_validate_json(
    Path(schema): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let schema: SchemaName = schema.parse()?;
    let Json(body) = body?;
    run(schema, RawInput::new(body))
}

/// POST /api/v1/validate/:schema/form
///
/// Multipart variant for schemas with a photo: a `data` part with the JSON
/// fields plus optional file parts keyed by field name.
pub async fn handle_validate_form(
    Path(schema): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ValidateResponse>, AppError> {
    let schema: SchemaName = schema.parse()?;
    if !schema.accepts_uploads() {
        return Err(AppError::BadRequest(format!(
            "Schema '{schema}' does not accept file uploads"
        )));
    }

    let mut data: Option<Value> = None;
    let mut files = BTreeMap::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == DATA_PART {
            if data.is_some() {
                return Err(AppError::BadRequest(format!(
                    "Part '{DATA_PART}' may only appear once"
                )));
            }
            let text = field.text().await?;
            let value = serde_json::from_str(&text).map_err(|e| {
                AppError::BadRequest(format!("Part '{DATA_PART}' is not valid JSON: {e}"))
            })?;
            data = Some(value);
            continue;
        }

        let media_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let file_name = field.file_name().filter(|n| !n.is_empty()).map(str::to_owned);
        let bytes = field.bytes().await?;

        // Browsers send an empty, unnamed part for a file input left blank.
        if bytes.is_empty() && file_name.is_none() {
            continue;
        }
        files.insert(
            name,
            FileAttachment::new(media_type, bytes).with_file_name(file_name),
        );
    }

    let input = RawInput::new(data.unwrap_or_else(|| json!({}))).with_files(files);
    run(schema, input)
}

fn run(schema: SchemaName, input: RawInput) -> Result<Json<ValidateResponse>, AppError> {
    match validate_named(schema, &input) {
        Ok(value) => {
            debug!(%schema, "validation passed");
            Ok(Json(ValidateResponse { schema, value }))
        }
        Err(err) => {
            debug!(%schema, error = %err, "validation rejected");
            Err(err.into())
        }
    }
}
