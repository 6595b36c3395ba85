use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service_core::error::AppError;

use crate::models::{CalculationQuery, CalculationResult, ErrorPayload, Operation};

/// Perform one arithmetic operation on two operands.
///
/// Malformed numeric parameters are rejected by the `Query` extractor
/// before this handler runs.
#[tracing::instrument]
pub async fn calculate(Query(query): Query<CalculationQuery>) -> Result<Response, AppError> {
    let operation = Operation::parse(&query.operation).ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!(
            "Unsupported operation: {}. Must be one of: add, subtract, multiply, divide",
            query.operation
        ))
    })?;

    let response = match operation.apply(query.a, query.b) {
        Some(result) => Json(CalculationResult {
            a: query.a,
            b: query.b,
            operation: operation.to_string(),
            result,
        })
        .into_response(),
        // Division by zero is reported in the payload with a 200 status;
        // existing clients key on the `error` field.
        None => Json(ErrorPayload {
            error: "Division by zero".to_string(),
        })
        .into_response(),
    };

    Ok(response)
}
