//! Sample data endpoint for integration tooling.

use axum::Json;

use crate::{models::sample::SampleRecord, services::sample_service};

/// Return the fixed sample enrichment records.
///
/// No authentication; the body never changes.
pub async fn sample() -> Json<Vec<SampleRecord>> {
    Json(sample_service::sample_records())
}
