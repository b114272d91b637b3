//! Sample enrichment record served by `GET /sample`.
//!
//! Integrators point their tooling at the sample endpoint to discover the shape
//! of the records a webhook would carry.

use serde::Serialize;

/// Top-level keys every sample record serializes.
pub const SAMPLE_FIELDS: [&str; 6] = [
    "id",
    "person",
    "summary",
    "talking_points",
    "icebreaker",
    "delivered_at",
];

/// Keys of the nested `person` object.
pub const PERSON_FIELDS: [&str; 6] = [
    "full_name",
    "email",
    "job_title",
    "company",
    "linkedin_url",
    "location",
];

#[derive(Debug, Clone, Serialize)]
pub struct SampleRecord {
    pub id: &'static str,
    pub person: SamplePerson,
    pub summary: &'static str,
    pub talking_points: &'static [&'static str],
    pub icebreaker: &'static str,
    /// RFC 3339 timestamp.
    pub delivered_at: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplePerson {
    pub full_name: &'static str,
    pub email: &'static str,
    pub job_title: &'static str,
    pub company: &'static str,
    pub linkedin_url: &'static str,
    pub location: &'static str,
}
