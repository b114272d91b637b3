//! Fixed sample records for schema discovery.

use crate::models::sample::{SamplePerson, SampleRecord};

const SAMPLES: [SampleRecord; 3] = [
    SampleRecord {
        id: "rec_01HQ3V7K2M9XG4T8ZB6N5C1D0E",
        person: SamplePerson {
            full_name: "Maya Lindqvist",
            email: "maya.lindqvist@northwind.example",
            job_title: "Head of Revenue Operations",
            company: "Northwind Logistics",
            linkedin_url: "https://www.linkedin.com/in/maya-lindqvist-example",
            location: "Stockholm, Sweden",
        },
        summary: "Leads a six-person RevOps team that recently consolidated three CRMs into one.",
        talking_points: &[
            "Finished a CRM migration last quarter",
            "Hiring two data analysts",
            "Spoke at a logistics tech meetup about pipeline hygiene",
        ],
        icebreaker: "Congrats on wrapping up the CRM consolidation, how is adoption going?",
        delivered_at: "2024-03-04T09:15:00Z",
    },
    SampleRecord {
        id: "rec_01HQ3V8D4R7YB2K6WQ9P3J5H1A",
        person: SamplePerson {
            full_name: "Daniel Okafor",
            email: "d.okafor@brightlane.example",
            job_title: "VP Engineering",
            company: "Brightlane Health",
            linkedin_url: "https://www.linkedin.com/in/daniel-okafor-example",
            location: "Austin, TX, United States",
        },
        summary: "Runs platform and data engineering for a telehealth provider in growth stage.",
        talking_points: &[
            "Company announced a Series B in January",
            "Engineering headcount doubled year over year",
        ],
        icebreaker: "Saw the Series B news, what is the first thing the platform team is tackling?",
        delivered_at: "2024-03-04T09:16:30Z",
    },
    SampleRecord {
        id: "rec_01HQ3V9F6T2ZC8M4XR1S7L3K5B",
        person: SamplePerson {
            full_name: "Priya Raman",
            email: "priya@quillstack.example",
            job_title: "Founder & CEO",
            company: "Quillstack",
            linkedin_url: "https://www.linkedin.com/in/priya-raman-example",
            location: "Bengaluru, India",
        },
        summary: "Second-time founder building document automation for small legal teams.",
        talking_points: &[
            "Launched a public API in February",
            "Posts weekly about bootstrapping",
            "Previously sold a scheduling startup",
        ],
        icebreaker: "Your posts on bootstrapping are great, is the new API driving most signups?",
        delivered_at: "2024-03-04T09:18:05Z",
    },
];

/// The sample records, always the same and never empty.
pub fn sample_records() -> Vec<SampleRecord> {
    SAMPLES.to_vec()
}
