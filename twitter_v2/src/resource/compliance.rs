use chrono::{DateTime, Utc};
use enumscribe::{EnumDeserialize, EnumSerialize, ScribeStaticStr};
use serde::Deserialize;

/// A batch compliance job. Ids are uploaded to `upload_url`, and once the job is complete the
/// results can be fetched from `download_url`.
#[derive(Deserialize, Clone, Debug)]
pub struct ComplianceJob {
    pub id: Box<str>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub name: Option<Box<str>>,
    pub resumable: Option<bool>,
    pub status: Option<JobStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub upload_url: Option<Box<str>>,
    pub upload_expires_at: Option<DateTime<Utc>>,
    pub download_url: Option<Box<str>>,
    pub download_expires_at: Option<DateTime<Utc>>,
    pub error: Option<Box<str>>,
}

#[derive(ScribeStaticStr, EnumSerialize, EnumDeserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum JobType {
    #[enumscribe(str = "tweets")]
    Tweets,
    #[enumscribe(str = "users")]
    Users,
}

#[derive(ScribeStaticStr, EnumSerialize, EnumDeserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum JobStatus {
    #[enumscribe(str = "created")]
    Created,
    #[enumscribe(str = "in_progress")]
    InProgress,
    #[enumscribe(str = "failed")]
    Failed,
    #[enumscribe(str = "complete")]
    Complete,
    #[enumscribe(str = "expired")]
    Expired,
}
