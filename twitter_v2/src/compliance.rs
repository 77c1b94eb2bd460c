//! Batch compliance jobs.

use enumscribe::ScribeStaticStr;
use serde::Serialize;

use crate::{
    client::Method,
    params::{json_body, Credential, Descriptor, ParamMap, Parameters},
    resource::{ComplianceJob, JobStatus, JobType},
    response::Response,
};

/// The recent compliance jobs of one type.
#[derive(Clone, Default, Debug)]
pub struct ListJobs {
    credential: Credential,
    /// Required.
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

impl ListJobs {
    #[must_use]
    pub fn new(job_type: JobType) -> Self {
        Self {
            job_type: Some(job_type),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn status(self, status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..self
        }
    }
}

impl Parameters for ListJobs {
    type Response = Response<Vec<ComplianceJob>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/compliance/jobs",
        query_keys: &["status", "type"],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        self.job_type.is_some()
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        if let Some(job_type) = self.job_type {
            params.insert("type", job_type.scribe().to_owned());
        }
        if let Some(status) = self.status {
            params.insert("status", status.scribe().to_owned());
        }
        params
    }
}

#[derive(Clone, Default, Debug)]
pub struct GetJob {
    credential: Credential,
    pub id: String,
}

impl GetJob {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for GetJob {
    type Response = Response<ComplianceJob>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/compliance/jobs/:id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }
}

/// Creates a compliance job. The response carries the URL to upload the ids to.
#[derive(Serialize, Clone, Default, Debug)]
pub struct CreateJob {
    #[serde(skip)]
    credential: Credential,
    /// Required.
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the upload URL may be used for resumable uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumable: Option<bool>,
}

impl CreateJob {
    #[must_use]
    pub fn new(job_type: JobType) -> Self {
        Self {
            job_type: Some(job_type),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn name<S: Into<String>>(self, name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl Parameters for CreateJob {
    type Response = Response<ComplianceJob>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/compliance/jobs",
        query_keys: &[],
    };

    credential_accessors!();

    fn has_required_values(&self) -> bool {
        self.job_type.is_some()
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json_body(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{CreateJob, GetJob, ListJobs};
    use crate::{
        params::Parameters,
        resource::{JobStatus, JobType},
    };

    #[test]
    fn test_list_jobs_resolve_endpoint() {
        let cases = [
            (ListJobs::new(JobType::Tweets), "test/endpoint?type=tweets"),
            (
                ListJobs::new(JobType::Users).status(JobStatus::InProgress),
                "test/endpoint?status=in_progress&type=users",
            ),
            (
                ListJobs {
                    status: Some(JobStatus::Complete),
                    ..ListJobs::default()
                },
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint"), expected);
        }
    }

    #[test]
    fn test_get_job_resolve_endpoint() {
        assert_eq!(
            GetJob::new("jid").resolve_endpoint("test/endpoint/:id"),
            "test/endpoint/jid"
        );
        assert_eq!(GetJob::default().resolve_endpoint("test/endpoint/:id"), "");
    }

    #[test]
    fn test_create_job() {
        let params = CreateJob {
            resumable: Some(true),
            ..CreateJob::new(JobType::Tweets).name("my-job")
        };

        assert_eq!(params.resolve_endpoint("test/endpoint"), "test/endpoint");

        let body = serde_json::from_slice::<Value>(&params.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"type": "tweets", "name": "my-job", "resumable": true})
        );

        assert_eq!(CreateJob::default().resolve_endpoint("test/endpoint"), "");
    }
}
