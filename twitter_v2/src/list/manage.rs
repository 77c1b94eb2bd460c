use serde::Serialize;

use crate::{
    client::Method,
    params::{json_body, Credential, Descriptor, Parameters},
    resource::{Deleted, List, Updated},
    response::Response,
};

/// Creates a new List owned by the authenticated user.
#[derive(Serialize, Clone, Default, Debug)]
pub struct CreateList {
    #[serde(skip)]
    credential: Credential,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl CreateList {
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn description<S: Into<String>>(self, description: S) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn private(self, private: bool) -> Self {
        Self {
            private: Some(private),
            ..self
        }
    }
}

impl Parameters for CreateList {
    type Response = Response<List>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/lists",
        query_keys: &[],
    };

    credential_accessors!();

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json_body(self)
    }
}

/// Changes the metadata of a List. Only the fields which are set are changed.
#[derive(Serialize, Clone, Default, Debug)]
pub struct UpdateList {
    #[serde(skip)]
    credential: Credential,
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl UpdateList {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for UpdateList {
    type Response = Response<Updated>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Put,
        endpoint: "/2/lists/:id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        json_body(self)
    }
}

#[derive(Clone, Default, Debug)]
pub struct DeleteList {
    credential: Credential,
    pub id: String,
}

impl DeleteList {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for DeleteList {
    type Response = Response<Deleted>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/lists/:id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }
}
