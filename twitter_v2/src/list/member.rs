use serde::Serialize;

use crate::{
    client::Method,
    params::{json_body, Credential, Descriptor, Parameters},
    resource::{List, Membership, User},
    response::Response,
};

list_page_parameters!(
    /// The Lists a user is a member of.
    ListMemberships,
    "/2/users/:id/list_memberships",
    Vec<List>
);

list_page_parameters!(
    /// The members of a List.
    ListMembers,
    "/2/lists/:id/members",
    Vec<User>
);

/// Adds a user to a List.
#[derive(Serialize, Clone, Default, Debug)]
pub struct AddMember {
    #[serde(skip)]
    credential: Credential,
    /// The id of the List.
    #[serde(skip)]
    pub id: String,
    pub user_id: String,
}

impl AddMember {
    #[must_use]
    pub fn new<S, T>(id: S, user_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for AddMember {
    type Response = Response<Membership>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/lists/:id/members",
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

/// Removes a user from a List.
#[derive(Clone, Default, Debug)]
pub struct RemoveMember {
    credential: Credential,
    pub id: String,
    pub user_id: String,
}

impl RemoveMember {
    #[must_use]
    pub fn new<S, T>(id: S, user_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for RemoveMember {
    type Response = Response<Membership>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/lists/:id/members/:user_id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str()), (":user_id", self.user_id.as_str())]
    }
}
