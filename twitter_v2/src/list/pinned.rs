use serde::Serialize;

use crate::{
    client::Method,
    fields::{set_field_params, ExpansionList, ListFieldList, UserFieldList},
    params::{json_body, Credential, Descriptor, ParamMap, Parameters},
    resource::{List, Pinned},
    response::Response,
};

/// The Lists a user has pinned.
#[derive(Clone, Default, Debug)]
pub struct ListPinnedLists {
    credential: Credential,
    pub id: String,
    pub expansions: ExpansionList,
    pub list_fields: ListFieldList,
    pub user_fields: UserFieldList,
}

impl ListPinnedLists {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    field_list_setters!(expansions, list_fields, user_fields);
}

impl Parameters for ListPinnedLists {
    type Response = Response<Vec<List>>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/users/:id/pinned_lists",
        query_keys: &["expansions", "list.fields", "user.fields"],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str())]
    }

    fn parameter_map(&self) -> ParamMap {
        let mut params = ParamMap::new();
        set_field_params(
            &mut params,
            &[&self.expansions, &self.list_fields, &self.user_fields],
        );
        params
    }
}

/// Pins a List for a user.
#[derive(Serialize, Clone, Default, Debug)]
pub struct PinList {
    #[serde(skip)]
    credential: Credential,
    /// The id of the user.
    #[serde(skip)]
    pub id: String,
    pub list_id: String,
}

impl PinList {
    #[must_use]
    pub fn new<S, T>(id: S, list_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for PinList {
    type Response = Response<Pinned>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Post,
        endpoint: "/2/users/:id/pinned_lists",
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

/// Unpins a List for a user.
#[derive(Clone, Default, Debug)]
pub struct UnpinList {
    credential: Credential,
    pub id: String,
    pub list_id: String,
}

impl UnpinList {
    #[must_use]
    pub fn new<S, T>(id: S, list_id: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            ..Self::default()
        }
    }
}

impl Parameters for UnpinList {
    type Response = Response<Pinned>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Delete,
        endpoint: "/2/users/:id/pinned_lists/:list_id",
        query_keys: &[],
    };

    credential_accessors!();

    fn path_values(&self) -> Vec<(&'static str, &str)> {
        vec![(":id", self.id.as_str()), (":list_id", self.list_id.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::{ListPinnedLists, PinList, UnpinList};
    use crate::params::Parameters;

    #[test]
    fn test_list_pinned_lists_resolve_endpoint() {
        let cases = [
            (ListPinnedLists::new("uid"), "test/endpoint/uid"),
            (
                ListPinnedLists::new("uid")
                    .expansions(["ex"])
                    .list_fields(["lf"])
                    .user_fields(["uf"]),
                "test/endpoint/uid?expansions=ex&list.fields=lf&user.fields=uf",
            ),
            (ListPinnedLists::default().list_fields(["lf"]), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }

    #[test]
    fn test_pin_list() {
        let params = PinList::new("uid", "lid");
        assert_eq!(params.resolve_endpoint("test/endpoint/:id"), "test/endpoint/uid");
        assert_eq!(params.body().unwrap().unwrap(), br#"{"list_id":"lid"}"#);

        // Templates without the placeholder are left as they are.
        assert_eq!(
            PinList::new("uid", "lid").resolve_endpoint("test/endpoint/"),
            "test/endpoint/"
        );

        assert_eq!(
            PinList::new("uid", "").body().unwrap().unwrap(),
            br#"{"list_id":""}"#
        );
        assert_eq!(PinList::new("", "lid").resolve_endpoint("test/endpoint/:id"), "");
    }

    #[test]
    fn test_unpin_list() {
        let base = "test/endpoint/:id/:list_id";
        let cases = [
            (UnpinList::new("uid", "lid"), "test/endpoint/uid/lid"),
            (UnpinList::new("uid", ""), ""),
            (UnpinList::new("", "lid"), ""),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint(base), expected);
            assert!(params.body().unwrap().is_none());
        }
    }
}
