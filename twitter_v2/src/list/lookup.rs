use crate::{
    client::Method,
    fields::{set_field_params, ExpansionList, ListFieldList, UserFieldList},
    params::{Credential, Descriptor, ParamMap, Parameters},
    resource::List,
    response::Response,
};

/// Looks up a single List by id.
#[derive(Clone, Default, Debug)]
pub struct GetList {
    credential: Credential,
    pub id: String,
    pub expansions: ExpansionList,
    pub list_fields: ListFieldList,
    pub user_fields: UserFieldList,
}

impl GetList {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    field_list_setters!(expansions, list_fields, user_fields);
}

impl Parameters for GetList {
    type Response = Response<List>;

    const DESCRIPTOR: Descriptor = Descriptor {
        method: Method::Get,
        endpoint: "/2/lists/:id",
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

list_page_parameters!(
    /// The Lists owned by a user.
    ListOwnedLists,
    "/2/users/:id/owned_lists",
    Vec<List>
);

#[cfg(test)]
mod tests {
    use super::{GetList, ListOwnedLists};
    use crate::params::Parameters;

    #[test]
    fn test_get_list_resolve_endpoint() {
        let cases = [
            (GetList::new("sid"), "test/endpoint/sid"),
            (
                GetList::new("sid").expansions(["ex1", "ex2"]),
                "test/endpoint/sid?expansions=ex1%2Cex2",
            ),
            (
                GetList::new("sid").list_fields(["lf1", "lf2"]),
                "test/endpoint/sid?list.fields=lf1%2Clf2",
            ),
            (
                GetList::new("sid")
                    .expansions(["ex"])
                    .list_fields(["lf"])
                    .user_fields(["uf"]),
                "test/endpoint/sid?expansions=ex&list.fields=lf&user.fields=uf",
            ),
            (
                GetList::default()
                    .expansions(["ex"])
                    .list_fields(["lf"])
                    .user_fields(["uf"]),
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }

    #[test]
    fn test_list_owned_lists_resolve_endpoint() {
        let cases = [
            (ListOwnedLists::new("uid"), "test/endpoint/uid"),
            (
                ListOwnedLists::new("uid").max_results(10),
                "test/endpoint/uid?max_results=10",
            ),
            (
                ListOwnedLists::new("uid").pagination_token("ptoken"),
                "test/endpoint/uid?pagination_token=ptoken",
            ),
            (
                ListOwnedLists::new("uid")
                    .max_results(10)
                    .pagination_token("ptoken")
                    .expansions(["ex"])
                    .list_fields(["lf"])
                    .user_fields(["uf"]),
                "test/endpoint/uid?expansions=ex&list.fields=lf&max_results=10\
                 &pagination_token=ptoken&user.fields=uf",
            ),
            (
                ListOwnedLists::default()
                    .max_results(10)
                    .pagination_token("ptoken"),
                "",
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(params.resolve_endpoint("test/endpoint/:id"), expected);
        }
    }
}
