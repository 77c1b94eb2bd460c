use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ListId, UserId};

/// A Twitter List. Fields other than the id and name depend on the requested `list.fields`.
#[derive(Deserialize, Debug)]
pub struct List {
    pub id: ListId,
    pub name: Box<str>,
    pub created_at: Option<DateTime<Utc>>,
    pub description: Option<Box<str>>,
    pub follower_count: Option<u64>,
    pub member_count: Option<u64>,
    pub owner_id: Option<UserId>,
    pub private: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::List;
    use crate::resource::{ListId, UserId};

    #[test]
    fn test_decode_list() {
        let list = serde_json::from_str::<List>(
            r#"{
                "id": "1441162269824405510",
                "name": "test v2 create list",
                "follower_count": 0,
                "owner_id": "1324848235714736129",
                "private": false
            }"#,
        )
        .unwrap();

        assert_eq!(list.id, ListId(1441162269824405510));
        assert_eq!(list.owner_id, Some(UserId(1324848235714736129)));
        assert_eq!(list.private, Some(false));
        assert!(list.member_count.is_none());
    }
}
