use chrono::{DateTime, Utc};
use enumscribe::EnumDeserialize;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Poll {
    pub id: Box<str>,
    pub options: Vec<PollOption>,
    pub duration_minutes: Option<u32>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub voting_status: Option<VotingStatus>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PollOption {
    pub position: u32,
    pub label: Box<str>,
    pub votes: u64,
}

#[derive(EnumDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingStatus {
    #[enumscribe(str = "open")]
    Open,
    #[enumscribe(str = "closed")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::{Poll, VotingStatus};

    #[test]
    fn test_decode_poll() {
        let poll = serde_json::from_str::<Poll>(
            r#"{
                "id": "1199786642468413448",
                "voting_status": "closed",
                "duration_minutes": 1440,
                "options": [
                    {"position": 1, "label": "C Sharp", "votes": 795},
                    {"position": 2, "label": "C Hashtag", "votes": 156}
                ],
                "end_datetime": "2019-11-28T20:26:41.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(poll.voting_status, Some(VotingStatus::Closed));
        assert_eq!(poll.options.iter().map(|option| option.votes).sum::<u64>(), 951);
        assert!(poll.end_datetime.is_some());
    }
}
