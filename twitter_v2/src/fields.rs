use std::{fmt, marker::PhantomData};

use enumscribe::ScribeStaticStr;

use crate::params::ParamMap;

/// A category of field-selection list, identified by the query key it is sent under.
pub trait FieldCategory {
    const KEY: &'static str;
}

macro_rules! field_categories {
    ($($(#[$attr:meta])* $category:ident => $key:literal, $list:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
            pub struct $category;

            impl FieldCategory for $category {
                const KEY: &'static str = $key;
            }

            pub type $list = FieldList<$category>;
        )*
    };
}

field_categories! {
    /// Related objects to include in the response's `includes`.
    Expansions => "expansions", ExpansionList;
    TweetFields => "tweet.fields", TweetFieldList;
    UserFields => "user.fields", UserFieldList;
    MediaFields => "media.fields", MediaFieldList;
    PlaceFields => "place.fields", PlaceFieldList;
    PollFields => "poll.fields", PollFieldList;
    ListFields => "list.fields", ListFieldList;
}

/// An ordered list of field names to request for a category.
///
/// Names are sent in the order they were added. Plain strings and the typed field enums of this
/// module can both be used.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct FieldList<C> {
    names: Vec<Box<str>>,
    _category: PhantomData<C>,
}

impl<C: FieldCategory> FieldList<C> {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            _category: PhantomData,
        }
    }

    pub fn push<S: Into<Box<str>>>(&mut self, name: S) {
        self.names.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| &**name)
    }
}

impl<C, S> FromIterator<S> for FieldList<C>
where
    S: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
            _category: PhantomData,
        }
    }
}

impl<C, S> Extend<S> for FieldList<C>
where
    S: Into<Box<str>>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl<C: FieldCategory> fmt::Debug for FieldList<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple(C::KEY).field(&self.names).finish()
    }
}

/// A field-selection list with its category erased, so that lists of different categories can be
/// handled together.
pub trait FieldSelection {
    fn key(&self) -> &'static str;

    /// The comma-joined field names, or `None` if the list is empty.
    fn joined(&self) -> Option<String>;
}

impl<C: FieldCategory> FieldSelection for FieldList<C> {
    fn key(&self) -> &'static str {
        C::KEY
    }

    fn joined(&self) -> Option<String> {
        if self.names.is_empty() {
            None
        } else {
            Some(self.names.join(","))
        }
    }
}

/// Adds one entry to `params` for each non-empty list.
pub(crate) fn set_field_params(params: &mut ParamMap, lists: &[&dyn FieldSelection]) {
    for list in lists {
        if let Some(joined) = list.joined() {
            params.insert(list.key(), joined);
        }
    }
}

macro_rules! field_names {
    ($($name:ty),*) => {
        $(
            impl From<$name> for Box<str> {
                fn from(name: $name) -> Self {
                    name.scribe().into()
                }
            }
        )*
    };
}

field_names!(
    TweetField,
    UserField,
    MediaField,
    PlaceField,
    PollField,
    ListField,
    TweetExpansion,
    UserExpansion,
    ListExpansion
);

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TweetField {
    #[enumscribe(str = "attachments")]
    Attachments,
    #[enumscribe(str = "author_id")]
    AuthorId,
    #[enumscribe(str = "context_annotations")]
    ContextAnnotations,
    #[enumscribe(str = "conversation_id")]
    ConversationId,
    #[enumscribe(str = "created_at")]
    CreatedAt,
    #[enumscribe(str = "entities")]
    Entities,
    #[enumscribe(str = "geo")]
    Geo,
    #[enumscribe(str = "id")]
    Id,
    #[enumscribe(str = "in_reply_to_user_id")]
    InReplyToUserId,
    #[enumscribe(str = "lang")]
    Lang,
    #[enumscribe(str = "non_public_metrics")]
    NonPublicMetrics,
    #[enumscribe(str = "organic_metrics")]
    OrganicMetrics,
    #[enumscribe(str = "possibly_sensitive")]
    PossiblySensitive,
    #[enumscribe(str = "promoted_metrics")]
    PromotedMetrics,
    #[enumscribe(str = "public_metrics")]
    PublicMetrics,
    #[enumscribe(str = "referenced_tweets")]
    ReferencedTweets,
    #[enumscribe(str = "reply_settings")]
    ReplySettings,
    #[enumscribe(str = "source")]
    Source,
    #[enumscribe(str = "text")]
    Text,
    #[enumscribe(str = "withheld")]
    Withheld,
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserField {
    #[enumscribe(str = "created_at")]
    CreatedAt,
    #[enumscribe(str = "description")]
    Description,
    #[enumscribe(str = "entities")]
    Entities,
    #[enumscribe(str = "id")]
    Id,
    #[enumscribe(str = "location")]
    Location,
    #[enumscribe(str = "name")]
    Name,
    #[enumscribe(str = "pinned_tweet_id")]
    PinnedTweetId,
    #[enumscribe(str = "profile_image_url")]
    ProfileImageUrl,
    #[enumscribe(str = "protected")]
    Protected,
    #[enumscribe(str = "public_metrics")]
    PublicMetrics,
    #[enumscribe(str = "url")]
    Url,
    #[enumscribe(str = "username")]
    Username,
    #[enumscribe(str = "verified")]
    Verified,
    #[enumscribe(str = "withheld")]
    Withheld,
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MediaField {
    #[enumscribe(str = "alt_text")]
    AltText,
    #[enumscribe(str = "duration_ms")]
    DurationMs,
    #[enumscribe(str = "height")]
    Height,
    #[enumscribe(str = "media_key")]
    MediaKey,
    #[enumscribe(str = "non_public_metrics")]
    NonPublicMetrics,
    #[enumscribe(str = "organic_metrics")]
    OrganicMetrics,
    #[enumscribe(str = "preview_image_url")]
    PreviewImageUrl,
    #[enumscribe(str = "promoted_metrics")]
    PromotedMetrics,
    #[enumscribe(str = "public_metrics")]
    PublicMetrics,
    #[enumscribe(str = "type")]
    Type,
    #[enumscribe(str = "url")]
    Url,
    #[enumscribe(str = "variants")]
    Variants,
    #[enumscribe(str = "width")]
    Width,
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlaceField {
    #[enumscribe(str = "contained_within")]
    ContainedWithin,
    #[enumscribe(str = "country")]
    Country,
    #[enumscribe(str = "country_code")]
    CountryCode,
    #[enumscribe(str = "full_name")]
    FullName,
    #[enumscribe(str = "geo")]
    Geo,
    #[enumscribe(str = "id")]
    Id,
    #[enumscribe(str = "name")]
    Name,
    #[enumscribe(str = "place_type")]
    PlaceType,
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PollField {
    #[enumscribe(str = "duration_minutes")]
    DurationMinutes,
    #[enumscribe(str = "end_datetime")]
    EndDatetime,
    #[enumscribe(str = "id")]
    Id,
    #[enumscribe(str = "options")]
    Options,
    #[enumscribe(str = "voting_status")]
    VotingStatus,
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ListField {
    #[enumscribe(str = "created_at")]
    CreatedAt,
    #[enumscribe(str = "description")]
    Description,
    #[enumscribe(str = "follower_count")]
    FollowerCount,
    #[enumscribe(str = "id")]
    Id,
    #[enumscribe(str = "member_count")]
    MemberCount,
    #[enumscribe(str = "name")]
    Name,
    #[enumscribe(str = "owner_id")]
    OwnerId,
    #[enumscribe(str = "private")]
    Private,
}

/// Expansions available on endpoints which return Tweets.
#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TweetExpansion {
    #[enumscribe(str = "attachments.media_keys")]
    AttachmentsMediaKeys,
    #[enumscribe(str = "attachments.poll_ids")]
    AttachmentsPollIds,
    #[enumscribe(str = "author_id")]
    AuthorId,
    #[enumscribe(str = "entities.mentions.username")]
    EntitiesMentionsUsername,
    #[enumscribe(str = "geo.place_id")]
    GeoPlaceId,
    #[enumscribe(str = "in_reply_to_user_id")]
    InReplyToUserId,
    #[enumscribe(str = "referenced_tweets.id")]
    ReferencedTweetsId,
    #[enumscribe(str = "referenced_tweets.id.author_id")]
    ReferencedTweetsIdAuthorId,
}

/// Expansions available on endpoints which return users.
#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserExpansion {
    #[enumscribe(str = "pinned_tweet_id")]
    PinnedTweetId,
}

/// Expansions available on endpoints which return Lists.
#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ListExpansion {
    #[enumscribe(str = "owner_id")]
    OwnerId,
}
