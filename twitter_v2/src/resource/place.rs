use serde::Deserialize;

/// A geographic place which a Tweet can be tagged with.
#[derive(Deserialize, Clone, Debug)]
pub struct Place {
    pub id: Box<str>,
    pub full_name: Box<str>,
    pub name: Option<Box<str>>,
    pub country: Option<Box<str>>,
    pub country_code: Option<Box<str>>,
    pub place_type: Option<Box<str>>,
    #[serde(default)]
    pub contained_within: Vec<Box<str>>,
    pub geo: Option<PlaceGeo>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PlaceGeo {
    #[serde(rename = "type")]
    pub geo_type: Box<str>,
    /// West, south, east and north bounds, in that order.
    #[serde(default)]
    pub bbox: Vec<f64>,
}
