use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserFindEntity {
    #[serde(rename = "_id")]
    pub id: bson::Uuid,
    #[serde(default)]
    pub locale: Option<String>,
}
