use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadUpdated {
    pub updated: bool,
}

#[derive(Debug, Serialize)]
pub struct AllReadUpdated {
    pub updated_count: u64,
}
