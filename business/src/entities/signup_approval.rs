use serde::{Deserialize, Serialize};

/// A pending signup. The screen never edits these rows; it only approves
/// or rejects them in bulk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupApplicant {
    pub seq: Option<i64>,
    pub username: Option<String>,
    pub username_en: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender_seq: Option<i64>,
    pub gender: Option<String>,
    pub birth: Option<String>,
    pub country: Option<String>,
    pub country_en: Option<String>,
    pub create_date: Option<String>,
}

/// Body of `PUT /signup-approval`: the selected applicants and a single
/// verdict for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalUpdate {
    pub seq: Vec<i64>,
    pub approval: bool,
}
