use serde::{Deserialize, Serialize};

pub const GENDER_MALE_SEQ: i64 = 1002001;
pub const GENDER_FEMALE_SEQ: i64 = 1002002;

/// An employee row. Label fields (`gender`, `dept`, `country` and their
/// translations) are resolved server-side and not serialized back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
    pub emp_name: Option<String>,
    pub emp_name_en: Option<String>,
    pub emp_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admin: Option<bool>,
    pub gender_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub gender: Option<String>,
    pub birth: Option<String>,
    pub dept_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub dept: Option<String>,
    #[serde(skip_serializing)]
    pub dept_en: Option<String>,
    pub country_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub country: Option<String>,
    #[serde(skip_serializing)]
    pub country_en: Option<String>,
}

impl Employee {
    /// An edited row may only be committed once it is assigned to a
    /// department; the grid keeps the edit pending until then.
    pub fn ready_for_update(&self) -> bool {
        self.dept_seq.is_some()
    }
}
