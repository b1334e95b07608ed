use serde::{Deserialize, Serialize};

/// A department row. `dept_level` is derived server-side from the tree
/// position and never sent on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_level: Option<i64>,
    pub dept_name: Option<String>,
    pub dept_name_en: Option<String>,
    pub dept_phone: Option<String>,
    pub dept_fax: Option<String>,
}

impl Department {
    /// Payload for `POST /department`: seq and level are the backend's
    /// to assign.
    #[must_use]
    pub fn create_payload(&self) -> Self {
        Self {
            seq: None,
            dept_level: None,
            ..self.clone()
        }
    }
}

/// Create dialog working copy. Only the two names are mandatory.
#[derive(Debug, Clone, Default)]
pub struct DepartmentDraft {
    pub dept_name: String,
    pub dept_name_en: String,
    pub dept_phone: String,
    pub dept_fax: String,
}

impl DepartmentDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.dept_name.is_empty() {
            missing.push("deptName");
        }
        if self.dept_name_en.is_empty() {
            missing.push("deptNameEn");
        }
        missing
    }

    pub fn to_row(&self) -> Department {
        Department {
            dept_name: Some(self.dept_name.clone()),
            dept_name_en: Some(self.dept_name_en.clone()),
            dept_phone: Some(self.dept_phone.clone()),
            dept_fax: Some(self.dept_fax.clone()),
            ..Department::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_names_are_required() {
        let mut draft = DepartmentDraft {
            dept_name: "영업".to_owned(),
            dept_name_en: "Sales".to_owned(),
            ..DepartmentDraft::default()
        };
        assert!(draft.missing_fields().is_empty());
        draft.dept_name_en.clear();
        assert_eq!(draft.missing_fields(), vec!["deptNameEn"]);
    }

    #[test]
    fn create_payload_omits_seq_and_level() {
        let row = Department {
            seq: Some(4),
            dept_level: Some(2),
            dept_name: Some("Sales".to_owned()),
            ..Department::default()
        };
        let json = serde_json::to_value(row.create_payload()).unwrap();
        assert!(json.get("seq").is_none());
        assert!(json.get("deptLevel").is_none());
        assert_eq!(json["deptName"], "Sales");
    }
}
