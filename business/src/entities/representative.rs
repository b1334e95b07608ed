use serde::{Deserialize, Serialize};

/// Contact person of a customer company, keyed by the company rather
/// than an own seq. The company name is display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Representative {
    pub company_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub company_name: Option<String>,
    pub cust_emp_name: Option<String>,
    pub cust_emp_tel: Option<String>,
    pub cust_emp_fax: Option<String>,
    pub cust_emp_email: Option<String>,
    pub cust_emp_position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_payload_keeps_company_seq_not_name() {
        let row = Representative {
            company_seq: Some(9),
            company_name: Some("Acme".to_owned()),
            cust_emp_name: Some("Park".to_owned()),
            ..Representative::default()
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["companySeq"], 9);
        assert!(json.get("companyName").is_none());
        assert_eq!(json["custEmpName"], "Park");
    }
}
