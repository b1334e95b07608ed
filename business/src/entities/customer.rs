use serde::{Deserialize, Serialize};

use crate::lookup::MinorCode;

/// Company type seq of the operator's own company. Customers cannot be
/// created with it, so the create dialog hides this option.
pub const CUST_COMPANY_TYPE_INTERNAL: i64 = 1003001;

/// A customer company row.
///
/// The `*_seq` fields are what the backend stores; the matching label
/// fields (`cust_company_type`, `company_type`) are display-only and
/// never serialized back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
    pub company_name: Option<String>,
    pub company_short_name: Option<String>,
    pub cust_company_type_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub cust_company_type: Option<String>,
    pub company_type_seq: Option<i64>,
    #[serde(skip_serializing)]
    pub company_type: Option<String>,
    pub company_no: Option<String>,
    pub owner_name: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub cust_status_seq: Option<i64>,

    // Detail fields, edited in the detail dialog.
    pub country_seq: Option<i64>,
    pub country_name: Option<String>,
    pub dom_for_seq: Option<i64>,
    pub dom_for: Option<String>,
    pub kor_addr: Option<String>,
    pub eng_addr: Option<String>,
    pub zip_code: Option<String>,
    pub fax: Option<String>,
    pub home_page: Option<String>,
    pub owner_jp_name: Option<String>,
    pub set_up_date: Option<String>,
    pub trans_open_date: Option<String>,
    pub trans_close_date: Option<String>,
}

impl Customer {
    /// Payload for `POST /customer`. The backend assigns the seq.
    #[must_use]
    pub fn create_payload(&self) -> Self {
        Self {
            seq: None,
            ..self.clone()
        }
    }
}

/// Code tables backing the customer dropdowns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMinor {
    pub cust_company_type: Vec<MinorCode>,
    pub company_type: Vec<MinorCode>,
    pub cust_status: Vec<MinorCode>,
    pub dom_for: Vec<MinorCode>,
}

impl CustomerMinor {
    /// Company types offered when creating a customer. The internal type
    /// is reserved for the operator's own company.
    pub fn creatable_company_types(&self) -> impl Iterator<Item = &MinorCode> {
        self.cust_company_type
            .iter()
            .filter(|code| code.seq != CUST_COMPANY_TYPE_INTERNAL)
    }
}

/// The create dialog's working copy. Every field is mandatory; dropdowns
/// use 0 for "not chosen yet".
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub company_name: String,
    pub company_short_name: String,
    pub cust_company_type_seq: i64,
    pub company_type_seq: i64,
    pub company_no: String,
    pub owner_name: String,
    pub tel: String,
    pub email: String,
    pub cust_status_seq: i64,
}

impl CustomerDraft {
    /// Field keys still missing a value, empty when the draft can be
    /// submitted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut require = |ok: bool, key: &'static str| {
            if !ok {
                missing.push(key);
            }
        };
        require(!self.company_name.is_empty(), "companyName");
        require(!self.company_short_name.is_empty(), "companyShortName");
        require(self.cust_company_type_seq != 0, "custCompanyTypeSeq");
        require(self.company_type_seq != 0, "companyTypeSeq");
        require(!self.company_no.is_empty(), "companyNo");
        require(!self.owner_name.is_empty(), "ownerName");
        require(!self.tel.is_empty(), "tel");
        require(!self.email.is_empty(), "email");
        require(self.cust_status_seq != 0, "custStatusSeq");
        missing
    }

    /// Converts a complete draft into a row ready for `create_payload`.
    pub fn to_row(&self) -> Customer {
        Customer {
            company_name: Some(self.company_name.clone()),
            company_short_name: Some(self.company_short_name.clone()),
            cust_company_type_seq: Some(self.cust_company_type_seq),
            company_type_seq: Some(self.company_type_seq),
            company_no: Some(self.company_no.clone()),
            owner_name: Some(self.owner_name.clone()),
            tel: Some(self.tel.clone()),
            email: Some(self.email.clone()),
            cust_status_seq: Some(self.cust_status_seq),
            ..Customer::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> CustomerDraft {
        CustomerDraft {
            company_name: "Acme".to_owned(),
            company_short_name: "ACM".to_owned(),
            cust_company_type_seq: 1003002,
            company_type_seq: 1004001,
            company_no: "110-81-12345".to_owned(),
            owner_name: "Kim".to_owned(),
            tel: "02-123-4567".to_owned(),
            email: "kim@acme.test".to_owned(),
            cust_status_seq: 1005001,
        }
    }

    #[test]
    fn draft_reports_each_missing_field() {
        let mut draft = complete_draft();
        assert!(draft.missing_fields().is_empty());
        draft.tel.clear();
        draft.cust_status_seq = 0;
        assert_eq!(draft.missing_fields(), vec!["tel", "custStatusSeq"]);
    }

    #[test]
    fn create_payload_has_no_seq_or_labels() {
        let row = Customer {
            seq: Some(11),
            cust_company_type: Some("Partner".to_owned()),
            company_type: Some("Corp".to_owned()),
            ..complete_draft().to_row()
        };
        let json = serde_json::to_value(row.create_payload()).unwrap();
        assert!(json.get("seq").is_none());
        assert!(json.get("custCompanyType").is_none());
        assert!(json.get("companyType").is_none());
        assert_eq!(json["companyName"], "Acme");
    }

    #[test]
    fn update_keeps_seq_but_strips_labels() {
        let row = Customer {
            seq: Some(11),
            cust_company_type: Some("Partner".to_owned()),
            ..complete_draft().to_row()
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["seq"], 11);
        assert!(json.get("custCompanyType").is_none());
    }

    #[test]
    fn internal_company_type_is_not_creatable() {
        let minor = CustomerMinor {
            cust_company_type: vec![
                MinorCode {
                    seq: CUST_COMPANY_TYPE_INTERNAL,
                    remark: "Internal".to_owned(),
                },
                MinorCode {
                    seq: 1003002,
                    remark: "Partner".to_owned(),
                },
            ],
            ..CustomerMinor::default()
        };
        let seqs: Vec<i64> = minor.creatable_company_types().map(|c| c.seq).collect();
        assert_eq!(seqs, vec![1003002]);
    }
}
