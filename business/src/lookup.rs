use serde::Deserialize;

/// One entry of a code table, e.g. a customer status or a company type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MinorCode {
    pub seq: i64,
    pub remark: String,
}

/// A dropdown choice. `value` 0 is the synthetic "all" entry used by
/// filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub value: i64,
    pub label: String,
}

/// Builds dropdown options with a leading "all" entry.
pub fn options_with_all(all_label: &str, codes: &[MinorCode]) -> Vec<OptionItem> {
    let mut options = Vec::with_capacity(codes.len() + 1);
    options.push(OptionItem {
        value: 0,
        label: all_label.to_owned(),
    });
    options.extend(codes.iter().map(|code| OptionItem {
        value: code.seq,
        label: code.remark.clone(),
    }));
    options
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country_seq: i64,
    pub country_name: String,
}

/// The operator's own company, shown on the usage screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub company_no: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub emp_count: Option<i64>,
}

/// A node of the department tree used when assigning employees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub dept_seq: i64,
    pub dept_name: String,
    pub dept_level: i64,
    pub company_name: String,
}
