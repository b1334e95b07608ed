use serde::Deserialize;

/// One line of the usage bill, as returned by `GET /usage`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceData {
    pub date: Option<String>,
    pub service_code: Option<i64>,
    pub service_name: Option<String>,
    pub used_count: Option<i64>,
    pub curr_unit: Option<String>,
    pub used_price: Option<f64>,
    pub total_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_rows() {
        let row: PriceData = serde_json::from_str(
            r#"{"date":"2025-07-01","serviceName":"OCR","usedCount":120,"totalPrice":36.5}"#,
        )
        .unwrap();
        assert_eq!(row.service_name.as_deref(), Some("OCR"));
        assert_eq!(row.used_count, Some(120));
        assert_eq!(row.service_code, None);
    }
}
