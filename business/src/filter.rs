/// One filter field's current value.
///
/// `Code` fields are backed by a lookup dropdown; `None` means the "all"
/// entry is selected and the field should not reach the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Code(Option<i64>),
}

impl FilterValue {
    fn clear(&mut self) {
        match self {
            Self::Text(text) => text.clear(),
            Self::Code(code) => *code = None,
        }
    }
}

/// A screen's filter panel: an enable switch plus its fields, in display
/// order.
///
/// Disabling the panel keeps every typed value around so re-enabling
/// restores the previous criteria unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub enabled: bool,
    fields: Vec<(String, FilterValue)>,
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text_field(mut self, key: impl Into<String>) -> Self {
        self.fields
            .push((key.into(), FilterValue::Text(String::new())));
        self
    }

    #[must_use]
    pub fn code_field(mut self, key: impl Into<String>) -> Self {
        self.fields.push((key.into(), FilterValue::Code(None)));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.iter().find_map(|(k, value)| match value {
            FilterValue::Text(text) if k == key => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn code(&self, key: &str) -> Option<i64> {
        self.fields.iter().find_map(|(k, value)| match value {
            FilterValue::Code(code) if k == key => *code,
            _ => None,
        })
    }

    /// Returns true when the stored text actually changed.
    pub fn set_text(&mut self, key: &str, new_text: &str) -> bool {
        for (k, value) in &mut self.fields {
            if let FilterValue::Text(text) = value
                && k == key
            {
                if text == new_text {
                    return false;
                }
                new_text.clone_into(text);
                return true;
            }
        }
        false
    }

    /// Sets a dropdown field. The backend has no row with seq 0, so the
    /// "all" sentinel maps to no filter at all.
    pub fn set_code(&mut self, key: &str, seq: i64) -> bool {
        for (k, value) in &mut self.fields {
            if let FilterValue::Code(code) = value
                && k == key
            {
                let new_code = (seq != 0).then_some(seq);
                if *code == new_code {
                    return false;
                }
                *code = new_code;
                return true;
            }
        }
        false
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Clears every field value but leaves the enable switch alone.
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// Wire pairs, `filter[key]=value`. Empty when the panel is disabled;
    /// text fields are sent even when blank, unselected dropdowns are not.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        if !self.enabled {
            return Vec::new();
        }
        self.fields
            .iter()
            .filter_map(|(key, value)| match value {
                FilterValue::Text(text) => Some((format!("filter[{key}]"), text.clone())),
                FilterValue::Code(Some(code)) => {
                    Some((format!("filter[{key}]"), code.to_string()))
                }
                FilterValue::Code(None) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FilterForm {
        FilterForm::new()
            .text_field("custName")
            .code_field("custCompanyType")
    }

    #[test]
    fn disabled_form_sends_nothing() {
        let mut form = form();
        form.set_text("custName", "acme");
        assert!(form.query_pairs().is_empty());
    }

    #[test]
    fn toggling_preserves_values() {
        let mut form = form();
        form.set_enabled(true);
        form.set_text("custName", "acme");
        form.set_code("custCompanyType", 1003002);

        form.set_enabled(false);
        assert!(form.query_pairs().is_empty());

        form.set_enabled(true);
        assert_eq!(
            form.query_pairs(),
            vec![
                ("filter[custName]".to_owned(), "acme".to_owned()),
                ("filter[custCompanyType]".to_owned(), "1003002".to_owned()),
            ]
        );
    }

    #[test]
    fn zero_code_means_no_filter() {
        let mut form = form();
        form.set_enabled(true);
        form.set_code("custCompanyType", 1003002);
        assert!(form.set_code("custCompanyType", 0));
        assert_eq!(
            form.query_pairs(),
            vec![("filter[custName]".to_owned(), String::new())]
        );
    }

    #[test]
    fn set_text_reports_change() {
        let mut form = form();
        assert!(form.set_text("custName", "a"));
        assert!(!form.set_text("custName", "a"));
        assert!(!form.set_text("unknown", "a"));
    }

    #[test]
    fn reset_clears_values_not_enable() {
        let mut form = form();
        form.set_enabled(true);
        form.set_text("custName", "acme");
        form.set_code("custCompanyType", 1003002);
        form.reset();
        assert!(form.enabled);
        assert_eq!(form.text("custName"), Some(""));
        assert_eq!(form.code("custCompanyType"), None);
    }
}
