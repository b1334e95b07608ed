use bon::Builder;
use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const CHECKBOX_WIDTH: f32 = 28.0;

/// Describes one grid column: the sort key sent to the backend plus how
/// the header is drawn. Cell content is rendered by the owning page.
#[derive(Debug, Clone, Builder)]
pub struct ColumnSpec {
    /// Backend column key, also used for `sort[..][columnKey]`.
    #[builder(into)]
    pub key: String,
    #[builder(into)]
    pub title: String,
    #[builder(default)]
    pub sortable: bool,
    /// Fixed width; flexible when absent.
    pub width: Option<f32>,
}

impl ColumnSpec {
    pub fn layout(&self) -> Column {
        match self.width {
            Some(width) => Column::exact(width),
            None => Column::remainder().at_least(80.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_unsortable_flexible() {
        let spec = ColumnSpec::builder().key("tel").title("Tel").build();
        assert_eq!(spec.key, "tel");
        assert!(!spec.sortable);
        assert!(spec.width.is_none());
    }
}
