use std::any::Any;

use manage_business::entities::{Customer, CustomerDraft, CustomerMinor};
use manage_business::{Country, FetchStatus, FilterForm, GridState};
use manage_states::State;

/// Working copy behind the create dialog, plus which required fields the
/// last submit attempt was missing.
#[derive(Default)]
pub struct CreateCustomerDialog {
    pub draft: CustomerDraft,
    pub missing: Vec<&'static str>,
}

/// The detail dialog edits a clone of the row; the grid row is only
/// replaced by the refetch after a successful save.
pub struct DetailDialog {
    pub row: Customer,
}

pub struct CustomerPageState {
    pub grid: GridState,
    pub rows: Vec<Customer>,
    pub minor: Option<CustomerMinor>,
    pub minor_status: FetchStatus,
    pub country: Vec<Country>,
    pub country_status: FetchStatus,
    pub create_dialog: Option<CreateCustomerDialog>,
    pub detail_dialog: Option<DetailDialog>,
    pub lookups_requested: bool,
}

impl Default for CustomerPageState {
    fn default() -> Self {
        let filter = FilterForm::new()
            .text_field("companyName")
            .text_field("companyShortName")
            .code_field("custCompanyTypeSeq")
            .code_field("companyTypeSeq")
            .text_field("companyNo")
            .text_field("ownerName")
            .text_field("tel")
            .text_field("email")
            .code_field("custStatusSeq");
        Self {
            grid: GridState::with_filter(filter),
            rows: Vec::new(),
            minor: None,
            minor_status: FetchStatus::Fetching,
            country: Vec::new(),
            country_status: FetchStatus::Fetching,
            create_dialog: None,
            detail_dialog: None,
            lookups_requested: false,
        }
    }
}

impl CustomerPageState {
    /// Screen status: the grid and both lookups must all be in.
    pub fn combined_status(&self) -> FetchStatus {
        FetchStatus::combine_all([self.grid.status, self.minor_status, self.country_status])
    }
}

impl State for CustomerPageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
