//! Create and detail dialogs for the customer screen.

use egui::{ComboBox, Grid, TextEdit, Ui, Window};
use manage_business::entities::CustomerMinor;
use manage_business::{Country, MinorCode};

use super::api::{create_customer, update_customer};
use super::state::CustomerPageState;

fn draft_text_row(ui: &mut Ui, label: &str, missing: bool, value: &mut String) {
    if missing {
        ui.colored_label(ui.visuals().error_fg_color, format!("{label} *"));
    } else {
        ui.label(label);
    }
    ui.add(TextEdit::singleline(value).desired_width(200.0));
    ui.end_row();
}

fn draft_code_row(
    ui: &mut Ui,
    id: &str,
    label: &str,
    missing: bool,
    value: &mut i64,
    codes: &[&MinorCode],
) {
    if missing {
        ui.colored_label(ui.visuals().error_fg_color, format!("{label} *"));
    } else {
        ui.label(label);
    }
    let selected = codes
        .iter()
        .find(|code| code.seq == *value)
        .map(|code| code.remark.clone())
        .unwrap_or_else(|| "-".to_owned());
    ComboBox::from_id_salt(("customer_create", id))
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, 0, "-");
            for code in codes {
                ui.selectable_value(value, code.seq, &code.remark);
            }
        });
    ui.end_row();
}

fn detail_text_row(ui: &mut Ui, label: &str, value: &mut Option<String>, editable: bool) {
    ui.label(label);
    let mut text = value.clone().unwrap_or_default();
    let response = ui.add_enabled(
        editable,
        TextEdit::singleline(&mut text).desired_width(200.0),
    );
    if response.changed() {
        *value = Some(text);
    }
    ui.end_row();
}

fn detail_code_row(
    ui: &mut Ui,
    id: &str,
    label: &str,
    value: &mut Option<i64>,
    options: &[(i64, String)],
) {
    ui.label(label);
    let selected = value
        .and_then(|seq| {
            options
                .iter()
                .find(|(v, _)| *v == seq)
                .map(|(_, label)| label.clone())
        })
        .unwrap_or_else(|| "-".to_owned());
    let mut chosen = value.unwrap_or(0);
    ComboBox::from_id_salt(("customer_detail", id))
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (seq, label) in options {
                ui.selectable_value(&mut chosen, *seq, label);
            }
        });
    if chosen != 0 {
        *value = Some(chosen);
    }
    ui.end_row();
}

/// The create dialog. All nine fields are required; submitting with any
/// of them empty marks the offenders instead of sending the request.
pub fn show_create_dialog(
    state: &mut CustomerPageState,
    minor: &CustomerMinor,
    api_url: &str,
    ui: &mut Ui,
) {
    let mut open = true;
    let mut submitted = false;
    let mut cancel = false;

    let Some(dialog) = state.create_dialog.as_mut() else {
        return;
    };

    Window::new("New customer")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let missing = |key: &'static str| dialog.missing.contains(&key);
            let creatable: Vec<&MinorCode> = minor.creatable_company_types().collect();
            let company_types: Vec<&MinorCode> = minor.company_type.iter().collect();
            let statuses: Vec<&MinorCode> = minor.cust_status.iter().collect();
            let missing_flags = [
                missing("companyName"),
                missing("companyShortName"),
                missing("custCompanyTypeSeq"),
                missing("companyTypeSeq"),
                missing("companyNo"),
                missing("ownerName"),
                missing("tel"),
                missing("email"),
                missing("custStatusSeq"),
            ];

            Grid::new("new_customer_form").num_columns(2).show(ui, |ui| {
                let draft = &mut dialog.draft;
                draft_text_row(ui, "Company", missing_flags[0], &mut draft.company_name);
                draft_text_row(
                    ui,
                    "Short name",
                    missing_flags[1],
                    &mut draft.company_short_name,
                );
                draft_code_row(
                    ui,
                    "cust_company_type",
                    "Customer type",
                    missing_flags[2],
                    &mut draft.cust_company_type_seq,
                    &creatable,
                );
                draft_code_row(
                    ui,
                    "company_type",
                    "Company type",
                    missing_flags[3],
                    &mut draft.company_type_seq,
                    &company_types,
                );
                draft_text_row(ui, "Company no.", missing_flags[4], &mut draft.company_no);
                draft_text_row(ui, "Owner", missing_flags[5], &mut draft.owner_name);
                draft_text_row(ui, "Tel", missing_flags[6], &mut draft.tel);
                draft_text_row(ui, "Email", missing_flags[7], &mut draft.email);
                draft_code_row(
                    ui,
                    "cust_status",
                    "Status",
                    missing_flags[8],
                    &mut draft.cust_status_seq,
                    &statuses,
                );
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Create").clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        open = false;
    }

    if submitted {
        dialog.missing = dialog.draft.missing_fields();
        if dialog.missing.is_empty() {
            create_customer(api_url, &dialog.draft.to_row(), ui.ctx().clone());
            state.create_dialog = None;
        }
    } else if !open {
        state.create_dialog = None;
    }
}

/// The detail dialog: the extra fields behind the grid row, edited on a
/// clone and saved with a single PUT.
pub fn show_detail_dialog(
    state: &mut CustomerPageState,
    minor: &CustomerMinor,
    countries: &[Country],
    api_url: &str,
    ui: &mut Ui,
) {
    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    let Some(dialog) = state.detail_dialog.as_mut() else {
        return;
    };

    let code_pairs = |codes: &[MinorCode]| -> Vec<(i64, String)> {
        codes.iter().map(|c| (c.seq, c.remark.clone())).collect()
    };
    let cust_company_types = code_pairs(&minor.cust_company_type);
    let company_types = code_pairs(&minor.company_type);
    let statuses = code_pairs(&minor.cust_status);
    let dom_for = code_pairs(&minor.dom_for);
    let country_options: Vec<(i64, String)> = countries
        .iter()
        .map(|c| (c.country_seq, c.country_name.clone()))
        .collect();

    Window::new("Customer detail")
        .open(&mut open)
        .collapsible(false)
        .show(ui.ctx(), |ui| {
            let row = &mut dialog.row;
            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                Grid::new("customer_detail_form").num_columns(2).show(ui, |ui| {
                    detail_text_row(ui, "Company", &mut row.company_name, true);
                    // The short name keys the account and cannot change.
                    detail_text_row(ui, "Short name", &mut row.company_short_name, false);
                    detail_code_row(
                        ui,
                        "cust_company_type",
                        "Customer type",
                        &mut row.cust_company_type_seq,
                        &cust_company_types,
                    );
                    detail_code_row(
                        ui,
                        "company_type",
                        "Company type",
                        &mut row.company_type_seq,
                        &company_types,
                    );
                    detail_code_row(ui, "cust_status", "Status", &mut row.cust_status_seq, &statuses);
                    detail_code_row(ui, "dom_for", "Domestic/foreign", &mut row.dom_for_seq, &dom_for);
                    detail_code_row(ui, "country", "Country", &mut row.country_seq, &country_options);
                    detail_text_row(ui, "Company no.", &mut row.company_no, true);
                    detail_text_row(ui, "Owner", &mut row.owner_name, true);
                    detail_text_row(ui, "Owner (JP)", &mut row.owner_jp_name, true);
                    detail_text_row(ui, "Tel", &mut row.tel, true);
                    detail_text_row(ui, "Fax", &mut row.fax, true);
                    detail_text_row(ui, "Email", &mut row.email, true);
                    detail_text_row(ui, "Homepage", &mut row.home_page, true);
                    detail_text_row(ui, "Address (KR)", &mut row.kor_addr, true);
                    detail_text_row(ui, "Address (EN)", &mut row.eng_addr, true);
                    detail_text_row(ui, "Zip code", &mut row.zip_code, true);
                    detail_text_row(ui, "Founded", &mut row.set_up_date, true);
                    detail_text_row(ui, "First transaction", &mut row.trans_open_date, true);
                    detail_text_row(ui, "Last transaction", &mut row.trans_close_date, true);
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        open = false;
    }

    if save {
        update_customer(api_url, &dialog.row, ui.ctx().clone());
        state.detail_dialog = None;
    } else if !open {
        state.detail_dialog = None;
    }
}
