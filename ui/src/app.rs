//! The eframe application: session bootstrap, navigation and the
//! per-screen dispatch.

use egui::{CentralPanel, TopBottomPanel};
use manage_business::{FetchStatus, ManageConfig, Section, UserPosType};
use manage_states::{StateCtx, Time};

use crate::api::{Session, fetch_userinfo, poll_userinfo};
use crate::pages;
use crate::widgets::{ToastBus, show_toasts};

pub struct ManageApp {
    ctx: StateCtx,
    section: Section,
    userinfo_requested: bool,
}

impl ManageApp {
    pub fn new(mut ctx: StateCtx) -> Self {
        ctx.add_state(ToastBus::default());
        ctx.add_state(Session::default());
        Self {
            ctx,
            section: Section::Customer,
            userinfo_requested: false,
        }
    }

    /// Leaving a screen unmounts it: its state, including any armed
    /// debounce deadline and row selection, is dropped so nothing fires
    /// or lingers when the operator comes back.
    fn switch_section(&mut self, section: Section) {
        if self.section == section {
            return;
        }
        match self.section {
            Section::Customer => self.ctx.remove_state::<pages::CustomerPageState>(),
            Section::Department => self.ctx.remove_state::<pages::DepartmentPageState>(),
            Section::Employee => self.ctx.remove_state::<pages::EmployeePageState>(),
            Section::Representative => self.ctx.remove_state::<pages::RepresentativePageState>(),
            Section::SignupApproval => self.ctx.remove_state::<pages::SignupApprovalPageState>(),
            Section::Usage => self.ctx.remove_state::<pages::UsagePageState>(),
        }
        self.section = section;
    }

    fn show(&mut self, egui_ctx: &egui::Context) {
        self.ctx.state_mut::<Time>().tick();
        let now = *self.ctx.state_mut::<Time>().as_ref();

        if !self.userinfo_requested {
            self.userinfo_requested = true;
            let api_url = self.ctx.state_mut::<ManageConfig>().api_url();
            fetch_userinfo(&api_url, egui_ctx.clone());
        }

        let session = self.ctx.state_mut::<Session>();
        poll_userinfo(session, egui_ctx);
        let session_status = session.status;
        let pos_type = session.info.as_ref().map(|info| info.user_pos_type);

        // Fall off a screen the operator is not allowed to see.
        if let Some(pos_type) = pos_type
            && !pos_type.can_view(self.section)
            && let Some(section) = Section::ALL.iter().find(|s| pos_type.can_view(**s))
        {
            self.switch_section(*section);
        }

        let current = self.section;
        let mut clicked = None;
        TopBottomPanel::top("nav").show(egui_ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Manage");
                ui.separator();
                match pos_type {
                    Some(pos_type) => {
                        for section in Section::ALL {
                            if !pos_type.can_view(section) {
                                continue;
                            }
                            if ui
                                .selectable_label(current == section, section.title())
                                .clicked()
                            {
                                clicked = Some(section);
                            }
                        }
                    }
                    None if session_status == FetchStatus::Error => {
                        ui.label("Could not load your account");
                    }
                    None => {
                        ui.spinner();
                    }
                }
            });
        });
        if let Some(section) = clicked {
            self.switch_section(section);
        }

        CentralPanel::default().show(egui_ctx, |ui| {
            let Some(pos_type) = pos_type else {
                return;
            };
            if pos_type == UserPosType::N {
                ui.label("This account has no access to the console.");
                return;
            }
            let toasts = self.ctx.state_mut::<ToastBus>().sender();
            match self.section {
                Section::Customer => pages::customer_page(&mut self.ctx, &toasts, ui),
                Section::Department => pages::department_page(&mut self.ctx, &toasts, ui),
                Section::Employee => pages::employee_page(&mut self.ctx, &toasts, ui),
                Section::Representative => pages::representative_page(&mut self.ctx, &toasts, ui),
                Section::SignupApproval => pages::signup_approval_page(&mut self.ctx, &toasts, ui),
                Section::Usage => pages::usage_page(&mut self.ctx, ui),
            }
        });

        let bus = self.ctx.state_mut::<ToastBus>();
        bus.sync(now);
        show_toasts(egui_ctx, bus);
    }
}

impl eframe::App for ManageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod app_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use manage_business::UserInfo;

    fn app_with(pos_type: UserPosType) -> ManageApp {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(ManageConfig::new("http://test"));
        let mut app = ManageApp::new(ctx);
        app.userinfo_requested = true;
        let session = app.ctx.state_mut::<Session>();
        session.info = Some(UserInfo {
            user_id: "admin".to_owned(),
            company_seq: 1,
            user_pos_type: pos_type,
        });
        session.status = FetchStatus::Success;
        app
    }

    #[test]
    fn grade_g_gets_the_full_navigation() {
        let mut app = app_with(UserPosType::G);
        let harness = Harness::new_state(|ctx, app: &mut &mut ManageApp| app.show(ctx), &mut app);
        for title in [
            "Customers",
            "Departments",
            "Employees",
            "Representatives",
            "Signup approval",
            "Usage",
        ] {
            assert!(harness.query_by_label_contains(title).is_some(), "{title}");
        }
    }

    #[test]
    fn grade_a_hides_customer_screens() {
        let mut app = app_with(UserPosType::A);
        let harness = Harness::new_state(|ctx, app: &mut &mut ManageApp| app.show(ctx), &mut app);
        assert!(harness.query_by_label_contains("Customers").is_none());
        assert!(harness.query_by_label_contains("Representatives").is_none());
        assert!(harness.query_by_label_contains("Departments").is_some());
        drop(harness);
        assert_eq!(app.section, Section::Department);
    }

    #[test]
    fn leaving_a_screen_drops_its_state() {
        let mut app = app_with(UserPosType::G);
        let mut harness = Harness::new_state(|ctx, app: &mut &mut ManageApp| app.show(ctx), &mut app);
        harness.run();
        harness.get_by_label("Departments").click();
        harness.run();
        drop(harness);

        // The customer screen was unmounted by the switch, so any armed
        // filter debounce went with it.
        assert_eq!(app.section, Section::Department);
        assert!(!app.ctx.has_state::<pages::CustomerPageState>());
        assert!(app.ctx.has_state::<pages::DepartmentPageState>());
    }

    #[test]
    fn grade_n_is_locked_out() {
        let mut app = app_with(UserPosType::N);
        let harness = Harness::new_state(|ctx, app: &mut &mut ManageApp| app.show(ctx), &mut app);
        assert!(
            harness
                .query_by_label_contains("no access to the console")
                .is_some()
        );
        assert!(harness.query_by_label_contains("Departments").is_none());
    }
}
