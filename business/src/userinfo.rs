use serde::Deserialize;

/// Position grade attached to the signed-in operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UserPosType {
    /// Full access.
    G,
    /// Everything except customer and representative screens.
    A,
    /// No access to the console at all.
    N,
}

/// The console's screens, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Customer,
    Department,
    Employee,
    Representative,
    SignupApproval,
    Usage,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Customer,
        Self::Department,
        Self::Employee,
        Self::Representative,
        Self::SignupApproval,
        Self::Usage,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Customer => "Customers",
            Self::Department => "Departments",
            Self::Employee => "Employees",
            Self::Representative => "Representatives",
            Self::SignupApproval => "Signup approval",
            Self::Usage => "Usage",
        }
    }

    /// REST resource under the API root.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Department => "department",
            Self::Employee => "employee",
            Self::Representative => "representative",
            Self::SignupApproval => "signup-approval",
            Self::Usage => "usage",
        }
    }
}

impl UserPosType {
    pub fn can_view(self, section: Section) -> bool {
        match self {
            Self::G => true,
            Self::A => !matches!(section, Section::Customer | Section::Representative),
            Self::N => false,
        }
    }

    /// Whether the manage console should appear at all.
    pub fn has_console_access(self) -> bool {
        self != Self::N
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    pub company_seq: i64,
    pub user_pos_type: UserPosType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_a_loses_customer_screens() {
        assert!(UserPosType::A.can_view(Section::Department));
        assert!(UserPosType::A.can_view(Section::Usage));
        assert!(!UserPosType::A.can_view(Section::Customer));
        assert!(!UserPosType::A.can_view(Section::Representative));
    }

    #[test]
    fn grade_n_sees_nothing() {
        assert!(!UserPosType::N.has_console_access());
        assert!(Section::ALL.iter().all(|s| !UserPosType::N.can_view(*s)));
    }

    #[test]
    fn userinfo_decodes_pos_type() {
        let info: UserInfo = serde_json::from_str(
            r#"{"userId":"admin","companySeq":12,"userPosType":"G"}"#,
        )
        .unwrap();
        assert_eq!(info.user_pos_type, UserPosType::G);
        assert!(info.user_pos_type.can_view(Section::Customer));
    }
}
