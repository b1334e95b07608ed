//! One module per console screen.

pub mod customer;
pub mod department;
pub mod employee;
pub mod representative;
pub mod signup_approval;
pub mod usage;

pub use customer::{CustomerPageState, customer_page};
pub use department::{DepartmentPageState, department_page};
pub use employee::{EmployeePageState, employee_page};
pub use representative::{RepresentativePageState, representative_page};
pub use signup_approval::{SignupApprovalPageState, signup_approval_page};
pub use usage::{UsagePageState, usage_page};
