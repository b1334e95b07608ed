//! Row types and write payloads per screen, with the wire field names
//! the backend expects.

pub mod customer;
pub mod department;
pub mod employee;
pub mod representative;
pub mod signup_approval;
pub mod usage;

pub use customer::{CUST_COMPANY_TYPE_INTERNAL, Customer, CustomerDraft, CustomerMinor};
pub use department::{Department, DepartmentDraft};
pub use employee::{Employee, GENDER_FEMALE_SEQ, GENDER_MALE_SEQ};
pub use representative::Representative;
pub use signup_approval::{ApprovalUpdate, SignupApplicant};
pub use usage::PriceData;
