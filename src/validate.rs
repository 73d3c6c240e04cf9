//! Field checks run on a record before it is handed to a generator.
//!
//! Generators assume their input is valid and never check it themselves.
//! Every failing field is reported, not just the first.

use crate::record::{ContractRecord, CvRecord, DocumentRecord, InvoiceRecord};
use std::fmt;
use thiserror::Error;

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const AT_LEAST_ONE: &str = "Must be at least 1";
pub const POSITIVE: &str = "Must be greater than 0";

// Contracts word their messages per field
pub const PROVIDER_NAME_REQUIRED: &str = "Provider name is required";
pub const CLIENT_NAME_REQUIRED: &str = "Client name is required";
pub const INVALID_EMAIL_ADDRESS: &str = "Invalid email address";
pub const PROJECT_TITLE_REQUIRED: &str = "Project title is required";
pub const PROJECT_DESCRIPTION_REQUIRED: &str = "Project description is required";
pub const START_DATE_REQUIRED: &str = "Start date is required";
pub const END_DATE_REQUIRED: &str = "End date is required";
pub const TOTAL_AMOUNT_POSITIVE: &str = "Total amount must be greater than zero";
pub const PAYMENT_TERMS_REQUIRED: &str = "Payment terms are required";
pub const GOVERNING_LAW_REQUIRED: &str = "Governing law is required";

/// Smallest accepted money amount
const MIN_AMOUNT: f64 = 0.01;

/// A single failing field, named by its JSON path (e.g. `sender.email`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in the order the fields were checked
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{} invalid field(s): {}", .errors.len(), list(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field`, if it failed
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn push(&mut self, field: &str, message: &'static str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }

    fn required(&mut self, field: &str, value: &str) {
        self.required_as(field, value, REQUIRED);
    }

    fn required_as(&mut self, field: &str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    fn email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, REQUIRED);
        } else if !looks_like_email(value) {
            self.push(field, INVALID_EMAIL);
        }
    }

    /// A blank address is just another malformed one
    fn email_as(&mut self, field: &str, value: &str, message: &'static str) {
        if !looks_like_email(value) {
            self.push(field, message);
        }
    }

    fn amount(&mut self, field: &str, value: f64, message: &'static str) {
        if !value.is_finite() || value < MIN_AMOUNT {
            self.push(field, message);
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// `local@domain.tld` with no whitespace and nothing empty
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Something that can check its own fields
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for InvoiceRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.required("sender.name", &self.sender.name);
        errors.email("sender.email", &self.sender.email);
        errors.required("sender.address", &self.sender.address);
        errors.required("client.name", &self.client.name);
        errors.email("client.email", &self.client.email);
        errors.required("client.address", &self.client.address);
        errors.required("invoiceNumber", &self.invoice_number);
        errors.required("issueDate", &self.issue_date);
        errors.required("dueDate", &self.due_date);
        errors.required("item.description", &self.item.description);
        if self.item.quantity < 1 {
            errors.push("item.quantity", AT_LEAST_ONE);
        }
        errors.amount("item.rate", self.item.rate, POSITIVE);
        errors.into_result()
    }
}

impl Validate for CvRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let p = &self.personal;
        errors.required("personal.fullName", &p.full_name);
        errors.required("personal.jobTitle", &p.job_title);
        errors.email("personal.email", &p.email);
        errors.required("personal.phone", &p.phone);
        errors.required("personal.location", &p.location);
        errors.required("summary", &self.summary);
        errors.required("experience.title", &self.experience.title);
        errors.required("experience.company", &self.experience.company);
        errors.required("experience.dates", &self.experience.dates);
        errors.required("experience.description", &self.experience.description);
        errors.required("education.degree", &self.education.degree);
        errors.required("education.school", &self.education.school);
        errors.required("education.dates", &self.education.dates);
        errors.required("skills", &self.skills);
        errors.into_result()
    }
}

impl Validate for ContractRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.required_as("provider.name", &self.provider.name, PROVIDER_NAME_REQUIRED);
        errors.email_as("provider.email", &self.provider.email, INVALID_EMAIL_ADDRESS);
        errors.required_as("client.name", &self.client.name, CLIENT_NAME_REQUIRED);
        errors.email_as("client.email", &self.client.email, INVALID_EMAIL_ADDRESS);
        errors.required_as("project.title", &self.project.title, PROJECT_TITLE_REQUIRED);
        errors.required_as(
            "project.description",
            &self.project.description,
            PROJECT_DESCRIPTION_REQUIRED,
        );
        errors.required_as("timeline.startDate", &self.timeline.start_date, START_DATE_REQUIRED);
        errors.required_as("timeline.endDate", &self.timeline.end_date, END_DATE_REQUIRED);
        errors.amount("payment.totalAmount", self.payment.total_amount, TOTAL_AMOUNT_POSITIVE);
        errors.required_as("payment.terms", &self.payment.terms, PAYMENT_TERMS_REQUIRED);
        errors.required_as("governingLaw", &self.governing_law, GOVERNING_LAW_REQUIRED);
        errors.into_result()
    }
}

impl Validate for DocumentRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            DocumentRecord::Invoice(invoice) => invoice.validate(),
            DocumentRecord::Cv(cv) => cv.validate(),
            DocumentRecord::Contract(contract) => contract.validate(),
        }
    }
}
