//! Command handlers
//!
//! One module per entity collection. Handlers build a form from CLI
//! arguments, run the submission gate, and only then touch the resource;
//! a failed gate prints the field errors inline and never reaches the
//! network.

pub mod clients;
pub mod sessions;
pub mod trainers;

use colored::Colorize;

use crate::forms::FieldError;

/// Print gate failures the way a form would show them inline.
pub(crate) fn report_field_errors(errors: &[FieldError]) {
    eprintln!("{}", "Submission rejected:".red().bold());
    for error in errors {
        eprintln!("  {} {}", "-".red(), error);
    }
}
