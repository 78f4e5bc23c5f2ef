//! Business logic services.

#![allow(missing_docs)]

pub mod profile_form;

pub use profile_form::{ProfileForm, TextField};
