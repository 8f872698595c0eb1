mod interfaces;
pub mod i18n;
pub mod metadata;
mod phonenumber;
pub mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
pub(crate) mod regex_util;

/// This module exists because there are a few boilerplate places in the
/// code that read better as a macro whose name says what is happening.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumberutil::{
    enums::{MatchType, PhoneNumberFormat, PhoneNumberType, ValidationResult},
    errors::ParseError,
    phonenumberutil::PhoneNumberUtil,
};
