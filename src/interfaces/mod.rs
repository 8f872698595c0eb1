use crate::metadata::PhoneNumberDesc;

/// Internal phone-number matching API. Isolates the underlying matcher
/// implementation so that a different one can be swapped in easily.
pub(crate) trait MatcherApi {
    /// Returns whether the given national number (a string of decimal
    /// digits) matches both the possible-number and the national-number
    /// pattern of the given descriptor.
    fn match_national_number(&self, number: &str, number_desc: &PhoneNumberDesc) -> bool;
}
