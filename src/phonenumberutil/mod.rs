mod helper_constants;
mod helper_functions;
mod helper_types;
mod regexps_and_mappings;
pub mod enums;
pub mod errors;
pub mod phonenumberutil;

pub use enums::{MatchType, PhoneNumberFormat, PhoneNumberType, ValidationResult};
pub use errors::ParseError;
pub use phonenumberutil::PhoneNumberUtil;
