// Copyright (C) 2009 The Libphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// The closed set of reasons parsing can fail. Once raised these are
/// propagated to the caller; the comparison and possibility checks fold
/// them into their own sentinels instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// No default region was available and the input carried no
    /// international prefix, or an explicit country code could not be
    /// matched against the calling-code table.
    #[error("Invalid country calling code")]
    InvalidCountryCode,
    /// The input is empty or does not satisfy the viability grammar.
    #[error("The string supplied did not seem to be a phone number")]
    NotANumber,
    /// After stripping an international dialing prefix, not enough digits
    /// remain.
    #[error("Phone number too short after IDD")]
    TooShortAfterIdd,
    /// The national significant number is shorter than the minimum length.
    #[error("The string supplied is too short to be a phone number")]
    TooShortNsn,
    /// The national significant number (or the input itself) is longer
    /// than a phone number can be.
    #[error("The string supplied is too long to be a phone number")]
    TooLong,
}
