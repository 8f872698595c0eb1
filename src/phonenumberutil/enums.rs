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

use strum::EnumIter;

/// The standardized formats a phone number can be rendered into.
///
/// `International` and `National` align with the ITU-T E.123
/// recommendation, using local separator conventions. For example, the
/// Google Switzerland office number would be:
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without separators)
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` followed by the country code and national significant number,
    /// with no separators and no extension.
    E164,
    /// Country code plus the nationally formatted number, separated with
    /// spaces for readability.
    International,
    /// The format used when dialing within the number's own country,
    /// possibly including a national prefix.
    National,
    /// The `tel:` URI form, hyphen-separated, with any extension appended
    /// as `;ext=`.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be distinguished by looking at the number itself.
    FixedLineOrMobile,
    /// Freephone lines; the recipient pays for the call.
    TollFree,
    /// Numbers charging a higher rate than normal calls.
    PremiumRate,
    /// The call cost is shared between caller and recipient.
    SharedCost,
    /// Voice over IP numbers, including TSoIP.
    VoIP,
    /// A number associated with a person rather than a location or device;
    /// it may be routed to either a mobile or a fixed line.
    PersonalNumber,
    /// Numbers for paging devices.
    Pager,
    /// Universal Access Numbers: one company number routed to different
    /// offices.
    UAN,
    /// Voicemail access numbers.
    VoiceMail,
    /// The number does not fit any known pattern for its region.
    Unknown,
}

/// The degree of similarity between two phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// At least one operand could not be parsed as a phone number at all.
    NotANumber,
    /// The numbers are different.
    NoMatch,
    /// One national significant number is a shorter trailing form of the
    /// other, or they differ only in leading zero or extension presence.
    ShortNsnMatch,
    /// The national significant numbers match but at least one operand
    /// carried no country code.
    NsnMatch,
    /// Country code, national significant number, leading-zero flag and
    /// extension all match.
    ExactMatch,
}

/// Possible outcomes when testing whether a phone number is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    /// The number length matches numbers in this region.
    IsPossible,
    /// The number has an invalid country calling code.
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    TooShort,
    /// The number is longer than all valid numbers for this region.
    TooLong,
}
