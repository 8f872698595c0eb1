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

/// The minimum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
/// The ITU says the maximum length should be 15, but one or two countries
/// have longer numbers in practice.
pub const MAX_LENGTH_FOR_NSN: usize = 16;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Input longer than this is certainly not a phone number; the cap also
/// bounds worst-case regex work on hostile input.
pub const MAX_INPUT_STRING_LENGTH: usize = 250;

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// The prefix that needs to be inserted in front of a Colombian landline
/// number when dialed from a mobile phone in Colombia.
pub const COLOMBIA_MOBILE_TO_FIXED_LINE_PREFIX: &str = "3";

pub const PLUS_SIGN: &str = "+";
pub const STAR_SIGN: &str = "*";
pub const PLUS_CHARS: &str = "+\u{FF0B}";

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";
pub const RFC3966_PHONE_CONTEXT: &str = ";phone-context=";
pub const RFC3966_ISDN_SUBADDRESS: &str = ";isub=";

/// Region code reserved for non-geographical entities such as
/// international toll-free numbers.
pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

/// Default extension prefix used when formatting, unless overridden by a
/// region-specific preference. The space before and after is deliberate.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";

/// Acceptable punctuation found in phone numbers, as a character-class
/// body. This excludes punctuation found only as a leading character.
/// Dashes, whitespace, full stops, slashes, brackets, parentheses and
/// tildes, plus the letter 'x' (a placeholder for carrier information in
/// some numbers). Full-width variants are included.
pub const VALID_PUNCTUATION: &str = "-x\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \
\u{00A0}\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

/// Digits accepted in phone numbers, as a character-class body: ASCII,
/// fullwidth, Arabic-Indic and Eastern-Arabic digits.
pub const VALID_DIGITS: &str = "0-9\u{FF10}-\u{FF19}\u{0660}-\u{0669}\u{06F0}-\u{06F9}";

/// Alpha characters accepted in phone numbers, ASCII only.
pub const VALID_ALPHA: &str = "A-Za-z";
