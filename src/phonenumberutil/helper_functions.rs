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

use std::collections::{HashMap, HashSet};

use strum::IntoEnumIterator;

use crate::{
    metadata::{PhoneMetadata, PhoneNumberDesc},
    phonenumber::PhoneNumber,
};

use super::{
    enums::{PhoneNumberFormat, PhoneNumberType},
    helper_constants::{PLUS_SIGN, RFC3966_PREFIX},
};

/// Returns the descriptor inside the metadata for the given number type.
pub(super) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

/// A helper used by `format` and `format_by_pattern`: prepends the country
/// calling code to an already formatted national number, in the way the
/// target format requires.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    match number_format {
        PhoneNumberFormat::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );
            *formatted_number = new_str;
        }
        PhoneNumberFormat::National => {}
    }
}

/// Returns true when one national number is a suffix of the other, or both
/// are the same.
pub(super) fn is_national_number_suffix_of_the_other(
    first_number: &PhoneNumber,
    second_number: &PhoneNumber,
) -> bool {
    let mut first_buf = itoa::Buffer::new();
    let first_national_number = first_buf.format(first_number.national_number());
    let mut second_buf = itoa::Buffer::new();
    let second_national_number = second_buf.format(second_number.national_number());
    first_national_number.ends_with(second_national_number)
        || second_national_number.ends_with(first_national_number)
}

/// Normalizes a string of characters representing a phone number by
/// replacing every character found in `normalization_replacements` with the
/// value therein, and stripping all other characters if
/// `remove_non_matches` is true. Lookup is done on the ASCII-uppercased
/// character.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char.to_ascii_uppercase())
        {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // Neither replaceable nor kept: the character is dropped.
    }
    normalized_number
}

/// Returns true if the descriptor has any data set for its number type.
pub(super) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    desc.has_national_number_pattern() || desc.has_possible_number_pattern() || desc.has_example_number()
}

/// Returns the number types there is metadata for in this region.
pub(super) fn get_supported_types_for_metadata(
    metadata: &PhoneMetadata,
) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // FIXED_LINE_OR_MOBILE is a convenience value and UNKNOWN the
        // non-type; neither is ever "supported".
        .filter(|number_type| {
            !matches!(
                number_type,
                PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Unknown
            )
        })
        .filter(|number_type| desc_has_data(get_number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Copies only the fields that uniquely identify a phone number, leaving
/// behind everything that captures parsing context (raw input, country
/// code source, carrier code). An empty extension and an explicit
/// `italian_leading_zero == false` are treated as absent.
pub(crate) fn copy_core_fields_only(from_number: &PhoneNumber, to_number: &mut PhoneNumber) {
    to_number.set_country_code(from_number.country_code());
    to_number.set_national_number(from_number.national_number());
    if from_number.has_extension() && !from_number.extension().is_empty() {
        to_number.set_extension(from_number.extension().to_owned());
    }
    if from_number.italian_leading_zero() {
        to_number.set_italian_leading_zero(true);
    }
}
