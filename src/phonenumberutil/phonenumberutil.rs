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

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet, VecDeque},
    sync::Arc,
};

use log::{error, trace, warn};
use regex::{NoExpand, Regex};

use crate::{
    i18n,
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::{self, NumberFormat, PhoneMetadata},
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
};

use super::{
    enums::{MatchType, PhoneNumberFormat, PhoneNumberType, ValidationResult},
    errors::ParseError,
    helper_constants::{
        COLOMBIA_MOBILE_TO_FIXED_LINE_PREFIX, DEFAULT_EXTN_PREFIX, MAX_INPUT_STRING_LENGTH,
        MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, NANPA_COUNTRY_CODE,
        PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY, RFC3966_EXTN_PREFIX, RFC3966_ISDN_SUBADDRESS,
        RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
    },
    helper_functions::{
        copy_core_fields_only, get_number_desc_by_type, get_supported_types_for_metadata,
        is_national_number_suffix_of_the_other, normalize_helper,
        prefix_number_with_country_calling_code,
    },
    helper_types::StrippedNationalPrefix,
    regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};

/// The phone-number engine: parses, formats, validates, classifies and
/// compares phone numbers against the numbering-plan metadata it was
/// constructed with.
///
/// Construct one instance (cheap relative to its lifetime, all patterns
/// are compiled lazily and memoized) and share it; every operation takes
/// `&self` and the instance is `Send + Sync`.
pub struct PhoneNumberUtil {
    /// An API for checking numbers against descriptors.
    matcher_api: Box<dyn MatcherApi + Send + Sync>,

    /// Helper holding fixed regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes sharing
    /// it, main country first. Note NANPA regions share the calling code 1
    /// and La Réunion and Mayotte share 262. Implemented as a sorted
    /// vector for lookup by binary search.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// The set of regions under the North American Numbering Plan.
    nanpa_regions: HashSet<String>,

    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a non-geographical country calling code (e.g. 800
    /// for international toll free service) to its metadata.
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberUtil {
    /// Creates an engine over the bundled numbering-plan dataset.
    pub fn new() -> Self {
        Self::new_for_metadata(metadata::bundled_metadata())
    }

    /// Creates an engine over a caller-supplied dataset.
    pub fn new_for_metadata(metadata_collection: Vec<PhoneMetadata>) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map: Default::default(),
            nanpa_regions: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
        };
        // A temporary map so regions that share a calling code can be
        // grouped as they are encountered, main country first.
        let mut calling_code_to_regions = HashMap::<i32, VecDeque<String>>::new();
        for region_metadata in metadata_collection {
            let region_code = region_metadata.id().to_owned();
            if region_code == i18n::RegionCode::get_unknown() {
                continue;
            }

            let country_calling_code = region_metadata.country_code();
            let main_country = region_metadata.main_country_for_code();
            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, region_metadata);
            } else {
                instance
                    .region_to_metadata_map
                    .insert(region_code.clone(), region_metadata);
            }

            if let Some(regions) = calling_code_to_regions.get_mut(&country_calling_code) {
                if main_country {
                    regions.push_front(region_code.clone());
                } else {
                    regions.push_back(region_code.clone());
                }
            } else {
                // For most calling codes there is exactly one region.
                let mut regions = VecDeque::with_capacity(1);
                regions.push_back(region_code.clone());
                calling_code_to_regions.insert(country_calling_code, regions);
            }
            if country_calling_code == NANPA_COUNTRY_CODE {
                instance.nanpa_regions.insert(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            calling_code_to_regions
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);
        instance
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.region_to_metadata_map
            .keys()
            .map(String::as_str)
            .collect()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
            .collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        Some(get_supported_types_for_metadata(region_metadata))
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        let Some(region_metadata) = self
            .country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
        else {
            warn!(
                "Unknown country calling code for a non-geographical entity provided: {}",
                country_calling_code
            );
            return None;
        };
        Some(get_supported_types_for_metadata(region_metadata))
    }

    // ------------------------------------------------------------------
    // Metadata access
    // ------------------------------------------------------------------

    fn is_valid_region_code(&self, region_code: &str) -> bool {
        !region_code.is_empty()
            && self
                .region_to_metadata_map
                .contains_key(&region_code.to_ascii_uppercase())
    }

    fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    /// Region codes are accepted case-insensitively.
    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map
            .get(&region_code.to_ascii_uppercase())
    }

    pub fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.get_metadata_for_non_geographical_region(country_calling_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    /// Compiles a metadata pattern through the shared cache. A pattern
    /// that does not compile is reported and treated as matching nothing,
    /// so the total operations stay total.
    fn regex_for(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.reg_exps.regexp_cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Malformed pattern '{}' in metadata: {}", pattern, err);
                None
            }
        }
    }

    /// Whether the value matches the pattern in its entirety. An empty
    /// pattern matches nothing.
    fn matches_entirely(&self, pattern: &str, value: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        self.regex_for(pattern)
            .map(|regex| regex.full_match(value))
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Normalization and extraction
    // ------------------------------------------------------------------

    /// Normalizes a string of characters representing a phone number.
    ///
    /// Punctuation is stripped. For numbers containing three or more
    /// letters (vanity numbers) the letters are converted via the
    /// telephone keypad; otherwise digit variants of all supported
    /// scripts are converted to ASCII digits and spurious alpha
    /// characters are dropped.
    pub fn normalize(&self, number: &str) -> String {
        if self.reg_exps.valid_alpha_phone_pattern.full_match(number) {
            normalize_helper(&self.reg_exps.alpha_phone_mappings, true, number)
        } else {
            self.normalize_digits_only(number)
        }
    }

    /// Converts digit variants of all supported scripts to ASCII digits
    /// and strips everything else.
    pub fn normalize_digits_only(&self, number: &str) -> String {
        normalize_helper(&self.reg_exps.digit_mappings, true, number)
    }

    /// Converts alpha characters to their keypad digits, leaving every
    /// other character unchanged. Used when reformatting original input.
    pub fn convert_alpha_characters_in_number(&self, number: &str) -> String {
        normalize_helper(&self.reg_exps.alpha_phone_mappings, false, number)
    }

    fn normalize_diallable_chars_only(&self, number: &str) -> String {
        normalize_helper(&self.reg_exps.diallable_char_mappings, true, number)
    }

    /// Attempts to extract a possible number from the string passed in.
    /// Leading characters that cannot start a phone number are stripped
    /// (e.g. "Tel:"); so are trailing non-number characters, and anything
    /// that looks like the start of a second concatenated number. Returns
    /// an empty string when no possible start character is found.
    pub(crate) fn extract_possible_number(&self, number: &str) -> String {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(number) else {
            return String::new();
        };
        let mut possible_number = number[start.start()..].to_owned();
        if let Cow::Owned(trimmed) = self
            .reg_exps
            .unwanted_end_char_pattern
            .replace(&possible_number, "")
        {
            possible_number = trimmed;
        }
        if let Some(second_number_start) = self
            .reg_exps
            .second_number_start_pattern
            .find(&possible_number)
        {
            possible_number.truncate(second_number_start.start());
        }
        possible_number
    }

    /// Checks whether the string could possibly be a phone number: at
    /// least two characters long and matching the viability grammar.
    /// Assumes leading noise has already been stripped, as done by
    /// `extract_possible_number`.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.full_match(number)
    }

    /// Returns the national significant number: the leading zero, when
    /// meaningful, followed by the national number digits.
    pub fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());
        if phone_number.italian_leading_zero() {
            // Note this is a significant zero, not a national prefix.
            fast_cat::concat_str!("0", national_number)
        } else {
            national_number.to_owned()
        }
    }

    // ------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------

    /// Formats a phone number in the specified format using default
    /// rules. If the number has an invalid country calling code, the
    /// national significant number is returned with no formatting
    /// applied.
    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        if phone_number.national_number() == 0 && phone_number.has_raw_input() {
            // Unparseable numbers that kept their raw input just use that.
            let raw_input = phone_number.raw_input();
            if !raw_input.is_empty() {
                return raw_input.to_owned();
            }
        }
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = Self::get_national_significant_number(phone_number);
        if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164 (even if the calling code is invalid):
            // no formatting of the national number applies and extensions
            // are omitted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return formatted_number;
        }
        if !self.has_valid_country_calling_code(country_calling_code) {
            return formatted_number;
        }
        // Note formatting rules for regions sharing a calling code are
        // held by the main region for that code, e.g. US for NANPA.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return formatted_number;
        };
        if let Cow::Owned(formatted_nsn) =
            self.format_nsn(&formatted_number, region_metadata, number_format)
        {
            formatted_number = formatted_nsn;
        }
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, region_metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number using client-defined formatting rules. `$NP`
    /// in a rule stands for the national prefix and `$FG` for the first
    /// group.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return national_significant_number;
        }
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };

        let mut formatted_number = if let Some(formatting_pattern) = self
            .choose_formatting_pattern_for_number(user_defined_formats, &national_significant_number)
        {
            // Copy the rule before replacing $NP so subsequent uses of the
            // caller's formats see the placeholder again.
            let mut num_format_copy = formatting_pattern.clone();
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            if !national_prefix_formatting_rule.is_empty() {
                let national_prefix = region_metadata.national_prefix();
                if !national_prefix.is_empty() {
                    // Replace $NP with the national prefix and $FG with
                    // the first group ($1).
                    let rule = self
                        .reg_exps
                        .np_pattern
                        .replace(national_prefix_formatting_rule, NoExpand(national_prefix));
                    let rule = self.reg_exps.fg_pattern.replace(&rule, NoExpand("$1"));
                    num_format_copy.set_national_prefix_formatting_rule(rule.into_owned());
                } else {
                    // No national prefix, so no rule for formatting it.
                    num_format_copy.clear_national_prefix_formatting_rule();
                }
            }
            self.format_nsn_using_pattern(&national_significant_number, &num_format_copy, number_format)
                .into_owned()
        } else {
            national_significant_number
        };
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, region_metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number in national format for dialing using the
    /// carrier given. The carrier code is always used, regardless of
    /// whether the number already stores a preferred carrier code.
    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return national_significant_number;
        }
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                region_metadata,
                PhoneNumberFormat::National,
                carrier_code,
            ),
            national_significant_number
        );
        if let Some(formatted_extension) = Self::get_formatted_extension(
            phone_number,
            region_metadata,
            PhoneNumberFormat::National,
        ) {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Like `format_national_number_with_carrier_code`, but prefers the
    /// carrier code stored on the number, falling back to the one passed
    /// in.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> String {
        let carrier_code = if !phone_number.preferred_domestic_carrier_code().is_empty() {
            phone_number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(phone_number, carrier_code)
    }

    /// Formats the number so that it can be dialed from a mobile phone in
    /// the given region. Returns an empty string when the number cannot
    /// be reached from there.
    pub fn format_number_for_mobile_dialing(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
        with_formatting: bool,
    ) -> String {
        let country_calling_code = phone_number.country_code();
        if !self.has_valid_country_calling_code(country_calling_code) {
            return if phone_number.has_raw_input() {
                phone_number.raw_input().to_owned()
            } else {
                String::new()
            };
        }
        let region_calling_from = region_calling_from.to_ascii_uppercase();
        // The extension cannot normally be dialed together with the main
        // number, so it is dropped from a copy.
        let number_no_extension = phone_number.without_extension();
        let number_type = self.get_number_type(&number_no_extension);
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let formatted_number = if region_code == "CO" && region_calling_from == "CO" {
            if number_type == PhoneNumberType::FixedLine {
                self.format_national_number_with_carrier_code(
                    &number_no_extension,
                    COLOMBIA_MOBILE_TO_FIXED_LINE_PREFIX,
                )
            } else {
                // E164 doesn't work at all when dialing within Colombia.
                self.format(&number_no_extension, PhoneNumberFormat::National)
            }
        } else if region_code == "PE" && region_calling_from == "PE" {
            // In Peru, numbers cannot be dialed in E164 format from a
            // mobile phone for Movistar; national format is required.
            self.format(&number_no_extension, PhoneNumberFormat::National)
        } else if region_code == "BR"
            && region_calling_from == "BR"
            && matches!(
                number_type,
                PhoneNumberType::FixedLine
                    | PhoneNumberType::Mobile
                    | PhoneNumberType::FixedLineOrMobile
            )
        {
            if number_no_extension.preferred_domestic_carrier_code().is_empty() {
                // Brazilian fixed line and mobile numbers need a carrier
                // code when dialed within Brazil; without one most
                // carriers will not connect the call.
                String::new()
            } else {
                self.format_national_number_with_preferred_carrier_code(&number_no_extension, "")
            }
        } else if self.can_be_internationally_dialled(&number_no_extension) {
            return if with_formatting {
                self.format(&number_no_extension, PhoneNumberFormat::International)
            } else {
                self.format(&number_no_extension, PhoneNumberFormat::E164)
            };
        } else if region_calling_from == region_code {
            self.format(&number_no_extension, PhoneNumberFormat::National)
        } else {
            String::new()
        };
        if with_formatting {
            formatted_number
        } else {
            self.normalize_diallable_chars_only(&formatted_number)
        }
    }

    /// Formats a phone number for out-of-country dialing purposes. Calls
    /// within NANPA and between regions sharing a calling code use no
    /// international prefix; a calling region with several international
    /// prefixes and no preferred one gets the plain INTERNATIONAL format.
    pub fn format_out_of_country_calling_number(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        let region_calling_from = region_calling_from.to_ascii_uppercase();
        if !self.is_valid_region_code(&region_calling_from) {
            return self.format(phone_number, PhoneNumberFormat::International);
        }
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        if !self.has_valid_country_calling_code(country_calling_code) {
            return national_significant_number;
        }
        if country_calling_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(&region_calling_from) {
                // Within NANPA the national format is used, prefixed with
                // the country calling code.
                let formatted = self.format(phone_number, PhoneNumberFormat::National);
                let mut buf = itoa::Buffer::new();
                let country_calling_code_str = buf.format(country_calling_code);
                return fast_cat::concat_str!(country_calling_code_str, " ", &formatted);
            }
        } else if country_calling_code == self.get_country_code_for_valid_region(&region_calling_from)
        {
            // Regions sharing a calling code dial each other in national
            // format, the same as dialing within one region.
            return self.format(phone_number, PhoneNumberFormat::National);
        }
        let Some(metadata_calling_from) = self.get_metadata_for_region(&region_calling_from)
        else {
            return self.format(phone_number, PhoneNumberFormat::International);
        };
        let international_prefix = metadata_calling_from.international_prefix();
        let international_prefix_for_formatting = if self
            .reg_exps
            .unique_international_prefix
            .full_match(international_prefix)
        {
            international_prefix
        } else if metadata_calling_from.has_preferred_international_prefix() {
            metadata_calling_from.preferred_international_prefix()
        } else {
            ""
        };

        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return national_significant_number;
        };
        let formatted_national_number = owned_from_cow_or!(
            self.format_nsn(
                &national_significant_number,
                region_metadata,
                PhoneNumberFormat::International,
            ),
            national_significant_number
        );
        let formatted_extension = Self::get_formatted_extension(
            phone_number,
            region_metadata,
            PhoneNumberFormat::International,
        )
        .unwrap_or_default();
        if !international_prefix_for_formatting.is_empty() {
            let mut buf = itoa::Buffer::new();
            let country_calling_code_str = buf.format(country_calling_code);
            fast_cat::concat_str!(
                international_prefix_for_formatting,
                " ",
                country_calling_code_str,
                " ",
                &formatted_national_number,
                &formatted_extension
            )
        } else {
            let mut formatted_number =
                fast_cat::concat_str!(&formatted_national_number, &formatted_extension);
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            formatted_number
        }
    }

    /// Formats the number using the format it was originally parsed from,
    /// replayed from the recorded country-code source. Falls back to the
    /// raw input whenever reformatting would change any dialable digit,
    /// when the number carries an unexpected leading zero, or when no
    /// formatting pattern applies. Guarantees no digit is inserted,
    /// removed or modified.
    pub fn format_in_original_format(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        if phone_number.has_raw_input()
            && (self.has_unexpected_italian_leading_zero(phone_number)
                || !self.has_formatting_pattern_for_number(phone_number))
        {
            // Without a formatting pattern the number might be rendered
            // as one group with no national prefix; keep the raw input.
            return phone_number.raw_input().to_owned();
        }
        if !phone_number.has_country_code_source() {
            return self.format(phone_number, PhoneNumberFormat::National);
        }
        let formatted_number = match phone_number.country_code_source() {
            CountryCodeSource::FromNumberWithPlusSign => {
                self.format(phone_number, PhoneNumberFormat::International)
            }
            CountryCodeSource::FromNumberWithIdd => {
                self.format_out_of_country_calling_number(phone_number, region_calling_from)
            }
            CountryCodeSource::FromNumberWithoutPlusSign => self
                .format(phone_number, PhoneNumberFormat::International)
                .trim_start_matches(PLUS_SIGN)
                .to_owned(),
            _ => self.format_in_national_format_preserving_raw_input(phone_number),
        };
        // If formatting changed any dialable digit, the raw input the
        // user entered wins.
        let raw_input = phone_number.raw_input();
        let normalized_formatted = self.normalize_diallable_chars_only(&formatted_number);
        let normalized_raw_input = self.normalize_diallable_chars_only(raw_input);
        if normalized_formatted == normalized_raw_input {
            formatted_number
        } else {
            raw_input.to_owned()
        }
    }

    /// The FROM_DEFAULT_COUNTRY branch of `format_in_original_format`:
    /// reproduces the national format, but drops the national prefix from
    /// the rule when the raw input was entered without one.
    fn format_in_national_format_preserving_raw_input(
        &self,
        phone_number: &PhoneNumber,
    ) -> String {
        let region_code = self.get_region_code_for_country_code(phone_number.country_code());
        let national_format = self.format(phone_number, PhoneNumberFormat::National);
        let Some(national_prefix) = self.get_ndd_prefix_for_region(region_code, true) else {
            // No national prefix at all: the national format is safe.
            return national_format;
        };
        if national_prefix.is_empty() {
            return national_format;
        }
        if self.raw_input_contains_national_prefix(
            phone_number.raw_input(),
            &national_prefix,
            region_code,
        ) {
            return national_format;
        }
        let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
            return national_format;
        };
        let national_number = Self::get_national_significant_number(phone_number);
        let Some(format_rule) =
            self.choose_formatting_pattern_for_number(&region_metadata.number_format, &national_number)
        else {
            return national_format;
        };
        // When the chosen rule does not put a national prefix in front of
        // the first group, the national format is already prefix-free.
        let candidate_national_prefix_rule = format_rule.national_prefix_formatting_rule();
        let Some(index_of_first_group) = candidate_national_prefix_rule.find("$1") else {
            return national_format;
        };
        if index_of_first_group == 0 {
            return national_format;
        }
        let candidate_prefix =
            self.normalize_digits_only(&candidate_national_prefix_rule[..index_of_first_group]);
        if candidate_prefix.is_empty() {
            return national_format;
        }
        // Otherwise remove the national prefix from the output.
        let mut num_format_copy = format_rule.clone();
        num_format_copy.clear_national_prefix_formatting_rule();
        self.format_by_pattern(phone_number, PhoneNumberFormat::National, &[num_format_copy])
    }

    /// Checks whether the raw input, assumed to be in national format,
    /// was entered with the region's national prefix. Some numbers might
    /// merely start with the same digits, so the remainder must also
    /// parse as a valid number for the region.
    fn raw_input_contains_national_prefix(
        &self,
        raw_input: &str,
        national_prefix: &str,
        region_code: &str,
    ) -> bool {
        let normalized_national_number = self.normalize_digits_only(raw_input);
        let Some(remainder) = normalized_national_number.strip_prefix(national_prefix) else {
            return false;
        };
        match self.parse(remainder, region_code) {
            Ok(parsed) => self.is_valid_number(&parsed),
            Err(_) => false,
        }
    }

    /// True when the number has the leading-zero flag set although its
    /// calling code's numbering plan does not allow significant leading
    /// zeros.
    fn has_unexpected_italian_leading_zero(&self, phone_number: &PhoneNumber) -> bool {
        phone_number.italian_leading_zero()
            && !self.is_leading_zero_possible(phone_number.country_code())
    }

    fn has_formatting_pattern_for_number(&self, phone_number: &PhoneNumber) -> bool {
        let country_calling_code = phone_number.country_code();
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return false;
        };
        let national_number = Self::get_national_significant_number(phone_number);
        self.choose_formatting_pattern_for_number(&region_metadata.number_format, &national_number)
            .is_some()
    }

    /// Formats for out-of-country dialing while keeping alpha characters
    /// and grouping symbols from the raw input.
    pub fn format_out_of_country_keeping_alpha_chars(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        // Without raw input there are no alpha characters to keep.
        if phone_number.raw_input().is_empty() {
            return self.format_out_of_country_calling_number(phone_number, region_calling_from);
        }
        let country_calling_code = phone_number.country_code();
        if !self.has_valid_country_calling_code(country_calling_code) {
            return phone_number.raw_input().to_owned();
        }
        // Strip any prefix (country code, IDD) from the raw input by
        // locating the start of the national number within it. Number
        // grouping symbols are retained.
        let mut raw_input = normalize_helper(
            &self.reg_exps.all_plus_number_grouping_symbols,
            true,
            phone_number.raw_input(),
        );
        let national_number = Self::get_national_significant_number(phone_number);
        if national_number.len() > 3 {
            // Valid alpha numbers have three digits at the start; if the
            // raw input does not contain them, nothing is trimmed.
            if let Some(index) = raw_input.find(&national_number[..3]) {
                raw_input = raw_input[index..].to_owned();
            }
        }
        let region_calling_from = region_calling_from.to_ascii_uppercase();
        let metadata_calling_from = self.get_metadata_for_region(&region_calling_from);
        if country_calling_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(&region_calling_from) {
                let mut buf = itoa::Buffer::new();
                let country_calling_code_str = buf.format(country_calling_code);
                return fast_cat::concat_str!(country_calling_code_str, " ", &raw_input);
            }
        } else if self.is_valid_region_code(&region_calling_from)
            && country_calling_code == self.get_country_code_for_valid_region(&region_calling_from)
        {
            let Some(metadata) = metadata_calling_from else {
                return raw_input;
            };
            let Some(formatting_pattern) =
                self.choose_formatting_pattern_for_number(&metadata.number_format, &national_number)
            else {
                // No pattern matched: format the original input as it is.
                return raw_input;
            };
            let mut new_format = formatting_pattern.clone();
            // The first group is whatever the user wrote together at the
            // start; the rest is concatenated back verbatim, with the
            // national prefix fixed up as usual.
            new_format.set_pattern("(\\d+)(.*)".to_owned());
            new_format.set_format("$1$2".to_owned());
            return self
                .format_nsn_using_pattern(&raw_input, &new_format, PhoneNumberFormat::National)
                .into_owned();
        }
        let mut international_prefix_for_formatting = "";
        if let Some(metadata) = metadata_calling_from {
            let international_prefix = metadata.international_prefix();
            international_prefix_for_formatting = if self
                .reg_exps
                .unique_international_prefix
                .full_match(international_prefix)
            {
                international_prefix
            } else {
                metadata.preferred_international_prefix()
            };
        }
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return raw_input;
        };
        let formatted_extension = Self::get_formatted_extension(
            phone_number,
            region_metadata,
            PhoneNumberFormat::International,
        )
        .unwrap_or_default();
        if !international_prefix_for_formatting.is_empty() {
            let mut buf = itoa::Buffer::new();
            let country_calling_code_str = buf.format(country_calling_code);
            fast_cat::concat_str!(
                international_prefix_for_formatting,
                " ",
                country_calling_code_str,
                " ",
                &raw_input,
                &formatted_extension
            )
        } else {
            // The calling region either was invalid or has several
            // international prefixes with no preference.
            let mut formatted_number = fast_cat::concat_str!(&raw_input, &formatted_extension);
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
            formatted_number
        }
    }

    fn format_nsn<'b>(
        &self,
        number: &'b str,
        region_metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        self.format_nsn_with_carrier(number, region_metadata, number_format, "")
    }

    /// In some regions the national number is rendered differently in
    /// NATIONAL and INTERNATIONAL contexts; when a separate international
    /// format list exists it is used for everything except NATIONAL.
    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        region_metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Cow<'b, str> {
        let available_formats = if region_metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &region_metadata.number_format
        } else {
            &region_metadata.intl_number_format
        };
        match self.choose_formatting_pattern_for_number(available_formats, number) {
            Some(formatting_pattern) => self.format_nsn_using_pattern_with_carrier(
                number,
                formatting_pattern,
                number_format,
                carrier_code,
            ),
            None => Cow::Borrowed(number),
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Option<&'b NumberFormat> {
        for format in available_formats {
            // The last leading-digits pattern is the most detailed one.
            if let Some(leading_digits_pattern) = format.leading_digits_pattern.last() {
                let Some(regex) = self.regex_for(leading_digits_pattern) else {
                    continue;
                };
                if !regex.matches_start(national_number) {
                    continue;
                }
            }
            let Some(pattern_to_match) = self.regex_for(format.pattern()) else {
                continue;
            };
            if pattern_to_match.full_match(national_number) {
                return Some(format);
            }
        }
        None
    }

    /// Note `carrier_code` is optional; when empty, no carrier-code
    /// replacement takes place.
    fn format_nsn_using_pattern_with_carrier<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Cow<'b, str> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        let domestic_carrier_rule = formatting_pattern.domestic_carrier_code_formatting_rule();
        if number_format == PhoneNumberFormat::National
            && !carrier_code.is_empty()
            && !domestic_carrier_rule.is_empty()
        {
            // Replace $CC in the carrier rule with the requested carrier
            // code, then substitute the result for the first group.
            let carrier_code_formatting_rule = self
                .reg_exps
                .carrier_code_pattern
                .replace(domestic_carrier_rule, NoExpand(carrier_code));
            if let Cow::Owned(rule) = self
                .reg_exps
                .first_group_capturing_pattern
                .replace(&number_format_rule, NoExpand(&carrier_code_formatting_rule))
            {
                number_format_rule = Cow::Owned(rule);
            }
        } else {
            // Use the national prefix formatting rule instead.
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            if number_format == PhoneNumberFormat::National
                && !national_prefix_formatting_rule.is_empty()
            {
                if let Cow::Owned(rule) = self.reg_exps.first_group_capturing_pattern.replace(
                    &number_format_rule,
                    NoExpand(national_prefix_formatting_rule),
                ) {
                    number_format_rule = Cow::Owned(rule);
                }
            }
        }

        let Some(pattern_to_match) = self.regex_for(formatting_pattern.pattern()) else {
            return Cow::Borrowed(national_number);
        };
        let mut formatted_number =
            pattern_to_match.replace(national_number, &*number_format_rule);

        if matches!(number_format, PhoneNumberFormat::RFC3966) {
            // Drop any leading punctuation, then collapse every separator
            // run into a single hyphen.
            if let Some(rest) = self
                .reg_exps
                .separator_pattern
                .find_start(&formatted_number)
                .map(|m| formatted_number[m.end()..].to_owned())
            {
                formatted_number = Cow::Owned(rest);
            }
            if let Cow::Owned(replaced) = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
            {
                formatted_number = Cow::Owned(replaced);
            }
        }
        formatted_number
    }

    /// Simple wrapper for the common case of no carrier code.
    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        self.format_nsn_using_pattern_with_carrier(
            national_number,
            formatting_pattern,
            number_format,
            "",
        )
    }

    /// Returns the formatted extension of a phone number, or `None` when
    /// the number has no extension.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        region_metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        if !phone_number.has_extension() || phone_number.extension().is_empty() {
            return None;
        }
        let prefix = if matches!(number_format, PhoneNumberFormat::RFC3966) {
            RFC3966_EXTN_PREFIX
        } else if region_metadata.has_preferred_extn_prefix() {
            region_metadata.preferred_extn_prefix()
        } else {
            DEFAULT_EXTN_PREFIX
        };
        Some(fast_cat::concat_str!(prefix, phone_number.extension()))
    }

    // ------------------------------------------------------------------
    // Classification and validation
    // ------------------------------------------------------------------

    /// Gets the type of a phone number, or `Unknown` when it matches no
    /// pattern of its region.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        let Some(region_code) = self.get_region_code_for_number(phone_number) else {
            return PhoneNumberType::Unknown;
        };
        let Some(region_metadata) = self
            .get_metadata_for_region_or_calling_code(phone_number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, region_metadata)
    }

    fn get_number_type_helper(
        &self,
        national_number: &str,
        region_metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        let general_desc = &region_metadata.general_desc;
        if !general_desc.has_national_number_pattern()
            || !self.is_number_matching_desc(national_number, general_desc)
        {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.premium_rate) {
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.toll_free) {
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.shared_cost) {
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.voip) {
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.personal_number) {
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.pager) {
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.uan) {
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &region_metadata.voicemail) {
            return PhoneNumberType::VoiceMail;
        }
        let is_fixed_line =
            self.is_number_matching_desc(national_number, &region_metadata.fixed_line);
        if is_fixed_line {
            if region_metadata.same_mobile_and_fixed_line_pattern()
                || self.is_number_matching_desc(national_number, &region_metadata.mobile)
            {
                return PhoneNumberType::FixedLineOrMobile;
            }
            return PhoneNumberType::FixedLine;
        }
        // Only test mobile when the patterns for mobile and fixed line
        // are known to differ.
        if !region_metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &region_metadata.mobile)
        {
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific type pattern");
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &crate::metadata::PhoneNumberDesc,
    ) -> bool {
        self.matcher_api
            .match_national_number(national_number, number_desc)
    }

    /// Tests whether the number matches a valid pattern. This does not
    /// verify the number is actually in use, which cannot be told from
    /// the number itself.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        match self.get_region_code_for_number(phone_number) {
            Some(region_code) => self.is_valid_number_for_region(phone_number, region_code),
            None => false,
        }
    }

    /// Tests validity for a specific region. When the number's calling
    /// code does not belong to the region this is immediately false,
    /// which is useful to tell "valid for Canada" apart from "valid
    /// NANPA number".
    pub fn is_valid_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> bool {
        let country_code = phone_number.country_code();
        let region_code = region_code.to_ascii_uppercase();
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, &region_code)
        else {
            return false;
        };
        if REGION_CODE_FOR_NON_GEO_ENTITY != region_code
            && country_code != self.get_country_code_for_valid_region(&region_code)
        {
            return false;
        }
        let general_desc = &region_metadata.general_desc;
        let national_significant_number = Self::get_national_significant_number(phone_number);
        // For regions with no general pattern, any number whose length
        // lies in the band ITU defines for national significant numbers
        // is accepted.
        if !general_desc.has_national_number_pattern() {
            let number_length = national_significant_number.len();
            return number_length > MIN_LENGTH_FOR_NSN && number_length <= MAX_LENGTH_FOR_NSN;
        }
        self.get_number_type_helper(&national_significant_number, region_metadata)
            != PhoneNumberType::Unknown
    }

    /// Returns the region the number is from, resolving shared calling
    /// codes via leading digits or full validation. `None` when no region
    /// matches.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> Option<&str> {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.get_region_codes_for_country_calling_code(country_calling_code);
        if region_codes.is_empty() {
            trace!("Missing/invalid country calling code ({country_calling_code})");
            return None;
        }
        if region_codes.len() == 1 {
            return Some(region_codes[0]);
        }
        self.get_region_code_for_number_from_region_list(phone_number, &region_codes)
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &[&'b str],
    ) -> Option<&'b str> {
        let national_number = Self::get_national_significant_number(phone_number);
        for &region_code in region_codes {
            // Metadata cannot be absent: the region codes come from the
            // calling-code map.
            let region_metadata = self.region_to_metadata_map.get(region_code)?;
            if region_metadata.has_leading_digits() {
                let leading_digits = self.regex_for(region_metadata.leading_digits())?;
                if leading_digits.matches_start(&national_number) {
                    return Some(region_code);
                }
            } else if self.get_number_type_helper(&national_number, region_metadata)
                != PhoneNumberType::Unknown
            {
                return Some(region_code);
            }
        }
        None
    }

    /// Returns the main region for a country calling code, or the unknown
    /// region when the code is not recognized.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns every region sharing the country calling code, main region
    /// first; empty when the code is unknown.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> Vec<&str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the country calling code for a region, or 0 when the
    /// region is unknown.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        if !self.is_valid_region_code(region_code) {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return 0;
        }
        self.get_country_code_for_valid_region(region_code)
    }

    fn get_country_code_for_valid_region(&self, region_code: &str) -> i32 {
        self.get_metadata_for_region(region_code)
            .map(PhoneMetadata::country_code)
            .unwrap_or(0)
    }

    /// Returns the national dialing prefix for a region, e.g. "1" for the
    /// United States and "0" for New Zealand, optionally stripping
    /// non-digit symbols like the wait-for-tone tilde. `None` when the
    /// region is unknown or has no national prefix.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return None;
        };
        let national_prefix = region_metadata.national_prefix();
        if national_prefix.is_empty() {
            return None;
        }
        if strip_non_digits {
            // '~' signals waiting for a tone and is the only non-digit
            // symbol used in national prefixes.
            Some(national_prefix.replace('~', ""))
        } else {
            Some(national_prefix.to_owned())
        }
    }

    /// Checks if a region is under the North American Numbering Plan.
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.nanpa_regions
            .contains(&region_code.to_ascii_uppercase())
    }

    /// Checks whether the calling code belongs to a plan where the
    /// national significant number can carry a leading zero, e.g. Italy.
    pub fn is_leading_zero_possible(&self, country_calling_code: i32) -> bool {
        self.get_metadata_for_region(self.get_region_code_for_country_code(country_calling_code))
            .map(PhoneMetadata::leading_zero_possible)
            .unwrap_or(false)
    }

    /// Checks if the number is a valid vanity number such as
    /// "800 MICROSOFT": viable, and with three or more alpha characters
    /// once any extension is removed. Region-specific validity is not
    /// checked here.
    pub fn is_alpha_number(&self, number: &str) -> bool {
        if !self.is_viable_phone_number(number) {
            return false;
        }
        let (stripped_number, _extension) = self.maybe_strip_extension(number);
        self.reg_exps
            .valid_alpha_phone_pattern
            .full_match(&stripped_number)
    }

    /// Returns true if the number can be dialed from outside its region
    /// (or when that is unknown).
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let Some(region_code) = self.get_region_code_for_number(phone_number) else {
            // Numbers of non-geographical entities land here and are
            // always internationally diallable.
            return true;
        };
        let Some(region_metadata) = self.region_to_metadata_map.get(region_code) else {
            return true;
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        !self.is_number_matching_desc(
            &national_significant_number,
            &region_metadata.no_international_dialling,
        )
    }

    /// Convenience wrapper around `is_possible_number_with_reason`.
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number) == ValidationResult::IsPossible
    }

    /// Parses the string and checks possibility; parse failures fold into
    /// `false`.
    pub fn is_possible_number_string(&self, number: &str, region_dialing_from: &str) -> bool {
        match self.parse(number, region_dialing_from) {
            Ok(parsed) => self.is_possible_number(&parsed),
            Err(_) => false,
        }
    }

    /// A cheaper check than `is_valid_number`: only the length of the
    /// number is tested against the general rules for its region. Numbers
    /// dialed in a subscriber-number-only form pass this check while
    /// failing full validation.
    pub fn is_possible_number_with_reason(&self, phone_number: &PhoneNumber) -> ValidationResult {
        let national_number = Self::get_national_significant_number(phone_number);
        let country_code = phone_number.country_code();
        // For shared plans like NANPA the rules of the main region apply;
        // region resolution would not work here since the number may be
        // possible but not valid for any specific region.
        if !self.has_valid_country_calling_code(country_code) {
            return ValidationResult::InvalidCountryCode;
        }
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return ValidationResult::InvalidCountryCode;
        };
        let general_desc = &region_metadata.general_desc;
        if !general_desc.has_national_number_pattern() {
            let number_length = national_number.len();
            return if number_length < MIN_LENGTH_FOR_NSN {
                ValidationResult::TooShort
            } else if number_length > MAX_LENGTH_FOR_NSN {
                ValidationResult::TooLong
            } else {
                ValidationResult::IsPossible
            };
        }
        self.test_number_length_against_pattern(general_desc.possible_number_pattern(), &national_number)
    }

    /// A full match means the length is possible; a match anchored at the
    /// start means there are trailing extra digits; anything else is too
    /// short. A plan offering lengths 7 and 10 therefore reports a length
    /// of 8 as too long.
    fn test_number_length_against_pattern(
        &self,
        number_pattern: &str,
        number: &str,
    ) -> ValidationResult {
        if self.matches_entirely(number_pattern, number) {
            return ValidationResult::IsPossible;
        }
        let starts_with_pattern = self
            .regex_for(number_pattern)
            .map(|regex| regex.matches_start(number))
            .unwrap_or(false);
        if starts_with_pattern {
            ValidationResult::TooLong
        } else {
            ValidationResult::TooShort
        }
    }

    /// Attempts to rescue a too-long number by dropping trailing digits
    /// until it validates. On success the number passed in is updated;
    /// on failure it is left untouched.
    pub fn truncate_too_long_number(&self, phone_number: &mut PhoneNumber) -> bool {
        if self.is_valid_number(phone_number) {
            return true;
        }
        let mut number_copy = phone_number.clone();
        let mut national_number = phone_number.national_number();
        loop {
            national_number /= 10;
            number_copy.set_national_number(national_number);
            if national_number == 0
                || self.is_possible_number_with_reason(&number_copy) == ValidationResult::TooShort
            {
                return false;
            }
            if self.is_valid_number(&number_copy) {
                break;
            }
        }
        phone_number.set_national_number(national_number);
        true
    }

    /// Gets the length of the geographical area code of the number, so
    /// that clients can split a national significant number into area
    /// code and subscriber number. Returns 0 for regions with a closed
    /// dialing plan and for number types that must be dialed in full.
    pub fn get_length_of_geographical_area_code(&self, phone_number: &PhoneNumber) -> usize {
        let Some(region_code) = self.get_region_code_for_number(phone_number) else {
            return 0;
        };
        if !self.is_valid_region_code(region_code) {
            return 0;
        }
        let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
            return 0;
        };
        // A region without national prefix usually has a closed dialing
        // plan with no area codes; a meaningful leading zero overrides
        // that assumption.
        if !region_metadata.has_national_prefix() && !phone_number.italian_leading_zero() {
            return 0;
        }
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let number_type =
            self.get_number_type_helper(&national_significant_number, region_metadata);
        if !matches!(
            number_type,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
        ) {
            return 0;
        }
        self.get_length_of_national_destination_code(phone_number)
    }

    /// Gets the length of the national destination code: the first group
    /// after the country calling code when the number is formatted
    /// internationally.
    pub fn get_length_of_national_destination_code(&self, phone_number: &PhoneNumber) -> usize {
        let copied_number = if phone_number.has_extension() {
            // The caller's number stays untouched; the extension is
            // cleared on a copy so it does not influence formatting.
            phone_number.without_extension()
        } else {
            phone_number.clone()
        };
        let formatted_number = self.format(&copied_number, PhoneNumberFormat::International);
        let number_groups: Vec<&str> = self
            .reg_exps
            .non_digits_pattern
            .split(&formatted_number)
            .filter(|group| !group.is_empty())
            .collect();
        // The first group is the country calling code; the second is the
        // NDC if a subscriber-number part follows.
        if number_groups.len() <= 2 {
            return 0;
        }
        if self.get_region_code_for_country_code(phone_number.country_code()) == "AR"
            && self.get_number_type(phone_number) == PhoneNumberType::Mobile
        {
            // Argentinian international mobile format is
            // "+54 9 NDC XXXX-XXXX"; the mobile token 9 belongs to the
            // national significant number, so the NDC is one longer.
            return number_groups[2].len() + 1;
        }
        number_groups[1].len()
    }

    // ------------------------------------------------------------------
    // Example numbers
    // ------------------------------------------------------------------

    /// Gets a valid fixed-line number for the region, when the metadata
    /// carries an example.
    pub fn get_example_number(&self, region_code: &str) -> Option<PhoneNumber> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Gets a valid number of the given type for the region. For
    /// non-geographical calling codes use
    /// `get_example_number_for_non_geo_entity` instead.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> Option<PhoneNumber> {
        let region_metadata = self.get_metadata_for_region(region_code)?;
        let desc = get_number_desc_by_type(region_metadata, phone_number_type);
        if !desc.has_example_number() {
            return None;
        }
        self.parse(desc.example_number(), region_code).ok()
    }

    /// Gets a valid number for a non-geographical entity such as +800.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<PhoneNumber> {
        let region_metadata = self.get_metadata_for_non_geographical_region(country_calling_code)?;
        let desc = &region_metadata.general_desc;
        if !desc.has_example_number() {
            return None;
        }
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        let number =
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, desc.example_number());
        self.parse(&number, i18n::RegionCode::get_unknown()).ok()
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    /// Extracts a country calling code from the start of `full_number`,
    /// returning the code and the remaining digits. A calling code never
    /// starts with '0'; candidate prefixes of increasing length are tried
    /// against the calling-code table. Returns 0 and the input unchanged
    /// when nothing matches.
    pub(crate) fn extract_country_code<'b>(&self, full_number: &'b str) -> (i32, &'b str) {
        if full_number.is_empty() || full_number.starts_with('0') {
            return (0, full_number);
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Ok(potential_country_code) = full_number[..length].parse::<i32>() else {
                break;
            };
            if self.has_valid_country_calling_code(potential_country_code) {
                return (potential_country_code, &full_number[length..]);
            }
        }
        (0, full_number)
    }

    /// Strips the IDD from the start of the number when present,
    /// returning the remainder. A "0" as the first digit after a
    /// candidate IDD marks a false positive, since phone numbers never
    /// begin with it.
    fn parse_prefix_as_idd(&self, idd_pattern: &Regex, number: &str) -> Option<String> {
        let matched = idd_pattern.find_start(number)?;
        let after_idd = &number[matched.end()..];
        if let Some(captures) = self.reg_exps.capturing_digit_pattern.captures(after_idd) {
            let normalized_group = self.normalize_digits_only(&captures[1]);
            if normalized_group == "0" {
                return None;
            }
        }
        Some(after_idd.to_owned())
    }

    /// Strips any international prefix (plus signs or the given IDD
    /// pattern) from the number and normalizes what remains, reporting
    /// how the prefix was written.
    pub(crate) fn maybe_strip_international_prefix_and_normalize(
        &self,
        number: &str,
        possible_idd_prefix: &str,
    ) -> (String, CountryCodeSource) {
        if number.is_empty() {
            return (String::new(), CountryCodeSource::FromDefaultCountry);
        }
        if let Some(matched) = self.reg_exps.leading_plus_chars_pattern.find(number) {
            // The '+' has been consumed, the rest can be normalized as a
            // whole.
            return (
                self.normalize(&number[matched.end()..]),
                CountryCodeSource::FromNumberWithPlusSign,
            );
        }
        // Attempt to parse the first digits as an international prefix.
        let normalized_number = self.normalize(number);
        let Some(idd_pattern) = self.regex_for(possible_idd_prefix) else {
            return (normalized_number, CountryCodeSource::FromDefaultCountry);
        };
        match self.parse_prefix_as_idd(&idd_pattern, &normalized_number) {
            Some(stripped) => (stripped, CountryCodeSource::FromNumberWithIdd),
            None => (normalized_number, CountryCodeSource::FromDefaultCountry),
        }
    }

    /// Strips any national prefix and carrier-selection code from the
    /// number. The strip is rejected when the input matched the region's
    /// general pattern but the stripped remainder no longer does:
    /// stripping must never turn a valid-looking number into an invalid
    /// one. `None` means nothing was stripped.
    pub(crate) fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &str,
        region_metadata: &PhoneMetadata,
    ) -> Option<StrippedNationalPrefix> {
        let possible_national_prefix = region_metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            return None;
        }
        let prefix_pattern = self.regex_for(&format!("^(?:{})", possible_national_prefix))?;
        let prefix_captures = prefix_pattern.captures(number)?;

        let national_number_rule = region_metadata.general_desc.national_number_pattern();
        let number_of_groups = prefix_captures.len() - 1;
        let transform_rule = region_metadata.national_prefix_transform_rule();
        // An empty last capturing group means nothing usable was captured,
        // so no transformation is necessary and the prefix is dropped.
        let last_group_empty = prefix_captures
            .get(number_of_groups)
            .map(|group| group.as_str().is_empty())
            .unwrap_or(true);
        let no_transform = transform_rule.is_empty() || last_group_empty;
        let transformed_number = if no_transform {
            let prefix_end = prefix_captures.get(0).map(|m| m.end()).unwrap_or(0);
            number[prefix_end..].to_owned()
        } else {
            prefix_pattern.replace(number, transform_rule).into_owned()
        };
        // If the original number was viable and the stripped result is
        // not, the prefix was part of the number after all.
        if self.matches_entirely(national_number_rule, number)
            && !self.matches_entirely(national_number_rule, &transformed_number)
        {
            return None;
        }
        let captured_carrier = if (no_transform
            && number_of_groups > 0
            && prefix_captures.get(1).is_some())
            || (!no_transform && number_of_groups > 1)
        {
            prefix_captures
                .get(1)
                .map(|group| group.as_str().to_owned())
        } else {
            None
        };
        Some(StrippedNationalPrefix {
            number: transformed_number,
            carrier_code: captured_carrier,
        })
    }

    /// Strips a trailing extension from the number, returning the
    /// remainder and the extension digits. The prefix up to the match
    /// must itself be viable, otherwise nothing is stripped.
    pub(crate) fn maybe_strip_extension(&self, number: &str) -> (String, Option<String>) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(number) else {
            return (number.to_owned(), None);
        };
        let match_start = captures.get(0).map(|m| m.start()).unwrap_or(0);
        if !self.is_viable_phone_number(&number[..match_start]) {
            return (number.to_owned(), None);
        }
        // The digits are captured in one of several groups; the first
        // non-empty one is the extension.
        for group_index in 1..captures.len() {
            if let Some(group) = captures.get(group_index) {
                if !group.as_str().is_empty() {
                    return (
                        number[..match_start].to_owned(),
                        Some(group.as_str().to_owned()),
                    );
                }
            }
        }
        (number.to_owned(), None)
    }

    /// Tries to extract a country calling code from the number, stripping
    /// international prefixes first and falling back to the heuristic
    /// comparison against the default region's calling code. Returns the
    /// extracted code (0 when none is present) and the national number,
    /// and records the code and its source on `phone_number`.
    pub(crate) fn maybe_extract_country_code(
        &self,
        number: &str,
        default_region_metadata: Option<&PhoneMetadata>,
        keep_raw_input: bool,
        phone_number: &mut PhoneNumber,
    ) -> Result<(i32, String), ParseError> {
        if number.is_empty() {
            return Ok((0, String::new()));
        }
        // Set the default prefix to be something that will never match.
        let possible_idd_prefix = default_region_metadata
            .map(PhoneMetadata::international_prefix)
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or("NonMatch");
        let (full_number, country_code_source) =
            self.maybe_strip_international_prefix_and_normalize(number, possible_idd_prefix);
        if keep_raw_input {
            phone_number.set_country_code_source(country_code_source);
        }
        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.chars().count() <= MIN_LENGTH_FOR_NSN {
                return Err(ParseError::TooShortAfterIdd);
            }
            let (potential_country_code, national_number) =
                self.extract_country_code(&full_number);
            if potential_country_code != 0 {
                phone_number.set_country_code(potential_country_code);
                return Ok((potential_country_code, national_number.to_owned()));
            }
            // An international prefix was present but the digits after it
            // match no known calling code.
            return Err(ParseError::InvalidCountryCode);
        }
        if let Some(default_metadata) = default_region_metadata {
            // Check whether the number starts with the default region's
            // calling code; if stripping that code makes the number valid
            // (or it was too long before), keep the stripped version.
            let default_country_code = default_metadata.country_code();
            let mut buf = itoa::Buffer::new();
            let default_country_code_str = buf.format(default_country_code);
            if let Some(potential_national_number) =
                full_number.strip_prefix(default_country_code_str)
            {
                let general_desc = &default_metadata.general_desc;
                let mut potential_national_number = potential_national_number.to_owned();
                if let Some(stripped) = self
                    .maybe_strip_national_prefix_and_carrier_code(
                        &potential_national_number,
                        default_metadata,
                    )
                {
                    // The carrier code is not needed here.
                    potential_national_number = stripped.number;
                }
                let national_number_pattern = general_desc.national_number_pattern();
                let newly_valid = !self.matches_entirely(national_number_pattern, &full_number)
                    && self.matches_entirely(national_number_pattern, &potential_national_number);
                let previously_too_long = self.test_number_length_against_pattern(
                    general_desc.possible_number_pattern(),
                    &full_number,
                ) == ValidationResult::TooLong;
                if newly_valid || previously_too_long {
                    if keep_raw_input {
                        phone_number
                            .set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone_number.set_country_code(default_country_code);
                    return Ok((default_country_code, potential_national_number));
                }
            }
        }
        // No country calling code present.
        phone_number.set_country_code(0);
        Ok((0, full_number))
    }

    /// Checks that the given region is usable for parsing, or that the
    /// number starts with a plus sign so the region can be inferred.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: Option<&str>) -> bool {
        if default_region
            .map(|region| self.is_valid_region_code(region))
            .unwrap_or(false)
        {
            return true;
        }
        !number_to_parse.is_empty()
            && self
                .reg_exps
                .leading_plus_chars_pattern
                .find(number_to_parse)
                .is_some()
    }

    /// Converts the input into a form ready for parsing: the RFC3966
    /// `tel:` / `;phone-context=` syntax is honored when present,
    /// otherwise a possible number is extracted from free text. An
    /// `;isub=` part and everything after it is dropped.
    fn build_national_number_for_parsing(&self, number_to_parse: &str) -> String {
        let mut national_number = String::new();
        match number_to_parse
            .find(RFC3966_PHONE_CONTEXT)
            .filter(|index| *index > 0)
        {
            Some(index_of_phone_context) => {
                let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
                // A phone context that is a number prefix is captured;
                // domain contexts carry no digits and are ignored. Any
                // parameters after the context are irrelevant to parsing.
                let phone_context = &number_to_parse[phone_context_start..];
                if phone_context.starts_with(PLUS_SIGN) {
                    match phone_context.find(';') {
                        Some(end) => national_number.push_str(&phone_context[..end]),
                        None => national_number.push_str(phone_context),
                    }
                }
                // Now append everything between the "tel:" prefix and the
                // phone context: national number plus any extension or
                // isdn-subaddress component.
                let national_number_start = number_to_parse
                    .find(RFC3966_PREFIX)
                    .map(|index| index + RFC3966_PREFIX.len())
                    .unwrap_or(0);
                if national_number_start < index_of_phone_context {
                    national_number
                        .push_str(&number_to_parse[national_number_start..index_of_phone_context]);
                }
            }
            None => {
                national_number.push_str(&self.extract_possible_number(number_to_parse));
            }
        }
        // An extension never appears together with an isdn-subaddress,
        // per RFC3966 paragraph 5.3.
        if let Some(index_of_isdn) = national_number
            .find(RFC3966_ISDN_SUBADDRESS)
            .filter(|index| *index > 0)
        {
            national_number.truncate(index_of_isdn);
        }
        national_number
    }

    /// Parses a string into a phone number. The default region is used
    /// only when the number is not written in international form; pass
    /// "ZZ" when the input is guaranteed to start with '+'. Possibility,
    /// not validity, is what parsing checks; use `is_valid_number`
    /// separately.
    pub fn parse(&self, number_to_parse: &str, default_region: &str) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, Some(default_region), false, true)
    }

    /// Like `parse`, but also records the raw input, the country-code
    /// source and any carrier code on the returned number.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        if !self.is_valid_region_code(default_region)
            && !number_to_parse.starts_with(PLUS_SIGN)
        {
            return Err(ParseError::InvalidCountryCode);
        }
        self.parse_helper(number_to_parse, Some(default_region), true, true)
    }

    pub(crate) fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
        keep_raw_input: bool,
        check_region: bool,
    ) -> Result<PhoneNumber, ParseError> {
        if number_to_parse.chars().count() > MAX_INPUT_STRING_LENGTH {
            return Err(ParseError::TooLong);
        }

        let national_number = self.build_national_number_for_parsing(number_to_parse);
        if !self.is_viable_phone_number(&national_number) {
            return Err(ParseError::NotANumber);
        }
        // The region is required, unless the number itself tells us its
        // region by starting with some form of '+'.
        if check_region && !self.check_region_for_parsing(&national_number, default_region) {
            return Err(ParseError::InvalidCountryCode);
        }

        let mut phone_number = PhoneNumber::new();
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_owned());
        }
        // The extension is parsed first, before any normalization.
        let (national_number, extension) = self.maybe_strip_extension(&national_number);
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }

        let mut region_metadata = default_region.and_then(|region| self.get_metadata_for_region(region));
        let extract_result = match self.maybe_extract_country_code(
            &national_number,
            region_metadata,
            keep_raw_input,
            &mut phone_number,
        ) {
            Ok(result) => result,
            Err(ParseError::InvalidCountryCode)
                if self
                    .reg_exps
                    .leading_plus_chars_pattern
                    .find(&national_number)
                    .is_some() =>
            {
                // Strip the plus sign and try again; fail with the
                // original error if there is still no country code.
                let without_plus = self
                    .reg_exps
                    .leading_plus_chars_pattern
                    .replace(&national_number, "")
                    .into_owned();
                let retried = self.maybe_extract_country_code(
                    &without_plus,
                    region_metadata,
                    keep_raw_input,
                    &mut phone_number,
                )?;
                if retried.0 == 0 {
                    return Err(ParseError::InvalidCountryCode);
                }
                retried
            }
            Err(err) => return Err(err),
        };
        let (country_code, mut normalized_national_number) = extract_result;

        if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            region_metadata =
                self.get_metadata_for_region_or_calling_code(country_code, phone_number_region);
        } else {
            // No extracted country code: the number is national, in the
            // default region, and just needs normalizing.
            normalized_national_number = self.normalize(&national_number);
            if let Some(metadata) = region_metadata {
                phone_number.set_country_code(metadata.country_code());
            } else if keep_raw_input {
                phone_number.clear_country_code_source();
            }
        }

        if normalized_national_number.chars().count() <= MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn);
        }

        if let Some(metadata) = region_metadata {
            if let Some(stripped) = self
                .maybe_strip_national_prefix_and_carrier_code(&normalized_national_number, metadata)
            {
                normalized_national_number = stripped.number;
                if keep_raw_input {
                    if let Some(carrier_code) = stripped.carrier_code {
                        if !carrier_code.is_empty() {
                            phone_number.set_preferred_domestic_carrier_code(carrier_code);
                        }
                    }
                }
            }
        }

        let length_of_national_number = normalized_national_number.chars().count();
        if length_of_national_number <= MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn);
        }
        if length_of_national_number > MAX_LENGTH_FOR_NSN {
            return Err(ParseError::TooLong);
        }
        if normalized_national_number.starts_with('0') {
            phone_number.set_italian_leading_zero(true);
        }
        let national_number_value = normalized_national_number
            .parse::<u64>()
            .map_err(|_| ParseError::NotANumber)?;
        phone_number.set_national_number(national_number_value);
        Ok(phone_number)
    }

    // ------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------

    /// Compares two phone numbers for equality.
    ///
    /// `ExactMatch` requires the country code, NSN, leading-zero flag and
    /// extension to be the same. `NsnMatch` means the NSNs and extensions
    /// match but at least one number carried no country code.
    /// `ShortNsnMatch` additionally covers one NSN being a trailing
    /// shorter form of the other, e.g. "+1 345 657 1234" and "657 1234".
    pub fn is_number_match(
        &self,
        first_number_in: &PhoneNumber,
        second_number_in: &PhoneNumber,
    ) -> MatchType {
        // Copies keep only the fields that identify a number, so the
        // volatile parsing context never influences equality.
        let mut first_number = PhoneNumber::new();
        copy_core_fields_only(first_number_in, &mut first_number);
        let mut second_number = PhoneNumber::new();
        copy_core_fields_only(second_number_in, &mut second_number);

        // Early exit when both have extensions and these differ.
        if first_number.has_extension()
            && second_number.has_extension()
            && first_number.extension() != second_number.extension()
        {
            return MatchType::NoMatch;
        }
        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            }
            if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A short match: the difference is the leading-zero flag,
                // an extension, or one NSN being a shorter form.
                return MatchType::ShortNsnMatch;
            }
            return MatchType::NoMatch;
        }
        // At least one country code is missing; level the field and
        // retest.
        first_number.set_country_code(0);
        second_number.set_country_code(0);
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Compares a parsed number with a string operand. A string carrying
    /// no recoverable calling code is retried against the parsed
    /// number's region; an exact match found that way is downgraded to
    /// `NsnMatch`, since the string itself named no region.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> MatchType {
        match self.parse(second_number, i18n::RegionCode::get_unknown()) {
            Ok(second_number_parsed) => self.is_number_match(first_number, &second_number_parsed),
            Err(ParseError::InvalidCountryCode) => {
                let second_number_region =
                    self.get_region_code_for_country_code(first_number.country_code());
                if second_number_region != i18n::RegionCode::get_unknown() {
                    match self.parse(second_number, second_number_region) {
                        Ok(second_number_with_first_number_region) => {
                            let match_type = self
                                .is_number_match(first_number, &second_number_with_first_number_region);
                            if match_type == MatchType::ExactMatch {
                                MatchType::NsnMatch
                            } else {
                                match_type
                            }
                        }
                        Err(_) => MatchType::NotANumber,
                    }
                } else {
                    // No region to borrow: parse without one and compare
                    // national numbers only.
                    match self.parse_helper(second_number, None, false, false) {
                        Ok(second_number_parsed) => {
                            self.is_number_match(first_number, &second_number_parsed)
                        }
                        Err(_) => MatchType::NotANumber,
                    }
                }
            }
            Err(_) => MatchType::NotANumber,
        }
    }

    /// Compares two string operands. Parse failures fold into
    /// `NotANumber` rather than propagating.
    pub fn is_number_match_with_two_strings(
        &self,
        first_number: &str,
        second_number: &str,
    ) -> MatchType {
        match self.parse(first_number, i18n::RegionCode::get_unknown()) {
            Ok(first_number_parsed) => {
                self.is_number_match_with_one_string(&first_number_parsed, second_number)
            }
            Err(ParseError::InvalidCountryCode) => {
                // The first number has no country code; try the second
                // one, or fall back to comparing both without regions.
                match self.parse(second_number, i18n::RegionCode::get_unknown()) {
                    Ok(second_number_parsed) => {
                        self.is_number_match_with_one_string(&second_number_parsed, first_number)
                    }
                    Err(ParseError::InvalidCountryCode) => {
                        match (
                            self.parse_helper(first_number, None, false, false),
                            self.parse_helper(second_number, None, false, false),
                        ) {
                            (Ok(first_parsed), Ok(second_parsed)) => {
                                self.is_number_match(&first_parsed, &second_parsed)
                            }
                            _ => MatchType::NotANumber,
                        }
                    }
                    Err(_) => MatchType::NotANumber,
                }
            }
            Err(_) => MatchType::NotANumber,
        }
    }
}
