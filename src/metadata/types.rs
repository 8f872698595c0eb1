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

//! The numbering-plan data model. Metadata is read-only after load: the
//! engine looks patterns up but never mutates a descriptor. The only
//! exception is `NumberFormat`, which exposes setters because a few
//! formatting paths clone a format rule and adjust the copy before use.

/// Patterns describing one category of numbers (fixed line, mobile, toll
/// free, ...) within a region. A descriptor with no national-number pattern
/// matches nothing; categories a region does not have are simply left at
/// their default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: Option<String>,
    pub possible_number_pattern: Option<String>,
    pub example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn possible_number_pattern(&self) -> &str {
        self.possible_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_possible_number_pattern(&self) -> bool {
        self.possible_number_pattern.is_some()
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// One rendering rule: `pattern` is matched against the full national
/// significant number, `format` is the replacement template, and the
/// leading-digits patterns cheaply preselect which rule applies (the last
/// entry is the most specific one).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_pattern: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_pattern(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_format(&mut self, format: String) {
        self.format = format;
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix_formatting_rule(&self) -> bool {
        self.national_prefix_formatting_rule.is_some()
    }

    pub fn set_national_prefix_formatting_rule(&mut self, rule: String) {
        self.national_prefix_formatting_rule = Some(rule);
    }

    pub fn clear_national_prefix_formatting_rule(&mut self) {
        self.national_prefix_formatting_rule = None;
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or("")
    }

    pub fn has_domestic_carrier_code_formatting_rule(&self) -> bool {
        self.domestic_carrier_code_formatting_rule.is_some()
    }
}

/// The numbering plan of one region, or of one non-geographical calling
/// code (id `001`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: i32,
    pub international_prefix: Option<String>,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub same_mobile_and_fixed_line_pattern: bool,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,

    pub number_format: Vec<NumberFormat>,
    pub intl_number_format: Vec<NumberFormat>,

    pub main_country_for_code: bool,
    pub leading_digits: Option<String>,
    pub leading_zero_possible: bool,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn has_international_prefix(&self) -> bool {
        self.international_prefix.is_some()
    }

    pub fn preferred_international_prefix(&self) -> &str {
        self.preferred_international_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_international_prefix(&self) -> bool {
        self.preferred_international_prefix.is_some()
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        self.national_prefix_for_parsing.is_some()
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix_transform_rule(&self) -> bool {
        self.national_prefix_transform_rule.is_some()
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or("")
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn leading_zero_possible(&self) -> bool {
        self.leading_zero_possible
    }
}
