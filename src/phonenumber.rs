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

/// How the country calling code of a parsed number was determined. Only
/// meaningful on numbers parsed with raw-input retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    #[default]
    Unspecified,
    /// The number began with one or more plus signs.
    FromNumberWithPlusSign,
    /// The number began with the calling region's international dialing
    /// prefix.
    FromNumberWithIdd,
    /// The number carried a country calling code without any international
    /// prefix; the code was recognized heuristically.
    FromNumberWithoutPlusSign,
    /// No calling code was present; the default region supplied it.
    FromDefaultCountry,
}

/// A parsed phone number.
///
/// Field presence matters: `PartialEq` distinguishes an unset field from a
/// field explicitly set to its default, which is what the matcher relies on.
/// Accessors return the field's default value (`0`, `""`, `false`,
/// `Unspecified`) when the field is unset; the `has_*` methods report
/// presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: Option<i32>,
    national_number: Option<u64>,
    extension: Option<String>,
    italian_leading_zero: Option<bool>,
    raw_input: Option<String>,
    country_code_source: Option<CountryCodeSource>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn country_code(&self) -> i32 {
        self.country_code.unwrap_or(0)
    }

    pub fn has_country_code(&self) -> bool {
        self.country_code.is_some()
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = Some(country_code);
    }

    pub fn national_number(&self) -> u64 {
        self.national_number.unwrap_or(0)
    }

    pub fn has_national_number(&self) -> bool {
        self.national_number.is_some()
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = Some(national_number);
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.unwrap_or(false)
    }

    pub fn has_italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.is_some()
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = Some(italian_leading_zero);
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source.unwrap_or_default()
    }

    pub fn has_country_code_source(&self) -> bool {
        self.country_code_source.is_some()
    }

    pub fn set_country_code_source(&mut self, source: CountryCodeSource) {
        self.country_code_source = Some(source);
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code.as_deref().unwrap_or("")
    }

    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    pub fn set_preferred_domestic_carrier_code(&mut self, carrier_code: String) {
        self.preferred_domestic_carrier_code = Some(carrier_code);
    }

    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }

    /// Returns a copy with the extension cleared. Extensions cannot normally
    /// be dialed together with the main number, so several formatting paths
    /// work on this copy rather than mutating the caller's value.
    pub fn without_extension(&self) -> PhoneNumber {
        let mut copy = self.clone();
        copy.clear_extension();
        copy
    }
}
