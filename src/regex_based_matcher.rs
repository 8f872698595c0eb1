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

use log::error;

use crate::{
    interfaces::MatcherApi,
    metadata::PhoneNumberDesc,
    regex_util::RegexFullMatch,
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// Matcher backed by the shared regex machinery. A descriptor matches when
/// the national number satisfies both its possible-number and its
/// national-number pattern in full.
pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(128),
        }
    }

    fn match_number(&self, phone_number: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern)?;
        Ok(regexp.full_match(phone_number))
    }

    fn match_or_log(&self, phone_number: &str, pattern: &str) -> bool {
        match self.match_number(phone_number, pattern) {
            Ok(matched) => matched,
            Err(_) => {
                // A pattern that fails to compile means broken metadata;
                // classification stays total and treats it as a non-match.
                error!("Invalid regex in metadata! {}", pattern);
                false
            }
        }
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_national_number(&self, number: &str, number_desc: &PhoneNumberDesc) -> bool {
        let national_number_pattern = number_desc.national_number_pattern();
        // Matching a non-empty input against an empty pattern is never a
        // match.
        if national_number_pattern.is_empty() {
            return false;
        }
        if !self.match_or_log(number, number_desc.possible_number_pattern()) {
            return false;
        }
        self.match_or_log(number, national_number_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedMatcher;
    use crate::interfaces::MatcherApi;
    use crate::metadata::PhoneNumberDesc;

    #[test]
    fn requires_both_patterns_to_match() {
        let matcher = RegexBasedMatcher::new();
        let desc = PhoneNumberDesc {
            national_number_pattern: Some(r"6\d{7}".to_owned()),
            possible_number_pattern: Some(r"\d{8}".to_owned()),
            example_number: None,
        };
        assert!(matcher.match_national_number("61234567", &desc));
        assert!(!matcher.match_national_number("71234567", &desc));
        assert!(!matcher.match_national_number("612345678", &desc));
    }

    #[test]
    fn empty_descriptor_matches_nothing() {
        let matcher = RegexBasedMatcher::new();
        let desc = PhoneNumberDesc::default();
        assert!(!matcher.match_national_number("61234567", &desc));
    }
}
