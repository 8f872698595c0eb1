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

use std::collections::HashMap;

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{
    MIN_LENGTH_FOR_NSN, PLUS_CHARS, RFC3966_EXTN_PREFIX, STAR_SIGN, VALID_ALPHA, VALID_DIGITS,
    VALID_PUNCTUATION,
};

/// Every fixed regular expression and character-mapping table the engine
/// needs, compiled once at construction. Patterns coming out of the
/// metadata go through `regexp_cache` instead.
pub(super) struct PhoneNumberRegExpsAndMappings {
    pub regexp_cache: RegexCache,

    /// Characters that are essential when dialing and must never be
    /// removed from a dial string: digits, '+', '*' and '#'.
    pub diallable_char_mappings: HashMap<char, char>,
    /// Keypad letter assignments (ITU E.161): A-C to 2, ..., W-Z to 9.
    pub alpha_mappings: HashMap<char, char>,
    /// Alpha mappings combined with the digit tables, used when a vanity
    /// number is normalized as a whole.
    pub alpha_phone_mappings: HashMap<char, char>,
    /// Digit variants of every supported script mapped to ASCII digits.
    pub digit_mappings: HashMap<char, char>,
    /// Symbols retained when formatting alpha numbers: digits, letters and
    /// grouping symbols such as '-' and ' '.
    pub all_plus_number_grouping_symbols: HashMap<char, char>,

    /// Distinguishes regions with a single numeric international dialing
    /// prefix (possibly with a tone-wait tilde) from regions whose prefix
    /// is a pattern over several alternatives.
    pub unique_international_prefix: Regex,

    pub capturing_digit_pattern: Regex,

    /// Characters that may start a phone number: a digit of any supported
    /// script or a plus sign. Everything before the first of these carries
    /// no information and is stripped.
    pub valid_start_char_pattern: Regex,

    /// Marks the start of a second phone number glued onto a first one,
    /// e.g. "(530) 583-6985 x302/x2303": everything from the slash on
    /// belongs to the second number and is cut off.
    pub second_number_start_pattern: Regex,

    /// Trailing characters to remove: anything that is neither a digit,
    /// a letter nor '#' (kept because it may close an extension).
    pub unwanted_end_char_pattern: Regex,

    /// Groups of valid punctuation characters.
    pub separator_pattern: Regex,

    pub non_digits_pattern: Regex,

    /// Every way an extension can be written, anchored to the end of the
    /// number, case-insensitive.
    pub extn_pattern: Regex,

    /// The viability grammar: either exactly the minimum number of digits,
    /// or optional plus signs followed by at least three digit groups with
    /// interleaved punctuation, optionally closed by an extension.
    pub valid_phone_number_pattern: Regex,

    /// Matches inputs with at least three letters, which are treated as
    /// numbers written with keypad letters.
    pub valid_alpha_phone_pattern: Regex,

    /// The first `$x` group token in a format template. `$1` itself is not
    /// used because some regions never reference the first group in their
    /// national pattern.
    pub first_group_capturing_pattern: Regex,

    pub carrier_code_pattern: Regex,
    pub np_pattern: Regex,
    pub fg_pattern: Regex,

    pub leading_plus_chars_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_mappings(&mut self) {
        let mut ascii_digit_mappings = HashMap::with_capacity(10);
        for d in '0'..='9' {
            ascii_digit_mappings.insert(d, d);
        }

        let mut digit_mappings = HashMap::with_capacity(40);
        digit_mappings.extend(ascii_digit_mappings.iter());
        for value in 0..10u32 {
            let ascii = char::from_digit(value, 10).unwrap();
            // Fullwidth, Arabic-Indic and Eastern-Arabic variants.
            digit_mappings.insert(char::from_u32(0xFF10 + value).unwrap(), ascii);
            digit_mappings.insert(char::from_u32(0x0660 + value).unwrap(), ascii);
            digit_mappings.insert(char::from_u32(0x06F0 + value).unwrap(), ascii);
        }
        self.digit_mappings = digit_mappings;

        let mut alpha_map = HashMap::with_capacity(26);
        for (letters, digit) in [
            ("ABC", '2'),
            ("DEF", '3'),
            ("GHI", '4'),
            ("JKL", '5'),
            ("MNO", '6'),
            ("PQRS", '7'),
            ("TUV", '8'),
            ("WXYZ", '9'),
        ] {
            for letter in letters.chars() {
                alpha_map.insert(letter, digit);
            }
        }
        // Only uppercase keys: lookups uppercase the input character.
        self.alpha_mappings = alpha_map;

        let mut combined_map = HashMap::with_capacity(70);
        combined_map.extend(self.alpha_mappings.iter());
        combined_map.extend(self.digit_mappings.iter());
        self.alpha_phone_mappings = combined_map;

        let mut diallable_char_map = HashMap::new();
        diallable_char_map.extend(ascii_digit_mappings.iter());
        diallable_char_map.insert('+', '+');
        diallable_char_map.insert('*', '*');
        diallable_char_map.insert('#', '#');
        self.diallable_char_mappings = diallable_char_map;

        let mut all_plus_number_groupings = HashMap::new();
        // Letters map to their own uppercase form.
        for c in self.alpha_mappings.keys() {
            all_plus_number_groupings.insert(c.to_ascii_lowercase(), *c);
            all_plus_number_groupings.insert(*c, *c);
        }
        all_plus_number_groupings.extend(ascii_digit_mappings.iter());
        for dash in [
            '-', '\u{FF0D}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}',
            '\u{2015}', '\u{2212}',
        ] {
            all_plus_number_groupings.insert(dash, '-');
        }
        all_plus_number_groupings.insert('/', '/');
        all_plus_number_groupings.insert('\u{FF0F}', '/');
        all_plus_number_groupings.insert(' ', ' ');
        all_plus_number_groupings.insert('\u{3000}', ' ');
        all_plus_number_groupings.insert('\u{2060}', ' ');
        all_plus_number_groupings.insert('.', '.');
        all_plus_number_groupings.insert('\u{FF0E}', '.');
        self.all_plus_number_grouping_symbols = all_plus_number_groupings;
    }

    pub fn new() -> Self {
        // Captures 1-7 digits of an extension, in any supported script.
        let capturing_extn_digits = format!("([{VALID_DIGITS}]{{1,7}})");

        // Three alternatives: RFC3966 ";ext=", then verbal or one-character
        // labels with an optional full stop and separators, then the
        // American style with a trailing '#'. Only the digit groups
        // capture.
        let extn_patterns_for_parsing = format!(
            "{rfc}{capture}|[ \u{00A0}\\t,]*\
(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\u{FF45}?\u{FF58}\u{FF54}\u{FF4E}?|\
[,x\u{FF58}#\u{FF03}~\u{FF5E}]|int|anexo|\u{FF49}\u{FF4E}\u{FF54})\
[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*{capture}#?|\
[- ]+([{digits}]{{1,5}})#",
            rfc = RFC3966_EXTN_PREFIX,
            capture = capturing_extn_digits,
            digits = VALID_DIGITS,
        );

        let min_length_phone_number = format!("[{VALID_DIGITS}]{{{MIN_LENGTH_FOR_NSN}}}");
        let valid_phone_number = format!(
            "[{plus}]*(?:[{punct}{star}]*[{digits}]){{3,}}[{punct}{star}{alpha}{digits}]*",
            plus = PLUS_CHARS,
            punct = VALID_PUNCTUATION,
            star = STAR_SIGN,
            digits = VALID_DIGITS,
            alpha = VALID_ALPHA,
        );

        let mut instance = Self {
            regexp_cache: RegexCache::with_capacity(128),
            diallable_char_mappings: Default::default(),
            alpha_mappings: Default::default(),
            alpha_phone_mappings: Default::default(),
            digit_mappings: Default::default(),
            all_plus_number_grouping_symbols: Default::default(),
            unique_international_prefix: Regex::new(
                "[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?",
            )
            .unwrap(),
            capturing_digit_pattern: Regex::new(&format!("([{VALID_DIGITS}])")).unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{PLUS_CHARS}{VALID_DIGITS}]"))
                .unwrap(),
            second_number_start_pattern: Regex::new(r"[\\/] *x").unwrap(),
            unwanted_end_char_pattern: Regex::new(&format!(
                "[^{VALID_DIGITS}{VALID_ALPHA}#]+$"
            ))
            .unwrap(),
            separator_pattern: Regex::new(&format!("[{VALID_PUNCTUATION}]+")).unwrap(),
            non_digits_pattern: Regex::new(r"\D+").unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{extn_patterns_for_parsing})$")).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!(
                "(?i)^{min_length_phone_number}$|^{valid_phone_number}(?:{extn_patterns_for_parsing})?$"
            ))
            .unwrap(),
            valid_alpha_phone_pattern: Regex::new("(?:.*?[A-Za-z]){3}.*").unwrap(),
            first_group_capturing_pattern: Regex::new(r"(\$\d)").unwrap(),
            carrier_code_pattern: Regex::new(r"\$CC").unwrap(),
            np_pattern: Regex::new(r"\$NP").unwrap(),
            fg_pattern: Regex::new(r"\$FG").unwrap(),
            leading_plus_chars_pattern: Regex::new(&format!("^[{PLUS_CHARS}]+")).unwrap(),
        };
        instance.initialize_mappings();
        instance
    }
}
