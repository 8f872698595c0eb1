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

//! Bundled numbering-plan dataset.
//!
//! One entry per supported region plus one per non-geographical calling
//! code (region id "001"). The tables are compiled down from the region
//! dialing plans; patterns are kept as strings and compiled on first use
//! through the shared regex cache.

use super::types::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn desc(national: &str, possible: &str) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: opt(national),
        possible_number_pattern: opt(possible),
        example_number: None,
    }
}

fn desc_ex(national: &str, possible: &str, example: &str) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: opt(national),
        possible_number_pattern: opt(possible),
        example_number: opt(example),
    }
}

fn fmt(pattern: &str, format: &str, leading: &[&str]) -> NumberFormat {
    NumberFormat {
        pattern: pattern.to_owned(),
        format: format.to_owned(),
        leading_digits_pattern: leading.iter().map(|s| (*s).to_owned()).collect(),
        national_prefix_formatting_rule: None,
        domestic_carrier_code_formatting_rule: None,
    }
}

fn fmt_np(pattern: &str, format: &str, leading: &[&str], national_prefix_rule: &str) -> NumberFormat {
    NumberFormat {
        national_prefix_formatting_rule: opt(national_prefix_rule),
        ..fmt(pattern, format, leading)
    }
}

fn fmt_full(
    pattern: &str,
    format: &str,
    leading: &[&str],
    national_prefix_rule: &str,
    carrier_rule: &str,
) -> NumberFormat {
    NumberFormat {
        national_prefix_formatting_rule: opt(national_prefix_rule),
        domestic_carrier_code_formatting_rule: opt(carrier_rule),
        ..fmt(pattern, format, leading)
    }
}

fn metadata_us() -> PhoneMetadata {
    PhoneMetadata {
        id: "US".to_owned(),
        country_code: 1,
        international_prefix: opt("011"),
        national_prefix: opt("1"),
        national_prefix_for_parsing: opt("1"),
        same_mobile_and_fixed_line_pattern: true,
        main_country_for_code: true,
        general_desc: desc("[13-689]\\d{9}|2[0-35-9]\\d{8}", "\\d{7}(?:\\d{3})?"),
        fixed_line: desc_ex(
            "[13-689]\\d{9}|2[0-35-9]\\d{8}",
            "\\d{7}(?:\\d{3})?",
            "6502530000",
        ),
        mobile: desc_ex(
            "[13-689]\\d{9}|2[0-35-9]\\d{8}",
            "\\d{7}(?:\\d{3})?",
            "6502530000",
        ),
        toll_free: desc_ex("8(?:00|55|66|77|88)\\d{7}", "\\d{10}", "8002345678"),
        premium_rate: desc_ex("900\\d{7}", "\\d{10}", "9002345678"),
        no_international_dialling: desc("800\\d{7}", "\\d{10}"),
        number_format: vec![
            fmt("(\\d{3})(\\d{4})", "$1-$2", &[]),
            fmt("(\\d{3})(\\d{3})(\\d{4})", "($1) $2-$3", &[]),
        ],
        intl_number_format: vec![fmt("(\\d{3})(\\d{3})(\\d{4})", "$1-$2-$3", &[])],
        ..Default::default()
    }
}

fn metadata_bs() -> PhoneMetadata {
    PhoneMetadata {
        id: "BS".to_owned(),
        country_code: 1,
        international_prefix: opt("011"),
        national_prefix: opt("1"),
        national_prefix_for_parsing: opt("1"),
        general_desc: desc("(?:242|8(?:00|66|77|88)|900)\\d{7}", "\\d{7}(?:\\d{3})?"),
        fixed_line: desc_ex("242(?:3[2-6]|50|6[1-4])\\d{5}", "\\d{7}(?:\\d{3})?", "2423651234"),
        mobile: desc_ex("242(?:35[79]|45[79]|55[78])\\d{4}", "\\d{10}", "2423577890"),
        toll_free: desc_ex("8(?:00|66|77|88)\\d{7}", "\\d{10}", "8002345678"),
        premium_rate: desc_ex("900\\d{7}", "\\d{10}", "9002345678"),
        ..Default::default()
    }
}

fn metadata_ad() -> PhoneMetadata {
    PhoneMetadata {
        id: "AD".to_owned(),
        country_code: 376,
        international_prefix: opt("00"),
        main_country_for_code: true,
        general_desc: desc("[346-9]\\d{5}", "\\d{6}"),
        fixed_line: desc_ex("[78]\\d{5}", "\\d{6}", "712345"),
        mobile: desc_ex("[346]\\d{5}", "\\d{6}", "312345"),
        number_format: vec![fmt("(\\d{3})(\\d{3})", "$1 $2", &[])],
        ..Default::default()
    }
}

fn metadata_ar() -> PhoneMetadata {
    PhoneMetadata {
        id: "AR".to_owned(),
        country_code: 54,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0(?:(11|343|3715)15)?"),
        national_prefix_transform_rule: opt("9$1"),
        main_country_for_code: true,
        general_desc: desc("11\\d{8}|[2368]\\d{9}|9\\d{10}", "\\d{6,11}"),
        fixed_line: desc_ex("11\\d{8}|[2368]\\d{9}", "\\d{6,10}", "1123456789"),
        mobile: desc_ex(
            "9(?:11\\d{8}|343\\d{7}|3715\\d{6})",
            "\\d{10,11}",
            "91123456789",
        ),
        toll_free: desc_ex("800\\d{7}", "\\d{10}", "8001234567"),
        number_format: vec![
            fmt_full(
                "(\\d{2})(\\d{4})(\\d{4})",
                "$1 $2-$3",
                &["11"],
                "0$1",
                "0$1 $CC",
            ),
            fmt_np("(9)(11)(\\d{4})(\\d{4})", "$2 15-$3-$4", &["911"], "0$2"),
            fmt_full(
                "(\\d{4})(\\d{2})(\\d{4})",
                "$1 $2-$3",
                &["[2368]"],
                "0$1",
                "0$1 $CC",
            ),
            fmt_np(
                "(9)(\\d{3,4})(\\d{2})(\\d{4})",
                "$2 15-$3-$4",
                &["9(?:3[47]|[2368])"],
                "0$2",
            ),
        ],
        intl_number_format: vec![
            fmt("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3", &["11"]),
            fmt("(9)(11)(\\d{4})(\\d{4})", "$1 $2 $3-$4", &["911"]),
            fmt("(\\d{4})(\\d{2})(\\d{4})", "$1 $2-$3", &["[2368]"]),
            fmt(
                "(9)(\\d{3,4})(\\d{2})(\\d{4})",
                "$1 $2 $3-$4",
                &["9(?:3[47]|[2368])"],
            ),
        ],
        ..Default::default()
    }
}

fn metadata_au() -> PhoneMetadata {
    PhoneMetadata {
        id: "AU".to_owned(),
        country_code: 61,
        international_prefix: opt("001[14-689]|14(?:1[14]|34|41|72|83)"),
        preferred_international_prefix: opt("0011"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        main_country_for_code: true,
        general_desc: desc("[1-578]\\d{5,9}", "\\d{6,10}"),
        fixed_line: desc_ex("[2378]\\d{8}", "\\d{8,9}", "212345678"),
        mobile: desc_ex("4\\d{8}", "\\d{9}", "412345678"),
        toll_free: desc_ex("1800\\d{6}", "\\d{10}", "1800123456"),
        premium_rate: desc_ex("190[0-26]\\d{6}", "\\d{10}", "1900123456"),
        number_format: vec![
            fmt_np("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3", &["[2378]"], "(0$1)"),
            fmt_np("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3", &["4"], "0$1"),
            fmt("(\\d{4})(\\d{3})(\\d{3})", "$1 $2 $3", &["1"]),
        ],
        ..Default::default()
    }
}

fn metadata_br() -> PhoneMetadata {
    PhoneMetadata {
        id: "BR".to_owned(),
        country_code: 55,
        international_prefix: opt("00(?:1[45]|2[135]|[34]1|43)"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0(?:(1[245]|2[135]|[34]1)(\\d{10,11}))?"),
        national_prefix_transform_rule: opt("$2"),
        main_country_for_code: true,
        general_desc: desc("[1-9]\\d{9,10}", "\\d{8,11}"),
        fixed_line: desc_ex("[1-9]{2}[2-5]\\d{7}", "\\d{10}", "1123456789"),
        mobile: desc_ex("[1-9]{2}9?[6-9]\\d{7}", "\\d{10,11}", "11961234567"),
        toll_free: desc_ex("800\\d{6,7}", "\\d{9,10}", "800123456"),
        number_format: vec![
            fmt_full(
                "(\\d{2})(\\d{5})(\\d{4})",
                "$1 $2-$3",
                &["[1-9][1-9]9"],
                "($1)",
                "0 $CC ($1)",
            ),
            fmt_full(
                "(\\d{2})(\\d{4})(\\d{4})",
                "$1 $2-$3",
                &["[1-9][1-9]"],
                "($1)",
                "0 $CC ($1)",
            ),
            fmt("(\\d{3})(\\d{3})(\\d{3,4})", "$1 $2 $3", &["800"]),
        ],
        ..Default::default()
    }
}

fn metadata_co() -> PhoneMetadata {
    PhoneMetadata {
        id: "CO".to_owned(),
        country_code: 57,
        international_prefix: opt("00(?:4(?:[14]4|56)|[579])"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0([3579]|4(?:44|56))?"),
        main_country_for_code: true,
        general_desc: desc("(?:[13]\\d{0,3}|[24-8])\\d{7}", "\\d{7,11}"),
        fixed_line: desc_ex("[124-8][2-9]\\d{6}", "\\d{8}", "12345678"),
        mobile: desc_ex("3[0-2]\\d{8}", "\\d{10}", "3211234567"),
        number_format: vec![
            fmt_full("(\\d)(\\d{7})", "$1 $2", &["1[2-7]|[24-8]"], "($1)", "0$CC $1"),
            fmt_full("(\\d{3})(\\d{7})", "$1 $2", &["3"], "", "0$CC $1"),
        ],
        ..Default::default()
    }
}

fn metadata_de() -> PhoneMetadata {
    PhoneMetadata {
        id: "DE".to_owned(),
        country_code: 49,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        main_country_for_code: true,
        general_desc: desc("[1-9]\\d{5,13}", "\\d{6,14}"),
        fixed_line: desc_ex("[2-9]\\d{5,13}", "\\d{6,14}", "30123456"),
        mobile: desc_ex("1(?:5\\d{9}|7\\d{8})", "\\d{10,11}", "15123456789"),
        toll_free: desc_ex("800\\d{7}", "\\d{10}", "8001234567"),
        premium_rate: desc_ex("900([135]\\d{6}|9\\d{7})", "\\d{10,11}", "9001234567"),
        number_format: vec![
            fmt_np("(\\d{2})(\\d{3,11})", "$1 $2", &["3[02]|40|[68]9"], "0$1"),
            fmt_np("(\\d{3})(\\d{7,8})", "$1 $2", &["1[57]"], "0$1"),
            fmt_np("(\\d{3})(\\d{3,4})(\\d{4})", "$1 $2 $3", &["900"], "0$1"),
            fmt_np("(\\d{3})(\\d{3,11})", "$1 $2", &["[24-9]"], "0$1"),
        ],
        ..Default::default()
    }
}

fn metadata_gb() -> PhoneMetadata {
    PhoneMetadata {
        id: "GB".to_owned(),
        country_code: 44,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        main_country_for_code: true,
        general_desc: desc("[1-9]\\d{8,9}", "\\d{7,10}"),
        fixed_line: desc_ex("[12]\\d{8,9}", "\\d{7,10}", "2087389353"),
        mobile: desc_ex("7[1-57-9]\\d{8}", "\\d{10}", "7912345678"),
        toll_free: desc_ex("80[08]\\d{7}", "\\d{10}", "8001234567"),
        premium_rate: desc_ex("9[018]\\d{8}", "\\d{10}", "9012345678"),
        shared_cost: desc_ex("8(?:4[2-5]|7[0-3])\\d{7}", "\\d{10}", "8431234567"),
        voip: desc_ex("56\\d{8}", "\\d{10}", "5612345678"),
        personal_number: desc_ex("70\\d{8}", "\\d{10}", "7012345678"),
        pager: desc_ex("76\\d{8}", "\\d{10}", "7612345678"),
        uan: desc_ex("55\\d{8}", "\\d{10}", "5512345678"),
        number_format: vec![
            fmt_np("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", &["2"], "(0$1)"),
            fmt_np("(\\d{2})(\\d{3})(\\d{4})", "$1 $2 $3", &["1"], "(0$1)"),
            fmt_np("(\\d{4})(\\d{3})(\\d{3})", "$1 $2 $3", &["[5-7]"], "(0$1)"),
            fmt_np("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3", &["[89]"], "0$1"),
        ],
        ..Default::default()
    }
}

fn metadata_it() -> PhoneMetadata {
    PhoneMetadata {
        id: "IT".to_owned(),
        country_code: 39,
        international_prefix: opt("00"),
        main_country_for_code: true,
        leading_zero_possible: true,
        general_desc: desc("[0389]\\d{5,10}", "\\d{6,11}"),
        fixed_line: desc_ex("0\\d{9,10}", "\\d{10,11}", "0236618300"),
        mobile: desc_ex("3\\d{8,9}", "\\d{9,10}", "312345678"),
        toll_free: desc_ex("80(?:0\\d{6}|3\\d{3})", "\\d{6,9}", "800123456"),
        premium_rate: desc_ex("899\\d{6}", "\\d{9}", "899123456"),
        number_format: vec![
            fmt("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", &["0[26]"]),
            fmt("(\\d{3})(\\d{3})(\\d{3,4})", "$1 $2 $3", &["3|8"]),
            fmt("(\\d{4})(\\d{4})", "$1 $2", &["0[13-57-9]"]),
        ],
        ..Default::default()
    }
}

fn metadata_mx() -> PhoneMetadata {
    PhoneMetadata {
        id: "MX".to_owned(),
        country_code: 52,
        international_prefix: opt("00"),
        national_prefix: opt("01"),
        national_prefix_for_parsing: opt("0[12]|04[45](\\d{10})"),
        national_prefix_transform_rule: opt("1$1"),
        main_country_for_code: true,
        general_desc: desc("[1-9]\\d{9,10}", "\\d{7,11}"),
        fixed_line: desc_ex("[2-9]\\d{9}", "\\d{7,10}", "5512345678"),
        mobile: desc_ex("1\\d{10}", "\\d{11}", "15512345678"),
        number_format: vec![
            fmt_full(
                "(\\d{2})(\\d{4})(\\d{4})",
                "$1 $2 $3",
                &["[2-9]"],
                "01 $1",
                "$CC $1",
            ),
            fmt("(1)(\\d{2})(\\d{4})(\\d{4})", "045 $2 $3 $4", &["1"]),
        ],
        intl_number_format: vec![
            fmt("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3", &["[2-9]"]),
            fmt("(1)(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3 $4", &["1"]),
        ],
        ..Default::default()
    }
}

fn metadata_nz() -> PhoneMetadata {
    PhoneMetadata {
        id: "NZ".to_owned(),
        country_code: 64,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        main_country_for_code: true,
        general_desc: desc("[289]\\d{7,9}|[3-7]\\d{7}", "\\d{7,10}"),
        fixed_line: desc_ex(
            "(?:3[2-79]|[49][2-9]|6[235-9]|7[2-57-9])\\d{6}",
            "\\d{7,8}",
            "32345678",
        ),
        mobile: desc_ex("2[0-27-9]\\d{7,8}", "\\d{8,10}", "211234567"),
        toll_free: desc_ex("800\\d{6,7}", "\\d{9,10}", "800123456"),
        premium_rate: desc_ex("900\\d{6,7}", "\\d{9,10}", "900123456"),
        number_format: vec![
            fmt_np("(\\d)(\\d{3})(\\d{4})", "$1 $2 $3", &["[34679]"], "0$1"),
            fmt_np("(\\d{2})(\\d{3})(\\d{3,5})", "$1 $2 $3", &["2"], "0$1"),
            fmt_np("(\\d{3})(\\d{3})(\\d{3,4})", "$1 $2 $3", &["[89]0"], "0$1"),
        ],
        ..Default::default()
    }
}

fn metadata_pe() -> PhoneMetadata {
    PhoneMetadata {
        id: "PE".to_owned(),
        country_code: 51,
        international_prefix: opt("19(?:1[124]|77|90)00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        preferred_extn_prefix: opt(" Anexo "),
        main_country_for_code: true,
        general_desc: desc("[14-9]\\d{7,8}", "\\d{6,9}"),
        fixed_line: desc_ex("1\\d{7}|[4-8]\\d{7}", "\\d{6,8}", "11234567"),
        mobile: desc_ex("9\\d{8}", "\\d{9}", "912345678"),
        number_format: vec![
            fmt_np("(\\d)(\\d{7})", "$1 $2", &["[14-8]"], "(0$1)"),
            fmt("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3", &["9"]),
        ],
        ..Default::default()
    }
}

fn metadata_re() -> PhoneMetadata {
    PhoneMetadata {
        id: "RE".to_owned(),
        country_code: 262,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        main_country_for_code: true,
        leading_digits: opt("262|6[49]|8"),
        general_desc: desc("[268]\\d{8}", "\\d{9}"),
        fixed_line: desc_ex("262\\d{6}", "\\d{9}", "262161234"),
        mobile: desc_ex("6(?:9[23]|4[78])\\d{6}", "\\d{9}", "692123456"),
        toll_free: desc_ex("80\\d{7}", "\\d{9}", "801234567"),
        number_format: vec![fmt_np(
            "(\\d{3})(\\d{2})(\\d{2})(\\d{2})",
            "$1 $2 $3 $4",
            &[],
            "0$1",
        )],
        ..Default::default()
    }
}

fn metadata_yt() -> PhoneMetadata {
    PhoneMetadata {
        id: "YT".to_owned(),
        country_code: 262,
        international_prefix: opt("00"),
        national_prefix: opt("0"),
        national_prefix_for_parsing: opt("0"),
        leading_digits: opt("269|639"),
        general_desc: desc("[26]\\d{8}", "\\d{9}"),
        fixed_line: desc_ex("2696[0-4]\\d{4}", "\\d{9}", "269601234"),
        mobile: desc_ex("639\\d{6}", "\\d{9}", "639123456"),
        ..Default::default()
    }
}

fn metadata_sg() -> PhoneMetadata {
    PhoneMetadata {
        id: "SG".to_owned(),
        country_code: 65,
        international_prefix: opt("0[0-3]\\d?"),
        main_country_for_code: true,
        general_desc: desc("[36]\\d{7}|[17-9]\\d{7,10}", "\\d{8,11}"),
        fixed_line: desc_ex("6[1-9]\\d{6}", "\\d{8}", "61234567"),
        mobile: desc_ex("[89]\\d{7}", "\\d{8}", "81234567"),
        toll_free: desc_ex("1?800\\d{7}", "\\d{10,11}", "18001234567"),
        number_format: vec![
            fmt("(\\d{4})(\\d{4})", "$1 $2", &["[369]|8[1-9]"]),
            fmt("(\\d{4})(\\d{3})(\\d{4})", "$1 $2 $3", &["1[89]"]),
            fmt("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3", &["800"]),
        ],
        ..Default::default()
    }
}

fn metadata_international_toll_free() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 800,
        main_country_for_code: true,
        general_desc: desc_ex("\\d{8}", "\\d{8}", "12345678"),
        toll_free: desc_ex("\\d{8}", "\\d{8}", "12345678"),
        number_format: vec![fmt("(\\d{4})(\\d{4})", "$1 $2", &[])],
        ..Default::default()
    }
}

fn metadata_international_premium_rate() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 979,
        main_country_for_code: true,
        general_desc: desc_ex("\\d{9}", "\\d{9}", "123456789"),
        premium_rate: desc_ex("\\d{9}", "\\d{9}", "123456789"),
        number_format: vec![fmt("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3", &[])],
        ..Default::default()
    }
}

/// The full bundled dataset, one entry per region or non-geographical
/// calling code.
pub(crate) fn bundled_metadata() -> Vec<PhoneMetadata> {
    vec![
        metadata_us(),
        metadata_bs(),
        metadata_ad(),
        metadata_ar(),
        metadata_au(),
        metadata_br(),
        metadata_co(),
        metadata_de(),
        metadata_gb(),
        metadata_it(),
        metadata_mx(),
        metadata_nz(),
        metadata_pe(),
        metadata_re(),
        metadata_yt(),
        metadata_sg(),
        metadata_international_toll_free(),
        metadata_international_premium_rate(),
    ]
}
