use crate::{
    metadata::NumberFormat, CountryCodeSource, MatchType, ParseError, PhoneNumber,
    PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil, ValidationResult,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberUtil::new()
}

fn us_number() -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(1);
    number.set_national_number(6502530000);
    number
}

fn gb_number() -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(44);
    number.set_national_number(2087389353);
    number
}

fn it_number() -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(39);
    number.set_national_number(236618300);
    number.set_italian_leading_zero(true);
    number
}

fn nz_number() -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(64);
    number.set_national_number(33316005);
    number
}

#[test]
fn interchange_invalid_codepoints() {
    let phone_util = get_phone_util();

    let valid_inputs = vec![
        "+44\u{2013}2087654321", // U+2013, EN DASH
    ];
    for input in valid_inputs {
        assert_eq!(input, dec_from_char::normalize_decimals(input));
        assert!(phone_util.is_viable_phone_number(input));
        phone_util.parse(input, RegionCode::gb()).unwrap();
    }

    let invalid_inputs = vec![
        "+44\u{96}2087654321",   // Invalid sequence
        "+44\u{0096}2087654321", // U+0096
        "+44\u{fffe}2087654321", // U+FFFE
    ];
    for input in invalid_inputs {
        assert!(!phone_util.is_viable_phone_number(input));
        assert!(phone_util
            .parse(input, RegionCode::gb())
            .is_err_and(|err| matches!(err, ParseError::NotANumber)));
    }
}

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let regions = phone_util.get_supported_regions();
    assert!(!regions.is_empty());
    assert!(regions.contains(&RegionCode::us()));
    // The non-geographical marker is not a region.
    assert!(!regions.contains(&RegionCode::un001()));
}

#[test]
fn get_supported_global_network_calling_codes() {
    let phone_util = get_phone_util();
    let calling_codes = phone_util.get_supported_global_network_calling_codes();
    assert!(calling_codes.contains(&800));
    assert!(calling_codes.contains(&979));
    for code in calling_codes {
        assert!(code > 0);
        assert_eq!(
            RegionCode::un001(),
            phone_util.get_region_code_for_country_code(code)
        );
    }
}

#[test]
fn get_supported_calling_codes() {
    let phone_util = get_phone_util();
    let calling_codes = phone_util.get_supported_calling_codes();
    assert!(!calling_codes.is_empty());
    for &code in &calling_codes {
        assert!(code > 0);
        assert_ne!(
            RegionCode::zz(),
            phone_util.get_region_code_for_country_code(code)
        );
    }
    assert!(calling_codes.contains(&1));
    assert!(calling_codes.contains(&262));
    assert!(calling_codes.contains(&979));
}

#[test]
fn get_supported_types_for_region() {
    let phone_util = get_phone_util();
    let types = phone_util
        .get_supported_types_for_region(RegionCode::us())
        .expect("region should exist");
    assert!(types.contains(&PhoneNumberType::FixedLine));
    assert!(types.contains(&PhoneNumberType::Mobile));
    assert!(!types.contains(&PhoneNumberType::FixedLineOrMobile));
    assert!(!types.contains(&PhoneNumberType::Unknown));

    assert!(phone_util
        .get_supported_types_for_region(RegionCode::zz())
        .is_none());
}

#[test]
fn get_supported_types_for_non_geo_entity() {
    let phone_util = get_phone_util();
    assert!(phone_util.get_supported_types_for_non_geo_entity(999).is_none());

    let types = phone_util
        .get_supported_types_for_non_geo_entity(979)
        .expect("code should exist");
    assert!(types.contains(&PhoneNumberType::PremiumRate));
    assert!(!types.contains(&PhoneNumberType::Mobile));
    assert!(!types.contains(&PhoneNumberType::Unknown));
}

#[test]
fn get_region_codes_for_country_calling_code() {
    let phone_util = get_phone_util();

    let regions = phone_util.get_region_codes_for_country_calling_code(1);
    assert!(regions.contains(&RegionCode::us()));
    assert!(regions.contains(&RegionCode::bs()));
    // The main region comes first.
    assert_eq!(Some(&RegionCode::us()), regions.first());

    let regions = phone_util.get_region_codes_for_country_calling_code(44);
    assert!(regions.contains(&RegionCode::gb()));

    let regions = phone_util.get_region_codes_for_country_calling_code(800);
    assert!(regions.contains(&RegionCode::un001()));

    const INVALID_COUNTRY_CODE: i32 = 2;
    assert!(phone_util
        .get_region_codes_for_country_calling_code(INVALID_COUNTRY_CODE)
        .is_empty());
}

#[test]
fn get_instance_load_us_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .get_metadata_for_region(RegionCode::us())
        .unwrap();
    assert_eq!(RegionCode::us(), metadata.id());
    assert_eq!(1, metadata.country_code());
    assert_eq!("011", metadata.international_prefix());
    assert!(metadata.has_national_prefix());
    assert_eq!(2, metadata.number_format.len());
    assert_eq!(
        "(\\d{3})(\\d{3})(\\d{4})",
        metadata.number_format[1].pattern()
    );
    assert_eq!("($1) $2-$3", metadata.number_format[1].format());
    assert_eq!(
        "[13-689]\\d{9}|2[0-35-9]\\d{8}",
        metadata.general_desc.national_number_pattern()
    );
    assert_eq!("900\\d{7}", metadata.premium_rate.national_number_pattern());
    assert!(!metadata.shared_cost.has_national_number_pattern());
}

#[test]
fn get_national_significant_number() {
    let number = us_number();
    assert_eq!(
        "6502530000",
        PhoneNumberUtil::get_national_significant_number(&number)
    );

    // An Italian mobile number.
    let mut number = PhoneNumber::new();
    number.set_country_code(39);
    number.set_national_number(312345678);
    assert_eq!(
        "312345678",
        PhoneNumberUtil::get_national_significant_number(&number)
    );

    // An Italian fixed-line number, with the leading zero kept.
    assert_eq!(
        "0236618300",
        PhoneNumberUtil::get_national_significant_number(&it_number())
    );

    let mut number = PhoneNumber::new();
    number.set_country_code(800);
    number.set_national_number(12345678);
    assert_eq!(
        "12345678",
        PhoneNumberUtil::get_national_significant_number(&number)
    );
}

#[test]
fn normalise_remove_punctuation() {
    let phone_util = get_phone_util();
    assert_eq!(
        "03456234",
        phone_util.normalize("034-56&+#2\u{00AD}34"),
        "conversion did not correctly remove punctuation"
    );
}

#[test]
fn normalise_replace_alpha_characters() {
    let phone_util = get_phone_util();
    assert_eq!(
        "034426486479",
        phone_util.normalize("034-I-am-HUNGRY"),
        "conversion did not correctly replace alpha characters"
    );
}

#[test]
fn normalise_other_digits() {
    let phone_util = get_phone_util();
    // Fullwidth and Arabic-Indic digits.
    assert_eq!("255", phone_util.normalize("\u{FF12}5\u{0665}"));
    assert_eq!("520", phone_util.normalize("5\u{06F2}0"));
}

#[test]
fn normalize_is_idempotent() {
    let phone_util = get_phone_util();
    for input in ["650 253 0000", "1800-SIX-FLAG", "＋６４３３３１６００５", "03456234"] {
        let once = phone_util.normalize(input);
        assert_eq!(once, phone_util.normalize(&once));
    }
}

#[test]
fn normalise_strip_alpha_characters() {
    let phone_util = get_phone_util();
    assert_eq!(
        "03456234",
        phone_util.normalize_digits_only("034-56&+a#234"),
        "conversion did not correctly remove alpha characters"
    );
}

#[test]
fn convert_alpha_characters_in_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        "1800-222-333",
        phone_util.convert_alpha_characters_in_number("1800-ABC-DEF")
    );
}

#[test]
fn extract_possible_number() {
    let phone_util = get_phone_util();
    // Leading noise is removed.
    assert_eq!("0800-345-600", phone_util.extract_possible_number("Tel:0800-345-600"));
    assert_eq!("0800 FOR PIZZA", phone_util.extract_possible_number("Tel:0800 FOR PIZZA"));
    // A leading plus is a valid start character.
    assert_eq!("+800-345-600", phone_util.extract_possible_number("Tel:+800-345-600"));
    // Trailing non-alphanumeric characters are removed.
    assert_eq!("0800-345-600", phone_util.extract_possible_number("0800-345-600."));
    // A second number glued on with "/x" is cut off.
    assert_eq!(
        "(530) 583-6985 x302",
        phone_util.extract_possible_number("(530) 583-6985 x302/x2303")
    );
    // No possible start character at all.
    assert_eq!("", phone_util.extract_possible_number("N/A"));
}

#[test]
fn is_viable_phone_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_viable_phone_number("13"));
    assert!(phone_util.is_viable_phone_number("+1 (650) 253-0000"));
    assert!(phone_util.is_viable_phone_number("0800-345-600"));
    assert!(phone_util.is_viable_phone_number("\u{FF10}\u{FF18}\u{FF10}\u{FF10} 345 600"));
    assert!(!phone_util.is_viable_phone_number("1"));
    assert!(!phone_util.is_viable_phone_number("abcd"));
    assert!(!phone_util.is_viable_phone_number("+1+234"));
}

#[test]
fn maybe_strip_extension() {
    let phone_util = get_phone_util();
    let (number, extension) = phone_util.maybe_strip_extension("1234576 ext. 1234");
    assert_eq!("1234576", number);
    assert_eq!(Some("1234".to_owned()), extension);

    let (number, extension) = phone_util.maybe_strip_extension("1234-576");
    assert_eq!("1234-576", number);
    assert_eq!(None, extension);

    let (number, extension) = phone_util.maybe_strip_extension("1234576-123#");
    assert_eq!("1234576", number);
    assert_eq!(Some("123".to_owned()), extension);

    let (number, extension) = phone_util.maybe_strip_extension("1234576 x 123");
    assert_eq!("1234576", number);
    assert_eq!(Some("123".to_owned()), extension);
}

#[test]
fn maybe_strip_international_prefix() {
    let phone_util = get_phone_util();

    let (number, source) =
        phone_util.maybe_strip_international_prefix_and_normalize("011 44 2087654321", "011");
    assert_eq!("442087654321", number);
    assert_eq!(CountryCodeSource::FromNumberWithIdd, source);

    let (number, source) =
        phone_util.maybe_strip_international_prefix_and_normalize("+44 2087654321", "011");
    assert_eq!("442087654321", number);
    assert_eq!(CountryCodeSource::FromNumberWithPlusSign, source);

    let (number, source) =
        phone_util.maybe_strip_international_prefix_and_normalize("44 2087654321", "011");
    assert_eq!("442087654321", number);
    assert_eq!(CountryCodeSource::FromDefaultCountry, source);

    // "00 0" is a false positive: numbers never start with a zero, so the
    // candidate IDD match is rejected.
    let (number, source) =
        phone_util.maybe_strip_international_prefix_and_normalize("000123456", "00");
    assert_eq!("000123456", number);
    assert_eq!(CountryCodeSource::FromDefaultCountry, source);

    let (number, source) =
        phone_util.maybe_strip_international_prefix_and_normalize("0012345678", "00");
    assert_eq!("12345678", number);
    assert_eq!(CountryCodeSource::FromNumberWithIdd, source);
}

#[test]
fn maybe_strip_national_prefix_and_carrier_code() {
    let phone_util = get_phone_util();

    // Plain national prefix.
    let gb_metadata = phone_util.get_metadata_for_region(RegionCode::gb()).unwrap();
    let stripped = phone_util
        .maybe_strip_national_prefix_and_carrier_code("02087654321", gb_metadata)
        .expect("the national prefix should be stripped");
    assert_eq!("2087654321", stripped.number);
    assert_eq!(None, stripped.carrier_code);

    // A prefix whose removal would invalidate the number is kept.
    let us_metadata = phone_util.get_metadata_for_region(RegionCode::us()).unwrap();
    assert!(phone_util
        .maybe_strip_national_prefix_and_carrier_code("1502530000", us_metadata)
        .is_none());

    // Transform rule: the Argentinian mobile prefix is rewritten to the
    // mobile token form.
    let ar_metadata = phone_util.get_metadata_for_region(RegionCode::ar()).unwrap();
    let stripped = phone_util
        .maybe_strip_national_prefix_and_carrier_code("0111523456789", ar_metadata)
        .expect("the prefix should be transformed");
    assert_eq!("91123456789", stripped.number);
    assert_eq!(None, stripped.carrier_code);

    // Carrier code capture.
    let co_metadata = phone_util.get_metadata_for_region(RegionCode::co()).unwrap();
    let stripped = phone_util
        .maybe_strip_national_prefix_and_carrier_code("0912345678", co_metadata)
        .expect("the prefix and carrier code should be stripped");
    assert_eq!("12345678", stripped.number);
    assert_eq!(Some("9".to_owned()), stripped.carrier_code);

    let br_metadata = phone_util.get_metadata_for_region(RegionCode::br()).unwrap();
    let stripped = phone_util
        .maybe_strip_national_prefix_and_carrier_code("0311123456789", br_metadata)
        .expect("the prefix and carrier code should be stripped");
    assert_eq!("1123456789", stripped.number);
    assert_eq!(Some("31".to_owned()), stripped.carrier_code);

    // No national prefix for parsing at all.
    let it_metadata = phone_util.get_metadata_for_region(RegionCode::it()).unwrap();
    assert!(phone_util
        .maybe_strip_national_prefix_and_carrier_code("0236618300", it_metadata)
        .is_none());
}

#[test]
fn parse_national_number() {
    let phone_util = get_phone_util();
    let nz_number = nz_number();

    // National prefix attached.
    let test_number = phone_util.parse("033316005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);
    assert!(!test_number.has_country_code_source());

    // National prefix missing.
    let test_number = phone_util.parse("33316005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);

    // National prefix attached and some formatting present.
    let test_number = phone_util.parse("03-331 6005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);

    let test_number = phone_util.parse("03 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);

    // International format.
    let test_number = phone_util.parse("+64 3 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);

    // A different default region does not matter for international input.
    let test_number = phone_util.parse("+64 3 331 6005", RegionCode::us()).unwrap();
    assert_eq!(nz_number, test_number);

    // Region codes are case-insensitive.
    let test_number = phone_util.parse("033316005", "nz").unwrap();
    assert_eq!(nz_number, test_number);
}

#[test]
fn parse_us_number() {
    let phone_util = get_phone_util();
    let expected = us_number();

    let test_number = phone_util.parse("650 253 0000", RegionCode::us()).unwrap();
    assert_eq!(expected, test_number);
    assert_eq!(
        "(650) 253-0000",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+16502530000",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );

    // With the country calling code written without a plus sign.
    let test_number = phone_util.parse("1 650 253 0000", RegionCode::us()).unwrap();
    assert_eq!(expected, test_number);

    // Vanity number: the letters are converted before parsing.
    let test_number = phone_util.parse("1800 FLOWERS", RegionCode::us()).unwrap();
    assert_eq!(8003569377, test_number.national_number());
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&test_number));
}

#[test]
fn parse_number_with_international_prefix() {
    let phone_util = get_phone_util();
    let test_number = phone_util.parse("011 64 3 331 6005", RegionCode::us()).unwrap();
    assert_eq!(nz_number(), test_number);
}

#[test]
fn parse_fullwidth_and_arabic_indic_numbers() {
    let phone_util = get_phone_util();
    // Fullwidth plus sign and digits.
    let test_number = phone_util
        .parse("\u{FF0B}\u{FF16}\u{FF14}\u{FF13}\u{FF13}\u{FF13}\u{FF11}\u{FF16}\u{FF10}\u{FF10}\u{FF15}", RegionCode::zz())
        .unwrap();
    assert_eq!(nz_number(), test_number);

    // Arabic-Indic digits in national format.
    let test_number = phone_util
        .parse("\u{0660}\u{0663}\u{0663}\u{0663}\u{0661}\u{0666}\u{0660}\u{0660}\u{0665}", RegionCode::nz())
        .unwrap();
    assert_eq!(nz_number(), test_number);
}

#[test]
fn parse_rfc3966_numbers() {
    let phone_util = get_phone_util();

    let test_number = phone_util
        .parse("tel:03-331-6005;phone-context=+64", RegionCode::zz())
        .unwrap();
    assert_eq!(nz_number(), test_number);

    // An isdn-subaddress is dropped.
    let test_number = phone_util
        .parse("tel:+64-3-331-6005;isub=12345", RegionCode::nz())
        .unwrap();
    assert_eq!(nz_number(), test_number);

    let test_number = phone_util
        .parse("tel:+1-650-253-0000;ext=123", RegionCode::zz())
        .unwrap();
    assert_eq!(6502530000, test_number.national_number());
    assert_eq!("123", test_number.extension());
}

#[test]
fn parse_extensions() {
    let phone_util = get_phone_util();
    let mut nz_with_extension = nz_number();
    nz_with_extension.set_extension("3456".to_owned());

    let test_number = phone_util
        .parse("03 331 6005 ext 3456", RegionCode::nz())
        .unwrap();
    assert_eq!(nz_with_extension, test_number);

    let test_number = phone_util
        .parse("03 331 6005 #3456", RegionCode::nz())
        .unwrap();
    assert_eq!(nz_with_extension, test_number);

    let test_number = phone_util
        .parse("03 331 6005 extension 3456", RegionCode::nz())
        .unwrap();
    assert_eq!(nz_with_extension, test_number);

    // RFC3966 output carries the extension as ";ext=".
    let test_number = phone_util
        .parse("+1 650-253-0000 ext. 123", RegionCode::zz())
        .unwrap();
    assert_eq!("123", test_number.extension());
    assert!(phone_util
        .format(&test_number, PhoneNumberFormat::RFC3966)
        .ends_with(";ext=123"));

    // Only the first number of "x302/x2303" survives, with its extension.
    let test_number = phone_util
        .parse("(530) 583-6985 x302/x2303", RegionCode::us())
        .unwrap();
    assert_eq!(5305836985, test_number.national_number());
    assert_eq!("302", test_number.extension());
}

#[test]
fn parse_italian_leading_zero() {
    let phone_util = get_phone_util();
    let test_number = phone_util.parse("02 3661 8300", RegionCode::it()).unwrap();
    assert_eq!(it_number(), test_number);
    assert!(test_number.italian_leading_zero());
    assert_eq!(
        "+390236618300",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );
}

#[test]
fn parse_argentinian_mobile_number() {
    let phone_util = get_phone_util();
    let test_number = phone_util.parse("011 15 2345 6789", RegionCode::ar()).unwrap();
    assert_eq!(54, test_number.country_code());
    assert_eq!(91123456789, test_number.national_number());
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&test_number));
    assert_eq!(
        "011 15-2345-6789",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+54 9 11 2345-6789",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );
}

#[test]
fn parse_mexican_numbers_with_transform_rule() {
    let phone_util = get_phone_util();

    // "045" mobile dialing becomes the "1"-prefixed mobile form.
    let test_number = phone_util.parse("045 55 1234 5678", RegionCode::mx()).unwrap();
    assert_eq!(15512345678, test_number.national_number());
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&test_number));

    // "01" long-distance dialing is simply stripped.
    let test_number = phone_util.parse("01 55 1234 5678", RegionCode::mx()).unwrap();
    assert_eq!(5512345678, test_number.national_number());
    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&test_number));
}

#[test]
fn parse_and_keep_raw_input() {
    let phone_util = get_phone_util();

    let test_number = phone_util
        .parse_and_keep_raw_input("+442087654321", RegionCode::gb())
        .unwrap();
    assert_eq!("+442087654321", test_number.raw_input());
    assert_eq!(
        CountryCodeSource::FromNumberWithPlusSign,
        test_number.country_code_source()
    );

    let test_number = phone_util
        .parse_and_keep_raw_input("02087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromDefaultCountry,
        test_number.country_code_source()
    );
    assert_eq!(2087654321, test_number.national_number());

    let test_number = phone_util
        .parse_and_keep_raw_input("011442087654321", RegionCode::us())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromNumberWithIdd,
        test_number.country_code_source()
    );
    assert_eq!(44, test_number.country_code());

    let test_number = phone_util
        .parse_and_keep_raw_input("442087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromNumberWithoutPlusSign,
        test_number.country_code_source()
    );

    // Carrier code capture for Brazilian dialing.
    let test_number = phone_util
        .parse_and_keep_raw_input("0 31 11 2345 6789", RegionCode::br())
        .unwrap();
    assert_eq!(1123456789, test_number.national_number());
    assert_eq!("31", test_number.preferred_domestic_carrier_code());

    // Without raw-input retention no carrier code is recorded.
    let test_number = phone_util.parse("0 31 11 2345 6789", RegionCode::br()).unwrap();
    assert!(!test_number.has_preferred_domestic_carrier_code());

    // Invalid region and no leading plus cannot be parsed.
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse_and_keep_raw_input("650 253 0000", RegionCode::zz())
    );
}

#[test]
fn failed_parse_on_invalid_numbers() {
    let phone_util = get_phone_util();

    assert_eq!(
        Err(ParseError::NotANumber),
        phone_util.parse("This is not a phone number", RegionCode::nz())
    );
    assert_eq!(
        Err(ParseError::NotANumber),
        phone_util.parse("", RegionCode::nz())
    );
    assert_eq!(
        Err(ParseError::TooLong),
        phone_util.parse("01495 72553301873 810104", RegionCode::gb())
    );
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("123 456 7890", RegionCode::zz())
    );
    // No default region and no leading plus sign.
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("123", RegionCode::zz())
    );
    assert_eq!(
        Err(ParseError::TooShortAfterIdd),
        phone_util.parse("011", RegionCode::us())
    );
    assert_eq!(
        Err(ParseError::NotANumber),
        phone_util.parse("+---", RegionCode::de())
    );
}

#[test]
fn failed_parse_on_length_boundaries() {
    let phone_util = get_phone_util();

    // A national significant number of exactly two digits is too short.
    assert_eq!(
        Err(ParseError::TooShortNsn),
        phone_util.parse("12", RegionCode::nz())
    );
    // Seventeen digits are one more than a number can carry.
    assert_eq!(
        Err(ParseError::TooLong),
        phone_util.parse("12345678901234567", RegionCode::nz())
    );
    // Sixteen digits parse fine.
    let test_number = phone_util
        .parse("1234567890123456", RegionCode::nz())
        .unwrap();
    assert_eq!(1234567890123456, test_number.national_number());
}

#[test]
fn parsed_numbers_satisfy_length_invariant() {
    let phone_util = get_phone_util();
    for (input, region) in [
        ("650 253 0000", RegionCode::us()),
        ("03 331 6005", RegionCode::nz()),
        ("02 3661 8300", RegionCode::it()),
        ("011 15 2345 6789", RegionCode::ar()),
        ("+80012345678", RegionCode::zz()),
    ] {
        let number = phone_util.parse(input, region).unwrap();
        let nsn = PhoneNumberUtil::get_national_significant_number(&number);
        assert!(nsn.len() > 2, "NSN '{nsn}' too short for '{input}'");
        assert!(nsn.len() <= 16, "NSN '{nsn}' too long for '{input}'");
    }
}

#[test]
fn format_us_number() {
    let phone_util = get_phone_util();
    let test_number = us_number();
    assert_eq!(
        "(650) 253-0000",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+16502530000",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );
    assert_eq!(
        "tel:+1-650-253-0000",
        phone_util.format(&test_number, PhoneNumberFormat::RFC3966)
    );

    let mut premium = PhoneNumber::new();
    premium.set_country_code(1);
    premium.set_national_number(9002530000);
    assert_eq!(
        "(900) 253-0000",
        phone_util.format(&premium, PhoneNumberFormat::National)
    );

    // A seven-digit subscriber number picks the short format.
    let mut local = PhoneNumber::new();
    local.set_country_code(1);
    local.set_national_number(2530000);
    assert_eq!(
        "253-0000",
        phone_util.format(&local, PhoneNumberFormat::National)
    );
}

#[test]
fn format_gb_number() {
    let phone_util = get_phone_util();
    let test_number = gb_number();
    assert_eq!(
        "(020) 8738 9353",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+44 20 8738 9353",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );

    let mut mobile = PhoneNumber::new();
    mobile.set_country_code(44);
    mobile.set_national_number(7912345678);
    assert_eq!(
        "(07912) 345 678",
        phone_util.format(&mobile, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+44 7912 345 678",
        phone_util.format(&mobile, PhoneNumberFormat::International)
    );
}

#[test]
fn format_de_number() {
    let phone_util = get_phone_util();
    let mut test_number = PhoneNumber::new();
    test_number.set_country_code(49);
    test_number.set_national_number(30123456);
    assert_eq!(
        "030 123456",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+49 30 123456",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_it_number() {
    let phone_util = get_phone_util();
    let test_number = it_number();
    assert_eq!(
        "02 3661 8300",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+39 02 3661 8300",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+390236618300",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );

    let mut mobile = PhoneNumber::new();
    mobile.set_country_code(39);
    mobile.set_national_number(312345678);
    assert_eq!(
        "312 345 678",
        phone_util.format(&mobile, PhoneNumberFormat::National)
    );
}

#[test]
fn format_non_geographical_number() {
    let phone_util = get_phone_util();
    let test_number = phone_util.parse("+80012345678", RegionCode::zz()).unwrap();
    assert_eq!(800, test_number.country_code());
    assert_eq!(
        "+800 1234 5678",
        phone_util.format(&test_number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+80012345678",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );
}

#[test]
fn format_with_extension() {
    let phone_util = get_phone_util();
    let mut test_number = us_number();
    test_number.set_extension("4567".to_owned());
    assert_eq!(
        "(650) 253-0000 ext. 4567",
        phone_util.format(&test_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "tel:+1-650-253-0000;ext=4567",
        phone_util.format(&test_number, PhoneNumberFormat::RFC3966)
    );
    // Extensions are dropped from E164.
    assert_eq!(
        "+16502530000",
        phone_util.format(&test_number, PhoneNumberFormat::E164)
    );

    // A region with its own preferred extension prefix.
    let mut pe_number = PhoneNumber::new();
    pe_number.set_country_code(51);
    pe_number.set_national_number(11234567);
    pe_number.set_extension("51".to_owned());
    assert_eq!(
        "(01) 1234567 Anexo 51",
        phone_util.format(&pe_number, PhoneNumberFormat::National)
    );
}

#[test]
fn format_by_pattern() {
    let phone_util = get_phone_util();
    let test_number = us_number();

    let user_format = NumberFormat {
        pattern: "(\\d{3})(\\d{3})(\\d{4})".to_owned(),
        format: "($1) $2-$3".to_owned(),
        ..Default::default()
    };
    assert_eq!(
        "(650) 253-0000",
        phone_util.format_by_pattern(
            &test_number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&user_format)
        )
    );
    assert_eq!(
        "+1 (650) 253-0000",
        phone_util.format_by_pattern(
            &test_number,
            PhoneNumberFormat::International,
            std::slice::from_ref(&user_format)
        )
    );

    // $NP is replaced by the national prefix and $FG by the first group.
    let mut with_national_prefix = user_format.clone();
    with_national_prefix.set_format("$1 $2 $3".to_owned());
    with_national_prefix.set_national_prefix_formatting_rule("($NP$FG)".to_owned());
    assert_eq!(
        "(1650) 253 0000",
        phone_util.format_by_pattern(
            &test_number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&with_national_prefix)
        )
    );
}

#[test]
fn format_with_carrier_code() {
    let phone_util = get_phone_util();
    // An Argentinian fixed-line number.
    let mut ar_number = PhoneNumber::new();
    ar_number.set_country_code(54);
    ar_number.set_national_number(1123456789);
    assert_eq!(
        "011 2345-6789",
        phone_util.format(&ar_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "011 14 2345-6789",
        phone_util.format_national_number_with_carrier_code(&ar_number, "14")
    );
    // An empty carrier code falls back to plain national format.
    assert_eq!(
        "011 2345-6789",
        phone_util.format_national_number_with_carrier_code(&ar_number, "")
    );
    // Carrier codes only make sense in national format.
    assert_eq!(
        "+54 11 2345-6789",
        phone_util.format(&ar_number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_with_preferred_carrier_code() {
    let phone_util = get_phone_util();
    let br_number = phone_util
        .parse_and_keep_raw_input("0 31 11 2345 6789", RegionCode::br())
        .unwrap();
    assert_eq!("31", br_number.preferred_domestic_carrier_code());
    // The stored carrier code wins over the fallback.
    assert_eq!(
        "0 31 (11) 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&br_number, "14")
    );
    // Without a stored carrier code the fallback is used.
    let plain_number = phone_util.parse("11 2345-6789", RegionCode::br()).unwrap();
    assert_eq!(
        "0 14 (11) 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&plain_number, "14")
    );
    assert_eq!(
        "(11) 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&plain_number, "")
    );
}

#[test]
fn format_out_of_country_calling_number() {
    let phone_util = get_phone_util();
    let us = us_number();

    // A unique numeric IDD is used directly.
    assert_eq!(
        "00 1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::de())
    );
    // Calls within NANPA keep the national format, prefixed with the
    // calling code.
    assert_eq!(
        "1 (650) 253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::bs())
    );
    assert_eq!(
        "1 (650) 253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::us())
    );
    // Several IDDs with a preferred one: the preference is used.
    assert_eq!(
        "0011 1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::au())
    );
    // Several IDDs and no preference: fall back to the international
    // format.
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::sg())
    );
    // Unknown calling region: international format.
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us, RegionCode::aq())
    );
    // Same calling code means national dialing.
    let de_number = phone_util.parse("030 123456", RegionCode::de()).unwrap();
    assert_eq!(
        "030 123456",
        phone_util.format_out_of_country_calling_number(&de_number, RegionCode::de())
    );
    // NZ dialing an Italian number.
    assert_eq!(
        "00 39 02 3661 8300",
        phone_util.format_out_of_country_calling_number(&it_number(), RegionCode::nz())
    );
}

#[test]
fn format_in_original_format() {
    let phone_util = get_phone_util();

    let number = phone_util
        .parse_and_keep_raw_input("+442087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "+44 20 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    let number = phone_util
        .parse_and_keep_raw_input("02087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "(020) 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    // Entered without the national prefix: the prefix is not added back.
    let number = phone_util
        .parse_and_keep_raw_input("2087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "20 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    let number = phone_util
        .parse_and_keep_raw_input("011442087654321", RegionCode::us())
        .unwrap();
    assert_eq!(
        "011 44 20 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::us())
    );

    let number = phone_util
        .parse_and_keep_raw_input("442087654321", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "44 20 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    // A number parsed without raw input falls back to national format.
    let number = phone_util.parse("+442087654321", RegionCode::gb()).unwrap();
    assert_eq!(
        "(020) 8765 4321",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );
}

#[test]
fn format_out_of_country_keeping_alpha_chars() {
    let phone_util = get_phone_util();
    let alpha_number = phone_util
        .parse_and_keep_raw_input("1800 SIX-FLAG", RegionCode::us())
        .unwrap();
    assert_eq!(8007493524, alpha_number.national_number());
    assert_eq!(
        "0011 1 800 SIX-FLAG",
        phone_util.format_out_of_country_keeping_alpha_chars(&alpha_number, RegionCode::au())
    );
    assert_eq!(
        "1 800 SIX-FLAG",
        phone_util.format_out_of_country_keeping_alpha_chars(&alpha_number, RegionCode::us())
    );
    // Without raw input this behaves like the plain out-of-country
    // formatting.
    let digit_number = phone_util.parse("800 749 3524", RegionCode::us()).unwrap();
    assert_eq!(
        "00 1 800-749-3524",
        phone_util.format_out_of_country_keeping_alpha_chars(&digit_number, RegionCode::de())
    );
}

#[test]
fn format_number_for_mobile_dialing() {
    let phone_util = get_phone_util();

    // Colombian fixed-line numbers get the mobile-to-fixed-line carrier
    // prefix when dialed from a mobile within Colombia.
    let co_fixed = phone_util.parse("12345678", RegionCode::co()).unwrap();
    assert_eq!(
        "03 1 2345678",
        phone_util.format_number_for_mobile_dialing(&co_fixed, RegionCode::co(), true)
    );
    assert_eq!(
        "0312345678",
        phone_util.format_number_for_mobile_dialing(&co_fixed, RegionCode::co(), false)
    );
    let co_mobile = phone_util.parse("321 1234567", RegionCode::co()).unwrap();
    assert_eq!(
        "321 1234567",
        phone_util.format_number_for_mobile_dialing(&co_mobile, RegionCode::co(), true)
    );

    // Peruvian numbers must be dialed in national format within Peru.
    let pe_fixed = phone_util.parse("(01) 1234567", RegionCode::pe()).unwrap();
    assert_eq!(
        "(01) 1234567",
        phone_util.format_number_for_mobile_dialing(&pe_fixed, RegionCode::pe(), true)
    );

    // Brazilian fixed/mobile numbers cannot be dialed without a carrier
    // code.
    let br_fixed = phone_util.parse("11 2345-6789", RegionCode::br()).unwrap();
    assert_eq!(
        "",
        phone_util.format_number_for_mobile_dialing(&br_fixed, RegionCode::br(), true)
    );
    let br_with_carrier = phone_util
        .parse_and_keep_raw_input("0 31 11 2345 6789", RegionCode::br())
        .unwrap();
    assert_eq!(
        "0 31 (11) 2345-6789",
        phone_util.format_number_for_mobile_dialing(&br_with_carrier, RegionCode::br(), true)
    );

    // An internationally diallable number.
    let us = us_number();
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format_number_for_mobile_dialing(&us, RegionCode::us(), true)
    );
    assert_eq!(
        "+16502530000",
        phone_util.format_number_for_mobile_dialing(&us, RegionCode::us(), false)
    );

    // US toll-free numbers cannot be dialed from abroad.
    let mut us_toll_free = PhoneNumber::new();
    us_toll_free.set_country_code(1);
    us_toll_free.set_national_number(8002530000);
    assert_eq!(
        "(800) 253-0000",
        phone_util.format_number_for_mobile_dialing(&us_toll_free, RegionCode::us(), true)
    );
    assert_eq!(
        "",
        phone_util.format_number_for_mobile_dialing(&us_toll_free, RegionCode::de(), true)
    );
}

#[test]
fn get_number_type() {
    let phone_util = get_phone_util();

    // US numbers cannot be distinguished between fixed line and mobile.
    assert_eq!(
        PhoneNumberType::FixedLineOrMobile,
        phone_util.get_number_type(&us_number())
    );

    let mut number = PhoneNumber::new();
    number.set_country_code(1);
    number.set_national_number(8002530000);
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&number));

    number.set_national_number(9002530000);
    assert_eq!(PhoneNumberType::PremiumRate, phone_util.get_number_type(&number));

    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&gb_number()));
    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&it_number()));

    let mut gb = PhoneNumber::new();
    gb.set_country_code(44);
    gb.set_national_number(7912345678);
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&gb));
    gb.set_national_number(7012345678);
    assert_eq!(PhoneNumberType::PersonalNumber, phone_util.get_number_type(&gb));
    gb.set_national_number(7612345678);
    assert_eq!(PhoneNumberType::Pager, phone_util.get_number_type(&gb));
    gb.set_national_number(5612345678);
    assert_eq!(PhoneNumberType::VoIP, phone_util.get_number_type(&gb));
    gb.set_national_number(5512345678);
    assert_eq!(PhoneNumberType::UAN, phone_util.get_number_type(&gb));
    gb.set_national_number(8431234567);
    assert_eq!(PhoneNumberType::SharedCost, phone_util.get_number_type(&gb));

    // Non-geographical premium rate.
    let mut premium = PhoneNumber::new();
    premium.set_country_code(979);
    premium.set_national_number(123456789);
    assert_eq!(PhoneNumberType::PremiumRate, phone_util.get_number_type(&premium));

    // A too-short US number matches nothing.
    let mut short = PhoneNumber::new();
    short.set_country_code(1);
    short.set_national_number(2530000);
    assert_eq!(PhoneNumberType::Unknown, phone_util.get_number_type(&short));
}

#[test]
fn is_valid_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_valid_number(&us_number()));
    assert!(phone_util.is_valid_number(&it_number()));
    assert!(phone_util.is_valid_number(&gb_number()));

    let non_geo = phone_util.parse("+80012345678", RegionCode::zz()).unwrap();
    assert!(phone_util.is_valid_number(&non_geo));
}

#[test]
fn is_not_valid_number() {
    let phone_util = get_phone_util();

    let mut us = PhoneNumber::new();
    us.set_country_code(1);
    us.set_national_number(2530000);
    assert!(!phone_util.is_valid_number(&us));

    let mut unknown_cc = PhoneNumber::new();
    unknown_cc.set_country_code(3923);
    unknown_cc.set_national_number(2366);
    assert!(!phone_util.is_valid_number(&unknown_cc));
}

#[test]
fn is_valid_number_for_region() {
    let phone_util = get_phone_util();

    let bs_number = phone_util.parse("242 365 1234", RegionCode::bs()).unwrap();
    assert!(phone_util.is_valid_number(&bs_number));
    assert!(phone_util.is_valid_number_for_region(&bs_number, RegionCode::bs()));
    // A valid NANPA number is not automatically valid for every NANPA
    // region.
    assert!(!phone_util.is_valid_number_for_region(&bs_number, RegionCode::us()));

    // La Réunion and Mayotte share a calling code but are told apart by
    // leading digits.
    let re_number = phone_util.parse("0262 16 12 34", RegionCode::re()).unwrap();
    assert!(phone_util.is_valid_number_for_region(&re_number, RegionCode::re()));
    assert!(!phone_util.is_valid_number_for_region(&re_number, RegionCode::yt()));

    let yt_number = phone_util.parse("0269 60 12 34", RegionCode::yt()).unwrap();
    assert!(phone_util.is_valid_number_for_region(&yt_number, RegionCode::yt()));
    assert!(!phone_util.is_valid_number_for_region(&yt_number, RegionCode::re()));
}

#[test]
fn get_region_code_for_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        Some(RegionCode::us()),
        phone_util.get_region_code_for_number(&us_number())
    );
    let bs_number = phone_util.parse("+12423651234", RegionCode::zz()).unwrap();
    assert_eq!(
        Some(RegionCode::bs()),
        phone_util.get_region_code_for_number(&bs_number)
    );
    let re_number = phone_util.parse("+262262161234", RegionCode::zz()).unwrap();
    assert_eq!(
        Some(RegionCode::re()),
        phone_util.get_region_code_for_number(&re_number)
    );
    let yt_number = phone_util.parse("+262639123456", RegionCode::zz()).unwrap();
    assert_eq!(
        Some(RegionCode::yt()),
        phone_util.get_region_code_for_number(&yt_number)
    );
    let non_geo = phone_util.parse("+80012345678", RegionCode::zz()).unwrap();
    assert_eq!(
        Some(RegionCode::un001()),
        phone_util.get_region_code_for_number(&non_geo)
    );
}

#[test]
fn get_country_code_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::us()));
    assert_eq!(64, phone_util.get_country_code_for_region(RegionCode::nz()));
    assert_eq!(64, phone_util.get_country_code_for_region("nz"));
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::zz()));
    // The non-geographical marker is not a region.
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::un001()));
}

#[test]
fn get_ndd_prefix_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(
        Some("1".to_owned()),
        phone_util.get_ndd_prefix_for_region(RegionCode::us(), false)
    );
    assert_eq!(
        Some("0".to_owned()),
        phone_util.get_ndd_prefix_for_region(RegionCode::nz(), false)
    );
    // Andorra has no national prefix.
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::ad(), false));
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::zz(), false));
}

#[test]
fn is_nanpa_country() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_nanpa_country(RegionCode::us()));
    assert!(phone_util.is_nanpa_country(RegionCode::bs()));
    assert!(!phone_util.is_nanpa_country(RegionCode::de()));
    assert!(!phone_util.is_nanpa_country(RegionCode::zz()));
}

#[test]
fn is_possible_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_possible_number(&us_number()));

    assert!(phone_util.is_possible_number_string("+1 650 253 0000", RegionCode::us()));
    assert!(phone_util.is_possible_number_string("253-0000", RegionCode::us()));
    assert!(!phone_util.is_possible_number_string("not a number", RegionCode::us()));
}

#[test]
fn is_possible_number_with_reason() {
    let phone_util = get_phone_util();

    let mut number = us_number();
    assert_eq!(
        ValidationResult::IsPossible,
        phone_util.is_possible_number_with_reason(&number)
    );

    number.set_national_number(65025300000);
    assert_eq!(
        ValidationResult::TooLong,
        phone_util.is_possible_number_with_reason(&number)
    );

    number.set_national_number(253000);
    assert_eq!(
        ValidationResult::TooShort,
        phone_util.is_possible_number_with_reason(&number)
    );

    number.set_country_code(0);
    assert_eq!(
        ValidationResult::InvalidCountryCode,
        phone_util.is_possible_number_with_reason(&number)
    );

    let mut non_geo = PhoneNumber::new();
    non_geo.set_country_code(800);
    non_geo.set_national_number(123456789);
    assert_eq!(
        ValidationResult::TooLong,
        phone_util.is_possible_number_with_reason(&non_geo)
    );
}

#[test]
fn truncate_too_long_number() {
    let phone_util = get_phone_util();

    // An over-long US number is rescued by dropping trailing digits.
    let mut number = PhoneNumber::new();
    number.set_country_code(1);
    number.set_national_number(65025300001);
    assert!(phone_util.truncate_too_long_number(&mut number));
    assert_eq!(6502530000, number.national_number());

    // An already valid number is left alone.
    let mut valid = us_number();
    assert!(phone_util.truncate_too_long_number(&mut valid));
    assert_eq!(us_number(), valid);

    // A number that only gets too short is not modified.
    let mut unfixable = PhoneNumber::new();
    unfixable.set_country_code(1);
    unfixable.set_national_number(2530000);
    assert!(!phone_util.truncate_too_long_number(&mut unfixable));
    assert_eq!(2530000, unfixable.national_number());
}

#[test]
fn get_length_of_geographical_area_code() {
    let phone_util = get_phone_util();

    assert_eq!(3, phone_util.get_length_of_geographical_area_code(&us_number()));

    // Toll-free numbers have no area code.
    let mut toll_free = PhoneNumber::new();
    toll_free.set_country_code(1);
    toll_free.set_national_number(8002530000);
    assert_eq!(0, phone_util.get_length_of_geographical_area_code(&toll_free));

    assert_eq!(2, phone_util.get_length_of_geographical_area_code(&gb_number()));

    // Italy keeps its leading zero, which marks an open plan.
    assert_eq!(2, phone_util.get_length_of_geographical_area_code(&it_number()));

    // Singapore has a closed dialing plan: no area codes.
    let sg_number = phone_util.parse("6123 4567", RegionCode::sg()).unwrap();
    assert_eq!(0, phone_util.get_length_of_geographical_area_code(&sg_number));

    // An invalid US number.
    let mut short = PhoneNumber::new();
    short.set_country_code(1);
    short.set_national_number(2530000);
    assert_eq!(0, phone_util.get_length_of_geographical_area_code(&short));
}

#[test]
fn get_length_of_national_destination_code() {
    let phone_util = get_phone_util();

    assert_eq!(3, phone_util.get_length_of_national_destination_code(&us_number()));

    let nz = nz_number();
    assert_eq!(1, phone_util.get_length_of_national_destination_code(&nz));

    assert_eq!(2, phone_util.get_length_of_national_destination_code(&it_number()));

    // An Argentinian mobile number counts the mobile token into the NDC.
    let ar_mobile = phone_util.parse("+5491123456789", RegionCode::zz()).unwrap();
    assert_eq!(3, phone_util.get_length_of_national_destination_code(&ar_mobile));

    // An extension must not change the result.
    let mut with_extension = us_number();
    with_extension.set_extension("321".to_owned());
    assert_eq!(
        3,
        phone_util.get_length_of_national_destination_code(&with_extension)
    );
    assert_eq!("321", with_extension.extension());
}

#[test]
fn get_example_number() {
    let phone_util = get_phone_util();

    let mut de_number = PhoneNumber::new();
    de_number.set_country_code(49);
    de_number.set_national_number(30123456);
    assert_eq!(Some(de_number.clone()), phone_util.get_example_number(RegionCode::de()));
    assert_eq!(
        Some(de_number),
        phone_util.get_example_number_for_type(RegionCode::de(), PhoneNumberType::FixedLine)
    );

    let de_mobile = phone_util
        .get_example_number_for_type(RegionCode::de(), PhoneNumberType::Mobile)
        .expect("the dataset carries a German mobile example");
    assert_eq!(15123456789, de_mobile.national_number());

    // No voicemail example exists for the US.
    assert!(phone_util
        .get_example_number_for_type(RegionCode::us(), PhoneNumberType::VoiceMail)
        .is_none());

    // Unknown regions have no examples.
    assert!(phone_util.get_example_number(RegionCode::zz()).is_none());
    assert!(phone_util.get_example_number(RegionCode::un001()).is_none());
}

#[test]
fn get_example_number_for_non_geo_entity() {
    let phone_util = get_phone_util();
    let toll_free = phone_util
        .get_example_number_for_non_geo_entity(800)
        .expect("+800 should have an example number");
    assert_eq!(800, toll_free.country_code());
    assert_eq!(12345678, toll_free.national_number());

    let premium = phone_util
        .get_example_number_for_non_geo_entity(979)
        .expect("+979 should have an example number");
    assert_eq!(123456789, premium.national_number());

    assert!(phone_util.get_example_number_for_non_geo_entity(123).is_none());
}

#[test]
fn every_region_example_number_is_valid() {
    let phone_util = get_phone_util();
    for region_code in phone_util.get_supported_regions() {
        let example = phone_util
            .get_example_number(region_code)
            .unwrap_or_else(|| panic!("no example number for {region_code}"));
        assert!(
            phone_util.is_valid_number(&example),
            "example number for {region_code} should be valid"
        );
        // Consistency between the classifier and the general descriptor.
        assert_ne!(
            PhoneNumberType::Unknown,
            phone_util.get_number_type(&example),
            "example number for {region_code} should have a type"
        );
    }
}

#[test]
fn can_be_internationally_dialled() {
    let phone_util = get_phone_util();

    // US toll-free numbers are marked as not diallable from abroad.
    let mut toll_free = PhoneNumber::new();
    toll_free.set_country_code(1);
    toll_free.set_national_number(8002530000);
    assert!(!phone_util.can_be_internationally_dialled(&toll_free));

    assert!(phone_util.can_be_internationally_dialled(&us_number()));
    assert!(phone_util.can_be_internationally_dialled(&nz_number()));

    // Non-geographical numbers always are.
    let mut non_geo = PhoneNumber::new();
    non_geo.set_country_code(800);
    non_geo.set_national_number(12345678);
    assert!(phone_util.can_be_internationally_dialled(&non_geo));
}

#[test]
fn is_alpha_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_alpha_number("1800 six-flags"));
    assert!(phone_util.is_alpha_number("1800 six-flags ext. 1234"));
    assert!(!phone_util.is_alpha_number("1800 123-1234"));
    assert!(!phone_util.is_alpha_number("1 six-flags"));
}

#[test]
fn is_number_match_matches() {
    let phone_util = get_phone_util();

    assert_eq!(
        MatchType::ExactMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+64 03 331 6005")
    );
    assert_eq!(
        MatchType::ExactMatch,
        phone_util.is_number_match_with_two_strings("+1 650-253-0000", "+16502530000")
    );
    assert_eq!(
        MatchType::ExactMatch,
        phone_util.is_number_match_with_two_strings(
            "+64 3 331 6005 ext 1234",
            "+6433316005;ext=1234"
        )
    );

    // The second operand carries no country code of its own, so this is
    // an NSN match once it is parsed with the first number's region.
    let nz = phone_util.parse("+64 3 331 6005", RegionCode::zz()).unwrap();
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match_with_one_string(&nz, "03 331 6005")
    );
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "03 331 6005")
    );
}

#[test]
fn is_number_match_short_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match_with_two_strings("+1 345 657 1234", "657 1234")
    );
    // One with an extension, one without.
    let mut with_extension = nz_number();
    with_extension.set_extension("3456".to_owned());
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match(&with_extension, &nz_number())
    );
}

#[test]
fn is_number_match_non_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        MatchType::NoMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+1 650-253-0000")
    );
    // Different extensions.
    assert_eq!(
        MatchType::NoMatch,
        phone_util.is_number_match_with_two_strings(
            "+64 3 331 6005 ext 1234",
            "+64 3 331 6005 ext 1235"
        )
    );
    assert_eq!(
        MatchType::NotANumber,
        phone_util.is_number_match_with_two_strings("abcd", "+64 3 331 6005")
    );
}

#[test]
fn is_number_match_nsn_matches_without_country_code() {
    let phone_util = get_phone_util();
    // Neither operand carries a country code.
    let first = phone_util
        .parse_helper("33316005", None, false, false)
        .unwrap();
    let second = phone_util
        .parse_helper("3 331-6005", None, false, false)
        .unwrap();
    assert_eq!(0, first.country_code());
    assert_eq!(MatchType::NsnMatch, phone_util.is_number_match(&first, &second));
}

#[test]
fn e164_round_trip() {
    let phone_util = get_phone_util();
    for e164 in [
        "+16502530000",
        "+442087389353",
        "+390236618300",
        "+5491123456789",
        "+6433316005",
        "+80012345678",
    ] {
        let parsed = phone_util
            .parse(e164, RegionCode::zz())
            .unwrap_or_else(|err| panic!("{e164} should parse: {err}"));
        assert_eq!(e164, phone_util.format(&parsed, PhoneNumberFormat::E164));
    }
}
