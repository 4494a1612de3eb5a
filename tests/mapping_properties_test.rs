use chrono::NaiveDate;
use golden_cdm::domain::cdm::{BusinessCenterEnum, BusinessDayConventionEnum};
use golden_cdm::{CdmError, CdmProcessor, EconomicTerms, GoldenSchemaParser, MappingErrorKind};
use serde_json::{json, Value};

fn effective_only(date: &str, convention: &str, center: &str) -> String {
    json!({
        "effectiveDate": date,
        "effectiveDateBusinessDayConvention": convention,
        "effectiveDateBusinessCenter": center
    })
    .to_string()
}

#[test]
fn test_every_convention_and_center_maps() {
    let processor = CdmProcessor::new();
    let dates = ["2024-01-01", "2024-02-29", "1999-12-31", "2100-06-15"];

    for (i, convention) in BusinessDayConventionEnum::ALL.iter().enumerate() {
        for center in BusinessCenterEnum::ALL {
            let date = dates[i % dates.len()];
            let terms = processor
                .process_from_text(&effective_only(date, convention.code(), center.code()))
                .unwrap()
                .unwrap();

            let effective = terms.effective_date.as_ref().unwrap();
            assert_eq!(effective.unadjusted_date().format("%Y-%m-%d").to_string(), date);
            assert_eq!(effective.convention(), *convention);
            assert_eq!(effective.business_centers().collect::<Vec<_>>(), vec![center]);
            assert!(terms.termination_date.is_none());
        }
    }
}

#[test]
fn test_serialized_terms_read_back() {
    let processor = CdmProcessor::new();
    let terms = processor
        .process_from_text(&effective_only("2026-10-19", "PRECEDING", "HKHK"))
        .unwrap()
        .unwrap();

    let rendered = processor.render(&terms);
    let value: Value = serde_json::from_str(&rendered).unwrap();
    let adjustable = &value["effectiveDate"]["adjustableDate"];
    assert_eq!(adjustable["unadjustedDate"], "2026-10-19");
    assert_eq!(adjustable["dateAdjustments"]["businessDayConvention"], "PRECEDING");
    assert_eq!(
        adjustable["dateAdjustments"]["businessCenters"]["businessCenter"][0]["value"],
        "HKHK"
    );
    assert!(value.get("terminationDate").is_none());

    let reread: EconomicTerms = serde_json::from_str(&rendered).unwrap();
    assert_eq!(reread, terms);
}

#[test]
fn test_no_dates_means_no_result() {
    let processor = CdmProcessor::new();
    for input in [
        r#"{}"#,
        r#"{"effectiveDate": "", "terminationDate": "   "}"#,
        r#"{"notional": 5000000, "currency": "USD"}"#,
    ] {
        assert!(processor.process_from_text(input).unwrap().is_none(), "{}", input);
    }
}

#[test]
fn test_invalid_values_are_mapping_failures() {
    let processor = CdmProcessor::new();

    let err = processor
        .process_from_text(&effective_only("2024-13-40", "FOLLOWING", "SGSI"))
        .unwrap_err();
    assert!(matches!(err, CdmError::MappingFailure(_)));
    assert_eq!(err.mapping_error().unwrap().kind(), MappingErrorKind::DateParseFailure);

    let err = processor
        .process_from_text(&effective_only("2024-01-15", "NOT_A_CONVENTION", "SGSI"))
        .unwrap_err();
    assert_eq!(err.mapping_error().unwrap().kind(), MappingErrorKind::UnknownEnumValue);
}

#[test]
fn test_blank_input_never_reaches_parser() {
    let processor = CdmProcessor::new();
    for input in ["", " ", "\r\n"] {
        assert!(matches!(
            processor.process_from_text(input).unwrap_err(),
            CdmError::InvalidInput { .. }
        ));
    }
}

#[test]
fn test_mapping_twice_gives_equal_terms() {
    let record = GoldenSchemaParser::new()
        .parse(&effective_only("2024-07-04", "NONE", "USNY"))
        .unwrap();
    let mapper = golden_cdm::EconomicTermsMapper::new();

    let first = mapper.build_economic_terms(&record).unwrap().unwrap();
    let second = mapper.build_economic_terms(&record).unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.effective_date.unwrap().unadjusted_date(),
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    );
}
