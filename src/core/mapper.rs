//! Golden Schema → CDM `EconomicTerms`.
//!
//! Each date field is read from three flat keys: the date itself, its business
//! day convention and its business center. A missing or blank date means the
//! field is simply not provided; anything wrong once the date is there is a
//! [`MappingError`].

use crate::core::parser::json_type_name;
use crate::domain::cdm::{
    AdjustableDate, AdjustableOrRelativeDate, BusinessCenterEnum, BusinessCenters,
    BusinessDayAdjustments, BusinessDayConventionEnum, EconomicTerms,
};
use crate::domain::model::Record;
use crate::utils::error::MappingError;
use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Golden Schema keys that together describe one adjustable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFieldKeys {
    pub date: &'static str,
    pub convention: &'static str,
    pub center: &'static str,
}

pub const EFFECTIVE_DATE_KEYS: DateFieldKeys = DateFieldKeys {
    date: "effectiveDate",
    convention: "effectiveDateBusinessDayConvention",
    center: "effectiveDateBusinessCenter",
};

pub const TERMINATION_DATE_KEYS: DateFieldKeys = DateFieldKeys {
    date: "terminationDate",
    convention: "terminationDateBusinessDayConvention",
    center: "terminationDateBusinessCenter",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct EconomicTermsMapper;

impl EconomicTermsMapper {
    pub fn new() -> Self {
        Self
    }

    /// Builds the economic terms, or `None` when neither date is provided.
    ///
    /// The effective date is mapped before the termination date and the first
    /// failure is returned.
    pub fn build_economic_terms(
        &self,
        record: &Record,
    ) -> Result<Option<EconomicTerms>, MappingError> {
        let effective_date = self.build_adjustable_date(record, &EFFECTIVE_DATE_KEYS)?;
        let termination_date = self.build_adjustable_date(record, &TERMINATION_DATE_KEYS)?;

        if effective_date.is_none() && termination_date.is_none() {
            tracing::debug!("No effective or termination date in Golden Schema record");
            return Ok(None);
        }

        Ok(Some(EconomicTerms {
            effective_date,
            termination_date,
        }))
    }

    pub fn build_adjustable_date(
        &self,
        record: &Record,
        keys: &DateFieldKeys,
    ) -> Result<Option<AdjustableOrRelativeDate>, MappingError> {
        let date_str = match read_string(record, keys.date)? {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                tracing::debug!("{} not provided", keys.date);
                return Ok(None);
            }
        };

        let unadjusted_date = parse_iso_date(keys.date, date_str)?;
        let convention: BusinessDayConventionEnum = parse_code(record, keys.convention)?;
        let center: BusinessCenterEnum = parse_code(record, keys.center)?;

        tracing::debug!(
            "Mapped {}: {} {} {}",
            keys.date,
            unadjusted_date,
            convention,
            center
        );

        Ok(Some(AdjustableOrRelativeDate {
            adjustable_date: AdjustableDate {
                unadjusted_date,
                date_adjustments: BusinessDayAdjustments {
                    business_day_convention: convention,
                    business_centers: BusinessCenters::single(center),
                },
            },
        }))
    }
}

/// `Ok(None)` for an absent key or JSON `null`.
fn read_string<'a>(record: &'a Record, key: &str) -> Result<Option<&'a str>, MappingError> {
    match record.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(MappingError::UnexpectedType {
            field: key.to_string(),
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, MappingError> {
    let date = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| {
        MappingError::DateParseFailure {
            field: field.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    // chrono tolerates unpadded months/days and signed years; the Golden Schema does not
    if date.format(ISO_DATE_FORMAT).to_string() != value {
        return Err(MappingError::DateParseFailure {
            field: field.to_string(),
            value: value.to_string(),
            reason: "expected zero-padded YYYY-MM-DD".to_string(),
        });
    }

    Ok(date)
}

fn parse_code<T>(record: &Record, key: &str) -> Result<T, MappingError>
where
    T: std::str::FromStr<Err = crate::domain::cdm::UnknownCode>,
{
    let raw = match read_string(record, key)? {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(MappingError::MissingField {
                field: key.to_string(),
            })
        }
    };

    raw.parse().map_err(|source| MappingError::UnknownEnumValue {
        field: key.to_string(),
        source,
    })
}
