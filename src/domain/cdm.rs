//! CDM-shaped economic terms model.
//!
//! These types mirror the subset of the ISDA Common Domain Model that the
//! Golden Schema mapping produces. Field names serialize with the CDM's
//! camelCase keys so the JSON output lines up with CDM tooling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a code does not belong to an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode {
    pub enum_name: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.value, self.enum_name)
    }
}

impl std::error::Error for UnknownCode {}

/// Rule for moving a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessDayConventionEnum {
    #[serde(rename = "FOLLOWING")]
    Following,
    #[serde(rename = "FRN")]
    Frn,
    #[serde(rename = "MODFOLLOWING")]
    ModFollowing,
    #[serde(rename = "PRECEDING")]
    Preceding,
    #[serde(rename = "MODPRECEDING")]
    ModPreceding,
    #[serde(rename = "NEAREST")]
    Nearest,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "NotApplicable")]
    NotApplicable,
}

impl BusinessDayConventionEnum {
    pub const ALL: [BusinessDayConventionEnum; 8] = [
        Self::Following,
        Self::Frn,
        Self::ModFollowing,
        Self::Preceding,
        Self::ModPreceding,
        Self::Nearest,
        Self::None,
        Self::NotApplicable,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Following => "FOLLOWING",
            Self::Frn => "FRN",
            Self::ModFollowing => "MODFOLLOWING",
            Self::Preceding => "PRECEDING",
            Self::ModPreceding => "MODPRECEDING",
            Self::Nearest => "NEAREST",
            Self::None => "NONE",
            Self::NotApplicable => "NotApplicable",
        }
    }
}

impl FromStr for BusinessDayConventionEnum {
    type Err = UnknownCode;

    /// Codes are matched exactly; `following` is not `FOLLOWING`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCode {
                enum_name: "BusinessDayConventionEnum",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for BusinessDayConventionEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// ISDA business center codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessCenterEnum {
    Aeab,
    Aedu,
    Arba,
    Ataw,
    Aume,
    Ausy,
    Bebr,
    Brsp,
    Cato,
    Chzu,
    Clsa,
    Cnbe,
    Czpr,
    Defr,
    Dkco,
    Esma,
    Euta,
    Fihe,
    Frpa,
    Gblo,
    Grat,
    Hkhk,
    Hubu,
    Idja,
    Iedu,
    Ilta,
    Inmu,
    Itmi,
    Jpto,
    Krse,
    Mxmc,
    Mykl,
    Nlam,
    Noos,
    Nzau,
    Nzwe,
    Phma,
    Plwa,
    Ptli,
    Rumo,
    Sari,
    Sest,
    Sgsi,
    Thba,
    Trib,
    Twtp,
    Usch,
    Usgs,
    Usny,
    Zajo,
}

impl BusinessCenterEnum {
    pub const ALL: [BusinessCenterEnum; 50] = [
        Self::Aeab,
        Self::Aedu,
        Self::Arba,
        Self::Ataw,
        Self::Aume,
        Self::Ausy,
        Self::Bebr,
        Self::Brsp,
        Self::Cato,
        Self::Chzu,
        Self::Clsa,
        Self::Cnbe,
        Self::Czpr,
        Self::Defr,
        Self::Dkco,
        Self::Esma,
        Self::Euta,
        Self::Fihe,
        Self::Frpa,
        Self::Gblo,
        Self::Grat,
        Self::Hkhk,
        Self::Hubu,
        Self::Idja,
        Self::Iedu,
        Self::Ilta,
        Self::Inmu,
        Self::Itmi,
        Self::Jpto,
        Self::Krse,
        Self::Mxmc,
        Self::Mykl,
        Self::Nlam,
        Self::Noos,
        Self::Nzau,
        Self::Nzwe,
        Self::Phma,
        Self::Plwa,
        Self::Ptli,
        Self::Rumo,
        Self::Sari,
        Self::Sest,
        Self::Sgsi,
        Self::Thba,
        Self::Trib,
        Self::Twtp,
        Self::Usch,
        Self::Usgs,
        Self::Usny,
        Self::Zajo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Aeab => "AEAB",
            Self::Aedu => "AEDU",
            Self::Arba => "ARBA",
            Self::Ataw => "ATAW",
            Self::Aume => "AUME",
            Self::Ausy => "AUSY",
            Self::Bebr => "BEBR",
            Self::Brsp => "BRSP",
            Self::Cato => "CATO",
            Self::Chzu => "CHZU",
            Self::Clsa => "CLSA",
            Self::Cnbe => "CNBE",
            Self::Czpr => "CZPR",
            Self::Defr => "DEFR",
            Self::Dkco => "DKCO",
            Self::Esma => "ESMA",
            Self::Euta => "EUTA",
            Self::Fihe => "FIHE",
            Self::Frpa => "FRPA",
            Self::Gblo => "GBLO",
            Self::Grat => "GRAT",
            Self::Hkhk => "HKHK",
            Self::Hubu => "HUBU",
            Self::Idja => "IDJA",
            Self::Iedu => "IEDU",
            Self::Ilta => "ILTA",
            Self::Inmu => "INMU",
            Self::Itmi => "ITMI",
            Self::Jpto => "JPTO",
            Self::Krse => "KRSE",
            Self::Mxmc => "MXMC",
            Self::Mykl => "MYKL",
            Self::Nlam => "NLAM",
            Self::Noos => "NOOS",
            Self::Nzau => "NZAU",
            Self::Nzwe => "NZWE",
            Self::Phma => "PHMA",
            Self::Plwa => "PLWA",
            Self::Ptli => "PTLI",
            Self::Rumo => "RUMO",
            Self::Sari => "SARI",
            Self::Sest => "SEST",
            Self::Sgsi => "SGSI",
            Self::Thba => "THBA",
            Self::Trib => "TRIB",
            Self::Twtp => "TWTP",
            Self::Usch => "USCH",
            Self::Usgs => "USGS",
            Self::Usny => "USNY",
            Self::Zajo => "ZAJO",
        }
    }
}

impl FromStr for BusinessCenterEnum {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCode {
                enum_name: "BusinessCenterEnum",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for BusinessCenterEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWithMetaBusinessCenterEnum {
    pub value: BusinessCenterEnum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCenters {
    pub business_center: Vec<FieldWithMetaBusinessCenterEnum>,
}

impl BusinessCenters {
    /// Golden Schema rows carry exactly one center per date.
    pub fn single(center: BusinessCenterEnum) -> Self {
        Self {
            business_center: vec![FieldWithMetaBusinessCenterEnum { value: center }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDayAdjustments {
    pub business_day_convention: BusinessDayConventionEnum,
    pub business_centers: BusinessCenters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustableDate {
    pub unadjusted_date: NaiveDate,
    pub date_adjustments: BusinessDayAdjustments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustableOrRelativeDate {
    pub adjustable_date: AdjustableDate,
}

impl AdjustableOrRelativeDate {
    pub fn unadjusted_date(&self) -> NaiveDate {
        self.adjustable_date.unadjusted_date
    }

    pub fn convention(&self) -> BusinessDayConventionEnum {
        self.adjustable_date.date_adjustments.business_day_convention
    }

    pub fn business_centers(&self) -> impl Iterator<Item = BusinessCenterEnum> + '_ {
        self.adjustable_date
            .date_adjustments
            .business_centers
            .business_center
            .iter()
            .map(|c| c.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<AdjustableOrRelativeDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<AdjustableOrRelativeDate>,
}
