//! Closed enumerations for the modeled city
//!
//! Species, health and district are closed sets so that invalid values are a
//! construction-time (or deserialization-time) error, never a silent
//! pass-through. `District` derives `Ord` in declaration order, which is the
//! canonical Roman-numeral ordering used by all per-district aggregates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Tree species known to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Oak,
    Pine,
    Maple,
    Birch,
    Chestnut,
}

impl Species {
    pub const ALL: [Self; 5] = [
        Self::Oak,
        Self::Pine,
        Self::Maple,
        Self::Birch,
        Self::Chestnut,
    ];

    /// Size class used by the expanded export.
    pub fn size_class(self) -> SizeClass {
        match self {
            Self::Oak | Self::Pine => SizeClass::Large,
            Self::Birch | Self::Maple => SizeClass::Small,
            Self::Chestnut => SizeClass::Medium,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Oak => "Oak",
            Self::Pine => "Pine",
            Self::Maple => "Maple",
            Self::Birch => "Birch",
            Self::Chestnut => "Chestnut",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sp| sp.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownSpecies(s.to_string()))
    }
}

/// Size class derived from species (expanded export column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        };
        write!(f, "{name}")
    }
}

/// Health assessment of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Health {
    Good,
    Moderate,
    Poor,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Health {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("Good") => Ok(Self::Good),
            s if s.eq_ignore_ascii_case("Moderate") => Ok(Self::Moderate),
            s if s.eq_ignore_ascii_case("Poor") => Ok(Self::Poor),
            other => Err(DomainError::UnknownHealth(other.to_string())),
        }
    }
}

/// The 23 Budapest districts, in canonical Roman-numeral order.
///
/// Declaration order is the canonical order; `Ord` is derived from it, so a
/// `BTreeMap<District, _>` iterates districts canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum District {
    #[serde(rename = "I. Ker.")]
    I,
    #[serde(rename = "II. Ker.")]
    II,
    #[serde(rename = "III. Ker.")]
    III,
    #[serde(rename = "IV. Ker.")]
    IV,
    #[serde(rename = "V. Ker.")]
    V,
    #[serde(rename = "VI. Ker.")]
    VI,
    #[serde(rename = "VII. Ker.")]
    VII,
    #[serde(rename = "VIII. Ker.")]
    VIII,
    #[serde(rename = "IX. Ker.")]
    IX,
    #[serde(rename = "X. Ker.")]
    X,
    #[serde(rename = "XI. Ker.")]
    XI,
    #[serde(rename = "XII. Ker.")]
    XII,
    #[serde(rename = "XIII. Ker.")]
    XIII,
    #[serde(rename = "XIV. Ker.")]
    XIV,
    #[serde(rename = "XV. Ker.")]
    XV,
    #[serde(rename = "XVI. Ker.")]
    XVI,
    #[serde(rename = "XVII. Ker.")]
    XVII,
    #[serde(rename = "XVIII. Ker.")]
    XVIII,
    #[serde(rename = "XIX. Ker.")]
    XIX,
    #[serde(rename = "XX. Ker.")]
    XX,
    #[serde(rename = "XXI. Ker.")]
    XXI,
    #[serde(rename = "XXII. Ker.")]
    XXII,
    #[serde(rename = "XXIII. Ker.")]
    XXIII,
}

impl District {
    pub const ALL: [Self; 23] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::VI,
        Self::VII,
        Self::VIII,
        Self::IX,
        Self::X,
        Self::XI,
        Self::XII,
        Self::XIII,
        Self::XIV,
        Self::XV,
        Self::XVI,
        Self::XVII,
        Self::XVIII,
        Self::XIX,
        Self::XX,
        Self::XXI,
        Self::XXII,
        Self::XXIII,
    ];

    fn roman(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::VI => "VI",
            Self::VII => "VII",
            Self::VIII => "VIII",
            Self::IX => "IX",
            Self::X => "X",
            Self::XI => "XI",
            Self::XII => "XII",
            Self::XIII => "XIII",
            Self::XIV => "XIV",
            Self::XV => "XV",
            Self::XVI => "XVI",
            Self::XVII => "XVII",
            Self::XVIII => "XVIII",
            Self::XIX => "XIX",
            Self::XX => "XX",
            Self::XXI => "XXI",
            Self::XXII => "XXII",
            Self::XXIII => "XXIII",
        }
    }

    /// Approximate district center as (lat, lon).
    pub fn center(self) -> (f64, f64) {
        match self {
            Self::I => (47.4979, 19.0399),
            Self::II => (47.5200, 19.0200),
            Self::III => (47.5500, 19.0400),
            Self::IV => (47.5600, 19.0800),
            Self::V => (47.4950, 19.0550),
            Self::VI => (47.5050, 19.0650),
            Self::VII => (47.5000, 19.0700),
            Self::VIII => (47.4850, 19.0800),
            Self::IX => (47.4800, 19.0700),
            Self::X => (47.4850, 19.1000),
            Self::XI => (47.4700, 19.0400),
            Self::XII => (47.4900, 19.0000),
            Self::XIII => (47.5300, 19.0700),
            Self::XIV => (47.5100, 19.1000),
            Self::XV => (47.5500, 19.1000),
            Self::XVI => (47.5200, 19.1500),
            Self::XVII => (47.5000, 19.2000),
            Self::XVIII => (47.4500, 19.1800),
            Self::XIX => (47.4600, 19.1400),
            Self::XX => (47.4400, 19.1000),
            Self::XXI => (47.4200, 19.0800),
            Self::XXII => (47.4300, 19.0400),
            Self::XXIII => (47.4100, 19.0700),
        }
    }

    /// Real streets used when generating addresses for this district.
    pub fn streets(self) -> [&'static str; 3] {
        match self {
            Self::I => ["Batthyány utca", "Dísz tér", "Úri utca"],
            Self::II => ["Pasaréti út", "Hűvösvölgyi út", "Szépvölgyi út"],
            Self::III => ["Bécsi út", "Fő tér", "Lajos utca"],
            Self::IV => ["Árpád út", "Pozsonyi utca", "Attila utca"],
            Self::V => ["Váci utca", "Petőfi Sándor utca", "Apáczai Csere János utca"],
            Self::VI => ["Andrássy út", "Izabella utca", "Jókai tér"],
            Self::VII => ["Dohány utca", "Rákóczi út", "Kazinczy utca"],
            Self::VIII => ["József körút", "Baross utca", "Fiumei út"],
            Self::IX => ["Üllői út", "Ferenc körút", "Mester utca"],
            Self::X => ["Kőbányai út", "Maglódi út", "Szent László tér"],
            Self::XI => ["Bartók Béla út", "Fehérvári út", "Villányi út"],
            Self::XII => [
                "Németvölgyi út",
                "Apor Vilmos tér",
                "Kiss János altábornagy utca",
            ],
            Self::XIII => ["Lehel utca", "Róbert Károly körút", "Fiastyúk utca"],
            Self::XIV => ["Hungária körút", "Thököly út", "Stefánia út"],
            Self::XV => ["Páskomliget utca", "Erdőkerülő utca", "Régi Fóti út"],
            Self::XVI => ["Veres Péter út", "Szabadföld út", "Csömöri út"],
            Self::XVII => ["Pesti út", "Ferihegyi út", "Helikopter utca"],
            Self::XVIII => ["Üllői út", "Lőrinc út", "Lakatos út"],
            Self::XIX => ["Ady Endre út", "Petőfi utca", "Simonyi Zsigmond utca"],
            Self::XX => ["Helsinki út", "Szent Erzsébet tér", "Ady Endre utca"],
            Self::XXI => [
                "II. Rákóczi Ferenc út",
                "Kossuth Lajos utca",
                "Ady Endre utca",
            ],
            Self::XXII => ["Nagytétényi út", "Rózsakerti utca", "Temető utca"],
            Self::XXIII => ["Haraszti út", "Grassalkovich út", "Tartsay Vilmos utca"],
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Ker.", self.roman())
    }
}

impl FromStr for District {
    type Err = DomainError;

    /// Accepts the full label ("V. Ker.") or the bare Roman numeral ("V").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let numeral = trimmed
            .strip_suffix("Ker.")
            .map(|p| p.trim_end().trim_end_matches('.'))
            .unwrap_or(trimmed);

        Self::ALL
            .into_iter()
            .find(|d| d.roman().eq_ignore_ascii_case(numeral.trim()))
            .ok_or_else(|| DomainError::UnknownDistrict(s.to_string()))
    }
}
