//! The structural summary record produced by the calculator.

use super::formulas::CopingStyle;
use super::indices::IndexOutcome;
use crate::core::{Card, Scalar};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Determinant classes tallied for single-determinant responses, in summary
/// sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SingleDeterminant {
    M,
    FM,
    #[serde(rename = "m")]
    SmallM,
    FC,
    CF,
    C,
    Cn,
    #[serde(rename = "FC'")]
    FCPrime,
    #[serde(rename = "C'F")]
    CPrimeF,
    #[serde(rename = "C'")]
    CPrime,
    FT,
    TF,
    T,
    FV,
    VF,
    V,
    FY,
    YF,
    Y,
    Fr,
    #[serde(rename = "rF")]
    RF,
    FD,
    F,
}

impl SingleDeterminant {
    pub const ALL: [SingleDeterminant; 23] = [
        Self::M,
        Self::FM,
        Self::SmallM,
        Self::FC,
        Self::CF,
        Self::C,
        Self::Cn,
        Self::FCPrime,
        Self::CPrimeF,
        Self::CPrime,
        Self::FT,
        Self::TF,
        Self::T,
        Self::FV,
        Self::VF,
        Self::V,
        Self::FY,
        Self::YF,
        Self::Y,
        Self::Fr,
        Self::RF,
        Self::FD,
        Self::F,
    ];

    /// Class of a lone determinant token. Movement sub-codes fold into their
    /// parent class; unknown tokens have no class.
    pub fn from_token(token: &str) -> Option<Self> {
        let class = match token {
            "M" | "Ma" | "Mp" | "Ma-p" => Self::M,
            "FM" | "FMa" | "FMp" | "FMa-p" => Self::FM,
            "m" | "ma" | "mp" | "ma-p" => Self::SmallM,
            "FC" => Self::FC,
            "CF" => Self::CF,
            "C" => Self::C,
            "Cn" => Self::Cn,
            "FC'" => Self::FCPrime,
            "C'F" => Self::CPrimeF,
            "C'" => Self::CPrime,
            "FT" => Self::FT,
            "TF" => Self::TF,
            "T" => Self::T,
            "FV" => Self::FV,
            "VF" => Self::VF,
            "V" => Self::V,
            "FY" => Self::FY,
            "YF" => Self::YF,
            "Y" => Self::Y,
            "Fr" => Self::Fr,
            "rF" => Self::RF,
            "FD" => Self::FD,
            "F" => Self::F,
            _ => return None,
        };
        Some(class)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::FM => "FM",
            Self::SmallM => "m",
            Self::FC => "FC",
            Self::CF => "CF",
            Self::C => "C",
            Self::Cn => "Cn",
            Self::FCPrime => "FC'",
            Self::CPrimeF => "C'F",
            Self::CPrime => "C'",
            Self::FT => "FT",
            Self::TF => "TF",
            Self::T => "T",
            Self::FV => "FV",
            Self::VF => "VF",
            Self::V => "V",
            Self::FY => "FY",
            Self::YF => "YF",
            Self::Y => "Y",
            Self::Fr => "Fr",
            Self::RF => "rF",
            Self::FD => "FD",
            Self::F => "F",
        }
    }
}

/// Simplified location used by the form quality breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LocationBucket {
    W,
    D,
    Dd,
    S,
}

impl LocationBucket {
    pub const ALL: [LocationBucket; 4] = [Self::W, Self::D, Self::Dd, Self::S];

    /// Substring match with priority W, then D (only when Dd is absent), Dd, S.
    pub fn classify(location: &str) -> Option<Self> {
        if location.contains('W') {
            Some(Self::W)
        } else if location.contains('D') && !location.contains("Dd") {
            Some(Self::D)
        } else if location.contains("Dd") {
            Some(Self::Dd)
        } else if location.contains('S') {
            Some(Self::S)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::W => "W",
            Self::D => "D",
            Self::Dd => "Dd",
            Self::S => "S",
        }
    }
}

pub type LocationTally = BTreeMap<LocationBucket, usize>;

fn empty_location_tally() -> LocationTally {
    LocationBucket::ALL.into_iter().map(|b| (b, 0)).collect()
}

/// Form quality counts split by simplified location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormQualityDetails {
    #[serde(rename = "FQx_plus_locations")]
    pub plus: LocationTally,
    #[serde(rename = "FQx_o_locations")]
    pub ordinary: LocationTally,
    #[serde(rename = "FQx_u_locations")]
    pub unusual: LocationTally,
    #[serde(rename = "FQx_minus_locations")]
    pub minus: LocationTally,
    #[serde(rename = "FQx_none_locations")]
    pub none: LocationTally,
}

impl Default for FormQualityDetails {
    fn default() -> Self {
        Self {
            plus: empty_location_tally(),
            ordinary: empty_location_tally(),
            unusual: empty_location_tally(),
            minus: empty_location_tally(),
            none: empty_location_tally(),
        }
    }
}

impl FormQualityDetails {
    /// Tally for an FQ code, `None` for an empty or unknown code.
    pub fn tally_mut(&mut self, fq: &str) -> Option<&mut LocationTally> {
        match fq {
            "+" => Some(&mut self.plus),
            "o" => Some(&mut self.ordinary),
            "u" => Some(&mut self.unusual),
            "-" => Some(&mut self.minus),
            "none" => Some(&mut self.none),
            _ => None,
        }
    }

    /// Rows in FQ order with their summary sheet labels.
    pub fn rows(&self) -> [(&'static str, &LocationTally); 5] {
        [
            ("+", &self.plus),
            ("o", &self.ordinary),
            ("u", &self.unusual),
            ("-", &self.minus),
            ("none", &self.none),
        ]
    }
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Every value of the structural summary.
///
/// Serialized field names follow the summary sheet abbreviations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResults {
    #[serde(rename = "R")]
    pub r: usize,

    // Location and developmental quality
    #[serde(rename = "W")]
    pub w: usize,
    #[serde(rename = "D")]
    pub d: usize,
    #[serde(rename = "Dd")]
    pub dd: usize,
    #[serde(rename = "S")]
    pub s: usize,
    #[serde(rename = "W_plus_D")]
    pub w_plus_d: usize,
    #[serde(rename = "DQ_plus")]
    pub dq_plus: usize,
    #[serde(rename = "DQ_o")]
    pub dq_o: usize,
    #[serde(rename = "DQ_v_plus")]
    pub dq_v_plus: usize,
    #[serde(rename = "DQ_v")]
    pub dq_v: usize,

    // Organizational activity
    #[serde(rename = "Zf")]
    pub zf: usize,
    #[serde(rename = "ZSum")]
    pub zsum: f64,
    #[serde(rename = "ZEst")]
    pub zest: Scalar<f64>,
    #[serde(rename = "Zd")]
    pub zd: Scalar<f64>,

    // Determinants
    #[serde(rename = "M")]
    pub human_movement: usize,
    #[serde(rename = "FM")]
    pub animal_movement: usize,
    #[serde(rename = "m")]
    pub inanimate_movement: usize,
    #[serde(rename = "FC")]
    pub fc: usize,
    #[serde(rename = "CF")]
    pub cf: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "Cn")]
    pub cn: usize,
    #[serde(rename = "WSumC")]
    pub wsumc: f64,
    #[serde(rename = "SumC_prime")]
    pub sum_c_prime: usize,
    #[serde(rename = "SumT")]
    pub sum_t: usize,
    #[serde(rename = "SumV")]
    pub sum_v: usize,
    #[serde(rename = "SumY")]
    pub sum_y: usize,
    #[serde(rename = "SumShading")]
    pub sum_shading: usize,
    #[serde(rename = "Fr")]
    pub fr: usize,
    #[serde(rename = "rF")]
    pub rf: usize,
    #[serde(rename = "FD")]
    pub fd: usize,
    #[serde(rename = "F")]
    pub pure_f: usize,
    #[serde(rename = "Blends")]
    pub blends: usize,
    #[serde(rename = "Pairs")]
    pub pairs: usize,

    // Form quality
    #[serde(rename = "FQx_plus")]
    pub fqx_plus: usize,
    #[serde(rename = "FQx_o")]
    pub fqx_o: usize,
    #[serde(rename = "FQx_u")]
    pub fqx_u: usize,
    #[serde(rename = "FQx_minus")]
    pub fqx_minus: usize,
    #[serde(rename = "FQx_none")]
    pub fqx_none: usize,
    #[serde(rename = "MQual_plus")]
    pub mqual_plus: usize,
    #[serde(rename = "MQual_o")]
    pub mqual_o: usize,
    #[serde(rename = "MQual_u")]
    pub mqual_u: usize,
    #[serde(rename = "MQual_minus")]
    pub mqual_minus: usize,
    #[serde(rename = "MQual_none")]
    pub mqual_none: usize,

    // Core ratios
    #[serde(rename = "Lambda")]
    pub lambda: f64,
    #[serde(rename = "EA")]
    pub ea: f64,
    pub es: usize,
    #[serde(rename = "D_score")]
    pub d_score: Scalar<i32>,
    #[serde(rename = "AdjEs")]
    pub adj_es: usize,
    #[serde(rename = "AdjD")]
    pub adj_d: Scalar<i32>,
    #[serde(rename = "EBPer")]
    pub eb_per: Scalar<f64>,
    pub eb: String,
    #[serde(rename = "CopingStyle")]
    pub coping_style: CopingStyle,

    // Mediation
    #[serde(rename = "XA_percent")]
    pub xa_percent: f64,
    #[serde(rename = "WDA_percent")]
    pub wda_percent: f64,
    #[serde(rename = "X_plus_percent")]
    pub x_plus_percent: f64,
    #[serde(rename = "Xu_percent")]
    pub xu_percent: f64,
    #[serde(rename = "X_minus_percent")]
    pub x_minus_percent: f64,
    #[serde(rename = "S_minus")]
    pub s_minus: usize,

    #[serde(rename = "Afr")]
    pub afr: f64,
    #[serde(rename = "Populars")]
    pub populars: usize,

    #[serde(rename = "GHR")]
    pub ghr: usize,
    #[serde(rename = "PHR")]
    pub phr: usize,

    // Contents
    #[serde(rename = "H")]
    pub h: usize,
    #[serde(rename = "H_paren")]
    pub h_paren: usize,
    #[serde(rename = "Hd")]
    pub hd: usize,
    #[serde(rename = "Hd_paren")]
    pub hd_paren: usize,
    #[serde(rename = "Hx")]
    pub hx: usize,
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "A_paren")]
    pub a_paren: usize,
    #[serde(rename = "Ad")]
    pub ad: usize,
    #[serde(rename = "Ad_paren")]
    pub ad_paren: usize,
    #[serde(rename = "An")]
    pub an: usize,
    #[serde(rename = "Art")]
    pub art: usize,
    #[serde(rename = "Ay")]
    pub ay: usize,
    #[serde(rename = "Bl")]
    pub bl: usize,
    #[serde(rename = "Bt")]
    pub bt: usize,
    #[serde(rename = "Cg")]
    pub cg: usize,
    #[serde(rename = "Cl")]
    pub cl: usize,
    #[serde(rename = "Ex")]
    pub ex: usize,
    #[serde(rename = "Fd")]
    pub food: usize,
    #[serde(rename = "Fi")]
    pub fi: usize,
    #[serde(rename = "Ge")]
    pub ge: usize,
    #[serde(rename = "Hh")]
    pub hh: usize,
    #[serde(rename = "Ls")]
    pub ls: usize,
    #[serde(rename = "Na")]
    pub na: usize,
    #[serde(rename = "Sc")]
    pub sc: usize,
    #[serde(rename = "Sx")]
    pub sx: usize,
    #[serde(rename = "Xy")]
    pub xy: usize,
    #[serde(rename = "Id")]
    pub id: usize,

    // Special scores
    #[serde(rename = "DV1")]
    pub dv1: usize,
    #[serde(rename = "DV2")]
    pub dv2: usize,
    #[serde(rename = "INCOM1")]
    pub incom1: usize,
    #[serde(rename = "INCOM2")]
    pub incom2: usize,
    #[serde(rename = "DR1")]
    pub dr1: usize,
    #[serde(rename = "DR2")]
    pub dr2: usize,
    #[serde(rename = "FABCOM1")]
    pub fabcom1: usize,
    #[serde(rename = "FABCOM2")]
    pub fabcom2: usize,
    #[serde(rename = "ALOG")]
    pub alog: usize,
    #[serde(rename = "CONTAM")]
    pub contam: usize,
    #[serde(rename = "Sum6")]
    pub sum6: usize,
    #[serde(rename = "WSum6")]
    pub wsum6: u32,
    #[serde(rename = "Lv2")]
    pub lv2: usize,
    #[serde(rename = "AB")]
    pub ab: usize,
    #[serde(rename = "AG")]
    pub ag: usize,
    #[serde(rename = "COP")]
    pub cop: usize,
    #[serde(rename = "CP")]
    pub cp: usize,
    #[serde(rename = "MOR")]
    pub mor: usize,
    #[serde(rename = "PER")]
    pub per: usize,
    #[serde(rename = "PSV")]
    pub psv: usize,

    // Special indices
    #[serde(rename = "PTI", serialize_with = "serialize_display")]
    pub pti: u32,
    #[serde(rename = "DEPI")]
    pub depi: IndexOutcome,
    #[serde(rename = "CDI")]
    pub cdi: IndexOutcome,
    #[serde(rename = "SCON")]
    pub scon: IndexOutcome,
    #[serde(rename = "HVI")]
    pub hvi: IndexOutcome,
    #[serde(rename = "OBS")]
    pub obs: IndexOutcome,

    #[serde(rename = "Ma")]
    pub ma: usize,
    #[serde(rename = "Mp")]
    pub mp: usize,
    pub active_movement: usize,
    pub passive_movement: usize,
    #[serde(rename = "ColorShadingBlends")]
    pub color_shading_blends: usize,
    #[serde(rename = "EgocentricityIndex")]
    pub egocentricity_index: f64,
    #[serde(rename = "IsolateIndex")]
    pub isolate_index: f64,
    #[serde(rename = "H_total")]
    pub h_total: usize,

    pub blends_list: Vec<Vec<String>>,
    pub approach: BTreeMap<Card, Vec<String>>,
    pub single_determinants: BTreeMap<SingleDeterminant, usize>,
    pub form_quality_details: FormQualityDetails,
}
