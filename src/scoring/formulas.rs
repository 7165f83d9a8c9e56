//! Table lookups and ratio formulas shared by the calculator.

use crate::constants::ZEST_TABLE;
use crate::core::Scalar;
use serde::{Serialize, Serializer};
use std::fmt;

/// Replacement for a zero EBPer denominator.
const EBPER_ZERO_GUARD: f64 = 0.0001;
const EBPER_PERVASIVE: f64 = 2.5;
const MIN_EA_FOR_STYLE: f64 = 4.0;

/// Expected ZSum for a Zf count, `None` outside 1..=50 or for non-integral input.
pub fn zest_from_zf(zf: f64) -> Option<f64> {
    if !zf.is_finite() || !(1.0..=50.0).contains(&zf) || zf.fract() != 0.0 {
        return None;
    }
    Some(ZEST_TABLE[zf as usize - 1])
}

/// D score for a difference EA - es (or EA - Adj es).
///
/// Steps of 2.5 on |x|, capped at 5, carrying the sign of `x`.
pub fn d_table(x: f64) -> Scalar<i32> {
    if !x.is_finite() {
        return Scalar::Undetermined;
    }

    let magnitude = match x.abs() {
        a if a < 2.5 => 0,
        a if a < 5.0 => 1,
        a if a < 7.5 => 2,
        a if a < 10.0 => 3,
        a if a < 12.5 => 4,
        _ => 5,
    };

    Scalar::Number(if x < 0.0 { -magnitude } else { magnitude })
}

/// `numerator / denominator`, or 0 when the denominator is zero.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// F / (R - F), 0 when every response is pure form.
pub fn lambda(pure_form: usize, r: usize) -> f64 {
    guarded_ratio(pure_form as f64, r.saturating_sub(pure_form) as f64)
}

/// Experience balance coping style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopingStyle {
    Introversive,
    /// Introversive with WSumC = 0 and M >= 3.
    IntroversiveVerify,
    Extratensive,
    /// Extratensive with M = 0 and WSumC > 3.5.
    ExtratensiveVerify,
    Ambitent,
    Avoidant,
}

impl CopingStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Introversive => "Introversive",
            Self::IntroversiveVerify => "Introversive (verify not overwhelmed)",
            Self::Extratensive => "Extratensive",
            Self::ExtratensiveVerify => "Extratensive (verify not overwhelmed)",
            Self::Ambitent => "Ambitent",
            Self::Avoidant => "Avoidant",
        }
    }
}

impl fmt::Display for CopingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CopingStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify the EB.
///
/// Avoidant when EA < 4 and Lambda > 0.99. Otherwise a style needs M and
/// WSumC to differ by at least 2, or by more than 2 once EA exceeds 10.
pub fn determine_coping_style(m: f64, wsumc: f64, ea: f64, lambda: f64) -> CopingStyle {
    if ea < MIN_EA_FOR_STYLE && lambda > 0.99 {
        return CopingStyle::Avoidant;
    }

    let diff = (m - wsumc).abs();
    let distinct = if ea > 10.0 { diff > 2.0 } else { diff >= 2.0 };
    if !distinct {
        return CopingStyle::Ambitent;
    }

    if m > wsumc {
        if wsumc == 0.0 && m >= 3.0 {
            CopingStyle::IntroversiveVerify
        } else {
            CopingStyle::Introversive
        }
    } else if m == 0.0 && wsumc > 3.5 {
        CopingStyle::ExtratensiveVerify
    } else {
        CopingStyle::Extratensive
    }
}

/// EB pervasiveness: the dominant side of the EB divided by the other,
/// when it dominates by more than 2.5 and EA >= 4. Rounded to 2 decimals.
pub fn eb_per(m: f64, wsumc: f64, ea: f64) -> Scalar<f64> {
    if m <= 0.0 && wsumc <= 0.0 {
        return Scalar::Undetermined;
    }

    let or_one = |v: f64| if v == 0.0 { 1.0 } else { v };
    let or_guard = |v: f64| if v == 0.0 { EBPER_ZERO_GUARD } else { v };

    let ratio = if m / or_one(wsumc) > EBPER_PERVASIVE && ea >= MIN_EA_FOR_STYLE {
        m / or_guard(wsumc)
    } else if wsumc / or_one(m) > EBPER_PERVASIVE && ea >= MIN_EA_FOR_STYLE {
        wsumc / or_guard(m)
    } else {
        return Scalar::Undetermined;
    };

    Scalar::Number(round_to(ratio, 2))
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
