//! Composite clinical indices (PTI, DEPI, CDI, S-CON, HVI, OBS).
//!
//! Each index counts how many of a fixed set of criteria hold and compares
//! the count to the index cutoff. Criteria reading Zd or Adj D treat an
//! undetermined value as "criterion not met".

use crate::core::Scalar;
use serde::{Serialize, Serializer};
use std::fmt;

pub const DEPI_CUTOFF: u32 = 5;
pub const CDI_CUTOFF: u32 = 4;
pub const SCON_CUTOFF: u32 = 8;
pub const HVI_CUTOFF: u32 = 4;

/// Score of an index together with its positive/negative verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexOutcome {
    pub score: u32,
    pub positive: bool,
}

impl IndexOutcome {
    pub fn new(score: u32, positive: bool) -> Self {
        Self { score, positive }
    }

    fn at_cutoff(score: u32, cutoff: u32) -> Self {
        Self::new(score, score >= cutoff)
    }
}

impl fmt::Display for IndexOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.positive { "Positive" } else { "NO" };
        write!(f, "{}, {}", self.score, verdict)
    }
}

impl Serialize for IndexOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The summary values the index criteria read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexInputs {
    pub r: usize,
    pub zf: usize,
    pub zd: Scalar<f64>,
    pub dd: usize,
    pub s: usize,
    pub populars: usize,
    pub fqx_plus: usize,
    pub xa_percent: f64,
    pub wda_percent: f64,
    pub x_plus_percent: f64,
    pub x_minus_percent: f64,
    pub mqual_minus: usize,
    pub ea: f64,
    pub es: usize,
    pub adj_d: Scalar<i32>,
    pub wsumc: f64,
    pub fc: usize,
    pub cf: usize,
    pub c: usize,
    pub fm_plus_m: usize,
    pub sum_c_prime: usize,
    pub sum_t: usize,
    pub sum_v: usize,
    pub sum_shading: usize,
    pub fd: usize,
    pub reflections: usize,
    pub blends: usize,
    pub color_shading_blends: usize,
    pub active: usize,
    pub passive: usize,
    pub afr: f64,
    pub egocentricity: f64,
    pub isolate: f64,
    pub h: usize,
    pub h_total: usize,
    pub art: usize,
    pub ay: usize,
    pub food: usize,
    pub ab: usize,
    pub ag: usize,
    pub cop: usize,
    pub mor: usize,
    pub level2: usize,
    pub fabcom2: usize,
    pub wsum6: u32,
}

fn count_true(criteria: &[bool]) -> u32 {
    criteria.iter().filter(|&&met| met).count() as u32
}

pub fn pti_criteria(i: &IndexInputs) -> [bool; 5] {
    [
        i.xa_percent < 0.70 && i.wda_percent < 0.75,
        i.x_minus_percent > 0.29,
        i.level2 > 2 && i.fabcom2 > 0,
        (i.r < 17 && i.wsum6 > 12) || (i.r > 16 && i.wsum6 > 17),
        i.mqual_minus > 1 || i.x_minus_percent > 0.40,
    ]
}

/// Perceptual-Thinking Index. Reported as a bare count.
pub fn pti(i: &IndexInputs) -> u32 {
    count_true(&pti_criteria(i))
}

pub fn depi_criteria(i: &IndexInputs) -> [bool; 7] {
    [
        i.sum_v > 0 || i.fd > 2,
        i.color_shading_blends > 0 || i.s > 2,
        (i.egocentricity > 0.44 && i.reflections == 0) || i.egocentricity < 0.33,
        i.afr < 0.46 || i.blends < 4,
        i.sum_shading > i.fm_plus_m || i.sum_c_prime > 2,
        i.mor > 2 || 2 * i.ab + i.art + i.ay > 3,
        i.cop < 2 || i.isolate > 0.24,
    ]
}

/// Depression Index, positive at 5 or more.
pub fn depi(i: &IndexInputs) -> IndexOutcome {
    IndexOutcome::at_cutoff(count_true(&depi_criteria(i)), DEPI_CUTOFF)
}

pub fn cdi_criteria(i: &IndexInputs) -> [bool; 5] {
    [
        i.ea < 6.0 || i.adj_d.is_number_and(|d| d < 0),
        i.cop < 2 && i.ag < 2,
        i.wsumc < 2.5 || i.afr < 0.46,
        i.passive > i.active + 1 || i.h < 2,
        i.sum_t > 1 || i.isolate > 0.24 || i.food > 0,
    ]
}

/// Coping Deficit Index, positive at 4 or more.
pub fn cdi(i: &IndexInputs) -> IndexOutcome {
    IndexOutcome::at_cutoff(count_true(&cdi_criteria(i)), CDI_CUTOFF)
}

pub fn scon_criteria(i: &IndexInputs) -> [bool; 12] {
    [
        3 * i.sum_v + i.fd > 2,
        i.color_shading_blends > 0,
        i.egocentricity < 0.31 || i.egocentricity > 0.44,
        i.mor > 3,
        i.zd.is_number_and(|zd| !(-3.5..=3.5).contains(&zd)),
        i.es as f64 > i.ea,
        i.cf + i.c > i.fc,
        i.x_plus_percent < 0.70,
        i.s > 3,
        i.populars < 3 || i.populars > 8,
        i.h < 2,
        i.r < 17,
    ]
}

/// Suicide Constellation, positive at 8 or more.
pub fn scon(i: &IndexInputs) -> IndexOutcome {
    IndexOutcome::at_cutoff(count_true(&scon_criteria(i)), SCON_CUTOFF)
}

/// The four secondary HVI criteria; the primary one (T = 0) is separate.
pub fn hvi_criteria(i: &IndexInputs) -> [bool; 4] {
    [
        i.zf > 12,
        i.zd.is_number_and(|zd| zd > 3.0),
        i.s > 3,
        i.h_total > 6,
    ]
}

/// Hypervigilance Index. The score is the secondary count; positive needs
/// T = 0 as well as the secondary cutoff.
pub fn hvi(i: &IndexInputs) -> IndexOutcome {
    let primary = i.sum_t == 0;
    let secondary = count_true(&hvi_criteria(i));
    IndexOutcome::new(secondary, primary && secondary >= HVI_CUTOFF)
}

pub fn obs_criteria(i: &IndexInputs) -> [bool; 5] {
    [
        i.dd > 3,
        i.zf > 12,
        i.zd.is_number_and(|zd| zd > 3.0),
        i.populars > 7,
        i.fqx_plus > 1,
    ]
}

/// The four OBS decision rules, in order, evaluated over the base criteria.
pub fn obs_rules(i: &IndexInputs) -> [bool; 4] {
    let criteria = obs_criteria(i);
    let first_four = count_true(&criteria[..4]);
    let all_five = count_true(&criteria);

    [
        all_five == 5,
        first_four >= 2 && i.fqx_plus > 3,
        all_five >= 3 && i.x_plus_percent > 0.89,
        i.fqx_plus > 3 && i.x_plus_percent > 0.89,
    ]
}

/// Obsessive Style Index. The score counts satisfied rules, not criteria.
pub fn obs(i: &IndexInputs) -> IndexOutcome {
    let satisfied = count_true(&obs_rules(i));
    IndexOutcome::new(satisfied, satisfied > 0)
}

/// All six indices at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialIndices {
    pub pti: u32,
    pub depi: IndexOutcome,
    pub cdi: IndexOutcome,
    pub scon: IndexOutcome,
    pub hvi: IndexOutcome,
    pub obs: IndexOutcome,
}

impl SpecialIndices {
    pub fn evaluate(i: &IndexInputs) -> Self {
        Self {
            pti: pti(i),
            depi: depi(i),
            cdi: cdi(i),
            scon: scon(i),
            hvi: hvi(i),
            obs: obs(i),
        }
    }
}
