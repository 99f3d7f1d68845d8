// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tag Dictionaries
//!
//! Fixed mappings from the boundary-condition and domain-material naming
//! convention to small integer codes, plus the two derived classifiers
//! for dynamically-indexed names (pistons and recording probes).
//!
//! Both dictionaries are process-wide, immutable, and built once on first
//! use. They are pure lookup tables: the vocabulary is closed and
//! hard-coded, not configurable at runtime. Unknown names are expected in
//! larger files and classify to `None` / code 0 rather than an error.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::extract::extract_between_brackets;

/// Base code for pressure-driven piston walls (`piston_pressure[n]`)
pub const PISTON_PRESSURE_BASE: i32 = 1000;
/// Base code for velocity-driven piston walls (`piston_velocity[n]`)
pub const PISTON_VELOCITY_BASE: i32 = 2000;
/// Base code for stress-driven piston walls (`piston_stress[n]`)
pub const PISTON_STRESS_BASE: i32 = 3000;
/// Base code for recording probes (`recObj[n]`), 599 addressable slots
pub const PROBE_BASE: i32 = 600;

fn boundary_types() -> &'static FxHashMap<&'static str, i32> {
    static MAP: OnceLock<FxHashMap<&'static str, i32>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = FxHashMap::default();
        m.insert("BCfile", 0);
        m.insert("free", 1);
        m.insert("wall", 2);
        m.insert("outflow", 3);
        m.insert("imposedPressure", 4);
        m.insert("imposedVelocities", 5);
        m.insert("axisymmetric_y", 6);
        m.insert("axisymmetric_x", 7);
        // "recorded" variants, offset by +10
        m.insert("BC_rec", 10);
        m.insert("free_rec", 11);
        m.insert("wall_rec", 12);
        m.insert("outflow_rec", 13);
        m.insert("imposedPressure_rec", 14);
        m.insert("imposedVelocities_rec", 15);
        m.insert("axisymmetric_y_rec", 16);
        m.insert("axisymmetric_x_rec", 17);
        m.insert("piston_pressure", 18);
        m.insert("piston_velocity", 19);
        m.insert("recordingObject", 20);
        m.insert("recObj", 20);
        m.insert("piston_stress", 21);
        m
    })
}

fn domain_types() -> &'static FxHashMap<&'static str, i32> {
    static MAP: OnceLock<FxHashMap<&'static str, i32>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = FxHashMap::default();
        m.insert("fluid", 0);
        m.insert("fluid1", 1);
        m.insert("fluid2", 2);
        m.insert("fluid3", 3);
        m.insert("fluid4", 4);
        m.insert("solid", 5);
        m.insert("solid1", 6);
        m.insert("solid2", 7);
        m.insert("solid3", 8);
        m.insert("solid4", 9);
        m
    })
}

/// Look up the code for a boundary-condition kind.
///
/// Returns `None` for names outside the convention.
pub fn boundary_code(name: &str) -> Option<i32> {
    boundary_types().get(name).copied()
}

/// Look up the code for a domain-material kind (`fluid`, `solid1`, ...).
pub fn domain_code(name: &str) -> Option<i32> {
    domain_types().get(name).copied()
}

/// Classify a piston wall from a raw physical-group name.
///
/// Names containing `piston_pressure`, `piston_velocity` or
/// `piston_stress` map to `1000 + id`, `2000 + id` or `3000 + id`
/// respectively, where `id` comes from the bracketed instance number
/// (0 when no brackets are present). Any other name yields code 0.
pub fn piston_code(name: &str) -> Result<i32> {
    let id = extract_between_brackets(name)? as i32;
    let code = if name.contains("piston_pressure") {
        PISTON_PRESSURE_BASE + id
    } else if name.contains("piston_velocity") {
        PISTON_VELOCITY_BASE + id
    } else if name.contains("piston_stress") {
        PISTON_STRESS_BASE + id
    } else {
        0
    };
    Ok(code)
}

/// Classify a recording probe from a raw physical-group name.
///
/// The probe code is `600 + id` with the bracketed instance id required
/// to stay below 999; larger ids collide with other code families and
/// fail the call.
pub fn probe_code(name: &str) -> Result<i32> {
    let id = extract_between_brackets(name)?;
    if id >= 999 {
        return Err(Error::ProbeIdOutOfRange { id });
    }
    Ok(PROBE_BASE + id as i32)
}
