//! Injection timing lookup.
//!
//! Pre-meal lead time in minutes per insulin formulation, reflecting onset
//! speed. Unrecognized formulations fall back to 15 minutes.

use crate::InsulinType;

/// Minutes to wait between injection and eating
pub fn lead_minutes(insulin_type: InsulinType) -> u32 {
    match insulin_type {
        InsulinType::Novolog => 15,
        InsulinType::Fiasp => 10,
        InsulinType::Humalog => 15,
        InsulinType::Regular => 30,
        InsulinType::Unknown => 15,
    }
}
