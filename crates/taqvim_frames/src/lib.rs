//! Reference-frame quantities for solar and calendar astronomy.
//!
//! This crate provides:
//! - Mean obliquity of the ecliptic (Laskar polynomial)
//! - Nutation in longitude and obliquity (63-term Meeus series)
//! - Ecliptic to equatorial coordinate rotation

pub mod nutation;
pub mod obliquity;
pub mod rotation;

pub use nutation::{NUTATION_TERM_COUNT, fundamental_arguments, nutation_deg};
pub use obliquity::{OBLIQUITY_J2000_DEG, obliquity_of_ecliptic_deg};
pub use rotation::{EquatorialCoords, ecliptic_to_equatorial, ecliptic_to_equatorial_with_obliquity};
