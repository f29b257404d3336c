//! Closed-form QED cross sections for e⁺e⁻ collisions.
//!
//! Differential terms per channel, analytic total cross sections,
//! expected event counts, and vectorized scans over kinematic samples.

pub mod bhabha;
pub mod channels;
pub mod divergence;
pub mod events;
pub mod muon_pair;
pub mod scan;
pub mod total;
