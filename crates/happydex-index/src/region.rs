//! Synthetic per-country happiness derived from the global score.
//!
//! These values are decorative: each country is the global score shifted by
//! a fixed cultural offset plus a little noise. Nothing here is geolocated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest value a region can report.
pub const FLOOR: f64 = 10.0;
/// Highest value a region can report.
pub const CEILING: f64 = 90.0;
/// Jitter is drawn from `[-JITTER_SPAN, JITTER_SPAN]`.
pub const JITTER_SPAN: f64 = 5.0;
/// Synthetic post counts are drawn from this range.
pub const POST_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=15;

/// Every region reported, with its fixed offset from the global score.
pub const REGIONS: &[(&str, f64)] = &[
    // North America
    ("United States", -1.0),
    ("Canada", 12.0),
    ("Mexico", 0.0),
    // South America
    ("Brazil", 3.0),
    ("Argentina", -6.0),
    ("Chile", 4.0),
    ("Colombia", -2.0),
    ("Peru", -4.0),
    ("Venezuela", -20.0),
    ("Uruguay", 8.0),
    ("Ecuador", -3.0),
    // Europe
    ("United Kingdom", 5.0),
    ("Germany", 8.0),
    ("France", 4.0),
    ("Italy", -2.0),
    ("Spain", 1.0),
    ("Netherlands", 15.0),
    ("Sweden", 18.0),
    ("Norway", 20.0),
    ("Finland", 16.0),
    ("Denmark", 22.0),
    ("Belgium", 6.0),
    ("Switzerland", 17.0),
    ("Austria", 10.0),
    ("Poland", -3.0),
    ("Czech Republic", 2.0),
    ("Portugal", -1.0),
    ("Greece", -8.0),
    ("Russia", -15.0),
    ("Ukraine", -22.0),
    ("Turkey", -10.0),
    // Asia
    ("China", -12.0),
    ("Japan", -8.0),
    ("India", -8.0),
    ("South Korea", -10.0),
    ("Thailand", 6.0),
    ("Vietnam", -2.0),
    ("Indonesia", 0.0),
    ("Philippines", 2.0),
    ("Malaysia", 4.0),
    ("Singapore", 2.0),
    ("Taiwan", 0.0),
    ("Bangladesh", -12.0),
    ("Pakistan", -15.0),
    ("Iran", -18.0),
    ("Saudi Arabia", -3.0),
    ("Israel", -2.0),
    ("UAE", 5.0),
    ("Mongolia", -6.0),
    ("Kazakhstan", -10.0),
    // Africa
    ("South Africa", -5.0),
    ("Nigeria", -8.0),
    ("Egypt", -10.0),
    ("Kenya", -4.0),
    ("Morocco", -3.0),
    ("Ghana", 2.0),
    ("Ethiopia", -12.0),
    ("Tanzania", -6.0),
    ("Algeria", -8.0),
    ("Libya", -20.0),
    ("Tunisia", -6.0),
    ("Cameroon", -7.0),
    ("Uganda", -9.0),
    ("Zimbabwe", -18.0),
    // Oceania
    ("Australia", 11.0),
    ("New Zealand", 14.0),
    ("Papua New Guinea", -8.0),
    ("Fiji", 8.0),
    // Middle East
    ("Iraq", -25.0),
    ("Afghanistan", -30.0),
    ("Syria", -28.0),
    ("Jordan", -8.0),
    ("Lebanon", -15.0),
];

/// Fixed offset for `region`; unlisted regions get zero.
#[must_use]
pub fn offset(region: &str) -> f64 {
    REGIONS
        .iter()
        .find(|(name, _)| *name == region)
        .map_or(0.0, |&(_, offset)| offset)
}

/// Source of randomness for region synthesis.
pub trait Jitter: Send + Sync {
    /// A value in `[-JITTER_SPAN, JITTER_SPAN]`.
    fn jitter(&mut self) -> f64;

    /// A value in [`POST_COUNT_RANGE`].
    fn post_count(&mut self) -> u32;
}

/// Uniform jitter backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngJitter {
    rng: StdRng,
}

impl RngJitter {
    /// Reproducible jitter for simulations.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngJitter {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Jitter for RngJitter {
    fn jitter(&mut self) -> f64 {
        self.rng.random_range(-JITTER_SPAN..=JITTER_SPAN)
    }

    fn post_count(&mut self) -> u32 {
        self.rng.random_range(POST_COUNT_RANGE)
    }
}

/// Constant jitter for deterministic runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter {
    pub jitter: f64,
    pub post_count: u32,
}

impl Default for FixedJitter {
    fn default() -> Self {
        Self {
            jitter: 0.0,
            post_count: 1,
        }
    }
}

impl Jitter for FixedJitter {
    fn jitter(&mut self) -> f64 {
        self.jitter
    }

    fn post_count(&mut self) -> u32 {
        self.post_count
    }
}

/// One region's value from a single synthesis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionReading {
    pub name: &'static str,
    /// `[FLOOR, CEILING]`, one decimal.
    pub happiness: f64,
    /// Decorative; unrelated to real source activity.
    pub post_count: u32,
}

/// Derive a reading for every region from `base`.
///
/// `value = clamp(base + offset + jitter, FLOOR, CEILING)`, rounded to one
/// decimal. Jitter outside the allowed span is clamped into it.
pub fn synthesize(base: f64, jitter: &mut dyn Jitter) -> Vec<RegionReading> {
    REGIONS
        .iter()
        .map(|&(name, offset)| {
            let noise = jitter.jitter().clamp(-JITTER_SPAN, JITTER_SPAN);
            let value = (base + offset + noise).clamp(FLOOR, CEILING);
            RegionReading {
                name,
                happiness: (value * 10.0).round() / 10.0,
                post_count: jitter
                    .post_count()
                    .clamp(*POST_COUNT_RANGE.start(), *POST_COUNT_RANGE.end()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn region_names_are_unique() {
        let names: HashSet<&str> = REGIONS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), REGIONS.len());
    }

    #[test]
    fn unlisted_region_has_zero_offset() {
        assert_eq!(offset("Atlantis"), 0.0);
        assert_eq!(offset("Denmark"), 22.0);
        assert_eq!(offset("Afghanistan"), -30.0);
    }

    #[test]
    fn fixed_jitter_gives_exact_values() {
        let mut jitter = FixedJitter {
            jitter: 2.5,
            post_count: 7,
        };
        let readings = synthesize(50.0, &mut jitter);
        assert_eq!(readings.len(), REGIONS.len());

        let by_name = |name: &str| {
            readings
                .iter()
                .find(|r| r.name == name)
                .copied()
                .expect("region present")
        };
        assert_eq!(by_name("Denmark").happiness, 74.5);
        assert_eq!(by_name("Iraq").happiness, 27.5);
        assert_eq!(by_name("Mexico").happiness, 52.5);
        assert!(readings.iter().all(|r| r.post_count == 7));
    }

    #[test]
    fn extremes_clamp_to_bounds() {
        let mut high = FixedJitter {
            jitter: 5.0,
            post_count: 1,
        };
        assert!(synthesize(100.0, &mut high)
            .iter()
            .all(|r| r.happiness <= CEILING));

        let mut low = FixedJitter {
            jitter: -5.0,
            post_count: 1,
        };
        let readings = synthesize(0.0, &mut low);
        assert!(readings.iter().all(|r| r.happiness >= FLOOR));
        assert!(readings.iter().any(|r| r.happiness == FLOOR));
    }

    #[test]
    fn out_of_span_jitter_is_clamped() {
        let mut wild = FixedJitter {
            jitter: 40.0,
            post_count: 99,
        };
        let readings = synthesize(50.0, &mut wild);
        let mexico = readings.iter().find(|r| r.name == "Mexico").expect("mexico");
        assert_eq!(mexico.happiness, 55.0);
        assert_eq!(mexico.post_count, 15);
    }

    #[test]
    fn random_jitter_stays_in_bounds_across_bases() {
        let mut jitter = RngJitter::seeded(7);
        for base in 0..=100 {
            for reading in synthesize(f64::from(base), &mut jitter) {
                assert!(
                    (FLOOR..=CEILING).contains(&reading.happiness),
                    "{} at base {base}: {}",
                    reading.name,
                    reading.happiness
                );
                assert!(POST_COUNT_RANGE.contains(&reading.post_count));
            }
        }
    }
}
