//! A single radar: two concentric ranges and the set of contacts it currently senses.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_UFO_ON_GEOSCAPE;
use crate::error::SensorError;
use crate::types::ContactId;

/// Sensor attached to a base, installation or aircraft.
///
/// `range` is the first-detection radius, `tracking_range` the radius inside
/// which an already detected contact keeps being tracked. Both are
/// great-circle angles in degrees and `tracking_range >= range` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Radar {
    pub range: f64,
    pub tracking_range: f64,
    /// Level the ranges were last computed for (0 = not functional).
    pub level: u32,
    /// Contacts currently sensed, no duplicates, at most `MAX_UFO_ON_GEOSCAPE`.
    /// Rebuilt after loading, never persisted.
    #[serde(skip)]
    sensored: Vec<ContactId>,
}

impl Radar {
    /// A radar with zero range and nothing sensored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Range multiplier for a radar level: 1 at level 1, +`upgrade_factor` per level above.
    pub fn level_multiplier(level: u32, upgrade_factor: f64) -> f64 {
        1.0 + (level.saturating_sub(1)) as f64 * upgrade_factor
    }

    /// Recompute both ranges for `level`. Level 0 switches the radar off.
    ///
    /// Returns true if the detection range changed, in which case the
    /// caller owns rebuilding any coverage that depends on it.
    pub fn set_range(
        &mut self,
        base_range: f64,
        base_tracking_range: f64,
        level: u32,
        upgrade_factor: f64,
    ) -> bool {
        let old_range = self.range;
        self.level = level;
        if level == 0 {
            self.range = 0.0;
            self.tracking_range = 0.0;
        } else {
            let multiplier = Self::level_multiplier(level, upgrade_factor);
            self.range = (base_range * multiplier).max(0.0);
            self.tracking_range = (base_tracking_range * multiplier).max(self.range);
        }
        (self.range - old_range).abs() > f64::EPSILON
    }

    /// A radar with zero detection range never senses anything.
    pub fn is_operational(&self) -> bool {
        self.range > 0.0
    }

    /// Radius that applies to a contact: tracking range once it has been detected.
    pub fn applicable_range(&self, detected: bool) -> f64 {
        if detected {
            self.tracking_range
        } else {
            self.range
        }
    }

    /// Position of `id` in the sensored set, if present.
    pub fn is_sensored(&self, id: ContactId) -> Option<usize> {
        self.sensored.iter().position(|&c| c == id)
    }

    /// Start sensing `id`.
    pub fn add_contact(&mut self, id: ContactId) -> Result<(), SensorError> {
        if self.is_sensored(id).is_some() {
            return Err(SensorError::AlreadySensored(id));
        }
        if self.sensored.len() >= MAX_UFO_ON_GEOSCAPE {
            return Err(SensorError::Full {
                capacity: MAX_UFO_ON_GEOSCAPE,
            });
        }
        self.sensored.push(id);
        Ok(())
    }

    /// Stop sensing `id`. Returns false if it was not sensored.
    pub fn remove_contact(&mut self, id: ContactId) -> bool {
        match self.is_sensored(id) {
            Some(i) => {
                self.sensored.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// A contact left the geoscape.
    ///
    /// Drops `id` if present. When the contact was destroyed the registry
    /// compacts, so every sensored index above `id` shifts down by one.
    /// Returns true if `id` was sensored.
    pub fn notify_contact_removed(&mut self, id: ContactId, destroyed: bool) -> bool {
        let removed = self.remove_contact(id);
        if destroyed {
            for other in &mut self.sensored {
                if other.0 > id.0 {
                    other.0 -= 1;
                }
            }
        }
        removed
    }

    /// Drop every index outside `[0, count)`.
    pub fn retain_valid(&mut self, count: usize) -> usize {
        let before = self.sensored.len();
        self.sensored.retain(|id| id.index() < count);
        before - self.sensored.len()
    }

    pub fn sensored(&self) -> &[ContactId] {
        &self.sensored
    }

    pub fn sensored_count(&self) -> usize {
        self.sensored.len()
    }

    pub fn has_contacts(&self) -> bool {
        !self.sensored.is_empty()
    }

    pub fn clear_sensored(&mut self) {
        self.sensored.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RADAR_BASE_RANGE, RADAR_BASE_TRACKING_RANGE, RADAR_UPGRADE_FACTOR};
    use proptest::prelude::*;

    fn ids(radar: &Radar) -> Vec<u32> {
        let mut v: Vec<u32> = radar.sensored().iter().map(|c| c.0).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_new_radar_is_zeroed() {
        let radar = Radar::new();
        assert_eq!(radar.range, 0.0);
        assert_eq!(radar.tracking_range, 0.0);
        assert_eq!(radar.sensored_count(), 0);
        assert!(!radar.is_operational());
    }

    #[test]
    fn test_level_zero_disables_radar() {
        let mut radar = Radar::new();
        radar.set_range(24.0, 34.0, 2, RADAR_UPGRADE_FACTOR);
        assert!(radar.is_operational());
        let changed = radar.set_range(24.0, 34.0, 0, RADAR_UPGRADE_FACTOR);
        assert!(changed);
        assert_eq!(radar.range, 0.0);
        assert_eq!(radar.tracking_range, 0.0);
    }

    #[test]
    fn test_level_scaling_matches_upgrade_factor() {
        let mut radar = Radar::new();
        radar.set_range(
            RADAR_BASE_RANGE,
            RADAR_BASE_TRACKING_RANGE,
            3,
            RADAR_UPGRADE_FACTOR,
        );
        // 1 + 2 * 0.4 = 1.8
        assert!((radar.range - 24.0 * 1.8).abs() < 1e-9);
        assert!((radar.tracking_range - 34.0 * 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_set_range_reports_change_only_when_range_moves() {
        let mut radar = Radar::new();
        assert!(radar.set_range(10.0, 14.0, 1, 0.4));
        assert!(!radar.set_range(10.0, 14.0, 1, 0.4));
    }

    #[test]
    fn test_add_contact_rejects_duplicate() {
        let mut radar = Radar::new();
        assert!(radar.add_contact(ContactId(2)).is_ok());
        assert_eq!(
            radar.add_contact(ContactId(2)),
            Err(SensorError::AlreadySensored(ContactId(2)))
        );
        assert_eq!(radar.sensored_count(), 1);
        assert_eq!(radar.is_sensored(ContactId(2)), Some(0));
        assert_eq!(radar.is_sensored(ContactId(3)), None);
    }

    #[test]
    fn test_add_contact_fails_when_full() {
        let mut radar = Radar::new();
        for i in 0..MAX_UFO_ON_GEOSCAPE as u32 {
            radar.add_contact(ContactId(i)).unwrap();
        }
        assert_eq!(
            radar.add_contact(ContactId(99)),
            Err(SensorError::Full {
                capacity: MAX_UFO_ON_GEOSCAPE
            })
        );
        assert_eq!(radar.sensored_count(), MAX_UFO_ON_GEOSCAPE);
    }

    #[test]
    fn test_remove_missing_contact_is_noop() {
        let mut radar = Radar::new();
        radar.add_contact(ContactId(1)).unwrap();
        assert!(!radar.remove_contact(ContactId(5)));
        assert_eq!(ids(&radar), vec![1]);
        assert!(radar.remove_contact(ContactId(1)));
        assert!(!radar.has_contacts());
    }

    #[test]
    fn test_destroyed_contact_renumbers_higher_indices() {
        let mut radar = Radar::new();
        radar.add_contact(ContactId(1)).unwrap();
        radar.add_contact(ContactId(3)).unwrap();
        assert!(radar.notify_contact_removed(ContactId(1), true));
        assert_eq!(ids(&radar), vec![2]);
    }

    #[test]
    fn test_hidden_contact_does_not_renumber() {
        let mut radar = Radar::new();
        radar.add_contact(ContactId(1)).unwrap();
        radar.add_contact(ContactId(3)).unwrap();
        assert!(radar.notify_contact_removed(ContactId(1), false));
        assert_eq!(ids(&radar), vec![3]);
    }

    #[test]
    fn test_destroyed_contact_renumbers_even_when_not_held() {
        let mut radar = Radar::new();
        radar.add_contact(ContactId(0)).unwrap();
        radar.add_contact(ContactId(4)).unwrap();
        assert!(!radar.notify_contact_removed(ContactId(2), true));
        assert_eq!(ids(&radar), vec![0, 3]);
    }

    #[test]
    fn test_retain_valid_drops_stale_indices() {
        let mut radar = Radar::new();
        radar.add_contact(ContactId(0)).unwrap();
        radar.add_contact(ContactId(5)).unwrap();
        assert_eq!(radar.retain_valid(3), 1);
        assert_eq!(ids(&radar), vec![0]);
    }

    #[test]
    fn test_sensored_set_is_not_serialized() {
        let mut radar = Radar::new();
        radar.set_range(24.0, 34.0, 1, 0.4);
        radar.add_contact(ContactId(0)).unwrap();
        let json = serde_json::to_string(&radar).unwrap();
        let back: Radar = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range, 24.0);
        assert_eq!(back.sensored_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_range_monotonic_in_level(
            base in 0.1f64..90.0,
            extra in 0.0f64..30.0,
            l1 in 1u32..10,
            step in 1u32..10,
        ) {
            let mut a = Radar::new();
            let mut b = Radar::new();
            a.set_range(base, base + extra, l1, RADAR_UPGRADE_FACTOR);
            b.set_range(base, base + extra, l1 + step, RADAR_UPGRADE_FACTOR);
            prop_assert!(b.range > a.range);
        }

        #[test]
        fn prop_tracking_range_dominates(
            base in 0.0f64..90.0,
            tracking in 0.0f64..90.0,
            level in 1u32..10,
        ) {
            let mut radar = Radar::new();
            radar.set_range(base, tracking, level, RADAR_UPGRADE_FACTOR);
            prop_assert!(radar.tracking_range >= radar.range);
        }

        #[test]
        fn prop_add_is_idempotent(id in 0u32..8, repeats in 1usize..5) {
            let mut radar = Radar::new();
            for _ in 0..repeats {
                let _ = radar.add_contact(ContactId(id));
            }
            prop_assert_eq!(radar.sensored_count(), 1);
        }
    }
}
