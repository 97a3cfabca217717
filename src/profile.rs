//! Per-mode session profiles.
//!
//! One immutable record per entrainment mode, initialized once and read
//! concurrently by every render. Unknown modes resolve to a generic
//! default so the pipeline always completes.

use std::collections::HashMap;

use crate::chord::ChordQuality;

/// Immutable synthesis parameters for one entrainment mode.
#[derive(Debug, Clone)]
pub struct ModeProfile {
    pub name: &'static str,
    /// Root frequency of the chord progression in Hz.
    pub root_freq: f64,
    /// Chord qualities cycled over the session.
    pub progression: &'static [ChordQuality],
    /// Seconds per chord.
    pub chord_duration: f64,
    /// Target entrainment frequency in Hz.
    pub modulation_freq: f64,
    /// Amplitude modulation depth, 0.0..1.0.
    pub modulation_depth: f64,
}

lazy_static::lazy_static! {
    static ref PROFILES: HashMap<&'static str, ModeProfile> = {
        use ChordQuality::*;
        let mut m = HashMap::new();
        // Beta band. Minor and neutral colors, steady. Root A (220 Hz).
        m.insert("focus", ModeProfile {
            name: "focus",
            root_freq: 220.0,
            progression: &[Minor, Sus2, Minor, Sus2],
            chord_duration: 10.0,
            modulation_freq: 14.0,
            modulation_depth: 0.25,
        });
        // Alpha band. Major and lydian, dreamy. Root F (174.6 Hz).
        m.insert("relax", ModeProfile {
            name: "relax",
            root_freq: 174.6,
            progression: &[Major, Lydian, Major, Sus2],
            chord_duration: 15.0,
            modulation_freq: 10.0,
            modulation_depth: 0.35,
        });
        // Delta band. Deep drones, very slow changes. Root C (130.8 Hz).
        m.insert("sleep", ModeProfile {
            name: "sleep",
            root_freq: 130.8,
            progression: &[Sus2, Minor, Sus2, Minor],
            chord_duration: 20.0,
            modulation_freq: 2.0,
            modulation_depth: 0.5,
        });
        // Theta band. Calm, slow. Root D (146.8 Hz).
        m.insert("meditate", ModeProfile {
            name: "meditate",
            root_freq: 146.8,
            progression: &[Major, Sus2, Lydian, Sus2],
            chord_duration: 18.0,
            modulation_freq: 6.0,
            modulation_depth: 0.4,
        });
        m
    };

    static ref DEFAULT_PROFILE: ModeProfile = ModeProfile {
        name: "default",
        root_freq: 220.0,
        progression: &[ChordQuality::Major],
        chord_duration: 10.0,
        modulation_freq: 10.0,
        modulation_depth: 0.3,
    };
}

/// Look up the profile for a mode.
///
/// Unrecognized modes fall back to the default profile; this is not an
/// error, and rendering proceeds normally.
pub fn profile_for(mode: &str) -> &'static ModeProfile {
    PROFILES.get(mode).unwrap_or(&DEFAULT_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_mode_has_its_band() {
        assert_eq!(profile_for("focus").modulation_freq, 14.0);
        assert_eq!(profile_for("relax").modulation_freq, 10.0);
        assert_eq!(profile_for("sleep").modulation_freq, 2.0);
        assert_eq!(profile_for("meditate").modulation_freq, 6.0);
    }

    #[test]
    fn unknown_mode_maps_to_default() {
        let profile = profile_for("gamma");
        assert_eq!(profile.name, "default");
        assert_eq!(profile.root_freq, 220.0);
        assert_eq!(profile.progression, &[ChordQuality::Major]);
        assert_eq!(profile.modulation_freq, 10.0);
    }

    #[test]
    fn progressions_are_never_empty() {
        for mode in ["focus", "relax", "sleep", "meditate", "anything"] {
            assert!(!profile_for(mode).progression.is_empty());
        }
    }
}
