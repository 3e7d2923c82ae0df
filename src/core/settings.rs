//! Game settings and partial updates.
//!
//! Settings are persisted alongside statistics and survive session resets.
//! UIs submit changes as a [`SettingsPatch`] so a settings panel can update
//! one field without knowing the rest.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long one handshake pump lasts. The resolution delay is
/// `handshake_count` of these.
pub const HANDSHAKE_UNIT: Duration = Duration::from_millis(500);

/// Persisted gameplay settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// First side to reach this score wins the session.
    pub winning_score: u32,

    /// Handshake pumps before an outcome is revealed.
    pub handshake_count: u32,

    /// Whether the UI should play sound effects.
    pub sound_enabled: bool,

    /// Multiplier the UI applies to animation durations.
    pub animation_speed: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            winning_score: 5,
            handshake_count: 3,
            sound_enabled: true,
            animation_speed: 1.0,
        }
    }
}

impl GameSettings {
    /// Create settings with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Set the handshake count.
    #[must_use]
    pub fn with_handshake_count(mut self, count: u32) -> Self {
        assert!(count > 0, "Handshake count must be positive");
        self.handshake_count = count;
        self
    }

    /// Enable or disable sound.
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// The full delay between starting a round and revealing its outcome.
    #[must_use]
    pub fn handshake_delay(&self) -> Duration {
        HANDSHAKE_UNIT * self.handshake_count
    }

    /// Apply a partial update in place.
    ///
    /// Absent fields are left untouched. Present but invalid values
    /// (zero counts, non-positive speeds) are ignored field-wise rather
    /// than rejecting the whole patch.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(score) = patch.winning_score {
            if score > 0 {
                self.winning_score = score;
            }
        }
        if let Some(count) = patch.handshake_count {
            if count > 0 {
                self.handshake_count = count;
            }
        }
        if let Some(enabled) = patch.sound_enabled {
            self.sound_enabled = enabled;
        }
        if let Some(speed) = patch.animation_speed {
            if speed > 0.0 {
                self.animation_speed = speed;
            }
        }
    }
}

/// Partial settings update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub winning_score: Option<u32>,
    pub handshake_count: Option<u32>,
    pub sound_enabled: Option<bool>,
    pub animation_speed: Option<f32>,
}

impl SettingsPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch the winning score.
    #[must_use]
    pub fn winning_score(mut self, score: u32) -> Self {
        self.winning_score = Some(score);
        self
    }

    /// Patch the handshake count.
    #[must_use]
    pub fn handshake_count(mut self, count: u32) -> Self {
        self.handshake_count = Some(count);
        self
    }

    /// Patch the sound flag.
    #[must_use]
    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = Some(enabled);
        self
    }

    /// Patch the animation speed multiplier.
    #[must_use]
    pub fn animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = Some(speed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.winning_score, 5);
        assert_eq!(settings.handshake_count, 3);
        assert!(settings.sound_enabled);
        assert_eq!(settings.animation_speed, 1.0);
    }

    #[test]
    fn test_builder() {
        let settings = GameSettings::new()
            .with_winning_score(3)
            .with_handshake_count(1)
            .with_sound(false);

        assert_eq!(settings.winning_score, 3);
        assert_eq!(settings.handshake_count, 1);
        assert!(!settings.sound_enabled);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_winning_score_rejected() {
        GameSettings::new().with_winning_score(0);
    }

    #[test]
    fn test_handshake_delay() {
        let settings = GameSettings::new().with_handshake_count(3);
        assert_eq!(settings.handshake_delay(), Duration::from_millis(1500));

        let quick = GameSettings::new().with_handshake_count(1);
        assert_eq!(quick.handshake_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_patch_updates_only_named_fields() {
        let mut settings = GameSettings::default();
        settings.apply(&SettingsPatch::new().winning_score(10));

        assert_eq!(settings.winning_score, 10);
        assert_eq!(settings.handshake_count, 3);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_patch_ignores_invalid_values() {
        let mut settings = GameSettings::default();
        settings.apply(
            &SettingsPatch::new()
                .winning_score(0)
                .animation_speed(-1.0)
                .sound_enabled(false),
        );

        // Invalid fields dropped, valid fields applied.
        assert_eq!(settings.winning_score, 5);
        assert_eq!(settings.animation_speed, 1.0);
        assert!(!settings.sound_enabled);
    }

    #[test]
    fn test_settings_serde() {
        let settings = GameSettings::new().with_winning_score(7);
        let json = serde_json::to_string(&settings).unwrap();
        let back: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
