/// Tunables for placeholder scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaceholderConfig {
    /// Character that opens and closes a placeholder token.
    pub marker: char,
}

impl PlaceholderConfig {
    pub const DEFAULT_MARKER: char = '%';

    pub fn new() -> Self {
        Self {
            marker: Self::DEFAULT_MARKER,
        }
    }

    pub fn with_marker(marker: char) -> Self {
        Self { marker }
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults applied when an action's textual value omits optional fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionDefaults {
    /// Title fade-in, in ticks.
    pub title_fade_in: u32,
    /// Title stay duration, in ticks.
    pub title_stay: u32,
    /// Title fade-out, in ticks.
    pub title_fade_out: u32,
    pub sound_volume: f32,
    pub sound_pitch: f32,
    /// Session data key that stores the menu to return to on `back`.
    pub previous_menu_key: String,
}

impl ActionDefaults {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TITLE_FADE_IN: u32 = 10;
    pub const DEFAULT_TITLE_STAY: u32 = 70;
    pub const DEFAULT_TITLE_FADE_OUT: u32 = 20;
    pub const DEFAULT_SOUND_VOLUME: f32 = 1.0;
    pub const DEFAULT_SOUND_PITCH: f32 = 1.0;
    pub const DEFAULT_PREVIOUS_MENU_KEY: &'static str = "previous_menu";

    pub fn new() -> Self {
        Self {
            title_fade_in: Self::DEFAULT_TITLE_FADE_IN,
            title_stay: Self::DEFAULT_TITLE_STAY,
            title_fade_out: Self::DEFAULT_TITLE_FADE_OUT,
            sound_volume: Self::DEFAULT_SOUND_VOLUME,
            sound_pitch: Self::DEFAULT_SOUND_PITCH,
            previous_menu_key: Self::DEFAULT_PREVIOUS_MENU_KEY.to_string(),
        }
    }
}

impl Default for ActionDefaults {
    fn default() -> Self {
        Self::new()
    }
}
