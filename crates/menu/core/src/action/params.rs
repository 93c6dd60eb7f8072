//! Parameter syntaxes for actions with structured values.
//!
//! Values are parsed *after* placeholder resolution, so numeric fields may be
//! driven by tokens (`teleport: %arg_0% 64 %arg_1%`). Malformed fields never
//! fail: they fall back to configured defaults or the player's current state.

use tracing::debug;

use crate::config::ActionDefaults;
use crate::env::TitleTimings;
use crate::state::Location;

// ============================================================================
// Title
// ============================================================================

/// `title|subtitle|fadeIn|stay|fadeOut`; every field after the title is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleSpec {
    pub title: String,
    pub subtitle: String,
    pub timings: TitleTimings,
}

impl TitleSpec {
    pub fn parse(value: &str, defaults: &ActionDefaults) -> Self {
        let mut parts = value.split('|');
        let title = parts.next().unwrap_or_default().to_string();
        let subtitle = parts.next().unwrap_or_default().to_string();
        let fade_in = parse_or(parts.next(), defaults.title_fade_in, "title fade-in");
        let stay = parse_or(parts.next(), defaults.title_stay, "title stay");
        let fade_out = parse_or(parts.next(), defaults.title_fade_out, "title fade-out");

        Self {
            title,
            subtitle,
            timings: TitleTimings::new(fade_in, stay, fade_out),
        }
    }
}

// ============================================================================
// Sound
// ============================================================================

/// `sound_id [volume] [pitch]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundSpec {
    pub sound: String,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundSpec {
    pub fn parse(value: &str, defaults: &ActionDefaults) -> Self {
        let mut parts = value.split_whitespace();
        let sound = parts.next().unwrap_or_default().to_string();
        let volume = parse_or(parts.next(), defaults.sound_volume, "sound volume");
        let pitch = parse_or(parts.next(), defaults.sound_pitch, "sound pitch");

        Self {
            sound,
            volume,
            pitch,
        }
    }
}

// ============================================================================
// Items
// ============================================================================

/// `item_id [amount]`; the amount defaults to one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub item: String,
    pub amount: u32,
}

impl ItemSpec {
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split_whitespace();
        let item = parts.next().unwrap_or_default().to_string();
        let amount = parse_or(parts.next(), 1, "item amount").max(1);
        Self { item, amount }
    }
}

// ============================================================================
// Teleport
// ============================================================================

/// One axis of a teleport target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coordinate {
    Absolute(f64),
    /// `~` or `~delta`, relative to the current position.
    Relative(f64),
}

impl Coordinate {
    /// Parses one axis; unparsable text keeps the current coordinate.
    pub fn parse(text: &str) -> Self {
        if let Some(delta) = text.strip_prefix('~') {
            if delta.is_empty() {
                return Coordinate::Relative(0.0);
            }
            return match delta.parse::<f64>() {
                Ok(d) if d.is_finite() => Coordinate::Relative(d),
                _ => {
                    debug!(target: "menu::actions", axis = text, "unparsable relative coordinate");
                    Coordinate::Relative(0.0)
                }
            };
        }

        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Coordinate::Absolute(v),
            _ => {
                debug!(target: "menu::actions", axis = text, "unparsable coordinate");
                Coordinate::Relative(0.0)
            }
        }
    }

    pub fn apply(&self, current: f64) -> f64 {
        match *self {
            Coordinate::Absolute(v) => v,
            Coordinate::Relative(d) => current + d,
        }
    }
}

/// `x y z [yaw pitch]`; axes are independently absolute or relative.
///
/// Missing axes are treated as `~`. Rotation is kept unless both yaw and
/// pitch are given.
#[derive(Clone, Debug, PartialEq)]
pub struct TeleportSpec {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
    pub rotation: Option<(Coordinate, Coordinate)>,
}

impl TeleportSpec {
    pub fn parse(value: &str) -> Self {
        let parts: Vec<&str> = value.split_whitespace().collect();
        let axis = |i: usize| {
            parts
                .get(i)
                .map_or(Coordinate::Relative(0.0), |p| Coordinate::parse(p))
        };

        let rotation = match (parts.get(3), parts.get(4)) {
            (Some(yaw), Some(pitch)) => Some((Coordinate::parse(yaw), Coordinate::parse(pitch))),
            _ => None,
        };

        Self {
            x: axis(0),
            y: axis(1),
            z: axis(2),
            rotation,
        }
    }

    /// Target location when starting from `current`. The world never changes.
    pub fn apply(&self, current: &Location) -> Location {
        let mut target = current.clone();
        target.x = self.x.apply(current.x);
        target.y = self.y.apply(current.y);
        target.z = self.z.apply(current.z);
        if let Some((yaw, pitch)) = self.rotation {
            target.yaw = yaw.apply(f64::from(current.yaw)) as f32;
            target.pitch = pitch.apply(f64::from(current.pitch)) as f32;
        }
        target
    }
}

fn parse_or<T: std::str::FromStr>(field: Option<&str>, default: T, what: &str) -> T {
    match field.map(str::trim) {
        None | Some("") => default,
        Some(text) => text.parse().unwrap_or_else(|_| {
            debug!(target: "menu::actions", field = what, value = text, "using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Location {
        Location::new("world", 10.0, 20.0, 30.0)
    }

    #[test]
    fn relative_axes_offset_current_position() {
        let target = TeleportSpec::parse("~ ~5 ~").apply(&origin());
        assert_eq!((target.x, target.y, target.z), (10.0, 25.0, 30.0));
        assert_eq!(target.world, "world");
    }

    #[test]
    fn axes_mix_absolute_and_relative() {
        let target = TeleportSpec::parse("100 ~-4.5 -7").apply(&origin());
        assert_eq!((target.x, target.y, target.z), (100.0, 15.5, -7.0));
    }

    #[test]
    fn unparsable_axis_keeps_current_coordinate() {
        let target = TeleportSpec::parse("abc 64 ~x").apply(&origin());
        assert_eq!((target.x, target.y, target.z), (10.0, 64.0, 30.0));

        let target = TeleportSpec::parse("NaN inf 1").apply(&origin());
        assert_eq!((target.x, target.y, target.z), (10.0, 20.0, 1.0));
    }

    #[test]
    fn missing_axes_stay_put() {
        let target = TeleportSpec::parse("5").apply(&origin());
        assert_eq!((target.x, target.y, target.z), (5.0, 20.0, 30.0));
    }

    #[test]
    fn rotation_needs_both_angles() {
        let start = origin().with_rotation(90.0, 10.0);
        assert_eq!(TeleportSpec::parse("~ ~ ~ 45").apply(&start).yaw, 90.0);

        let target = TeleportSpec::parse("~ ~ ~ 45 ~-10").apply(&start);
        assert_eq!((target.yaw, target.pitch), (45.0, 0.0));
    }

    #[test]
    fn title_fills_missing_fields_from_defaults() {
        let defaults = ActionDefaults::default();
        let spec = TitleSpec::parse("Welcome|to the shop|5", &defaults);
        assert_eq!(spec.title, "Welcome");
        assert_eq!(spec.subtitle, "to the shop");
        assert_eq!(spec.timings, TitleTimings::new(5, 70, 20));

        let spec = TitleSpec::parse("Hi", &defaults);
        assert_eq!(spec.subtitle, "");
        assert_eq!(spec.timings, TitleTimings::new(10, 70, 20));
    }

    #[test]
    fn sound_volume_and_pitch_are_optional() {
        let defaults = ActionDefaults::default();
        let spec = SoundSpec::parse("ui.button.click 0.5", &defaults);
        assert_eq!(spec.sound, "ui.button.click");
        assert_eq!(spec.volume, 0.5);
        assert_eq!(spec.pitch, 1.0);

        let spec = SoundSpec::parse("ui.button.click loud 2", &defaults);
        assert_eq!((spec.volume, spec.pitch), (1.0, 2.0));
    }

    #[test]
    fn item_amount_defaults_to_one() {
        assert_eq!(ItemSpec::parse("diamond").amount, 1);
        assert_eq!(ItemSpec::parse("diamond 16").amount, 16);
        assert_eq!(ItemSpec::parse("diamond lots").amount, 1);
        assert_eq!(ItemSpec::parse("diamond 0").amount, 1);
    }
}
