use crate::placeholder::{
    PlaceholderContext, PlaceholderProvider, format_duration, format_number,
};
use crate::state::PlayerFlags;

const TOKENS: &[&str] = &[
    "player_name",
    "player_uuid",
    "player_displayname",
    "player_health",
    "player_max_health",
    "player_food",
    "player_saturation",
    "player_level",
    "player_exp",
    "player_total_exp",
    "player_x",
    "player_y",
    "player_z",
    "player_block_x",
    "player_block_y",
    "player_block_z",
    "player_yaw",
    "player_pitch",
    "player_world",
    "player_gamemode",
    "player_ping",
    "player_playtime",
    "player_playtime_ticks",
    "player_is_flying",
    "player_is_sneaking",
    "player_is_sprinting",
    "player_is_op",
];

/// Live player state: identity, vitals, position, mode and status flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerProvider;

impl PlaceholderProvider for PlayerProvider {
    fn identifier(&self) -> &'static str {
        "player"
    }

    fn resolve(&self, token: &str, ctx: &PlaceholderContext<'_>) -> Option<String> {
        let field = token.strip_prefix("player_")?;
        let player = ctx.player()?;

        let value = match field {
            "name" => player.name(),
            "uuid" => player.id().to_string(),
            "displayname" => player.display_name(),
            "health" => format_number(player.health()),
            "max_health" => format_number(player.max_health()),
            "food" => player.food_level().to_string(),
            "saturation" => format_number(f64::from(player.saturation())),
            "level" => player.level().to_string(),
            "exp" => format_number(f64::from(player.exp_progress())),
            "total_exp" => player.total_experience().to_string(),
            "x" => format!("{:.2}", player.location().x),
            "y" => format!("{:.2}", player.location().y),
            "z" => format!("{:.2}", player.location().z),
            "block_x" => player.location().block_x().to_string(),
            "block_y" => player.location().block_y().to_string(),
            "block_z" => player.location().block_z().to_string(),
            "yaw" => format!("{:.2}", player.location().yaw),
            "pitch" => format!("{:.2}", player.location().pitch),
            "world" => player.location().world,
            "gamemode" => player.game_mode().to_string(),
            "ping" => player.ping_ms().to_string(),
            "playtime" => format_duration(player.playtime_ticks() / 20),
            "playtime_ticks" => player.playtime_ticks().to_string(),
            "is_flying" => player.flags().contains(PlayerFlags::FLYING).to_string(),
            "is_sneaking" => player.flags().contains(PlayerFlags::SNEAKING).to_string(),
            "is_sprinting" => player.flags().contains(PlayerFlags::SPRINTING).to_string(),
            "is_op" => player.flags().contains(PlayerFlags::OPERATOR).to_string(),
            _ => return None,
        };

        Some(value)
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestPlayer;

    #[test]
    fn reads_live_state() {
        let player = TestPlayer::new("Steve");
        let ctx = PlaceholderContext::new(Some(&player), None, &[]);

        assert_eq!(PlayerProvider.resolve("player_name", &ctx).as_deref(), Some("Steve"));
        assert_eq!(PlayerProvider.resolve("player_health", &ctx).as_deref(), Some("20"));
        assert_eq!(PlayerProvider.resolve("player_x", &ctx).as_deref(), Some("10.00"));
        assert_eq!(PlayerProvider.resolve("player_block_y", &ctx).as_deref(), Some("20"));
        assert_eq!(PlayerProvider.resolve("player_gamemode", &ctx).as_deref(), Some("survival"));
        assert_eq!(PlayerProvider.resolve("player_playtime", &ctx).as_deref(), Some("1m 30s"));
        assert_eq!(PlayerProvider.resolve("player_is_flying", &ctx).as_deref(), Some("false"));
        assert_eq!(PlayerProvider.resolve("player_is_op", &ctx).as_deref(), Some("true"));
    }

    #[test]
    fn detached_context_is_unresolved() {
        let ctx = PlaceholderContext::detached();
        assert_eq!(PlayerProvider.resolve("player_name", &ctx), None);
    }

    #[test]
    fn foreign_tokens_are_ignored() {
        let player = TestPlayer::new("Steve");
        let ctx = PlaceholderContext::new(Some(&player), None, &[]);
        assert_eq!(PlayerProvider.resolve("server_tps", &ctx), None);
        assert_eq!(PlayerProvider.resolve("player_unknown", &ctx), None);
    }
}
