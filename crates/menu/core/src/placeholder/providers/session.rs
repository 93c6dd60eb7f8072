use chrono::Utc;

use crate::placeholder::{PlaceholderContext, PlaceholderProvider};

const TOKENS: &[&str] = &[
    "session_page",
    "session_menu",
    "session_open_seconds",
    "session_open_time",
    "session_data_<key>",
];

/// Open-menu state and the session data map (`session_data_<key>`).
///
/// Without a session, `session_page` renders `0` and `session_menu` renders
/// an empty string; every other token is left unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionProvider;

impl PlaceholderProvider for SessionProvider {
    fn identifier(&self) -> &'static str {
        "session"
    }

    fn resolve(&self, token: &str, ctx: &PlaceholderContext<'_>) -> Option<String> {
        let field = token.strip_prefix("session_")?;
        let session = ctx.session();

        match field {
            "page" => Some(session.map_or_else(|| "0".to_string(), |s| s.page().to_string())),
            "menu" => Some(session.map_or_else(String::new, |s| s.menu_id().to_string())),
            "open_seconds" => session.map(|s| s.open_seconds_at(Utc::now()).to_string()),
            "open_time" => session.map(|s| s.open_time().format("%Y-%m-%d %H:%M:%S").to_string()),
            _ => {
                let key = field.strip_prefix("data_")?;
                session?.data(key)
            }
        }
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::state::{MenuSession, PlayerId, SessionId};

    #[test]
    fn fallbacks_without_session() {
        let ctx = PlaceholderContext::detached();
        assert_eq!(SessionProvider.resolve("session_page", &ctx).as_deref(), Some("0"));
        assert_eq!(SessionProvider.resolve("session_menu", &ctx).as_deref(), Some(""));
        assert_eq!(SessionProvider.resolve("session_open_seconds", &ctx), None);
        assert_eq!(SessionProvider.resolve("session_data_color", &ctx), None);
    }

    #[test]
    fn reads_session_fields_and_data() {
        let session = MenuSession::opened_at(
            SessionId(4),
            PlayerId(1),
            "shop",
            Utc::now() - Duration::seconds(90),
        );
        session.set_page(2);
        session.set_data("color", "red");

        let ctx = PlaceholderContext::new(None, Some(&session), &[]);
        assert_eq!(SessionProvider.resolve("session_page", &ctx).as_deref(), Some("2"));
        assert_eq!(SessionProvider.resolve("session_menu", &ctx).as_deref(), Some("shop"));
        assert_eq!(SessionProvider.resolve("session_open_seconds", &ctx).as_deref(), Some("90"));
        assert_eq!(SessionProvider.resolve("session_data_color", &ctx).as_deref(), Some("red"));
        assert_eq!(SessionProvider.resolve("session_data_missing", &ctx), None);
    }
}
