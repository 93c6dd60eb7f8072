//! Template tokenizer and provider dispatch.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{trace, warn};

use super::providers::{
    ArgumentsProvider, DateTimeProvider, MathProvider, PlayerProvider, ServerProvider,
    SessionProvider,
};
use super::{PlaceholderContext, PlaceholderProvider};
use crate::config::PlaceholderConfig;
use crate::env::{ServerOracle, TickSource};

/// Token claimed by more than one registered provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenOverlap {
    pub token: &'static str,
    /// Provider registered first; it wins at resolution time.
    pub winner: &'static str,
    /// Provider that will never see this token.
    pub shadowed: &'static str,
}

/// Resolves `%token%` placeholders against an ordered provider list.
///
/// # Resolution Rules
///
/// - Tokens are the text between two markers, never containing a marker
/// - Token text is lower-cased before dispatch
/// - Providers are asked in registration order; first `Some` wins
/// - Unrecognized tokens stay in the output verbatim, markers included
/// - Single pass: substituted text is never re-scanned
pub struct PlaceholderManager {
    marker: char,
    providers: Vec<Arc<dyn PlaceholderProvider>>,
    overlaps: Vec<TokenOverlap>,
}

impl PlaceholderManager {
    /// Creates an empty manager using the `%` marker.
    pub fn new() -> Self {
        Self::with_config(&PlaceholderConfig::default())
    }

    pub fn with_config(config: &PlaceholderConfig) -> Self {
        Self {
            marker: config.marker,
            providers: Vec::new(),
            overlaps: Vec::new(),
        }
    }

    /// Creates a manager with the built-in providers registered in dispatch
    /// order: player, server, session, date, math, args.
    ///
    /// `tps_window` is the number of recent tick samples averaged for TPS.
    pub fn with_builtins(
        config: &PlaceholderConfig,
        server: Arc<dyn ServerOracle>,
        ticks: Arc<dyn TickSource>,
        tps_window: usize,
    ) -> Self {
        let mut manager = Self::with_config(config);
        manager.register(PlayerProvider);
        manager.register(ServerProvider::new(server, ticks).with_window(tps_window));
        manager.register(SessionProvider);
        manager.register(DateTimeProvider::new());
        manager.register(MathProvider);
        manager.register(ArgumentsProvider);
        manager
    }

    /// Appends a provider to the dispatch order.
    pub fn register(&mut self, provider: impl PlaceholderProvider + 'static) {
        self.register_arc(Arc::new(provider));
    }

    /// Appends a shared provider to the dispatch order.
    ///
    /// Token names already claimed by an earlier provider are recorded as
    /// overlaps and logged; the earlier provider keeps winning.
    pub fn register_arc(&mut self, provider: Arc<dyn PlaceholderProvider>) {
        for &token in provider.supported_tokens() {
            let winner = self
                .providers
                .iter()
                .find(|existing| existing.supported_tokens().contains(&token));

            if let Some(winner) = winner {
                warn!(
                    target: "menu::placeholder",
                    token,
                    winner = winner.identifier(),
                    shadowed = provider.identifier(),
                    "placeholder token claimed by more than one provider"
                );
                self.overlaps.push(TokenOverlap {
                    token,
                    winner: winner.identifier(),
                    shadowed: provider.identifier(),
                });
            }
        }

        self.providers.push(provider);
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Overlapping token claims detected at registration time.
    pub fn overlaps(&self) -> &[TokenOverlap] {
        &self.overlaps
    }

    /// Provider identifiers in dispatch order.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.identifier())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolves a single token (without markers).
    pub fn resolve_token(&self, token: &str, ctx: &PlaceholderContext<'_>) -> Option<String> {
        if token.is_empty() {
            return None;
        }

        let token = token.to_lowercase();
        self.providers.iter().find_map(|provider| {
            let value = provider.resolve(&token, ctx)?;
            trace!(
                target: "menu::placeholder",
                token = %token,
                provider = provider.identifier(),
                "resolved placeholder"
            );
            Some(value)
        })
    }

    /// Substitutes every recognized token in `template`.
    ///
    /// Returns the input unchanged (borrowed) when nothing was substituted.
    pub fn parse<'t>(&self, template: &'t str, ctx: &PlaceholderContext<'_>) -> Cow<'t, str> {
        let marker_len = self.marker.len_utf8();
        let mut out = String::new();
        let mut rest = template;
        let mut substituted = false;

        while let Some(open) = rest.find(self.marker) {
            let body = &rest[open + marker_len..];
            let Some(close) = body.find(self.marker) else {
                break;
            };
            let token = &body[..close];

            out.push_str(&rest[..open]);
            match self.resolve_token(token, ctx) {
                Some(value) => {
                    out.push_str(&value);
                    rest = &body[close + marker_len..];
                    substituted = true;
                }
                None => {
                    // Keep the opening marker and token; the closing marker may
                    // open the next token (`100% of %player_name%`).
                    out.push(self.marker);
                    out.push_str(token);
                    rest = &body[close..];
                }
            }
        }

        if !substituted {
            return Cow::Borrowed(template);
        }
        out.push_str(rest);
        Cow::Owned(out)
    }
}

impl Default for PlaceholderManager {
    fn default() -> Self {
        Self::new()
    }
}
