use crate::placeholder::math;
use crate::placeholder::{PlaceholderContext, PlaceholderProvider};

const TOKENS: &[&str] = &["math_<expression>"];

/// Arithmetic placeholders: `%math_5+3%`, `%math_round(10/3)%`.
///
/// Evaluation failures render as `"0"` so a typo in a menu never breaks
/// rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathProvider;

impl PlaceholderProvider for MathProvider {
    fn identifier(&self) -> &'static str {
        "math"
    }

    fn resolve(&self, token: &str, _ctx: &PlaceholderContext<'_>) -> Option<String> {
        let expression = token.strip_prefix("math_")?;
        Some(math::render(expression))
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_expressions_and_swallows_errors() {
        let ctx = PlaceholderContext::detached();
        assert_eq!(MathProvider.resolve("math_2*3+4", &ctx).as_deref(), Some("10"));
        assert_eq!(MathProvider.resolve("math_min(4,2)", &ctx).as_deref(), Some("2"));
        assert_eq!(MathProvider.resolve("math_2+", &ctx).as_deref(), Some("0"));
        assert_eq!(MathProvider.resolve("mathematics", &ctx), None);
    }
}
