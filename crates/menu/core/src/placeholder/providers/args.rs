use crate::placeholder::{PlaceholderContext, PlaceholderProvider};

const TOKENS: &[&str] = &["args", "args_count", "arg_<index>"];

/// Positional arguments supplied by the triggering command or click.
///
/// `arg_<n>` is zero-based and stays unresolved when out of range.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgumentsProvider;

impl PlaceholderProvider for ArgumentsProvider {
    fn identifier(&self) -> &'static str {
        "args"
    }

    fn resolve(&self, token: &str, ctx: &PlaceholderContext<'_>) -> Option<String> {
        let args = ctx.args();
        match token {
            "args" => Some(args.join(" ")),
            "args_count" => Some(args.len().to_string()),
            _ => {
                let index: usize = token.strip_prefix("arg_")?.parse().ok()?;
                args.get(index).cloned()
            }
        }
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}
