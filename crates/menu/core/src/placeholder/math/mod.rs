//! Arithmetic evaluator behind `%math_...%` placeholders.
//!
//! A math token is either a bare expression (`5+3*2`) or a single top-level
//! function call (`round(10/3)`, `max(1,2,3)`). Parsing and evaluation happen
//! in one recursive-descent pass; there are no variables, no scientific
//! notation and no hexadecimal literals.

mod error;
mod functions;
mod parser;

pub use error::MathError;
pub use parser::evaluate;

use rand::Rng;

use super::format_number;

/// Evaluates a math token body: a function call or a bare expression.
pub fn evaluate_token<R: Rng>(input: &str, rng: &mut R) -> Result<f64, MathError> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    match functions::split_call(&stripped) {
        Some((name, inner)) => functions::call(name, inner, rng),
        None => evaluate(&stripped),
    }
}

/// Evaluates and formats for display; any failure renders as `"0"`.
pub fn render(input: &str) -> String {
    match evaluate_token(input, &mut rand::thread_rng()) {
        Ok(value) => format_number(value),
        Err(error) => {
            tracing::debug!(
                target: "menu::placeholder",
                expression = input,
                error = %error,
                "math expression failed, rendering 0"
            );
            "0".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_documented_examples() {
        assert_eq!(render("5+3"), "8");
        assert_eq!(render("10/2"), "5");
        assert_eq!(render("2*3+4"), "10");
        assert_eq!(render("(2+3)*4"), "20");
        assert_eq!(render("-2^2"), "4");
        assert_eq!(render("10/4"), "2.50");
        assert_eq!(render("1/8"), "0.13");
    }

    #[test]
    fn malformed_input_renders_zero() {
        assert_eq!(render("2+"), "0");
        assert_eq!(render("(1+2"), "0");
        assert_eq!(render("abc"), "0");
        assert_eq!(render(""), "0");
    }

    #[test]
    fn runaway_nesting_renders_zero() {
        let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
        assert_eq!(render(&parens), "0");
        assert_eq!(render(&format!("{}1", "-".repeat(20_000))), "0");
        assert_eq!(render(&format!("round({parens})")), "0");
    }

    #[test]
    fn functions_and_spacing() {
        assert_eq!(render("round( 10 / 3 )"), "3");
        assert_eq!(render("max(1, 7, 3)"), "7");
        assert_eq!(render("1/0"), "Infinity");
    }
}
