//! Named functions available at the top level of a math token.
//!
//! `round(x)`, `round(x, places)`, `floor(x)`, `ceil(x)`, `abs(x)`, `sqrt(x)`,
//! `pow(a, b)`, `min(a, ...)`, `max(a, ...)`, `random`, `random(min, max)`.
//! Each argument is a full arithmetic expression.

use rand::Rng;

use super::{MathError, parser};

/// Splits `name(args)` into its name and inner argument text.
///
/// Returns `None` unless the whole input is exactly one call: an alphabetic
/// name, an opening parenthesis, and its matching close as the last character.
/// A bare alphabetic word is treated as a zero-argument call.
pub(super) fn split_call(input: &str) -> Option<(&str, &str)> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some((input, ""));
    }

    let open = input.find('(')?;
    let name = &input[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) || !input.ends_with(')')
    {
        return None;
    }

    let inner = &input[open + 1..input.len() - 1];
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                // `max(1)+(2)`: the first call closes before the end
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }

    (depth == 0).then_some((name, inner))
}

/// Splits argument text at top-level commas.
fn split_args(inner: &str) -> Vec<&str> {
    if inner.is_empty() {
        return Vec::new();
    }

    let mut args = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                args.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(&inner[start..]);
    args
}

/// Evaluates the function `name` over the expression arguments in `inner`.
pub(super) fn call<R: Rng>(name: &str, inner: &str, rng: &mut R) -> Result<f64, MathError> {
    let args = split_args(inner)
        .into_iter()
        .map(parser::evaluate)
        .collect::<Result<Vec<f64>, MathError>>()?;

    match name.to_ascii_lowercase().as_str() {
        "round" => match args.as_slice() {
            [x] => Ok(round_half_up(*x)),
            [x, places] => {
                let factor = 10f64.powi(*places as i32);
                Ok(round_half_up(x * factor) / factor)
            }
            _ => Err(arity("round", "1 or 2", args.len())),
        },
        "floor" => unary("floor", &args).map(f64::floor),
        "ceil" => unary("ceil", &args).map(f64::ceil),
        "abs" => unary("abs", &args).map(f64::abs),
        "sqrt" => unary("sqrt", &args).map(f64::sqrt),
        "pow" => match args.as_slice() {
            [base, exponent] => Ok(base.powf(*exponent)),
            _ => Err(arity("pow", "2", args.len())),
        },
        "min" => args
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or_else(|| arity("min", "at least 1", 0)),
        "max" => args
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or_else(|| arity("max", "at least 1", 0)),
        "random" => match args.as_slice() {
            [] => Ok(rng.r#gen::<f64>()),
            [a, b] => Ok(random_between(*a, *b, rng)),
            _ => Err(arity("random", "0 or 2", args.len())),
        },
        _ => Err(MathError::UnknownFunction(name.to_string())),
    }
}

fn unary(function: &'static str, args: &[f64]) -> Result<f64, MathError> {
    match args {
        [x] => Ok(*x),
        _ => Err(arity(function, "1", args.len())),
    }
}

fn arity(function: &'static str, expected: &'static str, found: usize) -> MathError {
    MathError::Arity {
        function,
        expected,
        found,
    }
}

/// Rounds half-way cases towards positive infinity (`-2.5` -> `-2`).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Uniform value between the bounds: an inclusive integer when both bounds are
/// whole numbers, otherwise a real number in `[lo, hi)`.
fn random_between<R: Rng>(a: f64, b: f64, rng: &mut R) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if !lo.is_finite() || !hi.is_finite() || lo == hi {
        return lo;
    }
    if lo.fract() == 0.0 && hi.fract() == 0.0 {
        rng.gen_range(lo as i64..=hi as i64) as f64
    } else {
        rng.gen_range(lo..hi)
    }
}
