//! General-use helpers shared by both vector types.

use crate::{Error, Result};

/// Returns `n` with negative zero replaced by positive zero.
pub(crate) fn normalize_zero(n: f64) -> f64 {
    if n == 0.0 { 0.0 } else { n }
}

/// Splits a parenthesized vector string into exactly `N` unsigned decimal
/// components.
///
/// Separators must be uniform across the string: either every separator is
/// `", "` or every separator is `","`. Components are limited to digits and
/// dots, so signed and exponential values are rejected.
pub(crate) fn components<const N: usize>(text: &str) -> Result<[f64; N]> {
    let body = text
        .strip_prefix('(')
        .and_then(|body| body.strip_suffix(')'))
        .ok_or_else(|| Error::MissingParentheses(text.to_string()))?;
    let parts: Vec<&str> = body.split(", ").collect();
    let parts = if parts.len() == N {
        parts
    } else {
        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() != N {
            return Err(Error::ComponentCount {
                expected: N,
                found: parts.len(),
            });
        }
        parts
    };
    let mut components = [0.0; N];
    for (component, part) in components.iter_mut().zip(parts) {
        *component = parse_component(part)?;
    }
    Ok(components)
}

fn parse_component(part: &str) -> Result<f64> {
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
        return Err(Error::InvalidComponent(part.to_string()));
    }
    part.parse().map_err(|source| Error::UnparseableComponent {
        raw: part.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_drops_the_sign() {
        assert!(normalize_zero(-0.0).is_sign_positive());
        assert!(normalize_zero(0.0).is_sign_positive());
        assert_eq!(1.5, normalize_zero(1.5));
        assert_eq!(-1.5, normalize_zero(-1.5));
    }

    #[test]
    fn components_comma_space() {
        assert_eq!([1.0, 2.0], components::<2>("(1, 2)").unwrap());
        assert_eq!([1.0, 2.0, 3.0], components::<3>("(1, 2, 3)").unwrap());
    }

    #[test]
    fn components_comma_only() {
        assert_eq!([1.0, 2.0], components::<2>("(1,2)").unwrap());
        assert_eq!([1.0, 2.0, 3.0], components::<3>("(1,2,3)").unwrap());
    }

    #[test]
    fn components_fractional() {
        assert_eq!([1.5, 0.25], components::<2>("(1.5, .25)").unwrap());
    }

    #[test]
    fn components_mixed_separators() {
        assert!(matches!(
            components::<3>("(1, 2,3)"),
            Err(Error::InvalidComponent(_))
        ));
        assert!(matches!(
            components::<3>("(1,2, 3)"),
            Err(Error::InvalidComponent(_))
        ));
    }

    #[test]
    fn components_missing_parentheses() {
        assert!(matches!(
            components::<2>("1, 2"),
            Err(Error::MissingParentheses(_))
        ));
        assert!(matches!(
            components::<2>("(1, 2"),
            Err(Error::MissingParentheses(_))
        ));
    }

    #[test]
    fn components_wrong_count() {
        assert_eq!(
            Err(Error::ComponentCount {
                expected: 2,
                found: 3,
            }),
            components::<2>("(1, 2, 3)")
        );
        assert_eq!(
            Err(Error::ComponentCount {
                expected: 3,
                found: 2,
            }),
            components::<3>("(1, 2)")
        );
    }

    #[test]
    fn components_reject_sign_and_exponent() {
        assert!(matches!(
            components::<2>("(-1, 2)"),
            Err(Error::InvalidComponent(_))
        ));
        assert!(matches!(
            components::<2>("(1e3, 2)"),
            Err(Error::InvalidComponent(_))
        ));
    }

    #[test]
    fn components_reject_digit_dot_gibberish() {
        assert!(matches!(
            components::<2>("(1.2.3, 4)"),
            Err(Error::UnparseableComponent { .. })
        ));
        assert!(matches!(
            components::<2>("(., 4)"),
            Err(Error::UnparseableComponent { .. })
        ));
    }
}
