// Integration tests for formula lowering

use cppgen::codegen::{MathOptions, PowerStyle};
use cppgen::{convert, Target};
use pretty_assertions::assert_eq;

fn wolfram(text: &str, power_style: PowerStyle, wrap_literal: bool) -> String {
    let target = Target::Wolfram(MathOptions {
        power_style,
        wrap_literal,
    });
    convert(text, &target).expect("conversion failed")
}

#[test]
fn test_basic_expression() {
    assert_eq!(
        wolfram("(-123! + 456 - 789 + 111 ^ 222 ^ 333 * 444) / 555", PowerStyle::PowFunction, false),
        "(((((-fact(123)) + 456) - 789) + (pow(111, pow(222, 333)) * 444)) / 555)"
    );
}

#[test]
fn test_expression_with_variables() {
    assert_eq!(
        wolfram("(-123 a ! + 456 b c ^ e ^ f * g) / 789 d >= 0", PowerStyle::PowMethod, false),
        "(((((-(123 * fact(a))) + (((456 * b) * c.pow(e.pow(f))) * g)) / 789) * d) >= 0)"
    );
}

#[test]
fn test_expression_with_implicit_product() {
    assert_eq!(
        wolfram("-1/2 (a - b - 1) (a + b)", PowerStyle::PowMethod, false),
        "(-(((1 / 2) * ((a - b) - 1)) * (a + b)))"
    );
}

#[test]
fn test_power_styles_on_right_associative_chain() {
    let input = "2 ^ 3 ^ n";
    assert_eq!(wolfram(input, PowerStyle::Hat, false), "(2 ^ (3 ^ n))");
    assert_eq!(wolfram(input, PowerStyle::Asterisk, false), "(2 ** (3 ** n))");
    assert_eq!(wolfram(input, PowerStyle::PowFunction, false), "pow(2, pow(3, n))");
    assert_eq!(wolfram(input, PowerStyle::PowMethod, false), "2.pow(3.pow(n))");
}

#[test]
fn test_wrap_literal_modular_arithmetic() {
    assert_eq!(
        wolfram("2 ^ n - 1 mod 998244353", PowerStyle::PowMethod, true),
        "((mint(2).pow(n) - 1) mod 998244353)"
    );
    assert_eq!(wolfram("3 - x", PowerStyle::Hat, true), "(mint(3) - x)");
    assert_eq!(
        wolfram("n (n + 1) / 2", PowerStyle::PowMethod, true),
        "((n * (n + 1)) / 2)"
    );
}

#[test]
fn test_subscripts_and_comparisons() {
    assert_eq!(
        wolfram("x_i + x_(i+1) <= 10", PowerStyle::Hat, false),
        "(((x_i) + (x_(i + 1))) <= 10)"
    );
}
