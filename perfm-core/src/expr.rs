//! Infix → postfix compiler for the metric evaluator's interface
//! (SPEC_FULL.md §4.7): standard shunting-yard, `{+,-}` precedence 2,
//! `{*,/,%}` precedence 4, parentheses for grouping only, left-associative.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Ident(&'a str),
    Op(char),
    LParen,
    RParen,
}

fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 2,
        '*' | '/' | '%' => 4,
        _ => 0,
    }
}

fn is_op(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

fn tokenize(expr: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = expr.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '(' {
            tokens.push(Token::LParen);
            i += 1;
        } else if c == ')' {
            tokens.push(Token::RParen);
            i += 1;
        } else if is_op(c) {
            tokens.push(Token::Op(c));
            i += 1;
        } else {
            let start = i;
            while i < bytes.len() {
                let c = bytes[i] as char;
                if c.is_whitespace() || c == '(' || c == ')' || is_op(c) {
                    break;
                }
                i += 1;
            }
            tokens.push(Token::Ident(&expr[start..i]));
        }
    }
    tokens
}

/// Compile an infix metric expression into a space-delimited postfix
/// string. Identifiers are maximal runs of non-whitespace,
/// non-operator, non-parenthesis characters. Unbalanced parentheses fail
/// with [`Error::Parse`].
pub fn to_postfix(expr: &str) -> Result<String, Error> {
    let tokens = tokenize(expr);
    let mut output: Vec<&str> = Vec::new();
    let mut ops: Vec<Token> = Vec::new();

    for token in &tokens {
        match *token {
            Token::Ident(name) => output.push(name),
            Token::Op(op) => {
                while let Some(Token::Op(top)) = ops.last() {
                    if precedence(*top) >= precedence(op) {
                        ops.pop();
                        output.push(op_str(*top));
                    } else {
                        break;
                    }
                }
                ops.push(Token::Op(op));
            }
            Token::LParen => ops.push(Token::LParen),
            Token::RParen => {
                let mut found = false;
                while let Some(top) = ops.pop() {
                    match top {
                        Token::LParen => {
                            found = true;
                            break;
                        }
                        Token::Op(op) => output.push(op_str(op)),
                        Token::RParen => unreachable!(),
                    }
                }
                if !found {
                    return Err(Error::Parse {
                        path: None,
                        message: format!("unbalanced parentheses in expression `{expr}`"),
                    });
                }
            }
        }
    }

    while let Some(top) = ops.pop() {
        match top {
            Token::LParen | Token::RParen => {
                return Err(Error::Parse {
                    path: None,
                    message: format!("unbalanced parentheses in expression `{expr}`"),
                })
            }
            Token::Op(op) => output.push(op_str(op)),
        }
    }

    Ok(output.join(" "))
}

fn op_str(op: char) -> &'static str {
    match op {
        '+' => "+",
        '-' => "-",
        '*' => "*",
        '/' => "/",
        '%' => "%",
        _ => unreachable!(),
    }
}

/// Evaluate a postfix expression produced by [`to_postfix`] against a
/// name → value lookup. Only used by this crate's own tests to check the
/// compiler output, not exposed as a public metric-evaluation API (the
/// analyzer that consumes the real postfix form is out of scope).
#[cfg(test)]
fn eval_postfix(postfix: &str, lookup: impl Fn(&str) -> f64) -> f64 {
    let mut stack: Vec<f64> = Vec::new();
    for tok in postfix.split_whitespace() {
        match tok {
            "+" | "-" | "*" | "/" | "%" => {
                let b = stack.pop().unwrap();
                let a = stack.pop().unwrap();
                stack.push(match tok {
                    "+" => a + b,
                    "-" => a - b,
                    "*" => a * b,
                    "/" => a / b,
                    "%" => a % b,
                    _ => unreachable!(),
                });
            }
            ident => stack.push(lookup(ident)),
        }
    }
    stack.pop().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_multiplicative_precedence() {
        assert_eq!(to_postfix("a + b * c").unwrap(), "a b c * +");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(to_postfix("(a + b) * c").unwrap(), "a b + c *");
    }

    #[test]
    fn left_associative_same_precedence() {
        assert_eq!(to_postfix("a - b - c").unwrap(), "a b - c -");
    }

    #[test]
    fn unbalanced_parens_is_parse_error() {
        assert!(to_postfix("(a + b").is_err());
        assert!(to_postfix("a + b)").is_err());
    }

    #[test]
    fn matches_direct_evaluation_under_standard_precedence() {
        let lookup = |name: &str| -> f64 {
            match name {
                "a" => 2.0,
                "b" => 3.0,
                "c" => 4.0,
                _ => 0.0,
            }
        };
        let postfix = to_postfix("a + b * c").unwrap();
        let direct = 2.0 + 3.0 * 4.0;
        assert_eq!(eval_postfix(&postfix, lookup), direct);

        let postfix = to_postfix("(a + b) * c").unwrap();
        let direct = (2.0 + 3.0) * 4.0;
        assert_eq!(eval_postfix(&postfix, lookup), direct);
    }
}
