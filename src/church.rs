//! The fixed Church-encoded boolean constants: TRUE, FALSE, and the logical
//! operators built from them.
//!
//! Each constant is built once and cloned by consumers; the trees are pure
//! values, so clones are independent.

use lazy_static::lazy_static;

use crate::expression::{Abstraction, Expression, Symbol};

// Builds a two-symbol abstraction λxy.<selector>.
fn two_symbol_selector(selector_identifier: &str) -> Abstraction {
    return Abstraction::new(
        vec![Symbol::new("x"), Symbol::new("y")],
        vec![Expression::Symbol(Symbol::new(selector_identifier))],
    )
    .expect("Unable to construct a two-symbol selector abstraction.");
}

lazy_static! {
    /// TRUE = λxy.x: selects the first of two arguments.
    pub static ref TRUE: Abstraction = two_symbol_selector("x");

    /// FALSE = λxy.y: selects the second of two arguments.
    pub static ref FALSE: Abstraction = two_symbol_selector("y");

    /// AND = λxy.xyF: if x then y else FALSE.
    pub static ref AND: Abstraction = Abstraction::new(
        vec![Symbol::new("x"), Symbol::new("y")],
        vec![
            Expression::Symbol(Symbol::new("x")),
            Expression::Symbol(Symbol::new("y")),
            Expression::Abstraction(FALSE.clone()),
        ],
    )
    .expect("Unable to construct the AND abstraction.");

    /// OR = λxy.xTy: if x then TRUE else y.
    pub static ref OR: Abstraction = Abstraction::new(
        vec![Symbol::new("x"), Symbol::new("y")],
        vec![
            Expression::Symbol(Symbol::new("x")),
            Expression::Abstraction(TRUE.clone()),
            Expression::Symbol(Symbol::new("y")),
        ],
    )
    .expect("Unable to construct the OR abstraction.");

    /// NOT = λx.xFT: if x then FALSE else TRUE.
    pub static ref NOT: Abstraction = Abstraction::new(
        vec![Symbol::new("x")],
        vec![
            Expression::Symbol(Symbol::new("x")),
            Expression::Abstraction(FALSE.clone()),
            Expression::Abstraction(TRUE.clone()),
        ],
    )
    .expect("Unable to construct the NOT abstraction.");
}
