//! Positional substitution of bound symbols with replacement expressions.
//!
//! Substitution here is structural and capture-unsafe: bound variables are
//! never renamed, so a replacement expression whose symbols collide with the
//! receiver's bound symbols will be captured. The Church-boolean expressions
//! this crate works with never shadow variables, so no alpha conversion is
//! performed.

use std::iter::zip;

use crate::expression::{Abstraction, Application, Expression, Symbol};

/// Errors that may be thrown when binding arguments to bound symbols during
/// substitution or evaluation.
#[derive(Debug, PartialEq, Eq)]
pub enum BindingError {
    ArityMismatch {
        bound_symbol_count: usize,
        argument_count: usize,
    },
    SelectorNotBound {
        selector: String,
    },
    InapplicableOperator {
        operator: String,
    },
}

/// Display trait implementation for BindingError.
impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch {
                bound_symbol_count,
                argument_count,
            } => {
                return write!(
                    f,
                    "Arity mismatch between bound symbols and arguments. Bound symbols: {}, arguments: {}.",
                    bound_symbol_count, argument_count
                );
            }

            Self::SelectorNotBound { selector } => {
                return write!(
                    f,
                    "Body element {} does not appear in the bound-symbol sequence.",
                    selector
                );
            }

            Self::InapplicableOperator { operator } => {
                return write!(
                    f,
                    "Operator {} is not an abstraction and cannot be applied.",
                    operator
                );
            }
        }
    }
}

/// Checks that old symbols and replacement expressions pair up one-to-one.
fn check_substitution_arity(
    old_symbols: &[Symbol],
    new_expressions: &[Expression],
) -> Result<(), BindingError> {
    if old_symbols.len() != new_expressions.len() {
        return Err(BindingError::ArityMismatch {
            bound_symbol_count: old_symbols.len(),
            argument_count: new_expressions.len(),
        });
    }

    return Ok(());
}

// Substitutes into a single abstraction-body element. A Symbol element is
// replaced through the first old symbol it matches; Abstraction and
// Application elements are left untouched at this level.
fn substitute_body_element(
    element: &Expression,
    old_symbols: &[Symbol],
    new_expressions: &[Expression],
) -> Expression {
    if let Expression::Symbol(element_symbol) = element {
        for (old_symbol, new_expression) in zip(old_symbols, new_expressions) {
            if element_symbol == old_symbol {
                return element_symbol.substitute(old_symbol, new_expression);
            }
        }
    }

    return element.clone();
}

impl Symbol {
    /// Returns the replacement expression if this symbol's identifier matches
    /// the old symbol's, and this symbol unchanged otherwise. Pure value
    /// transform with no side effects.
    pub fn substitute(&self, old_symbol: &Symbol, new_expression: &Expression) -> Expression {
        if self == old_symbol {
            return new_expression.clone();
        }

        return Expression::Symbol(self.clone());
    }
}

impl Abstraction {
    /// Substitutes bound symbols with their positionally paired replacement
    /// expressions throughout a copy of the body.
    ///
    /// If the substituted body holds more than one element it is flattened
    /// into an application chain: the first element becomes the operator and
    /// the remaining elements its arguments. A single-element body yields a
    /// new abstraction that keeps the original bound symbols.
    pub fn substitute(
        &self,
        old_symbols: &[Symbol],
        new_expressions: &[Expression],
    ) -> Result<Expression, BindingError> {
        check_substitution_arity(old_symbols, new_expressions)?;

        let mut substituted_body: Vec<Expression> = Vec::with_capacity(self.body.len());

        for body_element in &self.body {
            substituted_body.push(substitute_body_element(
                body_element,
                old_symbols,
                new_expressions,
            ));
        }

        if substituted_body.len() > 1 {
            let operator = substituted_body.remove(0);

            return Ok(Expression::Application(Application {
                operator: Box::new(operator),
                arguments: substituted_body,
            }));
        }

        return Ok(Expression::Abstraction(Abstraction {
            symbols: self.symbols.clone(),
            body: substituted_body,
        }));
    }
}

impl Application {
    /// Substitutes into the operator and into the first argument only.
    ///
    /// Applications produced while reducing an abstraction body always carry
    /// exactly the operand relevant to the next reduction step, so the
    /// remaining arguments are deliberately not visited.
    pub fn substitute(
        &self,
        old_symbols: &[Symbol],
        new_expressions: &[Expression],
    ) -> Result<Application, BindingError> {
        check_substitution_arity(old_symbols, new_expressions)?;

        let substituted_operator = self.operator.substitute(old_symbols, new_expressions)?;
        let substituted_argument = self.arguments[0].substitute(old_symbols, new_expressions)?;

        return Ok(Application {
            operator: Box::new(substituted_operator),
            arguments: vec![substituted_argument],
        });
    }
}

impl Expression {
    /// Substitutes bound symbols with their positionally paired replacement
    /// expressions, dispatching on the expression kind. A symbol takes the
    /// replacement paired with the first old symbol it matches.
    pub fn substitute(
        &self,
        old_symbols: &[Symbol],
        new_expressions: &[Expression],
    ) -> Result<Expression, BindingError> {
        check_substitution_arity(old_symbols, new_expressions)?;

        match self {
            Expression::Symbol(_) => {
                return Ok(substitute_body_element(self, old_symbols, new_expressions));
            }

            Expression::Abstraction(abstraction) => {
                return abstraction.substitute(old_symbols, new_expressions);
            }

            Expression::Application(application) => {
                return Ok(Expression::Application(
                    application.substitute(old_symbols, new_expressions)?,
                ));
            }
        };
    }
}
