//! Drives repeated substitution until an expression is reduced to a value:
//! a symbol, an abstraction, or an application with nothing left to apply.
//!
//! Evaluation is a strictly terminating structural recursion for the
//! non-self-applicative expressions this crate targets. No step budget is
//! enforced, so a fixed-point combinator fed in by a caller would recurse
//! until the stack runs out.

use crate::expression::{Abstraction, Application, Expression};
use crate::substitution::BindingError;

impl Abstraction {
    /// Applies this abstraction to the given argument sequence and reduces
    /// the result as far as possible.
    ///
    /// A body with several elements is an application chain awaiting
    /// reduction: the arguments are substituted in and the result is
    /// evaluated again. A lone body element under several binders selects
    /// the argument at that binder's position, which is what makes the
    /// Church booleans work. A single binder with a single body element is
    /// plain one-for-one substitution.
    pub fn evaluate(&self, arguments: &[Expression]) -> Result<Expression, BindingError> {
        if self.body.len() > 1 {
            let substituted = self.substitute(&self.symbols, arguments)?;
            return substituted.evaluate();
        }

        if self.symbols.len() > 1 {
            return self.select_argument(arguments);
        }

        return self.body[0].substitute(&self.symbols, arguments);
    }

    // Positional selection: the lone body element must be one of the bound
    // symbols, and the argument at the matching position is the result.
    fn select_argument(&self, arguments: &[Expression]) -> Result<Expression, BindingError> {
        let selector_position = match &self.body[0] {
            Expression::Symbol(selector) => self
                .symbols
                .iter()
                .position(|bound_symbol| bound_symbol == selector),

            _ => None,
        };

        let selector_position = match selector_position {
            Some(position) => position,

            None => {
                return Err(BindingError::SelectorNotBound {
                    selector: self.body[0].to_string(),
                });
            }
        };

        match arguments.get(selector_position) {
            Some(argument) => {
                return Ok(argument.clone());
            }

            None => {
                return Err(BindingError::ArityMismatch {
                    bound_symbol_count: self.symbols.len(),
                    argument_count: arguments.len(),
                });
            }
        };
    }
}

impl Application {
    /// Reduces this application to a value.
    ///
    /// An application sitting in first-argument position is forced first,
    /// and the operator is then applied to that single reduced result; any
    /// other argument shape is passed to the operator unevaluated.
    pub fn evaluate(&self) -> Result<Expression, BindingError> {
        if let Expression::Application(nested_application) = &self.arguments[0] {
            let reduced_argument = nested_application.evaluate()?;
            return self.apply_operator(&[reduced_argument]);
        }

        return self.apply_operator(&self.arguments);
    }

    // Applies the operator to the given arguments. Only an abstraction can
    // be applied.
    fn apply_operator(&self, arguments: &[Expression]) -> Result<Expression, BindingError> {
        match &*self.operator {
            Expression::Abstraction(abstraction) => {
                return abstraction.evaluate(arguments);
            }

            other => {
                return Err(BindingError::InapplicableOperator {
                    operator: other.to_string(),
                });
            }
        };
    }
}

impl Expression {
    /// Reduces this expression to a value. Symbols and abstractions are
    /// already values and come back unchanged; applications are evaluated.
    pub fn evaluate(&self) -> Result<Expression, BindingError> {
        match self {
            Expression::Application(application) => {
                return application.evaluate();
            }

            already_reduced => {
                return Ok(already_reduced.clone());
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::church::{AND, FALSE, NOT, OR, TRUE};
    use crate::expression::Symbol;

    // Builds an application of a named Church operator to the given
    // arguments.
    fn apply(operator: &Abstraction, arguments: Vec<Expression>) -> Application {
        return Application::new(Expression::Abstraction(operator.clone()), arguments)
            .expect("Unable to construct the test application.");
    }

    // Evaluates the application and verifies the rendered result.
    fn run_evaluation_test(application: &Application, expected_rendering: &str) {
        let rendering_before_evaluation = format!("{}", application);

        let evaluated = application
            .evaluate()
            .expect("Unable to evaluate the test application.");

        assert_eq!(expected_rendering, format!("{}", evaluated).as_str());

        // Evaluation must not mutate the receiver.
        assert_eq!(rendering_before_evaluation, format!("{}", application));
    }

    // Test NOT, OR, and AND over all demo argument combinations.
    #[test]
    fn test_boolean_operators() {
        let truth = Expression::Abstraction(TRUE.clone());
        let falsehood = Expression::Abstraction(FALSE.clone());

        let applications_and_expected_renderings = vec![
            (apply(&NOT, vec![truth.clone()]), "λxy.y"),
            (apply(&NOT, vec![falsehood.clone()]), "λxy.x"),
            (apply(&OR, vec![truth.clone(), falsehood.clone()]), "λxy.x"),
            (
                apply(&OR, vec![falsehood.clone(), falsehood.clone()]),
                "λxy.y",
            ),
            (apply(&AND, vec![falsehood.clone(), truth.clone()]), "λxy.y"),
            (apply(&AND, vec![truth.clone(), truth.clone()]), "λxy.x"),
        ];

        for (application, expected_rendering) in applications_and_expected_renderings {
            run_evaluation_test(&application, expected_rendering);
        }
    }

    // Test that a nested application in argument position is forced before
    // the operator is applied: double and triple negation.
    #[test]
    fn test_nested_negations() {
        let truth = Expression::Abstraction(TRUE.clone());

        let not_true = apply(&NOT, vec![truth]);
        let not_not_true = apply(&NOT, vec![Expression::Application(not_true)]);
        run_evaluation_test(&not_not_true, "λxy.x");

        let not_not_not_true = apply(&NOT, vec![Expression::Application(not_not_true)]);
        run_evaluation_test(&not_not_not_true, "λxy.y");
    }

    // Test the positional-selection law: a lone body element equal to the
    // i-th bound symbol selects the i-th argument.
    #[test]
    fn test_positional_selection() {
        let bound_symbols = vec![Symbol::new("a"), Symbol::new("b"), Symbol::new("c")];

        let arguments = vec![
            Expression::Symbol(Symbol::new("first")),
            Expression::Symbol(Symbol::new("second")),
            Expression::Symbol(Symbol::new("third")),
        ];

        for (position, bound_symbol) in bound_symbols.iter().enumerate() {
            let selector = Abstraction::new(
                bound_symbols.clone(),
                vec![Expression::Symbol(bound_symbol.clone())],
            )
            .expect("Unable to construct the selector abstraction.");

            let selected = selector
                .evaluate(&arguments)
                .expect("Unable to evaluate the selector abstraction.");

            assert_eq!(arguments[position], selected);
        }
    }

    // Test that a single binder with a single body element substitutes the
    // argument directly: the identity abstraction.
    #[test]
    fn test_identity_abstraction() {
        let x = Symbol::new("x");
        let identity = Abstraction::new(vec![x.clone()], vec![Expression::Symbol(x)])
            .expect("Unable to construct the identity abstraction.");

        let evaluated = identity
            .evaluate(&[Expression::Abstraction(TRUE.clone())])
            .expect("Unable to evaluate the identity abstraction.");

        assert_eq!("λxy.x", format!("{}", evaluated).as_str());
    }

    // Test that a lone body element outside the bound-symbol sequence is
    // reported rather than silently coerced.
    #[test]
    fn test_selector_not_bound() {
        let stray = Abstraction::new(
            vec![Symbol::new("x"), Symbol::new("y")],
            vec![Expression::Symbol(Symbol::new("z"))],
        )
        .expect("Unable to construct the stray-selector abstraction.");

        let result = stray.evaluate(&[
            Expression::Abstraction(TRUE.clone()),
            Expression::Abstraction(FALSE.clone()),
        ]);

        assert_eq!(
            result,
            Err(BindingError::SelectorNotBound {
                selector: String::from("z"),
            })
        );
    }

    // Test that selecting past the end of the argument sequence is an arity
    // error.
    #[test]
    fn test_selection_arity_mismatch() {
        let result = FALSE.evaluate(&[Expression::Abstraction(TRUE.clone())]);

        assert_eq!(
            result,
            Err(BindingError::ArityMismatch {
                bound_symbol_count: 2,
                argument_count: 1,
            })
        );
    }

    // Test that applying a bare symbol is rejected.
    #[test]
    fn test_inapplicable_operator() {
        let application = Application::new(
            Expression::Symbol(Symbol::new("f")),
            vec![Expression::Symbol(Symbol::new("x"))],
        )
        .expect("Unable to construct the test application.");

        assert_eq!(
            application.evaluate(),
            Err(BindingError::InapplicableOperator {
                operator: String::from("f"),
            })
        );
    }
}
