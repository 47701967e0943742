//! Data structures to represent untyped lambda-calculus expressions, and some
//! utility functions to display them.

/// Represents an atomic named placeholder; the leaf of the expression tree.
///
/// Two symbols are interchangeable iff their identifiers are equal, so all
/// comparisons go by identifier rather than by node identity.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Symbol {
    pub(crate) identifier: String,
}

/// Represents a lambda abstraction: an ordered sequence of bound symbols and
/// an ordered sequence of body elements.
///
/// The bound-symbol sequence defines positional binding: the i-th bound
/// symbol corresponds to the i-th argument supplied at application time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Abstraction {
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) body: Vec<Expression>,
}

/// Represents the application of an operator expression to an ordered
/// sequence of argument expressions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Application {
    pub(crate) operator: Box<Expression>,
    pub(crate) arguments: Vec<Expression>,
}

/// Represents a lambda-calculus expression of any kind.
///
/// The whole tree is a pure value structure: every node owns its children,
/// and substitution/evaluation build fresh trees instead of mutating shared
/// ones.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    Symbol(Symbol),
    Abstraction(Abstraction),
    Application(Application),
}

/// Errors that may be thrown when constructing an expression node.
#[derive(Debug, PartialEq, Eq)]
pub enum ConstructionError {
    EmptyBoundSymbolSequence,
    EmptyBodySequence,
    EmptyArgumentSequence,
}

/// Display trait implementation for ConstructionError.
impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBoundSymbolSequence => {
                return write!(f, "An abstraction requires at least one bound symbol.");
            }

            Self::EmptyBodySequence => {
                return write!(f, "An abstraction requires at least one body element.");
            }

            Self::EmptyArgumentSequence => {
                return write!(f, "An application requires at least one argument.");
            }
        }
    }
}

impl Symbol {
    /// Creates a symbol with the given identifier.
    pub fn new(identifier: &str) -> Symbol {
        return Symbol {
            identifier: String::from(identifier),
        };
    }

    /// The identifier this symbol was created with.
    pub fn identifier(&self) -> &str {
        return self.identifier.as_str();
    }
}

impl Abstraction {
    /// Creates an abstraction from its bound symbols and body elements. Both
    /// sequences must be non-empty; arity 1 is a sequence of length 1.
    pub fn new(symbols: Vec<Symbol>, body: Vec<Expression>) -> Result<Abstraction, ConstructionError> {
        if symbols.is_empty() {
            return Err(ConstructionError::EmptyBoundSymbolSequence);
        }

        if body.is_empty() {
            return Err(ConstructionError::EmptyBodySequence);
        }

        return Ok(Abstraction { symbols, body });
    }

    /// The ordered bound-symbol sequence.
    pub fn symbols(&self) -> &[Symbol] {
        return self.symbols.as_slice();
    }

    /// The ordered body-element sequence.
    pub fn body(&self) -> &[Expression] {
        return self.body.as_slice();
    }
}

impl Application {
    /// Creates an application of an operator to a non-empty argument
    /// sequence. The operator is usually an abstraction, or an expression
    /// expected to reduce to one.
    pub fn new(operator: Expression, arguments: Vec<Expression>) -> Result<Application, ConstructionError> {
        if arguments.is_empty() {
            return Err(ConstructionError::EmptyArgumentSequence);
        }

        return Ok(Application {
            operator: Box::new(operator),
            arguments,
        });
    }

    /// The operator expression.
    pub fn operator(&self) -> &Expression {
        return &self.operator;
    }

    /// The ordered argument sequence.
    pub fn arguments(&self) -> &[Expression] {
        return self.arguments.as_slice();
    }
}

impl From<Symbol> for Expression {
    fn from(value: Symbol) -> Self {
        return Self::Symbol(value);
    }
}

impl From<Abstraction> for Expression {
    fn from(value: Abstraction) -> Self {
        return Self::Abstraction(value);
    }
}

impl From<Application> for Expression {
    fn from(value: Application) -> Self {
        return Self::Application(value);
    }
}

// Helper function to produce a string representation of an Expression.
fn expression_to_string_helper(expression: &Expression, string_so_far: &mut String) {
    match expression {
        Expression::Symbol(symbol) => {
            string_so_far.push_str(symbol.identifier.as_str());
        }

        Expression::Abstraction(abstraction) => {
            abstraction_to_string_helper(abstraction, string_so_far);
        }

        Expression::Application(application) => {
            application_to_string_helper(application, string_so_far);
        }
    };
}

// Helper function to produce a string representation of an Abstraction:
// 'λ' followed by the concatenated bound-symbol names, '.', then the
// concatenated body elements.
fn abstraction_to_string_helper(abstraction: &Abstraction, string_so_far: &mut String) {
    string_so_far.push('λ');

    for bound_symbol in &abstraction.symbols {
        string_so_far.push_str(bound_symbol.identifier.as_str());
    }

    string_so_far.push('.');

    for body_element in &abstraction.body {
        expression_to_string_helper(body_element, string_so_far);
    }
}

// Helper function to produce a string representation of an Application: the
// parenthesized operator followed by the concatenated arguments.
fn application_to_string_helper(application: &Application, string_so_far: &mut String) {
    string_so_far.push('(');
    expression_to_string_helper(&application.operator, string_so_far);
    string_so_far.push(')');

    for argument in &application.arguments {
        expression_to_string_helper(argument, string_so_far);
    }
}

// Converts an expression to a string.
pub fn expression_to_string(expression: &Expression) -> String {
    let mut out_string = String::new();
    expression_to_string_helper(expression, &mut out_string);
    return out_string;
}

/// Display trait implementation for Symbol; renders the identifier verbatim.
impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.identifier);
    }
}

impl std::fmt::Display for Abstraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out_string = String::new();
        abstraction_to_string_helper(self, &mut out_string);
        return write!(f, "{}", out_string.as_str());
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out_string = String::new();
        application_to_string_helper(self, &mut out_string);
        return write!(f, "{}", out_string.as_str());
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", expression_to_string(self).as_str());
    }
}
