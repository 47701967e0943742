//! Code to configure and run the Church-boolean demonstration: a fixed set
//! of named applications of NOT, OR, and AND, evaluated and rendered as a
//! report.

use clap::Parser;

use crate::church::{AND, FALSE, NOT, OR, TRUE};
use crate::expression::{Abstraction, Application, ConstructionError, Expression};
use crate::substitution::BindingError;

/// Config for the demo run. Instantiate via `DemoConfig::parse()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct DemoConfig {
    /// Run only the scenario with this name (e.g. "NOT TRUE"). Runs every
    /// scenario when omitted.
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Print the five Church constants before the scenario results.
    #[arg(long, default_value_t = false)]
    pub show_constants: bool,
}

/// Errors that may be thrown when running the demo.
#[derive(Debug)]
pub enum RunError {
    ConfigError(String),
    ConstructionError(ConstructionError),
    BindingError(BindingError),
}

/// Display trait implementation for RunError.
impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigError(config_err_string) => {
                return write!(f, "Demo configuration error: {}", config_err_string);
            }

            Self::ConstructionError(construction_error) => {
                return write!(f, "Expression construction error: {}", construction_error);
            }

            Self::BindingError(binding_error) => {
                return write!(f, "Binding error: {}", binding_error);
            }
        }
    }
}

/// Type conversions for errors.
impl From<ConstructionError> for RunError {
    fn from(value: ConstructionError) -> Self {
        return Self::ConstructionError(value);
    }
}

impl From<BindingError> for RunError {
    fn from(value: BindingError) -> Self {
        return Self::BindingError(value);
    }
}

/// A named boolean application to evaluate and report on.
pub struct DemoScenario {
    pub name: &'static str,
    pub application: Application,
}

// Applies a Church operator to the given arguments.
fn apply(
    operator: &Abstraction,
    arguments: Vec<Expression>,
) -> Result<Application, ConstructionError> {
    return Application::new(Expression::Abstraction(operator.clone()), arguments);
}

/// Builds the fixed scenario list: every NOT, OR, and AND combination of the
/// demonstration, including double and triple negation.
pub fn demo_scenarios() -> Result<Vec<DemoScenario>, ConstructionError> {
    let truth = Expression::Abstraction(TRUE.clone());
    let falsehood = Expression::Abstraction(FALSE.clone());

    let not_true = apply(&NOT, vec![truth.clone()])?;
    let not_false = apply(&NOT, vec![falsehood.clone()])?;
    let not_not_true = apply(&NOT, vec![Expression::Application(not_true.clone())])?;
    let not_not_not_true = apply(&NOT, vec![Expression::Application(not_not_true.clone())])?;
    let true_or_false = apply(&OR, vec![truth.clone(), falsehood.clone()])?;
    let false_or_false = apply(&OR, vec![falsehood.clone(), falsehood.clone()])?;
    let false_and_true = apply(&AND, vec![falsehood.clone(), truth.clone()])?;
    let true_and_true = apply(&AND, vec![truth.clone(), truth.clone()])?;

    return Ok(vec![
        DemoScenario {
            name: "NOT TRUE",
            application: not_true,
        },
        DemoScenario {
            name: "NOT FALSE",
            application: not_false,
        },
        DemoScenario {
            name: "NOT NOT TRUE",
            application: not_not_true,
        },
        DemoScenario {
            name: "NOT NOT NOT TRUE",
            application: not_not_not_true,
        },
        DemoScenario {
            name: "TRUE OR FALSE",
            application: true_or_false,
        },
        DemoScenario {
            name: "FALSE OR FALSE",
            application: false_or_false,
        },
        DemoScenario {
            name: "FALSE AND TRUE",
            application: false_and_true,
        },
        DemoScenario {
            name: "TRUE AND TRUE",
            application: true_and_true,
        },
    ]);
}

/// Runs the demo described by the given config and returns the report text.
pub fn run_demo(config: &DemoConfig) -> Result<String, RunError> {
    let mut report_lines: Vec<String> = Vec::new();

    if config.show_constants {
        report_lines.push(String::from("Church-encoded boolean constants:"));
        report_lines.push(format!("TRUE: {}", *TRUE));
        report_lines.push(format!("FALSE: {}", *FALSE));
        report_lines.push(format!("AND: {}", *AND));
        report_lines.push(format!("OR: {}", *OR));
        report_lines.push(format!("NOT: {}", *NOT));
        report_lines.push(String::new());
    }

    let scenarios = demo_scenarios()?;

    let selected_scenarios: Vec<&DemoScenario> = match &config.scenario {
        Some(scenario_name) => {
            let matching: Vec<&DemoScenario> = scenarios
                .iter()
                .filter(|scenario| scenario.name == scenario_name.as_str())
                .collect();

            if matching.is_empty() {
                return Err(RunError::ConfigError(format!(
                    "Unrecognized scenario name {}",
                    scenario_name
                )));
            }

            matching
        }

        None => scenarios.iter().collect(),
    };

    for scenario in selected_scenarios {
        let evaluated = scenario.application.evaluate()?;

        report_lines.push(format!(
            "{}: {} ==> {}",
            scenario.name, scenario.application, evaluated
        ));
    }

    return Ok(report_lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the full demo report against the renderings of the constants.
    #[test]
    fn test_run_demo_all_scenarios() {
        let config = DemoConfig {
            scenario: None,
            show_constants: false,
        };

        let expected_lines = vec![
            format!("NOT TRUE: ({}){} ==> {}", *NOT, *TRUE, *FALSE),
            format!("NOT FALSE: ({}){} ==> {}", *NOT, *FALSE, *TRUE),
            format!("NOT NOT TRUE: ({})({}){} ==> {}", *NOT, *NOT, *TRUE, *TRUE),
            format!(
                "NOT NOT NOT TRUE: ({})({})({}){} ==> {}",
                *NOT, *NOT, *NOT, *TRUE, *FALSE
            ),
            format!("TRUE OR FALSE: ({}){}{} ==> {}", *OR, *TRUE, *FALSE, *TRUE),
            format!(
                "FALSE OR FALSE: ({}){}{} ==> {}",
                *OR, *FALSE, *FALSE, *FALSE
            ),
            format!(
                "FALSE AND TRUE: ({}){}{} ==> {}",
                *AND, *FALSE, *TRUE, *FALSE
            ),
            format!("TRUE AND TRUE: ({}){}{} ==> {}", *AND, *TRUE, *TRUE, *TRUE),
        ];

        let report = run_demo(&config).expect("Unable to run the full demo.");

        assert_eq!(expected_lines.join("\n"), report);
    }

    // Test that a single named scenario produces exactly its own line.
    #[test]
    fn test_run_demo_single_scenario() {
        let config = DemoConfig {
            scenario: Some(String::from("NOT FALSE")),
            show_constants: false,
        };

        let report = run_demo(&config).expect("Unable to run the NOT FALSE scenario.");

        assert_eq!(
            format!("NOT FALSE: ({}){} ==> {}", *NOT, *FALSE, *TRUE),
            report
        );
    }

    // Test that an unknown scenario name is a config error.
    #[test]
    fn test_run_demo_unknown_scenario() {
        let config = DemoConfig {
            scenario: Some(String::from("XOR TRUE")),
            show_constants: false,
        };

        let result = run_demo(&config);

        assert!(matches!(result, Err(RunError::ConfigError(_))));
    }

    // Test that the constants block precedes the scenario results.
    #[test]
    fn test_run_demo_with_constants() {
        let config = DemoConfig {
            scenario: Some(String::from("TRUE AND TRUE")),
            show_constants: true,
        };

        let expected_lines = vec![
            String::from("Church-encoded boolean constants:"),
            format!("TRUE: {}", *TRUE),
            format!("FALSE: {}", *FALSE),
            format!("AND: {}", *AND),
            format!("OR: {}", *OR),
            format!("NOT: {}", *NOT),
            String::new(),
            format!("TRUE AND TRUE: ({}){}{} ==> {}", *AND, *TRUE, *TRUE, *TRUE),
        ];

        let report = run_demo(&config).expect("Unable to run the demo with constants.");

        assert_eq!(expected_lines.join("\n"), report);
    }
}
