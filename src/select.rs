//! Output selectors.
//!
//! A selector decides which part of a call's result is printed:
//!
//! - `*` prints the whole response
//! - `NodeDetails.InstanceStatus.Status` walks into the response; numeric
//!   segments index arrays (`TrainingJobSummaries.0.TrainingJobName`)
//! - `^TrainingJobName` prints the value of an input parameter instead of
//!   anything from the response

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Parsed output selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The complete response
    Full,
    /// A property path into the response
    Property(Vec<String>),
    /// An input parameter, echoed back
    Echo(String),
}

impl Selector {
    /// Parse a selector expression.
    pub fn parse(expr: &str) -> Result<Self> {
        let expr = expr.trim();

        if expr.is_empty() {
            return Err(Error::invalid_selector(expr, "selector is empty"));
        }

        if expr == "*" {
            return Ok(Selector::Full);
        }

        if let Some(param) = expr.strip_prefix('^') {
            if param.is_empty() || param.contains('.') {
                return Err(Error::invalid_selector(
                    expr,
                    "expected '^' followed by a single parameter name",
                ));
            }
            return Ok(Selector::Echo(param.to_string()));
        }

        let segments: Vec<String> = expr.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || s == "*" || s.starts_with('^')) {
            return Err(Error::invalid_selector(
                expr,
                "property paths are dot-separated names or array indexes",
            ));
        }

        Ok(Selector::Property(segments))
    }

    /// Check that an echo selector names a parameter the operation accepts.
    pub fn validate(&self, operation: &str, parameter_names: &[&str]) -> Result<()> {
        match self {
            Selector::Echo(param) if !parameter_names.contains(&param.as_str()) => {
                Err(Error::invalid_selector(
                    self.to_string(),
                    format!(
                        "{operation} has no parameter '{param}' (expected one of: {})",
                        parameter_names.join(", ")
                    ),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Project a response.
    ///
    /// `parameters` are the supplied inputs keyed by service member name.
    /// Paths that do not exist in the response resolve to null.
    pub fn apply(&self, response: &Value, parameters: &Value) -> Value {
        match self {
            Selector::Full => response.clone(),
            Selector::Echo(param) => parameters.get(param).cloned().unwrap_or(Value::Null),
            Selector::Property(path) => path
                .iter()
                .try_fold(response, |current, segment| step(current, segment))
                .cloned()
                .unwrap_or(Value::Null),
        }
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Full => write!(f, "*"),
            Selector::Property(path) => write!(f, "{}", path.join(".")),
            Selector::Echo(param) => write!(f, "^{param}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response() -> Value {
        json!({
            "NodeDetails": {
                "InstanceId": "i-0abc",
                "InstanceStatus": {"Status": "Running"}
            },
            "TrainingJobSummaries": [
                {"TrainingJobName": "job-1"},
                {"TrainingJobName": "job-2"}
            ]
        })
    }

    #[test]
    fn test_parse() {
        assert_eq!(Selector::parse("*").unwrap(), Selector::Full);
        assert_eq!(
            Selector::parse("^TrainingJobName").unwrap(),
            Selector::Echo("TrainingJobName".into())
        );
        assert_eq!(
            Selector::parse("NodeDetails.InstanceId").unwrap(),
            Selector::Property(vec!["NodeDetails".into(), "InstanceId".into()])
        );
        assert_eq!(
            "ClusterArn".parse::<Selector>().unwrap(),
            Selector::Property(vec!["ClusterArn".into()])
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "  ", "^", "^A.B", "A..B", "A.*", ".A"] {
            let err = Selector::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidSelector { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_display_round_trips_expression() {
        for expr in ["*", "^NodeId", "NodeDetails.InstanceStatus.Status"] {
            assert_eq!(Selector::parse(expr).unwrap().to_string(), expr);
        }
    }

    #[test]
    fn test_full_returns_response_unchanged() {
        let selected = Selector::Full.apply(&response(), &json!({}));
        assert_eq!(selected, response());
    }

    #[test]
    fn test_property_returns_exactly_that_property() {
        let selector = Selector::parse("NodeDetails").unwrap();
        assert_eq!(
            selector.apply(&response(), &json!({})),
            json!({"InstanceId": "i-0abc", "InstanceStatus": {"Status": "Running"}})
        );

        let nested = Selector::parse("NodeDetails.InstanceStatus.Status").unwrap();
        assert_eq!(nested.apply(&response(), &json!({})), json!("Running"));
    }

    #[test]
    fn test_property_indexes_arrays() {
        let selector = Selector::parse("TrainingJobSummaries.1.TrainingJobName").unwrap();
        assert_eq!(selector.apply(&response(), &json!({})), json!("job-2"));
    }

    #[test]
    fn test_missing_property_is_null() {
        for expr in ["FailureReason", "NodeDetails.Missing", "TrainingJobSummaries.9"] {
            let selector = Selector::parse(expr).unwrap();
            assert_eq!(selector.apply(&response(), &json!({})), Value::Null);
        }
    }

    #[test]
    fn test_echo_returns_input_identifier() {
        let params = json!({"ClusterName": "hp-cluster", "NodeId": "i-0abc"});
        let selector = Selector::parse("^ClusterName").unwrap();
        assert_eq!(selector.apply(&response(), &params), json!("hp-cluster"));
    }

    #[test]
    fn test_validate_echo_parameter() {
        let selector = Selector::parse("^ModelName").unwrap();
        assert!(selector.validate("DescribeModel", &["ModelName"]).is_ok());

        let err = selector
            .validate("DescribeEndpoint", &["EndpointName"])
            .unwrap_err();
        assert!(err.to_string().contains("EndpointName"));

        // Property selectors are not checked against parameters
        let property = Selector::parse("EndpointStatus").unwrap();
        assert!(property.validate("DescribeEndpoint", &["EndpointName"]).is_ok());
    }
}
