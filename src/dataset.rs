//! Dataset types for ncqc.
//!
//! Provides the in-memory [`Dataset`] model - dimensions, variables, and
//! global attributes - and the JSON loader that produces it. Variable
//! values are stored as a flat row-major buffer plus a shape, so checks
//! flatten multi-dimensional data in outer-to-inner dimension order for
//! free.
//!
//! The loader validates rectangularity of nested value arrays but does
//! *not* compare element counts against declared dimension sizes; that
//! mismatch is what the data-points-amount check reports at check time.

use std::{fmt, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A scalar attribute value: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Numeric attribute.
    Number(f64),
    /// Text attribute.
    Text(String),
}

impl AttrValue {
    /// True if the attribute carries no data: an empty string or NaN.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => n.is_nan(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A single dataset variable: values, declared dimensions, optional fill
/// value, and attributes.
///
/// Values are held in a flat row-major buffer; `shape` records the extent
/// of each axis, outer to inner. A scalar variable has shape `[]` and
/// exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Declared dimension names, outer to inner.
    pub dimensions: Vec<String>,
    /// Fill value marking "no data", distinct from NaN.
    pub fill_value: Option<f64>,
    /// Variable attributes.
    pub attributes: IndexMap<String, AttrValue>,
    values: Vec<f64>,
    shape: Vec<usize>,
}

impl Variable {
    /// Creates a variable from a flat row-major buffer and its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length does not equal the product
    /// of the shape extents.
    pub fn new(dimensions: Vec<String>, shape: Vec<usize>, values: Vec<f64>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(Error::ShapeMismatch {
                name: dimensions.join(", "),
                len: values.len(),
                shape,
            });
        }
        Ok(Self {
            dimensions,
            fill_value: None,
            attributes: IndexMap::new(),
            values,
            shape,
        })
    }

    /// Creates a one-dimensional variable over the given dimension.
    pub fn vector(dimension: impl Into<String>, values: Vec<f64>) -> Self {
        let shape = vec![values.len()];
        Self {
            dimensions: vec![dimension.into()],
            fill_value: None,
            attributes: IndexMap::new(),
            values,
            shape,
        }
    }

    /// Creates a scalar (zero-dimensional) variable.
    pub fn scalar(value: f64) -> Self {
        Self {
            dimensions: Vec::new(),
            fill_value: None,
            attributes: IndexMap::new(),
            values: vec![value],
            shape: Vec::new(),
        }
    }

    /// Set the fill value.
    #[must_use]
    pub fn with_fill_value(mut self, fill: f64) -> Self {
        self.fill_value = Some(fill);
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The values as a flat row-major slice.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The shape, outer to inner.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the variable has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if the variable is scalar (zero-dimensional).
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// True if `value` marks "no data": NaN or equal to the fill value.
    ///
    /// This is the single missing-value predicate shared by the boundary,
    /// emptiness, and difference checks.
    pub fn is_missing(&self, value: f64) -> bool {
        value.is_nan() || self.fill_value.map_or(false, |fill| value == fill)
    }

    /// Number of missing elements (fill value or NaN).
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|&&v| self.is_missing(v)).count()
    }

    fn from_spec(name: &str, spec: VariableSpec) -> Result<Self> {
        let mut shape = Vec::new();
        let mut values = Vec::new();
        flatten_values(name, &spec.values, 0, &mut shape, &mut values)?;
        // Catches scalars mixed into an axis, e.g. [[1, 2], 3].
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                len: values.len(),
                shape,
            });
        }
        Ok(Self {
            dimensions: spec.dimensions,
            fill_value: spec.fill_value,
            attributes: spec.attributes,
            values,
            shape,
        })
    }
}

/// Recursively flattens a nested JSON value array, recording the shape and
/// enforcing rectangularity. JSON `null` elements become NaN (masked data).
fn flatten_values(
    name: &str,
    value: &serde_json::Value,
    depth: usize,
    shape: &mut Vec<usize>,
    out: &mut Vec<f64>,
) -> Result<()> {
    match value {
        serde_json::Value::Number(n) => {
            out.push(n.as_f64().ok_or_else(|| Error::invalid_values(name))?);
            Ok(())
        }
        serde_json::Value::Null => {
            out.push(f64::NAN);
            Ok(())
        }
        serde_json::Value::Array(items) => {
            if shape.len() == depth {
                shape.push(items.len());
            } else if shape[depth] != items.len() {
                return Err(Error::ragged_array(name, depth));
            }
            for item in items {
                flatten_values(name, item, depth + 1, shape, out)?;
            }
            // An empty axis still must not hide deeper ragged shapes; with
            // no items there is nothing more to record.
            Ok(())
        }
        _ => Err(Error::invalid_values(name)),
    }
}

/// An in-memory gridded dataset: dimensions, variables, global attributes.
///
/// Immutable once handed to the quality-control façade. Mappings preserve
/// declaration order, which checks rely on for report ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Dimension name to size.
    pub dimensions: IndexMap<String, usize>,
    /// Variable name to variable.
    pub variables: IndexMap<String, Variable>,
    /// Global attribute name to value.
    pub global_attributes: IndexMap<String, AttrValue>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dimension.
    #[must_use]
    pub fn with_dimension(mut self, name: impl Into<String>, size: usize) -> Self {
        self.dimensions.insert(name.into(), size);
        self
    }

    /// Add a variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, variable: Variable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }

    /// Add a global attribute.
    #[must_use]
    pub fn with_global_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.global_attributes.insert(name.into(), value.into());
        self
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not valid JSON,
    /// or contains a ragged variable array.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_json_str(&text)
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or contains a
    /// ragged variable array.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let spec: DatasetSpec = serde_json::from_str(text)?;
        let mut variables = IndexMap::with_capacity(spec.variables.len());
        for (name, var_spec) in spec.variables {
            let variable = Variable::from_spec(&name, var_spec)?;
            variables.insert(name, variable);
        }
        Ok(Self {
            dimensions: spec.dimensions,
            variables,
            global_attributes: spec.global_attributes,
        })
    }
}

/// Raw dataset document as it appears on disk.
#[derive(Deserialize)]
struct DatasetSpec {
    #[serde(default)]
    dimensions: IndexMap<String, usize>,
    #[serde(default)]
    variables: IndexMap<String, VariableSpec>,
    #[serde(default, rename = "global_attributes", alias = "global attributes")]
    global_attributes: IndexMap<String, AttrValue>,
}

/// Raw variable entry as it appears on disk.
#[derive(Deserialize)]
struct VariableSpec {
    #[serde(default)]
    dimensions: Vec<String>,
    values: serde_json::Value,
    #[serde(default)]
    fill_value: Option<f64>,
    #[serde(default)]
    attributes: IndexMap<String, AttrValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_variable() {
        let var = Variable::vector("time", vec![1.0, 2.0, 3.0]);
        assert_eq!(var.len(), 3);
        assert_eq!(var.shape(), [3]);
        assert_eq!(var.dimensions, ["time"]);
        assert!(!var.is_scalar());
    }

    #[test]
    fn test_scalar_variable() {
        let var = Variable::scalar(42.0);
        assert!(var.is_scalar());
        assert_eq!(var.len(), 1);
        assert_eq!(var.values(), [42.0]);
    }

    #[test]
    fn test_new_rejects_shape_mismatch() {
        let result = Variable::new(vec!["a".into(), "b".into()], vec![2, 3], vec![1.0; 5]);
        assert!(matches!(result, Err(Error::ShapeMismatch { len: 5, .. })));
    }

    #[test]
    fn test_is_missing_fill_and_nan() {
        let var = Variable::vector("time", vec![1.0, -999.0, f64::NAN]).with_fill_value(-999.0);
        assert!(!var.is_missing(1.0));
        assert!(var.is_missing(-999.0));
        assert!(var.is_missing(f64::NAN));
        assert_eq!(var.missing_count(), 2);
    }

    #[test]
    fn test_is_missing_without_fill_value() {
        let var = Variable::vector("time", vec![1.0, -999.0]);
        assert!(!var.is_missing(-999.0));
        assert_eq!(var.missing_count(), 0);
    }

    #[test]
    fn test_builder_style_dataset() {
        let dataset = Dataset::new()
            .with_dimension("time", 100)
            .with_dimension("level", 10)
            .with_variable("t", Variable::vector("time", vec![0.0; 100]))
            .with_global_attribute("title", "Test");

        assert_eq!(dataset.dimensions.get("time"), Some(&100));
        assert_eq!(dataset.variables["t"].len(), 100);
        assert_eq!(
            dataset.global_attributes.get("title"),
            Some(&AttrValue::Text("Test".to_string()))
        );
    }

    #[test]
    fn test_dimension_order_preserved() {
        let dataset = Dataset::new()
            .with_dimension("zeta", 1)
            .with_dimension("alpha", 2);
        let names: Vec<&str> = dataset.dimensions.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_from_json_str_basic() {
        let dataset = Dataset::from_json_str(
            r#"{
                "dimensions": {"time": 3},
                "variables": {
                    "temperature": {
                        "dimensions": ["time"],
                        "values": [21.0, null, 22.5],
                        "fill_value": -999.0,
                        "attributes": {"units": "degC"}
                    }
                },
                "global_attributes": {"title": "Station A", "version": 2}
            }"#,
        )
        .unwrap();

        let var = &dataset.variables["temperature"];
        assert_eq!(var.shape(), [3]);
        assert_eq!(var.fill_value, Some(-999.0));
        assert!(var.values()[1].is_nan());
        assert_eq!(
            var.attributes.get("units"),
            Some(&AttrValue::Text("degC".to_string()))
        );
        assert_eq!(
            dataset.global_attributes.get("version"),
            Some(&AttrValue::Number(2.0))
        );
    }

    #[test]
    fn test_from_json_str_two_dimensional_row_major() {
        let dataset = Dataset::from_json_str(
            r#"{
                "variables": {
                    "grid": {
                        "dimensions": ["row", "col"],
                        "values": [[1, 2, 3], [4, 5, 6]]
                    }
                }
            }"#,
        )
        .unwrap();

        let var = &dataset.variables["grid"];
        assert_eq!(var.shape(), [2, 3]);
        assert_eq!(var.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_json_str_scalar_variable() {
        let dataset = Dataset::from_json_str(
            r#"{"variables": {"altitude": {"values": 12.5}}}"#,
        )
        .unwrap();
        let var = &dataset.variables["altitude"];
        assert!(var.is_scalar());
        assert_eq!(var.values(), [12.5]);
    }

    #[test]
    fn test_from_json_str_ragged_is_rejected() {
        let result = Dataset::from_json_str(
            r#"{"variables": {"grid": {"values": [[1, 2], [3]]}}}"#,
        );
        assert!(matches!(
            result,
            Err(Error::RaggedArray { depth: 1, .. })
        ));
    }

    #[test]
    fn test_from_json_str_rejects_non_numeric_values() {
        let result =
            Dataset::from_json_str(r#"{"variables": {"v": {"values": ["oops"]}}}"#);
        assert!(matches!(result, Err(Error::InvalidValues { .. })));
    }

    #[test]
    fn test_from_json_str_malformed_document() {
        assert!(matches!(
            Dataset::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_from_json_str_does_not_validate_dimension_sizes() {
        // A declared size of 10 with only 3 values is a check-time finding,
        // not a load error.
        let dataset = Dataset::from_json_str(
            r#"{
                "dimensions": {"time": 10},
                "variables": {"t": {"dimensions": ["time"], "values": [1, 2, 3]}}
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.variables["t"].len(), 3);
    }

    #[test]
    fn test_attr_value_is_empty() {
        assert!(AttrValue::Text(String::new()).is_empty());
        assert!(!AttrValue::Text("x".to_string()).is_empty());
        assert!(AttrValue::Number(f64::NAN).is_empty());
        assert!(!AttrValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Dataset::from_path("/nonexistent/data.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
