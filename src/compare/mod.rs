pub(crate) mod path;

use path::{Key, Path};
use serde_json::Value;

use crate::error::CompareError;
use crate::report::{DiffKind, DiffRecord, DiffReport, Entry};

/// Default bound on recursion depth, i.e. on document nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for a subset comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) max_depth: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Change the config's recursion depth limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Walks `lhs` and records every point where it is not contained in `rhs`.
///
/// Extra keys or elements present only in `rhs` are never reported.
pub(crate) fn subset_diff(
    lhs: &Value,
    rhs: &Value,
    config: &Config,
) -> Result<DiffReport, CompareError> {
    let mut report = DiffReport::new();
    diff_with(lhs, rhs, config, Path::Root, 0, &mut report)?;
    Ok(report)
}

fn diff_with<'a>(
    lhs: &'a Value,
    rhs: &'a Value,
    config: &Config,
    path: Path<'a>,
    depth: usize,
    acc: &mut DiffReport,
) -> Result<(), CompareError> {
    if depth > config.max_depth {
        return Err(CompareError::DepthExceeded(config.max_depth));
    }

    let mut folder = SubsetFolder {
        rhs,
        path,
        depth,
        config,
        acc,
    };

    fold_json(lhs, &mut folder)
}

#[derive(Debug)]
struct SubsetFolder<'a, 'b> {
    rhs: &'a Value,
    path: Path<'a>,
    depth: usize,
    config: &'b Config,
    acc: &'b mut DiffReport,
}

macro_rules! direct_compare {
    ($name:ident, $same_shape:ident) => {
        fn $name(&mut self, lhs: &'a Value) -> Result<(), CompareError> {
            if !self.rhs.$same_shape() {
                self.record(DiffKind::TypeMismatch, lhs);
            } else if self.rhs != lhs {
                self.record(DiffKind::ValueMismatch, lhs);
            }
            Ok(())
        }
    };
}

impl<'a, 'b> SubsetFolder<'a, 'b> {
    direct_compare!(on_null, is_null);
    direct_compare!(on_bool, is_boolean);
    direct_compare!(on_number, is_number);
    direct_compare!(on_string, is_string);

    fn on_array(&mut self, lhs: &'a Value) -> Result<(), CompareError> {
        let lhs_items = lhs.as_array().unwrap();
        let Some(rhs_items) = self.rhs.as_array() else {
            self.record(DiffKind::TypeMismatch, lhs);
            return Ok(());
        };

        // A length mismatch is reported once and short-circuits the
        // element-by-element comparison for this array.
        if lhs_items.len() != rhs_items.len() {
            self.acc.push(DiffRecord {
                path: self.path.to_string(),
                kind: DiffKind::LengthMismatch,
                expected: Entry::Len(lhs_items.len()),
                got: Entry::Len(rhs_items.len()),
            });
            return Ok(());
        }

        for (idx, (lhs, rhs)) in lhs_items.iter().zip(rhs_items).enumerate() {
            let path = self.path.append(Key::Idx(idx));
            diff_with(lhs, rhs, self.config, path, self.depth + 1, self.acc)?;
        }

        Ok(())
    }

    fn on_object(&mut self, lhs: &'a Value) -> Result<(), CompareError> {
        let lhs_map = lhs.as_object().unwrap();
        let Some(rhs_map) = self.rhs.as_object() else {
            self.record(DiffKind::TypeMismatch, lhs);
            return Ok(());
        };

        for (key, lhs_value) in lhs_map {
            let path = self.path.append(Key::Field(key));

            match rhs_map.get(key) {
                Some(rhs_value) => {
                    diff_with(lhs_value, rhs_value, self.config, path, self.depth + 1, self.acc)?;
                }
                // A missing key is a single record; there is nothing on the
                // right-hand side to recurse into.
                None => self.acc.push(DiffRecord {
                    path: path.to_string(),
                    kind: DiffKind::MissingKey,
                    expected: Entry::Json(lhs_value.clone()),
                    got: Entry::NotFound,
                }),
            }
        }

        Ok(())
    }

    fn record(&mut self, kind: DiffKind, lhs: &Value) {
        self.acc.push(DiffRecord {
            path: self.path.to_string(),
            kind,
            expected: Entry::Json(lhs.clone()),
            got: Entry::Json(self.rhs.clone()),
        });
    }
}

fn fold_json<'a>(json: &'a Value, folder: &mut SubsetFolder<'a, '_>) -> Result<(), CompareError> {
    match json {
        Value::Null => folder.on_null(json),
        Value::Bool(_) => folder.on_bool(json),
        Value::Number(_) => folder.on_number(json),
        Value::String(_) => folder.on_string(json),
        Value::Array(_) => folder.on_array(json),
        Value::Object(_) => folder.on_object(json),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Result, Value};
    use std::fs;

    fn load_json_from_file(file_path: &str) -> Result<Value> {
        let data = fs::read_to_string(file_path).expect("Unable to read file");
        serde_json::from_str(&data)
    }

    fn subset(lhs: &Value, rhs: &Value) -> DiffReport {
        subset_diff(lhs, rhs, &Config::new()).unwrap()
    }

    #[test]
    fn test_leaf_json() {
        let report = subset(&json!(null), &json!(null));
        assert!(report.is_subset());

        let report = subset(&json!(true), &json!(true));
        assert!(report.is_subset());

        let report = subset(&json!(false), &json!(true));
        assert_eq!(report.len(), 1);
        assert_eq!(report.records()[0].kind, DiffKind::ValueMismatch);
        assert_eq!(report.records()[0].path, "");

        let report = subset(&json!(1), &json!(1));
        assert!(report.is_subset());

        let report = subset(&json!(1), &json!(2));
        assert_eq!(report.len(), 1);

        let report = subset(&json!("a"), &json!("b"));
        assert_eq!(report.len(), 1);

        // Native equality: no numeric normalization across integer and float.
        let report = subset(&json!(1), &json!(1.0));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_boolean_report_agreement() {
        let cases = [
            (json!({"a": 1}), json!({"a": 1})),
            (json!({"a": 1}), json!({})),
            (json!({"a": 1}), json!({"a": 2})),
            (json!([1, 2]), json!([1])),
            (json!([1, 2]), json!([1, 3])),
            (json!({"a": {"b": 1}}), json!({"a": []})),
            (json!(null), json!(0)),
        ];

        for (lhs, rhs) in cases {
            let report = subset(&lhs, &rhs);
            assert_eq!(
                report.is_subset(),
                report.is_empty(),
                "disagreement for {} vs {}",
                lhs,
                rhs
            );
        }
    }

    #[test]
    fn test_missing_key() {
        let report = subset(&json!({"a": 1}), &json!({}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a".to_string(),
                kind: DiffKind::MissingKey,
                expected: Entry::Json(json!(1)),
                got: Entry::NotFound,
            }]
        );
    }

    #[test]
    fn test_missing_nested_value() {
        // A missing object or array yields one NOT FOUND record, not a
        // record per nested leaf.
        let report = subset(&json!({"a": {"b": 1, "c": 2}}), &json!({}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a".to_string(),
                kind: DiffKind::MissingKey,
                expected: Entry::Json(json!({"b": 1, "c": 2})),
                got: Entry::NotFound,
            }]
        );
    }

    #[test]
    fn test_value_mismatch() {
        let report = subset(&json!({"a": 1}), &json!({"a": 2}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a".to_string(),
                kind: DiffKind::ValueMismatch,
                expected: Entry::Json(json!(1)),
                got: Entry::Json(json!(2)),
            }]
        );
    }

    #[test]
    fn test_nested_object_subset() {
        let report = subset(
            &json!({"a": {"b": 1}}),
            &json!({"a": {"b": 1, "c": 9}, "d": 0}),
        );
        assert!(report.is_subset());
    }

    #[test]
    fn test_nested_object_mismatch_path() {
        let report = subset(&json!({"a": {"b": {"c": 1}}}), &json!({"a": {"b": {"c": 2}}}));
        assert_eq!(report.len(), 1);
        assert_eq!(report.records()[0].path, "/a/b/c");
    }

    #[test]
    fn test_array_length_mismatch() {
        let report = subset(&json!({"a": [1, 2]}), &json!({"a": [1]}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a".to_string(),
                kind: DiffKind::LengthMismatch,
                expected: Entry::Len(2),
                got: Entry::Len(1),
            }]
        );

        // No element-level records alongside the length record, even when
        // the shared prefix also differs.
        let report = subset(&json!({"a": [9, 2]}), &json!({"a": [1]}));
        assert_eq!(report.len(), 1);
        assert_eq!(report.records()[0].kind, DiffKind::LengthMismatch);
    }

    #[test]
    fn test_array_elements() {
        let report = subset(&json!({"a": [1, 2]}), &json!({"a": [1, 2]}));
        assert!(report.is_subset());

        // Primitive element mismatches are reported, with the index in the path.
        let report = subset(&json!({"a": [1, 2]}), &json!({"a": [1, 3]}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a[1]".to_string(),
                kind: DiffKind::ValueMismatch,
                expected: Entry::Json(json!(2)),
                got: Entry::Json(json!(3)),
            }]
        );
    }

    #[test]
    fn test_array_of_objects() {
        let lhs = json!({"users": [{"id": 1}, {"id": 2, "name": "b"}]});
        let rhs = json!({"users": [{"id": 1, "extra": true}, {"id": 2, "name": "c"}]});

        let report = subset(&lhs, &rhs);
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/users[1]/name".to_string(),
                kind: DiffKind::ValueMismatch,
                expected: Entry::Json(json!("b")),
                got: Entry::Json(json!("c")),
            }]
        );
    }

    #[test]
    fn test_type_mismatch() {
        let report = subset(&json!({"a": {"b": 1}}), &json!({"a": [1]}));
        assert_eq!(
            report.records(),
            &[DiffRecord {
                path: "/a".to_string(),
                kind: DiffKind::TypeMismatch,
                expected: Entry::Json(json!({"b": 1})),
                got: Entry::Json(json!([1])),
            }]
        );

        let report = subset(&json!({"a": [1]}), &json!({"a": {"b": 1}}));
        assert_eq!(report.records()[0].kind, DiffKind::TypeMismatch);

        let report = subset(&json!({"a": 1}), &json!({"a": "1"}));
        assert_eq!(report.records()[0].kind, DiffKind::TypeMismatch);

        let report = subset(&json!({"a": null}), &json!({"a": 0}));
        assert_eq!(report.records()[0].kind, DiffKind::TypeMismatch);
    }

    #[test]
    fn test_reflexivity() {
        let doc = json!({
            "a": {"b": [1, 2, {"c": null}], "d": "x"},
            "e": [],
            "f": {"g": {}, "h": [true, false]},
        });

        let report = subset(&doc, &doc);
        assert!(report.is_subset());
    }

    #[test]
    fn test_depth_limit() {
        let deep = json!({"a": {"b": {"c": {"d": {"e": 1}}}}});

        let result = subset_diff(&deep, &deep, &Config::new().max_depth(3));
        assert!(matches!(result, Err(CompareError::DepthExceeded(3))));

        let result = subset_diff(&deep, &deep, &Config::new().max_depth(5));
        assert!(result.is_ok());
    }

    #[test]
    fn test_fixture_files() {
        let lhs = load_json_from_file("tests/data/expected.json").expect("Error parsing expected.json");
        let rhs = load_json_from_file("tests/data/actual.json").expect("Error parsing actual.json");

        let report = subset_diff(&lhs, &rhs, &Config::new()).unwrap();
        assert_eq!(report.len(), 5);

        // Object keys are visited in sorted order, so the report is stable.
        let paths = report.iter().map(|r| r.path.as_str()).collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                "/owners[1]/team",
                "/service/endpoints",
                "/service/limits/memory",
                "/service/port",
                "/service/tls",
            ]
        );

        let kinds = report.iter().map(|r| r.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                DiffKind::ValueMismatch,
                DiffKind::LengthMismatch,
                DiffKind::MissingKey,
                DiffKind::ValueMismatch,
                DiffKind::TypeMismatch,
            ]
        );

        // The other direction reports B's extra keys as missing from A's
        // point of view only where A lacks them at compared paths.
        let report = subset_diff(&rhs, &lhs, &Config::new()).unwrap();
        assert!(!report.is_subset());
    }
}
