use serde::{Deserialize, Serialize};

use proxsearch_common::Result;

/// An already parsed query expression.
///
/// In json:
/// `{ "op": "window", "distance": 3, "children": [{ "op": "term", "term": "lorem" }, ...] }`
///
/// Terms without a field, and windows without a distance, use the evaluator's defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueryNode {
    Term {
        term: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },
    Window {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        distance: Option<i32>,
        #[serde(default)]
        children: Vec<QueryNode>,
    },
}

impl QueryNode {
    pub fn term(term: &str) -> Self {
        QueryNode::Term { term: term.to_owned(), field: None }
    }

    pub fn field_term(field: &str, term: &str) -> Self {
        QueryNode::Term { term: term.to_owned(), field: Some(field.to_owned()) }
    }

    pub fn window(distance: i32, children: Vec<QueryNode>) -> Self {
        QueryNode::Window { distance: Some(distance), children }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
