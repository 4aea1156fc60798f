pub mod operand;
pub mod query;
pub mod window;

use std::rc::Rc;

use proxsearch_common::postings_list::PostingsList;
use proxsearch_common::Result;

use crate::p_debug;
use crate::searcher::operand::Operand;
use crate::searcher::query::QueryNode;
use crate::searcher::window::WindowOperator;
use crate::source::PostingsSource;

/// Evaluates query trees against a postings source.
///
/// Any source error aborts the whole evaluation, and is returned unchanged.
/// Partially built results are dropped along with it.
pub struct Evaluator<'a, S: PostingsSource + ?Sized> {
    source: &'a S,
    default_field: String,
    default_distance: i32,
}

impl<'a, S: PostingsSource + ?Sized> Evaluator<'a, S> {
    pub fn new(source: &'a S, default_field: &str, default_distance: i32) -> Self {
        Evaluator {
            source,
            default_field: default_field.to_owned(),
            default_distance,
        }
    }

    pub fn evaluate(&self, node: &QueryNode) -> Result<PostingsList> {
        match node {
            QueryNode::Term { term, field } => {
                let pl = self.term_postings(term, field.as_deref())?;
                Ok(Rc::try_unwrap(pl).unwrap_or_else(|pl| (*pl).clone()))
            }
            QueryNode::Window { distance, children } => {
                Ok(self.window_operator(*distance, children)?.evaluate())
            }
        }
    }

    fn term_postings(&self, term: &str, field: Option<&str>) -> Result<Rc<PostingsList>> {
        let field = field.unwrap_or(&self.default_field);
        let pl = self.source.postings(field, term)?;

        p_debug!("'{}' in field '{}': {} docs, {} positions", term, field, pl.doc_freq(), pl.ctf());
        Ok(pl)
    }

    fn operand(&self, node: &QueryNode) -> Result<Operand> {
        match node {
            QueryNode::Term { term, field } => {
                Ok(Operand::term(term.as_str(), self.term_postings(term, field.as_deref())?))
            }
            QueryNode::Window { distance, children } => {
                Ok(Operand::window(self.window_operator(*distance, children)?))
            }
        }
    }

    /// Builds a window operator over the children, evaluating nested windows on the way.
    ///
    /// The operator evaluates the field of its first child,
    /// or the default field if there are none.
    pub fn window_operator(&self, distance: Option<i32>, children: &[QueryNode]) -> Result<WindowOperator> {
        let operands = children
            .iter()
            .map(|child| self.operand(child))
            .collect::<Result<Vec<Operand>>>()?;

        let field = operands
            .first()
            .map(|operand| operand.field().to_owned())
            .unwrap_or_else(|| self.default_field.clone());

        let mut op = WindowOperator::new(field);
        op.set_distance(distance.unwrap_or(self.default_distance));
        for operand in operands {
            op.add_child(operand)?;
        }

        Ok(op)
    }
}
