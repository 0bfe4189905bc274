//! Rule model shared by the platform cleaners and the universal cleaner.
//!
//! A rule is either a `(selector, action)` pair applied to every matching
//! element, or a document-level rewrite for behaviour that is not tied to a
//! single element (trailing content, comments, text patterns).

mod action;
mod selector;

use kuchiki::NodeRef;
use kuchiki::iter::NodeEdge;

pub use action::Action;
pub use selector::{AttrMatch, ClassMatch, Selector, TextMatch};

/// Document-level rewrite; returns how many rewrites it made.
pub type DocumentRewrite = fn(&NodeRef) -> usize;

#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    Element { selector: Selector, action: Action },
    Document(DocumentRewrite),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    name: &'static str,
    kind: RuleKind,
}

impl Rule {
    #[must_use]
    pub const fn element(name: &'static str, selector: Selector, action: Action) -> Self {
        Self {
            name,
            kind: RuleKind::Element { selector, action },
        }
    }

    #[must_use]
    pub const fn document(name: &'static str, rewrite: DocumentRewrite) -> Self {
        Self {
            name,
            kind: RuleKind::Document(rewrite),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Apply the rule to `document`, returning the number of rewrites.
    pub fn apply(&self, document: &NodeRef) -> usize {
        match self.kind {
            RuleKind::Element { selector, action } => {
                let mut applied = 0;
                // Targets are in document order, so anything inside a
                // discarded subtree sorts before that subtree's end edge
                let mut discarded_until = 0;
                for target in collect_targets(document, &selector) {
                    if target.start < discarded_until {
                        continue;
                    }
                    action.apply(&target.node);
                    applied += 1;
                    if action.discards_subtree() {
                        discarded_until = target.end;
                    }
                }
                applied
            }
            RuleKind::Document(rewrite) => rewrite(document),
        }
    }
}

/// A matched element with the traversal positions of its start and end edges.
struct Target {
    node: NodeRef,
    start: usize,
    end: usize,
}

/// Collect before mutating: actions detach and move nodes.
fn collect_targets(document: &NodeRef, selector: &Selector) -> Vec<Target> {
    let mut targets: Vec<Target> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (position, edge) in document.traverse().enumerate() {
        match edge {
            NodeEdge::Start(node) => {
                if selector.matches(&node) {
                    open.push(targets.len());
                    targets.push(Target {
                        node,
                        start: position,
                        end: position,
                    });
                }
            }
            NodeEdge::End(node) => {
                if let Some(&index) = open.last() {
                    if targets[index].node == node {
                        targets[index].end = position;
                        open.pop();
                    }
                }
            }
        }
    }
    targets
}

/// Apply `rules` to `document` in order.
pub fn apply_rules(document: &NodeRef, rules: &[Rule]) -> usize {
    let mut total = 0;
    for rule in rules {
        let applied = rule.apply(document);
        if applied > 0 {
            log::debug!("Rule '{}' rewrote {} node(s)", rule.name(), applied);
        }
        total += applied;
    }
    total
}
