use std::collections::HashSet;

use snafu::{OptionExt, ResultExt, ensure};

use crate::{
    document::ParsedDocument,
    error::{MissingKey, PageTreeCycle, ResolveError, UnexpectedNodeType, UnexpectedValue},
    resolve::dictionary_of,
    types::{IndirectObject, Reference, Value},
};

type Result<T> = std::result::Result<T, ResolveError>;

/// Iterator over the leaves of a page tree.
///
/// # Page Tree Structure
/// - The root node is a `/Pages` object
/// - Intermediate nodes are also `/Pages` objects (containing `/Kids`)
/// - Leaf nodes are `/Page` objects
///
/// The walk is depth-first, so pages come out in document order. Every node
/// is resolved through the object table; a node reached a second time ends
/// the walk with [`ResolveError::PageTreeCycle`]. The iterator stops after
/// the first error.
#[derive(Debug)]
pub struct PageLeaves<'a> {
    document: &'a ParsedDocument,
    stack: Vec<(Reference, std::slice::Iter<'a, Value>)>,
    current: (Reference, std::slice::Iter<'a, Value>),
    visited: HashSet<Reference>,
    failed: bool,
}

impl<'a> Iterator for PageLeaves<'a> {
    type Item = Result<&'a IndirectObject>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.compute_next().transpose();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }

        result
    }
}

impl<'a> PageLeaves<'a> {
    fn new(document: &'a ParsedDocument, root: &'a IndirectObject) -> Result<Self> {
        let reference = root.reference();

        Ok(Self {
            document,
            stack: Vec::new(),
            current: (reference, kids(root)?),
            visited: HashSet::from([reference]),
            failed: false,
        })
    }

    fn compute_next(&mut self) -> Result<Option<&'a IndirectObject>> {
        loop {
            let (parent, siblings) = &mut self.current;

            if let Some(kid) = siblings.next() {
                let owner = parent.to_string();
                let reference = *kid.as_reference().context(UnexpectedValue {
                    key: "/Kids",
                    owner,
                })?;

                ensure!(self.visited.insert(reference), PageTreeCycle { reference });

                let node = self.document.resolve(&reference)?;
                let node_type = dictionary_of(node)?
                    .get("/Type")
                    .and_then(|value| value.as_name().ok())
                    .context(MissingKey {
                        key: "/Type",
                        owner: reference.to_string(),
                    })?;

                match node_type.as_str() {
                    "/Page" => return Ok(Some(node)),
                    "/Pages" => {
                        let node_kids = kids(node)?;
                        let parent = std::mem::replace(&mut self.current, (reference, node_kids));
                        self.stack.push(parent);
                    }
                    _ => {
                        return UnexpectedNodeType {
                            reference,
                            got: node_type.as_str(),
                        }
                        .fail();
                    }
                }
            } else if let Some(parent) = self.stack.pop() {
                self.current = parent;
            } else {
                return Ok(None);
            }
        }
    }
}

fn kids(node: &IndirectObject) -> Result<std::slice::Iter<'_, Value>> {
    let owner = node.reference().to_string();

    let kids = dictionary_of(node)?
        .get("/Kids")
        .context(MissingKey {
            key: "/Kids",
            owner: owner.clone(),
        })?
        .as_array()
        .context(UnexpectedValue {
            key: "/Kids",
            owner,
        })?;

    Ok(kids.iter())
}

impl ParsedDocument {
    /// Walks the page tree from [`ParsedDocument::pages`].
    pub fn page_tree(&self) -> Result<PageLeaves<'_>> {
        PageLeaves::new(self, self.pages()?)
    }

    /// Every `/Page` leaf of the page tree, in document order.
    pub fn page_leaves(&self) -> Result<Vec<&IndirectObject>> {
        self.page_tree()?.collect()
    }

    /// The `/Count` of the page tree root.
    ///
    /// This is the number the file declares, it is not checked against the
    /// leaves.
    pub fn page_count(&self) -> Result<i64> {
        let pages = self.pages()?;
        let owner = pages.reference().to_string();

        dictionary_of(pages)?
            .get("/Count")
            .context(MissingKey {
                key: "/Count",
                owner: owner.clone(),
            })?
            .as_integer()
            .context(UnexpectedValue {
                key: "/Count",
                owner,
            })
    }
}
