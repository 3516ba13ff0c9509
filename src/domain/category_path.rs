//! Resolution of storefront listing paths against the category forest.
//!
//! A listing path such as `/list/electronics/laptops/` names up to three
//! category slugs, root first. Resolution walks the slugs against a flat
//! snapshot of parent-pointer records, preferring a child of the previously
//! matched node and falling back to any node carrying the slug. The matched
//! node then determines which categories contribute products to the listing.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

/// Prefix of every storefront listing URL.
pub const LISTING_PREFIX: &str = "/list";

/// Deepest supported listing path. Extra segments are dropped.
pub const MAX_DEPTH: usize = 3;

/// Reasons a listing path cannot be resolved.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The path contains no category segments.
    #[error("listing path has no category segments")]
    InvalidPath,
    /// A segment matched no category.
    #[error("category not found")]
    CategoryNotFound,
}

/// Normalized listing path: between one and [`MAX_DEPTH`] non-empty slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPath {
    segments: Vec<String>,
}

impl ListingPath {
    /// Normalizes a raw request path.
    ///
    /// Strips the `/list` prefix and one trailing slash, drops empty segments
    /// and truncates anything deeper than [`MAX_DEPTH`].
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let path = strip_listing_prefix(raw);
        let path = path.strip_suffix('/').unwrap_or(path);

        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .take(MAX_DEPTH)
            .map(str::to_owned)
            .collect();

        if segments.is_empty() {
            return Err(ResolveError::InvalidPath);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

fn strip_listing_prefix(raw: &str) -> &str {
    match raw.strip_prefix(LISTING_PREFIX) {
        // `/listing/...` is a slug, not the prefix.
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => raw,
    }
}

/// Listing URL for a root-first sequence of slugs, e.g. `/list/a/b`.
pub fn listing_href<'a>(slugs: impl IntoIterator<Item = &'a str>) -> String {
    let mut href = String::from(LISTING_PREFIX);
    for slug in slugs {
        href.push('/');
        href.push_str(slug);
    }
    href
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct CategoryResolution {
    /// Matched nodes, root to leaf. One per consumed segment, so its length
    /// is the match depth.
    pub path: Vec<Category>,
    pub matched_id: CategoryId,
    /// Categories whose products belong to the listing.
    pub related_ids: BTreeSet<CategoryId>,
    /// Direct children of the matched node, in table order.
    pub immediate_children: Vec<Category>,
}

/// Read-only index over a category snapshot.
///
/// Every lookup list keeps the snapshot order, which is the tie-break for
/// fuzzy matches.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: Vec<Category>,
    by_id: HashMap<CategoryId, usize>,
    children: HashMap<Option<CategoryId>, Vec<usize>>,
    by_slug: HashMap<String, Vec<usize>>,
}

impl CategoryTree {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        let mut children: HashMap<Option<CategoryId>, Vec<usize>> = HashMap::new();
        let mut by_slug: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, category) in categories.iter().enumerate() {
            by_id.entry(category.id).or_insert(index);
            children.entry(category.parent_id).or_default().push(index);
            by_slug
                .entry(category.url.as_str().to_owned())
                .or_default()
                .push(index);
        }

        Self {
            categories,
            by_id,
            children,
            by_slug,
        }
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.by_id.get(&id).map(|&index| &self.categories[index])
    }

    /// Top-level groups in table order.
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.nodes_under(None)
    }

    /// Direct children of `id` in table order.
    pub fn children_of(&self, id: CategoryId) -> impl Iterator<Item = &Category> {
        self.nodes_under(Some(id))
    }

    fn nodes_under(&self, parent_id: Option<CategoryId>) -> impl Iterator<Item = &Category> {
        self.children
            .get(&parent_id)
            .into_iter()
            .flatten()
            .map(|&index| &self.categories[index])
    }

    fn exact_match(&self, parent_id: Option<CategoryId>, segment: &str) -> Option<&Category> {
        self.nodes_under(parent_id)
            .find(|category| category.url == segment)
    }

    fn fuzzy_match(&self, segment: &str) -> Option<&Category> {
        self.by_slug
            .get(segment)
            .and_then(|indices| indices.first())
            .map(|&index| &self.categories[index])
    }

    /// Resolves `path` segment by segment.
    ///
    /// Fails as a whole when any single segment has neither an exact nor a
    /// fuzzy match.
    pub fn resolve(&self, path: &ListingPath) -> Result<CategoryResolution, ResolveError> {
        let mut current_parent: Option<CategoryId> = None;
        let mut resolved = Vec::with_capacity(path.depth());

        for segment in path.segments() {
            let node = match self.exact_match(current_parent, segment) {
                Some(node) => {
                    log::debug!("Exact category match for `{segment}`: {}", node.id);
                    node
                }
                None => match self.fuzzy_match(segment) {
                    Some(node) => {
                        log::debug!(
                            "Fuzzy category match for `{segment}` under {current_parent:?}: {}",
                            node.id
                        );
                        node
                    }
                    None => {
                        log::debug!("No category matches `{segment}` under {current_parent:?}");
                        return Err(ResolveError::CategoryNotFound);
                    }
                },
            };
            current_parent = Some(node.id);
            resolved.push(node.clone());
        }

        let matched_id = current_parent.ok_or(ResolveError::InvalidPath)?;
        if self.get(matched_id).is_none() {
            return Err(ResolveError::CategoryNotFound);
        }

        Ok(CategoryResolution {
            related_ids: self.related_ids(matched_id, resolved.len()),
            immediate_children: self.children_of(matched_id).cloned().collect(),
            path: resolved,
            matched_id,
        })
    }

    /// Category ids whose products make up a listing matched at `depth`.
    ///
    /// A leaf at full depth stands alone, a second-level match adds its
    /// children and a top-level match adds children and grandchildren.
    pub fn related_ids(&self, matched_id: CategoryId, depth: usize) -> BTreeSet<CategoryId> {
        let mut related = BTreeSet::from([matched_id]);
        if depth >= MAX_DEPTH {
            return related;
        }

        let children: Vec<CategoryId> = self.children_of(matched_id).map(|c| c.id).collect();
        related.extend(children.iter().copied());

        if depth == 1 {
            for child_id in children {
                related.extend(self.children_of(child_id).map(|c| c.id));
            }
        }

        related
    }
}

/// Resolves `raw_path` against a category snapshot in one call.
pub fn resolve(raw_path: &str, categories: &[Category]) -> Result<CategoryResolution, ResolveError> {
    let path = ListingPath::parse(raw_path)?;
    CategoryTree::new(categories.to_vec()).resolve(&path)
}
