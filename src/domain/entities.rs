//! Domain entities: core data structures

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;
use termtree::Tree;

/// One species in an evolution chain, with the species it evolves into.
///
/// `children` keeps the provider's ordering. An empty list marks a species
/// that does not evolve any further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionNode {
    pub species_name: String,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Terminal node without further evolutions.
    pub fn leaf(species_name: impl Into<String>) -> Self {
        Self {
            species_name: species_name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(species_name: impl Into<String>, children: Vec<EvolutionNode>) -> Self {
        Self {
            species_name: species_name.into(),
            children,
        }
    }

    /// Total number of species in the tree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            count += 1;
            queue.extend(node.children.iter());
        }

        count
    }

    /// Number of levels in the tree, a lone root has depth 1.
    /// Each element in the queue is a pair (node, depth).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1)); // (node, depth)

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Names of all final evolutions, in breadth-first order.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            if node.children.is_empty() {
                leaves.push(node.species_name.as_str());
            } else {
                queue.extend(node.children.iter());
            }
        }

        leaves
    }

    /// Convert into a printable `termtree` tree.
    pub fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(self.species_name.clone()).with_leaves(leaves)
    }
}

/// Species names sharing the same evolutionary depth.
pub type Stage = Vec<String>;

/// Breadth-first stages of an evolution chain.
///
/// Index 0 always holds exactly the root species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EvolutionStages(Vec<Stage>);

impl EvolutionStages {
    pub(crate) fn new(stages: Vec<Stage>) -> Self {
        Self(stages)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stage> {
        self.0.iter()
    }

    /// Total number of names over all stages.
    pub fn species_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> Vec<Stage> {
        self.0
    }
}

impl<'a> IntoIterator for &'a EvolutionStages {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for EvolutionStages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", stage.join(", "))?;
        }
        Ok(())
    }
}

/// Normalized species identifier as accepted by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub(crate) fn new_unchecked(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display data for a single species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCard {
    pub name: String,
    /// Official artwork, falls back to the default sprite
    pub artwork_url: Option<String>,
    /// One or two elemental categories, primary first
    pub types: Vec<String>,
}

impl SpeciesCard {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

/// Cards grouped by stage, same shape as the `EvolutionStages` they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionGallery {
    /// Normalized name the user asked for
    pub query: String,
    pub stages: Vec<Vec<SpeciesCard>>,
}

impl EvolutionGallery {
    pub fn card_count(&self) -> usize {
        self.stages.iter().map(Vec::len).sum()
    }
}
