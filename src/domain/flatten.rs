//! Breadth-first flattening of an evolution tree into stages

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::entities::{EvolutionNode, EvolutionStages, Stage};

/// Flatten an evolution tree into stages ordered by depth.
///
/// Stage 0 holds only the root. Every following stage is the concatenation,
/// in order, of the children of all nodes in the previous stage. Walks the
/// tree with an explicit queue of sibling groups, so depth is only bounded
/// by memory.
pub fn flatten(root: &EvolutionNode) -> EvolutionStages {
    let mut stages: Vec<Stage> = vec![vec![root.species_name.clone()]];

    let mut groups: VecDeque<&[EvolutionNode]> = VecDeque::new();
    groups.push_back(&root.children);

    while !groups.is_empty() {
        // all groups queued right now belong to the same depth
        let mut stage = Stage::new();
        for _ in 0..groups.len() {
            let Some(group) = groups.pop_front() else {
                break;
            };
            for node in group {
                stage.push(node.species_name.clone());
                if !node.children.is_empty() {
                    groups.push_back(&node.children);
                }
            }
        }

        if stage.is_empty() {
            break;
        }
        trace!(depth = stages.len(), "stage: {:?}", stage);
        stages.push(stage);
    }

    EvolutionStages::new(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sibling_branches_with_children_when_flattening_then_merges_same_depth() {
        let root = EvolutionNode::with_children(
            "wurmple",
            vec![
                EvolutionNode::with_children("silcoon", vec![EvolutionNode::leaf("beautifly")]),
                EvolutionNode::with_children("cascoon", vec![EvolutionNode::leaf("dustox")]),
            ],
        );

        let stages = flatten(&root);

        assert_eq!(
            stages.into_inner(),
            vec![
                vec!["wurmple".to_string()],
                vec!["silcoon".to_string(), "cascoon".to_string()],
                vec!["beautifly".to_string(), "dustox".to_string()],
            ]
        );
    }

    #[test]
    fn given_first_sibling_without_children_when_flattening_then_keeps_later_branches() {
        let root = EvolutionNode::with_children(
            "a",
            vec![
                EvolutionNode::leaf("b"),
                EvolutionNode::with_children("c", vec![EvolutionNode::leaf("d")]),
            ],
        );

        let stages = flatten(&root);

        assert_eq!(stages.len(), 3);
        assert_eq!(stages.stages()[2], vec!["d".to_string()]);
    }
}
