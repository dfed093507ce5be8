use ahash::HashSet;
use tracing::debug;

use super::{
    collections::dijkstra_data::{DijkstraData, ShortestPathTree},
    path::Path,
    Heuristic,
};
use crate::{
    error::{check_vertex, GraphError, Result},
    graphs::{graph_functions::check_non_negative, Distance, Graph, Vertex},
    queue::{heap_queue::HeapQueue, DecreaseKeyQueue, QueueEntry},
};

/// Result of an A* search: the goal that was reached first and the labels
/// of every vertex the search touched.
#[derive(Clone, Debug)]
pub struct AStar {
    reached_goal: Vertex,
    tree: ShortestPathTree,
    scores: Vec<Distance>,
}

/// Heuristic guided search from `source` to the nearest vertex of `goals`.
///
/// The open set is a decrease-key queue ordered by the score
/// `f(v) = g(v) + h(v)`, where `g(v)` is the best known cost from the
/// source and `h` the heuristic estimate. The search stops as soon as a
/// goal is extracted.
///
/// Negative edges, an invalid source and invalid goals are rejected up
/// front. Reachability of the goals is not checked: if the open set runs
/// dry first, the search fails with `GoalUnreachable` after having
/// explored everything reachable from the source.
#[tracing::instrument(skip(graph, goals, heuristic), fields(number_of_goals = goals.len()))]
pub fn astar<H>(
    graph: &dyn Graph,
    source: Vertex,
    goals: &HashSet<Vertex>,
    heuristic: &H,
) -> Result<AStar>
where
    H: Heuristic + ?Sized,
{
    let mut queue = HeapQueue::new(graph.number_of_vertices());
    astar_with_queue(graph, source, goals, heuristic, &mut queue)
}

pub fn astar_with_queue<H>(
    graph: &dyn Graph,
    source: Vertex,
    goals: &HashSet<Vertex>,
    heuristic: &H,
    queue: &mut dyn DecreaseKeyQueue,
) -> Result<AStar>
where
    H: Heuristic + ?Sized,
{
    let number_of_vertices = graph.number_of_vertices();
    check_vertex(source, number_of_vertices)?;
    check_non_negative(graph)?;

    let mut is_goal = vec![false; number_of_vertices as usize];
    for &goal in goals {
        check_vertex(goal, number_of_vertices)?;
        is_goal[goal as usize] = true;
    }

    let mut data = DijkstraData::new(number_of_vertices, source);
    let mut scores = vec![Distance::INFINITY; number_of_vertices as usize];
    let mut closed = vec![false; number_of_vertices as usize];

    queue.clear();
    scores[source as usize] = heuristic.estimate(source);
    queue.insert(source, scores[source as usize])?;

    let mut expanded = 0u32;
    let reached_goal = loop {
        let QueueEntry { vertex: tail, .. } = queue
            .extract_min()
            .ok_or(GraphError::GoalUnreachable { start: source })?;
        if is_goal[tail as usize] {
            break tail;
        }

        closed[tail as usize] = true;
        expanded += 1;

        for edge in graph.out_edges(tail) {
            let head = edge.head();
            if closed[head as usize] || !data.relax(tail, head, edge.cost()) {
                continue;
            }

            scores[head as usize] = data.distance(head) + heuristic.estimate(head);
            if queue.contains(head) {
                queue.decrease_key(head, scores[head as usize])?;
            } else {
                queue.insert(head, scores[head as usize])?;
            }
        }
    };

    debug!(source, reached_goal, expanded, "a* finished");
    Ok(AStar {
        reached_goal,
        tree: data.into_tree(),
        scores,
    })
}

impl AStar {
    pub fn source(&self) -> Vertex {
        self.tree.source()
    }

    /// The goal vertex the search stopped at.
    pub fn reached_goal(&self) -> Vertex {
        self.reached_goal
    }

    /// Cost of the path from the source to the reached goal.
    pub fn cost(&self) -> Distance {
        self.tree.distances()[self.reached_goal as usize]
    }

    /// Edges of the path to the reached goal. The heuristic is backed out
    /// of the scores, so every edge carries its true cost.
    pub fn path(&self) -> Result<Path> {
        self.tree.path(self.reached_goal)
    }

    /// Score `g(v) + h(v)` of `vertex`; `+inf` if the search never saw it.
    pub fn score(&self, vertex: Vertex) -> Result<Distance> {
        check_vertex(vertex, self.scores.len() as u32)?;
        Ok(self.scores[vertex as usize])
    }

    /// Labels of the explored part of the graph.
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}
