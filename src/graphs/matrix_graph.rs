use super::{Distance, Graph};

/// `costs[tail][head]`; `+inf` where there is no edge.
pub type CostMatrix = Vec<Vec<Distance>>;

/// Dense cost matrix of `graph` with a zero diagonal. Parallel edges
/// collapse to the cheapest one.
pub fn cost_matrix(graph: &dyn Graph) -> CostMatrix {
    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut costs = vec![vec![Distance::INFINITY; number_of_vertices]; number_of_vertices];

    for (vertex, row) in costs.iter_mut().enumerate() {
        row[vertex] = 0.0;
    }

    for edge in graph.edges() {
        let (tail, head) = (edge.tail() as usize, edge.head() as usize);
        if tail != head && edge.cost() < costs[tail][head] {
            costs[tail][head] = edge.cost();
        }
    }

    costs
}
