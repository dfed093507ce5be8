use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Distance, Vertex};

/// Directed edge `(tail, head)` with a real valued cost. Undirected graphs
/// store one of these per direction.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    cost: Distance,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, cost: Distance) -> WeightedEdge {
        WeightedEdge { tail, head, cost }
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn cost(&self) -> Distance {
        self.cost
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            cost: self.cost,
        }
    }

    pub fn tailless(&self) -> TaillessWeightedEdge {
        TaillessWeightedEdge {
            head: self.head,
            cost: self.cost,
        }
    }

    pub fn with_cost(&self, cost: Distance) -> WeightedEdge {
        WeightedEdge {
            tail: self.tail,
            head: self.head,
            cost,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.tail, self.head, self.cost)
    }
}

/// Adjacency list entry; the tail is implied by the list it lives in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaillessWeightedEdge {
    head: Vertex,
    cost: Distance,
}

impl TaillessWeightedEdge {
    pub fn new(head: Vertex, cost: Distance) -> TaillessWeightedEdge {
        TaillessWeightedEdge { head, cost }
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn cost(&self) -> Distance {
        self.cost
    }

    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge::new(tail, self.head, self.cost)
    }
}
