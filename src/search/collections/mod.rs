pub mod all_pairs_data;
pub mod dijkstra_data;
