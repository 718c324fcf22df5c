use kruskal_core::Graph;

/// Symmetric adjacency-matrix graph over named vertices, used to exercise
/// the builder through a collaborator other than `EdgeListGraph`.
///
/// Edges are the `(row, column)` index pairs above the diagonal with a
/// weight present.
pub struct MatrixGraph {
    names: Vec<&'static str>,
    weights: Vec<Vec<Option<u32>>>,
}

impl MatrixGraph {
    #[must_use]
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            weights: vec![vec![None; names.len()]; names.len()],
        }
    }

    /// Connects two named vertices. Unknown names are ignored.
    #[must_use]
    pub fn with_edge(mut self, left: &str, right: &str, weight: u32) -> Self {
        if let (Some(i), Some(j)) = (self.index_of(left), self.index_of(right)) {
            self.weights[i][j] = Some(weight);
            self.weights[j][i] = Some(weight);
        }
        self
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| *candidate == name)
    }
}

impl Graph for MatrixGraph {
    type Vertex = &'static str;
    type Edge = (usize, usize);
    type Weight = u32;

    fn vertices(&self) -> impl Iterator<Item = &'static str> {
        self.names.iter().copied()
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.names.len();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.weights[i][j].is_some())
    }

    fn endpoints(&self, edge: &(usize, usize)) -> (&'static str, &'static str) {
        (self.names[edge.0], self.names[edge.1])
    }

    fn weight(&self, edge: &(usize, usize)) -> u32 {
        self.weights[edge.0][edge.1].unwrap_or(u32::MAX)
    }
}

/// Graph whose edge list names a vertex that is never listed.
pub struct DanglingGraph;

impl Graph for DanglingGraph {
    type Vertex = u8;
    type Edge = (u8, u8, u8);
    type Weight = u8;

    fn vertices(&self) -> impl Iterator<Item = u8> {
        [1, 2, 3].into_iter()
    }

    fn edges(&self) -> impl Iterator<Item = (u8, u8, u8)> {
        [(1, 2, 1), (2, 3, 1), (3, 4, 1)].into_iter()
    }

    fn endpoints(&self, edge: &(u8, u8, u8)) -> (u8, u8) {
        (edge.0, edge.1)
    }

    fn weight(&self, edge: &(u8, u8, u8)) -> u8 {
        edge.2
    }
}
