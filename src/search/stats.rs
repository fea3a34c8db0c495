use std::fmt;

/// Where, in the sorted candidate list, each node found its best move.
/// Low averages mean the one-ply ordering is doing its job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlyStats {
    pub nodes: u64,
    pub index_sum: u64,
    pub max_index: usize,
    pub candidates: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    plies: Vec<PlyStats>,
}

impl SearchStats {
    pub fn record(&mut self, ply: usize, index: usize, candidates: usize) {
        if self.plies.len() <= ply { self.plies.resize(ply + 1, PlyStats::default()); }
        let s = &mut self.plies[ply];
        s.nodes += 1;
        s.index_sum += index as u64;
        s.max_index = s.max_index.max(index);
        s.candidates += candidates as u64;
    }

    pub fn ply(&self, ply: usize) -> Option<&PlyStats> { self.plies.get(ply) }

    pub fn depth_reached(&self) -> usize { self.plies.len() }

    pub fn total_nodes(&self) -> u64 { self.plies.iter().map(|p| p.nodes).sum() }

    /// Mean 0-based index of the chosen move at `ply`.
    pub fn average_index(&self, ply: usize) -> Option<f64> {
        self.ply(ply).filter(|p| p.nodes > 0).map(|p| p.index_sum as f64 / p.nodes as f64)
    }

    pub fn clear(&mut self) { self.plies.clear(); }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ply  nodes     avg_idx  max_idx  avg_cands")?;
        for (i, p) in self.plies.iter().enumerate() {
            if p.nodes == 0 { continue; }
            let n = p.nodes as f64;
            writeln!(f, "{:>3}  {:>8}  {:>7.2}  {:>7}  {:>9.2}", i, p.nodes, p.index_sum as f64 / n, p.max_index, p.candidates as f64 / n)?;
        }
        Ok(())
    }
}
