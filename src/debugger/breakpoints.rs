use log::info;
use std::collections::HashSet;

/// Line indices where `run` stops. Survive session resets.
#[derive(Debug, Default)]
pub struct Breakpoints {
    points: HashSet<usize>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self {
            points: HashSet::new(),
        }
    }

    pub fn add(&mut self, line: usize) {
        self.points.insert(line);
        info!("Breakpoint set at line {}", line);
    }

    pub fn remove(&mut self, line: usize) {
        self.points.remove(&line);
        info!("Breakpoint removed from line {}", line);
    }

    pub fn contains(&self, line: usize) -> bool {
        self.points.contains(&line)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lines in ascending order
    pub fn sorted(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.points.iter().copied().collect();
        lines.sort_unstable();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_contains() {
        let mut bps = Breakpoints::new();
        bps.add(5);
        bps.add(10);
        bps.add(5);

        assert!(bps.contains(5));
        assert!(bps.contains(10));
        assert!(!bps.contains(7));
        assert_eq!(bps.sorted(), vec![5, 10]);

        bps.remove(5);
        assert!(!bps.contains(5));

        bps.clear();
        assert!(bps.is_empty());
    }
}
