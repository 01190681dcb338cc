use hashbrown::HashMap;

/// Occurrence count per normalized line. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    counts: HashMap<String, usize>,
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every line, starting each distinct line at zero.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = Self::new();
        for line in lines {
            table.insert(line);
        }
        table
    }

    pub fn insert(&mut self, line: String) {
        *self.counts.entry(line).or_insert(0) += 1;
    }

    pub fn count(&self, line: &str) -> Option<usize> {
        self.counts.get(line).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of lines folded into the table.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(line, &count)| (line.as_str(), count))
    }

    /// Entries ordered lexicographically by line.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, usize) -> bool,
    {
        self.counts.retain(|line, count| keep(line.as_str(), *count));
    }
}

impl FromIterator<String> for LineTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
