//! Word ladder graphs: equal-length words joined when they differ in exactly
//! one position, with shortest-ladder search and component listing.

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    /// Failure to turn a word-list source into words.
    #[derive(Debug, Error)]
    pub enum WordListError {
        #[error("cannot read word list {}: {source}", .path.display())]
        Unreadable {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("malformed word list {}: {source}", .path.display())]
        Malformed {
            path: PathBuf,
            #[source]
            source: csv::Error,
        },
        #[error("comment marker {0:?} is not an ASCII character")]
        InvalidComment(char),
    }
}

pub mod word_list {
    use std::fs::File;
    use std::path::Path;

    use csv::ReaderBuilder;
    use serde::{Deserialize, Serialize};
    use tracing::{debug, warn};

    use crate::error::WordListError;

    /// How a word-list file is read.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct WordListOptions {
        /// Skip the first line (a title row rather than words).
        pub has_headers: bool,
        /// Lines starting with this character are ignored.
        pub comment: Option<char>,
    }

    /// Reads whitespace-delimited words from `path`, in file order.
    ///
    /// An empty file gives an empty list; a file that cannot be opened is an
    /// error rather than an empty list.
    pub fn read_words<P: AsRef<Path>>(
        path: P,
        options: &WordListOptions,
    ) -> Result<Vec<String>, WordListError> {
        let path = path.as_ref();
        let comment = match options.comment {
            Some(marker) if marker.is_ascii() => Some(marker as u8),
            Some(marker) => return Err(WordListError::InvalidComment(marker)),
            None => None,
        };

        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "word list unreadable");
            WordListError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(options.has_headers)
            .delimiter(b' ')
            .flexible(true) // lines hold any number of words
            .quoting(false)
            .comment(comment)
            .from_reader(file);

        let mut words = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| WordListError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
            // runs of spaces give empty fields, tabs stay inside one field;
            // only ASCII whitespace separates words
            for field in record.iter() {
                words.extend(field.split_ascii_whitespace().map(str::to_string));
            }
        }

        debug!(path = %path.display(), words = words.len(), "read word list");
        Ok(words)
    }
}

pub mod ladder {
    /// True when `a` and `b` have the same length and differ in exactly one
    /// character position.
    pub fn differs_by_one(a: &str, b: &str) -> bool {
        a.chars().count() == b.chars().count() && one_position_apart(a, b)
    }

    // assumes equal lengths; stops counting at the second mismatch
    pub(crate) fn one_position_apart(a: &str, b: &str) -> bool {
        let mut differing = 0;
        for (x, y) in a.chars().zip(b.chars()) {
            if x != y {
                differing += 1;
                if differing > 1 {
                    return false;
                }
            }
        }
        differing == 1
    }
}

pub mod graph {
    use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
    use std::path::Path;

    use tracing::debug;

    use crate::error::WordListError;
    use crate::ladder::one_position_apart;
    use crate::word_list::{read_words, WordListOptions};

    /// Undirected graph of words keyed by the words themselves.
    #[derive(Debug, Clone, Default)]
    pub struct WordLadder {
        adjacency: HashMap<String, HashSet<String>>, // word -> neighboring words
    }

    impl WordLadder {
        pub fn new() -> Self {
            Self {
                adjacency: HashMap::new(),
            }
        }

        /// Builds the ladder graph over `words`: every word becomes a vertex,
        /// and each pair of distinct equal-length words one character apart
        /// gets an edge. Compares every pair, so cost grows with the square
        /// of the word count.
        pub fn from_words<I, S>(words: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let words: Vec<String> = words.into_iter().map(Into::into).collect();
            let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();

            let mut ladder = Self::new();
            for (i, word) in words.iter().enumerate() {
                ladder.add_vertex(word);
                for (j, other) in words.iter().enumerate().skip(i + 1) {
                    if lengths[i] == lengths[j] && one_position_apart(word, other) {
                        ladder.add_edge(word, other);
                    }
                }
            }

            debug!(
                vertices = ladder.vertex_count(),
                edges = ladder.edge_count(),
                "built word ladder"
            );
            ladder
        }

        /// Reads a whitespace-delimited word list and builds its ladder graph.
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
            Self::from_file_with(path, &WordListOptions::default())
        }

        pub fn from_file_with<P: AsRef<Path>>(
            path: P,
            options: &WordListOptions,
        ) -> Result<Self, WordListError> {
            let words = read_words(path, options)?;
            Ok(Self::from_words(words))
        }

        pub fn add_vertex(&mut self, word: &str) {
            if !self.adjacency.contains_key(word) {
                self.adjacency.insert(word.to_string(), HashSet::new());
            }
        }

        /// Joins `a` and `b`, adding either if missing. Passing the same
        /// word for both ends makes it its own neighbor.
        pub fn add_edge(&mut self, a: &str, b: &str) {
            self.add_vertex(a);
            self.add_vertex(b);
            if let Some(neighbors) = self.adjacency.get_mut(a) {
                neighbors.insert(b.to_string());
            }
            if let Some(neighbors) = self.adjacency.get_mut(b) {
                neighbors.insert(a.to_string());
            }
        }

        pub fn is_vertex(&self, word: &str) -> bool {
            self.adjacency.contains_key(word)
        }

        pub fn is_edge(&self, a: &str, b: &str) -> bool {
            match self.adjacency.get(a) {
                Some(neighbors) => neighbors.contains(b),
                None => false,
            }
        }

        /// Removes `word` and every edge touching it. Absent words are ignored.
        pub fn remove_vertex(&mut self, word: &str) {
            if let Some(neighbors) = self.adjacency.remove(word) {
                for neighbor in &neighbors {
                    if let Some(back) = self.adjacency.get_mut(neighbor) {
                        back.remove(word);
                    }
                }
            }
        }

        pub fn neighbors(&self, word: &str) -> Option<&HashSet<String>> {
            self.adjacency.get(word)
        }

        pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
            self.adjacency.keys().map(String::as_str)
        }

        pub fn vertex_count(&self) -> usize {
            self.adjacency.len()
        }

        /// Number of undirected edges; a self-loop counts once.
        pub fn edge_count(&self) -> usize {
            let ends: usize = self.adjacency.values().map(HashSet::len).sum();
            let loops = self
                .adjacency
                .iter()
                .filter(|(word, neighbors)| neighbors.contains(word.as_str()))
                .count();
            (ends + loops) / 2
        }

        pub fn is_empty(&self) -> bool {
            self.adjacency.is_empty()
        }

        /// Breadth-first search for a shortest ladder from `origin` to `dest`,
        /// both ends included. Returns an empty path when `dest` is
        /// unreachable or either word is missing, except that a word always
        /// reaches itself.
        ///
        /// Only the length is fixed: when several shortest ladders exist,
        /// which one comes back depends on neighbor iteration order.
        pub fn shortest_path(&self, origin: &str, dest: &str) -> Vec<String> {
            let mut parents: HashMap<&str, &str> = HashMap::new();
            let mut visited: HashSet<&str> = HashSet::new();
            let mut queue: VecDeque<&str> = VecDeque::new();
            queue.push_back(origin);
            visited.insert(origin);

            while let Some(current) = queue.pop_front() {
                if current == dest {
                    return Self::walk_back(origin, current, &parents);
                }
                if let Some(neighbors) = self.adjacency.get(current) {
                    for neighbor in neighbors {
                        if visited.insert(neighbor.as_str()) {
                            parents.insert(neighbor.as_str(), current);
                            queue.push_back(neighbor.as_str());
                        }
                    }
                }
            }
            Vec::new() // frontier exhausted
        }

        fn walk_back(origin: &str, dest: &str, parents: &HashMap<&str, &str>) -> Vec<String> {
            let mut path = vec![dest.to_string()];
            let mut step = dest;
            while step != origin {
                match parents.get(step) {
                    Some(&parent) => {
                        path.push(parent.to_string());
                        step = parent;
                    }
                    None => break,
                }
            }
            path.reverse();
            path
        }

        /// Number of single-letter steps on a shortest ladder, if any.
        pub fn ladder_distance(&self, origin: &str, dest: &str) -> Option<usize> {
            self.shortest_path(origin, dest).len().checked_sub(1)
        }

        /// Maps one vertex of each connected component (the one its traversal
        /// started from) to the component's size.
        pub fn list_components(&self) -> BTreeMap<String, usize> {
            let mut visited: HashSet<&str> = HashSet::new();
            let mut components = BTreeMap::new();

            for start in self.adjacency.keys() {
                if !visited.insert(start.as_str()) {
                    continue; // already counted in an earlier component
                }
                let mut stack = vec![start.as_str()];
                let mut size = 0;
                while let Some(current) = stack.pop() {
                    size += 1;
                    if let Some(neighbors) = self.adjacency.get(current) {
                        for neighbor in neighbors {
                            if visited.insert(neighbor.as_str()) {
                                stack.push(neighbor.as_str());
                            }
                        }
                    }
                }
                components.insert(start.clone(), size);
            }
            components
        }

        pub fn largest_component_size(&self) -> usize {
            self.list_components().values().copied().max().unwrap_or(0)
        }
    }

    impl<S: Into<String>> FromIterator<S> for WordLadder {
        fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
            Self::from_words(words)
        }
    }
}

pub use error::WordListError;
pub use graph::WordLadder;
pub use ladder::differs_by_one;
pub use word_list::{read_words, WordListOptions};
