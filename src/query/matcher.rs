//! Single-edit string matching
//!
//! Classifies how two words relate (identical, one substitution, one
//! inserted or deleted character, or unrelated) and turns that
//! classification into an integer similarity score. Earlier edits in a
//! word are penalized more heavily than later ones.
//!
//! Positions and lengths are counted in chars, not bytes.

/// Score returned when two strings are more than one edit apart
pub const INVALID_SCORE: i32 = -100;

/// Which side of a comparison holds the extra character of an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first argument (`a`)
    Left,
    /// The second argument (`b`)
    Right,
}

/// Outcome of comparing two words
///
/// The comparison is directional: `classify(a, b)` reports `Insertion`
/// exactly when `classify(b, a)` reports `Deletion` at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typo {
    Match,
    /// Same length, only the char at `index` differs
    Substitution { index: usize },
    /// `a` has one extra char at `index`; removing it yields `b`
    Insertion { index: usize },
    /// `b` has one extra char at `index`; removing it yields `a`
    Deletion { index: usize },
    Invalid,
}

impl Typo {
    /// True for the three single-edit outcomes
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Typo::Substitution { .. } | Typo::Insertion { .. } | Typo::Deletion { .. }
        )
    }

    /// Char index of the edit, if there is one
    pub fn position(&self) -> Option<usize> {
        match *self {
            Typo::Substitution { index } | Typo::Insertion { index } | Typo::Deletion { index } => {
                Some(index)
            }
            Typo::Match | Typo::Invalid => None,
        }
    }

    /// The side carrying the extra char for insertions and deletions
    pub fn extra_side(&self) -> Option<Side> {
        match self {
            Typo::Insertion { .. } => Some(Side::Left),
            Typo::Deletion { .. } => Some(Side::Right),
            _ => None,
        }
    }
}

/// Penalty buckets indexed by edit position; positions past the end use the last entry
#[derive(Debug, Clone)]
pub struct Penalties {
    pub substitution: [i32; 5],
    pub insertion_deletion: [i32; 5],
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            substitution: [5, 4, 3, 2, 1],
            insertion_deletion: [10, 8, 6, 4, 2],
        }
    }
}

fn bucket(table: &[i32; 5], index: usize) -> i32 {
    table[index.min(table.len() - 1)]
}

/// Typo-aware word comparison and scoring
#[derive(Debug, Clone, Default)]
pub struct StringMatcher {
    penalties: Penalties,
}

impl StringMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom penalty tables
    pub fn with_penalties(penalties: Penalties) -> Self {
        Self { penalties }
    }

    pub fn substitution_penalty(&self, index: usize) -> i32 {
        bucket(&self.penalties.substitution, index)
    }

    pub fn edit_penalty(&self, index: usize) -> i32 {
        bucket(&self.penalties.insertion_deletion, index)
    }

    /// Classify the relationship between `a` and `b`
    pub fn classify(&self, a: &str, b: &str) -> Typo {
        if a == b {
            return Typo::Match;
        }

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();

        if a_chars.len() == b_chars.len() {
            return classify_substitution(&a_chars, &b_chars);
        }

        if a_chars.len() == b_chars.len() + 1 {
            return match removal_index(&a_chars, &b_chars) {
                Some(index) => Typo::Insertion { index },
                None => Typo::Invalid,
            };
        }

        if a_chars.len() + 1 == b_chars.len() {
            return match removal_index(&b_chars, &a_chars) {
                Some(index) => Typo::Deletion { index },
                None => Typo::Invalid,
            };
        }

        Typo::Invalid
    }

    /// Similarity score of `a` against `b`; higher is better
    pub fn score(&self, a: &str, b: &str) -> i32 {
        let len = a.chars().count() as i32;

        match self.classify(a, b) {
            Typo::Match => 2 * len,
            Typo::Substitution { index } => 2 * (len - 1) - self.substitution_penalty(index),
            Typo::Insertion { index } | Typo::Deletion { index } => {
                2 * (len - 1) - self.edit_penalty(index)
            }
            Typo::Invalid => INVALID_SCORE,
        }
    }
}

fn classify_substitution(a: &[char], b: &[char]) -> Typo {
    let mut diffs = a.iter().zip(b).enumerate().filter(|(_, (x, y))| x != y);

    match (diffs.next(), diffs.next()) {
        (Some((index, _)), None) => Typo::Substitution { index },
        // Equal strings are handled before this point
        (None, _) => Typo::Match,
        (Some(_), Some(_)) => Typo::Invalid,
    }
}

/// Lowest index whose removal from `longer` reproduces `shorter`
fn removal_index(longer: &[char], shorter: &[char]) -> Option<usize> {
    let prefix = longer
        .iter()
        .zip(shorter)
        .take_while(|(x, y)| x == y)
        .count();

    if longer[prefix + 1..] != shorter[prefix..] {
        return None;
    }

    // Any index inside a run of the same char works; report the first one
    let mut index = prefix;
    while index > 0 && longer[index - 1] == longer[prefix] {
        index -= 1;
    }
    Some(index)
}
