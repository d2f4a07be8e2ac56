use crate::parsing::tree::{NodeId, Tree};

/// A run of one marker character on the delimiter stack.
///
/// Every character of the run is its own `Text` node in the tree; a processor
/// consumes characters from the inner end of each run.
#[derive(Debug, Clone)]
pub struct DelimiterRun {
    pub(crate) characters: Vec<NodeId>,
    pub(crate) delimiter_char: char,
    pub(crate) original_length: usize,
    pub(crate) can_open: bool,
    pub(crate) can_close: bool,
    pub(crate) previous: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl DelimiterRun {
    /// Characters still unconsumed.
    pub fn length(&self) -> usize {
        self.characters.len()
    }

    /// Length of the run as scanned, before any matching.
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    pub fn can_open(&self) -> bool {
        self.can_open
    }

    pub fn can_close(&self) -> bool {
        self.can_close
    }

    /// Innermost character of an opening run.
    pub fn opener(&self) -> NodeId {
        self.characters[self.characters.len() - 1]
    }

    /// Innermost character of a closing run.
    pub fn closer(&self) -> NodeId {
        self.characters[0]
    }

    /// The `n` innermost characters of an opening run, in document order.
    pub fn openers(&self, n: usize) -> &[NodeId] {
        &self.characters[self.characters.len() - n..]
    }

    /// The `n` innermost characters of a closing run, in document order.
    pub fn closers(&self, n: usize) -> &[NodeId] {
        &self.characters[..n]
    }
}

/// Matches an opening run against a closing run of the same character.
///
/// `process` wraps the nodes between the two runs and returns how many
/// characters it used from each side; `0` means "no match here", and the host
/// goes on to look further down the stack.
pub trait DelimiterProcessor: Sync {
    fn opening_char(&self) -> char;

    fn closing_char(&self) -> char;

    /// Runs shorter than this are plain text.
    fn min_length(&self) -> usize {
        1
    }

    fn process(&self, tree: &mut Tree, opening: &DelimiterRun, closing: &DelimiterRun) -> usize;
}
