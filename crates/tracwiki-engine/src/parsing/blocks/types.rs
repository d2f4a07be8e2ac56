use super::parser::BlockParser;

/// Where the host resumes consuming the line after a block has taken its share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// Continue at this byte index of the line.
    Index(usize),
    /// Continue at this visual column (tabs expanded).
    Column(usize),
}

/// A recognizer's answer to "does a new block start here?"
#[derive(Debug)]
pub struct BlockStart {
    pub parser: BlockParser,
    pub resume: Resume,
}

impl BlockStart {
    pub fn at_index(parser: BlockParser, index: usize) -> Self {
        Self {
            parser,
            resume: Resume::Index(index),
        }
    }

    pub fn at_column(parser: BlockParser, column: usize) -> Self {
        Self {
            parser,
            resume: Resume::Column(column),
        }
    }
}

/// An open block's answer to "does this line continue you?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContinue {
    /// Not continued: the block (and everything inside it) is unmatched.
    None,
    /// Continued; the rest of the line starts at this position.
    At(Resume),
    /// Continued and completed by this line, which is fully consumed.
    Finished,
}

impl BlockContinue {
    pub fn at_index(index: usize) -> Self {
        BlockContinue::At(Resume::Index(index))
    }

    pub fn at_column(column: usize) -> Self {
        BlockContinue::At(Resume::Column(column))
    }
}
