//! JSON document I/O for graphs, family trees, mazes and move logs.

pub mod documents;
pub mod reader;
pub mod writer;

pub use documents::{AncestryDocument, GraphDocument, MazeDocument, MovesDocument};
pub use reader::DocumentReader;
pub use writer::DocumentWriter;
