//! The parsed document tree consumed by the renderer.
//!
//! The types in [`nodes`] are the contract with the parsing stage: a closed,
//! tagged tree where every variant carries exactly the payload defined for
//! its kind. The renderer treats this tree as read-only input.

pub mod nodes;

pub use nodes::{
    CodeBlock, DocumentNode, Heading, Image, Link, List, ListItem, Node, Table, TableRow,
    UnknownNode,
};
