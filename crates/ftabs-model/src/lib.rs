//! Document tree and group model for filter-tab rendering.
//!
//! This crate provides the data structures shared by the parse and resolve
//! phases of the filter-tabs pipeline:
//!
//! - [`Document`]: an arena-backed document tree with stable [`NodeId`]
//!   addressing, so content can move between owners without duplication.
//! - [`Group`] / [`Slot`]: the normalized model a renderer consumes.
//! - [`Diagnostic`]: the taxonomy of warnings and errors the pipeline emits.
//!
//! Draft nodes ([`GroupMeta`], [`SlotMeta`]) are produced by the parser and
//! carry raw, unvalidated options. Normalization turns them into [`Group`]
//! values, transferring content ownership out of the tree via
//! [`Document::take_children`].

mod diagnostics;
mod group;
mod tree;

pub use diagnostics::{Diagnostic, Severity};
pub use group::{BuilderFormat, DetailsMeta, Group, GroupMeta, Slot, SlotMeta};
pub use tree::{Document, Node, NodeId, NodeKind};
