//! Terraform configuration writer.
//!
//! Builds `module`, `output`, `variable`, `provider` and `resource` blocks
//! from plain configuration structs and writes them as canonically formatted
//! `.tf` files.
//!
//! # Module Organization
//!
//! - [`value`] - Input values and the typer that turns them into HCL expressions
//! - [`reference`] - Live references to other blocks (`module.x.y`, `var.x`)
//! - [`block`] - Block identity, the [`RenderBlock`] trait and the [`HclBlock`] union
//! - [`document`] - Grouping blocks by file and writing them to disk

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod block;
pub mod document;
mod error;
pub mod reference;
pub mod value;

pub use block::{Block, HclBlock, Module, Output, Provider, RenderBlock, Resource, Variable};
pub use document::{Document, OUTPUTS_FILE, RenderedFile, VARIABLES_FILE, WriteSummary};
pub use error::{Error, Result};
pub use reference::Reference;
pub use value::{Kind, TypedValue, Value, parse_expression, type_value};
