//! Main module for markup conversion functionality

pub mod ast;
pub mod error;
pub mod formats;
pub mod inlines;
pub mod normalization;
pub mod parsing;
pub mod recovery;
pub mod style_tags;
