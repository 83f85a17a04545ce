#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod catalog;
pub mod command;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod id_generator;
pub mod panels;
pub mod pending;
pub mod renderer;
pub mod style;

pub use app::{BuilderApp, dispatch};
pub use catalog::ElementKind;
pub use command::Command;
pub use document::Document;
pub use element::{ElementContent, ElementId, PlacedElement};
pub use error::DropError;
pub use file_handler::FileHandler;
pub use pending::PendingEdits;
pub use renderer::Renderer;
pub use style::StyleMap;
