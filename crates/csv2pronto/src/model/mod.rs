pub mod iri;
pub mod literal;
pub mod ontology;
pub mod term;

pub use iri::IriMinter;
pub use literal::{typed, LiteralError, LiteralKind};
pub use term::{Literal, Node, Object, Triple};
