use tracing::debug;

use crate::graph::SafeGraph;
use crate::identity::IdentifierStrategy;
use crate::model::literal::{string, typed, LiteralKind};
use crate::model::ontology::{gr, pr, standard};
use crate::model::{Literal, Node};
use crate::row::Row;

/// The four surface measurements a listing may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Total,
    Covered,
    Uncovered,
    Land,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 4] = [
        SurfaceKind::Total,
        SurfaceKind::Covered,
        SurfaceKind::Uncovered,
        SurfaceKind::Land,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceKind::Total => "total",
            SurfaceKind::Covered => "covered",
            SurfaceKind::Uncovered => "uncovered",
            SurfaceKind::Land => "land",
        }
    }

    /// Value columns, primary first then the reconstructed one.
    pub fn value_columns(self) -> [String; 2] {
        let s = self.as_str();
        [format!("{s}_surface"), format!("reconstructed_{s}_surface")]
    }

    /// Unit columns, primary first then the reconstructed one.
    pub fn unit_columns(self) -> [String; 2] {
        let s = self.as_str();
        [format!("{s}_surface_unit"), format!("reconstructed_{s}_surface_unit")]
    }

    /// First value that parses as `xsd:float` and first unit, each falling
    /// back to the reconstructed column.
    pub fn resolve<'r>(self, row: &'r Row) -> Option<(Literal, &'r str)> {
        let value = self
            .value_columns()
            .iter()
            .filter_map(|c| row.column(c))
            .find_map(|v| typed(LiteralKind::Float, Some(v)).ok())?;
        let unit = self.unit_columns().iter().find_map(|c| row.column(c))?;
        Some((value, unit))
    }
}

/// Add a size specification as a fresh blank node attached to `space`.
pub fn add_surface(
    g: &mut SafeGraph,
    space: &Node,
    value: Literal,
    unit: &str,
    kind: SurfaceKind,
) -> Node {
    let surface = IdentifierStrategy::anonymous();

    g.add(&surface, standard::RDF_TYPE, pr::SIZE_SPECIFICATION);
    g.add(&surface, gr::HAS_VALUE, value);
    g.add(&surface, gr::HAS_UNIT_OF_MEASUREMENT, string(Some(unit)));
    g.add(&surface, pr::SIZE_TYPE, string(Some(kind.as_str())));

    g.add(space, pr::HAS_SIZE_SPECIFICATION, &surface);

    surface
}

/// Add every surface kind that has both a numeric value and a unit.
pub fn add_surfaces(g: &mut SafeGraph, space: &Node, row: &Row) -> Vec<Node> {
    SurfaceKind::ALL
        .into_iter()
        .filter_map(|kind| match kind.resolve(row) {
            Some((value, unit)) => Some(add_surface(g, space, value, unit, kind)),
            None => {
                debug!(
                    surface = kind.as_str(),
                    "surface skipped: no numeric value with a unit"
                );
                None
            }
        })
        .collect()
}
