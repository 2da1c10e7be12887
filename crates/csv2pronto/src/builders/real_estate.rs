use crate::error::Result;
use crate::graph::SafeGraph;
use crate::identity::{EntityKind, IdentifierStrategy};
use crate::model::literal::string;
use crate::model::ontology::{pr, rec, standard};
use crate::model::Node;
use crate::row::{Field, Row};

use super::space::add_space;

/// Add the real estate and the space it includes; return the real estate node.
pub fn add_real_estate(g: &mut SafeGraph, row: &Row, ids: &IdentifierStrategy) -> Result<Node> {
    let real_estate = ids.identify(EntityKind::RealEstate, row);
    g.add(&real_estate, standard::RDF_TYPE, rec::REAL_ESTATE);
    g.add(&real_estate, pr::PROPERTY_TYPE, string(row.get(Field::PropertyType)));

    let space = add_space(g, row, ids)?;
    g.add(&real_estate, rec::INCLUDES, &space);

    Ok(real_estate)
}
