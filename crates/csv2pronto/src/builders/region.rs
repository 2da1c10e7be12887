use crate::graph::SafeGraph;
use crate::identity::{EntityKind, IdentifierStrategy};
use crate::model::literal::string;
use crate::model::ontology::{rec, standard};
use crate::model::Node;
use crate::row::{Field, Row};

/// Province, district and neighborhood of one row, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionChain {
    pub province: Node,
    pub district: Node,
    pub neighborhood: Node,
}

/// Add the three region levels, place `space` in each and link the
/// containment chain neighborhood ⊂ district ⊂ province.
///
/// Levels whose names are missing resolve through the configured fallback;
/// with the sentinel default their triples simply vanish.
pub fn add_regions(
    g: &mut SafeGraph,
    ids: &IdentifierStrategy,
    space: &Node,
    row: &Row,
) -> RegionChain {
    let chain = RegionChain {
        province: ids.identify(EntityKind::Province, row),
        district: ids.identify(EntityKind::District, row),
        neighborhood: ids.identify(EntityKind::Neighborhood, row),
    };

    for (region, field) in [
        (&chain.neighborhood, Field::Neighborhood),
        (&chain.district, Field::District),
        (&chain.province, Field::Province),
    ] {
        g.add(region, standard::RDF_TYPE, rec::REGION);
        g.add(region, standard::RDFS_LABEL, string(row.get(field)));
        g.add(space, rec::LOCATED_IN, region);
    }

    g.add(&chain.neighborhood, rec::LOCATED_IN, &chain.district);
    g.add(&chain.neighborhood, rec::LOCATED_IN, &chain.province);
    g.add(&chain.district, rec::LOCATED_IN, &chain.province);

    chain
}
