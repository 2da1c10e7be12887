use crate::error::{ConvertError, Result};
use crate::features;
use crate::graph::SafeGraph;
use crate::identity::IdentifierStrategy;
use crate::model::literal::string;
use crate::model::ontology::{dc, pr, standard};
use crate::model::Node;
use crate::row::{Field, Row};

/// The row's feature blob as `(name, value)` pairs; empty when absent.
pub fn parse_features(row: &Row) -> Result<Vec<(String, String)>> {
    match row.get(Field::Features) {
        Some(blob) => {
            features::parse(blob).map_err(|e| ConvertError::malformed(Field::Features, e))
        }
        None => Ok(Vec::new()),
    }
}

/// Add one feature per entry of the row's feature blob, attached to `owner`.
///
/// Features are keyed by name and value, so `Pileta: Si` is the same
/// resource for every listing that declares it.
pub fn add_features(
    g: &mut SafeGraph,
    ids: &IdentifierStrategy,
    owner: &Node,
    row: &Row,
) -> Result<Vec<Node>> {
    let entries = parse_features(row)?;

    let mut nodes = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let feature = Node::Iri(ids.minter().feature_iri(&name, &value));
        g.add(&feature, standard::RDF_TYPE, pr::FEATURE);
        g.add(owner, pr::HAS_FEATURE, &feature);
        g.add(&feature, standard::RDFS_LABEL, string(Some(&format!("{name}: {value}"))));
        g.add(&feature, dc::TITLE, string(Some(&name)));
        g.add(&feature, pr::HAS_VALUE, string(Some(&value)));
        nodes.push(feature);
    }
    Ok(nodes)
}
