use crate::error::{FieldContext, Result};
use crate::graph::SafeGraph;
use crate::identity::{EntityKind, IdentifierStrategy};
use crate::model::iri::{external_iri, has_scheme};
use crate::model::literal::{string, typed, LiteralKind};
use crate::model::ontology::{dc, gr, pr, sioc, standard};
use crate::model::Node;
use crate::row::{Field, Row};

use super::price::{add_price, PriceType};

/// Add the listing, its site and its prices; return the listing node.
pub fn add_listing(g: &mut SafeGraph, row: &Row, ids: &IdentifierStrategy) -> Result<Node> {
    let listing = ids.identify(EntityKind::Listing, row);
    g.add(&listing, standard::RDF_TYPE, pr::REAL_ESTATE_LISTING);

    // Relative links cannot be IRIs; keep them as xsd:anyURI literals.
    if let Some(url) = row.get(Field::Url) {
        if has_scheme(url) {
            g.add(&listing, sioc::LINK, Node::Iri(external_iri(url)));
        } else {
            let link = typed(LiteralKind::AnyUri, Some(url.trim())).field(Field::Url)?;
            g.add(&listing, sioc::LINK, link);
        }
    }
    g.add(&listing, standard::RDFS_LABEL, string(row.get(Field::Title)));
    g.add(&listing, standard::RDFS_COMMENT, string(row.get(Field::Description)));

    if let Some(transaction) = row.get(Field::Transaction) {
        let function = if transaction.trim().eq_ignore_ascii_case("venta") {
            gr::SELL
        } else {
            gr::LEASE_OUT
        };
        g.add(&listing, gr::HAS_BUSINESS_FUNCTION, function);
    }

    let site = ids.identify(EntityKind::Site, row);
    g.add(&listing, sioc::HAS_SPACE, &site);
    g.add(&site, sioc::SPACE_OF, &listing);

    g.add(&listing, sioc::ID, string(row.get(Field::ListingId)));

    for (field, predicate) in [
        (Field::DateExtracted, sioc::READ_AT),
        (Field::DatePublished, dc::DATE),
    ] {
        let date = typed(LiteralKind::DateTime, row.get(field)).field(field)?;
        g.add(&listing, predicate, date);
    }

    for p_type in [PriceType::Base, PriceType::MaintenanceFee] {
        let (value_field, currency_field) = p_type.fields();
        if let (Some(value), Some(currency)) = (row.get(value_field), row.get(currency_field)) {
            let price = add_price(g, value, currency, p_type)?;
            g.add(&listing, gr::HAS_PRICE_SPECIFICATION, &price);
        }
    }

    Ok(listing)
}
