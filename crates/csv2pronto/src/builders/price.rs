use crate::error::{FieldContext, Result};
use crate::graph::SafeGraph;
use crate::identity::IdentifierStrategy;
use crate::model::literal::{string, typed, LiteralKind};
use crate::model::ontology::{gr, standard};
use crate::model::Node;
use crate::row::Field;

/// Tag distinguishing the pricing facts a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceType {
    Base,
    MaintenanceFee,
}

impl PriceType {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceType::Base => "BASE",
            PriceType::MaintenanceFee => "MAINTENANCE FEE",
        }
    }

    /// Columns holding the value and currency for this price.
    pub fn fields(self) -> (Field, Field) {
        match self {
            PriceType::Base => (Field::Price, Field::Currency),
            PriceType::MaintenanceFee => (Field::MaintenanceFee, Field::MaintenanceFeeCurrency),
        }
    }
}

/// Add a price specification as a fresh blank node.
pub fn add_price(
    g: &mut SafeGraph,
    value: &str,
    currency: &str,
    p_type: PriceType,
) -> Result<Node> {
    let (value_field, _) = p_type.fields();
    let amount = typed(LiteralKind::Float, Some(value)).field(value_field)?;

    let price = IdentifierStrategy::anonymous();
    g.add(&price, standard::RDF_TYPE, gr::UNIT_PRICE_SPECIFICATION);
    g.add(&price, gr::HAS_CURRENCY_VALUE, amount);
    g.add(&price, gr::HAS_CURRENCY, string(Some(currency)));
    g.add(&price, gr::PRICE_TYPE, string(Some(p_type.as_str())));

    Ok(price)
}
