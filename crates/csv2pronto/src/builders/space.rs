use crate::error::{ConvertError, FieldContext, Result};
use crate::graph::SafeGraph;
use crate::identity::{EntityKind, IdentifierStrategy};
use crate::model::literal::{string, typed, LiteralKind};
use crate::model::ontology::{pr, rec, schema, standard};
use crate::model::Node;
use crate::row::{Field, Row};

use super::feature::{add_features, parse_features};
use super::region::add_regions;
use super::room::{add_rooms, parse_count};
use super::surface::add_surfaces;

const COORDINATES: [(Field, &str); 2] = [
    (Field::Latitude, schema::LATITUDE),
    (Field::Longitude, schema::LONGITUDE),
];

const FLAGS: [(Field, &str); 3] = [
    (Field::IsNewProperty, pr::IS_BRAND_NEW),
    (Field::IsFinished, pr::IS_FINISHED),
    (Field::IsStudioApartment, pr::IS_STUDIO_APARTMENT),
];

const DESCRIPTORS: [(Field, &str); 3] = [
    (Field::Luminosity, pr::LUMINOSITY),
    (Field::Orientation, pr::ORIENTATION),
    (Field::Disposition, pr::DISPOSITION),
];

/// Add the physical space of the listing with its address, flags,
/// features, surfaces, rooms and regions.
pub fn add_space(g: &mut SafeGraph, row: &Row, ids: &IdentifierStrategy) -> Result<Node> {
    let space = ids.identify(EntityKind::Space, row);
    g.add(&space, standard::RDF_TYPE, rec::SPACE);
    g.add(&space, schema::ADDRESS, string(row.get(Field::Address)));

    for (field, predicate) in COORDINATES {
        let coordinate = typed(LiteralKind::Double, row.get(field)).field(field)?;
        g.add(&space, predicate, coordinate);
    }

    let year = row.get(Field::YearBuilt).map(year_built).transpose()?;
    let year = typed(LiteralKind::Integer, year.as_deref()).field(Field::YearBuilt)?;
    g.add(&space, schema::YEAR_BUILT, year);

    for (field, predicate) in FLAGS {
        let flag = typed(LiteralKind::Boolean, row.get(field)).field(field)?;
        g.add(&space, predicate, flag);
    }
    for (field, predicate) in DESCRIPTORS {
        g.add(&space, predicate, string(row.get(field)));
    }

    let rooms = row
        .get(Field::RoomAmnt)
        .and_then(parse_count)
        .map(|n| n.to_string());
    let rooms = typed(LiteralKind::Integer, rooms.as_deref()).field(Field::RoomAmnt)?;
    g.add(&space, pr::HAS_AMOUNT_OF_ROOMS, rooms);

    if space.is_present() {
        add_features(g, ids, &space, row)?;
        add_surfaces(g, &space, row);
        add_rooms(g, ids, &space, row);
    } else {
        // A bad blob rejects the row even when the space is unknown.
        parse_features(row)?;
    }

    add_regions(g, ids, &space, row);

    Ok(space)
}

/// Years are often exported as floats (`1990.0`); keep the integer part.
fn year_built(raw: &str) -> Result<String> {
    match raw.trim().parse::<f64>() {
        Ok(year) if year.is_finite() => Ok((year.trunc() as i64).to_string()),
        _ => Err(ConvertError::malformed(
            Field::YearBuilt,
            format!("{raw:?} is not a year"),
        )),
    }
}
