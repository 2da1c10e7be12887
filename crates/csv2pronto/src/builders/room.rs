use tracing::debug;

use crate::graph::SafeGraph;
use crate::identity::IdentifierStrategy;
use crate::model::ontology::{building, rec, standard};
use crate::model::Node;
use crate::row::{Field, Row};

/// Room kinds counted in the row, each with its own `*_amnt` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Bath,
    Garage,
    Bed,
    Toilette,
}

impl RoomKind {
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Bath,
        RoomKind::Garage,
        RoomKind::Bed,
        RoomKind::Toilette,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::Bath => "bath",
            RoomKind::Garage => "garage",
            RoomKind::Bed => "bed",
            RoomKind::Toilette => "toilette",
        }
    }

    pub fn field(self) -> Field {
        match self {
            RoomKind::Bath => Field::BathAmnt,
            RoomKind::Garage => Field::GarageAmnt,
            RoomKind::Bed => Field::BedAmnt,
            RoomKind::Toilette => Field::ToiletteAmnt,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RoomKind::Bath => building::BATHROOM,
            RoomKind::Garage => building::GARAGE,
            RoomKind::Bed => building::BEDROOM,
            RoomKind::Toilette => building::TOILET,
        }
    }
}

/// A room count: ASCII digits only. Anything else counts as no rooms.
pub fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Add one room node per declared room, linked to `space` by `rec:hasPart`.
///
/// Rooms of an IRI space get IRIs derived from it (`{space}_bath_0`, ...);
/// rooms of a blank space are blank nodes.
pub fn add_rooms(
    g: &mut SafeGraph,
    ids: &IdentifierStrategy,
    space: &Node,
    row: &Row,
) -> Vec<Node> {
    let mut rooms = Vec::new();

    for kind in RoomKind::ALL {
        let Some(raw) = row.get(kind.field()) else {
            continue;
        };
        let Some(count) = parse_count(raw) else {
            debug!(field = %kind.field(), value = raw, "room count is not a plain integer");
            continue;
        };

        for i in 0..count {
            let room = match space.as_iri() {
                Some(space_iri) => Node::Iri(ids.minter().room_iri(space_iri, kind.as_str(), i)),
                None => IdentifierStrategy::anonymous(),
            };
            g.add(&room, standard::RDF_TYPE, kind.class());
            g.add(space, rec::HAS_PART, &room);
            rooms.push(room);
        }
    }

    rooms
}
