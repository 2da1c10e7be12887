//! One builder per ontology entity.
//!
//! Every builder writes through a [`SafeGraph`](crate::graph::SafeGraph) and
//! returns the node it minted so the caller can link it. Absent optional
//! values produce no triple; malformed structured values fail the row.

pub mod agent;
pub mod feature;
pub mod listing;
pub mod price;
pub mod real_estate;
pub mod region;
pub mod room;
pub mod space;
pub mod surface;

pub use agent::{add_agent, AgentNodes};
pub use feature::add_features;
pub use listing::add_listing;
pub use price::{add_price, PriceType};
pub use real_estate::add_real_estate;
pub use region::{add_regions, RegionChain};
pub use room::{add_rooms, RoomKind};
pub use space::add_space;
pub use surface::{add_surface, add_surfaces, SurfaceKind};
