use crate::graph::SafeGraph;
use crate::identity::{EntityKind, IdentifierStrategy};
use crate::model::literal::string;
use crate::model::ontology::{foaf, sioc, standard};
use crate::model::Node;
use crate::row::{Field, Row};

/// The advertiser as a person or agency, and its account on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentNodes {
    pub agent: Node,
    pub account: Node,
}

/// Add the real estate agent and its user account.
///
/// The agent is keyed by advertiser name and the account by site and
/// advertiser id, so the same advertiser resolves to the same nodes in
/// every row that names it.
pub fn add_agent(g: &mut SafeGraph, row: &Row, ids: &IdentifierStrategy) -> AgentNodes {
    let agent = ids.identify(EntityKind::Agent, row);
    let account = ids.identify(EntityKind::Account, row);

    g.add(&agent, standard::RDF_TYPE, foaf::AGENT);
    g.add(&account, standard::RDF_TYPE, sioc::USER_ACCOUNT);

    g.add(&account, sioc::ID, string(row.get(Field::AdvertiserId)));
    g.add(&account, sioc::NAME, string(row.get(Field::AdvertiserName)));
    g.add(&agent, foaf::ACCOUNT, &account);
    g.add(&account, sioc::ACCOUNT_OF, &agent);

    AgentNodes { agent, account }
}
