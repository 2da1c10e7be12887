//! IRI minting for listing entities in the Pronto namespace.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that need percent-encoding in an IRI fragment.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987.
const IRI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters an N-Triples IRIREF cannot hold; used for IRIs taken from input.
const EXTERNAL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Whether `value` starts with a URI scheme (`scheme:`), i.e. can be an
/// absolute IRI rather than a relative reference.
pub fn has_scheme(value: &str) -> bool {
    let Some((scheme, _)) = value.trim().split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Make an IRI taken verbatim from input (a listing URL) safe to serialize.
/// Already-valid IRIs come back unchanged.
pub fn external_iri(value: &str) -> String {
    utf8_percent_encode(value.trim(), EXTERNAL_ENCODE_SET).to_string()
}

/// Generates consistent IRIs for listing entities.
///
/// Every IRI is the namespace followed by one percent-encoded local name, so
/// separators in the input (`#`, `/`, `?`) can never reshape the namespace.
#[derive(Debug, Clone)]
pub struct IriMinter {
    namespace: String,
}

impl IriMinter {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Escape a string for use in an IRI local name.
    pub fn escape(value: &str) -> String {
        utf8_percent_encode(value, IRI_ENCODE_SET).to_string()
    }

    /// Reverse [`escape`](Self::escape).
    pub fn unescape(value: &str) -> String {
        percent_decode_str(value).decode_utf8_lossy().into_owned()
    }

    /// IRI for an arbitrary local name, escaped as a whole.
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.namespace, Self::escape(local))
    }

    /// IRI for a listing (`listing_{site}_{listing_id}`).
    pub fn listing_iri(&self, site: &str, listing_id: &str) -> String {
        self.term(&format!("listing_{site}_{listing_id}"))
    }

    /// IRI for the site a listing was published on.
    pub fn site_iri(&self, site: &str) -> String {
        self.term(site)
    }

    /// IRI for a real estate agent, keyed by advertiser name.
    pub fn agent_iri(&self, advertiser_name: &str) -> String {
        self.term(&format!("agent_{advertiser_name}"))
    }

    /// IRI for an advertiser's user account on a site.
    pub fn account_iri(&self, site: &str, advertiser_id: &str) -> String {
        self.term(&format!("account_{site}_{advertiser_id}"))
    }

    pub fn real_estate_iri(&self, site: &str, listing_id: &str) -> String {
        self.term(&format!("real_estate_{site}_{listing_id}"))
    }

    pub fn space_iri(&self, site: &str, listing_id: &str) -> String {
        self.term(&format!("space_{site}_{listing_id}"))
    }

    pub fn province_iri(&self, province: &str) -> String {
        self.term(&format!("province_{province}"))
    }

    pub fn district_iri(&self, province: &str, district: &str) -> String {
        self.term(&format!("district_{province}_{district}"))
    }

    pub fn neighborhood_iri(&self, province: &str, district: &str, neighborhood: &str) -> String {
        self.term(&format!("neighborhood_{province}_{district}_{neighborhood}"))
    }

    /// IRI for a feature, scoped to its name and value.
    pub fn feature_iri(&self, name: &str, value: &str) -> String {
        self.term(&format!("feature_{name}_{value}"))
    }

    /// IRI for the `ordinal`-th room of a kind inside a space.
    ///
    /// `space_iri` is already escaped; only safe characters are appended.
    pub fn room_iri(&self, space_iri: &str, room: &str, ordinal: u32) -> String {
        format!("{}_{}_{}", space_iri, Self::escape(room), ordinal)
    }

    /// IRI built from an entity counter (`{kind}_{timestamp}_{n}`).
    pub fn incremental_iri(&self, kind: &str, timestamp: &str, n: u64) -> String {
        self.term(&format!("{kind}_{timestamp}_{n}"))
    }
}
