//! RDF vocabulary constants for the Pronto real-estate ontology.
//!
//! - `pr:` prefix -- Pronto classes and properties (default instance namespace too)
//! - `sioc:`, `gr:`, `rec:`, `building:`, `schema:`, `dc:`, `foaf:` -- external vocabularies
//!   the mapping reuses for social content, commerce, real-estate-core and buildings

/// Standard RDF/RDFS/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// Pronto ontology (`pr:` prefix)
pub mod pr {
    pub const PREFIX: &str = "pr";
    pub const NS: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#";

    // Classes
    pub const REAL_ESTATE_LISTING: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#RealEstateListing";
    pub const FEATURE: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#Feature";
    pub const SIZE_SPECIFICATION: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#SizeSpecification";

    // Properties
    pub const MANAGED_BY: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#managed_by";
    pub const MANAGES: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#manages";
    pub const IS_BRAND_NEW: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#is_brand_new";
    pub const IS_FINISHED: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#is_finished";
    pub const IS_STUDIO_APARTMENT: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#is_studio_apartment";
    pub const LUMINOSITY: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#luminosity";
    pub const ORIENTATION: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#orientation";
    pub const DISPOSITION: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#disposition";
    pub const PROPERTY_TYPE: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#property_type";
    pub const HAS_FEATURE: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#has_feature";
    pub const HAS_VALUE: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#has_value";
    pub const HAS_SIZE_SPECIFICATION: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#hasSizeSpecification";
    pub const SIZE_TYPE: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#size_type";
    pub const HAS_AMOUNT_OF_ROOMS: &str =
        "https://raw.githubusercontent.com/fdioguardi/pronto/main/ontology/pronto.owl#has_amount_of_rooms";
}

/// Semantically-Interlinked Online Communities (`sioc:` prefix)
pub mod sioc {
    pub const PREFIX: &str = "sioc";
    pub const NS: &str = "http://rdfs.org/sioc/ns#";

    pub const USER_ACCOUNT: &str = "http://rdfs.org/sioc/ns#UserAccount";

    pub const LINK: &str = "http://rdfs.org/sioc/ns#link";
    pub const ID: &str = "http://rdfs.org/sioc/ns#id";
    pub const NAME: &str = "http://rdfs.org/sioc/ns#name";
    pub const READ_AT: &str = "http://rdfs.org/sioc/ns#read_at";
    pub const HAS_SPACE: &str = "http://rdfs.org/sioc/ns#has_space";
    pub const SPACE_OF: &str = "http://rdfs.org/sioc/ns#space_of";
    pub const HAS_CREATOR: &str = "http://rdfs.org/sioc/ns#has_creator";
    pub const CREATOR_OF: &str = "http://rdfs.org/sioc/ns#creator_of";
    pub const ACCOUNT_OF: &str = "http://rdfs.org/sioc/ns#account_of";
    pub const ABOUT: &str = "http://rdfs.org/sioc/ns#about";
}

/// GoodRelations commerce vocabulary (`gr:` prefix)
pub mod gr {
    pub const PREFIX: &str = "gr";
    pub const NS: &str = "http://purl.org/goodrelations/v1#";

    pub const UNIT_PRICE_SPECIFICATION: &str = "http://purl.org/goodrelations/v1#UnitPriceSpecification";
    pub const SELL: &str = "http://purl.org/goodrelations/v1#Sell";
    pub const LEASE_OUT: &str = "http://purl.org/goodrelations/v1#LeaseOut";

    pub const HAS_BUSINESS_FUNCTION: &str = "http://purl.org/goodrelations/v1#hasBusinessFunction";
    pub const HAS_PRICE_SPECIFICATION: &str =
        "http://purl.org/goodrelations/v1#hasPriceSpecification";
    pub const HAS_CURRENCY_VALUE: &str = "http://purl.org/goodrelations/v1#hasCurrencyValue";
    pub const HAS_CURRENCY: &str = "http://purl.org/goodrelations/v1#hasCurrency";
    pub const PRICE_TYPE: &str = "http://purl.org/goodrelations/v1#priceType";
    pub const HAS_VALUE: &str = "http://purl.org/goodrelations/v1#hasValue";
    pub const HAS_UNIT_OF_MEASUREMENT: &str =
        "http://purl.org/goodrelations/v1#hasUnitOfMeasurement";
}

/// RealEstateCore (`rec:` prefix)
pub mod rec {
    pub const PREFIX: &str = "rec";
    pub const NS: &str = "https://w3id.org/rec/core/";

    pub const REAL_ESTATE: &str = "https://w3id.org/rec/core/RealEstate";
    pub const SPACE: &str = "https://w3id.org/rec/core/Space";
    pub const REGION: &str = "https://w3id.org/rec/core/Region";

    pub const INCLUDES: &str = "https://w3id.org/rec/core/includes";
    pub const LOCATED_IN: &str = "https://w3id.org/rec/core/locatedIn";
    pub const HAS_PART: &str = "https://w3id.org/rec/core/hasPart";
}

/// RealEstateCore building module (`building:` prefix)
pub mod building {
    pub const PREFIX: &str = "building";
    pub const NS: &str = "https://w3id.org/rec/building/";

    pub const BATHROOM: &str = "https://w3id.org/rec/building/Bathroom";
    pub const GARAGE: &str = "https://w3id.org/rec/building/Garage";
    pub const BEDROOM: &str = "https://w3id.org/rec/building/Bedroom";
    pub const TOILET: &str = "https://w3id.org/rec/building/Toilet";
}

/// schema.org (`schema:` prefix)
pub mod schema {
    pub const PREFIX: &str = "schema";
    pub const NS: &str = "https://schema.org/";

    pub const ADDRESS: &str = "https://schema.org/address";
    pub const LATITUDE: &str = "https://schema.org/latitude";
    pub const LONGITUDE: &str = "https://schema.org/longitude";
    pub const YEAR_BUILT: &str = "https://schema.org/yearBuilt";
}

/// Dublin Core elements (`dc:` prefix)
pub mod dc {
    pub const PREFIX: &str = "dc";
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    pub const DATE: &str = "http://purl.org/dc/elements/1.1/date";
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
}

/// Friend of a Friend (`foaf:` prefix)
pub mod foaf {
    pub const PREFIX: &str = "foaf";
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";

    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";

    pub const ACCOUNT: &str = "http://xmlns.com/foaf/0.1/account";
    pub const MAKER: &str = "http://xmlns.com/foaf/0.1/maker";
    pub const MADE: &str = "http://xmlns.com/foaf/0.1/made";
}

/// Every `(prefix, namespace)` pair the converter writes, in registration order.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", standard::RDF),
    ("rdfs", standard::RDFS),
    ("xsd", standard::XSD),
    (pr::PREFIX, pr::NS),
    (sioc::PREFIX, sioc::NS),
    (gr::PREFIX, gr::NS),
    (rec::PREFIX, rec::NS),
    (building::PREFIX, building::NS),
    (schema::PREFIX, schema::NS),
    (dc::PREFIX, dc::NS),
    (foaf::PREFIX, foaf::NS),
];
