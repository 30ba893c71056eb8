//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. The client calls [`Query::validate`]
/// before building the request URL, so a failing query never reaches the network.
pub trait Query {
    /// Checks the query's arguments. Queries without required arguments accept everything.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Endpoints that take no parameters beyond the API key.
impl Query for () {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}
