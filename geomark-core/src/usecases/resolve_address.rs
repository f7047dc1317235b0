use super::prelude::*;

/// The candidate list of a successful response was empty.
const NO_CANDIDATES: &str = "no results";

/// Resolves free-text addresses into map coordinates.
///
/// The credential is injected at construction; without one
/// no request will ever be sent.
#[derive(Debug, Clone)]
pub struct AddressResolver<G> {
    gateway: G,
    api_key: Option<ApiKey>,
}

impl<G> AddressResolver<G> {
    pub const fn new(gateway: G, api_key: Option<ApiKey>) -> Self {
        Self { gateway, api_key }
    }

    pub const fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<G> AddressResolver<G>
where
    G: GeoCodingGateway,
{
    /// Looks up the first candidate of `address`.
    ///
    /// Preconditions are checked in this order before anything is sent:
    /// credential, map readiness, non-empty address.
    pub async fn resolve(&self, loader: LoaderState, address: &AddressQuery) -> Result<MapPoint> {
        let Some(api_key) = &self.api_key else {
            return Err(Error::MissingCredential);
        };
        if !loader.is_loaded() {
            return Err(Error::NotReady);
        }
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }
        log::debug!("Resolve address '{address}'");
        let candidates = self.gateway.forward(api_key, address).await?;
        let Some(pos) = candidates.into_iter().next() else {
            return Err(Error::GeocodeFailed(NO_CANDIDATES.to_string()));
        };
        log::info!("Resolved address '{address}': {pos}");
        Ok(pos)
    }

    /// Resolves the current address of `state` and stores the result.
    ///
    /// Failures are logged and leave the previous coordinate untouched.
    pub async fn resolve_into(
        &self,
        state: &mut ResolverState,
        loader: LoaderState,
    ) -> Option<MapPoint> {
        let address = state.start_resolving().ok()?;
        let result = self.resolve(loader, &address).await;
        state.finish_resolving(result)
    }
}
