/// Routes exposed by the remote API, relative to the base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Per-player statistics and match history.
    Bridge,
    MapRotation,
    Predator,
    /// Store catalog. Only served to applications allow-listed by the provider.
    Store,
    News,
    /// Server status. Displaying it requires attribution to apexlegendsstatus.com.
    Servers,
    NameToUid,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Bridge => "bridge",
            Endpoint::MapRotation => "maprotation",
            Endpoint::Predator => "predator",
            Endpoint::Store => "store",
            Endpoint::News => "news",
            Endpoint::Servers => "servers",
            Endpoint::NameToUid => "nametouid",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())?;
        Ok(())
    }
}
