/// Opaque participant identity, minted as `user-<uuid4>` when a connection
/// enters matchmaking. Scoped to the process lifetime.
pub type PlayerId = String;
