mod profile_store;

pub use profile_store::MokaProfileStore;
