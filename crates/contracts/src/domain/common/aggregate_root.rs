use super::EntityMetadata;

/// Trait implemented by every aggregate root
///
/// Instance accessors plus static metadata about the aggregate class.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "PAT-2025-001")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "patient")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Patient")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Patients")
    fn list_name() -> &'static str;

    /// Full aggregate name (e.g. "a001_patient"), used as the table name
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
