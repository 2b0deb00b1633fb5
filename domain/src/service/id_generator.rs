/// Source of collision-resistant identifiers for staging directories and job names.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}
