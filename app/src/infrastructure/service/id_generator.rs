use domain::service::IdGenerator;
use uuid::Uuid;

/// Random v4 UUIDs in simple (32 hex chars) form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
