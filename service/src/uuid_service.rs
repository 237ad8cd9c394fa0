use mockall::automock;
use uuid::Uuid;

#[automock]
pub trait UuidService {
    /// `usage` names the purpose of the id and shows up in test expectations.
    fn new_uuid(&self, usage: &str) -> Uuid;
}
