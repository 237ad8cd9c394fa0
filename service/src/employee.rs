use std::sync::Arc;

use crate::ServiceError;
use async_trait::async_trait;
use dao::employee::EmployeeEntity;
use mockall::automock;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    /// Employee number, also the key overtime records refer to.
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub department: Arc<str>,
    pub title: Arc<str>,
    pub level_tier: Arc<str>,
    pub created: Option<PrimitiveDateTime>,
    pub deleted: Option<PrimitiveDateTime>,
    pub version: Uuid,
}

impl From<&EmployeeEntity> for Employee {
    fn from(entity: &EmployeeEntity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            department: entity.department.clone(),
            title: entity.title.clone(),
            level_tier: entity.level_tier.clone(),
            created: Some(entity.created),
            deleted: entity.deleted,
            version: entity.version,
        }
    }
}
lembur_utils::derive_from_reference!(EmployeeEntity, Employee);

impl TryFrom<&Employee> for EmployeeEntity {
    type Error = ServiceError;

    fn try_from(employee: &Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            title: employee.title.clone(),
            level_tier: employee.level_tier.clone(),
            created: employee.created.ok_or(ServiceError::InternalError)?,
            deleted: employee.deleted,
            version: employee.version,
        })
    }
}

#[automock(type Transaction=dao::MockTransaction;)]
#[async_trait]
pub trait EmployeeService {
    type Transaction: dao::Transaction;

    async fn get_all(&self, tx: Option<Self::Transaction>)
        -> Result<Arc<[Employee]>, ServiceError>;

    async fn get(&self, id: &str, tx: Option<Self::Transaction>) -> Result<Employee, ServiceError>;

    /// Like `get` but returns `None` for unknown employees.
    async fn find(
        &self,
        id: &str,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Employee>, ServiceError>;

    async fn create(
        &self,
        employee: &Employee,
        tx: Option<Self::Transaction>,
    ) -> Result<Employee, ServiceError>;

    async fn update(
        &self,
        employee: &Employee,
        tx: Option<Self::Transaction>,
    ) -> Result<Employee, ServiceError>;

    async fn delete(&self, id: &str, tx: Option<Self::Transaction>) -> Result<(), ServiceError>;
}
