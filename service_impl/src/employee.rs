use std::sync::Arc;

use crate::gen_service_impl;
use async_trait::async_trait;
use dao::{
    employee::{EmployeeDao, EmployeeEntity},
    TransactionDao,
};
use service::{
    clock::ClockService,
    config::ConfigService,
    employee::{Employee, EmployeeService},
    uuid_service::UuidService,
    ServiceError, ValidationFailureItem,
};
use tracing::info;
use uuid::Uuid;

const EMPLOYEE_SERVICE_PROCESS: &str = "employee-service";

gen_service_impl! {
    struct EmployeeServiceImpl: EmployeeService = EmployeeServiceDeps {
        EmployeeDao: EmployeeDao<Transaction = Self::Transaction> = employee_dao,
        ConfigService: ConfigService = config_service,
        UuidService: UuidService = uuid_service,
        ClockService: ClockService = clock_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

fn validate(employee: &Employee) -> Result<(), ServiceError> {
    let mut validation = Vec::new();
    if employee.id.trim().is_empty() {
        validation.push(ValidationFailureItem::InvalidValue("id".into()));
    }
    if employee.name.trim().is_empty() {
        validation.push(ValidationFailureItem::InvalidValue("name".into()));
    }
    if !validation.is_empty() {
        return Err(ServiceError::ValidationError(validation.into()));
    }
    Ok(())
}

#[async_trait]
impl<Deps: EmployeeServiceDeps> EmployeeService for EmployeeServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn get_all(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[Employee]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let employees = self
            .employee_dao
            .find_all(tx.clone())
            .await?
            .iter()
            .map(Employee::from)
            .collect();
        self.transaction_dao.commit(tx).await?;
        Ok(employees)
    }

    async fn get(&self, id: &str, tx: Option<Self::Transaction>) -> Result<Employee, ServiceError> {
        self.find(id, tx)
            .await?
            .ok_or_else(|| ServiceError::EmployeeNotFound(id.into()))
    }

    async fn find(
        &self,
        id: &str,
        tx: Option<Self::Transaction>,
    ) -> Result<Option<Employee>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let employee = self
            .employee_dao
            .find_by_id(id.trim(), tx.clone())
            .await?
            .filter(|entity| entity.deleted.is_none())
            .map(Employee::from);
        self.transaction_dao.commit(tx).await?;
        Ok(employee)
    }

    async fn create(
        &self,
        employee: &Employee,
        tx: Option<Self::Transaction>,
    ) -> Result<Employee, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        validate(employee)?;
        if employee.version != Uuid::nil() {
            return Err(ServiceError::VersionSetOnCreate);
        }

        let id: Arc<str> = employee.id.trim().into();
        let existing = self.employee_dao.find_by_id(&id, tx.clone()).await?;
        if existing
            .as_ref()
            .is_some_and(|entity| entity.deleted.is_none())
        {
            return Err(ServiceError::EmployeeAlreadyExists(id));
        }

        let level_tier = if employee.level_tier.trim().is_empty() {
            self.config_service.get_config().await?.default_level_tier
        } else {
            employee.level_tier.clone()
        };
        let employee = Employee {
            id,
            level_tier,
            created: Some(self.clock_service.date_time_now()),
            deleted: None,
            version: self.uuid_service.new_uuid("employee-version"),
            ..employee.clone()
        };
        let entity = EmployeeEntity::try_from(&employee)?;

        if existing.is_some() {
            info!(employee_id = %employee.id, "Restore deleted employee");
            self.employee_dao
                .update(&entity, EMPLOYEE_SERVICE_PROCESS, tx.clone())
                .await?;
        } else {
            info!(employee_id = %employee.id, "Create employee");
            self.employee_dao
                .create(&entity, EMPLOYEE_SERVICE_PROCESS, tx.clone())
                .await?;
        }

        self.transaction_dao.commit(tx).await?;
        Ok(employee)
    }

    async fn update(
        &self,
        employee: &Employee,
        tx: Option<Self::Transaction>,
    ) -> Result<Employee, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        validate(employee)?;

        let persisted = self
            .employee_dao
            .find_by_id(&employee.id, tx.clone())
            .await?
            .filter(|entity| entity.deleted.is_none())
            .ok_or_else(|| ServiceError::EmployeeNotFound(employee.id.clone()))?;

        if employee.version != persisted.version {
            return Err(ServiceError::EmployeeConflicts(
                employee.id.clone(),
                persisted.version,
                employee.version,
            ));
        }

        let employee = Employee {
            created: Some(persisted.created),
            deleted: None,
            version: self.uuid_service.new_uuid("employee-version"),
            ..employee.clone()
        };
        self.employee_dao
            .update(
                &EmployeeEntity::try_from(&employee)?,
                EMPLOYEE_SERVICE_PROCESS,
                tx.clone(),
            )
            .await?;

        self.transaction_dao.commit(tx).await?;
        Ok(employee)
    }

    async fn delete(&self, id: &str, tx: Option<Self::Transaction>) -> Result<(), ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let mut entity = self
            .employee_dao
            .find_by_id(id, tx.clone())
            .await?
            .filter(|entity| entity.deleted.is_none())
            .ok_or_else(|| ServiceError::EmployeeNotFound(id.into()))?;
        entity.deleted = Some(self.clock_service.date_time_now());
        entity.version = self.uuid_service.new_uuid("employee-version");
        info!(employee_id = %entity.id, "Delete employee");
        self.employee_dao
            .update(&entity, EMPLOYEE_SERVICE_PROCESS, tx.clone())
            .await?;
        self.transaction_dao.commit(tx).await?;
        Ok(())
    }
}
