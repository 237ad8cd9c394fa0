use std::sync::Arc;

use crate::gen_service_impl;
use async_trait::async_trait;
use dao::{
    cut_off::{CutOffDao, CutOffEntity},
    TransactionDao,
};
use service::{
    clock::ClockService,
    cut_off::{resolve_periods, CutOffPeriod, CutOffService, PeriodSelection},
    uuid_service::UuidService,
    ServiceError, ValidationFailureItem,
};
use tracing::info;
use uuid::Uuid;

const CUT_OFF_SERVICE_PROCESS: &str = "cut-off-service";

gen_service_impl! {
    struct CutOffServiceImpl: CutOffService = CutOffServiceDeps {
        CutOffDao: CutOffDao<Transaction = Self::Transaction> = cut_off_dao,
        UuidService: UuidService = uuid_service,
        ClockService: ClockService = clock_service,
        TransactionDao: TransactionDao<Transaction = Self::Transaction> = transaction_dao
    }
}

fn validate(period: &CutOffPeriod) -> Result<(), ServiceError> {
    if period.label.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            [ValidationFailureItem::InvalidValue("label".into())].into(),
        ));
    }
    if period.start_date >= period.end_date {
        return Err(ServiceError::DateOrderWrong(
            period.start_date,
            period.end_date,
        ));
    }
    Ok(())
}

impl<Deps: CutOffServiceDeps> CutOffServiceImpl<Deps> {
    async fn find_live(
        &self,
        id: Uuid,
        tx: Deps::Transaction,
    ) -> Result<CutOffEntity, ServiceError> {
        self.cut_off_dao
            .find_by_id(id, tx)
            .await?
            .filter(|entity| entity.deleted.is_none())
            .ok_or(ServiceError::EntityNotFound(id))
    }

    async fn store_active(
        &self,
        id: Uuid,
        active: Option<bool>,
        tx: Deps::Transaction,
    ) -> Result<CutOffPeriod, ServiceError> {
        let current = CutOffPeriod::from(self.find_live(id, tx.clone()).await?);
        let is_active = active.unwrap_or(!current.is_active);
        let period = CutOffPeriod {
            is_active,
            version: self.uuid_service.new_uuid("cut-off-version"),
            ..current
        };
        info!(cut_off_id = %id, is_active, "Change active state of cut-off period");
        self.cut_off_dao
            .update(
                &CutOffEntity::try_from(&period)?,
                CUT_OFF_SERVICE_PROCESS,
                tx,
            )
            .await?;
        Ok(period)
    }
}

#[async_trait]
impl<Deps: CutOffServiceDeps> CutOffService for CutOffServiceImpl<Deps> {
    type Transaction = Deps::Transaction;

    async fn get_all(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<Arc<[CutOffPeriod]>, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let periods = self
            .cut_off_dao
            .find_all(tx.clone())
            .await?
            .iter()
            .map(CutOffPeriod::from)
            .collect();
        self.transaction_dao.commit(tx).await?;
        Ok(periods)
    }

    async fn get(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let period = CutOffPeriod::from(self.find_live(id, tx.clone()).await?);
        self.transaction_dao.commit(tx).await?;
        Ok(period)
    }

    async fn get_selection(
        &self,
        tx: Option<Self::Transaction>,
    ) -> Result<PeriodSelection, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let periods = self.get_all(Some(tx.clone())).await?;
        self.transaction_dao.commit(tx).await?;
        Ok(resolve_periods(&periods))
    }

    async fn create(
        &self,
        period: &CutOffPeriod,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        if period.id != Uuid::nil() {
            return Err(ServiceError::IdSetOnCreate);
        }
        if period.version != Uuid::nil() {
            return Err(ServiceError::VersionSetOnCreate);
        }
        validate(period)?;

        let period = CutOffPeriod {
            id: self.uuid_service.new_uuid("cut-off-id"),
            created: Some(self.clock_service.date_time_now()),
            deleted: None,
            version: self.uuid_service.new_uuid("cut-off-version"),
            ..period.clone()
        };
        info!(cut_off_id = %period.id, label = %period.label, "Create cut-off period");
        self.cut_off_dao
            .create(
                &CutOffEntity::try_from(&period)?,
                CUT_OFF_SERVICE_PROCESS,
                tx.clone(),
            )
            .await?;

        self.transaction_dao.commit(tx).await?;
        Ok(period)
    }

    async fn update(
        &self,
        period: &CutOffPeriod,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        validate(period)?;
        let persisted = self.find_live(period.id, tx.clone()).await?;
        if period.version != persisted.version {
            return Err(ServiceError::EntityConflicts(
                period.id,
                persisted.version,
                period.version,
            ));
        }

        let period = CutOffPeriod {
            created: Some(persisted.created),
            deleted: None,
            version: self.uuid_service.new_uuid("cut-off-version"),
            ..period.clone()
        };
        self.cut_off_dao
            .update(
                &CutOffEntity::try_from(&period)?,
                CUT_OFF_SERVICE_PROCESS,
                tx.clone(),
            )
            .await?;

        self.transaction_dao.commit(tx).await?;
        Ok(period)
    }

    async fn delete(&self, id: Uuid, tx: Option<Self::Transaction>) -> Result<(), ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let mut entity = self.find_live(id, tx.clone()).await?;
        entity.deleted = Some(self.clock_service.date_time_now());
        entity.version = self.uuid_service.new_uuid("cut-off-version");
        info!(cut_off_id = %id, "Delete cut-off period");
        self.cut_off_dao
            .update(&entity, CUT_OFF_SERVICE_PROCESS, tx.clone())
            .await?;
        self.transaction_dao.commit(tx).await?;
        Ok(())
    }

    async fn set_active(
        &self,
        id: Uuid,
        active: bool,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let period = self.store_active(id, Some(active), tx.clone()).await?;
        self.transaction_dao.commit(tx).await?;
        Ok(period)
    }

    async fn toggle_active(
        &self,
        id: Uuid,
        tx: Option<Self::Transaction>,
    ) -> Result<CutOffPeriod, ServiceError> {
        let tx = self.transaction_dao.use_transaction(tx).await?;
        let period = self.store_active(id, None, tx.clone()).await?;
        self.transaction_dao.commit(tx).await?;
        Ok(period)
    }
}
