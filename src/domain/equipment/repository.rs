//! Equipment catalog lookup interface

use async_trait::async_trait;

use super::model::Equipment;
use crate::domain::DomainResult;

#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Equipment>>;
}
