use crate::{data::equipment::EquipmentRepository, model::equipment::EquipmentFilter};
use entity::equipment::EquipmentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
