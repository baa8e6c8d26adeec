use crate::data::order::OrderRepository;
use crate::model::order::{CreateOrderParams, OrderChanges};
use chrono::{Duration, Utc};
use entity::order::OrderStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_changes;
mod create;
mod find_owned;
mod set_status;
