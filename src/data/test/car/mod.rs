use crate::data::car::CarRepository;
use crate::model::car::{CreateCarParams, UpdateCarParams};
use entity::car::Transmission;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod release_unit;
mod reserve_unit;
mod update;
