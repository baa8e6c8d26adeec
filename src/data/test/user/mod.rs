use crate::data::user::UserRepository;
use entity::user::AccountStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod find_with_role;
mod set_account_status;
