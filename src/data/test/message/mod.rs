use crate::data::message::MessageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_for_user;
