use crate::server::data::headcount::HeadcountRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
