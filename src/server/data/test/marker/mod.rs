use crate::server::data::marker::MarkerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_coordinates;
