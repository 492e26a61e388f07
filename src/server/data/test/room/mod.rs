use crate::server::data::room::RoomRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_all;
mod lock_for_update;
