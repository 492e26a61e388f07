use crate::server::{
    data::room_restriction::RoomRestrictionRepository,
    model::reservation::{NewRoomRestrictionParam, RestrictionKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::future_date};

mod create;
mod delete_block;
mod get_available_rooms;
mod get_for_room_by_date;
mod insert_block;
mod is_room_available;
