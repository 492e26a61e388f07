use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{NewReservationParam, UpdateReservationParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::future_date};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod get_all_new;
mod set_processed;
mod update;
