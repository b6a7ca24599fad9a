use crate::{
    model::sport::{Day, Schedule, Sport, Time},
    server::{
        data::sport::{SportRepository, SportsRepository},
        error::AppError,
        model::sport::ScheduleLookup,
    },
};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, sport::schedule_document},
};

mod get;

fn monday_morning() -> Schedule {
    Schedule::new(Time::new(10, 0), Time::new(12, 0), Day::Monday)
}

fn friday_evening() -> Schedule {
    Schedule::new(Time::new(18, 30), Time::new(20, 0), Day::Friday)
}
