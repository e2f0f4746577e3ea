use crate::server::{data::dealer::DealerRepository, model::dealer::CreateDealerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod taken;
