use crate::data::team_member::TeamMembershipRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_team;
mod team_ids_for_user;
