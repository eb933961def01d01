//! Port contracts for workbasket access control.

mod access_items;

pub use access_items::{
    WorkbasketAccessRepository, WorkbasketAccessRepositoryError, WorkbasketAccessResult,
};
