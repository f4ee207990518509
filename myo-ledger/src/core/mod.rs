pub mod access;
pub mod ledger;
