pub mod add;
pub mod branch;
pub mod commit;
pub mod push;
pub mod status;
