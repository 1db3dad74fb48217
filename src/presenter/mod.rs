pub mod bid_list;
pub mod status;
