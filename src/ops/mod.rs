pub mod member_ops;
pub mod availability_ops;
pub mod meeting_ops;
