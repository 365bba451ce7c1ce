pub mod infer;
pub mod tag;
pub mod title;
