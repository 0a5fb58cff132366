mod repo;

pub use repo::{find_top_of_repo, is_repo};
