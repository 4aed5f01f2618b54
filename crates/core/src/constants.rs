/// Number of entries a per-type cache holds before it is flushed
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Environment variable overriding the cache capacity
pub const CACHE_CAPACITY_ENV: &str = "SHARESAPP_CACHE_CAPACITY";

pub const COMPANY_NOT_FOUND_MESSAGE: &str = "There is no company with id = ";
pub const SHARE_NOT_FOUND_MESSAGE: &str = "There is no share with id = ";
pub const USER_NOT_FOUND_MESSAGE: &str = "There is no user with id = ";

pub const NO_COMPANIES_MESSAGE: &str = "There are no companies";
pub const NO_SHARES_MESSAGE: &str = "There are no shares";
pub const NO_USERS_MESSAGE: &str = "There are no users";
pub const NO_HOLDERS_MESSAGE: &str = "There are no holders";
