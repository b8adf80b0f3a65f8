/// Default base URL for the T3 API
pub const DEFAULT_BASE_URL: &str = "https://api.trackandtrace.tools";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Default page size for listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 500;
/// Default directory for CSV and PDF output
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = "t3-client/0.1.0";
/// The one Metrc hostname that requires an OTP at login
pub const OTP_HOSTNAME: &str = "mi.metrc.com";
