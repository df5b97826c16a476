pub mod explore;
pub mod home;
pub mod house_detail;
pub mod profile;
pub mod signin;
pub mod signup;
pub mod welcome;

pub use explore::{explore_page, ExploreVm};
pub use home::{fetch_error_page, home_page, HomeVm};
pub use house_detail::{house_detail_page, unlock_result_page, GateStatus, HouseDetailVm, UnlockOutcome};
pub use profile::profile_page;
pub use signin::signin_page;
pub use signup::signup_page;
pub use welcome::welcome_page;
