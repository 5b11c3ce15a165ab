mod start;
pub use start::Start;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod terms;
pub use terms::Terms;

mod privacy;
pub use privacy::Privacy;

mod search;
pub use search::Search;

mod user;
pub use user::User;

mod year;
pub use year::Year;

mod month;
pub use month::Month;

mod day;
pub use day::Day;
