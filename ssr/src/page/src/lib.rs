pub mod about_us;
pub mod contact;
pub mod dashboard;
pub mod err;
pub mod faqs;
pub mod login;
pub mod logout;
pub mod otp_verify;
pub mod referrals;
pub mod rewards;
pub mod root;
pub mod services;
pub mod signup;
pub mod team;
