mod home;
pub use home::Home;

mod what_is_lia;
pub use what_is_lia::WhatIsLia;

mod request_demo;
pub use request_demo::RequestDemo;

mod not_found;
pub use not_found::PageNotFound;
